#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::SuccessStory;

    pub fn story(id: &str, name: &str) -> SuccessStory {
        SuccessStory {
            story_id: id.into(),
            rname: name.into(),
            domain: "Education".into(),
            story_text: format!("{} finished the mentoring program.", name),
            image_url: None,
        }
    }

    pub fn story_with_image(id: &str, name: &str, image_url: &str) -> SuccessStory {
        SuccessStory {
            image_url: Some(image_url.into()),
            ..story(id, name)
        }
    }

    pub fn story_json(id: i64, name: &str) -> serde_json::Value {
        serde_json::json!({
            "story_id": id,
            "rname": name,
            "domain": "Education",
            "story_text": format!("{} finished the mentoring program.", name),
            "image_url": null
        })
    }
}
