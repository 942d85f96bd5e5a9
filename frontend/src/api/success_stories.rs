use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use super::{
    client::{map_empty_response, map_typed_response, ApiClient},
    types::{ApiError, SuccessStory},
};

const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'\\');

fn story_path(base_url: &str, story_id: &str, action: &str) -> String {
    format!(
        "{}/success-stories/{}/{}",
        base_url,
        utf8_percent_encode(story_id, PATH_SEGMENT),
        action
    )
}

impl ApiClient {
    pub async fn list_pending_success_stories(&self) -> Result<Vec<SuccessStory>, ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|| {
                self.http_client()
                    .get(format!("{}/success-stories/pending", base_url))
            })
            .await?;
        map_typed_response(response).await
    }

    pub async fn approve_success_story(&self, story_id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|| {
                self.http_client()
                    .put(story_path(&base_url, story_id, "approve"))
            })
            .await?;
        map_empty_response(response).await
    }

    pub async fn reject_success_story(&self, story_id: &str) -> Result<(), ApiError> {
        let base_url = self.resolved_base_url().await;
        let response = self
            .send_authorized(|| {
                self.http_client()
                    .delete(story_path(&base_url, story_id, "reject"))
            })
            .await?;
        map_empty_response(response).await
    }
}
