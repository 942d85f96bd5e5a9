use reqwest::StatusCode;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessStory {
    #[serde(deserialize_with = "deserialize_story_id")]
    pub story_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub rname: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub domain: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub story_text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl SuccessStory {
    /// Stored relative image path, if the submission carried a usable one.
    pub fn image_path(&self) -> Option<&str> {
        self.image_url
            .as_deref()
            .map(str::trim)
            .filter(|path| !path.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StoryIdRepr {
    Text(String),
    Number(i64),
}

// Backends disagree on whether ids are numeric; the UI only ever echoes them back in paths.
fn deserialize_story_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match StoryIdRepr::deserialize(deserializer)? {
        StoryIdRepr::Text(value) => value,
        StoryIdRepr::Number(value) => value.to_string(),
    })
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[error("{error}")]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub details: Option<Value>,
}

impl ApiError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "VALIDATION_ERROR".to_string(),
            details: None,
        }
    }

    pub fn unknown(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNKNOWN".to_string(),
            details: None,
        }
    }

    pub fn request_failed(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "REQUEST_FAILED".to_string(),
            details: None,
        }
    }

    pub fn unauthorized(msg: impl Into<String>) -> Self {
        Self {
            error: msg.into(),
            code: "UNAUTHORIZED".to_string(),
            details: None,
        }
    }

    pub fn http_status(status: StatusCode) -> Self {
        Self {
            error: format!("Request failed with status {}", status.as_u16()),
            code: "HTTP_ERROR".to_string(),
            details: Some(json!({ "status": status.as_u16() })),
        }
    }

    pub(crate) fn with_status_code(mut self, status: StatusCode) -> Self {
        if self.code.is_empty() {
            self.code = format!("HTTP_{}", status.as_u16());
        }
        self
    }
}
