use crate::api::{ApiClient, ApiError, SuccessStory};
use std::rc::Rc;

use super::utils::ModerationDecision;

#[derive(Clone)]
pub struct SuccessStoriesRepository {
    client: Rc<ApiClient>,
}

impl Default for SuccessStoriesRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl SuccessStoriesRepository {
    pub fn new() -> Self {
        Self {
            client: Rc::new(ApiClient::new()),
        }
    }

    pub fn new_with_client(client: Rc<ApiClient>) -> Self {
        Self { client }
    }

    pub async fn fetch_pending(&self) -> Result<Vec<SuccessStory>, ApiError> {
        self.client.list_pending_success_stories().await
    }

    pub async fn moderate(
        &self,
        story_id: &str,
        decision: ModerationDecision,
    ) -> Result<(), ApiError> {
        match decision {
            ModerationDecision::Approve => self.client.approve_success_story(story_id).await,
            ModerationDecision::Reject => self.client.reject_success_story(story_id).await,
        }
    }
}
