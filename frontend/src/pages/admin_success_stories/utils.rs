use crate::api::{ApiError, SuccessStory};

pub const FETCH_ERROR_MESSAGE: &str = "Error fetching pending stories";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationDecision {
    Approve,
    Reject,
}

impl ModerationDecision {
    pub fn success_message(self) -> &'static str {
        match self {
            ModerationDecision::Approve => "Story approved successfully",
            ModerationDecision::Reject => "Story rejected successfully",
        }
    }

    pub fn failure_message(self) -> &'static str {
        match self {
            ModerationDecision::Approve => "Error approving story",
            ModerationDecision::Reject => "Error rejecting story",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModerationPayload {
    pub story_id: String,
    pub decision: ModerationDecision,
}

pub fn build_moderation_payload(
    story_id: &str,
    decision: ModerationDecision,
) -> Result<ModerationPayload, ApiError> {
    let story_id = story_id.trim();
    if story_id.is_empty() {
        return Err(ApiError::validation("Story id is missing"));
    }
    Ok(ModerationPayload {
        story_id: story_id.to_string(),
        decision,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Local cache of the pending list. Only a successful fetch replaces `stories`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PendingStoriesState {
    pub stories: Vec<SuccessStory>,
    pub phase: LoadPhase,
    pub has_loaded: bool,
    generation: u64,
}

impl PendingStoriesState {
    pub fn is_loading(&self) -> bool {
        self.phase == LoadPhase::Loading
    }

    /// Marks a fetch as issued and returns its generation.
    pub fn begin_fetch(&mut self) -> u64 {
        self.phase = LoadPhase::Loading;
        self.generation += 1;
        self.generation
    }

    /// Like `finish_fetch`, but a result from a superseded fetch never touches
    /// the list or the phase. Its error is still handed back.
    pub fn finish_fetch_for(
        &mut self,
        generation: u64,
        result: Result<Vec<SuccessStory>, ApiError>,
    ) -> Option<ApiError> {
        if generation != self.generation {
            return result.err();
        }
        self.finish_fetch(result)
    }

    /// Applies a fetch result and hands back the error when it failed.
    pub fn finish_fetch(
        &mut self,
        result: Result<Vec<SuccessStory>, ApiError>,
    ) -> Option<ApiError> {
        match result {
            Ok(stories) => {
                self.stories = stories;
                self.phase = LoadPhase::Loaded;
                self.has_loaded = true;
                None
            }
            Err(err) => {
                self.phase = LoadPhase::Failed;
                Some(err)
            }
        }
    }

    pub fn shows_empty_state(&self) -> bool {
        !self.is_loading() && self.stories.is_empty()
    }

    pub fn pending_count(&self) -> Option<usize> {
        self.has_loaded.then_some(self.stories.len())
    }
}
