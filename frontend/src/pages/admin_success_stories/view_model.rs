use super::{
    repository::SuccessStoriesRepository,
    utils::{ModerationDecision, ModerationPayload, PendingStoriesState, FETCH_ERROR_MESSAGE},
};
use crate::{
    api::ApiClient,
    state::toast::{notify_error, notify_success, use_toasts, ToastContext},
    utils::request_scope::RequestScope,
};
use leptos::*;
use std::rc::Rc;

/// Drives the pending list. Every successful approve/reject is followed by a
/// full reload from the server; the list is never edited locally.
#[derive(Clone)]
pub struct PendingStoriesController {
    repository: SuccessStoriesRepository,
    state: RwSignal<PendingStoriesState>,
    toasts: ToastContext,
    scope: RequestScope,
}

impl PendingStoriesController {
    pub fn new(
        repository: SuccessStoriesRepository,
        state: RwSignal<PendingStoriesState>,
        toasts: ToastContext,
        scope: RequestScope,
    ) -> Self {
        Self {
            repository,
            state,
            toasts,
            scope,
        }
    }

    pub async fn fetch_pending_stories(&self) {
        if self.scope.is_closed() {
            return;
        }
        let Some(generation) = self.state.try_update(|state| state.begin_fetch()) else {
            return;
        };
        let Some(result) = self.scope.run(self.repository.fetch_pending()).await else {
            log::debug!("pending stories fetch dropped, page is gone");
            return;
        };
        let outcome = self
            .state
            .try_update(|state| state.finish_fetch_for(generation, result));
        if let Some(err) = outcome.flatten() {
            log::warn!("fetching pending stories failed [{}]: {}", err.code, err);
            notify_error(self.toasts, FETCH_ERROR_MESSAGE);
        }
    }

    pub async fn moderate(&self, payload: ModerationPayload) {
        let ModerationPayload { story_id, decision } = payload;
        let request = self.repository.moderate(&story_id, decision);
        let Some(result) = self.scope.run(request).await else {
            log::debug!("{:?} for story {} dropped, page is gone", decision, story_id);
            return;
        };
        match result {
            Ok(()) => {
                log::info!("{:?} succeeded for story {}", decision, story_id);
                notify_success(self.toasts, decision.success_message());
                self.fetch_pending_stories().await;
            }
            Err(err) => {
                log::warn!(
                    "{:?} failed for story {} [{}]: {}",
                    decision,
                    story_id,
                    err.code,
                    err
                );
                notify_error(self.toasts, decision.failure_message());
            }
        }
    }

    pub async fn approve(&self, story_id: &str) {
        self.moderate(ModerationPayload {
            story_id: story_id.to_string(),
            decision: ModerationDecision::Approve,
        })
        .await
    }

    pub async fn reject(&self, story_id: &str) {
        self.moderate(ModerationPayload {
            story_id: story_id.to_string(),
            decision: ModerationDecision::Reject,
        })
        .await
    }
}

#[derive(Clone, Copy)]
pub struct AdminSuccessStoriesViewModel {
    pub state: RwSignal<PendingStoriesState>,
    pub fetch_action: Action<(), ()>,
    pub moderate_action: Action<ModerationPayload, ()>,
}

pub fn use_admin_success_stories_view_model(
    client: Option<ApiClient>,
) -> AdminSuccessStoriesViewModel {
    let api = client
        .or_else(use_context::<ApiClient>)
        .unwrap_or_else(ApiClient::new);
    if !api.has_credentials() {
        log::warn!("success stories page has no credentials; requests will be rejected");
    }
    let repository = SuccessStoriesRepository::new_with_client(Rc::new(api));
    let state = create_rw_signal(PendingStoriesState::default());

    let scope = RequestScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.close());
    }

    let controller = PendingStoriesController::new(repository, state, use_toasts(), scope);

    let controller_for_fetch = controller.clone();
    let fetch_action = create_action(move |_: &()| {
        let controller = controller_for_fetch.clone();
        async move { controller.fetch_pending_stories().await }
    });

    let controller_for_moderation = controller;
    let moderate_action = create_action(move |payload: &ModerationPayload| {
        let controller = controller_for_moderation.clone();
        let payload = payload.clone();
        async move { controller.moderate(payload).await }
    });

    AdminSuccessStoriesViewModel {
        state,
        fetch_action,
        moderate_action,
    }
}
