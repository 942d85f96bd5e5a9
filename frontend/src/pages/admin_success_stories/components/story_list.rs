use leptos::*;

use super::story_card::StoryCard;
use crate::{
    components::{empty_state::EmptyState, layout::LoadingSpinner},
    pages::admin_success_stories::utils::PendingStoriesState,
};

pub const EMPTY_STATE_TITLE: &str = "No pending success stories";

#[component]
pub fn PendingStoriesList(
    #[prop(into)] state: Signal<PendingStoriesState>,
    #[prop(into)] asset_base_url: String,
    on_approve: Callback<String>,
    on_reject: Callback<String>,
) -> impl IntoView {
    let loading = Signal::derive(move || state.with(|s| s.is_loading()));
    let empty = Signal::derive(move || state.with(|s| s.shows_empty_state()));

    view! {
        <Show when=move || loading.get()>
            <div class="flex items-center gap-2 text-sm text-fg-muted">
                <LoadingSpinner />
                <span>"Loading pending stories..."</span>
            </div>
        </Show>
        <Show when=move || empty.get()>
            <EmptyState
                title=EMPTY_STATE_TITLE
                description="New submissions will show up here for review."
            />
        </Show>
        <Show when=move || !loading.get() && !empty.get()>
            <div class="grid gap-6 sm:grid-cols-2 lg:grid-cols-3">
                {
                    let asset_base_url = asset_base_url.clone();
                    move || {
                        state
                            .get()
                            .stories
                            .into_iter()
                            .map(|story| {
                                view! {
                                    <StoryCard
                                        story=story
                                        asset_base_url=asset_base_url.clone()
                                        on_approve=on_approve
                                        on_reject=on_reject
                                    />
                                }
                            })
                            .collect_view()
                    }
                }
            </div>
        </Show>
    }
}
