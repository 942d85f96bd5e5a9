use leptos::*;

use crate::{api::SuccessStory, config::resolve_image_url};

#[component]
pub fn StoryCard(
    story: SuccessStory,
    #[prop(into)] asset_base_url: String,
    on_approve: Callback<String>,
    on_reject: Callback<String>,
) -> impl IntoView {
    let image = story.image_path().map(|path| {
        let src = resolve_image_url(&asset_base_url, path);
        let alt = format!("Photo submitted by {}", story.rname);
        view! {
            <img class="w-full h-48 object-cover" src=src alt=alt />
        }
    });
    let approve_id = story.story_id.clone();
    let reject_id = story.story_id.clone();

    view! {
        <article
            class="bg-surface-elevated overflow-hidden shadow rounded-lg flex flex-col"
            data-story-id=story.story_id.clone()
        >
            {image}
            <div class="px-4 py-5 sm:p-6 flex-1 space-y-2">
                <div class="flex items-center justify-between gap-2">
                    <h3 class="text-lg font-medium text-fg">{story.rname}</h3>
                    <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-status-neutral-bg text-status-neutral-text">
                        {story.domain}
                    </span>
                </div>
                <p class="text-sm text-fg-muted whitespace-pre-line">{story.story_text}</p>
            </div>
            <div class="px-4 py-3 bg-surface-muted flex justify-end space-x-2">
                <button
                    class="px-3 py-1 rounded bg-action-danger-bg text-action-danger-text"
                    on:click=move |_| on_reject.call(reject_id.clone())
                >
                    "Reject"
                </button>
                <button
                    class="px-3 py-1 rounded bg-action-primary-bg text-action-primary-text"
                    on:click=move |_| on_approve.call(approve_id.clone())
                >
                    "Approve"
                </button>
            </div>
        </article>
    }
}
