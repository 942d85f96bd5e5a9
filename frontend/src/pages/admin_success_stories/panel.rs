use leptos::*;
use leptos_meta::Title;

use super::{
    components::story_list::PendingStoriesList,
    utils::{build_moderation_payload, ModerationDecision},
    view_model::use_admin_success_stories_view_model,
};
use crate::{api::ApiClient, config, state::toast::{notify_error, use_toasts}};

#[component]
pub fn AdminSuccessStoriesPage(
    /// Authenticated client; falls back to the one provided by the app root.
    #[prop(optional)]
    client: Option<ApiClient>,
) -> impl IntoView {
    let vm = use_admin_success_stories_view_model(client);
    let toasts = use_toasts();
    let asset_base_url = config::asset_base_url();

    create_effect(move |_| untrack(move || vm.fetch_action.dispatch(())));

    let dispatch_decision = move |decision: ModerationDecision| {
        Callback::new(move |story_id: String| {
            match build_moderation_payload(&story_id, decision) {
                Ok(payload) => vm.moderate_action.dispatch(payload),
                Err(err) => {
                    log::warn!("refusing {:?}: {}", decision, err);
                    notify_error(toasts, decision.failure_message());
                }
            }
        })
    };
    let on_approve = dispatch_decision(ModerationDecision::Approve);
    let on_reject = dispatch_decision(ModerationDecision::Reject);

    let loading = Signal::derive(move || vm.state.with(|s| s.is_loading()));
    let count_label = move || {
        vm.state
            .with(|s| s.pending_count())
            .map(|count| format!("{} pending", count))
    };
    let on_refresh = move |_| vm.fetch_action.dispatch(());

    view! {
        <Title text="Pending Success Stories" />
        <section class="space-y-6">
            <div class="flex items-center justify-between gap-4">
                <div class="flex items-center gap-3">
                    <h2 class="text-2xl font-bold text-fg">"Pending Success Stories"</h2>
                    {move || count_label().map(|label| view! {
                        <span class="inline-flex items-center px-2.5 py-0.5 rounded-full text-xs font-medium bg-status-neutral-bg text-status-neutral-text">
                            {label}
                        </span>
                    })}
                </div>
                <button
                    class="px-3 py-1 rounded border border-border text-fg hover:bg-action-ghost-bg-hover disabled:opacity-50"
                    disabled=move || loading.get()
                    on:click=on_refresh
                >
                    "Refresh"
                </button>
            </div>
            <PendingStoriesList
                state=vm.state
                asset_base_url=asset_base_url
                on_approve=on_approve
                on_reject=on_reject
            />
        </section>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::{
        components::breadcrumbs::BreadcrumbTrail,
        pages::admin_success_stories::components::story_list::EMPTY_STATE_TITLE,
        test_support::ssr::render_to_string,
    };

    #[test]
    fn initial_render_shows_heading_and_empty_state() {
        let html = render_to_string(move || {
            let client = ApiClient::new_with_base_url("http://127.0.0.1:9/api");
            view! { <AdminSuccessStoriesPage client=client /> }
        });
        assert!(html.contains("Pending Success Stories"));
        assert!(html.contains("Refresh"));
        assert_eq!(html.matches(EMPTY_STATE_TITLE).count(), 1);
        assert!(!html.contains(" pending</span>"));
    }

    #[test]
    fn page_and_breadcrumbs_render_together() {
        let html = render_to_string(move || {
            view! {
                <div>
                    <BreadcrumbTrail pathname="/admin/success-stories".to_string() />
                    <AdminSuccessStoriesPage />
                </div>
            }
        });
        assert!(html.contains("href=\"/admin\""));
        assert!(html.contains("success stories"));
        assert!(html.contains("Pending Success Stories"));
    }
}
