use leptos::*;

use crate::{
    components::breadcrumbs::Breadcrumbs, router::ADMIN_SUCCESS_STORIES_PATH,
    state::toast::ToastHost,
};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-surface-elevated shadow-sm border-b border-border">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <h1 class="text-xl font-semibold text-fg">
                        <a href="/">"Success Stories"</a>
                    </h1>
                    <nav class="flex space-x-4">
                        <a href=ADMIN_SUCCESS_STORIES_PATH class="text-fg-muted hover:text-fg px-3 py-2 rounded-md text-sm font-medium hover:bg-action-ghost-bg-hover">
                            "Moderation"
                        </a>
                    </nav>
                </div>
            </div>
        </header>
    }
}

/// Page frame. Must be rendered inside a `<Router>` because of the breadcrumbs.
#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="min-h-screen bg-surface">
            <Header/>
            <main class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <Breadcrumbs/>
                {children()}
            </main>
            <ToastHost/>
        </div>
    }
}

#[component]
pub fn LoadingSpinner() -> impl IntoView {
    view! {
        <div class="flex justify-center items-center p-8" role="status">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-action-primary-bg"></div>
        </div>
    }
}

#[component]
pub fn ErrorMessage(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded mb-4">
            <p class="text-sm">{message}</p>
        </div>
    }
}
