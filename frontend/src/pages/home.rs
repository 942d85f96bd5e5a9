use leptos::*;
use leptos_meta::Title;

use crate::router::ADMIN_SUCCESS_STORIES_PATH;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Success Stories" />
        <div class="max-w-7xl mx-auto py-12 px-4 sm:px-6 lg:px-8">
            <div class="text-center">
                <h1 class="text-4xl font-extrabold text-fg sm:text-5xl lg:text-6xl">
                    "Success Stories"
                </h1>
                <p class="mt-3 max-w-md mx-auto text-base text-fg-muted sm:text-lg lg:mt-5 lg:text-xl lg:max-w-3xl">
                    "Review community submissions before they are published."
                </p>
                <div class="mt-5 max-w-md mx-auto sm:flex sm:justify-center lg:mt-8">
                    <div class="rounded-md shadow">
                        <a href=ADMIN_SUCCESS_STORIES_PATH class="w-full flex items-center justify-center px-8 py-3 border border-transparent text-base font-medium rounded-md text-action-primary-text bg-action-primary-bg hover:bg-action-primary-bg_hover lg:py-4 lg:text-lg lg:px-10">
                            "Moderate pending stories"
                        </a>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn home_links_to_moderation() {
        let html = render_to_string(move || view! { <HomePage /> });
        assert!(html.contains("href=\"/admin/success-stories\""));
    }
}
