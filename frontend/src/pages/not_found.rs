use leptos::*;
use leptos_meta::Title;

use crate::components::layout::ErrorMessage;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not found" />
        <ErrorMessage message="Page not found" />
        <a href="/" class="text-link hover:text-link-hover text-sm">"Back to home"</a>
    }
}
