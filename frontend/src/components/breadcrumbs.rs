use leptos::*;
use leptos_router::use_location;

use crate::utils::breadcrumbs::{build_breadcrumbs, HOME_HREF, HOME_LABEL};

/// Breadcrumb trail for the router's current location.
#[component]
pub fn Breadcrumbs() -> impl IntoView {
    let location = use_location();
    let pathname = Signal::derive(move || location.pathname.get());
    view! { <BreadcrumbTrail pathname=pathname /> }
}

#[component]
pub fn BreadcrumbTrail(#[prop(into)] pathname: MaybeSignal<String>) -> impl IntoView {
    let crumbs = Signal::derive(move || build_breadcrumbs(&pathname.get()));
    view! {
        <nav aria-label="Breadcrumb" class="mb-4">
            <ol class="flex flex-wrap items-center gap-2 text-sm text-fg-muted">
                <li>
                    <a href=HOME_HREF class="text-link hover:text-link-hover">{HOME_LABEL}</a>
                </li>
                {move || {
                    crumbs
                        .get()
                        .into_iter()
                        .map(|crumb| {
                            let body = if crumb.is_current {
                                view! {
                                    <span class="font-semibold text-fg" aria-current="page">
                                        {crumb.label}
                                    </span>
                                }
                                    .into_view()
                            } else {
                                view! {
                                    <a href=crumb.href class="text-link hover:text-link-hover">
                                        {crumb.label}
                                    </a>
                                }
                                    .into_view()
                            };
                            view! {
                                <li class="flex items-center gap-2">
                                    <span aria-hidden="true">"/"</span>
                                    {body}
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ol>
        </nav>
    }
}
