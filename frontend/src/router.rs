use leptos::*;
use leptos_meta::provide_meta_context;
use leptos_router::*;

use crate::{
    api::{ApiClient, Credentials},
    components::layout::Layout,
    pages::{AdminSuccessStoriesPage, HomePage, NotFoundPage},
    state::toast::provide_toasts,
    utils::storage,
};

pub const HOME_PATH: &str = "/";
pub const ADMIN_SUCCESS_STORIES_PATH: &str = "/admin/success-stories";

pub const ROUTE_PATHS: &[&str] = &[HOME_PATH, ADMIN_SUCCESS_STORIES_PATH];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Builds the client every page shares. The token is read once here and
/// injected; pages never touch storage.
pub fn authenticated_client(token: Option<String>) -> ApiClient {
    let client = ApiClient::new();
    match token {
        Some(token) => client.with_credentials(Credentials::bearer(token)),
        None => {
            log::warn!("no access token in storage; admin requests will fail");
            client
        }
    }
}

pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_context(authenticated_client(storage::read_access_token()));
    provide_toasts();
    view! {
        <Router>
            <Layout>
                <Routes>
                    <Route path=HOME_PATH view=HomePage/>
                    <Route path=ADMIN_SUCCESS_STORIES_PATH view=AdminSuccessStoriesRoute/>
                    <Route path="/*any" view=NotFoundPage/>
                </Routes>
            </Layout>
        </Router>
    }
}

#[component]
fn AdminSuccessStoriesRoute() -> impl IntoView {
    view! { <AdminSuccessStoriesPage/> }
}
