pub mod admin_success_stories;
pub mod home;
pub mod not_found;

pub use admin_success_stories::AdminSuccessStoriesPage;
pub use home::*;
pub use not_found::*;
