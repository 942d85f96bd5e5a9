pub mod breadcrumbs;
pub mod request_scope;
pub mod storage;
