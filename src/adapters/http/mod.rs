//! HTTP adapters - axum endpoints.

pub mod page;

pub use page::{page_routes, PageAppState};
