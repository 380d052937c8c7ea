//! Job board web front end.
//!
//! Renders localized, paginated job listings and the filter panel on the
//! server, backed by the jobs API through [`fetcher::ApiClient`].

pub mod config;
pub mod error;
pub mod i18n;
pub mod render;
pub mod routes;

pub use config::AppConfig;
pub use routes::{AppState, router};
