//! Data-fetch layer for the job board.
//!
//! A thin async client over the jobs API: GET for listings and filter
//! metadata, POST for write operations such as likes. GET responses can be
//! kept for a revalidation window.

pub mod cache;
pub mod client;
pub mod error;

pub use cache::{CachePolicy, ResponseCache};
pub use client::{ApiClient, Endpoint};
pub use error::{FetchError, RequestError, Result};
