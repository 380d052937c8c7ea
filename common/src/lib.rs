//! Shared job-board model and filter logic.
//!
//! Everything in here is synchronous and free of I/O so that both the
//! fetcher and the web server can reuse it.

pub mod active_filters;
pub mod board;
pub mod error;
pub mod filters;
pub mod job;
pub mod locale;
pub mod pagination;
pub mod panel;
pub mod query;

pub use active_filters::{ActiveFilters, FilterValue};
pub use board::CustomBoard;
pub use error::ParseError;
pub use filters::{Facet, FacetKind, Filters, Region, SalaryFacet, State, Tag};
pub use job::{Address, Employer, Job, Salary};
pub use locale::Locale;
pub use pagination::{PageParams, num_of_pages, offset, static_params};
pub use panel::{FilterPanel, OPEN_PARAM, OpenFilter, WORKLOAD_BOUNDS};
pub use query::SearchParams;
