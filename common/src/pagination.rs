use serde::{Deserialize, Serialize};

use crate::Locale;

/// Pages needed to list `job_count` jobs; a board without jobs still has one page.
pub fn num_of_pages(job_count: usize, limit: u32) -> u32 {
    let limit = limit.max(1) as usize;
    job_count.max(1).div_ceil(limit) as u32
}

pub fn offset(page_index: u32, limit: u32) -> u32 {
    page_index.saturating_mul(limit)
}

/// Route parameters of one pre-rendered listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    pub locale: Locale,
    pub page_index: u32,
}

impl PageParams {
    pub fn path(&self) -> String {
        format!("/{}/{}", self.locale, self.page_index)
    }
}

/// Expands per-locale job counts into one entry per page.
pub fn static_params<I>(counts: I, limit: u32) -> Vec<PageParams>
where
    I: IntoIterator<Item = (Locale, usize)>,
{
    counts
        .into_iter()
        .flat_map(|(locale, count)| {
            (0..num_of_pages(count, limit)).map(move |page_index| PageParams { locale, page_index })
        })
        .collect()
}
