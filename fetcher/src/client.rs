//! HTTP client for the jobs API.

use std::time::Duration;

use common::{Filters, Job, Locale, SearchParams};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};

use crate::cache::{CachePolicy, ResponseCache};
use crate::error::{FetchError, RequestError, Result};

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Read endpoints of the jobs API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Jobs,
    Filters,
}

impl Endpoint {
    pub fn as_str(&self) -> &'static str {
        match self {
            Endpoint::Jobs => "jobs",
            Endpoint::Filters => "filters",
        }
    }
}

#[derive(Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
    cache: ResponseCache,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: ResponseCache::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// `{base}/{locale}/{endpoint}` plus the query when there is one.
    pub fn url(&self, endpoint: &str, locale: Locale, query: &str) -> String {
        let mut url = format!("{}/{}/{}", self.base_url, locale, endpoint);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        url
    }

    /// GET /{locale}/jobs?{query}
    pub async fn get_jobs(
        &self,
        locale: Locale,
        search: &SearchParams,
        policy: CachePolicy,
    ) -> Result<Vec<Job>> {
        self.get_data(Endpoint::Jobs, locale, &search.to_query(), policy)
            .await
    }

    /// GET /{locale}/filters
    pub async fn get_filters(
        &self,
        locale: Locale,
        custom_board_id: Option<&str>,
        policy: CachePolicy,
    ) -> Result<Filters> {
        let search = SearchParams {
            custom_board_id: custom_board_id.map(str::to_string),
            ..Default::default()
        };
        self.get_data(Endpoint::Filters, locale, &search.to_query(), policy)
            .await
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        locale: Locale,
        query: &str,
        policy: CachePolicy,
    ) -> Result<T> {
        let url = self.url(endpoint.as_str(), locale, query);

        let body = match self.cache.lookup(&url, policy).await {
            Some(body) => {
                trace!(url = %url, "Serving cached response");
                body
            }
            None => {
                let body = self
                    .fetch_json(&url)
                    .await
                    .map_err(|e| FetchError::get(endpoint.as_str(), e))?;
                self.cache.store(&url, policy, &body).await;
                body
            }
        };

        serde_json::from_value(body).map_err(|e| FetchError::get(endpoint.as_str(), e))
    }

    async fn fetch_json(&self, url: &str) -> std::result::Result<Value, RequestError> {
        debug!(url = %url, "Fetching");

        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(RequestError::Status {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<Value>().await?)
    }

    /// POST /{locale}/{endpoint} with a JSON body; returns the JSON answer.
    pub async fn post_data<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        locale: Locale,
        data: &B,
    ) -> Result<Value> {
        let url = self.url(endpoint, locale, "");
        debug!(url = %url, "Posting");

        let response = self
            .client
            .post(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .json(data)
            .send()
            .await
            .map_err(|e| FetchError::post(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            let text = status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.as_u16().to_string());
            return Err(FetchError::post(endpoint, RequestError::Rejected(text)));
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| FetchError::post(endpoint, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_locale_and_endpoint() {
        let client = ApiClient::new("http://api.example/").unwrap();
        assert_eq!(client.base_url(), "http://api.example");
        assert_eq!(
            client.url("jobs", Locale::De, "limit=20"),
            "http://api.example/de/jobs?limit=20"
        );
        assert_eq!(
            client.url("filters", Locale::En, ""),
            "http://api.example/en/filters"
        );
    }
}
