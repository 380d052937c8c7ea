//! Routes and handlers.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::{OriginalUri, Path, RawQuery, State},
    http::{HeaderMap, Uri, header},
    response::{Html, Redirect},
    routing::{get, post},
};
use common::{
    ActiveFilters, FilterPanel, Filters, Locale, OPEN_PARAM, OpenFilter, SearchParams, offset,
    query,
};
use fetcher::{ApiClient, CachePolicy};
use serde::Deserialize;
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::AppConfig;
use crate::error::{ErrorResponse, InLocale};
use crate::render::{self, ListingView, jobs::Pager};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub api: ApiClient,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(config: AppConfig) -> fetcher::Result<Self> {
        let api = ApiClient::new(config.server_url.clone())?;
        Ok(Self {
            api,
            config: Arc::new(config),
        })
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/{locale}", get(index_handler))
        .route("/{locale}/filtered", get(filtered_handler))
        .route("/{locale}/apply", get(apply_handler))
        .route("/{locale}/likes", post(like_handler))
        .route("/{locale}/{page_index}", get(page_handler))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn parse_locale(state: &AppState, raw: &str) -> Result<Locale, ErrorResponse> {
    raw.parse()
        .map_err(|_| ErrorResponse::not_found(state.config.default_locale, format!("/{raw}")))
}

fn open_filter(raw_query: Option<&str>) -> OpenFilter {
    let param = raw_query.and_then(|q| query::param(q, OPEN_PARAM));
    OpenFilter::from_param(param.as_deref())
}

fn current_path(uri: &OriginalUri) -> String {
    uri.0
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.0.path().to_string())
}

/// Filters for the section, skipped entirely when the board hides them.
async fn fetch_filters(
    state: &AppState,
    locale: Locale,
    policy: CachePolicy,
) -> fetcher::Result<Option<Filters>> {
    let board = &state.config.custom_board;
    if board.hide_all_filters {
        return Ok(None);
    }
    state
        .api
        .get_filters(locale, board.id.as_deref(), policy)
        .await
        .map(Some)
}

/// Handler for GET /
async fn root_handler(State(state): State<AppState>, headers: HeaderMap) -> Redirect {
    let locale = headers
        .get(header::ACCEPT_LANGUAGE)
        .and_then(|value| value.to_str().ok())
        .and_then(Locale::from_accept_language)
        .unwrap_or(state.config.default_locale);
    Redirect::to(&format!("/{locale}"))
}

/// Handler for GET /{locale}
async fn index_handler(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    RawQuery(raw_query): RawQuery,
    uri: OriginalUri,
) -> Result<Html<String>, ErrorResponse> {
    let locale = parse_locale(&state, &locale)?;
    listing_page(&state, locale, 0, raw_query.as_deref(), &current_path(&uri)).await
}

/// Handler for GET /{locale}/{page_index}
async fn page_handler(
    State(state): State<AppState>,
    Path((locale, page_index)): Path<(String, String)>,
    RawQuery(raw_query): RawQuery,
    uri: OriginalUri,
) -> Result<Html<String>, ErrorResponse> {
    let locale = parse_locale(&state, &locale)?;
    let page_index: u32 = page_index
        .parse()
        .map_err(|_| ErrorResponse::not_found(locale, uri.0.path()))?;
    listing_page(&state, locale, page_index, raw_query.as_deref(), &current_path(&uri)).await
}

async fn listing_page(
    state: &AppState,
    locale: Locale,
    page_index: u32,
    raw_query: Option<&str>,
    current_path: &str,
) -> Result<Html<String>, ErrorResponse> {
    let config = &state.config;
    let board = &config.custom_board;
    let limit = config.jobs_limit;
    let policy = CachePolicy::Revalidate(config.revalidate());

    let search = SearchParams {
        employer_name: board.employer_name_filter.clone(),
        offset: Some(offset(page_index, limit)),
        limit: Some(limit),
        ..Default::default()
    };
    let (filters, jobs) = tokio::try_join!(
        fetch_filters(state, locale, policy),
        state.api.get_jobs(locale, &search, policy),
    )
    .in_locale(locale)?;

    info!(locale = %locale, page_index, jobs = jobs.len(), "Rendering listing page");

    let pager = Pager {
        previous: (page_index > 0).then(|| format!("/{locale}/{}", page_index - 1)),
        next: (jobs.len() as u32 >= limit).then(|| format!("/{locale}/{}", page_index + 1)),
        more: None,
    };
    let panel = FilterPanel::new(locale, ActiveFilters::new()).with_open(open_filter(raw_query));

    Ok(Html(render::listing_page(&ListingView {
        locale,
        filters: filters.as_ref(),
        panel: &panel,
        board,
        jobs: &jobs,
        pager,
        current_path,
    })))
}

/// Handler for GET /{locale}/filtered?{filters}
async fn filtered_handler(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    RawQuery(raw_query): RawQuery,
    uri: OriginalUri,
) -> Result<Html<String>, ErrorResponse> {
    let locale = parse_locale(&state, &locale)?;
    let config = &state.config;
    let board = &config.custom_board;
    let raw_query = raw_query.unwrap_or_default();

    let mut search = SearchParams::from_query(&raw_query);
    let limit = search.limit.unwrap_or(config.jobs_limit).max(1);
    search.limit = Some(limit);
    search.custom_board_id = board.id.clone();

    let (filters, jobs) = tokio::try_join!(
        fetch_filters(&state, locale, CachePolicy::ForceCache),
        state.api.get_jobs(locale, &search, CachePolicy::NoStore),
    )
    .in_locale(locale)?;

    info!(locale = %locale, filters = search.filters.len(), jobs = jobs.len(), "Rendering filtered page");

    let panel = FilterPanel::new(locale, search.filters.clone())
        .with_open(open_filter(Some(&raw_query)));
    let more = (jobs.len() as u32 >= limit).then(|| {
        let grown = SearchParams {
            limit: Some(limit + config.jobs_limit),
            filters: search.filters.clone(),
            ..Default::default()
        };
        format!("/{locale}/filtered?{}", grown.to_query())
    });

    Ok(Html(render::listing_page(&ListingView {
        locale,
        filters: filters.as_ref(),
        panel: &panel,
        board,
        jobs: &jobs,
        pager: Pager {
            more,
            ..Default::default()
        },
        current_path: &current_path(&uri),
    })))
}

/// Handler for GET /{locale}/apply, where the filter form submits to.
async fn apply_handler(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    RawQuery(raw_query): RawQuery,
) -> Result<Redirect, ErrorResponse> {
    let locale = parse_locale(&state, &locale)?;
    let panel = FilterPanel::submitted(locale, raw_query.as_deref().unwrap_or_default());
    Ok(Redirect::to(&panel.apply_href()))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct LikeForm {
    job_id: u64,
    back: Option<String>,
}

/// Only same-site paths under the current locale are followed after a like.
fn safe_back(back: Option<&str>, locale: Locale) -> String {
    let home = format!("/{locale}");
    back.filter(|path| !path.contains('\\'))
        .and_then(|path| path.parse::<Uri>().ok())
        .filter(|uri| uri.scheme().is_none() && uri.authority().is_none())
        .filter(|uri| uri.path() == home || uri.path().starts_with(&format!("{home}/")))
        .and_then(|uri| uri.path_and_query().map(|pq| pq.as_str().to_string()))
        .unwrap_or(home)
}

/// Handler for POST /{locale}/likes
async fn like_handler(
    State(state): State<AppState>,
    Path(locale): Path<String>,
    Form(form): Form<LikeForm>,
) -> Result<Redirect, ErrorResponse> {
    let locale = parse_locale(&state, &locale)?;
    state
        .api
        .post_data("likes", locale, &json!({ "jobId": form.job_id }))
        .await
        .in_locale(locale)?;

    info!(locale = %locale, job_id = form.job_id, "Liked job");
    Ok(Redirect::to(&safe_back(form.back.as_deref(), locale)))
}

async fn fallback_handler(State(state): State<AppState>, uri: OriginalUri) -> ErrorResponse {
    let locale = uri
        .0
        .path()
        .trim_start_matches('/')
        .split('/')
        .next()
        .and_then(|segment| segment.parse().ok())
        .unwrap_or(state.config.default_locale);
    ErrorResponse::not_found(locale, uri.0.path())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_link_stays_on_site() {
        assert_eq!(safe_back(Some("/de/2"), Locale::De), "/de/2");
        assert_eq!(safe_back(Some("//evil.example"), Locale::De), "/de");
        assert_eq!(safe_back(Some("https://evil.example"), Locale::Fr), "/fr");
        assert_eq!(safe_back(None, Locale::En), "/en");
    }

    #[test]
    fn back_link_rejects_backslash_and_other_locales() {
        assert_eq!(safe_back(Some("/\\evil.example"), Locale::De), "/de");
        assert_eq!(safe_back(Some("/\\/evil.example"), Locale::De), "/de");
        assert_eq!(safe_back(Some("/fr/1"), Locale::De), "/de");
        assert_eq!(safe_back(Some("/deutsch"), Locale::De), "/de");
        assert_eq!(
            safe_back(Some("/de/filtered?states%5B%5D=3"), Locale::De),
            "/de/filtered?states%5B%5D=3"
        );
        assert_eq!(safe_back(Some("/de"), Locale::De), "/de");
    }

    #[test]
    fn open_filter_from_query() {
        assert_eq!(open_filter(Some("open=all&salary=1")), OpenFilter::All);
        assert_eq!(open_filter(None), OpenFilter::None);
    }
}
