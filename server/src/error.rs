use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use common::Locale;
use fetcher::FetchError;
use thiserror::Error;

use crate::render;

#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Page not found: {0}")]
    NotFound(String),
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

/// A failed page, rendered in the visitor's language.
#[derive(Debug)]
pub struct ErrorResponse {
    pub locale: Locale,
    pub error: PageError,
}

impl ErrorResponse {
    pub fn new(locale: Locale, error: impl Into<PageError>) -> Self {
        Self {
            locale,
            error: error.into(),
        }
    }

    pub fn not_found(locale: Locale, path: impl Into<String>) -> Self {
        Self::new(locale, PageError::NotFound(path.into()))
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        let status = self.error.status();
        if status.is_server_error() {
            tracing::error!(locale = %self.locale, error = %self.error, "Rendering error page");
        } else {
            tracing::debug!(locale = %self.locale, error = %self.error, "Page not found");
        }
        let body = render::error_page(self.locale, &self.error.to_string());
        (status, Html(body)).into_response()
    }
}

/// Attaches the locale the error page should use.
pub trait InLocale<T> {
    fn in_locale(self, locale: Locale) -> Result<T, ErrorResponse>;
}

impl<T, E: Into<PageError>> InLocale<T> for Result<T, E> {
    fn in_locale(self, locale: Locale) -> Result<T, ErrorResponse> {
        self.map_err(|e| ErrorResponse::new(locale, e))
    }
}
