use thiserror::Error;

/// What went wrong with a single request.
#[derive(Error, Debug)]
pub enum RequestError {
    #[error("HTTP error! status: {status} in {url}")]
    Status { status: u16, url: String },

    /// Status text of a rejected write.
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// A request failure tagged with the endpoint it was made against.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Failed fetching {endpoint}: {source}")]
    Get {
        endpoint: String,
        #[source]
        source: RequestError,
    },

    #[error("Failed posting {endpoint}: {source}")]
    Post {
        endpoint: String,
        #[source]
        source: RequestError,
    },

    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

impl FetchError {
    pub fn get(endpoint: impl Into<String>, source: impl Into<RequestError>) -> Self {
        FetchError::Get {
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }

    pub fn post(endpoint: impl Into<String>, source: impl Into<RequestError>) -> Self {
        FetchError::Post {
            endpoint: endpoint.into(),
            source: source.into(),
        }
    }

    pub fn endpoint(&self) -> Option<&str> {
        match self {
            FetchError::Get { endpoint, .. } | FetchError::Post { endpoint, .. } => Some(endpoint),
            FetchError::Client(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_error_names_endpoint_and_status() {
        let err = FetchError::get(
            "jobs",
            RequestError::Status {
                status: 500,
                url: "http://api/de/jobs".to_string(),
            },
        );
        assert_eq!(
            err.to_string(),
            "Failed fetching jobs: HTTP error! status: 500 in http://api/de/jobs"
        );
        assert_eq!(err.endpoint(), Some("jobs"));
    }

    #[test]
    fn post_error_carries_status_text() {
        let err = FetchError::post("likes", RequestError::Rejected("Not Found".to_string()));
        assert_eq!(err.to_string(), "Failed posting likes: Not Found");
    }
}
