use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum BriefError {
    /// A required setting (API key, model name) is missing or invalid.
    ///
    /// Always fatal; raised before any network call is made.
    #[error("configuration error: {0}")]
    Config(String),

    /// The caller supplied input the adapter cannot work with (e.g. an empty
    /// symbol list).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The remote rejected our credentials.
    #[error("authentication failed: {0}")]
    Auth(String),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The requested resource does not exist.
    #[error("resource not found at {url}")]
    NotFound {
        /// The URL that returned 404.
        url: String,
    },

    /// The remote is throttling us.
    #[error("rate limited at {url}")]
    RateLimited {
        /// The URL that returned 429.
        url: String,
    },

    /// The server failed (5xx). Retried by the resilient-fetch wrapper.
    #[error("server error: {status} at {url}")]
    ServerError {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The server returned an unexpected, unsuccessful HTTP status code.
    #[error("unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// A response body could not be deserialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The data received was in an unexpected shape or missing a required field.
    #[error("data format unexpected or missing field: {0}")]
    Data(String),

    /// A provided URL could not be parsed.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),
}

impl BriefError {
    /// Whether the retry wrapper may re-attempt the operation that produced
    /// this error.
    ///
    /// Client/configuration-class failures (4xx, bad credentials, bad input)
    /// are never retried. Transient failures (network, timeout, 5xx) and
    /// malformed response bodies are.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::ServerError { .. } | Self::Json(_) | Self::Data(_) => true,
            Self::Http(e) => e.is_timeout() || e.is_connect() || e.is_request() || e.is_body(),
            _ => false,
        }
    }
}

/// Map an unsuccessful HTTP status to the matching error variant.
pub(crate) fn status_error(status: u16, url: &url::Url) -> BriefError {
    let url = url.to_string();
    match status {
        401 | 403 => BriefError::Auth(format!("status {status} at {url}")),
        404 => BriefError::NotFound { url },
        429 => BriefError::RateLimited { url },
        500..=599 => BriefError::ServerError { status, url },
        _ => BriefError::Status { status, url },
    }
}
