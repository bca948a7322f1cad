//! Image list fetch errors

/// Errors that can occur while loading the image list.
///
/// These never escape the widget: they are logged and shown as a notice row.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Non-success HTTP response.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body.
        message: String,
    },

    /// Transport failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The body was not a JSON array of image descriptors.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },

    /// The configured URL could not be used.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The fetch task ended without reporting a result.
    #[error("Fetch task ended without a result")]
    Interrupted,
}

impl FetchError {
    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(body.into()),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}
