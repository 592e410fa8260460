use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// A required argument was omitted or empty. Raised before any network I/O.
    #[error("missing required parameter: {0}")]
    MissingParameter(&'static str),

    /// One or more of the fixed credential headers is absent from the client
    /// configuration. Raised on every request, before any network I/O.
    #[error("The following required headers are missing: {}", .0.join(", "))]
    MissingHeaders(Vec<String>),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned an unexpected or unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// The URL that returned the error.
        url: String,
    },

    /// The response body could not be decoded as JSON.
    #[error("JSON decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// The response decoded but was missing an expected field.
    #[error("Data format unexpected or missing field: {0}")]
    Data(String),

    /// A provided URL or server-supplied cursor could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Writing the exported document to disk failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
