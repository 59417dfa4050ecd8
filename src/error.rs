use std::path::PathBuf;
use thiserror::Error;

/// Failure of a single page fetch. Always carries the URL that was requested.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure: DNS, refused connection, timeout, body decoding
    #[error("{source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a 4xx or 5xx status
    #[error("HTTP error {status} for url ({url})")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

impl FetchError {
    /// The URL whose fetch failed
    pub fn url(&self) -> &str {
        match self {
            FetchError::Request { url, .. } | FetchError::Status { url, .. } => url,
        }
    }
}

/// Errors that abort a whole scan run
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("File '{}' not found.", .path.display())]
    FileNotFound { path: PathBuf },

    #[error("cannot read '{}': {source}", .path.display())]
    FileUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report: {0}")]
    Output(#[from] std::io::Error),

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}
