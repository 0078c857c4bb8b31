//! Error types for the backfill tool.

/// Errors that can occur while backfilling DOI links.
#[derive(Debug, thiserror::Error)]
pub enum BackfillError {
    /// HTTP request failed (network, timeout, etc.)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Crossref returned an error status code.
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Failed to parse a Crossref response.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// Failed to read or write the publications file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Publications file is not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for Results using [`BackfillError`].
pub type Result<T> = std::result::Result<T, BackfillError>;
