use thiserror::Error;

/// Failure of a single MediaWiki API call.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body-read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Server answered with a non-success status.
    #[error("unexpected HTTP status {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// MediaWiki error envelope (`{"error": {"code": ..., "info": ...}}`).
    #[error("API error {code}: {info}")]
    Api { code: String, info: String },

    /// Body is not JSON of the expected shape.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("random pages not found")]
    EmptyResult,
}

/// Which step of the run failed. Display text is what the user sees.
#[derive(Debug, Error)]
pub enum StageError {
    #[error("error getting random articles: {0}")]
    RandomArticles(#[source] FetchError),

    #[error("error getting article summaries: {0}")]
    Summaries(#[source] FetchError),
}

impl StageError {
    pub fn fetch_error(&self) -> &FetchError {
        match self {
            StageError::RandomArticles(e) | StageError::Summaries(e) => e,
        }
    }
}
