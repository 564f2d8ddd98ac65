use thiserror::Error;

/// Everything that can end a hook run early.
///
/// Every variant maps to exit code 1; only a delivered notification exits 0.
/// The exit-code mapping lives in `main` alone — library code only returns
/// these.
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Stdin could not be read, or was not valid UTF-8.
    #[error("failed to read event from stdin: {0}")]
    Input(#[from] std::io::Error),

    /// Stdin was not a JSON object.
    #[error("invalid event JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// A required environment variable is absent or empty.
    #[error("{0} is not set")]
    MissingEnv(&'static str),

    /// The push request never completed: connection error or the 10s timeout.
    #[error("LINE push request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// LINE answered with a non-success status.
    #[error("LINE push rejected: HTTP {status}: {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}
