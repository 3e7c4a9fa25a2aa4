use thiserror::Error;

/// Failure of the existence probe against the static file host.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("unexpected status {0}")]
    Status(u16),

    #[error("request failed: {0}")]
    Transport(String),
}

/// Failure of the platform download capability.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct DownloadError(pub String);

/// Errors that end a submission attempt.
///
/// The `Display` output is exactly what the form shows to the candidate.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("Please fill in all fields")]
    MissingFields,

    /// Non-2xx status and network failure read the same to the candidate;
    /// the inner error is kept for logs.
    #[error("File not found")]
    Retrieval(#[source] ProbeError),

    #[error("Download failed: {0}")]
    Download(#[from] DownloadError),
}

impl From<ProbeError> for SubmissionError {
    fn from(err: ProbeError) -> Self {
        SubmissionError::Retrieval(err)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid portal configuration: {0}")]
    Parse(#[from] serde_json::Error),
}
