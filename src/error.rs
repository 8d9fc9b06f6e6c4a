//! Error types for tmdb-movies

use thiserror::Error;

/// Result type alias for tmdb-movies operations
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a run can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Category selector outside the fixed set
    #[error("Invalid movie type specified: {0}")]
    InvalidCategory(String),

    /// Upstream answered with a non-success HTTP status
    #[error("API request failed: {status} {message}")]
    ApiRequestFailed { status: u16, message: String },

    /// Transport or payload failure while talking to the upstream API
    #[error("Failed to fetch data: {0}")]
    FetchFailed(String),

    #[error("No movie data provided to write.")]
    EmptyInput,

    /// Directory creation or file write failed while saving CSV
    #[error("Failed to write CSV file: {0}")]
    WriteFailed(String),

    /// Save filename is empty, traverses upward, or escapes the output root
    #[error("Invalid save path: {0}")]
    InvalidSavePath(String),

    #[error("{0} environment variable is not set.")]
    MissingCredential(&'static str),

    /// Malformed command line (also carries help/version output)
    #[error(transparent)]
    Argument(#[from] clap::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::FetchFailed(err.to_string())
    }
}
