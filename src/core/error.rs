use std::path::PathBuf;

use thiserror::Error;

/// The primary error type for all fallible operations in this crate.
#[derive(Debug, Error)]
pub enum FxError {
    /// The client configuration is unusable (missing API key, empty symbol, ...).
    #[error("configuration error: {0}")]
    Config(String),

    /// A provided URL could not be parsed.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// An error occurred during an HTTP request.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned an unsuccessful HTTP status code.
    #[error("Unexpected response status: {status} {reason} at {url}")]
    Status {
        /// The HTTP status code.
        status: u16,
        /// Canonical reason phrase for the status, if known.
        reason: String,
        /// The requested URL with the API key redacted.
        url: String,
    },

    /// The response body did not have the expected shape (no series object under the series key).
    #[error("unexpected response schema: {0}")]
    Schema(String),

    /// A value inside the series could not be interpreted (e.g. a date key that does not parse).
    #[error("invalid series data: {0}")]
    Data(String),

    /// Creating the output directory or writing the CSV file failed.
    #[error("failed to export {}: {source}", path.display())]
    Export {
        /// The file or directory that could not be written.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

/// Coarse failure categories callers can branch on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing credential or otherwise invalid client input.
    Config,
    /// Transport failure or non-success HTTP status.
    Fetch,
    /// The response lacked the expected series object.
    Schema,
    /// A series entry could not be parsed.
    Data,
    /// Directory or file I/O failure while exporting.
    Export,
}

impl FxError {
    /// Returns the category this error belongs to.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Config(_) | Self::Url(_) => ErrorKind::Config,
            Self::Http(_) | Self::Status { .. } => ErrorKind::Fetch,
            Self::Schema(_) => ErrorKind::Schema,
            Self::Data(_) => ErrorKind::Data,
            Self::Export { .. } => ErrorKind::Export,
        }
    }

    pub(crate) fn export(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Export {
            path: path.into(),
            source,
        }
    }
}
