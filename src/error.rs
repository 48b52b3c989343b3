use thiserror::Error;

/// Failures that abort a digest run.
#[derive(Debug, Error)]
pub enum Error {
    /// A required setting is missing, empty or malformed.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The hosting API could not be reached, timed out, or answered with a
    /// non-success status.
    #[error("transport error: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },

    /// The response body was not the expected list of records.
    #[error("protocol error: {0}")]
    Protocol(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            format!("request timed out: {err}")
        } else if err.is_connect() {
            format!("failed to connect to the GitHub API: {err}")
        } else {
            format!("request failed: {err}")
        };
        Error::Transport {
            status: err.status().map(|s| s.as_u16()),
            message,
        }
    }
}
