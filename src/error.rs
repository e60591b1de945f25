use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid config value: {0}")]
    InvalidValue(String),
    #[error("missing config: {0}")]
    Missing(String),
}

/// Failure of a single API call. Remote-reported errors (`ok: false`
/// envelopes) are passed through verbatim and never retried.
#[derive(Error, Debug)]
pub enum ApiClientError {
    #[error("api error ({status}): {message}")]
    Api { status: StatusCode, message: String },

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode api response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiClientError {
    /// HTTP status of a remote-reported error, if that is what this is.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("credential store I/O error: {0}")]
    Io(#[from] std::io::Error),
}
