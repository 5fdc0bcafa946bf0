// Error types for launchpad.
// Separates remote fetch failures from local cache failures so callers can tell them apart.

use thiserror::Error;

/// Maximum length of a response body carried in a status error.
const MAX_ERROR_BODY_LENGTH: usize = 500;

/// Failures fetching launches from the remote API.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Could not decode launches response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid user agent: {0}")]
    UserAgent(#[from] reqwest::header::InvalidHeaderValue),
}

impl NetworkError {
    /// Build an error for a non-success response, truncating large bodies.
    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return NetworkError::RateLimited;
        }

        NetworkError::Status {
            status: status.as_u16(),
            body: truncate_body(body),
        }
    }
}

fn truncate_body(body: &str) -> String {
    if body.len() <= MAX_ERROR_BODY_LENGTH {
        return body.to_string();
    }

    let mut end = MAX_ERROR_BODY_LENGTH;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}... (truncated, {} total bytes)", &body[..end], body.len())
}

/// Failures reading or writing the local launch cache.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt cache document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Could not determine cache directory")]
    NoCacheDir,
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, Error>;
