//! Data source errors.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure to fetch a page of posts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The request was rejected before being sent (zero limit or page).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The request never produced an HTTP response.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// The server answered with a non-2xx status.
    #[error("Server returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not a valid posts response.
    #[error("Could not decode response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Message suitable for the full-page error panel.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::InvalidRequest(msg) => format!("The page request was invalid: {}", msg),
            FetchError::Transport(HttpError::Timeout(_)) => {
                "The posts service took too long to answer.".to_string()
            }
            FetchError::Transport(_) => {
                "Unable to reach the posts service. Please check your connection.".to_string()
            }
            FetchError::Status { status, .. } => match *status {
                404 => "The posts endpoint was not found.".to_string(),
                429 => "Too many requests. Please wait a moment.".to_string(),
                500..=599 => "The posts service is having trouble right now.".to_string(),
                _ => format!("The posts service returned HTTP {}.", status),
            },
            FetchError::Decode(_) => "The posts service sent a response we could not read.".to_string(),
        }
    }

    /// Short error code for logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::InvalidRequest(_) => "E_FETCH_INVALID",
            FetchError::Transport(_) => "E_FETCH_TRANSPORT",
            FetchError::Status { .. } => "E_FETCH_STATUS",
            FetchError::Decode(_) => "E_FETCH_DECODE",
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = FetchError::Status {
            status: 503,
            message: "busy".to_string(),
        };
        assert_eq!(err.to_string(), "Server returned HTTP 503: busy");

        let err = FetchError::from(HttpError::ConnectionFailed("refused".to_string()));
        assert_eq!(err.to_string(), "Transport error: Connection failed: refused");
    }

    #[test]
    fn test_user_message_by_kind() {
        let timeout = FetchError::Transport(HttpError::Timeout("10s".to_string()));
        assert!(timeout.user_message().contains("too long"));

        let not_found = FetchError::Status {
            status: 404,
            message: String::new(),
        };
        assert!(not_found.user_message().contains("not found"));

        let teapot = FetchError::Status {
            status: 418,
            message: String::new(),
        };
        assert_eq!(teapot.user_message(), "The posts service returned HTTP 418.");
    }

    #[test]
    fn test_decode_from_serde() {
        let err: FetchError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.error_code(), "E_FETCH_DECODE");
    }
}
