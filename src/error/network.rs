//! Network-related error types.
//!
//! A [`NetworkError`] is the classified outcome of one failed call to the
//! agent service. It never escapes the operation that produced it; the app
//! turns it into a placeholder, a chat message or a status notification.

use crate::traits::HttpError;

/// Failure of a single API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// Connection to the server failed.
    #[error("Connection failed to '{url}': {message}")]
    ConnectionFailed { url: String, message: String },

    /// Request timed out.
    #[error("Request to '{url}' timed out: {message}")]
    Timeout { url: String, message: String },

    /// Server answered with a non-2xx status and a JSON body.
    #[error("HTTP {status} error: {detail}")]
    HttpStatus { status: u16, detail: String },

    /// The body could not be decoded into the expected shape.
    #[error("Invalid response: {message}")]
    InvalidResponse { message: String },

    /// Request was cancelled before a response arrived.
    #[error("Request cancelled")]
    Cancelled,

    /// Generic transport error.
    #[error("Network error: {message}")]
    Other { message: String },
}

impl NetworkError {
    /// Classify a transport failure for `url`.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        match err {
            HttpError::ConnectionFailed(message) => NetworkError::ConnectionFailed {
                url: url.to_string(),
                message,
            },
            HttpError::Timeout(message) => NetworkError::Timeout {
                url: url.to_string(),
                message,
            },
            HttpError::Cancelled => NetworkError::Cancelled,
            HttpError::InvalidUrl(message) | HttpError::Other(message) => {
                NetworkError::Other { message }
            }
        }
    }

    /// Detail of a non-2xx JSON response, `HTTP <status>` when the body
    /// had none.
    pub fn detail(&self) -> Option<&str> {
        match self {
            NetworkError::HttpStatus { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            NetworkError::ConnectionFailed { .. } => "E_NET_CONN",
            NetworkError::Timeout { .. } => "E_NET_TIMEOUT",
            NetworkError::HttpStatus { .. } => "E_NET_HTTP",
            NetworkError::InvalidResponse { .. } => "E_NET_INVALID",
            NetworkError::Cancelled => "E_NET_CANCEL",
            NetworkError::Other { .. } => "E_NET_OTHER",
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            NetworkError::ConnectionFailed { .. } => {
                "Unable to connect to the agent service.".to_string()
            }
            NetworkError::Timeout { .. } => "The agent service did not answer in time.".to_string(),
            NetworkError::HttpStatus { detail, .. } => format!("Error: {}", detail),
            NetworkError::InvalidResponse { .. } => {
                "Received an invalid response from the agent service.".to_string()
            }
            NetworkError::Cancelled => "The request was cancelled.".to_string(),
            NetworkError::Other { message } => format!("Network error: {}", message),
        }
    }
}
