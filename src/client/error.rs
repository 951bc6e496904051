//! Client error type.

/// Errors surfaced by the authenticated client.
///
/// None of these are retried; they reach the caller as soon as they occur.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The network exchange could not be completed (DNS, connect, TLS, I/O, timeout).
    #[error("Transport error: {0}")]
    Transport(String),

    /// A response arrived with a status code in `[400, 600)`.
    #[error("HTTP status error: {code}")]
    HttpStatus { code: u16 },

    /// The payload could not be encoded as JSON.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The response status line was missing or unparseable.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// The request could not be built (bad URL, method or header).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// No bearer token could be read from the auth response.
    #[error("Token error: {0}")]
    Token(String),
}

impl ClientError {
    /// The status code carried by an [`ClientError::HttpStatus`] error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ClientError::HttpStatus { code } => Some(*code),
            _ => None,
        }
    }
}

impl From<hyper::Error> for ClientError {
    fn from(err: hyper::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

impl From<hyper_util::client::legacy::Error> for ClientError {
    fn from(err: hyper_util::client::legacy::Error) -> Self {
        ClientError::Transport(format!("{:?}", err))
    }
}
