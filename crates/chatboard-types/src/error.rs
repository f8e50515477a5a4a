use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ClientError {
    /// The backend answered 401 or 403; the session must re-authenticate
    #[error("Session expired")]
    AuthExpired,

    /// Any other non-2xx answer from the chat API
    #[error("API error: HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for ClientError {
    fn from(e: serde_json::Error) -> Self {
        ClientError::Serialization(e.to_string())
    }
}

impl ClientError {
    /// True when a manual retry can succeed (server or transport fault).
    /// Auth expiry is terminal for the session.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, ClientError::AuthExpired)
    }
}
