use thiserror::Error;

/// Notification text used when the backend gives no usable message.
pub const FALLBACK_MESSAGE: &str = "系统繁忙，请稍后再试";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BackendError {
    /// The backend answered with a status other than 200 or 201.
    #[error("backend rejected the request with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    /// The request never produced a response (connect failure, timeout...).
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body did not have the expected shape.
    #[error("invalid backend response: {0}")]
    Decode(String),

    #[error("invalid backend configuration: {0}")]
    InvalidConfig(String),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl BackendError {
    /// Message reported by the server, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            BackendError::Rejected {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    /// Text shown to the administrator.
    pub fn user_message(&self) -> String {
        self.server_message()
            .unwrap_or(FALLBACK_MESSAGE)
            .to_string()
    }
}

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::Decode(err.to_string())
        } else {
            BackendError::Transport(err.to_string())
        }
    }
}
