use thiserror::Error;

pub mod users;

/// Errors surfaced by the service layer to the routes.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Submitted form data was rejected; the message is shown inline.
    #[error("form error: {0}")]
    Form(String),

    /// The backend call failed; the message is shown as a notification.
    #[error("backend error: {0}")]
    Backend(String),

    #[error("type constraint violation: {0}")]
    TypeConstraint(String),

    #[error("unexpected error: {0}")]
    Unexpected(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
