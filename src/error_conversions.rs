//! Error conversion glue between the form, domain and service layers.
//!
//! The domain layer must not depend on service error types, so the
//! conversions live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::forms::users::INVALID_EMAIL_MESSAGE;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        match val {
            FormError::InvalidEmail => ServiceError::Form(INVALID_EMAIL_MESSAGE.to_string()),
            other => ServiceError::Form(other.to_string()),
        }
    }
}
