//! Form definitions backing the HTML routes.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;

pub mod main;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("invalid name")]
    InvalidName,

    #[error("invalid category")]
    InvalidCategory,

    #[error("invalid url")]
    InvalidUrl,

    #[error("failed to store uploaded file: {0}")]
    Upload(String),
}

impl From<TypeConstraintError> for FormError {
    fn from(err: TypeConstraintError) -> Self {
        match err {
            TypeConstraintError::EmptyString => FormError::InvalidName,
            TypeConstraintError::InvalidUrl => FormError::InvalidUrl,
            TypeConstraintError::UnknownCategory(_) => FormError::InvalidCategory,
        }
    }
}
