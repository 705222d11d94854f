//! # Service Errors
//!
//! [`ServiceError`] is what the [`OrderingService`](crate::service::OrderingService)
//! returns. It keeps each component's error intact, so callers can still match on
//! e.g. [`OrderError::InvalidTransition`] and read both statuses, and classifies it
//! into an [`ErrorKind`] with an HTTP-style status code for a transport layer.

use crate::directory::DirectoryError;
use crate::order_actor::OrderError;
use crate::review_actor::ReviewError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    /// No principal, or one the user directory does not know.
    #[error("Authentication required")]
    Unauthorized,

    /// The principal's role does not allow the operation.
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// Absent, or not visible to the principal.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error(transparent)]
    Directory(#[from] DirectoryError),
}

/// Coarse classification of a [`ServiceError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    InvalidReference,
    Unavailable,
    Validation,
    Unauthorized,
    Forbidden,
    InvalidState,
    Conflict,
    Internal,
}

impl ErrorKind {
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::NotFound => 404,
            ErrorKind::InvalidReference => 422,
            ErrorKind::Unavailable => 409,
            ErrorKind::Validation => 400,
            ErrorKind::Unauthorized => 401,
            ErrorKind::Forbidden => 403,
            ErrorKind::InvalidState => 409,
            ErrorKind::Conflict => 409,
            ErrorKind::Internal => 500,
        }
    }
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ServiceError::Unauthorized => ErrorKind::Unauthorized,
            ServiceError::Forbidden(_) => ErrorKind::Forbidden,
            ServiceError::NotFound(_) => ErrorKind::NotFound,
            ServiceError::InvalidState(_) => ErrorKind::InvalidState,
            ServiceError::ValidationError(_) => ErrorKind::Validation,
            ServiceError::Order(e) => match e {
                OrderError::NotFound(_) => ErrorKind::NotFound,
                OrderError::InvalidReference(_) => ErrorKind::InvalidReference,
                OrderError::Unavailable(_) => ErrorKind::Unavailable,
                OrderError::InvalidQuantity { .. } | OrderError::ValidationError(_) => {
                    ErrorKind::Validation
                }
                OrderError::InvalidTransition { .. }
                | OrderError::InvalidState(_)
                | OrderError::StaleStatus { .. } => ErrorKind::InvalidState,
                OrderError::ActorCommunicationError(_) => ErrorKind::Internal,
            },
            ServiceError::Review(e) => match e {
                ReviewError::ValidationError(_) => ErrorKind::Validation,
                ReviewError::Conflict { .. } => ErrorKind::Conflict,
                ReviewError::ActorCommunicationError(_) => ErrorKind::Internal,
            },
            ServiceError::Directory(e) => match e {
                DirectoryError::NotFound(_) => ErrorKind::NotFound,
                DirectoryError::Conflict(_) => ErrorKind::Conflict,
                DirectoryError::ValidationError(_) => ErrorKind::Validation,
                DirectoryError::ActorCommunicationError(_) => ErrorKind::Internal,
            },
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}
