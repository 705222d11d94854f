//! Error types shared by the directory actors.

use actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum DirectoryError {
    /// An update or delete named a record that does not exist.
    #[error("Directory record not found: {0}")]
    NotFound(String),

    /// A unique field (such as a user email) is already taken.
    #[error("Directory record already exists: {0}")]
    Conflict(String),

    #[error("Directory validation error: {0}")]
    ValidationError(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl DirectoryError {
    /// Translates a runtime error from any directory actor.
    pub(crate) fn from_framework(e: FrameworkError) -> Self {
        match e.into_entity_error::<DirectoryError>() {
            Ok(entity_error) => entity_error,
            Err(FrameworkError::NotFound(id)) => DirectoryError::NotFound(id),
            Err(FrameworkError::Conflict(id)) => DirectoryError::Conflict(id),
            Err(other) => DirectoryError::ActorCommunicationError(other.to_string()),
        }
    }
}
