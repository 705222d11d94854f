//! Error types for the Review actor.

use crate::model::{OrderId, ReviewTargetKind};
use actor_framework::FrameworkError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReviewError {
    #[error("Review validation error: {0}")]
    ValidationError(String),

    /// The reviewer already rated this target for this order.
    #[error("{kind} of {order_id} has already been reviewed")]
    Conflict {
        order_id: OrderId,
        kind: ReviewTargetKind,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ReviewError {
    pub(crate) fn from_framework(e: FrameworkError) -> Self {
        match e.into_entity_error::<ReviewError>() {
            Ok(entity_error) => entity_error,
            Err(other) => ReviewError::ActorCommunicationError(other.to_string()),
        }
    }
}
