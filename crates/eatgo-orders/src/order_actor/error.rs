//! Error types for the Order actor.

use crate::directory::DirectoryError;
use crate::model::{DishId, OrderStatus};
use actor_framework::FrameworkError;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The order, or a client, restaurant, address, dish or courier it refers to, is absent.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The referenced entity exists but does not belong to the order's restaurant.
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// The referenced dish exists but cannot be ordered right now.
    #[error("Unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid quantity {quantity} for {dish_id}: must be at least 1")]
    InvalidQuantity { dish_id: DishId, quantity: u32 },

    /// The order data provided is invalid.
    #[error("Order validation error: {0}")]
    ValidationError(String),

    /// The requested target is not reachable from the current status.
    #[error("Invalid transition from {from} to {to}")]
    InvalidTransition { from: OrderStatus, to: OrderStatus },

    /// An operation's precondition on the current status does not hold.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// The order moved on since the caller looked at it.
    #[error("Order is {actual}, expected {expected}")]
    StaleStatus {
        expected: OrderStatus,
        actual: OrderStatus,
    },

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<DirectoryError> for OrderError {
    fn from(e: DirectoryError) -> Self {
        OrderError::ActorCommunicationError(e.to_string())
    }
}

impl OrderError {
    pub(crate) fn from_framework(e: FrameworkError) -> Self {
        match e.into_entity_error::<OrderError>() {
            Ok(entity_error) => entity_error,
            Err(FrameworkError::NotFound(id)) => OrderError::NotFound(format!("order {id}")),
            Err(other) => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}
