//! # Review Actor
//!
//! Stores restaurant and courier ratings. Eligibility (delivered order, owner,
//! assigned courier) is decided by the [`ReviewGate`](crate::review_gate::ReviewGate)
//! before a create reaches the actor; uniqueness is decided here.

pub mod entity;
pub mod error;

pub use entity::{MAX_RATING, MIN_RATING};
pub use error::*;

use crate::clients::ReviewClient;
use crate::model::Review;
use actor_framework::ResourceActor;

/// Creates a new Review actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Review>, ReviewClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, ReviewClient::new(generic_client))
}
