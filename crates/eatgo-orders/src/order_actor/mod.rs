//! # Order Actor
//!
//! Owns every [`Order`] and is the only writer of status and courier.
//!
//! ## Structure
//!
//! - [`entity`]: [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Order`]
//! - [`actions`]: [`OrderAction`], one variant per state-machine entry point
//! - [`error`]: [`OrderError`]
//! - [`new()`]: factory returning the actor and its [`OrderClient`]
//!
//! ## Context
//!
//! The actor validates and prices new orders against the directories and fans
//! committed transitions out to the [`NotificationFeed`]; both arrive through
//! [`OrderContext`] when the actor is started:
//!
//! ```rust,ignore
//! let (order_actor, orders) = order_actor::new(32);
//! tokio::spawn(order_actor.run(OrderContext {
//!     directories: directories.clone(),
//!     feed: feed.clone(),
//! }));
//! ```
//!
//! ## Serialization
//!
//! The actor handles one request at a time. Two transitions racing on the same
//! order are applied one after the other, and each is validated against the
//! status the other left behind.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::{Directories, OrderClient};
use crate::model::Order;
use crate::notifications::NotificationFeed;
use actor_framework::ResourceActor;
use std::sync::Arc;

/// Dependencies injected into the Order actor.
#[derive(Clone)]
pub struct OrderContext {
    pub directories: Directories,
    pub feed: Arc<NotificationFeed>,
}

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    (actor, OrderClient::new(generic_client))
}
