//! Custom actions for the Order actor: the status transitions.
//!
//! Each variant is one capability's entry point into the state machine and is
//! validated independently in
//! [`handle_action`](actor_framework::ActorEntity::handle_action).

use crate::model::{OrderStatus, UserId};

#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Admin move along the restaurant table.
    ///
    /// `expected` is the status the caller based its decision on; the move is
    /// refused if the order has changed since.
    RestaurantTransition {
        expected: OrderStatus,
        target: OrderStatus,
    },
    /// `READY -> IN_DELIVERY` together with the courier.
    AssignCourier(UserId),
    /// Courier move; only `IN_DELIVERY -> DELIVERED` is ever accepted.
    CourierTransition(OrderStatus),
}
