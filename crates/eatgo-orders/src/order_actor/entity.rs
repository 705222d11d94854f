//! [`ActorEntity`] implementation for [`Order`]: price assembly and the status
//! state machine.
//!
//! All of it runs inside the Order actor's message loop, so a transition's
//! check and its write are never interleaved with another request.

use super::{OrderAction, OrderContext, OrderError};
use crate::model::{Order, OrderCreate, OrderId, OrderLineItem, OrderQuery, OrderStatus, Role, UserId};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;
use tracing::{info, warn};

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = Infallible; // orders only change through actions
    type Action = OrderAction;
    type ActionResult = Order;
    type Query = OrderQuery;
    type Context = OrderContext;
    type Error = OrderError;

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::ValidationError(
                "order must contain at least one item".to_string(),
            ));
        }
        Ok(Order::new(id, params))
    }

    /// Validates the order against the directories and snapshots its prices.
    ///
    /// Checks run in order and stop at the first failure: client, restaurant,
    /// address ownership, then per item quantity, dish existence, dish restaurant
    /// and availability. A failure leaves nothing stored.
    async fn on_create(&mut self, ctx: &OrderContext) -> Result<(), Self::Error> {
        let dirs = &ctx.directories;

        dirs.users
            .find_user_by_id(self.client_id)
            .await?
            .filter(|user| user.role == Role::Client)
            .ok_or_else(|| OrderError::NotFound(format!("client {}", self.client_id)))?;

        let restaurant = dirs
            .restaurants
            .find_restaurant_by_id(self.restaurant_id)
            .await?
            .ok_or_else(|| OrderError::NotFound(format!("restaurant {}", self.restaurant_id)))?;

        dirs.addresses
            .find_address_by_id_for_user(self.address_id, self.client_id)
            .await?
            .ok_or_else(|| {
                OrderError::NotFound(format!(
                    "address {} for user {}",
                    self.address_id, self.client_id
                ))
            })?;

        for line in &mut self.items {
            if line.quantity < 1 {
                return Err(OrderError::InvalidQuantity {
                    dish_id: line.dish_id,
                    quantity: line.quantity,
                });
            }
            let dish = dirs
                .menu
                .find_dish_by_id(line.dish_id)
                .await?
                .ok_or_else(|| OrderError::NotFound(format!("dish {}", line.dish_id)))?;
            if dish.restaurant_id != restaurant.id {
                return Err(OrderError::InvalidReference(format!(
                    "dish {} does not belong to restaurant {}",
                    dish.id, restaurant.id
                )));
            }
            if !dish.available {
                return Err(OrderError::Unavailable(format!(
                    "dish {} ({}) is not available",
                    dish.id, dish.name
                )));
            }
            line.dish_name = dish.name;
            line.unit_price = dish.price;
        }

        self.items = merge_lines(std::mem::take(&mut self.items)).ok_or_else(out_of_range)?;
        self.delivery_price = restaurant.delivery_price;
        self.total_price = self.checked_total().ok_or_else(out_of_range)?;

        info!(
            order_id = %self.id,
            client_id = %self.client_id,
            restaurant_id = %self.restaurant_id,
            total = %self.total_price,
            "Order assembled"
        );
        Ok(())
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &OrderContext) -> Result<(), Self::Error> {
        match update {}
    }

    /// Handles status transitions.
    ///
    /// # Actions
    /// - `RestaurantTransition`: admin table move, refused if the status changed
    ///   since the caller read it
    /// - `AssignCourier`: `READY` only; courier must work for the order's restaurant
    /// - `CourierTransition`: `IN_DELIVERY -> DELIVERED` only
    ///
    /// Every precondition is checked before anything is written. A committed
    /// move is recorded in the owner's notification feed before the reply.
    async fn handle_action(
        &mut self,
        action: OrderAction,
        ctx: &OrderContext,
    ) -> Result<Order, Self::Error> {
        match action {
            OrderAction::RestaurantTransition { expected, target } => {
                if self.status != expected {
                    return Err(OrderError::StaleStatus {
                        expected,
                        actual: self.status,
                    });
                }
                if !self.status.admits_restaurant_transition(target) {
                    return Err(self.invalid_transition(target));
                }
                self.commit(target, ctx).await;
            }
            OrderAction::AssignCourier(courier_id) => {
                if self.status != OrderStatus::Ready {
                    return Err(OrderError::InvalidState(format!(
                        "a courier can only be assigned to a READY order, {} is {}",
                        self.id, self.status
                    )));
                }
                ctx.directories
                    .users
                    .find_courier_for_restaurant(courier_id, self.restaurant_id)
                    .await?
                    .ok_or_else(|| {
                        OrderError::NotFound(format!(
                            "courier {} for restaurant {}",
                            courier_id, self.restaurant_id
                        ))
                    })?;
                self.courier_id = Some(courier_id);
                self.commit(OrderStatus::InDelivery, ctx).await;
            }
            OrderAction::CourierTransition(target) => {
                if !self.status.admits_courier_transition(target) {
                    return Err(self.invalid_transition(target));
                }
                self.commit(target, ctx).await;
            }
        }
        Ok(self.clone())
    }

    fn matches(&self, query: &OrderQuery) -> bool {
        query.matches(self)
    }
}

impl Order {
    fn invalid_transition(&self, target: OrderStatus) -> OrderError {
        warn!(order_id = %self.id, from = %self.status, to = %target, "Transition rejected");
        OrderError::InvalidTransition {
            from: self.status,
            to: target,
        }
    }

    /// Applies an already validated move and fans it out.
    async fn commit(&mut self, next: OrderStatus, ctx: &OrderContext) {
        let previous = self.status;
        self.status = next;
        info!(order_id = %self.id, from = %previous, to = %next, "Order status changed");

        let owner = self.resolve_owner(ctx).await;
        ctx.feed.record_transition(owner, self.id, previous, next);
    }

    // Notifications are best-effort: a directory failure drops the entry, never
    // the committed status.
    async fn resolve_owner(&self, ctx: &OrderContext) -> Option<UserId> {
        match ctx.directories.users.find_user_by_id(self.client_id).await {
            Ok(user) => user.map(|u| u.id),
            Err(e) => {
                warn!(order_id = %self.id, error = %e, "Owner lookup failed, notification dropped");
                None
            }
        }
    }
}

/// Folds repeated dishes into one line each, keeping first-seen order. `None`
/// if a merged quantity does not fit in `u32`.
fn merge_lines(lines: Vec<OrderLineItem>) -> Option<Vec<OrderLineItem>> {
    let mut merged: Vec<OrderLineItem> = Vec::with_capacity(lines.len());
    for line in lines {
        match merged.iter_mut().find(|m| m.dish_id == line.dish_id) {
            Some(existing) => existing.quantity = existing.quantity.checked_add(line.quantity)?,
            None => merged.push(line),
        }
    }
    Some(merged)
}

fn out_of_range() -> OrderError {
    OrderError::ValidationError("order total out of range".to_string())
}
