//! Read models computed from the authoritative [`Order`].
//!
//! One projection per consumer need: [`OrderSummary`] for lists, [`OrderDetails`]
//! for a single order. Both are pure functions of the aggregate (plus the
//! directory records they display); nothing here is stored or mutated.

use crate::clients::Directories;
use crate::error::ServiceError;
use crate::model::{
    Address, DishId, Order, OrderId, OrderStatus, Restaurant, RestaurantId, UserId,
};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub restaurant_id: RestaurantId,
    pub courier_id: Option<UserId>,
    pub item_count: u64,
    pub total_price: Money,
    pub created_at: DateTime<Utc>,
}

impl From<&Order> for OrderSummary {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id,
            status: order.status,
            status_label: order.status.label(),
            restaurant_id: order.restaurant_id,
            courier_id: order.courier_id,
            item_count: order.item_count(),
            total_price: order.total_price,
            created_at: order.created_at,
        }
    }
}

pub fn summaries(orders: &[Order]) -> Vec<OrderSummary> {
    orders.iter().map(OrderSummary::from).collect()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RestaurantSummary {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineView {
    pub dish_id: DishId,
    pub name: String,
    pub quantity: u32,
    pub unit_price: Money,
    pub line_total: Money,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetails {
    pub id: OrderId,
    pub status: OrderStatus,
    pub status_label: &'static str,
    pub client_id: UserId,
    pub restaurant: RestaurantSummary,
    pub items: Vec<LineView>,
    /// `None` when the address has since left the address book.
    pub address: Option<Address>,
    pub courier_id: Option<UserId>,
    pub delivery_price: Money,
    pub items_total: Money,
    pub total_price: Money,
    pub created_at: DateTime<Utc>,
}

impl OrderDetails {
    pub fn project(order: &Order, restaurant: &Restaurant, address: Option<&Address>) -> Self {
        Self {
            id: order.id,
            status: order.status,
            status_label: order.status.label(),
            client_id: order.client_id,
            restaurant: RestaurantSummary {
                id: restaurant.id,
                name: restaurant.name.clone(),
                address: restaurant.address.clone(),
            },
            items: order
                .items
                .iter()
                .map(|line| LineView {
                    dish_id: line.dish_id,
                    name: line.dish_name.clone(),
                    quantity: line.quantity,
                    unit_price: line.unit_price,
                    line_total: line.line_total(),
                })
                .collect(),
            address: address.cloned(),
            courier_id: order.courier_id,
            delivery_price: order.delivery_price,
            items_total: order.items_total(),
            total_price: order.total_price,
            created_at: order.created_at,
        }
    }

    /// Fetches the restaurant and address the order points at, then projects.
    pub async fn load(order: &Order, directories: &Directories) -> Result<Self, ServiceError> {
        let restaurant = directories
            .restaurants
            .find_restaurant_by_id(order.restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("restaurant {}", order.restaurant_id)))?;
        let address = directories
            .addresses
            .find_address_by_id_for_user(order.address_id, order.client_id)
            .await?;
        Ok(Self::project(order, &restaurant, address.as_ref()))
    }
}
