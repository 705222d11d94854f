use crate::model::{AddressId, DishId, OrderId, OrderStatus, RestaurantId, UserId};
use crate::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A client's order from one restaurant.
///
/// # Actor Framework
/// This struct implements the [`ActorEntity`](actor_framework::ActorEntity) trait,
/// allowing it to be managed by a [`ResourceActor`](actor_framework::ResourceActor).
///
/// See [`impl ActorEntity for Order`](#impl-ActorEntity-for-Order) for details on:
/// - Creation parameters ([`OrderCreate`]) and price assembly in `on_create`
/// - Status transitions ([`OrderAction`](crate::order_actor::OrderAction))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub client_id: UserId,
    pub restaurant_id: RestaurantId,
    pub address_id: AddressId,
    /// Set together with `IN_DELIVERY`, never cleared.
    pub courier_id: Option<UserId>,
    pub status: OrderStatus,
    pub items: Vec<OrderLineItem>,
    /// Restaurant delivery price at order time.
    pub delivery_price: Money,
    /// Sum of line totals plus `delivery_price`, frozen at creation.
    pub total_price: Money,
    pub created_at: DateTime<Utc>,
}

impl Order {
    /// Creates a `PLACED` order whose lines still lack their price snapshot.
    ///
    /// The snapshot fields are filled in by
    /// [`on_create`](actor_framework::ActorEntity::on_create) before the order is stored.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        let items = params
            .items
            .into_iter()
            .map(|item| OrderLineItem {
                dish_id: item.dish_id,
                dish_name: String::new(),
                quantity: item.quantity,
                unit_price: Money::ZERO,
            })
            .collect();
        Self {
            id,
            client_id: params.client_id,
            restaurant_id: params.restaurant_id,
            address_id: params.address_id,
            courier_id: None,
            status: OrderStatus::Placed,
            items,
            delivery_price: Money::ZERO,
            total_price: Money::ZERO,
            created_at: Utc::now(),
        }
    }

    pub fn items_total(&self) -> Money {
        self.items.iter().map(OrderLineItem::line_total).sum()
    }

    /// Items plus delivery, or `None` if any step leaves the `u64` cent range.
    pub fn checked_total(&self) -> Option<Money> {
        self.items.iter().try_fold(self.delivery_price, |total, line| {
            total.checked_add(line.unit_price.checked_mul(line.quantity)?)
        })
    }

    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Sort key for "newest first" listings.
    pub fn recency(&self) -> (DateTime<Utc>, OrderId) {
        (self.created_at, self.id)
    }
}

/// One ordered dish with its price frozen at order time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLineItem {
    pub dish_id: DishId,
    pub dish_name: String,
    pub quantity: u32,
    pub unit_price: Money,
}

impl OrderLineItem {
    pub fn line_total(&self) -> Money {
        self.unit_price * self.quantity
    }
}

/// Payload for creating a new order.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub client_id: UserId,
    pub restaurant_id: RestaurantId,
    pub address_id: AddressId,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderItemRequest {
    pub dish_id: DishId,
    pub quantity: u32,
}

impl OrderItemRequest {
    pub fn new(dish_id: DishId, quantity: u32) -> Self {
        Self { dish_id, quantity }
    }
}

/// Selective order listings.
#[derive(Debug, Clone)]
pub enum OrderQuery {
    ByClient(UserId),
    ByRestaurant(RestaurantId),
    ByCourier(UserId),
    DeliveredFor {
        client_id: UserId,
        restaurant_id: RestaurantId,
    },
}

impl OrderQuery {
    pub fn matches(&self, order: &Order) -> bool {
        match self {
            OrderQuery::ByClient(id) => order.client_id == *id,
            OrderQuery::ByRestaurant(id) => order.restaurant_id == *id,
            OrderQuery::ByCourier(id) => order.courier_id == Some(*id),
            OrderQuery::DeliveredFor {
                client_id,
                restaurant_id,
            } => {
                order.client_id == *client_id
                    && order.restaurant_id == *restaurant_id
                    && order.status == OrderStatus::Delivered
            }
        }
    }
}
