//! # Ordering Service
//!
//! The request/response surface of the engine, one method per operation a thin
//! API layer would expose. Every method takes the calling [`Principal`] and runs
//! it through the [`AuthorizationGate`] first.

use crate::auth::{AuthorizationGate, Principal};
use crate::clients::{Directories, OrderClient};
use crate::error::ServiceError;
use crate::model::{
    AddressId, OrderCreate, OrderId, OrderItemRequest, OrderStatus, RestaurantId, Review,
    ReviewId, ReviewTargetKind, Role, UserId,
};
use crate::money::Money;
use crate::notifications::{NotificationFeed, OrderNotification};
use crate::projection::{summaries, OrderDetails, OrderSummary};
use crate::review_gate::{OrderReviewStatus, ReviewGate};
use crate::stats::{self, DishSales};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Clone)]
pub struct OrderingService {
    gate: AuthorizationGate,
    orders: OrderClient,
    reviews: ReviewGate,
    directories: Directories,
    feed: Arc<NotificationFeed>,
}

impl OrderingService {
    pub fn new(
        directories: Directories,
        orders: OrderClient,
        reviews: ReviewGate,
        feed: Arc<NotificationFeed>,
    ) -> Self {
        Self {
            gate: AuthorizationGate::new(directories.clone(), orders.clone()),
            orders,
            reviews,
            directories,
            feed,
        }
    }

    // --- Client ---

    /// Places an order for the calling client.
    #[instrument(skip(self, items))]
    pub async fn create_order(
        &self,
        principal: &Principal,
        restaurant_id: RestaurantId,
        address_id: AddressId,
        items: Vec<OrderItemRequest>,
    ) -> Result<OrderDetails, ServiceError> {
        let client = self.gate.require_role(principal, Role::Client).await?;
        let order_id = self
            .orders
            .create_order(OrderCreate {
                client_id: client.id,
                restaurant_id,
                address_id,
                items,
            })
            .await?;
        self.gate.resolve(principal, order_id).await?.details().await
    }

    pub async fn list_orders_for_user(
        &self,
        principal: &Principal,
    ) -> Result<Vec<OrderSummary>, ServiceError> {
        let client = self.gate.require_role(principal, Role::Client).await?;
        Ok(summaries(&self.orders.list_for_client(client.id).await?))
    }

    /// Order details for its owner, its restaurant's admin or its courier.
    pub async fn get_order_details(
        &self,
        principal: &Principal,
        order_id: OrderId,
    ) -> Result<OrderDetails, ServiceError> {
        self.gate.resolve(principal, order_id).await?.details().await
    }

    // --- Restaurant admin ---

    pub async fn restaurant_list_orders(
        &self,
        principal: &Principal,
    ) -> Result<Vec<OrderSummary>, ServiceError> {
        let restaurant = self.gate.admin_restaurant(principal).await?;
        Ok(summaries(&self.orders.list_for_restaurant(restaurant.id).await?))
    }

    #[instrument(skip(self))]
    pub async fn restaurant_update_status(
        &self,
        principal: &Principal,
        order_id: OrderId,
        target: OrderStatus,
    ) -> Result<OrderSummary, ServiceError> {
        let admin = self.gate.resolve_admin(principal, order_id).await?;
        let order = admin.transition(target).await?;
        Ok(OrderSummary::from(&order))
    }

    #[instrument(skip(self))]
    pub async fn restaurant_assign_courier(
        &self,
        principal: &Principal,
        order_id: OrderId,
        courier_id: UserId,
    ) -> Result<OrderSummary, ServiceError> {
        let admin = self.gate.resolve_admin(principal, order_id).await?;
        let order = admin.assign_courier(courier_id).await?;
        Ok(OrderSummary::from(&order))
    }

    pub async fn restaurant_active_orders_count(
        &self,
        principal: &Principal,
    ) -> Result<usize, ServiceError> {
        let restaurant = self.gate.admin_restaurant(principal).await?;
        let orders = self.orders.list_for_restaurant(restaurant.id).await?;
        Ok(stats::active_orders_count(&orders))
    }

    pub async fn restaurant_revenue_since(
        &self,
        principal: &Principal,
        since: DateTime<Utc>,
    ) -> Result<Money, ServiceError> {
        let restaurant = self.gate.admin_restaurant(principal).await?;
        let orders = self.orders.list_for_restaurant(restaurant.id).await?;
        Ok(stats::revenue_since(&orders, since))
    }

    pub async fn restaurant_top_dishes(
        &self,
        principal: &Principal,
        limit: usize,
    ) -> Result<Vec<DishSales>, ServiceError> {
        let restaurant = self.gate.admin_restaurant(principal).await?;
        let orders = self.orders.list_for_restaurant(restaurant.id).await?;
        Ok(stats::top_dishes(&orders, limit))
    }

    // --- Courier ---

    pub async fn courier_list_assigned(
        &self,
        principal: &Principal,
    ) -> Result<Vec<OrderSummary>, ServiceError> {
        let courier = self.gate.require_role(principal, Role::Courier).await?;
        Ok(summaries(&self.orders.list_for_courier(courier.id).await?))
    }

    /// Courier status update; `DELIVERED` is the only target that can succeed.
    #[instrument(skip(self))]
    pub async fn courier_update_status(
        &self,
        principal: &Principal,
        order_id: OrderId,
        target: OrderStatus,
    ) -> Result<OrderSummary, ServiceError> {
        let courier = self.gate.resolve_courier(principal, order_id).await?;
        let order = courier.transition(target).await?;
        Ok(OrderSummary::from(&order))
    }

    // --- Reviews ---

    pub async fn add_review(
        &self,
        principal: &Principal,
        order_id: OrderId,
        kind: ReviewTargetKind,
        rating: u8,
        comment: Option<String>,
    ) -> Result<ReviewId, ServiceError> {
        let reviewer = self.gate.authenticate(principal).await?;
        self.reviews
            .add_review(reviewer.id, order_id, kind, rating, comment)
            .await
    }

    pub async fn get_order_review_status(
        &self,
        principal: &Principal,
        order_id: OrderId,
    ) -> Result<OrderReviewStatus, ServiceError> {
        let reviewer = self.gate.authenticate(principal).await?;
        self.reviews.order_review_status(reviewer.id, order_id).await
    }

    /// Public: anyone may read a restaurant's reviews.
    pub async fn list_reviews_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Review>, ServiceError> {
        self.directories
            .restaurants
            .find_restaurant_by_id(restaurant_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("restaurant {restaurant_id}")))?;
        self.reviews.list_for_restaurant(restaurant_id).await
    }

    /// Reviews of the restaurant run by the calling admin.
    pub async fn list_reviews_for_admin(
        &self,
        principal: &Principal,
    ) -> Result<Vec<Review>, ServiceError> {
        let restaurant = self.gate.admin_restaurant(principal).await?;
        self.reviews.list_for_restaurant(restaurant.id).await
    }

    pub async fn list_reviews_for_courier(
        &self,
        courier_id: UserId,
    ) -> Result<Vec<Review>, ServiceError> {
        let user = self
            .directories
            .users
            .find_user_by_id(courier_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound(format!("user {courier_id}")))?;
        if user.role != Role::Courier {
            return Err(ServiceError::ValidationError(format!(
                "{courier_id} is not a courier"
            )));
        }
        self.reviews.list_for_courier(courier_id).await
    }

    /// The calling client's latest delivered order at `restaurant_id` that has
    /// no restaurant review yet.
    pub async fn find_reviewable_order_for_restaurant(
        &self,
        principal: &Principal,
        restaurant_id: RestaurantId,
    ) -> Result<Option<OrderSummary>, ServiceError> {
        let client = self.gate.require_role(principal, Role::Client).await?;
        let order = self
            .reviews
            .find_reviewable_order_for_restaurant(client.id, restaurant_id)
            .await?;
        Ok(order.as_ref().map(OrderSummary::from))
    }

    // --- Notifications ---

    pub async fn list_notifications(
        &self,
        principal: &Principal,
    ) -> Result<Vec<OrderNotification>, ServiceError> {
        let user = self.gate.authenticate(principal).await?;
        Ok(self.feed.list_for_user(user.id))
    }

    pub async fn unread_notification_count(
        &self,
        principal: &Principal,
    ) -> Result<usize, ServiceError> {
        let user = self.gate.authenticate(principal).await?;
        Ok(self.feed.unread_count(user.id))
    }

    pub async fn mark_notifications_read(&self, principal: &Principal) -> Result<(), ServiceError> {
        let user = self.gate.authenticate(principal).await?;
        self.feed.mark_all_read(user.id);
        Ok(())
    }

    /// Called once the client has acknowledged a finished order.
    pub async fn clear_notifications(&self, principal: &Principal) -> Result<(), ServiceError> {
        let user = self.gate.authenticate(principal).await?;
        self.feed.clear_for_user(user.id);
        info!(user_id = %user.id, "Notifications cleared");
        Ok(())
    }

    /// The authorization gate, for callers that hold on to a capability.
    pub fn gate(&self) -> &AuthorizationGate {
        &self.gate
    }
}
