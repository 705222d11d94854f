//! # Order Client
//!
//! Provides a high‑level API for interacting with the `Order` actor.
//!
//! Creation and reads are public. The transition methods are crate-private:
//! outside callers reach them only through a resolved
//! [`Capability`](crate::auth::Capability).
use crate::model::{Order, OrderCreate, OrderId, OrderQuery, OrderStatus, RestaurantId, UserId};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
///
/// Validation and pricing happen in the Order actor's `on_create` hook.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("create_order called");
        let id = self.inner.create(params).await.map_err(Self::map_error)?;
        info!(order_id = %id, "Order placed");
        Ok(id)
    }

    pub async fn find_order(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        self.get(id).await
    }

    pub async fn list_for_client(&self, client_id: UserId) -> Result<Vec<Order>, OrderError> {
        self.list_newest_first(OrderQuery::ByClient(client_id)).await
    }

    pub async fn list_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Order>, OrderError> {
        self.list_newest_first(OrderQuery::ByRestaurant(restaurant_id)).await
    }

    pub async fn list_for_courier(&self, courier_id: UserId) -> Result<Vec<Order>, OrderError> {
        self.list_newest_first(OrderQuery::ByCourier(courier_id)).await
    }

    /// Delivered orders of `client_id` at `restaurant_id`, newest first.
    pub async fn list_delivered(
        &self,
        client_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Order>, OrderError> {
        self.list_newest_first(OrderQuery::DeliveredFor {
            client_id,
            restaurant_id,
        })
        .await
    }

    async fn list_newest_first(&self, query: OrderQuery) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.list(query).await?;
        orders.sort_by(|a, b| b.recency().cmp(&a.recency()));
        Ok(orders)
    }

    #[instrument(skip(self))]
    pub(crate) async fn restaurant_transition(
        &self,
        id: OrderId,
        expected: OrderStatus,
        target: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.action(id, OrderAction::RestaurantTransition { expected, target })
            .await
    }

    #[instrument(skip(self))]
    pub(crate) async fn assign_courier(
        &self,
        id: OrderId,
        courier_id: UserId,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.action(id, OrderAction::AssignCourier(courier_id)).await
    }

    #[instrument(skip(self))]
    pub(crate) async fn courier_transition(
        &self,
        id: OrderId,
        target: OrderStatus,
    ) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.action(id, OrderAction::CourierTransition(target)).await
    }

    async fn action(&self, id: OrderId, action: OrderAction) -> Result<Order, OrderError> {
        self.inner
            .perform_action(id, action)
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        OrderError::from_framework(e)
    }
}
