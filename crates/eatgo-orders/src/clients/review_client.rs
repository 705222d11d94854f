//! # Review Client
//!
//! Typed client for the `Review` actor.
use crate::model::{OrderId, RestaurantId, Review, ReviewCreate, ReviewId, ReviewQuery, UserId};
use crate::review_actor::ReviewError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
}

impl ReviewClient {
    pub fn new(inner: ResourceClient<Review>) -> Self {
        Self { inner }
    }

    /// Stores a review. A second review of the same target for the same order
    /// by the same reviewer fails with [`ReviewError::Conflict`].
    #[instrument(skip(self))]
    pub async fn create_review(&self, params: ReviewCreate) -> Result<ReviewId, ReviewError> {
        debug!("Sending request");
        let (order_id, kind) = (params.order_id, params.target.kind());
        self.inner.create(params).await.map_err(|e| match e {
            FrameworkError::Conflict(_) => ReviewError::Conflict { order_id, kind },
            other => Self::map_error(other),
        })
    }

    pub async fn list_for_order(&self, order_id: OrderId) -> Result<Vec<Review>, ReviewError> {
        self.list(ReviewQuery::ForOrder(order_id)).await
    }

    pub async fn list_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Review>, ReviewError> {
        self.list_newest_first(ReviewQuery::ForRestaurant(restaurant_id))
            .await
    }

    pub async fn list_for_courier(&self, courier_id: UserId) -> Result<Vec<Review>, ReviewError> {
        self.list_newest_first(ReviewQuery::ForCourier(courier_id)).await
    }

    async fn list_newest_first(&self, query: ReviewQuery) -> Result<Vec<Review>, ReviewError> {
        let mut reviews = self.list(query).await?;
        reviews.sort_by(|a, b| (b.created_at, b.id).cmp(&(a.created_at, a.id)));
        Ok(reviews)
    }
}

#[async_trait]
impl ActorClient<Review> for ReviewClient {
    type Error = ReviewError;

    fn inner(&self) -> &ResourceClient<Review> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        ReviewError::from_framework(e)
    }
}
