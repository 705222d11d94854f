//! # Review Eligibility Gate
//!
//! Decides whether a client may rate the restaurant or the courier of one of
//! their orders, and records the rating.
//!
//! Preconditions for [`ReviewGate::add_review`], checked in this order:
//!
//! 1. rating within 1..=5 and comment within the configured length (no lookup yet)
//! 2. the order exists and belongs to the reviewer, else `NotFound`
//! 3. the order is `DELIVERED`, else `InvalidState`
//! 4. for a courier review, a courier was assigned, else `InvalidState`
//! 5. no review of that kind exists yet for the order, else `Conflict`
//!
//! Steps 2 to 4 read fields that cannot change once the order is delivered.
//! Step 5 runs inside the Review actor together with the insert.

use crate::clients::{OrderClient, ReviewClient};
use crate::error::ServiceError;
use crate::model::{
    Order, OrderId, OrderStatus, RestaurantId, Review, ReviewCreate, ReviewId, ReviewTarget,
    ReviewTargetKind, UserId,
};
use crate::review_actor::{ReviewError, MAX_RATING, MIN_RATING};
use serde::Serialize;
use tracing::{info, instrument};

/// What a client has reviewed, and may still review, for one order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OrderReviewStatus {
    pub restaurant_reviewed: bool,
    pub courier_reviewed: bool,
    pub can_review_restaurant: bool,
    pub can_review_courier: bool,
}

impl OrderReviewStatus {
    /// Derives eligibility from the order and the reviewer's existing reviews.
    pub fn derive(order: &Order, existing: &[Review]) -> Self {
        let reviewed = |kind| existing.iter().any(|r| r.target.kind() == kind);
        let restaurant_reviewed = reviewed(ReviewTargetKind::Restaurant);
        let courier_reviewed = reviewed(ReviewTargetKind::Courier);
        let delivered = order.status == OrderStatus::Delivered;
        Self {
            restaurant_reviewed,
            courier_reviewed,
            can_review_restaurant: delivered && !restaurant_reviewed,
            can_review_courier: delivered && order.courier_id.is_some() && !courier_reviewed,
        }
    }
}

#[derive(Clone)]
pub struct ReviewGate {
    reviews: ReviewClient,
    orders: OrderClient,
    comment_max_len: usize,
}

impl ReviewGate {
    pub fn new(reviews: ReviewClient, orders: OrderClient, comment_max_len: usize) -> Self {
        Self {
            reviews,
            orders,
            comment_max_len,
        }
    }

    #[instrument(skip(self, comment))]
    pub async fn add_review(
        &self,
        reviewer_id: UserId,
        order_id: OrderId,
        kind: ReviewTargetKind,
        rating: u8,
        comment: Option<String>,
    ) -> Result<ReviewId, ServiceError> {
        if !(MIN_RATING..=MAX_RATING).contains(&rating) {
            return Err(ReviewError::ValidationError(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {rating}"
            ))
            .into());
        }
        let comment = self.normalize_comment(comment)?;

        let order = self.owned_order(reviewer_id, order_id).await?;
        if order.status != OrderStatus::Delivered {
            return Err(ServiceError::InvalidState(format!(
                "order must be delivered, {order_id} is {}",
                order.status
            )));
        }
        let target = match kind {
            ReviewTargetKind::Restaurant => ReviewTarget::Restaurant(order.restaurant_id),
            ReviewTargetKind::Courier => ReviewTarget::Courier(order.courier_id.ok_or_else(|| {
                ServiceError::InvalidState(format!("no courier assigned to {order_id}"))
            })?),
        };

        let id = self
            .reviews
            .create_review(ReviewCreate {
                order_id,
                reviewer_id,
                target,
                rating,
                comment,
            })
            .await?;
        info!(review_id = %id, %order_id, %kind, rating, "Review added");
        Ok(id)
    }

    pub async fn order_review_status(
        &self,
        reviewer_id: UserId,
        order_id: OrderId,
    ) -> Result<OrderReviewStatus, ServiceError> {
        let order = self.owned_order(reviewer_id, order_id).await?;
        let existing = self.reviews_by(reviewer_id, order_id).await?;
        Ok(OrderReviewStatus::derive(&order, &existing))
    }

    /// The client's most recent delivered order at the restaurant that still
    /// awaits a restaurant review.
    pub async fn find_reviewable_order_for_restaurant(
        &self,
        client_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Option<Order>, ServiceError> {
        for order in self.orders.list_delivered(client_id, restaurant_id).await? {
            let existing = self.reviews_by(client_id, order.id).await?;
            if OrderReviewStatus::derive(&order, &existing).can_review_restaurant {
                return Ok(Some(order));
            }
        }
        Ok(None)
    }

    pub async fn list_for_restaurant(
        &self,
        restaurant_id: RestaurantId,
    ) -> Result<Vec<Review>, ServiceError> {
        Ok(self.reviews.list_for_restaurant(restaurant_id).await?)
    }

    pub async fn list_for_courier(&self, courier_id: UserId) -> Result<Vec<Review>, ServiceError> {
        Ok(self.reviews.list_for_courier(courier_id).await?)
    }

    fn normalize_comment(&self, comment: Option<String>) -> Result<Option<String>, ServiceError> {
        let Some(comment) = comment else {
            return Ok(None);
        };
        let trimmed = comment.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        let length = trimmed.chars().count();
        if length > self.comment_max_len {
            return Err(ReviewError::ValidationError(format!(
                "comment is {length} characters, at most {} allowed",
                self.comment_max_len
            ))
            .into());
        }
        Ok(Some(trimmed.to_string()))
    }

    async fn owned_order(&self, reviewer_id: UserId, order_id: OrderId) -> Result<Order, ServiceError> {
        self.orders
            .find_order(order_id)
            .await?
            .filter(|order| order.client_id == reviewer_id)
            .ok_or_else(|| ServiceError::NotFound(format!("order {order_id}")))
    }

    async fn reviews_by(&self, reviewer_id: UserId, order_id: OrderId) -> Result<Vec<Review>, ServiceError> {
        let mut reviews = self.reviews.list_for_order(order_id).await?;
        reviews.retain(|r| r.reviewer_id == reviewer_id);
        Ok(reviews)
    }
}
