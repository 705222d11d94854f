//! [`ActorEntity`] implementation for [`Review`].
//!
//! Reviews are write-once. The actor's create-time conflict scan enforces one
//! review per (order, reviewer, target kind) in the same turn as the insert.

use super::ReviewError;
use crate::model::{Review, ReviewCreate, ReviewId, ReviewQuery, ReviewTarget};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use chrono::Utc;
use std::convert::Infallible;

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[async_trait]
impl ActorEntity for Review {
    type Id = ReviewId;
    type Create = ReviewCreate;
    type Update = Infallible;
    type Action = Infallible;
    type ActionResult = ();
    type Query = ReviewQuery;
    type Context = ();
    type Error = ReviewError;

    fn from_create_params(id: ReviewId, params: ReviewCreate) -> Result<Self, Self::Error> {
        if !(MIN_RATING..=MAX_RATING).contains(&params.rating) {
            return Err(ReviewError::ValidationError(format!(
                "rating must be between {MIN_RATING} and {MAX_RATING}, got {}",
                params.rating
            )));
        }
        Ok(Self {
            id,
            order_id: params.order_id,
            reviewer_id: params.reviewer_id,
            target: params.target,
            rating: params.rating,
            comment: params.comment,
            created_at: Utc::now(),
        })
    }

    async fn on_update(&mut self, update: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match update {}
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }

    fn matches(&self, query: &ReviewQuery) -> bool {
        match query {
            ReviewQuery::ForOrder(order_id) => self.order_id == *order_id,
            ReviewQuery::ForRestaurant(restaurant_id) => {
                self.target == ReviewTarget::Restaurant(*restaurant_id)
            }
            ReviewQuery::ForCourier(courier_id) => self.target == ReviewTarget::Courier(*courier_id),
        }
    }

    fn conflicts_with(&self, other: &Self) -> bool {
        self.order_id == other.order_id
            && self.reviewer_id == other.reviewer_id
            && self.target.kind() == other.target.kind()
    }
}
