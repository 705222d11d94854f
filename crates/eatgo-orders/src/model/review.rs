use crate::model::{OrderId, RestaurantId, ReviewId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewTargetKind {
    Restaurant,
    Courier,
}

impl Display for ReviewTargetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReviewTargetKind::Restaurant => f.write_str("restaurant"),
            ReviewTargetKind::Courier => f.write_str("courier"),
        }
    }
}

/// Who a review rates, resolved from the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewTarget {
    Restaurant(RestaurantId),
    Courier(UserId),
}

impl ReviewTarget {
    pub fn kind(&self) -> ReviewTargetKind {
        match self {
            ReviewTarget::Restaurant(_) => ReviewTargetKind::Restaurant,
            ReviewTarget::Courier(_) => ReviewTargetKind::Courier,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    pub order_id: OrderId,
    pub reviewer_id: UserId,
    pub target: ReviewTarget,
    /// 1 to 5 inclusive.
    pub rating: u8,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A review whose preconditions have been checked by the
/// [`ReviewGate`](crate::review_gate::ReviewGate).
#[derive(Debug, Clone)]
pub struct ReviewCreate {
    pub order_id: OrderId,
    pub reviewer_id: UserId,
    pub target: ReviewTarget,
    pub rating: u8,
    pub comment: Option<String>,
}

#[derive(Debug, Clone)]
pub enum ReviewQuery {
    ForOrder(OrderId),
    ForRestaurant(RestaurantId),
    ForCourier(UserId),
}
