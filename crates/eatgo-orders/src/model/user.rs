use crate::model::{RestaurantId, UserId};
use serde::{Deserialize, Serialize};

/// What a user may do on the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Client,
    RestaurantAdmin,
    Courier,
}

impl Role {
    /// Human-readable name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            Role::Client => "client",
            Role::RestaurantAdmin => "restaurant admin",
            Role::Courier => "courier",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    /// Restaurant a courier delivers for. Admins are linked through
    /// [`Restaurant::admin_id`](crate::model::Restaurant::admin_id) instead.
    pub restaurant_id: Option<RestaurantId>,
}

impl User {
    pub fn is_courier_of(&self, restaurant_id: RestaurantId) -> bool {
        self.role == Role::Courier && self.restaurant_id == Some(restaurant_id)
    }
}

#[derive(Debug, Clone)]
pub struct UserCreate {
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub restaurant_id: Option<RestaurantId>,
}

impl UserCreate {
    pub fn client(email: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            full_name: full_name.into(),
            role: Role::Client,
            restaurant_id: None,
        }
    }

    pub fn restaurant_admin(email: impl Into<String>, full_name: impl Into<String>) -> Self {
        Self {
            role: Role::RestaurantAdmin,
            ..Self::client(email, full_name)
        }
    }

    pub fn courier(
        email: impl Into<String>,
        full_name: impl Into<String>,
        restaurant_id: RestaurantId,
    ) -> Self {
        Self {
            role: Role::Courier,
            restaurant_id: Some(restaurant_id),
            ..Self::client(email, full_name)
        }
    }
}

/// Selective user lookups.
#[derive(Debug, Clone)]
pub enum UserQuery {
    /// Case-insensitive email match.
    ByEmail(String),
    CouriersOf(RestaurantId),
}
