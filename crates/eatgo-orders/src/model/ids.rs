//! Type-safe identifiers.
//!
//! Each resource actor hands out ids from its own `u64` counter, so a dish id
//! can never be passed where an order id is expected.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u64);

        impl From<u64> for $name {
            fn from(id: u64) -> Self {
                Self(id)
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, concat!($prefix, "_{}"), self.0)
            }
        }
    };
}

entity_id!(
    /// Identifier of any user: client, restaurant admin or courier.
    UserId,
    "user"
);
entity_id!(RestaurantId, "restaurant");
entity_id!(DishId, "dish");
entity_id!(AddressId, "address");
entity_id!(OrderId, "order");
entity_id!(ReviewId, "review");
