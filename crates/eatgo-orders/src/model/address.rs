use crate::model::{AddressId, UserId};
use serde::{Deserialize, Serialize};

/// A delivery address from a user's address book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: AddressId,
    pub owner_id: UserId,
    pub city: String,
    pub street: String,
    pub postal_code: String,
    pub apartment: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AddressCreate {
    pub owner_id: UserId,
    pub city: String,
    pub street: String,
    pub postal_code: String,
    pub apartment: Option<String>,
}
