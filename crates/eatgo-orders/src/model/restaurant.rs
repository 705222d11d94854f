use crate::model::{RestaurantId, UserId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: RestaurantId,
    pub name: String,
    pub address: String,
    pub delivery_price: Money,
    pub admin_id: UserId,
}

#[derive(Debug, Clone)]
pub struct RestaurantCreate {
    pub name: String,
    pub address: String,
    pub delivery_price: Money,
    pub admin_id: UserId,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantUpdate {
    pub name: Option<String>,
    pub address: Option<String>,
    pub delivery_price: Option<Money>,
}

#[derive(Debug, Clone)]
pub enum RestaurantQuery {
    ByAdmin(UserId),
}
