use crate::model::{DishId, RestaurantId};
use crate::money::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dish {
    pub id: DishId,
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: Money,
    /// Whether the dish can currently be ordered.
    pub available: bool,
}

#[derive(Debug, Clone)]
pub struct DishCreate {
    pub restaurant_id: RestaurantId,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub available: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DishUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<Money>,
    pub available: Option<bool>,
}

#[derive(Debug, Clone)]
pub enum DishQuery {
    OfRestaurant(RestaurantId),
}
