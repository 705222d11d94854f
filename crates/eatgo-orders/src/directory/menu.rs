//! [`ActorEntity`] implementation for [`Dish`].

use crate::directory::DirectoryError;
use crate::model::{Dish, DishCreate, DishId, DishQuery, DishUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Dish {
    type Id = DishId;
    type Create = DishCreate;
    type Update = DishUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Query = DishQuery;
    type Context = ();
    type Error = DirectoryError;

    fn from_create_params(id: DishId, params: DishCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            restaurant_id: params.restaurant_id,
            name: params.name,
            description: params.description,
            price: params.price,
            available: params.available,
        })
    }

    /// Price changes never reach existing orders: they keep their snapshot.
    async fn on_update(&mut self, update: DishUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(available) = update.available {
            self.available = available;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }

    fn matches(&self, query: &DishQuery) -> bool {
        match query {
            DishQuery::OfRestaurant(restaurant_id) => self.restaurant_id == *restaurant_id,
        }
    }
}
