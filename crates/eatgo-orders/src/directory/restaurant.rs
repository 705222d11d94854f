//! [`ActorEntity`] implementation for [`Restaurant`].

use crate::directory::DirectoryError;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantQuery, RestaurantUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;
use std::convert::Infallible;

#[async_trait]
impl ActorEntity for Restaurant {
    type Id = RestaurantId;
    type Create = RestaurantCreate;
    type Update = RestaurantUpdate;
    type Action = Infallible;
    type ActionResult = ();
    type Query = RestaurantQuery;
    type Context = ();
    type Error = DirectoryError;

    fn from_create_params(id: RestaurantId, params: RestaurantCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            address: params.address,
            delivery_price: params.delivery_price,
            admin_id: params.admin_id,
        })
    }

    /// # Fields Updated
    /// - `name`, `address`
    /// - `delivery_price`: affects orders placed afterwards only
    async fn on_update(&mut self, update: RestaurantUpdate, _ctx: &()) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(address) = update.address {
            self.address = address;
        }
        if let Some(price) = update.delivery_price {
            self.delivery_price = price;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: Infallible, _ctx: &()) -> Result<(), Self::Error> {
        match action {}
    }

    fn matches(&self, query: &RestaurantQuery) -> bool {
        match query {
            RestaurantQuery::ByAdmin(admin_id) => self.admin_id == *admin_id,
        }
    }

    // An admin runs exactly one restaurant.
    fn conflicts_with(&self, other: &Self) -> bool {
        self.admin_id == other.admin_id
    }
}
