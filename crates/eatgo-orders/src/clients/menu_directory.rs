//! # Menu Directory
//!
//! Typed client for the `Dish` actor.
use crate::directory::DirectoryError;
use crate::model::{Dish, DishCreate, DishId, DishQuery, DishUpdate, RestaurantId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct MenuDirectory {
    inner: ResourceClient<Dish>,
}

impl MenuDirectory {
    pub fn new(inner: ResourceClient<Dish>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_dish(&self, params: DishCreate) -> Result<DishId, DirectoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    pub async fn find_dish_by_id(&self, id: DishId) -> Result<Option<Dish>, DirectoryError> {
        self.get(id).await
    }

    pub async fn list_dishes(&self, restaurant_id: RestaurantId) -> Result<Vec<Dish>, DirectoryError> {
        self.list(DishQuery::OfRestaurant(restaurant_id)).await
    }

    #[instrument(skip(self))]
    pub async fn update_dish(&self, id: DishId, update: DishUpdate) -> Result<Dish, DirectoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Dish> for MenuDirectory {
    type Error = DirectoryError;

    fn inner(&self) -> &ResourceClient<Dish> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DirectoryError::from_framework(e)
    }
}
