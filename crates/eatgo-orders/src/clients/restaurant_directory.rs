//! # Restaurant Directory
//!
//! Typed client for the `Restaurant` actor.
use crate::directory::DirectoryError;
use crate::model::{Restaurant, RestaurantCreate, RestaurantId, RestaurantQuery, RestaurantUpdate, UserId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct RestaurantDirectory {
    inner: ResourceClient<Restaurant>,
}

impl RestaurantDirectory {
    pub fn new(inner: ResourceClient<Restaurant>) -> Self {
        Self { inner }
    }

    /// Fails with [`DirectoryError::Conflict`] when the admin already runs a restaurant.
    #[instrument(skip(self))]
    pub async fn create_restaurant(
        &self,
        params: RestaurantCreate,
    ) -> Result<RestaurantId, DirectoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    pub async fn find_restaurant_by_id(
        &self,
        id: RestaurantId,
    ) -> Result<Option<Restaurant>, DirectoryError> {
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn find_restaurant_by_admin_id(
        &self,
        admin_id: UserId,
    ) -> Result<Option<Restaurant>, DirectoryError> {
        debug!("Sending request");
        let found = self.list(RestaurantQuery::ByAdmin(admin_id)).await?;
        Ok(found.into_iter().next())
    }

    #[instrument(skip(self))]
    pub async fn update_restaurant(
        &self,
        id: RestaurantId,
        update: RestaurantUpdate,
    ) -> Result<Restaurant, DirectoryError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Restaurant> for RestaurantDirectory {
    type Error = DirectoryError;

    fn inner(&self) -> &ResourceClient<Restaurant> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DirectoryError::from_framework(e)
    }
}
