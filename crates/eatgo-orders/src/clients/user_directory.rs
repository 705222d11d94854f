//! # User Directory
//!
//! Typed client for the `User` actor.
use crate::directory::DirectoryError;
use crate::model::{RestaurantId, User, UserCreate, UserId, UserQuery};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct UserDirectory {
    inner: ResourceClient<User>,
}

impl UserDirectory {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }

    /// Registers a user. Fails with [`DirectoryError::Conflict`] when the email is taken.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<UserId, DirectoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    pub async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>, DirectoryError> {
        self.get(id).await
    }

    #[instrument(skip(self))]
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DirectoryError> {
        debug!("Sending request");
        let found = self.list(UserQuery::ByEmail(email.to_string())).await?;
        Ok(found.into_iter().next())
    }

    pub async fn list_couriers(&self, restaurant_id: RestaurantId) -> Result<Vec<User>, DirectoryError> {
        self.list(UserQuery::CouriersOf(restaurant_id)).await
    }

    /// The courier `courier_id`, if that user is a courier of `restaurant_id`.
    #[instrument(skip(self))]
    pub async fn find_courier_for_restaurant(
        &self,
        courier_id: UserId,
        restaurant_id: RestaurantId,
    ) -> Result<Option<User>, DirectoryError> {
        debug!("Sending request");
        let user = self.get(courier_id).await?;
        Ok(user.filter(|u| u.is_courier_of(restaurant_id)))
    }
}

#[async_trait]
impl ActorClient<User> for UserDirectory {
    type Error = DirectoryError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DirectoryError::from_framework(e)
    }
}
