//! # Address Book
//!
//! Typed client for the `Address` actor.
use crate::directory::DirectoryError;
use crate::model::{Address, AddressCreate, AddressId, UserId};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct AddressBook {
    inner: ResourceClient<Address>,
}

impl AddressBook {
    pub fn new(inner: ResourceClient<Address>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self))]
    pub async fn create_address(&self, params: AddressCreate) -> Result<AddressId, DirectoryError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// The address, only if it belongs to `owner_id`.
    #[instrument(skip(self))]
    pub async fn find_address_by_id_for_user(
        &self,
        id: AddressId,
        owner_id: UserId,
    ) -> Result<Option<Address>, DirectoryError> {
        debug!("Sending request");
        let address = self.get(id).await?;
        Ok(address.filter(|a| a.owner_id == owner_id))
    }
}

#[async_trait]
impl ActorClient<Address> for AddressBook {
    type Error = DirectoryError;

    fn inner(&self) -> &ResourceClient<Address> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        DirectoryError::from_framework(e)
    }
}
