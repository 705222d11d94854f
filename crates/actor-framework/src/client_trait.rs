//! # ActorClient Trait
//!
//! Common surface for resource-specific clients: default `get`, `list` and `delete`
//! on top of a generic `ResourceClient`, with framework errors translated into the
//! resource's own error type.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit standard read operations.
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Address { id: u64, owner: u64 }
/// #[derive(Debug)] struct AddressCreate { owner: u64 }
/// #[derive(Debug)] struct AddressUpdate;
/// #[derive(Debug)] enum AddressAction {}
/// #[derive(Debug)] struct ByOwner(u64);
/// #[derive(Debug, thiserror::Error)]
/// enum AddressError {
///     #[error("address book unavailable: {0}")]
///     Unavailable(String),
/// }
///
/// #[async_trait]
/// impl ActorEntity for Address {
///     type Id = u64;
///     type Create = AddressCreate;
///     type Update = AddressUpdate;
///     type Action = AddressAction;
///     type ActionResult = ();
///     type Query = ByOwner;
///     type Context = ();
///     type Error = AddressError;
///
///     fn from_create_params(id: u64, p: AddressCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, owner: p.owner })
///     }
///     async fn on_update(&mut self, _: AddressUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, a: AddressAction, _: &()) -> Result<(), Self::Error> { match a {} }
///     fn matches(&self, q: &ByOwner) -> bool { self.owner == q.0 }
/// }
///
/// struct AddressBook {
///     inner: ResourceClient<Address>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Address> for AddressBook {
///     type Error = AddressError;
///
///     fn inner(&self) -> &ResourceClient<Address> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         AddressError::Unavailable(e.to_string())
///     }
/// }
///
/// async fn usage(book: AddressBook) {
///     // get(), list() and delete() come for free
///     let _ = book.get(1).await;
///     let _ = book.list(ByOwner(7)).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity matching `query`, ordered by id.
    #[tracing::instrument(skip(self))]
    async fn list(&self, query: T::Query) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list(query).await.map_err(Self::map_error)
    }

    /// Delete an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
