//! # Generic Actor Server
//!
//! This module defines the `ResourceActor`, the component that owns the state of one
//! entity type and processes every request for it sequentially.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::HashMap;
use std::fmt::Display;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// # Concurrency Model
/// The actor owns its `store` and the receiving end of the channel. It handles one
/// message at a time, awaiting entity hooks inline, so a hook that reads and then
/// writes an entity can never interleave with another request for the same entity
/// type. Two transitions racing on one order are therefore applied one after the
/// other, and the second one sees the first one's result.
///
/// Different actors (users, dishes, orders, …) run in parallel on their own tasks.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor (server) and its client.
/// 2.  **Wire**: pass dependencies (other clients) into `actor.run(context)`.
/// 3.  **Run**: spawn the returned future on tokio.
///
/// ```rust
/// use actor_framework::{ActorEntity, ResourceActor};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)] struct Dish { id: u64, available: bool }
/// #[derive(Debug)] struct DishCreate;
/// #[derive(Debug)] struct DishUpdate { available: bool }
/// #[derive(Debug)] enum DishAction {}
/// #[derive(Debug, thiserror::Error)] #[error("dish error")] struct DishError;
///
/// #[async_trait]
/// impl ActorEntity for Dish {
///     type Id = u64;
///     type Create = DishCreate;
///     type Update = DishUpdate;
///     type Action = DishAction;
///     type ActionResult = ();
///     type Query = ();
///     type Context = ();
///     type Error = DishError;
///
///     fn from_create_params(id: u64, _: DishCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id, available: true })
///     }
///     async fn on_update(&mut self, u: DishUpdate, _: &()) -> Result<(), Self::Error> {
///         self.available = u.available;
///         Ok(())
///     }
///     async fn handle_action(&mut self, a: DishAction, _: &()) -> Result<(), Self::Error> {
///         match a {}
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = ResourceActor::<Dish>::new(10);
///     tokio::spawn(actor.run(()));
///
///     let id = client.create(DishCreate).await.unwrap();
///     let dish = client.update(id, DishUpdate { available: false }).await.unwrap();
///     assert!(!dish.available);
/// }
/// ```
///
/// # Operations
///
/// * **Create**: next id from the counter → `from_create_params` → `on_create` →
///   conflict scan over the store → insert.
/// * **Get**: clone of the stored entity, or `None`.
/// * **Update**: `on_update` on the stored entity, returns the updated clone.
/// * **Delete**: `on_delete`, then removal.
/// * **Action**: `handle_action` on the stored entity, returns its result.
/// * **List**: clones of every entity whose `matches(query)` holds, ordered by id.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// `buffer_size` is the capacity of the request channel; callers wait when it is full.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// The `context` is handed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Order" instead of "eatgo_orders::order::model::Order"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let result = self.create(params, &context).await;
                    match &result {
                        Ok(id) => info!(entity_type, %id, size = self.store.len(), "Created"),
                        Err(e) => warn!(entity_type, error = %e, "Create rejected"),
                    }
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update {
                    id,
                    update,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?update, "Update");
                    let result = self.update(&id, update, &context).await;
                    log_outcome(entity_type, &id, "Update", &result);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    debug!(entity_type, %id, "Delete");
                    let result = self.delete(&id, &context).await;
                    log_outcome(entity_type, &id, "Delete", &result);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let result = self.act(&id, action, &context).await;
                    log_outcome(entity_type, &id, "Action", &result);
                    let _ = respond_to.send(result);
                }
                ResourceRequest::List { query, respond_to } => {
                    let items = self.list(&query);
                    debug!(entity_type, ?query, count = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    /// Ids of rejected creates are not consumed.
    async fn create(&mut self, params: T::Create, ctx: &T::Context) -> Result<T::Id, FrameworkError> {
        let id = T::Id::from(self.next_id);
        let mut item = T::from_create_params(id.clone(), params).map_err(entity_error)?;
        item.on_create(ctx).await.map_err(entity_error)?;

        if let Some(existing) = self
            .store
            .iter()
            .find_map(|(other_id, other)| item.conflicts_with(other).then_some(other_id))
        {
            return Err(FrameworkError::Conflict(existing.to_string()));
        }

        self.next_id += 1;
        self.store.insert(id.clone(), item);
        Ok(id)
    }

    async fn update(&mut self, id: &T::Id, update: T::Update, ctx: &T::Context) -> Result<T, FrameworkError> {
        let item = self.stored_mut(id)?;
        item.on_update(update, ctx).await.map_err(entity_error)?;
        Ok(item.clone())
    }

    async fn delete(&mut self, id: &T::Id, ctx: &T::Context) -> Result<(), FrameworkError> {
        self.stored_mut(id)?.on_delete(ctx).await.map_err(entity_error)?;
        self.store.remove(id);
        Ok(())
    }

    async fn act(
        &mut self,
        id: &T::Id,
        action: T::Action,
        ctx: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.stored_mut(id)?
            .handle_action(action, ctx)
            .await
            .map_err(entity_error)
    }

    fn list(&self, query: &T::Query) -> Vec<T> {
        let mut matching: Vec<(&T::Id, &T)> = self
            .store
            .iter()
            .filter(|(_, item)| item.matches(query))
            .collect();
        matching.sort_by(|(a, _), (b, _)| a.cmp(b));
        matching.into_iter().map(|(_, item)| item.clone()).collect()
    }

    fn stored_mut(&mut self, id: &T::Id) -> Result<&mut T, FrameworkError> {
        self.store
            .get_mut(id)
            .ok_or_else(|| FrameworkError::NotFound(id.to_string()))
    }
}

fn entity_error<E: std::error::Error + Send + Sync + 'static>(e: E) -> FrameworkError {
    FrameworkError::EntityError(Box::new(e))
}

fn log_outcome<Id: Display, R>(entity_type: &str, id: &Id, op: &str, result: &Result<R, FrameworkError>) {
    match result {
        Ok(_) => info!(entity_type, %id, op, "Done"),
        Err(FrameworkError::NotFound(_)) => warn!(entity_type, %id, op, "Not found"),
        Err(e) => warn!(entity_type, %id, op, error = %e, "Failed"),
    }
}
