//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract every resource (User, Dish, Order, Review, …)
//! implements to be owned by a [`ResourceActor`](crate::ResourceActor). It fixes the
//! associated types for ids, create/update payloads, custom actions, list queries,
//! injected context and errors, and provides the lifecycle hooks the actor calls
//! (`on_create`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods
//! - [`ActorEntity::on_create`] / [`ActorEntity::on_delete`]: default to `Ok(())`.
//! - [`ActorEntity::matches`]: default matches everything, so `List` returns the whole store.
//! - [`ActorEntity::conflicts_with`]: default never conflicts. Override it to get
//!   an atomic uniqueness check on `Create`.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can talk to other actors (an order validating its dishes
/// against the menu actor, for instance). The `Context` associated type is handed to
/// every hook; it is supplied to `run()` rather than `new()`, which lets actors that
/// depend on each other be constructed in any order.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Generated by the actor from a monotonically increasing `u64` counter.
    type Id: Eq + Hash + Ord + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g. a status transition).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Filter used by `List` requests. Use `()` when the entity is never listed selectively.
    type Query: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One error enum per actor, shared by every hook. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) by downcasting.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full entity from the id and payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called after `from_create_params` and before the entity is stored.
    /// Returning an error aborts the create; nothing is persisted.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the store.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    ///
    /// The entity is mutated in place inside the store. An implementation must
    /// validate before it mutates so that an `Err` leaves the entity untouched.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;

    // --- Queries & Invariants (Sync) ---

    /// Whether this entity belongs in the result of a `List` with `query`.
    fn matches(&self, _query: &Self::Query) -> bool {
        true
    }

    /// Whether `self` may not coexist with the already stored `other`.
    ///
    /// Checked against the whole store after `on_create` succeeds and before the insert,
    /// in the same message turn.
    fn conflicts_with(&self, _other: &Self) -> bool {
        false
    }
}
