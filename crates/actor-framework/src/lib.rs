//! # Actor Framework
//!
//! Building blocks for type-safe resource actors on tokio: one actor task owns all
//! entities of one type, handles requests sequentially, and is reached through a
//! cloneable typed client.
//!
//! ## Layers
//!
//! 1. **Entity** ([`ActorEntity`]): the domain type, its payloads, actions, queries and hooks.
//! 2. **Runtime** ([`ResourceActor`]): the message loop that owns the store.
//! 3. **Interface** ([`ResourceClient`], [`ActorClient`]): typed async calls over channels.
//!
//! ## Why an actor per entity type
//!
//! - No locks around the store: the actor task is its only owner.
//! - Read-modify-write hooks (`on_create`, `handle_action`) run to completion before the
//!   next request is looked at, so invariants that span a check and a write hold
//!   without extra coordination.
//! - Actors for different entity types run in parallel and talk to each other only
//!   through clients injected as `Context`.
//!
//! ## Context Injection
//!
//! Dependencies are passed to `run()`, not `new()`. All actors can be created first
//! and wired afterwards, whatever their dependency graph looks like:
//!
//! ```rust
//! use actor_framework::{ActorEntity, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Menu { id: u64, price: u64 }
//! #[derive(Debug)] struct MenuCreate { price: u64 }
//! #[derive(Debug)] struct MenuUpdate;
//! #[derive(Debug)] enum MenuAction {}
//! #[derive(Debug, thiserror::Error)] #[error("menu error")] struct MenuError;
//!
//! #[async_trait]
//! impl ActorEntity for Menu {
//!     type Id = u64; type Create = MenuCreate; type Update = MenuUpdate; type Action = MenuAction;
//!     type ActionResult = (); type Query = (); type Context = (); type Error = MenuError;
//!     fn from_create_params(id: u64, p: MenuCreate) -> Result<Self, Self::Error> { Ok(Self { id, price: p.price }) }
//!     async fn on_update(&mut self, _: MenuUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: MenuAction, _: &()) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! // A bill snapshots the menu price when it is created.
//! #[derive(Clone, Debug)] struct Bill { id: u64, menu: u64, amount: u64 }
//! #[derive(Debug)] struct BillCreate { menu: u64 }
//! #[derive(Debug)] struct BillUpdate;
//! #[derive(Debug)] enum BillAction {}
//! #[derive(Debug, thiserror::Error)]
//! enum BillError { #[error("unknown menu {0}")] UnknownMenu(u64) }
//!
//! #[async_trait]
//! impl ActorEntity for Bill {
//!     type Id = u64; type Create = BillCreate; type Update = BillUpdate; type Action = BillAction;
//!     type ActionResult = (); type Query = (); type Context = ResourceClient<Menu>; type Error = BillError;
//!     fn from_create_params(id: u64, p: BillCreate) -> Result<Self, Self::Error> {
//!         Ok(Self { id, menu: p.menu, amount: 0 })
//!     }
//!     async fn on_create(&mut self, menus: &ResourceClient<Menu>) -> Result<(), Self::Error> {
//!         let menu = menus.get(self.menu).await.ok().flatten().ok_or(BillError::UnknownMenu(self.menu))?;
//!         self.amount = menu.price;
//!         Ok(())
//!     }
//!     async fn on_update(&mut self, _: BillUpdate, _: &ResourceClient<Menu>) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, a: BillAction, _: &ResourceClient<Menu>) -> Result<(), Self::Error> { match a {} }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (menu_actor, menus) = ResourceActor::<Menu>::new(10);
//!     let (bill_actor, bills) = ResourceActor::<Bill>::new(10);
//!     tokio::spawn(menu_actor.run(()));
//!     tokio::spawn(bill_actor.run(menus.clone()));
//!
//!     let menu = menus.create(MenuCreate { price: 1250 }).await.unwrap();
//!     let bill = bills.create(BillCreate { menu }).await.unwrap();
//!     assert_eq!(bills.get(bill).await.unwrap().unwrap().amount, 1250);
//!     assert!(bills.create(BillCreate { menu: 99 }).await.is_err());
//! }
//! ```
//!
//! ## Errors
//!
//! Hooks fail with the entity's own error type. The runtime boxes it into
//! [`FrameworkError::EntityError`]; typed clients get it back with
//! [`FrameworkError::into_entity_error`].
//!
//! ## Testing
//!
//! [`mock::MockClient`] answers a client's requests from scripted expectations, so an
//! actor can be run for real against mocked collaborators.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
