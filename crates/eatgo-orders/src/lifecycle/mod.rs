//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the engine's actors.
//!
//! ## Dependency Injection via Context
//!
//! Actors are created first and receive their dependencies in `run(context)`.
//! Only the Order actor has one:
//!
//! ```rust,ignore
//! impl ActorEntity for Order {
//!     type Context = OrderContext; // directories + notification feed
//! }
//! ```
//!
//! The graph is acyclic (directories never call orders, orders never call
//! reviews), so closing channels is enough to shut everything down; see
//! [`OrderingSystem::shutdown`].
//!
//! ## Observability
//!
//! Tracing is installed by the binary with
//! [`setup_tracing`](actor_framework::tracing::setup_tracing), not here, so tests
//! and embedders choose their own subscriber.

pub mod ordering_system;

pub use ordering_system::*;
