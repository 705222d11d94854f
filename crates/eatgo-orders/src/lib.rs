//! # EatGo Order Lifecycle Engine
//!
//! Order creation with frozen pricing, a guarded status state machine shared by
//! restaurant admins, couriers and clients, per-user status notifications and
//! review eligibility, built on resource actors from `actor_framework`.
//!
//! ## Modules
//!
//! - [`model`]: domain types (orders, reviews, directory records, typed ids)
//! - [`directory`]: user, restaurant, menu and address actors the engine looks up
//! - [`order_actor`]: order assembly and the state machine
//! - [`review_actor`] and [`review_gate`]: ratings and who may write them
//! - [`auth`]: principal to [`Capability`](auth::Capability) resolution
//! - [`notifications`]: the per-user status feed
//! - [`projection`], [`stats`]: read models
//! - [`service`]: the request/response surface
//! - [`lifecycle`]: wiring and shutdown
//!
//! ## Flow
//!
//! ```text
//! create_order ─▶ Order::on_create (validate, snapshot prices) ─▶ PLACED
//! transition   ─▶ AuthorizationGate ─▶ Capability ─▶ Order actor ─▶ NotificationFeed
//! DELIVERED    ─▶ ReviewGate
//! ```

pub mod auth;
pub mod clients;
pub mod config;
pub mod directory;
pub mod error;
pub mod lifecycle;
pub mod model;
pub mod money;
pub mod notifications;
pub mod order_actor;
pub mod projection;
pub mod review_actor;
pub mod review_gate;
pub mod service;
pub mod stats;

pub use error::{ErrorKind, ServiceError};
