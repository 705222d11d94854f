//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide `tracing` subscriber.
//!
//! The runtime logs every request with an `entity_type` field (`Order`, `Dish`, …)
//! and the entity id, so module paths add nothing and are hidden
//! (`with_target(false)`). Spans opened by typed clients with `#[instrument]`
//! are shown inline by the compact formatter.
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle: Created, Done, Shutdown
//! RUST_LOG=debug cargo run     # adds payloads: Create params=OrderCreate { … }
//! RUST_LOG=eatgo_orders=debug,actor_framework=info cargo run
//! ```
//!
//! With `RUST_LOG=info`, walking an order to delivery looks like:
//!
//! ```text
//! INFO Created entity_type="Order" id=order_1 size=1
//! INFO Order status changed order_id=order_1 from=PLACED to=ACCEPTED
//! INFO Done entity_type="Order" id=order_1 op="Action"
//! WARN Failed entity_type="Order" id=order_1 op="Action" error=Invalid transition from READY to DELIVERED
//! ```

/// Initializes structured logging filtered by `RUST_LOG`.
///
/// Calling it twice panics (a global subscriber can only be set once); tests that
/// want logs should use [`try_setup_tracing`].
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}

/// Like [`setup_tracing`], but returns `false` instead of panicking when a
/// subscriber is already installed.
pub fn try_setup_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .try_init()
        .is_ok()
}
