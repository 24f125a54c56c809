//! # System Lifecycle
//!
//! Starting and stopping the actor behind the HTTP layer, and initializing tracing.
//!
//! ## Startup
//!
//! [`ProductSystem::new`] creates the Product actor over the configured JSON file and
//! spawns it on the Tokio runtime. Its `product_client` is cloned into the router.
//!
//! ## Graceful Shutdown
//!
//! 1. **Stop the server** - Ctrl+C ends `axum::serve`, which drops the router's client
//! 2. **Drop the last client** - [`ProductSystem::shutdown`] closes the channel
//! 3. **Actor drains** - queued requests are finished, then `recv()` returns `None`
//! 4. **Await completion** - the actor task is joined
//!
//! No accepted write is lost on shutdown.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by
//! `RUST_LOG`. See the [`tracing`](self::tracing) module.

pub mod product_system;
pub mod tracing;

pub use self::product_system::*;
pub use self::tracing::*;
