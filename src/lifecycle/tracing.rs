//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate for the whole
//! service: the HTTP handlers, the client wrappers and the Product actor.
//!
//! ## Configuration
//!
//! The format is compact and hides the crate/module prefix (`with_target(false)`). The
//! actor tags every event with `entity_type` instead. Verbosity comes from `RUST_LOG`.
//!
//! ```bash
//! # Mutations, startup and shutdown
//! RUST_LOG=info cargo run
//!
//! # Also reads and full payloads
//! RUST_LOG=debug cargo run
//!
//! # Only the framework layer
//! RUST_LOG=products_api::framework=debug cargo run
//! ```
//!
//! ## Levels
//!
//! | Level | Events |
//! |-------|--------|
//! | `debug` | List/Get, request payloads, file saves |
//! | `info` | Created/Updated/Deleted, actor start and shutdown, server ready |
//! | `warn` | Not found, storage failures |
//!
//! ## Request Trace Example
//!
//! Handlers and client calls are `#[instrument]`ed. The actor runs in its own task, so
//! its events carry `entity_type` and `id` fields rather than the request span.
//!
//! **With `RUST_LOG=info`**:
//!
//! ```text
//! INFO Actor started entity_type="Product" policy=Strict
//! INFO Products API ishga tushdi: http://localhost:3000 addr=0.0.0.0:3000
//! INFO Vaqt: 10.01.2025, 14:03:12
//! INFO Created entity_type="Product" id=1 size=1
//! WARN Not found entity_type="Product" id=9
//! ```
//!
//! **With `RUST_LOG=debug`** the payload shows up once, at the point it enters the actor:
//!
//! ```text
//! DEBUG Create entity_type="Product" params=ProductCreate { name: "Olma", price: Number(5000), extra: {} }
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type identifies the actor instead
        .compact()
        .init();
}
