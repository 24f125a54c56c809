//! # Products API
//!
//! A small HTTP service for one resource, `products`, stored as a JSON array in
//! `data/products.json`.
//!
//! Every request is answered by reading the whole file, changing it in memory and, for
//! writes, saving the whole file back. The file is only ever touched by a single actor
//! task, so two overlapping requests can never interleave their load-modify-save cycles.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` and its storage seam.
//! - **Role**: Separates the *record rules* (your entity) from the *plumbing* (channel,
//!   message loop, persistence, failure policy).
//! - **Key items**: [`ActorEntity`](framework::ActorEntity),
//!   [`ResourceActor`](framework::ResourceActor), [`JsonFileStore`](framework::JsonFileStore).
//!
//! ### 2. The Domain ([`model`], [`product_actor`])
//! The [`Product`](model::Product) record, its create/update DTOs and validation, and the
//! `ActorEntity` impl that allocates ids and merges updates.
//!
//! ### 3. The Interface ([`clients`])
//! [`ProductClient`](clients::ProductClient) wraps the generic client and speaks
//! [`ProductError`](product_actor::ProductError).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`ProductSystem`](lifecycle::ProductSystem) spawns and stops the actor;
//! [`setup_tracing`](lifecycle::setup_tracing) initializes logging.
//!
//! ### 5. The Transport ([`http`])
//! The axum router, handlers and JSON error responses.
//!
//! ## Running
//!
//! ```bash
//! RUST_LOG=info cargo run
//! curl -X POST localhost:3000/products -d '{"name":"Olma","price":5000}'
//! ```

pub mod clients;
pub mod config;
pub mod framework;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod product_actor;
