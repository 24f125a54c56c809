//! Generic actor framework for persisted collections.
//!
//! This module provides the building blocks for a single-writer actor that owns one
//! JSON-backed collection and serves CRUD requests over a channel.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that record types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor that runs load-modify-save for every request
//! - [`ResourceClient`] - Typed handle for sending requests to the actor
//! - [`CollectionStore`] - Whole-collection persistence, with [`JsonFileStore`] for disk
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for an in-memory store and for testing clients without spawning
//! full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod store;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
pub use store::{CollectionStore, FailurePolicy, JsonFileStore, StoreError};
