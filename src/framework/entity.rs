//! # ActorEntity Trait
//!
//! The `ActorEntity` trait is the contract a record type (e.g. `Product`) must satisfy to be
//! managed by the generic [`ResourceActor`](crate::framework::ResourceActor). It names the
//! id type, the create/update DTOs and the error type, and provides the three pieces of
//! record logic the actor cannot know on its own: how to read an id, how to allocate the
//! next one, and how to build or patch a record.
//!
//! # Architecture Note
//! The actor owns the *plumbing* (channel, load-modify-save, logging). The entity owns the
//! *rules*. Writing the loop once against this trait means a second collection would only
//! need a second `impl ActorEntity`.
//!
//! We use "Associated Types" (type Id, type Create, etc.) to enforce type safety.
//! A `Product` collection accepts a `ProductCreate` payload and nothing else.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::{Debug, Display};

/// Trait that any persisted record must implement to be managed by `ResourceActor`.
///
/// Records are `Serialize + DeserializeOwned` because the whole collection is written to
/// and read back from durable storage on every operation.
pub trait ActorEntity: Clone + Debug + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// The unique identifier for this record.
    type Id: Copy + Eq + Send + Sync + Display + Debug;

    /// The data required to create a new record (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing record.
    type Update: Send + Sync + Debug;

    /// The error type for this record.
    /// Must implement std::error::Error so the framework can box it.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Returns the id of this record.
    fn id(&self) -> Self::Id;

    /// Allocates the id for a record about to be appended to `existing`.
    ///
    /// Called with the freshly loaded collection, so the result only depends on the records
    /// currently persisted. Fails when the id type has no value left to hand out.
    fn next_id(existing: &[Self]) -> Result<Self::Id, Self::Error>;

    /// Construct the full record from the allocated id and the payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Apply an update to this record in place.
    ///
    /// Implementations must leave the id untouched.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
