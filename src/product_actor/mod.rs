//! Product-specific resource logic: the `ActorEntity` impl and the actor factory.

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::ProductClient;
use crate::framework::{CollectionStore, FailurePolicy, ResourceActor};
use crate::model::Product;

/// Creates a new Product actor over `store` and its client.
pub fn new(
    store: impl CollectionStore<Product> + 'static,
    policy: FailurePolicy,
    channel_capacity: usize,
) -> (ResourceActor<Product>, ProductClient) {
    let (actor, generic_client) = ResourceActor::new(channel_capacity, store, policy);
    let client = ProductClient::new(generic_client);

    (actor, client)
}
