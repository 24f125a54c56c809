//! # Product Client
//!
//! Provides a high-level API for interacting with the `Product` actor.
//! It wraps a `ResourceClient<Product>` and exposes domain-specific methods whose errors
//! are already [`ProductError`]s, ready to be turned into HTTP responses.

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Product, ProductCreate, ProductId, ProductUpdate};
use crate::product_actor::{ProductError, StorageOp};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Product actor.
#[derive(Clone)]
pub struct ProductClient {
    inner: ResourceClient<Product>,
}

impl ProductClient {
    pub fn new(inner: ResourceClient<Product>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Product> for ProductClient {
    type Error = ProductError;

    fn inner(&self) -> &ResourceClient<Product> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        match e {
            FrameworkError::NotFound(id) => ProductError::NotFound(id),
            FrameworkError::Storage(e) => ProductError::Storage {
                op: if e.is_read() {
                    StorageOp::Read
                } else {
                    StorageOp::Write
                },
                detail: e.to_string(),
            },
            FrameworkError::EntityError(e) => match e.downcast::<ProductError>() {
                Ok(product_error) => *product_error,
                Err(other) => ProductError::ActorCommunicationError(other.to_string()),
            },
            other @ (FrameworkError::ActorClosed | FrameworkError::ActorDropped) => {
                ProductError::ActorCommunicationError(other.to_string())
            }
        }
    }
}

impl ProductClient {
    /// All products, in stored order.
    pub async fn list_products(&self) -> Result<Vec<Product>, ProductError> {
        self.list().await
    }

    /// The product with `id`, or [`ProductError::NotFound`].
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.get(id)
            .await?
            .ok_or_else(|| ProductError::NotFound(id.to_string()))
    }

    // Payload-carrying calls are not on ActorClient.

    #[instrument(skip(self))]
    pub async fn create_product(&self, params: ProductCreate) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_product(
        &self,
        id: ProductId,
        update: ProductUpdate,
    ) -> Result<Product, ProductError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(Self::map_error)
    }

    /// Removes the product with `id` and returns it.
    pub async fn delete_product(&self, id: ProductId) -> Result<Product, ProductError> {
        self.delete(id).await
    }
}
