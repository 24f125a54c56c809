use crate::clients::ProductClient;
use crate::config::ServerConfig;
use crate::framework::{CollectionStore, FailurePolicy, JsonFileStore};
use crate::model::Product;
use tracing::{error, info};

/// The runtime orchestrator for the products service.
///
/// `ProductSystem` owns the one actor that serializes access to the product collection
/// and hands out the client every HTTP handler talks to.
///
/// # Example
///
/// ```ignore
/// let system = ProductSystem::new(&ServerConfig::default());
///
/// let product = system.product_client.create_product(params).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct ProductSystem {
    /// Client for interacting with the Product actor
    pub product_client: ProductClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl ProductSystem {
    /// Starts a Product actor over the JSON file named in `config`.
    pub fn new(config: &ServerConfig) -> Self {
        info!(path = %config.data_path.display(), policy = ?config.failure_policy, "Starting product system");
        Self::with_store(
            JsonFileStore::new(&config.data_path),
            config.failure_policy,
            config.channel_capacity,
        )
    }

    /// Starts a Product actor over any store.
    pub fn with_store(
        store: impl CollectionStore<Product> + 'static,
        policy: FailurePolicy,
        channel_capacity: usize,
    ) -> Self {
        let (product_actor, product_client) =
            crate::product_actor::new(store, policy, channel_capacity);
        let handle = tokio::spawn(product_actor.run());

        Self {
            product_client,
            handle,
        }
    }

    /// Gracefully shuts down the system.
    ///
    /// Dropping the client closes the channel once every clone (e.g. the one held by the
    /// HTTP router) is gone. The actor finishes the requests already queued, then exits.
    /// Returns an error if the actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        drop(self.product_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::MemoryStore;
    use crate::model::ProductCreate;
    use serde_json::json;

    #[tokio::test]
    async fn test_shutdown_waits_for_actor() {
        let store = MemoryStore::new();
        let system = ProductSystem::with_store(store.clone(), FailurePolicy::Strict, 4);

        let params = ProductCreate::try_from(json!({"name": "Olma", "price": 5000})).unwrap();
        system.product_client.create_product(params).await.unwrap();

        system.shutdown().await.unwrap();
        assert_eq!(store.snapshot().len(), 1);
    }
}
