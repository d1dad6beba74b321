use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::cart_actor::{CartBackends, CartService};
use crate::catalog::{CatalogError, HttpCatalog};
use crate::clients::CartClient;
use crate::config::CartConfig;
use crate::notify::Notifier;
use crate::storage::FileStore;

impl CartBackends {
    /// The production wiring: HTTP catalog and file store from `config`.
    pub fn from_config(config: &CartConfig, notifier: Arc<dyn Notifier>) -> Result<Self, CatalogError> {
        let catalog = HttpCatalog::new(config.catalog_url.clone(), config.catalog_timeout)?;
        Ok(Self {
            catalog: Arc::new(catalog),
            store: Arc::new(FileStore::new(config.storage_dir.clone())),
            notifier,
        })
    }
}

/// Owns the running cart actor for the lifetime of the application.
///
/// Built once by the application root; consumers get clones of
/// `cart_client`.
pub struct CartSystem {
    pub cart_client: CartClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CartSystem {
    /// Loads the persisted cart and starts the actor.
    #[instrument(name = "cart_system", skip_all, fields(storage_key = %config.storage_key))]
    pub fn new(config: &CartConfig, backends: CartBackends) -> Self {
        info!("Starting cart system");

        let (cart_service, cart_client) =
            CartService::new(config.buffer_size, config.storage_key.clone(), backends);
        let handles = vec![tokio::spawn(cart_service.run())];

        info!("Cart system started successfully");
        Self {
            cart_client,
            handles,
        }
    }

    /// Stops the actor after it has handled everything already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system");

        if let Err(e) = self.cart_client.shutdown().await {
            error!(error = %e, "Cart actor already stopped");
        }

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Service shutdown error");
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Cart system shutdown complete");
        Ok(())
    }
}
