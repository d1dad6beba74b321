//! # Cart Store
//!
//! Shopping-cart state for a storefront: which products are in the cart, how
//! many of each, saved across restarts, with product details fetched from the
//! catalog the first time a product is added.
//!
//! ## Terminology Note
//!
//! - **Service** ([`CartService`]) = the actor that owns the cart
//! - **Client** ([`CartClient`]) = the cloneable handle used to talk to it
//!
//! ## Ingredients
//!
//! - **Domain types** - [`Cart`], [`Product`], [`CatalogProduct`]. Cart
//!   operations are pure: each returns a new [`Cart`] or a [`CartError`].
//! - **Message enum** - [`CartRequest`] with oneshot response channels
//! - **Cart actor** - [`CartService`] applies one request at a time, writes the
//!   new cart through to storage, then commits and publishes it
//! - **Collaborators** - [`Catalog`] (product lookup), [`KeyValueStore`]
//!   (persistence), [`Notifier`] (user-facing signals)
//! - **System coordinator** - [`CartSystem`] starts and stops the actor
//! - **Tracing setup** - [`setup_tracing`]
//!
//! ## Example Usage
//!
//! ```no_run
//! # use std::sync::Arc;
//! # use cart_store::{CartBackends, CartConfig, CartSystem, LogNotifier};
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let config = CartConfig::from_env()?;
//! let backends = CartBackends::from_config(&config, Arc::new(LogNotifier))?;
//! let system = CartSystem::new(&config, backends);
//!
//! let cart = system.cart_client.add_product(42).await?;
//! println!("{} item(s)", cart.item_count());
//!
//! system.shutdown().await?;
//! # Ok(())
//! # }
//! ```

pub mod app_system;
pub mod cart_actor;
pub mod catalog;
pub mod cli;
pub mod clients;
pub mod config;
pub mod domain;
pub mod notify;
pub mod storage;

#[cfg(test)]
mod mock_framework;

pub use app_system::{setup_tracing, CartSystem};
pub use cart_actor::{CartBackends, CartError, CartRequest, CartService};
pub use catalog::{Catalog, CatalogError, HttpCatalog, StaticCatalog};
pub use clients::CartClient;
pub use config::{CartConfig, ConfigError};
pub use domain::{Cart, CatalogProduct, Product, ProductId, UpdateProductAmount};
pub use notify::{ChannelNotifier, LogNotifier, Notification, NotificationKind, Notifier};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
