//! Command-line surface: one cart operation per invocation.

use std::fmt::Write as _;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cart_actor::CartError;
use crate::clients::CartClient;
use crate::config::CartConfig;
use crate::domain::{Cart, ProductId, UpdateProductAmount};

#[derive(Debug, Parser)]
#[command(name = "cart", about = "Manage the storefront shopping cart")]
pub struct Cli {
    /// Directory holding the saved cart (overrides CART_STORAGE_DIR)
    #[arg(long, global = true)]
    pub storage_dir: Option<PathBuf>,

    /// Key the cart is saved under (overrides CART_STORAGE_KEY)
    #[arg(long, global = true)]
    pub storage_key: Option<String>,

    /// Base URL of the product API (overrides CART_CATALOG_URL)
    #[arg(long, global = true)]
    pub catalog_url: Option<String>,

    #[command(subcommand)]
    pub command: CartCommand,
}

impl Cli {
    /// Layers the command-line flags over `config`.
    pub fn apply(&self, mut config: CartConfig) -> CartConfig {
        if let Some(dir) = &self.storage_dir {
            config.storage_dir = dir.clone();
        }
        if let Some(key) = &self.storage_key {
            config.storage_key = key.clone();
        }
        if let Some(url) = &self.catalog_url {
            config.catalog_url = url.clone();
        }
        config
    }
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum CartCommand {
    /// Add one unit of a product
    Add { product_id: ProductId },
    /// Remove a product from the cart
    Remove { product_id: ProductId },
    /// Set the amount of a product already in the cart
    Update {
        product_id: ProductId,
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// Show the cart
    List,
}

/// Runs `command` against the cart and returns the resulting cart.
pub async fn execute(client: &CartClient, command: CartCommand) -> Result<Cart, CartError> {
    match command {
        CartCommand::Add { product_id } => client.add_product(product_id).await,
        CartCommand::Remove { product_id } => client.remove_product(product_id).await,
        CartCommand::Update { product_id, amount } => {
            client
                .update_product_amount(UpdateProductAmount::new(product_id, amount))
                .await
        }
        CartCommand::List => client.get_cart().await,
    }
}

pub fn render_cart(cart: &Cart) -> String {
    if cart.is_empty() {
        return "Cart is empty\n".to_string();
    }

    let mut out = String::new();
    for product in cart.items() {
        let _ = writeln!(
            out,
            "{:>6}  {:<24} {:>4} x {:>9.2} = {:>10.2}",
            product.id,
            product.name,
            product.amount,
            product.price,
            product.subtotal()
        );
    }
    let _ = writeln!(
        out,
        "{} item(s), total {:.2}",
        cart.item_count(),
        cart.total()
    );
    out
}
