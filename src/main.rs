use std::sync::Arc;

use clap::Parser;
use tracing::{error, info, Instrument};

use cart_store::cli::{execute, render_cart, Cli};
use cart_store::{setup_tracing, CartBackends, CartConfig, CartSystem, ChannelNotifier};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let cli = Cli::parse();
    let config = cli.apply(CartConfig::from_env().map_err(|e| e.to_string())?);

    let (notifier, mut notifications) = ChannelNotifier::new();
    let backends =
        CartBackends::from_config(&config, Arc::new(notifier)).map_err(|e| e.to_string())?;
    let system = CartSystem::new(&config, backends);

    let span = tracing::info_span!("cart_command", command = ?cli.command);
    let result = async {
        info!("Running cart command");
        execute(&system.cart_client, cli.command.clone()).await
    }
    .instrument(span)
    .await;

    system.shutdown().await?;

    while let Ok(notification) = notifications.try_recv() {
        println!("{notification}");
    }

    match result {
        Ok(cart) => {
            print!("{}", render_cart(&cart));
            Ok(())
        }
        Err(e) => {
            error!(error = %e, "Cart command failed");
            Err(e.to_string())
        }
    }
}
