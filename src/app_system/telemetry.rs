/// Configure tracing once at startup for the whole process.
///
/// Verbosity follows `RUST_LOG` (default `info`). Output goes to stderr so it
/// never mixes with the cart printed on stdout.
///
/// ```bash
/// RUST_LOG=debug cart add 42
/// RUST_LOG=cart_store::cart_actor=debug,warn cart list
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
