use pathstore::{web, MemoryStore, ServerConfig};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Load configuration (optional config file path as the only argument)
    let config_path = std::env::args().nth(1).map(PathBuf::from);

    let config = match ServerConfig::load(config_path.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("pathstore: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging (RUST_LOG wins over the configured filter)
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("pathstore starting...");
    info!(
        "listen_addr={} initial_capacity={} max_body_bytes={}",
        config.listen_addr, config.initial_capacity, config.max_body_bytes
    );

    // Create the shared store
    let store = Arc::new(MemoryStore::with_capacity(config.initial_capacity));

    // Run the HTTP server until Ctrl-C
    if let Err(e) = web::run(&config, store).await {
        error!("Web server error: {:#}", e);
        std::process::exit(1);
    }
}
