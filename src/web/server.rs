//! HTTP server implementation

use anyhow::Context;
use axum::{
    extract::DefaultBodyLimit,
    routing::{get, MethodRouter},
    Router,
};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use super::handlers::{
    delete_record, get_record, head_record, put_record, stats_handler, AppState,
};
use crate::config::ServerConfig;

/// Path reserved for store statistics; it never names a record
pub const STATS_PATH: &str = "/_stats";

/// Method routing shared by every record path
fn record_routes() -> MethodRouter<AppState> {
    get(get_record)
        .head(head_record)
        .put(put_record)
        .post(put_record)
        .delete(delete_record)
}

/// Build the application router
pub fn router(store: AppState, config: &ServerConfig) -> Router {
    // "/*path" does not match the bare root, so "/" gets its own route
    let mut app = Router::new()
        .route(STATS_PATH, get(stats_handler))
        .route("/", record_routes())
        .route("/*path", record_routes())
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http());

    // Browser clients on other origins
    if config.cors_permissive {
        app = app.layer(CorsLayer::permissive());
    }

    app.with_state(store)
}

/// Run the web server until Ctrl-C
pub async fn run(config: &ServerConfig, store: AppState) -> anyhow::Result<()> {
    // Bind the TCP listener
    let addr = config.socket_addr()?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;

    serve(listener, store, config, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` completes
pub async fn serve<F>(
    listener: TcpListener,
    store: AppState,
    config: &ServerConfig,
    shutdown: F,
) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    // Build the application router
    let app = router(store, config);
    info!("pathstore listening on http://{}", listener.local_addr()?);

    // Start the server
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server error")?;

    info!("pathstore stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown requested"),
        Err(e) => {
            warn!("failed to listen for Ctrl-C, running until killed: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
