//! Server mode
//!
//! This module contains the HTTP server startup logic.

use actix_web::{App, HttpServer, middleware::DefaultHeaders, web};
use anyhow::Result;
use tracing::warn;

use crate::api::middleware::RequestLogMiddleware;
use crate::api::services::configure_routes;
use crate::runtime::lifetime;

/// Run the HTTP server
///
/// This function:
/// 1. Prepares server components (storage, shorten service)
/// 2. Configures and starts the HTTP server
/// 3. Listens for graceful shutdown signals
///
/// **Note**: Logging system must be initialized before calling this function
pub async fn run_server() -> Result<()> {
    let startup = lifetime::startup::prepare_server_startup()
        .await
        .map_err(|e| {
            tracing::error!("Server startup failed: {:#}", e);
            e
        })?;

    let store = startup.store.clone();
    let shorten_service = startup.shorten_service.clone();

    let config = crate::config::get_config();
    let cpu_count = config.server.cpu_count.clamp(1, 32);
    warn!("Using {} CPU cores for the server", cpu_count);

    // Clone db reference before storage moves into HttpServer closure
    let db_for_shutdown = startup.storage.get_db().clone();

    let bind_address = format!("{}:{}", config.server.host, config.server.port);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(RequestLogMiddleware)
            .app_data(web::Data::new(store.clone()))
            .app_data(web::Data::new(shorten_service.clone()))
            .wrap(DefaultHeaders::new().add(("Cache-Control", "no-cache, no-store, must-revalidate")))
            .configure(configure_routes)
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .workers(cpu_count);

    warn!("Starting server at http://{}", bind_address);
    let server = server.bind(&bind_address)?.run();

    // Wait for server or shutdown signal
    tokio::select! {
        res = server => {
            res?;
        }
        _ = lifetime::shutdown::listen_for_shutdown(&db_for_shutdown) => {
            warn!("Graceful shutdown completed");
        }
    }

    Ok(())
}
