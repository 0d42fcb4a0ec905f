/*!
 * HTTP boundary for the translation gateway.
 *
 * Requests are isolated from each other: shared state is the read-only
 * configuration and the dispatch backend, so no locking is needed.
 */

pub mod routes;

use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use anyhow::{Context, Result};
use log::info;

use crate::app_config::Config;
use crate::translation::dispatch::TranslationBackend;

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration
    pub config: Config,
    /// Translation dispatch backend (mockable in tests)
    pub backend: Arc<dyn TranslationBackend>,
}

impl AppState {
    /// Create the shared state.
    pub fn new(config: Config, backend: Arc<dyn TranslationBackend>) -> Self {
        Self { config, backend }
    }
}

/// Register all routes on an actix service config.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/translate", web::post().to(routes::translate))
        .route("/docx", web::post().to(routes::docx))
        .route("/models", web::get().to(routes::models))
        .route("/health", web::get().to(routes::health));
}

/// Run the HTTP server until shutdown.
pub async fn run_server(state: AppState) -> Result<()> {
    let host = state.config.server.host.clone();
    let port = state.config.server.port;

    info!("Starting babelgate on {}:{}", host, port);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .configure(configure_routes)
    })
    .bind((host.as_str(), port))
    .with_context(|| format!("Failed to bind {}:{}", host, port))?
    .run()
    .await
    .context("HTTP server terminated with an error")
}
