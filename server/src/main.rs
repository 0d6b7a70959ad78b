// server/src/main.rs

// Declare modules for the application
mod config;
mod errors;
mod state;
mod web;

use crate::config::{AppConfig, LogFormat};
use crate::state::AppState;

use actix_web::HttpServer;
use anyhow::Context;
use tracing_subscriber::fmt::format::FmtSpan; // For span events in tracing
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
  // RUST_LOG overrides the default `info` level
  let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
  let subscriber = tracing_subscriber::fmt()
    .with_env_filter(env_filter)
    .with_span_events(FmtSpan::CLOSE); // Log when spans close, showing duration

  match format {
    LogFormat::Json => subscriber.json().init(),
    LogFormat::Pretty => subscriber.init(),
  }
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
  // Configuration comes first: it decides the log format.
  let app_config = AppConfig::from_env().context("Failed to load application configuration")?;
  init_tracing(app_config.log_format);

  tracing::info!(
    seed_catalog = app_config.seed_catalog,
    order_clock = %app_config.order_clock,
    "Starting storefront mock API..."
  );

  let server_address = app_config.bind_address();
  let workers = app_config.workers;
  let app_state = AppState::from_config(app_config);
  tracing::info!(
    products = app_state.store.product_count(),
    categories = app_state.store.categories().len(),
    "Store ready."
  );

  let mut server = HttpServer::new(move || web::build_app(app_state.clone()));
  if let Some(workers) = workers {
    server = server.workers(workers);
  }

  tracing::info!("Attempting to bind server to {}...", server_address);
  let server = server
    .bind(&server_address)
    .with_context(|| format!("Failed to bind {}", server_address))?;
  tracing::info!("Mock API server running at http://{}", server_address);

  // Actix stops gracefully on SIGINT/SIGTERM, which is how the launchers shut us down.
  server.run().await.context("Server terminated with an error")?;

  tracing::info!("Server stopped.");
  Ok(())
}
