// server/src/config.rs

use crate::errors::{AppError, Result}; // Use AppError specific Result
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;
use storefront::OrderClock;

pub const DEFAULT_MAX_BODY_BYTES: usize = 4 * 1024 * 1024;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
  #[default]
  Pretty,
  Json,
}

impl FromStr for LogFormat {
  type Err = AppError;

  fn from_str(s: &str) -> Result<Self> {
    match s.trim().to_ascii_lowercase().as_str() {
      "pretty" | "text" => Ok(LogFormat::Pretty),
      "json" => Ok(LogFormat::Json),
      other => Err(AppError::Config(format!("Invalid LOG_FORMAT '{}': expected 'pretty' or 'json'", other))),
    }
  }
}

#[derive(Debug, Clone)] // Clone is useful if parts of config are passed around
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  // None leaves the worker count to actix (one per physical core)
  pub workers: Option<usize>,
  // Largest POST body accepted; anything bigger is a 400
  pub max_body_bytes: usize,

  // Start with the three demo products and categories
  pub seed_catalog: bool,
  pub order_clock: OrderClock,

  pub log_format: LogFormat,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present
    Self::from_lookup(|var_name| env::var(var_name).ok())
  }

  /// Builds the config from any key lookup, so parsing can be exercised
  /// without touching the process environment.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let server_host = lookup("SERVER_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
    // PORT is what the launcher scripts set
    let server_port = lookup("SERVER_PORT")
      .or_else(|| lookup("PORT"))
      .unwrap_or_else(|| "3000".to_string())
      .trim()
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;

    let workers = lookup("SERVER_WORKERS")
      .map(|raw| match raw.trim().parse::<usize>() {
        Ok(0) => Err(AppError::Config("SERVER_WORKERS must be at least 1".to_string())),
        Ok(n) => Ok(n),
        Err(e) => Err(AppError::Config(format!("Invalid SERVER_WORKERS: {}", e))),
      })
      .transpose()?;

    let max_body_bytes = match lookup("SERVER_MAX_BODY_BYTES") {
      Some(raw) => match raw.trim().parse::<usize>() {
        Ok(0) => return Err(AppError::Config("SERVER_MAX_BODY_BYTES must be at least 1".to_string())),
        Ok(n) => n,
        Err(e) => return Err(AppError::Config(format!("Invalid SERVER_MAX_BODY_BYTES: {}", e))),
      },
      None => DEFAULT_MAX_BODY_BYTES,
    };

    let seed_catalog = lookup("SEED_CATALOG")
      .unwrap_or_else(|| "true".to_string())
      .trim()
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_CATALOG value: {}", e)))?;

    let order_clock = match lookup("ORDER_CLOCK") {
      Some(raw) => raw
        .parse::<OrderClock>()
        .map_err(|e| AppError::Config(e.to_string()))?,
      None => OrderClock::System,
    };

    let log_format = match lookup("LOG_FORMAT") {
      Some(raw) => raw.parse::<LogFormat>()?,
      None => LogFormat::default(),
    };

    Ok(Self {
      server_host,
      server_port,
      workers,
      max_body_bytes,
      seed_catalog,
      order_clock,
      log_format,
    })
  }

  pub fn bind_address(&self) -> String {
    format!("{}:{}", self.server_host, self.server_port)
  }
}
