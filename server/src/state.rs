// server/src/state.rs
use crate::config::AppConfig;
use std::sync::Arc;
use storefront::Store;

#[derive(Clone)]
pub struct AppState {
  pub store: Arc<Store>,
  pub config: Arc<AppConfig>, // Share loaded config
}

impl AppState {
  /// Builds the store the config asks for: seeded or empty, with its order clock.
  pub fn from_config(config: AppConfig) -> Self {
    let store = if config.seed_catalog {
      Store::seeded(config.order_clock)
    } else {
      Store::new(config.order_clock)
    };
    AppState {
      store: Arc::new(store),
      config: Arc::new(config),
    }
  }
}
