// tests/common/mod.rs
#![allow(dead_code)] // Not every test file uses every helper

use once_cell::sync::Lazy;
use serde_json::json;
use storefront::{NewOrder, NewProduct, OrderClock, OrderDefaults, OrderDraft, ProductDefaults, ProductDraft, Store};
use tracing::Level;

// --- Helper for Tracing Setup (call once per test run if needed) ---
static TRACING_INIT: Lazy<()> = Lazy::new(|| {
  tracing_subscriber::fmt()
    .with_max_level(Level::DEBUG)
    .with_test_writer()
    .try_init()
    .ok(); // Several test binaries may race to install a subscriber
});

pub fn setup_tracing() {
  Lazy::force(&TRACING_INIT);
}

// --- Fixtures ---

pub fn seeded_store() -> Store {
  Store::seeded(OrderClock::mock())
}

pub fn new_product(name: &str, price: f64) -> NewProduct {
  ProductDraft {
    name: Some(name.to_string()),
    price: Some(price),
    ..Default::default()
  }
  .merge_onto(&ProductDefaults::default())
}

pub fn new_order(sku: &str, qty: u32) -> NewOrder {
  OrderDraft {
    items: Some(vec![json!({ "sku": sku, "qty": qty })]),
    ..Default::default()
  }
  .merge_onto(&OrderDefaults::default())
}
