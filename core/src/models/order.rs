// core/src/models/order.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

// Only `Pending` is ever produced; there is no status-transition endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
  #[default]
  Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
  pub id: u64,
  // Line items and customer are opaque; no schema is enforced on either.
  pub items: Vec<Value>,
  pub customer: Value,
  pub shipping_address: String,
  pub payment_method: String,
  pub status: OrderStatus,
  pub created_at: DateTime<Utc>,
}
