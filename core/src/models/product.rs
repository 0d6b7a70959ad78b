// core/src/models/product.rs

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
  pub id: u64,
  pub name: String,
  pub price: f64, // never negative, checked when a draft is parsed
  pub description: String,
  pub image_url: String, // URI or a path under the frontend's asset tree
  pub category: String,  // category *name*, not an id
  pub stock_quantity: u64,
}
