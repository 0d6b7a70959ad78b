// core/src/models/category.rs

use serde::{Deserialize, Serialize};

/// Categories are seeded once and never written afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id: u64,
  pub name: String,
  pub description: String,
}
