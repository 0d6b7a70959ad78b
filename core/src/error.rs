// core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("Product not found: {id}")]
  ProductNotFound { id: u64 },

  #[error("Order not found: {id}")]
  OrderNotFound { id: u64 },

  /// The request body was not a JSON object, or a field could not be coerced
  /// into its declared type. Raised before any collection is touched.
  #[error("Malformed request body: {0}")]
  MalformedBody(String),

  #[error("Invalid order clock '{0}': expected 'system', 'fixed' or an RFC 3339 timestamp")]
  InvalidClock(String),
}

impl From<serde_json::Error> for StoreError {
  fn from(err: serde_json::Error) -> Self {
    StoreError::MalformedBody(err.to_string())
  }
}

pub type StoreResult<T, E = StoreError> = std::result::Result<T, E>;
