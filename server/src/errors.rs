// server/src/errors.rs

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::json;
use storefront::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
  #[error("Resource Not Found: {0}")]
  NotFound(String),

  // The request body could not be read at all (too large, broken stream)
  #[error("Unreadable Request Body: {0}")]
  Payload(String),

  #[error("Configuration Error: {0}")]
  Config(String),

  #[error("Store Error: {0}")]
  Store(#[from] StoreError),

  #[error("Internal Server Error: {0}")]
  Internal(String), // For miscellaneous errors
}

// Anything that reaches a handler as an opaque anyhow::Error is an internal failure.
impl From<anyhow::Error> for AppError {
  fn from(err: anyhow::Error) -> Self {
    AppError::Internal(format!("{:#}", err))
  }
}

impl AppError {
  /// Message sent to the client. Internal details stay in the logs.
  fn client_message(&self) -> String {
    match self {
      AppError::NotFound(m) => m.clone(),
      AppError::Store(StoreError::ProductNotFound { .. }) => "Product not found".to_string(),
      AppError::Store(StoreError::OrderNotFound { .. }) => "Order not found".to_string(),
      AppError::Store(StoreError::MalformedBody(detail)) => format!("Invalid JSON: {}", detail),
      AppError::Payload(detail) => format!("Invalid request body: {}", detail),
      AppError::Store(StoreError::InvalidClock(_)) | AppError::Config(_) | AppError::Internal(_) => {
        "An internal error occurred".to_string()
      }
    }
  }
}

impl ResponseError for AppError {
  fn status_code(&self) -> StatusCode {
    match self {
      AppError::Store(StoreError::MalformedBody(_)) | AppError::Payload(_) => StatusCode::BAD_REQUEST,
      AppError::NotFound(_)
      | AppError::Store(StoreError::ProductNotFound { .. })
      | AppError::Store(StoreError::OrderNotFound { .. }) => StatusCode::NOT_FOUND,
      AppError::Store(StoreError::InvalidClock(_)) | AppError::Config(_) | AppError::Internal(_) => {
        StatusCode::INTERNAL_SERVER_ERROR
      }
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();
    // Log the full error when it's turned into a response
    if status.is_server_error() {
      tracing::error!(application_error = %self, "Responding with error");
    } else {
      tracing::warn!(application_error = %self, status = status.as_u16(), "Responding with client error");
    }
    HttpResponse::build(status).json(json!({ "error": self.client_message() }))
  }
}

// Define a Result type alias for the application
pub type Result<T, E = AppError> = std::result::Result<T, E>;
