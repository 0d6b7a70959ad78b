// server/src/web/handlers/mod.rs

use actix_web::web;

use crate::errors::AppError;

// Declare handler modules
pub mod category_handlers;
pub mod order_handlers;
pub mod product_handlers;

/// Record ids are non-negative integers. Anything else in the id segment
/// simply names no record, so callers turn `None` into a 404.
pub(crate) fn parse_record_id(raw: &str) -> Option<u64> {
  raw.trim().parse::<u64>().ok()
}

/// Body extraction failures (over the configured limit, truncated stream)
/// become an `AppError` so they answer with the usual JSON error body.
pub(crate) fn read_body(body: Result<web::Bytes, actix_web::Error>) -> Result<web::Bytes, AppError> {
  body.map_err(|e| AppError::Payload(e.to_string()))
}
