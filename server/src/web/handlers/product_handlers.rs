// server/src/web/handlers/product_handlers.rs

use actix_web::{web, HttpResponse};
use storefront::{ProductDefaults, ProductDraft};
use tracing::{info, instrument, warn};

use super::{parse_record_id, read_body};
use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::list_products", skip(app_state))]
pub async fn list_products_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let products = app_state.store.products();
  info!("Returning {} products.", products.len());
  HttpResponse::Ok().json(products)
}

#[instrument(name = "handler::get_product", skip(app_state, path), fields(product_id = %path.as_str()))]
pub async fn get_product_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let raw_id = path.into_inner();
  let product_id = parse_record_id(&raw_id).ok_or_else(|| {
    warn!("Product id '{}' is not a valid id.", raw_id);
    AppError::NotFound("Product not found".to_string())
  })?;

  let product = app_state.store.product(product_id)?;
  Ok(HttpResponse::Ok().json(product))
}

/// Parses the body before touching the store, so a malformed body never
/// leaves a partial product behind.
#[instrument(name = "handler::create_product", skip(app_state, body))]
pub async fn create_product_handler(
  app_state: web::Data<AppState>,
  body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
  let body = read_body(body)?;
  let draft = ProductDraft::from_json(&body)?;
  let created = app_state
    .store
    .create_product(draft.merge_onto(&ProductDefaults::default()));

  info!("Product {} created via API.", created.id);
  Ok(HttpResponse::Created().json(created))
}
