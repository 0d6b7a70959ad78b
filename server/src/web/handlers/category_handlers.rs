// server/src/web/handlers/category_handlers.rs

use actix_web::{web, HttpResponse};
use tracing::{info, instrument};

use crate::state::AppState;

#[instrument(name = "handler::list_categories", skip(app_state))]
pub async fn list_categories_handler(app_state: web::Data<AppState>) -> HttpResponse {
  let categories = app_state.store.categories();
  info!("Returning {} categories.", categories.len());
  HttpResponse::Ok().json(categories)
}
