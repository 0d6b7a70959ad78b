// server/src/web/routes.rs

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::Method;
use actix_web::{web, App, Error, HttpRequest, HttpResponse};
use serde_json::json;
use tracing_actix_web::TracingLogger;

use crate::errors::AppError;
use crate::state::AppState;
use crate::web::cors;
use crate::web::handlers::{category_handlers, order_handlers, product_handlers};

// Liveness probe for launchers waiting on the port to come up.
async fn health_check_handler(app_state: web::Data<AppState>) -> HttpResponse {
  HttpResponse::Ok().json(json!({
      "status": "ok",
      "orderClock": app_state.store.clock().to_string()
  }))
}

/// Catches everything the routing table does not: CORS preflights to any path
/// get an empty 200, any other unmatched path or method is a 404.
pub async fn fallback_handler(req: HttpRequest) -> Result<HttpResponse, AppError> {
  if *req.method() == Method::OPTIONS {
    return Ok(HttpResponse::Ok().finish());
  }
  Err(AppError::NotFound("Endpoint not found".to_string()))
}

// Resources without an explicit default answer 405; the fallback keeps
// preflights and wrong methods consistent with unknown paths.
fn resource(path: &str) -> actix_web::Resource {
  web::resource(path).default_service(web::to(fallback_handler))
}

// Called from `build_app` (and therefore from both `main.rs` and the handler tests).
pub fn configure_app_routes(cfg: &mut web::ServiceConfig) {
  cfg.service(resource("/health").route(web::get().to(health_check_handler))).service(
    web::scope("/api")
      // Catalog
      .service(
        resource("/products")
          .route(web::get().to(product_handlers::list_products_handler))
          .route(web::post().to(product_handlers::create_product_handler)),
      )
      .service(resource("/products/{product_id}").route(web::get().to(product_handlers::get_product_handler)))
      .service(resource("/categories").route(web::get().to(category_handlers::list_categories_handler)))
      // Order log
      .service(resource("/orders").route(web::post().to(order_handlers::create_order_handler)))
      .service(resource("/orders/{order_id}").route(web::get().to(order_handlers::get_order_handler))),
  );
}

/// The complete application: shared state, routing table, CORS headers on every
/// response, request tracing outermost.
pub fn build_app(
  app_state: AppState,
) -> App<
  impl ServiceFactory<
    ServiceRequest,
    Config = (),
    Response = ServiceResponse<impl MessageBody>,
    Error = Error,
    InitError = (),
  >,
> {
  let payload_config = web::PayloadConfig::new(app_state.config.max_body_bytes);
  App::new()
    .app_data(payload_config)
    .app_data(web::Data::new(app_state)) // Share AppState with handlers
    .configure(configure_app_routes)
    .default_service(web::to(fallback_handler))
    .wrap(cors::default_headers())
    .wrap(TracingLogger::default()) // Actix middleware for tracing requests
}
