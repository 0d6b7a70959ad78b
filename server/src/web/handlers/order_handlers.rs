// server/src/web/handlers/order_handlers.rs

use actix_web::{web, HttpResponse};
use serde_json::json;
use storefront::{OrderDefaults, OrderDraft};
use tracing::{info, instrument, warn};

use super::{parse_record_id, read_body};
use crate::errors::AppError;
use crate::state::AppState;

#[instrument(name = "handler::create_order", skip(app_state, body))]
pub async fn create_order_handler(
  app_state: web::Data<AppState>,
  body: Result<web::Bytes, actix_web::Error>,
) -> Result<HttpResponse, AppError> {
  let body = read_body(body)?;
  // 1. Parse and merge; a malformed body fails here, before the order log is touched.
  let new_order = OrderDraft::from_json(&body)?.merge_onto(&OrderDefaults::default());

  // 2. Id, status and timestamp are assigned inside the store's critical section.
  let order = app_state.store.create_order(new_order);
  info!("Order {} created with {} item(s).", order.id, order.items.len());

  // 3. The wrapper shape the frontend's checkout flow reads.
  Ok(HttpResponse::Created().json(json!({
      "message": "Order created successfully",
      "orderId": order.id,
      "order": order
  })))
}

#[instrument(name = "handler::get_order", skip(app_state, path), fields(order_id = %path.as_str()))]
pub async fn get_order_handler(
  app_state: web::Data<AppState>,
  path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
  let raw_id = path.into_inner();
  let order_id = parse_record_id(&raw_id).ok_or_else(|| {
    warn!("Order id '{}' is not a valid id.", raw_id);
    AppError::NotFound("Order not found".to_string())
  })?;

  let order = app_state.store.order(order_id)?;
  Ok(HttpResponse::Ok().json(order))
}

#[cfg(test)]
mod tests {
  use crate::web::build_app;
  use crate::web::test_support::{assert_cors_headers, json_request, state_with, test_state};
  use actix_web::http::{Method, StatusCode};
  use actix_web::test;
  use chrono::{DateTime, Utc};
  use futures_util::future::join_all;
  use serde_json::{json, Value};
  use std::collections::HashSet;
  use storefront::Order;

  #[actix_web::test]
  async fn test_create_then_fetch_order() {
    let state = test_state();
    let app = test::init_service(build_app(state.clone())).await;
    let previous_count = state.store.order_count() as u64;

    let req = json_request(Method::POST, "/api/orders", r#"{"items":[{"sku":"A","qty":2}]}"#).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_cors_headers(&resp);
    let wrapper: Value = test::read_body_json(resp).await;
    assert_eq!(wrapper["message"], "Order created successfully");
    assert_eq!(wrapper["orderId"], previous_count + 1);
    assert_eq!(
      wrapper["order"],
      json!({
        "id": previous_count + 1,
        "items": [{ "sku": "A", "qty": 2 }],
        "customer": {},
        "shippingAddress": "",
        "paymentMethod": "",
        "status": "pending",
        "createdAt": "2023-05-01T12:00:00Z"
      })
    );

    let uri = format!("/api/orders/{}", wrapper["orderId"]);
    let resp = test::call_service(&app, test::TestRequest::get().uri(&uri).to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_cors_headers(&resp);
    let fetched: Value = test::read_body_json(resp).await;
    assert_eq!(fetched, wrapper["order"]);
  }

  #[actix_web::test]
  async fn test_client_cannot_set_status_or_timestamp() {
    let app = test::init_service(build_app(test_state())).await;

    let body = json!({
      "customer": { "email": "sam@example.com" },
      "shippingAddress": "1 Main St",
      "paymentMethod": "card",
      "status": "shipped",
      "createdAt": "1999-12-31T23:59:59Z"
    });
    let req = json_request(Method::POST, "/api/orders", body.to_string()).to_request();
    let wrapper: Value = test::call_and_read_body_json(&app, req).await;

    let order: Order = serde_json::from_value(wrapper["order"].clone()).unwrap();
    assert_eq!(order.status, storefront::OrderStatus::Pending);
    assert_eq!(order.created_at.to_rfc3339(), "2023-05-01T12:00:00+00:00");
    assert_eq!(order.customer["email"], "sam@example.com");
    assert_eq!(order.shipping_address, "1 Main St");
    assert_eq!(order.payment_method, "card");
    assert!(order.items.is_empty());
  }

  #[actix_web::test]
  async fn test_system_clock_stamps_current_time() {
    let app = test::init_service(build_app(state_with(&[("ORDER_CLOCK", "system")]))).await;
    let before = Utc::now().timestamp();

    let req = json_request(Method::POST, "/api/orders", "{}").to_request();
    let wrapper: Value = test::call_and_read_body_json(&app, req).await;

    let stamped = DateTime::parse_from_rfc3339(wrapper["order"]["createdAt"].as_str().unwrap()).unwrap();
    assert!(stamped.timestamp() >= before - 1);
    assert!(stamped.timestamp() <= Utc::now().timestamp());
  }

  #[actix_web::test]
  async fn test_missing_or_invalid_order_is_not_found() {
    let app = test::init_service(build_app(test_state())).await;

    for uri in ["/api/orders/1", "/api/orders/0", "/api/orders/first"] {
      let resp = test::call_service(&app, test::TestRequest::get().uri(uri).to_request()).await;
      assert_eq!(resp.status(), StatusCode::NOT_FOUND, "GET {}", uri);
      assert_cors_headers(&resp);
      let body: Value = test::read_body_json(resp).await;
      assert_eq!(body["error"], "Order not found");
    }
  }

  #[actix_web::test]
  async fn test_malformed_order_body_is_rejected_without_mutation() {
    let state = test_state();
    let app = test::init_service(build_app(state.clone())).await;

    for body in ["{\"items\": [", "null", r#"{"shippingAddress": {"street": "Main"}}"#] {
      let resp = test::call_service(&app, json_request(Method::POST, "/api/orders", body).to_request()).await;
      assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "body {:?}", body);
      assert_cors_headers(&resp);
    }
    assert_eq!(state.store.order_count(), 0);

    // The next valid order still gets id 1
    let req = json_request(Method::POST, "/api/orders", "{}").to_request();
    let wrapper: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(wrapper["orderId"], 1);
  }

  #[actix_web::test]
  async fn test_scalar_items_and_customer_are_accepted() {
    let app = test::init_service(build_app(test_state())).await;

    let req = json_request(Method::POST, "/api/orders", r#"{"items":"A","customer":7}"#).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_cors_headers(&resp);
    let wrapper: Value = test::read_body_json(resp).await;
    assert_eq!(wrapper["order"]["items"], json!(["A"]));
    assert_eq!(wrapper["order"]["customer"], json!(7));
  }

  fn order_body_with_items(count: usize) -> String {
    let items: Vec<Value> = (0..count).map(|n| json!({ "sku": format!("SKU-{:06}", n), "qty": 1 })).collect();
    json!({ "items": items }).to_string()
  }

  #[actix_web::test]
  async fn test_large_order_within_default_limit_is_created() {
    let app = test::init_service(build_app(test_state())).await;

    let body = order_body_with_items(20_000);
    assert!(body.len() > 256 * 1024);
    let req = json_request(Method::POST, "/api/orders", body).to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_cors_headers(&resp);
    let wrapper: Value = test::read_body_json(resp).await;
    assert_eq!(wrapper["order"]["items"].as_array().map(Vec::len), Some(20_000));
  }

  #[actix_web::test]
  async fn test_oversized_body_is_a_json_bad_request() {
    let state = state_with(&[("ORDER_CLOCK", "fixed"), ("SERVER_MAX_BODY_BYTES", "1024")]);
    let app = test::init_service(build_app(state.clone())).await;

    let body = order_body_with_items(100);
    assert!(body.len() > 1024);
    for uri in ["/api/orders", "/api/products"] {
      let req = json_request(Method::POST, uri, body.clone()).to_request();
      let resp = test::call_service(&app, req).await;

      assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "POST {}", uri);
      assert_cors_headers(&resp);
      let error: Value = test::read_body_json(resp).await;
      assert!(error["error"].as_str().unwrap().starts_with("Invalid request body"));
    }
    assert_eq!(state.store.order_count(), 0);
    assert_eq!(state.store.product_count(), 3);
  }

  // Requests are queued together on one runtime thread; lock contention
  // between threads is covered in core/tests/concurrency_tests.rs.
  #[actix_web::test]
  async fn test_batch_of_orders_gets_sequential_distinct_ids() {
    let state = test_state();
    let app = test::init_service(build_app(state.clone())).await;

    let responses = join_all((0..25).map(|n| {
      let body = json!({ "items": [{ "sku": format!("S{}", n), "qty": 1 }] }).to_string();
      test::call_service(&app, json_request(Method::POST, "/api/orders", body).to_request())
    }))
    .await;

    let mut ids = HashSet::new();
    for resp in responses {
      assert_eq!(resp.status(), StatusCode::CREATED);
      let wrapper: Value = test::read_body_json(resp).await;
      let id = wrapper["orderId"].as_u64().unwrap();
      assert!(ids.insert(id), "duplicate order id {}", id);
    }
    assert_eq!(ids, (1..=25).collect::<HashSet<u64>>());
    assert_eq!(state.store.order_count(), 25);
  }
}
