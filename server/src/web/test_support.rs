// server/src/web/test_support.rs

use actix_web::dev::ServiceResponse;
use actix_web::http::{header, Method};
use actix_web::test;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::web::cors;

/// Seeded store, fixed order clock, everything else at its defaults.
pub fn test_state() -> AppState {
  state_with(&[("ORDER_CLOCK", "fixed")])
}

pub fn state_with(vars: &[(&str, &str)]) -> AppState {
  let config = AppConfig::from_lookup(|key| {
    vars.iter().find(|(k, _)| *k == key).map(|(_, v)| v.to_string())
  })
  .unwrap();
  AppState::from_config(config)
}

pub fn assert_cors_headers<B>(resp: &ServiceResponse<B>) {
  let headers = resp.headers();
  let expected = [
    (header::CONTENT_TYPE, "application/json"),
    (header::ACCESS_CONTROL_ALLOW_ORIGIN, cors::ALLOW_ORIGIN),
    (header::ACCESS_CONTROL_ALLOW_METHODS, cors::ALLOW_METHODS),
    (header::ACCESS_CONTROL_ALLOW_HEADERS, cors::ALLOW_HEADERS),
  ];
  for (name, value) in expected {
    assert_eq!(
      headers.get(&name).and_then(|v| v.to_str().ok()),
      Some(value),
      "header {} on {}",
      name,
      resp.request().path()
    );
  }
}

/// A request carrying `body` verbatim, valid JSON or not.
pub fn json_request(method: Method, uri: &str, body: impl Into<String>) -> test::TestRequest {
  test::TestRequest::default()
    .method(method)
    .uri(uri)
    .insert_header((header::CONTENT_TYPE, "application/json"))
    .set_payload(body.into())
}
