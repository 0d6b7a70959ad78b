// server/src/web/cors.rs

use actix_web::http::header;
use actix_web::middleware::DefaultHeaders;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";

/// Headers stamped on every response, errors and preflights included.
///
/// `DefaultHeaders` only fills in headers a response does not already carry,
/// so JSON bodies keep the content type actix set and empty bodies (OPTIONS)
/// still advertise `application/json`.
pub fn default_headers() -> DefaultHeaders {
  DefaultHeaders::new()
    .add((header::CONTENT_TYPE, "application/json"))
    .add((header::ACCESS_CONTROL_ALLOW_ORIGIN, ALLOW_ORIGIN))
    .add((header::ACCESS_CONTROL_ALLOW_METHODS, ALLOW_METHODS))
    .add((header::ACCESS_CONTROL_ALLOW_HEADERS, ALLOW_HEADERS))
}
