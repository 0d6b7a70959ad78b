// server/src/web/mod.rs

// Declare child modules
pub mod cors;
pub mod handlers;
pub mod routes;

pub use routes::build_app;

#[cfg(test)]
pub(crate) mod test_support;
