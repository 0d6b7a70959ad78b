// core/src/lib.rs

//! Storefront: the in-memory catalog and order log behind the storefront mock API.
//!
//! The crate owns everything that is not HTTP:
//!  - Product, category and order records, serialized with the camelCase field
//!    names the frontend expects.
//!  - Drafts parsed from request bodies and merged field-by-field onto declared
//!    defaults.
//!  - The seed catalog loaded at startup.
//!  - A [`Store`] that serializes every "compute next id + append" step behind a
//!    per-collection write lock, so concurrent creates never share an id.

pub mod clock;
pub mod drafts;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;

// --- Re-exports for the Public API ---

pub use crate::clock::OrderClock;
pub use crate::drafts::{NewOrder, NewProduct, OrderDefaults, OrderDraft, ProductDefaults, ProductDraft};
pub use crate::error::{StoreError, StoreResult};
pub use crate::models::{Category, Order, OrderStatus, Product};
pub use crate::store::Store;
