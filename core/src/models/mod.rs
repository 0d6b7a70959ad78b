// core/src/models/mod.rs

//! Records held by the [`Store`](crate::Store) and returned to clients.

pub mod category;
pub mod order;
pub mod product;

pub use category::Category;
pub use order::{Order, OrderStatus};
pub use product::Product;
