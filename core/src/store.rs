// core/src/store.rs

//! Defines the `Store`, the explicitly owned replacement for process-wide
//! product, category and order collections.
//!
//! Products and orders each sit behind a `parking_lot::RwLock`. Every create
//! computes the next id and appends while holding that collection's write
//! lock, so two concurrent creates can never observe the same "current max" or
//! "current count". Reads clone the records out and release the lock before
//! returning.
//!
//! IMPORTANT: lock guards are blocking and never leave this module. Callers
//! receive owned values, so nothing is held across an `.await`.

use parking_lot::RwLock;
use tracing::{debug, info, instrument, warn};

use crate::clock::OrderClock;
use crate::drafts::{NewOrder, NewProduct};
use crate::error::{StoreError, StoreResult};
use crate::models::{Category, Order, OrderStatus, Product};
use crate::seed;

#[derive(Debug, Default)]
pub struct Store {
  products: RwLock<Vec<Product>>,
  categories: Vec<Category>, // immutable after construction, no lock needed
  orders: RwLock<Vec<Order>>,
  clock: OrderClock,
}

impl Store {
  /// An empty store: no products, no categories, no orders.
  pub fn new(clock: OrderClock) -> Self {
    Self::with_catalog(Vec::new(), Vec::new(), clock)
  }

  /// A store loaded with the three seed products and categories.
  pub fn seeded(clock: OrderClock) -> Self {
    Self::with_catalog(seed::products(), seed::categories(), clock)
  }

  pub fn with_catalog(products: Vec<Product>, categories: Vec<Category>, clock: OrderClock) -> Self {
    debug!(
      products = products.len(),
      categories = categories.len(),
      %clock,
      "Store initialized."
    );
    Store {
      products: RwLock::new(products),
      categories,
      orders: RwLock::new(Vec::new()),
      clock,
    }
  }

  pub fn clock(&self) -> OrderClock {
    self.clock
  }

  // --- Catalog ---

  /// All products in creation order.
  pub fn products(&self) -> Vec<Product> {
    self.products.read().clone()
  }

  pub fn product(&self, id: u64) -> StoreResult<Product> {
    let found = self.products.read().iter().find(|p| p.id == id).cloned();
    found.ok_or_else(|| {
      warn!(product_id = id, "Product not found.");
      StoreError::ProductNotFound { id }
    })
  }

  pub fn product_count(&self) -> usize {
    self.products.read().len()
  }

  pub fn categories(&self) -> &[Category] {
    &self.categories
  }

  /// Assigns `max(existing ids) + 1` (or 1 for an empty catalog) and appends.
  #[instrument(name = "Store::create_product", skip_all, fields(product_id = tracing::field::Empty))]
  pub fn create_product(&self, new_product: NewProduct) -> Product {
    let created = {
      let mut products = self.products.write();
      let id = products.iter().map(|p| p.id).max().map_or(1, |max| max + 1);
      let product = new_product.with_id(id);
      products.push(product.clone());
      product
    };
    tracing::Span::current().record("product_id", created.id);
    info!(name = %created.name, "Product created.");
    created
  }

  // --- Order log ---

  pub fn order(&self, id: u64) -> StoreResult<Order> {
    let found = self.orders.read().iter().find(|o| o.id == id).cloned();
    found.ok_or_else(|| {
      warn!(order_id = id, "Order not found.");
      StoreError::OrderNotFound { id }
    })
  }

  pub fn orders(&self) -> Vec<Order> {
    self.orders.read().clone()
  }

  pub fn order_count(&self) -> usize {
    self.orders.read().len()
  }

  /// Assigns `count + 1`, forces status `pending`, stamps `createdAt` from the
  /// store's clock and appends. Orders are never removed, so count-based ids
  /// stay unique.
  #[instrument(name = "Store::create_order", skip_all, fields(order_id = tracing::field::Empty))]
  pub fn create_order(&self, new_order: NewOrder) -> Order {
    let created = {
      let mut orders = self.orders.write();
      let order = Order {
        id: orders.len() as u64 + 1,
        items: new_order.items,
        customer: new_order.customer,
        shipping_address: new_order.shipping_address,
        payment_method: new_order.payment_method,
        status: OrderStatus::Pending,
        created_at: self.clock.now(),
      };
      orders.push(order.clone());
      order
    };
    tracing::Span::current().record("order_id", created.id);
    info!(items = created.items.len(), "Order created.");
    created
  }
}
