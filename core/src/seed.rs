// core/src/seed.rs

//! The catalog every fresh store starts with.

use crate::drafts::PLACEHOLDER_IMAGE_URL;
use crate::models::{Category, Product};

pub fn products() -> Vec<Product> {
  [
    (1, 99.99, "Electronics", 50),
    (2, 149.99, "Clothing", 100),
    (3, 79.99, "Home", 25),
  ]
  .into_iter()
  .map(|(id, price, category, stock_quantity)| Product {
    id,
    name: format!("Product {}", id),
    price,
    description: format!("This is product {} description", id),
    image_url: PLACEHOLDER_IMAGE_URL.to_string(),
    category: category.to_string(),
    stock_quantity,
  })
  .collect()
}

pub fn categories() -> Vec<Category> {
  [
    (1, "Electronics", "Electronic devices and accessories"),
    (2, "Clothing", "Apparel and fashion items"),
    (3, "Home", "Household items and furniture"),
  ]
  .into_iter()
  .map(|(id, name, description)| Category {
    id,
    name: name.to_string(),
    description: description.to_string(),
  })
  .collect()
}
