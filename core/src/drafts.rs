// core/src/drafts.rs

//! Request bodies for the two create operations.
//!
//! A draft holds whatever the client sent, every field optional. It is merged
//! field-by-field onto a declared defaults record to produce a complete
//! [`NewProduct`] or [`NewOrder`]; the store then assigns the id.
//!
//! The only input handling performed is type coercion: `price` and
//! `stockQuantity` accept numeric strings as well as JSON numbers, text fields
//! accept numbers and booleans in their JSON text form, a lone `items` value
//! becomes a one-element sequence, and `null` means "use the default".
//! Anything that cannot be coerced is a [`StoreError::MalformedBody`].

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::error::{StoreError, StoreResult};
use crate::models::Product;

pub const PLACEHOLDER_IMAGE_URL: &str = "/images/placeholder.jpg";

/// Parses `body` as a JSON object. Arrays and scalars are rejected up front so
/// serde never maps them positionally onto a draft struct.
fn parse_object(body: &[u8]) -> StoreResult<Value> {
  let value: Value = serde_json::from_slice(body)?;
  if !value.is_object() {
    return Err(StoreError::MalformedBody("expected a JSON object".to_string()));
  }
  Ok(value)
}

// --- Products ---

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
  #[serde(default, deserialize_with = "coerce::text")]
  pub name: Option<String>,
  #[serde(default, deserialize_with = "coerce::non_negative_decimal")]
  pub price: Option<f64>,
  #[serde(default, deserialize_with = "coerce::text")]
  pub description: Option<String>,
  #[serde(default, deserialize_with = "coerce::text")]
  pub image_url: Option<String>,
  #[serde(default, deserialize_with = "coerce::text")]
  pub category: Option<String>,
  #[serde(default, deserialize_with = "coerce::non_negative_integer")]
  pub stock_quantity: Option<u64>,
}

impl ProductDraft {
  pub fn from_json(body: &[u8]) -> StoreResult<Self> {
    Ok(serde_json::from_value(parse_object(body)?)?)
  }

  pub fn merge_onto(self, defaults: &ProductDefaults) -> NewProduct {
    NewProduct {
      name: self.name.unwrap_or_else(|| defaults.name.clone()),
      price: self.price.unwrap_or(defaults.price),
      description: self.description.unwrap_or_else(|| defaults.description.clone()),
      image_url: self.image_url.unwrap_or_else(|| defaults.image_url.clone()),
      category: self.category.unwrap_or_else(|| defaults.category.clone()),
      stock_quantity: self.stock_quantity.unwrap_or(defaults.stock_quantity),
    }
  }
}

/// Values used for any product field the client leaves out.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDefaults {
  pub name: String,
  pub price: f64,
  pub description: String,
  pub image_url: String,
  pub category: String,
  pub stock_quantity: u64,
}

impl Default for ProductDefaults {
  fn default() -> Self {
    Self {
      name: "New Product".to_string(),
      price: 0.0,
      description: String::new(),
      image_url: PLACEHOLDER_IMAGE_URL.to_string(),
      category: "General".to_string(),
      stock_quantity: 0,
    }
  }
}

/// A fully populated product still waiting for its id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
  pub name: String,
  pub price: f64,
  pub description: String,
  pub image_url: String,
  pub category: String,
  pub stock_quantity: u64,
}

impl NewProduct {
  pub fn with_id(self, id: u64) -> Product {
    Product {
      id,
      name: self.name,
      price: self.price,
      description: self.description,
      image_url: self.image_url,
      category: self.category,
      stock_quantity: self.stock_quantity,
    }
  }
}

// --- Orders ---

// `status` and `createdAt` are deliberately absent: the store always sets them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
  #[serde(default, deserialize_with = "coerce::sequence")]
  pub items: Option<Vec<Value>>,
  #[serde(default, deserialize_with = "coerce::present")]
  pub customer: Option<Value>,
  #[serde(default, deserialize_with = "coerce::text")]
  pub shipping_address: Option<String>,
  #[serde(default, deserialize_with = "coerce::text")]
  pub payment_method: Option<String>,
}

impl OrderDraft {
  pub fn from_json(body: &[u8]) -> StoreResult<Self> {
    Ok(serde_json::from_value(parse_object(body)?)?)
  }

  pub fn merge_onto(self, defaults: &OrderDefaults) -> NewOrder {
    NewOrder {
      items: self.items.unwrap_or_else(|| defaults.items.clone()),
      customer: self.customer.unwrap_or_else(|| defaults.customer.clone()),
      shipping_address: self.shipping_address.unwrap_or_else(|| defaults.shipping_address.clone()),
      payment_method: self.payment_method.unwrap_or_else(|| defaults.payment_method.clone()),
    }
  }
}

/// Empty items, empty customer record, empty strings.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDefaults {
  pub items: Vec<Value>,
  pub customer: Value,
  pub shipping_address: String,
  pub payment_method: String,
}

impl Default for OrderDefaults {
  fn default() -> Self {
    Self {
      items: Vec::new(),
      customer: Value::Object(Map::new()),
      shipping_address: String::new(),
      payment_method: String::new(),
    }
  }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewOrder {
  pub items: Vec<Value>,
  pub customer: Value,
  pub shipping_address: String,
  pub payment_method: String,
}

mod coerce {
  use super::*;
  use serde::de::Error as _;

  /// Strings as-is; numbers and booleans in their JSON text form.
  pub(super) fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
  where
    D: Deserializer<'de>,
  {
    match Option::<Value>::deserialize(deserializer)? {
      None | Some(Value::Null) => Ok(None),
      Some(Value::String(s)) => Ok(Some(s)),
      Some(Value::Number(n)) => Ok(Some(n.to_string())),
      Some(Value::Bool(b)) => Ok(Some(b.to_string())),
      Some(other) => Err(D::Error::custom(format!("expected text, got {}", other))),
    }
  }

  /// An array is taken as-is; any other value is a one-element sequence.
  pub(super) fn sequence<'de, D>(deserializer: D) -> Result<Option<Vec<Value>>, D::Error>
  where
    D: Deserializer<'de>,
  {
    Ok(match Option::<Value>::deserialize(deserializer)? {
      None | Some(Value::Null) => None,
      Some(Value::Array(items)) => Some(items),
      Some(single) => Some(vec![single]),
    })
  }

  /// Any value passes through; only `null` falls back to the default.
  pub(super) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
  where
    D: Deserializer<'de>,
  {
    Ok(Option::<Value>::deserialize(deserializer)?.filter(|v| !v.is_null()))
  }

  pub(super) fn non_negative_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
  where
    D: Deserializer<'de>,
  {
    let parsed = match Option::<Value>::deserialize(deserializer)? {
      None | Some(Value::Null) => return Ok(None),
      Some(Value::Number(n)) => n.as_f64(),
      Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
      Some(other) => return Err(D::Error::custom(format!("price must be a number, got {}", other))),
    };
    match parsed {
      Some(price) if price.is_finite() && price >= 0.0 => Ok(Some(price)),
      _ => Err(D::Error::custom("price must be a non-negative number")),
    }
  }

  pub(super) fn non_negative_integer<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
  where
    D: Deserializer<'de>,
  {
    let parsed = match Option::<Value>::deserialize(deserializer)? {
      None | Some(Value::Null) => return Ok(None),
      // 5.0 is accepted as 5; 5.5 and -1 are not.
      Some(Value::Number(n)) => n.as_u64().or_else(|| {
        n.as_f64()
          .filter(|f| f.fract() == 0.0 && *f >= 0.0 && *f <= u64::MAX as f64)
          .map(|f| f as u64)
      }),
      Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
      Some(other) => {
        return Err(D::Error::custom(format!(
          "stockQuantity must be an integer, got {}",
          other
        )))
      }
    };
    parsed
      .map(Some)
      .ok_or_else(|| D::Error::custom("stockQuantity must be a non-negative integer"))
  }
}
