// core/src/clock.rs

use chrono::{DateTime, SubsecRound, Utc};
use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

/// 2023-05-01T12:00:00Z
const MOCK_ORDER_EPOCH_SECS: i64 = 1_682_942_400;

/// Source of the `createdAt` stamp on new orders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OrderClock {
  /// Wall clock, truncated to whole seconds.
  #[default]
  System,
  /// Every order gets the same instant.
  Fixed(DateTime<Utc>),
}

impl OrderClock {
  /// Pins every order to 2023-05-01T12:00:00Z, the timestamp the demo fixtures use.
  pub fn mock() -> Self {
    match DateTime::<Utc>::from_timestamp(MOCK_ORDER_EPOCH_SECS, 0) {
      Some(ts) => OrderClock::Fixed(ts),
      None => OrderClock::System,
    }
  }

  pub fn now(&self) -> DateTime<Utc> {
    match self {
      OrderClock::System => Utc::now().trunc_subsecs(0),
      OrderClock::Fixed(ts) => *ts,
    }
  }
}

impl FromStr for OrderClock {
  type Err = StoreError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "system" | "wall" => Ok(OrderClock::System),
      "fixed" | "mock" => Ok(OrderClock::mock()),
      _ => DateTime::parse_from_rfc3339(s.trim())
        .map(|ts| OrderClock::Fixed(ts.with_timezone(&Utc)))
        .map_err(|_| StoreError::InvalidClock(s.to_string())),
    }
  }
}

impl fmt::Display for OrderClock {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      OrderClock::System => f.write_str("system"),
      OrderClock::Fixed(ts) => write!(f, "fixed({})", ts.to_rfc3339()),
    }
  }
}
