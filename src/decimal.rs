//! Fixed-precision measurement columns
//!
//! SQLite accepts `DECIMAL(p, s)` as a type name but stores the value as a
//! REAL. The schema bounds the integer part with CHECK constraints; this
//! module rounds to the declared scale on the way in and restores an exact
//! `Decimal` on the way out.

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Declared precision and scale of a DECIMAL column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Precision {
  pub digits: u32,
  pub scale: u32,
}

/// `sleep_movement.activity_level`
pub const ACTIVITY_LEVEL: Precision = Precision { digits: 14, scale: 13 };

/// `movement_data.movement`
pub const MOVEMENT: Precision = Precision { digits: 5, scale: 4 };

impl Precision {
  /// Exclusive upper bound on the magnitude the column can hold
  pub fn max_magnitude(&self) -> Decimal {
    Decimal::from(10u64.pow(self.digits - self.scale))
  }

  /// Half away from zero, as a DECIMAL column rounds on insert
  pub fn round(&self, value: Decimal) -> Decimal {
    value
      .round_dp_with_strategy(self.scale, RoundingStrategy::MidpointAwayFromZero)
      .normalize()
  }

  /// Round to the column's scale and render for binding.
  ///
  /// Out-of-range values are passed through unchanged so the store's CHECK
  /// constraint reports them.
  pub fn encode(&self, value: Decimal) -> String {
    self.round(value).to_string()
  }

  /// Restore a `Decimal` from the stored REAL
  pub fn decode(&self, value: f64) -> Option<Decimal> {
    Decimal::from_f64(value).map(|d| self.round(d))
  }

  /// Same as `decode`, for an optional column
  pub fn decode_nullable(&self, value: Option<f64>) -> Option<Decimal> {
    value.and_then(|v| self.decode(v))
  }
}
