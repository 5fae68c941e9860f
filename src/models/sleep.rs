use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The (single) sleep session recorded against a day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Sleep {
  pub id: i64,
  pub daily_statistics_id: i64,
  pub sleep_start: Option<NaiveDateTime>,
  pub sleep_end: Option<NaiveDateTime>,
  pub deep_sleep: Option<i64>,
  pub light_sleep: Option<i64>,
  pub rem_sleep: Option<i64>,
  pub awake_sleep: Option<i64>,
}

/// For inserting a new sleep session (without id)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSleep {
  pub daily_statistics_id: i64,
  pub sleep_start: Option<NaiveDateTime>,
  pub sleep_end: Option<NaiveDateTime>,
  pub deep_sleep: Option<i64>,
  pub light_sleep: Option<i64>,
  pub rem_sleep: Option<i64>,
  pub awake_sleep: Option<i64>,
}

/// Movement interval inside a sleep session
///
/// `activity_level` is DECIMAL(14,13), so rows are mapped by hand rather
/// than through `FromRow`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SleepMovement {
  pub id: i64,
  pub sleep_id: i64,
  pub start: Option<NaiveDateTime>,
  pub end: Option<NaiveDateTime>,
  pub activity_level: Option<Decimal>,
}

/// For inserting a movement interval; the parent sleep id is supplied by
/// the insert itself
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewSleepMovement {
  pub start: Option<NaiveDateTime>,
  pub end: Option<NaiveDateTime>,
  pub activity_level: Option<Decimal>,
}
