use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct HrSample {
  pub id: i64,
  pub daily_statistics_id: i64,
  pub event_time: Option<NaiveDateTime>,
  pub hr_value: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewHrSample {
  pub event_time: Option<NaiveDateTime>,
  pub hr_value: Option<i64>,
}

/// `movement` is DECIMAL(5,4); mapped by hand like `SleepMovement`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementSample {
  pub id: i64,
  pub daily_statistics_id: i64,
  pub event_time: Option<NaiveDateTime>,
  pub movement: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewMovementSample {
  pub event_time: Option<NaiveDateTime>,
  pub movement: Option<Decimal>,
}

/// Device exports stamp samples in epoch milliseconds. Sub-second precision
/// is dropped and the result is read as UTC.
pub fn timestamp_from_epoch_millis(millis: i64) -> Option<NaiveDateTime> {
  DateTime::from_timestamp(millis.div_euclid(1000), 0).map(|dt| dt.naive_utc())
}

impl NewHrSample {
  pub fn from_epoch_millis(millis: i64, hr_value: Option<i64>) -> Self {
    Self {
      event_time: timestamp_from_epoch_millis(millis),
      hr_value,
    }
  }
}

impl NewMovementSample {
  pub fn from_epoch_millis(millis: i64, movement: Option<Decimal>) -> Self {
    Self {
      event_time: timestamp_from_epoch_millis(millis),
      movement,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::NaiveDate;

  #[test]
  fn test_epoch_millis_truncates_to_seconds() {
    let ts = timestamp_from_epoch_millis(1_532_217_600_999).unwrap();
    let expected = NaiveDate::from_ymd_opt(2018, 7, 22)
      .unwrap()
      .and_hms_opt(0, 0, 0)
      .unwrap();
    assert_eq!(ts, expected);
  }

  #[test]
  fn test_epoch_millis_out_of_range_is_none() {
    assert_eq!(timestamp_from_epoch_millis(i64::MAX), None);
  }

  #[test]
  fn test_hr_sample_from_epoch_millis() {
    let sample = NewHrSample::from_epoch_millis(1_532_217_660_000, Some(58));
    assert_eq!(sample.hr_value, Some(58));
    assert_eq!(
      sample.event_time.map(|t| t.and_utc().timestamp()),
      Some(1_532_217_660)
    );
  }
}
