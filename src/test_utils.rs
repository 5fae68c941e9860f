//! Test utilities and helpers for unit testing
//!
//! This module provides common test infrastructure including:
//! - Database setup/teardown
//! - Seed helpers for days and their children
//! - Mock data factories

use chrono::{Duration, NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use sqlx::SqlitePool;

use crate::db::{connect, StoreConfig};
use crate::models::{NewHrSample, NewMovementSample, NewSleep, NewSleepMovement};

/// ---------------------------------------------------------------------------
/// Database Test Utilities
/// ---------------------------------------------------------------------------

/// Create an in-memory SQLite database for testing.
/// Goes through the real `connect`, so foreign keys are on and the schema is
/// applied exactly as in production.
pub async fn setup_test_db() -> SqlitePool {
  connect(&StoreConfig::in_memory())
    .await
    .expect("Failed to create in-memory database")
}

/// Close a test database pool
pub async fn teardown_test_db(pool: SqlitePool) {
  pool.close().await;
}

/// Seed bare days starting at `mock_date()`, one per consecutive date.
/// Returns the IDs of created rows.
pub async fn seed_test_days(pool: &SqlitePool, count: usize) -> Vec<i64> {
  let mut ids = Vec::new();

  for i in 0..count {
    let date = mock_date() + Duration::days(i as i64);
    let result = sqlx::query("INSERT INTO daily_statistics (entry_date) VALUES (?1)")
      .bind(date)
      .execute(pool)
      .await
      .expect("Failed to insert test day");

    ids.push(result.last_insert_rowid());
  }

  ids
}

/// Count rows in a table
pub async fn count_rows(pool: &SqlitePool, table: &str) -> i64 {
  sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
    .fetch_one(pool)
    .await
    .expect("Failed to count rows")
}

/// ---------------------------------------------------------------------------
/// Mock Data Factories
/// ---------------------------------------------------------------------------

pub fn mock_date() -> NaiveDate {
  NaiveDate::from_ymd_opt(2018, 7, 22).expect("valid date")
}

/// `hh:mm` on `mock_date()`
pub fn mock_time(hour: u32, minute: u32) -> NaiveDateTime {
  mock_date()
    .and_hms_opt(hour, minute, 0)
    .expect("valid time")
}

pub fn mock_sleep(daily_statistics_id: i64) -> NewSleep {
  NewSleep {
    daily_statistics_id,
    sleep_start: Some(mock_time(0, 5)),
    sleep_end: Some(mock_time(7, 35)),
    deep_sleep: Some(5_400),
    light_sleep: Some(15_000),
    rem_sleep: Some(5_400),
    awake_sleep: Some(1_200),
  }
}

/// Three consecutive one-minute intervals
pub fn mock_sleep_movements() -> Vec<NewSleepMovement> {
  [Decimal::new(870_000_000_000, 13), Decimal::ZERO, Decimal::new(15, 1)]
    .into_iter()
    .enumerate()
    .map(|(i, level)| NewSleepMovement {
      start: Some(mock_time(1, i as u32)),
      end: Some(mock_time(1, i as u32 + 1)),
      activity_level: Some(level),
    })
    .collect()
}

/// One sample every two minutes from 08:00
pub fn mock_hr_samples(count: usize) -> Vec<NewHrSample> {
  (0..count)
    .map(|i| NewHrSample {
      event_time: Some(mock_time(8, 0) + Duration::minutes(2 * i as i64)),
      hr_value: Some(60 + i as i64),
    })
    .collect()
}

/// One sample every fifteen minutes from 08:00
pub fn mock_movement_samples(count: usize) -> Vec<NewMovementSample> {
  (0..count)
    .map(|i| NewMovementSample {
      event_time: Some(mock_time(8, 0) + Duration::minutes(15 * i as i64)),
      movement: Some(Decimal::new(1_250 * i as i64, 4)),
    })
    .collect()
}

/// ---------------------------------------------------------------------------
/// Tests for Test Utilities
/// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn test_setup_db_creates_schema() {
    let pool = setup_test_db().await;

    let tables: Vec<(String,)> = sqlx::query_as(
      "SELECT name FROM sqlite_master WHERE type='table' AND name IN ('daily_statistics', 'sleep', 'sleep_movement', 'hr_data', 'movement_data')"
    )
    .fetch_all(&pool)
    .await
    .expect("Failed to query tables");

    assert_eq!(tables.len(), 5, "Expected all 5 tables, got {:?}", tables);

    teardown_test_db(pool).await;
  }

  #[tokio::test]
  async fn test_seed_days_returns_correct_count() {
    let pool = setup_test_db().await;

    let ids = seed_test_days(&pool, 4).await;
    assert_eq!(ids.len(), 4);
    assert_eq!(count_rows(&pool, "daily_statistics").await, 4);

    teardown_test_db(pool).await;
  }

  #[test]
  fn test_mock_factories_create_valid_data() {
    let sleep = mock_sleep(7);
    assert_eq!(sleep.daily_statistics_id, 7);
    assert!(sleep.sleep_start < sleep.sleep_end);

    let movements = mock_sleep_movements();
    assert_eq!(movements.len(), 3);
    assert!(movements.iter().all(|m| m.start < m.end));

    assert_eq!(mock_hr_samples(5).len(), 5);
    assert_eq!(mock_movement_samples(2)[1].movement, Some(Decimal::new(1_250, 4)));
  }
}
