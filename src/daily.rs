//! Daily statistics: the root aggregate
//!
//! One row per calendar date. Children (sleep, heart-rate and movement
//! samples) reference it by surrogate id and follow it on update and delete.

use chrono::NaiveDate;
use sqlx::sqlite::SqliteQueryResult;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::models::{ActivitySummary, DailyStatistics, HeartRateSummary, NewDailyStatistics};

// ---------------------------------------------------------------------------
// Inserts
// ---------------------------------------------------------------------------

/// Insert a day. A second row for the same date is a uniqueness violation.
pub async fn insert_day(pool: &SqlitePool, day: &NewDailyStatistics) -> StoreResult<i64> {
  let result = sqlx::query(
    r#"
    INSERT INTO daily_statistics (
      entry_date, max_hr, min_hr, resting_hr, total_sleep, total_steps,
      highly_active_seconds, active_seconds, sedentary_seconds, sleeping_seconds,
      max_stress_level, low_stress_duration, medium_stress_duration, high_stress_duration
    )
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)
    "#,
  )
  .bind(day.entry_date)
  .bind(day.heart_rate.max_hr)
  .bind(day.heart_rate.min_hr)
  .bind(day.heart_rate.resting_hr)
  .bind(day.total_sleep)
  .bind(day.activity.total_steps)
  .bind(day.activity.highly_active_seconds)
  .bind(day.activity.active_seconds)
  .bind(day.activity.sedentary_seconds)
  .bind(day.activity.sleeping_seconds)
  .bind(day.activity.max_stress_level)
  .bind(day.activity.low_stress_duration)
  .bind(day.activity.medium_stress_duration)
  .bind(day.activity.high_stress_duration)
  .execute(pool)
  .await?;

  let id = result.last_insert_rowid();
  debug!(id, entry_date = %day.entry_date, "Inserted daily statistics");
  Ok(id)
}

/// Return the id of the row for `date`, creating a bare row if none exists
pub async fn get_or_create_day(pool: &SqlitePool, date: NaiveDate) -> StoreResult<i64> {
  let inserted = sqlx::query(
    "INSERT INTO daily_statistics (entry_date) VALUES (?1) ON CONFLICT(entry_date) DO NOTHING",
  )
  .bind(date)
  .execute(pool)
  .await?;

  if inserted.rows_affected() > 0 {
    debug!(entry_date = %date, "Created daily statistics row");
  }

  let id: i64 = sqlx::query_scalar("SELECT id FROM daily_statistics WHERE entry_date = ?1")
    .bind(date)
    .fetch_one(pool)
    .await?;

  Ok(id)
}

// ---------------------------------------------------------------------------
// Lookups
// ---------------------------------------------------------------------------

pub async fn get_day(pool: &SqlitePool, id: i64) -> StoreResult<DailyStatistics> {
  sqlx::query_as::<_, DailyStatistics>("SELECT * FROM daily_statistics WHERE id = ?1")
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| day_not_found(id))
}

pub async fn find_day_by_date(
  pool: &SqlitePool,
  date: NaiveDate,
) -> StoreResult<Option<DailyStatistics>> {
  let day = sqlx::query_as::<_, DailyStatistics>(
    "SELECT * FROM daily_statistics WHERE entry_date = ?1",
  )
  .bind(date)
  .fetch_optional(pool)
  .await?;

  Ok(day)
}

/// Days in `from..=to`, oldest first
pub async fn list_days(
  pool: &SqlitePool,
  from: NaiveDate,
  to: NaiveDate,
) -> StoreResult<Vec<DailyStatistics>> {
  let days = sqlx::query_as::<_, DailyStatistics>(
    r#"
    SELECT * FROM daily_statistics
    WHERE entry_date BETWEEN ?1 AND ?2
    ORDER BY entry_date
    "#,
  )
  .bind(from)
  .bind(to)
  .fetch_all(pool)
  .await?;

  Ok(days)
}

// ---------------------------------------------------------------------------
// Backfill
//
// `None` keeps whatever the column already holds; `Some` overwrites it.
// ---------------------------------------------------------------------------

pub async fn update_heart_rate_summary(
  pool: &SqlitePool,
  id: i64,
  summary: &HeartRateSummary,
) -> StoreResult<()> {
  let result = sqlx::query(
    r#"
    UPDATE daily_statistics
    SET max_hr = COALESCE(?1, max_hr),
        min_hr = COALESCE(?2, min_hr),
        resting_hr = COALESCE(?3, resting_hr)
    WHERE id = ?4
    "#,
  )
  .bind(summary.max_hr)
  .bind(summary.min_hr)
  .bind(summary.resting_hr)
  .bind(id)
  .execute(pool)
  .await?;

  require_row(result, id)?;
  debug!(id, "Backfilled heart-rate summary");
  Ok(())
}

pub async fn update_total_sleep(
  pool: &SqlitePool,
  id: i64,
  total_sleep: Option<i64>,
) -> StoreResult<()> {
  let result = sqlx::query(
    "UPDATE daily_statistics SET total_sleep = COALESCE(?1, total_sleep) WHERE id = ?2",
  )
  .bind(total_sleep)
  .bind(id)
  .execute(pool)
  .await?;

  require_row(result, id)?;
  debug!(id, "Backfilled total sleep");
  Ok(())
}

pub async fn update_activity_summary(
  pool: &SqlitePool,
  id: i64,
  summary: &ActivitySummary,
) -> StoreResult<()> {
  let result = sqlx::query(
    r#"
    UPDATE daily_statistics
    SET total_steps = COALESCE(?1, total_steps),
        highly_active_seconds = COALESCE(?2, highly_active_seconds),
        active_seconds = COALESCE(?3, active_seconds),
        sedentary_seconds = COALESCE(?4, sedentary_seconds),
        sleeping_seconds = COALESCE(?5, sleeping_seconds),
        max_stress_level = COALESCE(?6, max_stress_level),
        low_stress_duration = COALESCE(?7, low_stress_duration),
        medium_stress_duration = COALESCE(?8, medium_stress_duration),
        high_stress_duration = COALESCE(?9, high_stress_duration)
    WHERE id = ?10
    "#,
  )
  .bind(summary.total_steps)
  .bind(summary.highly_active_seconds)
  .bind(summary.active_seconds)
  .bind(summary.sedentary_seconds)
  .bind(summary.sleeping_seconds)
  .bind(summary.max_stress_level)
  .bind(summary.low_stress_duration)
  .bind(summary.medium_stress_duration)
  .bind(summary.high_stress_duration)
  .bind(id)
  .execute(pool)
  .await?;

  require_row(result, id)?;
  debug!(id, "Backfilled activity summary");
  Ok(())
}

// ---------------------------------------------------------------------------
// Removal & Re-keying
// ---------------------------------------------------------------------------

/// Delete a day and, through the cascades, everything recorded against it.
/// Returns false when no row had that id.
pub async fn delete_day(pool: &SqlitePool, id: i64) -> StoreResult<bool> {
  let result = sqlx::query("DELETE FROM daily_statistics WHERE id = ?1")
    .bind(id)
    .execute(pool)
    .await?;

  let deleted = result.rows_affected() > 0;
  if deleted {
    debug!(id, "Deleted daily statistics and dependents");
  }
  Ok(deleted)
}

/// Change a day's surrogate id. Children follow via ON UPDATE CASCADE.
pub async fn reassign_day_id(pool: &SqlitePool, old_id: i64, new_id: i64) -> StoreResult<()> {
  let result = sqlx::query("UPDATE daily_statistics SET id = ?1 WHERE id = ?2")
    .bind(new_id)
    .bind(old_id)
    .execute(pool)
    .await?;

  require_row(result, old_id)?;
  debug!(old_id, new_id, "Reassigned daily statistics id");
  Ok(())
}

fn require_row(result: SqliteQueryResult, id: i64) -> StoreResult<()> {
  if result.rows_affected() == 0 {
    return Err(day_not_found(id));
  }
  Ok(())
}

fn day_not_found(id: i64) -> StoreError {
  StoreError::NotFound(format!("daily_statistics id {}", id))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
