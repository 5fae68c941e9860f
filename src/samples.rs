//! Intraday heart-rate and movement samples
//!
//! Both series hang directly off a day. Each batch insert is a single
//! transaction so a day never ends up with half an import.

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::decimal::MOVEMENT;
use crate::error::StoreResult;
use crate::models::{HrSample, MovementSample, NewHrSample, NewMovementSample};

// ---------------------------------------------------------------------------
// Heart Rate
// ---------------------------------------------------------------------------

/// Insert heart-rate samples for a day. Returns the number of rows written.
pub async fn insert_hr_samples(
  pool: &SqlitePool,
  daily_statistics_id: i64,
  samples: &[NewHrSample],
) -> StoreResult<u64> {
  let mut tx = pool.begin().await?;
  let mut written = 0;

  for sample in samples {
    let result = sqlx::query(
      "INSERT INTO hr_data (daily_statistics_id, event_time, hr_value) VALUES (?1, ?2, ?3)",
    )
    .bind(daily_statistics_id)
    .bind(sample.event_time)
    .bind(sample.hr_value)
    .execute(&mut *tx)
    .await?;
    written += result.rows_affected();
  }

  tx.commit().await?;

  debug!(daily_statistics_id, written, "Inserted heart-rate samples");
  Ok(written)
}

/// Heart-rate samples of a day, earliest first
pub async fn list_hr_samples(pool: &SqlitePool, daily_statistics_id: i64) -> StoreResult<Vec<HrSample>> {
  let samples = sqlx::query_as::<_, HrSample>(
    "SELECT * FROM hr_data WHERE daily_statistics_id = ?1 ORDER BY event_time, id",
  )
  .bind(daily_statistics_id)
  .fetch_all(pool)
  .await?;

  Ok(samples)
}

// ---------------------------------------------------------------------------
// Movement
// ---------------------------------------------------------------------------

/// Insert movement samples for a day, rounding each value to DECIMAL(5,4)
pub async fn insert_movement_samples(
  pool: &SqlitePool,
  daily_statistics_id: i64,
  samples: &[NewMovementSample],
) -> StoreResult<u64> {
  let mut tx = pool.begin().await?;
  let mut written = 0;

  for sample in samples {
    let result = sqlx::query(
      "INSERT INTO movement_data (daily_statistics_id, event_time, movement) VALUES (?1, ?2, ?3)",
    )
    .bind(daily_statistics_id)
    .bind(sample.event_time)
    .bind(sample.movement.map(|v| MOVEMENT.encode(v)))
    .execute(&mut *tx)
    .await?;
    written += result.rows_affected();
  }

  tx.commit().await?;

  debug!(daily_statistics_id, written, "Inserted movement samples");
  Ok(written)
}

/// Movement samples of a day, earliest first
pub async fn list_movement_samples(
  pool: &SqlitePool,
  daily_statistics_id: i64,
) -> StoreResult<Vec<MovementSample>> {
  let rows = sqlx::query(
    r#"
    SELECT id, daily_statistics_id, event_time, CAST(movement AS REAL) AS movement
    FROM movement_data
    WHERE daily_statistics_id = ?1
    ORDER BY event_time, id
    "#,
  )
  .bind(daily_statistics_id)
  .fetch_all(pool)
  .await?;

  rows.iter().map(movement_sample_from_row).collect()
}

fn movement_sample_from_row(row: &SqliteRow) -> StoreResult<MovementSample> {
  Ok(MovementSample {
    id: row.try_get("id")?,
    daily_statistics_id: row.try_get("daily_statistics_id")?,
    event_time: row.try_get("event_time")?,
    movement: MOVEMENT.decode_nullable(row.try_get("movement")?),
  })
}
