//! Sleep sessions and the movement intervals recorded inside them

use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use tracing::debug;

use crate::decimal::ACTIVITY_LEVEL;
use crate::error::StoreResult;
use crate::models::{NewSleep, NewSleepMovement, Sleep, SleepMovement};

/// Insert a sleep session together with its movement intervals.
///
/// Runs in one transaction: a rejected interval leaves no session behind.
/// A day that already has a session is a uniqueness violation.
pub async fn insert_sleep(
  pool: &SqlitePool,
  sleep: &NewSleep,
  movements: &[NewSleepMovement],
) -> StoreResult<i64> {
  let mut tx = pool.begin().await?;

  let result = sqlx::query(
    r#"
    INSERT INTO sleep (
      daily_statistics_id, sleep_start, sleep_end,
      deep_sleep, light_sleep, rem_sleep, awake_sleep
    )
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
    "#,
  )
  .bind(sleep.daily_statistics_id)
  .bind(sleep.sleep_start)
  .bind(sleep.sleep_end)
  .bind(sleep.deep_sleep)
  .bind(sleep.light_sleep)
  .bind(sleep.rem_sleep)
  .bind(sleep.awake_sleep)
  .execute(&mut *tx)
  .await?;

  let sleep_id = result.last_insert_rowid();

  for movement in movements {
    sqlx::query(
      r#"
      INSERT INTO sleep_movement (sleep_id, "start", "end", activity_level)
      VALUES (?1, ?2, ?3, ?4)
      "#,
    )
    .bind(sleep_id)
    .bind(movement.start)
    .bind(movement.end)
    .bind(movement.activity_level.map(|v| ACTIVITY_LEVEL.encode(v)))
    .execute(&mut *tx)
    .await?;
  }

  tx.commit().await?;

  debug!(
    sleep_id,
    daily_statistics_id = sleep.daily_statistics_id,
    intervals = movements.len(),
    "Inserted sleep session"
  );
  Ok(sleep_id)
}

pub async fn get_sleep_for_day(pool: &SqlitePool, daily_statistics_id: i64) -> StoreResult<Option<Sleep>> {
  let sleep = sqlx::query_as::<_, Sleep>("SELECT * FROM sleep WHERE daily_statistics_id = ?1")
    .bind(daily_statistics_id)
    .fetch_optional(pool)
    .await?;

  Ok(sleep)
}

/// Movement intervals of a session, earliest first
pub async fn list_sleep_movement(pool: &SqlitePool, sleep_id: i64) -> StoreResult<Vec<SleepMovement>> {
  let rows = sqlx::query(
    r#"
    SELECT id, sleep_id, "start", "end", CAST(activity_level AS REAL) AS activity_level
    FROM sleep_movement
    WHERE sleep_id = ?1
    ORDER BY "start", id
    "#,
  )
  .bind(sleep_id)
  .fetch_all(pool)
  .await?;

  rows.iter().map(sleep_movement_from_row).collect()
}

fn sleep_movement_from_row(row: &SqliteRow) -> StoreResult<SleepMovement> {
  Ok(SleepMovement {
    id: row.try_get("id")?,
    sleep_id: row.try_get("sleep_id")?,
    start: row.try_get("start")?,
    end: row.try_get("end")?,
    activity_level: ACTIVITY_LEVEL.decode_nullable(row.try_get("activity_level")?),
  })
}
