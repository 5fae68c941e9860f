//! Row counts across the schema

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::StoreResult;

/// How much a store holds, table by table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct StoreSummary {
  pub days: i64,
  pub sleep_sessions: i64,
  pub sleep_movements: i64,
  pub hr_samples: i64,
  pub movement_samples: i64,
}

pub async fn store_summary(pool: &SqlitePool) -> StoreResult<StoreSummary> {
  let summary = sqlx::query_as::<_, StoreSummary>(
    r#"
    SELECT
      (SELECT COUNT(*) FROM daily_statistics) AS days,
      (SELECT COUNT(*) FROM sleep) AS sleep_sessions,
      (SELECT COUNT(*) FROM sleep_movement) AS sleep_movements,
      (SELECT COUNT(*) FROM hr_data) AS hr_samples,
      (SELECT COUNT(*) FROM movement_data) AS movement_samples
    "#,
  )
  .fetch_one(pool)
  .await?;

  Ok(summary)
}
