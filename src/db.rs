use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::error::{StoreError, StoreResult};

pub type DbPool = SqlitePool;

/// ---------------------------------------------------------------------------
/// Configuration
/// ---------------------------------------------------------------------------

const DATABASE_URL_VAR: &str = "BIOMETRICS_DATABASE_URL";
const MAX_CONNECTIONS_VAR: &str = "BIOMETRICS_MAX_CONNECTIONS";
const DEFAULT_DATABASE_URL: &str = "sqlite://biometrics.db?mode=rwc";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const IN_MEMORY_URL: &str = "sqlite::memory:";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
  pub database_url: String,
  pub max_connections: u32,
}

impl StoreConfig {
  pub fn from_env() -> StoreResult<Self> {
    let database_url =
      env::var(DATABASE_URL_VAR).unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());

    let max_connections = match env::var(MAX_CONNECTIONS_VAR) {
      Ok(raw) => raw
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| {
          StoreError::InvalidConfig(format!(
            "{} must be a positive integer, got {:?}",
            MAX_CONNECTIONS_VAR, raw
          ))
        })?,
      Err(_) => DEFAULT_MAX_CONNECTIONS,
    };

    Ok(Self {
      database_url,
      max_connections,
    })
  }

  /// Private in-memory store.
  ///
  /// Every pooled connection to `sqlite::memory:` opens its own empty
  /// database, so the pool is held at a single connection.
  pub fn in_memory() -> Self {
    Self {
      database_url: IN_MEMORY_URL.to_string(),
      max_connections: 1,
    }
  }

  fn is_in_memory(&self) -> bool {
    self.database_url.contains(":memory:") || self.database_url.contains("mode=memory")
  }
}

impl Default for StoreConfig {
  fn default() -> Self {
    Self {
      database_url: DEFAULT_DATABASE_URL.to_string(),
      max_connections: DEFAULT_MAX_CONNECTIONS,
    }
  }
}

/// ---------------------------------------------------------------------------
/// Connection & Migrations
/// ---------------------------------------------------------------------------

/// Open the connection pool and apply the schema
pub async fn connect(config: &StoreConfig) -> StoreResult<DbPool> {
  info!(url = %config.database_url, "Opening biometrics store");

  // Cascades only fire with foreign keys on, and the pragma is per connection
  let options = SqliteConnectOptions::from_str(&config.database_url)?.foreign_keys(true);

  let mut pool_options = SqlitePoolOptions::new().max_connections(config.max_connections);
  if config.is_in_memory() {
    // Dropping the last connection drops the database with it
    pool_options = pool_options
      .idle_timeout(None::<Duration>)
      .max_lifetime(None::<Duration>);
  }

  let pool = pool_options.connect_with(options).await?;

  migrate(&pool).await?;

  Ok(pool)
}

/// Apply the embedded schema. Already-applied migrations are skipped.
pub async fn migrate(pool: &DbPool) -> StoreResult<()> {
  sqlx::migrate!("./migrations").run(pool).await?;
  info!("Biometrics schema is up to date");
  Ok(())
}
