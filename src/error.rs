use sqlx::error::ErrorKind;

/// ---------------------------------------------------------------------------
/// Error Handling
/// ---------------------------------------------------------------------------

/// Errors surfaced by the store.
///
/// Constraint violations reported by SQLite are split out by kind so callers
/// can tell a duplicate day apart from a dangling reference without parsing
/// messages.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
  #[error("Uniqueness violation: {0}")]
  UniqueViolation(String),

  #[error("Foreign key violation: {0}")]
  ForeignKeyViolation(String),

  #[error("Not-null violation: {0}")]
  NotNullViolation(String),

  #[error("Check violation: {0}")]
  CheckViolation(String),

  #[error("Not found: {0}")]
  NotFound(String),

  #[error("Invalid configuration: {0}")]
  InvalidConfig(String),

  #[error("Database error: {0}")]
  Database(sqlx::Error),

  #[error("Migration failed: {0}")]
  Migration(#[from] sqlx::migrate::MigrateError),
}

impl StoreError {
  /// True for any of the four constraint-violation variants.
  pub fn is_constraint_violation(&self) -> bool {
    matches!(
      self,
      StoreError::UniqueViolation(_)
        | StoreError::ForeignKeyViolation(_)
        | StoreError::NotNullViolation(_)
        | StoreError::CheckViolation(_)
    )
  }
}

// Classify sqlx::Error by the constraint SQLite reports
impl From<sqlx::Error> for StoreError {
  fn from(e: sqlx::Error) -> Self {
    if let sqlx::Error::Database(db_err) = &e {
      let message = db_err.message().to_string();
      match db_err.kind() {
        ErrorKind::UniqueViolation => return StoreError::UniqueViolation(message),
        ErrorKind::ForeignKeyViolation => return StoreError::ForeignKeyViolation(message),
        ErrorKind::NotNullViolation => return StoreError::NotNullViolation(message),
        ErrorKind::CheckViolation => return StoreError::CheckViolation(message),
        _ => {}
      }
    }
    StoreError::Database(e)
  }
}

pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_row_not_found_stays_database_error() {
    let err: StoreError = sqlx::Error::RowNotFound.into();
    assert!(matches!(err, StoreError::Database(_)));
    assert!(!err.is_constraint_violation());
  }

  #[test]
  fn test_constraint_variants_are_flagged() {
    assert!(StoreError::UniqueViolation("x".into()).is_constraint_violation());
    assert!(StoreError::CheckViolation("x".into()).is_constraint_violation());
    assert!(!StoreError::NotFound("x".into()).is_constraint_violation());
  }
}
