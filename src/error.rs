use thiserror::Error;

/// Failures surfaced by the users repository.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A write collided with the unique email index.
    #[error("{0}")]
    ConstraintViolation(String),
    /// Any other persistence failure (I/O, corruption, pool).
    #[error(transparent)]
    StorageFault(sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                Self::ConstraintViolation(db_err.message().to_string())
            }
            _ => Self::StorageFault(err),
        }
    }
}
