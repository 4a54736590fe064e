//! Storage-layer failures, kept apart from `AppError` so the service can
//! translate them into domain outcomes.

use thiserror::Error;

use recruit_core::error::{AppError, ErrorKind};

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Why the store refused or failed an operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An insert or update would duplicate a value in a unique column.
    #[error("{message}")]
    UniqueViolation {
        /// Name of the violated constraint.
        constraint: String,
        /// Message reported by the store.
        message: String,
    },
    /// The store rejected the statement for any other reason.
    #[error("{0}")]
    Rejected(String),
    /// The store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether this is a uniqueness violation on the named constraint.
    pub fn violates(&self, name: &str) -> bool {
        matches!(self, Self::UniqueViolation { constraint, .. } if constraint == name)
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db) => {
                if db.is_unique_violation() {
                    Self::UniqueViolation {
                        constraint: db.constraint().unwrap_or_default().to_string(),
                        message: db.message().to_string(),
                    }
                } else {
                    Self::Rejected(db.message().to_string())
                }
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => Self::Unavailable(err.to_string()),
            other => Self::Rejected(other.to_string()),
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        let kind = match err {
            StoreError::UniqueViolation { .. } => ErrorKind::Conflict,
            StoreError::Rejected(_) | StoreError::Unavailable(_) => ErrorKind::Database,
        };
        AppError::with_source(kind, err.to_string(), err)
    }
}
