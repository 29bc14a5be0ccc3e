use std::fmt;

use thiserror::Error;

/// Which kind of integrity constraint rejected a write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintKind {
    Unique,
    ForeignKey,
}

impl fmt::Display for ConstraintKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unique => write!(f, "duplicate value"),
            Self::ForeignKey => write!(f, "foreign key violation"),
        }
    }
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Not found")]
    NotFound,

    #[error("Constraint violation: {kind} on {constraint}")]
    ConstraintViolation {
        kind: ConstraintKind,
        constraint: String,
    },
}

pub type Result<T> = std::result::Result<T, StorageError>;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";

impl StorageError {
    /// Translates a raw sqlx error, turning unique and foreign-key violations
    /// into [`StorageError::ConstraintViolation`].
    pub fn from_sqlx(error: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db_err) = error {
            let constraint = db_err.constraint().unwrap_or("unknown constraint");
            match db_err.code().as_deref() {
                Some(UNIQUE_VIOLATION) => return StorageError::duplicate(constraint),
                Some(FOREIGN_KEY_VIOLATION) => return StorageError::referenced(constraint),
                _ => {}
            }
        }
        StorageError::Database(error)
    }

    pub fn duplicate(constraint: &str) -> Self {
        StorageError::ConstraintViolation {
            kind: ConstraintKind::Unique,
            constraint: constraint.to_string(),
        }
    }

    pub fn referenced(constraint: &str) -> Self {
        StorageError::ConstraintViolation {
            kind: ConstraintKind::ForeignKey,
            constraint: constraint.to_string(),
        }
    }

    pub fn is_unique_violation(&self) -> bool {
        matches!(
            self,
            StorageError::ConstraintViolation {
                kind: ConstraintKind::Unique,
                ..
            }
        )
    }

    pub fn is_foreign_key_violation(&self) -> bool {
        matches!(
            self,
            StorageError::ConstraintViolation {
                kind: ConstraintKind::ForeignKey,
                ..
            }
        )
    }
}
