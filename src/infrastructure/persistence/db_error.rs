//! Classification of `sqlx` errors into repository failures.

use sqlx::error::ErrorKind;

use crate::domain::repositories::RepositoryError;

/// Unique constraint on `planets.name`, as declared in the initial migration.
pub const PLANET_NAME_UNIQUE_CONSTRAINT: &str = "planets_name_key";

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        let Some(db_err) = e.as_database_error() else {
            return RepositoryError::Store(e);
        };

        match db_err.kind() {
            ErrorKind::UniqueViolation
            | ErrorKind::NotNullViolation
            | ErrorKind::CheckViolation
            | ErrorKind::ForeignKeyViolation => RepositoryError::IntegrityViolation {
                constraint: db_err.constraint().map(str::to_owned),
                message: db_err.message().to_owned(),
            },
            _ => RepositoryError::Store(e),
        }
    }
}

/// Returns true if the error is a unique violation on the planet name.
pub fn is_duplicate_name(e: &RepositoryError) -> bool {
    matches!(
        e,
        RepositoryError::IntegrityViolation {
            constraint: Some(c),
            ..
        } if c == PLANET_NAME_UNIQUE_CONSTRAINT
    )
}
