use business::domain::errors::RepositoryError;

/// Translates driver errors into the storage-agnostic repository errors.
///
/// Unique violations become `Duplicated` and foreign key violations
/// `NotFound`; everything else is logged and reported as `DatabaseError`.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
        sqlx::Error::Database(db) if db.is_foreign_key_violation() => RepositoryError::NotFound,
        _ => {
            tracing::error!("Database error: {}", error);
            RepositoryError::DatabaseError
        }
    }
}
