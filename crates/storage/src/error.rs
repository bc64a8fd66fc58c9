use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Invalid rating {0}: must be between 0 and 5")]
    InvalidRating(f64),
}

pub type Result<T> = std::result::Result<T, StorageError>;
