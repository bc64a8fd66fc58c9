use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

pub mod cache;
pub mod dto;
pub mod error;
pub mod models;
pub mod repository;

pub use cache::{DatabaseCache, DisabledCache, MemoryCache, RatingCache};
pub use error::{Result, StorageError};
pub use models::RatingRecord;

/// Postgres-backed persistence for cached ratings.
#[derive(Debug, Clone)]
pub struct Database {
    pool: PgPool,
}

impl Database {
    pub async fn new(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;

        Ok(Self { pool })
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub async fn run_migrations(&self) -> Result<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }
}
