use async_trait::async_trait;
use chrono::{Duration, Utc};

use super::RatingCache;
use crate::Database;
use crate::error::Result;
use crate::models::RatingRecord;
use crate::repository::rating::RatingRepository;

/// Cache persisted in the `ratings` table.
#[derive(Debug, Clone)]
pub struct DatabaseCache {
    db: Database,
    ttl: Duration,
}

impl DatabaseCache {
    pub fn new(db: Database, ttl: Duration) -> Self {
        Self { db, ttl }
    }
}

#[async_trait]
impl RatingCache for DatabaseCache {
    async fn get(&self, slug: &str) -> Result<Option<RatingRecord>> {
        let repo = RatingRepository::new(self.db.pool());

        let Some(record) = repo.find_by_slug(slug).await? else {
            return Ok(None);
        };

        if !record.is_fresh(Utc::now(), self.ttl) {
            tracing::warn!("Cache expired for {}", slug);
            return Ok(None);
        }

        Ok(Some(record))
    }

    async fn set(&self, slug: &str, rating: f64, poster_url: &str) -> Result<()> {
        let repo = RatingRepository::new(self.db.pool());
        repo.upsert(slug, rating, poster_url).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use sqlx::PgPool;

    use super::*;

    #[sqlx::test]
    #[ignore] // Only run when Postgres is available via DATABASE_URL
    async fn test_round_trip(pool: PgPool) {
        let cache = DatabaseCache::new(Database::from_pool(pool), Duration::seconds(86400));
        cache.set("inception", 4.5, "http://x/p.png").await.unwrap();

        let record = cache.get("inception").await.unwrap().unwrap();
        assert_eq!(record.rating, 4.5);
        assert_eq!(record.poster_url, "http://x/p.png");
    }

    #[sqlx::test]
    #[ignore] // Only run when Postgres is available via DATABASE_URL
    async fn test_stale_row_reads_as_miss(pool: PgPool) {
        sqlx::query(
            "INSERT INTO ratings (slug, rating, poster_url, last_updated)
             VALUES ('old', 3.0, 'p', now() - interval '2 days')",
        )
        .execute(&pool)
        .await
        .unwrap();

        let cache = DatabaseCache::new(Database::from_pool(pool), Duration::seconds(86400));
        assert!(cache.get("old").await.unwrap().is_none());
    }
}
