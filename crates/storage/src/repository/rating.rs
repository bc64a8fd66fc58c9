use sqlx::PgPool;

use crate::error::Result;
use crate::models::RatingRecord;
use crate::models::rating::validate_rating;

pub struct RatingRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RatingRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Find the stored rating for a slug, regardless of its age
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<RatingRecord>> {
        let record = sqlx::query_as::<_, RatingRecord>(
            r#"
            SELECT slug, rating, poster_url, last_updated
            FROM ratings
            WHERE slug = $1
            "#,
        )
        .bind(slug)
        .fetch_optional(self.pool)
        .await?;

        Ok(record)
    }

    /// Create or overwrite the rating for a slug, refreshing `last_updated`
    pub async fn upsert(&self, slug: &str, rating: f64, poster_url: &str) -> Result<RatingRecord> {
        validate_rating(rating)?;

        let record = sqlx::query_as::<_, RatingRecord>(
            r#"
            INSERT INTO ratings (slug, rating, poster_url, last_updated)
            VALUES ($1, $2, $3, now())
            ON CONFLICT (slug)
            DO UPDATE SET
                rating = EXCLUDED.rating,
                poster_url = EXCLUDED.poster_url,
                last_updated = now()
            RETURNING slug, rating, poster_url, last_updated
            "#,
        )
        .bind(slug)
        .bind(rating)
        .bind(poster_url)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }
}
