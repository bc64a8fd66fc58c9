use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::error::{Result, StorageError};

/// Upper bound of the rating scale.
pub const MAX_RATING: f64 = 5.0;

/// A cached audience rating for one film, keyed by its slug.
///
/// Records are overwritten on every fresh fetch and never versioned. A record
/// whose `last_updated` is older than the cache TTL is logically absent even
/// if it is still physically stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct RatingRecord {
    pub slug: String,
    pub rating: f64,
    pub poster_url: String,
    pub last_updated: DateTime<Utc>,
}

impl RatingRecord {
    pub fn new(
        slug: impl Into<String>,
        rating: f64,
        poster_url: impl Into<String>,
        last_updated: DateTime<Utc>,
    ) -> Result<Self> {
        validate_rating(rating)?;

        Ok(Self {
            slug: slug.into(),
            rating,
            poster_url: poster_url.into(),
            last_updated,
        })
    }

    /// A record is fresh while `now - last_updated < ttl`.
    pub fn is_fresh(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now.signed_duration_since(self.last_updated) < ttl
    }
}

pub(crate) fn validate_rating(rating: f64) -> Result<()> {
    if rating.is_finite() && (0.0..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(StorageError::InvalidRating(rating))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_at(last_updated: DateTime<Utc>) -> RatingRecord {
        RatingRecord::new("inception", 4.5, "http://x/p.png", last_updated).unwrap()
    }

    #[test]
    fn test_fresh_within_ttl() {
        let now = Utc::now();
        let record = record_at(now - Duration::seconds(10));
        assert!(record.is_fresh(now, Duration::seconds(60)));
    }

    #[test]
    fn test_expired_exactly_at_ttl() {
        let now = Utc::now();
        let record = record_at(now - Duration::seconds(60));
        assert!(!record.is_fresh(now, Duration::seconds(60)));
    }

    #[test]
    fn test_rejects_out_of_range_rating() {
        let now = Utc::now();
        assert!(matches!(
            RatingRecord::new("x", 5.1, "p", now),
            Err(StorageError::InvalidRating(_))
        ));
        assert!(RatingRecord::new("x", -0.1, "p", now).is_err());
        assert!(RatingRecord::new("x", f64::NAN, "p", now).is_err());
    }

    #[test]
    fn test_accepts_scale_bounds() {
        let now = Utc::now();
        assert!(RatingRecord::new("x", 0.0, "p", now).is_ok());
        assert!(RatingRecord::new("x", 5.0, "p", now).is_ok());
    }
}
