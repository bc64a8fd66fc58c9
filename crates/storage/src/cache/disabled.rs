use async_trait::async_trait;

use super::RatingCache;
use crate::error::Result;
use crate::models::RatingRecord;

/// Cache used when caching is switched off: never hits, never stores.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledCache;

#[async_trait]
impl RatingCache for DisabledCache {
    async fn get(&self, _slug: &str) -> Result<Option<RatingRecord>> {
        Ok(None)
    }

    async fn set(&self, _slug: &str, _rating: f64, _poster_url: &str) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_does_not_persist() {
        let cache = DisabledCache;
        cache.set("inception", 4.5, "http://x/p.png").await.unwrap();
        assert!(cache.get("inception").await.unwrap().is_none());
    }
}
