//! Slug-keyed rating cache.
//!
//! The core only sees [`RatingCache`]. Whether caching is switched off, kept in
//! process memory or persisted to Postgres is decided once at startup by picking
//! one of the implementations below.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::models::RatingRecord;

mod database;
mod disabled;
mod memory;

pub use database::DatabaseCache;
pub use disabled::DisabledCache;
pub use memory::{DEFAULT_CAPACITY, MemoryCache};

/// Source of the current time, injectable so expiry can be tested.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub fn system_clock() -> Clock {
    Arc::new(Utc::now)
}

#[async_trait]
pub trait RatingCache: Send + Sync {
    /// Returns the record for `slug` unless it is missing or older than the TTL.
    async fn get(&self, slug: &str) -> Result<Option<RatingRecord>>;

    /// Creates or overwrites the record for `slug` and refreshes its timestamp.
    async fn set(&self, slug: &str, rating: f64, poster_url: &str) -> Result<()>;
}
