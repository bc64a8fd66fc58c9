use std::sync::Arc;

use anyhow::{Context, Result};
use badge::Assets;
use letterboxd::RatingProvider;
use storage::{Database, DatabaseCache, DisabledCache, MemoryCache, RatingCache};

use crate::config::{CacheBackend, Config};

/// Shared application state, built once before the server accepts traffic.
#[derive(Clone)]
pub struct AppState {
    pub cache: Arc<dyn RatingCache>,
    pub provider: Arc<dyn RatingProvider>,
    pub assets: Arc<Assets>,
}

impl AppState {
    pub fn new(
        cache: Arc<dyn RatingCache>,
        provider: Arc<dyn RatingProvider>,
        assets: Assets,
    ) -> Self {
        Self {
            cache,
            provider,
            assets: Arc::new(assets),
        }
    }
}

/// Selects the cache implementation for this deployment.
pub async fn build_cache(config: &Config) -> Result<Arc<dyn RatingCache>> {
    if !config.should_cache {
        tracing::info!("Caching disabled");
        return Ok(Arc::new(DisabledCache));
    }

    match config.cache_backend {
        CacheBackend::Memory => {
            tracing::info!(
                "Using in-memory rating cache (capacity {}, ttl {}s)",
                config.cache_capacity,
                config.cache_ttl.num_seconds()
            );
            Ok(Arc::new(MemoryCache::new(
                config.cache_ttl,
                config.cache_capacity,
            )))
        }
        CacheBackend::Database => {
            let database_url = config
                .database_url
                .as_deref()
                .context("DATABASE_URL is required for the database cache")?;

            tracing::info!(
                "Connecting to database at: {}",
                database_url.split('@').next_back().unwrap_or("unknown")
            );
            let db = Database::new(database_url)
                .await
                .context("Failed to initialize database")?;

            tracing::info!("Running database migrations");
            db.run_migrations()
                .await
                .context("Failed to run migrations")?;

            tracing::info!(
                "Using database rating cache (ttl {}s)",
                config.cache_ttl.num_seconds()
            );
            Ok(Arc::new(DatabaseCache::new(db, config.cache_ttl)))
        }
    }
}
