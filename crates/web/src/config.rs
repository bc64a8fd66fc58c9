use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use chrono::Duration;
use letterboxd::client::{DEFAULT_BASE_URL, DEFAULT_PLACEHOLDER_POSTER_URL};
use storage::cache;

const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CACHE_EXPIRES_SECS: i64 = 86400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheBackend {
    Memory,
    Database,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub should_cache: bool,
    pub cache_ttl: Duration,
    pub cache_backend: CacheBackend,
    pub cache_capacity: usize,
    pub database_url: Option<String>,
    pub assets_dir: PathBuf,
    pub placeholder_poster_url: String,
    pub letterboxd_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let port = match var("PORT") {
            Some(port) => port.trim().parse().context("PORT must be a number")?,
            None => DEFAULT_PORT,
        };

        let should_cache = match var("SHOULD_CACHE") {
            Some(value) => parse_bool(&value).context("SHOULD_CACHE must be a boolean")?,
            None => true,
        };

        let cache_expires_secs = match var("CACHE_EXPIRES") {
            Some(value) => value
                .trim()
                .parse::<i64>()
                .context("CACHE_EXPIRES must be a number of seconds")?,
            None => DEFAULT_CACHE_EXPIRES_SECS,
        };
        if cache_expires_secs < 0 {
            bail!("CACHE_EXPIRES must not be negative");
        }
        let cache_ttl =
            Duration::try_seconds(cache_expires_secs).context("CACHE_EXPIRES is too large")?;

        let database_url = var("DATABASE_URL");
        let cache_backend = match var("CACHE_BACKEND").as_deref().map(str::trim) {
            Some("memory") => CacheBackend::Memory,
            Some("database") => CacheBackend::Database,
            Some(other) => bail!("CACHE_BACKEND must be `memory` or `database`, got {other:?}"),
            None if database_url.is_some() => CacheBackend::Database,
            None => CacheBackend::Memory,
        };
        if cache_backend == CacheBackend::Database && database_url.is_none() {
            bail!("DATABASE_URL is required when CACHE_BACKEND=database");
        }

        let cache_capacity = match var("CACHE_CAPACITY") {
            Some(value) => value
                .trim()
                .parse()
                .context("CACHE_CAPACITY must be a number")?,
            None => cache::DEFAULT_CAPACITY,
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            should_cache,
            cache_ttl,
            cache_backend,
            cache_capacity,
            database_url,
            assets_dir: var("ASSETS_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./assets")),
            placeholder_poster_url: var("PLACEHOLDER_POSTER_URL")
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER_POSTER_URL.to_string()),
            letterboxd_base_url: var("LETTERBOXD_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => bail!("expected true or false, got {other:?}"),
    }
}
