use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Duration;
use tokio::sync::RwLock;

use super::{Clock, RatingCache, system_clock};
use crate::error::Result;
use crate::models::RatingRecord;

pub const DEFAULT_CAPACITY: usize = 1000;

/// Bounded in-process cache.
///
/// Expired records are evicted lazily when read. Inserting a new slug into a
/// full cache evicts the least recently used record; both reads and writes
/// count as a use.
pub struct MemoryCache {
    entries: RwLock<Entries>,
    ttl: Duration,
    capacity: usize,
    clock: Clock,
}

#[derive(Default)]
struct Entries {
    records: HashMap<String, Entry>,
    tick: u64,
}

struct Entry {
    record: RatingRecord,
    last_used: u64,
}

impl Entries {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }

    fn evict_least_recently_used(&mut self) {
        let victim = self
            .records
            .iter()
            .min_by_key(|(_, entry)| entry.last_used)
            .map(|(slug, _)| slug.clone());
        if let Some(victim) = victim {
            tracing::debug!("Evicting {} from rating cache", victim);
            self.records.remove(&victim);
        }
    }
}

impl MemoryCache {
    pub fn new(ttl: Duration, capacity: usize) -> Self {
        Self::with_clock(ttl, capacity, system_clock())
    }

    pub fn with_clock(ttl: Duration, capacity: usize, clock: Clock) -> Self {
        Self {
            entries: RwLock::new(Entries::default()),
            ttl,
            capacity: capacity.max(1),
            clock,
        }
    }

    pub async fn len(&self) -> usize {
        self.entries.read().await.records.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.records.is_empty()
    }
}

#[async_trait]
impl RatingCache for MemoryCache {
    async fn get(&self, slug: &str) -> Result<Option<RatingRecord>> {
        let now = (self.clock)();

        let mut entries = self.entries.write().await;
        let tick = entries.next_tick();
        match entries.records.get_mut(slug) {
            None => return Ok(None),
            Some(entry) if entry.record.is_fresh(now, self.ttl) => {
                entry.last_used = tick;
                return Ok(Some(entry.record.clone()));
            }
            Some(_) => {}
        }

        tracing::warn!("Cache expired for {}", slug);
        entries.records.remove(slug);
        Ok(None)
    }

    async fn set(&self, slug: &str, rating: f64, poster_url: &str) -> Result<()> {
        let record = RatingRecord::new(slug, rating, poster_url, (self.clock)())?;

        let mut entries = self.entries.write().await;
        if !entries.records.contains_key(slug) && entries.records.len() >= self.capacity {
            entries.evict_least_recently_used();
        }
        let last_used = entries.next_tick();
        entries
            .records
            .insert(record.slug.clone(), Entry { record, last_used });

        Ok(())
    }
}
