use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::ContributionsResponse;

use super::store::KeyValueStore;

/// Consider cache entries stale after 24 hours.
/// Contribution counts change slowly; a daily refresh is plenty.
const CACHE_TTL_MS: i64 = 24 * 60 * 60 * 1000;

/// Durable cache schema: the payload plus an epoch-millisecond write time.
/// Field names are the on-disk contract; entries that fail to parse under
/// this shape are treated as misses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub data: ContributionsResponse,
    pub timestamp: i64,
}

impl CacheEntry {
    pub fn new(data: ContributionsResponse) -> Self {
        Self {
            data,
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    pub fn age_ms(&self) -> i64 {
        Utc::now().timestamp_millis() - self.timestamp
    }

    pub fn is_expired(&self) -> bool {
        self.age_ms() >= CACHE_TTL_MS
    }
}

/// TTL-bound cache of contribution data, keyed by (entity, year).
///
/// All operations are best-effort: storage faults and corrupt entries degrade
/// to a miss on read and a no-op on write. Failures are logged at debug level
/// and never surfaced to callers; caching is an optimization, not a
/// correctness requirement.
pub struct ContributionCache {
    store: Box<dyn KeyValueStore>,
}

impl ContributionCache {
    pub fn new(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Deterministic key for one (entity, year) pair. At most one live entry
    /// exists per key; every successful fetch overwrites it.
    pub fn cache_key(entity: &str, year: i32) -> String {
        format!("contributions_{}_{}", entity, year)
    }

    /// Fetch a fresh cached response, or `None` on miss, corrupt entry,
    /// storage fault, or expiry. Expired entries are deleted on read.
    pub fn get(&self, entity: &str, year: i32) -> Option<ContributionsResponse> {
        let key = Self::cache_key(entity, year);

        let raw = match self.store.get(&key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!(key = %key, error = %e, "Cache read failed, treating as miss");
                return None;
            }
        };

        let entry: CacheEntry = match serde_json::from_str(&raw) {
            Ok(entry) => entry,
            Err(e) => {
                debug!(key = %key, error = %e, "Corrupt cache entry, treating as miss");
                return None;
            }
        };

        if entry.is_expired() {
            debug!(key = %key, age_ms = entry.age_ms(), "Cache entry expired, removing");
            if let Err(e) = self.store.remove(&key) {
                debug!(key = %key, error = %e, "Failed to remove expired cache entry");
            }
            return None;
        }

        debug!(key = %key, age_ms = entry.age_ms(), "Cache hit");
        Some(entry.data)
    }

    /// Write a response under the (entity, year) key. Write failures are
    /// logged and ignored.
    pub fn set(&self, entity: &str, year: i32, response: &ContributionsResponse) {
        let key = Self::cache_key(entity, year);

        let entry = CacheEntry::new(response.clone());
        let raw = match serde_json::to_string(&entry) {
            Ok(raw) => raw,
            Err(e) => {
                debug!(key = %key, error = %e, "Failed to serialize cache entry");
                return;
            }
        };

        if let Err(e) = self.store.set(&key, &raw) {
            debug!(key = %key, error = %e, "Cache write failed, continuing without cache");
        }
    }
}
