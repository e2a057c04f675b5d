//! Local caching module for contribution data.
//!
//! Provides `ContributionCache`, a TTL-bound read-through cache keyed by
//! (entity, year), on top of a pluggable `KeyValueStore` backend. Entries
//! are stored as JSON and considered stale after 24 hours.

pub mod manager;
pub mod store;

pub use manager::{CacheEntry, ContributionCache};
pub use store::{FileStore, KeyValueStore, MemoryStore};
