//! In-memory brand cache for Prism Studio
//!
//! Holds recently resolved brand palettes and token lists behind an LRU
//! boundary with a fixed TTL. The cache is an injected dependency with
//! explicit `get`/`set`/`expire` operations — callers construct one and
//! pass it where it is needed; nothing in the engine reaches for global
//! mutable state. An expired read surfaces as [`CacheError::Expired`]
//! rather than a silent miss, so callers can distinguish "never cached"
//! from "cached but stale".

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::num::NonZeroUsize;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use lru::LruCache;
use thiserror::Error;

/// Cache error types
#[derive(Debug, Error)]
pub enum CacheError {
    /// Entry was present but past its TTL
    #[error("Entry expired: {0}")]
    Expired(String),
}

/// Result type for cache operations
pub type Result<T> = std::result::Result<T, CacheError>;

// =============================================================================
// Configuration
// =============================================================================

/// Cache configuration
#[derive(Debug, Clone, Copy)]
pub struct CacheConfig {
    /// Maximum number of entries before LRU eviction
    pub max_entries: usize,
    /// Fixed TTL applied to entries stored via [`BrandCache::set`]
    pub default_ttl: Duration,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: 256,
            default_ttl: Duration::from_secs(3600),
        }
    }
}

impl CacheConfig {
    /// Create a configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum entry count
    pub fn max_entries(mut self, max: usize) -> Self {
        self.max_entries = max.max(1);
        self
    }

    /// Set the fixed TTL
    pub fn default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = ttl;
        self
    }
}

// =============================================================================
// Entries
// =============================================================================

#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: SystemTime,
}

impl<V> CacheEntry<V> {
    fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            expires_at: SystemTime::now() + ttl,
        }
    }

    fn is_expired(&self) -> bool {
        SystemTime::now() > self.expires_at
    }
}

// =============================================================================
// Cache
// =============================================================================

/// LRU-bounded, TTL'd key-value cache
pub struct BrandCache<V> {
    entries: Mutex<LruCache<String, CacheEntry<V>>>,
    config: CacheConfig,
}

impl<V: Clone> BrandCache<V> {
    /// Create a cache with the given configuration
    pub fn new(config: CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries)
            .unwrap_or_else(|| NonZeroUsize::new(1).expect("1 is non-zero"));

        Self {
            entries: Mutex::new(LruCache::new(capacity)),
            config,
        }
    }

    /// Get a value by key
    ///
    /// `Ok(None)` means never cached (or evicted); `Err(Expired)` means
    /// the entry was present but stale, and it has been dropped.
    pub fn get(&self, key: &str) -> Result<Option<V>> {
        let mut entries = self.entries.lock().expect("cache lock poisoned");

        let stale = entries.peek(key).map(CacheEntry::is_expired).unwrap_or(false);
        if stale {
            entries.pop(key);
            return Err(CacheError::Expired(key.to_string()));
        }

        Ok(entries.get(key).map(|entry| entry.value.clone()))
    }

    /// Store a value under the fixed default TTL
    pub fn set(&self, key: impl Into<String>, value: V) {
        self.set_with_ttl(key, value, self.config.default_ttl);
    }

    /// Store a value with an explicit TTL
    pub fn set_with_ttl(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.put(key.into(), CacheEntry::new(value, ttl));
    }

    /// Drop a key immediately, returning whether it was present
    pub fn expire(&self, key: &str) -> bool {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        entries.pop(key).is_some()
    }

    /// Whether a key is present and fresh
    pub fn contains(&self, key: &str) -> bool {
        let mut entries = self.entries.lock().expect("cache lock poisoned");
        match entries.peek(key) {
            Some(entry) if entry.is_expired() => {
                entries.pop(key);
                false
            }
            Some(_) => true,
            None => false,
        }
    }

    /// Number of entries currently held (stale ones included until read)
    pub fn len(&self) -> usize {
        self.entries.lock().expect("cache lock poisoned").len()
    }

    /// Whether the cache holds nothing
    pub fn is_empty(&self) -> bool {
        self.entries.lock().expect("cache lock poisoned").is_empty()
    }

    /// Drop every entry
    pub fn clear(&self) {
        self.entries.lock().expect("cache lock poisoned").clear();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set_round_trip() {
        let cache: BrandCache<String> = BrandCache::new(CacheConfig::new());
        cache.set("brand:acme", "palette".to_string());

        assert_eq!(cache.get("brand:acme").unwrap(), Some("palette".to_string()));
        assert_eq!(cache.get("brand:other").unwrap(), None);
    }

    #[test]
    fn test_expired_read_is_a_signal() {
        let config = CacheConfig::new().default_ttl(Duration::from_millis(30));
        let cache: BrandCache<u32> = BrandCache::new(config);
        cache.set("brand:acme", 7);

        assert_eq!(cache.get("brand:acme").unwrap(), Some(7));

        std::thread::sleep(Duration::from_millis(60));
        assert!(matches!(
            cache.get("brand:acme"),
            Err(CacheError::Expired(_))
        ));
        // A second read sees a plain miss: the stale entry is gone
        assert_eq!(cache.get("brand:acme").unwrap(), None);
    }

    #[test]
    fn test_explicit_expire() {
        let cache: BrandCache<u32> = BrandCache::new(CacheConfig::new());
        cache.set("brand:acme", 7);

        assert!(cache.expire("brand:acme"));
        assert!(!cache.expire("brand:acme"));
        assert_eq!(cache.get("brand:acme").unwrap(), None);
    }

    #[test]
    fn test_lru_eviction() {
        let cache: BrandCache<u32> = BrandCache::new(CacheConfig::new().max_entries(2));
        cache.set("a", 1);
        cache.set("b", 2);
        cache.set("c", 3);

        assert_eq!(cache.len(), 2);
        assert_eq!(cache.get("a").unwrap(), None);
        assert_eq!(cache.get("b").unwrap(), Some(2));
        assert_eq!(cache.get("c").unwrap(), Some(3));
    }

    #[test]
    fn test_contains_and_clear() {
        let cache: BrandCache<u32> = BrandCache::new(CacheConfig::new());
        cache.set("a", 1);

        assert!(cache.contains("a"));
        assert!(!cache.contains("b"));

        cache.clear();
        assert!(cache.is_empty());
        assert!(!cache.contains("a"));
    }

    #[test]
    fn test_per_entry_ttl_override() {
        let cache: BrandCache<u32> = BrandCache::new(CacheConfig::new());
        cache.set_with_ttl("short", 1, Duration::from_millis(20));
        cache.set("long", 2);

        std::thread::sleep(Duration::from_millis(50));
        assert!(cache.get("short").is_err());
        assert_eq!(cache.get("long").unwrap(), Some(2));
    }
}
