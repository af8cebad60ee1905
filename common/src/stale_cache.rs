//! Freshness-window cache shared by the search result cache (5 minutes) and
//! the geolocation cache (30 minutes). The clock is injected as epoch
//! milliseconds so the policy stays testable off the browser.

use std::collections::HashMap;


#[derive(Debug, Clone)]
struct CacheEntry<V> {
    stored_at_ms: f64,
    value: V,
}

#[derive(Debug, Clone)]
pub struct StaleCache<V> {
    ttl_ms: f64,
    entries: HashMap<String, CacheEntry<V>>,
}

impl<V: Clone> StaleCache<V> {
    pub fn new(ttl_ms: f64) -> Self {
        StaleCache {
            ttl_ms,
            entries: HashMap::new(),
        }
    }

    /// Returns the cached value while it is still inside the freshness
    /// window; an expired entry reads as a miss and will be overwritten by
    /// the next insert.
    pub fn get(&self, key: &str, now_ms: f64) -> Option<V> {
        let entry = self.entries.get(key)?;
        if now_ms - entry.stored_at_ms <= self.ttl_ms {
            Some(entry.value.clone())
        } else {
            None
        }
    }

    pub fn insert(&mut self, key: impl Into<String>, value: V, now_ms: f64) {
        self.entries.insert(
            key.into(),
            CacheEntry {
                stored_at_ms: now_ms,
                value,
            },
        );
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_entry_short_circuits() {
        let mut cache = StaleCache::new(5_000.0);
        cache.insert("pho", vec![1, 2, 3], 1_000.0);
        assert_eq!(cache.get("pho", 1_001.0), Some(vec![1, 2, 3]));
        assert_eq!(cache.get("pho", 6_000.0), Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_expired_entry_reads_as_miss() {
        let mut cache = StaleCache::new(5_000.0);
        cache.insert("pho", 7u32, 1_000.0);
        assert_eq!(cache.get("pho", 6_001.0), None);
    }

    #[test]
    fn test_keys_are_independent() {
        let mut cache = StaleCache::new(5_000.0);
        cache.insert("pho", 1u32, 0.0);
        cache.insert("bun", 2u32, 4_000.0);
        assert_eq!(cache.get("pho", 5_500.0), None);
        assert_eq!(cache.get("bun", 5_500.0), Some(2));
        assert_eq!(cache.get("banh", 0.0), None);
    }

    #[test]
    fn test_reinsert_refreshes_window() {
        let mut cache = StaleCache::new(5_000.0);
        cache.insert("pho", 1u32, 0.0);
        cache.insert("pho", 2u32, 6_000.0);
        assert_eq!(cache.get("pho", 10_000.0), Some(2));
    }
}
