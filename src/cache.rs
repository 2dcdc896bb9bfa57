//! TTL cache for market signal lookups
//!
//! An explicit, injectable cache with per-entry expiry and bounded size,
//! passed by reference to whatever needs cached lookups. Entries expire
//! after the configured time-to-live; when the cache is full the oldest
//! entry is evicted first.
//!
//! # Examples
//!
//! ```no_run
//! use skillsphere_analytics::cache::TtlCache;
//! use std::time::Duration;
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let cache = TtlCache::<String, f64>::new(64, Duration::from_secs(3600));
//! cache.insert("python".to_string(), 0.8).await;
//! if let Some(demand) = cache.get(&"python".to_string()).await {
//!     println!("cached demand: {demand}");
//! }
//! # Ok(())
//! # }
//! ```

use std::sync::Arc;
use std::time::{Duration, Instant};

use indexmap::IndexMap;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
struct Entry<V> {
    value: V,
    expires_at: Instant,
}

/// Bounded cache with per-entry time-to-live
///
/// Insertion order is the eviction order; a `get` does not refresh an
/// entry's position or expiry.
#[derive(Clone)]
pub struct TtlCache<K, V>
where
    K: Clone + Eq + std::hash::Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    max_size: usize,
    ttl: Duration,
    entries: Arc<RwLock<IndexMap<K, Entry<V>>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Clone + Eq + std::hash::Hash + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    /// Create a cache holding at most `max_size` entries for `ttl` each
    pub fn new(max_size: usize, ttl: Duration) -> Self {
        Self {
            max_size: max_size.max(1),
            ttl,
            entries: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Get a live entry; expired entries are removed on access
    pub async fn get(&self, key: &K) -> Option<V> {
        let mut entries = self.entries.write().await;
        let live = match entries.get(key) {
            Some(entry) if Instant::now() < entry.expires_at => Some(entry.value.clone()),
            Some(_) => None,
            None => return None,
        };
        if live.is_none() {
            entries.shift_remove(key);
        }
        live
    }

    /// Insert a value, evicting the oldest entries when full
    pub async fn insert(&self, key: K, value: V) {
        let mut entries = self.entries.write().await;
        entries.shift_remove(&key);
        while entries.len() >= self.max_size {
            entries.shift_remove_index(0);
        }
        entries.insert(
            key,
            Entry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Drop every expired entry, returning how many were removed
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.write().await;
        let now = Instant::now();
        let before = entries.len();
        entries.retain(|_, entry| now < entry.expires_at);
        before - entries.len()
    }

    /// Remove a specific entry
    pub async fn invalidate(&self, key: &K) {
        self.entries.write().await.shift_remove(key);
    }

    /// Remove everything
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }

    /// Number of entries currently held, live or expired
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = TtlCache::new(10, Duration::from_secs(60));
        cache.insert("python".to_string(), 0.8).await;
        assert_eq!(cache.get(&"python".to_string()).await, Some(0.8));
    }

    #[tokio::test]
    async fn test_miss() {
        let cache: TtlCache<String, f64> = TtlCache::new(10, Duration::from_secs(60));
        assert!(cache.get(&"absent".to_string()).await.is_none());
    }

    #[tokio::test]
    async fn test_expiry() {
        let cache = TtlCache::new(10, Duration::from_millis(20));
        cache.insert("key".to_string(), 1).await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(cache.get(&"key".to_string()).await.is_none());
        assert_eq!(cache.len().await, 0);
    }

    #[tokio::test]
    async fn test_eviction_drops_oldest() {
        let cache = TtlCache::new(2, Duration::from_secs(60));
        cache.insert("a".to_string(), 1).await;
        cache.insert("b".to_string(), 2).await;
        cache.insert("c".to_string(), 3).await;
        assert_eq!(cache.len().await, 2);
        assert!(cache.get(&"a".to_string()).await.is_none());
        assert_eq!(cache.get(&"b".to_string()).await, Some(2));
        assert_eq!(cache.get(&"c".to_string()).await, Some(3));
    }

    #[tokio::test]
    async fn test_reinsert_refreshes_value() {
        let cache = TtlCache::new(10, Duration::from_secs(60));
        cache.insert("key".to_string(), 1).await;
        cache.insert("key".to_string(), 2).await;
        assert_eq!(cache.get(&"key".to_string()).await, Some(2));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_purge_expired() {
        let cache = TtlCache::new(10, Duration::from_millis(20));
        cache.insert("a".to_string(), 1).await;
        cache.insert("b".to_string(), 2).await;
        tokio::time::sleep(Duration::from_millis(50)).await;
        let purged = cache.purge_expired().await;
        assert_eq!(purged, 2);
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_invalidate_and_clear() {
        let cache = TtlCache::new(10, Duration::from_secs(60));
        cache.insert("a".to_string(), 1).await;
        cache.insert("b".to_string(), 2).await;
        cache.invalidate(&"a".to_string()).await;
        assert!(cache.get(&"a".to_string()).await.is_none());
        cache.clear().await;
        assert!(cache.is_empty().await);
    }
}
