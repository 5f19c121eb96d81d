use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::time::Instant;

#[derive(Debug)]
struct Entry {
    payload: String,
    created: Instant,
    ttl: Duration,
}

impl Entry {
    fn is_fresh(&self, now: Instant) -> bool {
        now <= self.created + self.ttl
    }
}

#[derive(Debug)]
struct Store {
    map: RwLock<HashMap<String, Entry>>,
    default_ttl: Duration,
}

/// A key→payload store with per-entry expiry, used to avoid duplicate calls
/// to slow-changing data sources.
///
/// Caching is an optimization, never a correctness dependency: a disabled
/// cache reports every read as a miss and ignores writes, so callers never
/// have to special-case it. An entry is readable only while
/// `now <= created + ttl`; a read that finds an expired entry removes it.
///
/// Time is measured with [`tokio::time::Instant`], so tests running on a
/// paused runtime can advance the clock past a TTL without sleeping.
#[derive(Debug, Clone, Default)]
pub struct TtlCache {
    store: Option<Arc<Store>>,
}

impl TtlCache {
    /// Create an enabled cache with a default TTL for entries written via
    /// [`TtlCache::set`].
    #[must_use]
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            store: Some(Arc::new(Store {
                map: RwLock::new(HashMap::new()),
                default_ttl,
            })),
        }
    }

    /// Create a disabled cache: `get` always misses, `set` is a no-op.
    #[must_use]
    pub fn disabled() -> Self {
        Self { store: None }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.store.is_some()
    }

    /// Return the payload for `key` if an unexpired entry exists.
    ///
    /// A miss caused by expiry deletes the stale entry; a miss caused by the
    /// key not being present does not touch the map.
    pub async fn get(&self, key: &str) -> Option<String> {
        let store = self.store.as_ref()?;
        let now = Instant::now();
        {
            let guard = store.map.read().await;
            match guard.get(key) {
                Some(entry) if entry.is_fresh(now) => return Some(entry.payload.clone()),
                Some(_) => {}
                None => return None,
            }
        }
        // The entry existed but was stale; remove it eagerly. Re-check under
        // the write lock in case a writer replaced it meanwhile.
        let mut guard = store.map.write().await;
        if let Some(entry) = guard.get(key) {
            if entry.is_fresh(now) {
                return Some(entry.payload.clone());
            }
            guard.remove(key);
        }
        None
    }

    /// Store `payload` under `key` with the default TTL, overwriting any
    /// existing entry.
    pub async fn set(&self, key: &str, payload: &str) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        self.set_with_ttl(key, payload, store.default_ttl).await;
    }

    /// Store `payload` under `key` with an explicit TTL.
    ///
    /// The insert happens under a single write-lock acquisition, so a reader
    /// never observes a half-written entry.
    pub async fn set_with_ttl(&self, key: &str, payload: &str, ttl: Duration) {
        let Some(store) = self.store.as_ref() else {
            return;
        };
        let entry = Entry {
            payload: payload.to_string(),
            created: Instant::now(),
            ttl,
        };
        let mut guard = store.map.write().await;
        guard.insert(key.to_string(), entry);
    }

    /// Remove every entry and return how many were removed.
    pub async fn clear(&self) -> usize {
        let Some(store) = self.store.as_ref() else {
            return 0;
        };
        let mut guard = store.map.write().await;
        let count = guard.len();
        guard.clear();
        count
    }

    /// Number of stored entries, expired or not.
    pub async fn len(&self) -> usize {
        match self.store.as_ref() {
            Some(store) => store.map.read().await.len(),
            None => 0,
        }
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}
