//! Module implementing a thread-safe LRU cache.

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use antidote::Mutex;
use lru_cache::LruCache;


/// A thread-safe cache of keys & cached values.
///
/// Values handed out are `Arc<V>`'s, so entries evicted in the LRU manner
/// remain usable by whoever is still holding on to them.
/// Cache hits & misses are counted.
pub struct ThreadSafeCache<K: Eq + Hash, V> {
    inner: Mutex<LruCache<K, Arc<V>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    /// Create the cache with given capacity.
    pub fn new(capacity: usize) -> Self {
        ThreadSafeCache{
            inner: Mutex::new(LruCache::new(capacity)),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }
}

impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    /// Get the element corresponding to given key if it's present in the cache.
    pub fn get<Q>(&self, key: &Q) -> Option<Arc<V>>
        where K: Borrow<Q>, Q: ?Sized + Eq + Hash
    {
        match self.inner.lock().get_mut(key) {
            Some(v) => { self.hit(); Some(v.clone()) }
            None => { self.miss(); None }
        }
    }

    /// Put an item into cache under given key.
    ///
    /// Returns the (`Arc`'d) value that ends up under the key,
    /// i.e. `v` itself unless the key was cached concurrently.
    pub fn put(&self, k: K, v: V) -> Arc<V> {
        let value = Arc::new(v);
        self.inner.lock().insert(k, value.clone()).unwrap_or_else(|| value)
    }

    /// Cache capacity.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Current size of the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Whether the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }
}

// Cache statistics.
impl<K: Eq + Hash, V> ThreadSafeCache<K, V> {
    fn hit(&self) -> usize {
        let inc = 1;
        self.hits.fetch_add(inc, Ordering::Relaxed) + inc
    }

    fn miss(&self) -> usize {
        let inc = 1;
        self.misses.fetch_add(inc, Ordering::Relaxed) + inc
    }

    /// Returns the number of cache hits so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }

    /// Returns the number of cache misses so far.
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
}

impl<K: Eq + Hash, V> fmt::Debug for ThreadSafeCache<K, V> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        let mut ds = fmt.debug_struct("ThreadSafeCache");
        if let Ok(inner) = self.inner.try_lock() {
            ds.field("capacity", &inner.capacity());
            ds.field("len", &inner.len());
        }
        ds.field("hits", &self.hits());
        ds.field("misses", &self.misses());
        ds.finish()
    }
}


#[cfg(test)]
mod tests {
    use super::ThreadSafeCache;

    #[test]
    fn get_after_put() {
        let cache: ThreadSafeCache<&str, i32> = ThreadSafeCache::new(2);
        assert!(cache.is_empty());

        cache.put("answer", 42);
        assert_eq!(1, cache.len());
        assert_eq!(Some(42), cache.get(&"answer").map(|v| *v));
    }

    #[test]
    fn counts_hits_and_misses() {
        let cache: ThreadSafeCache<&str, i32> = ThreadSafeCache::new(2);

        cache.get(&"nope");
        cache.put("yep", 1);
        cache.get(&"yep");

        assert_eq!(1, cache.hits());
        assert_eq!(1, cache.misses());
    }

    #[test]
    fn evicts_in_lru_order() {
        let cache: ThreadSafeCache<&str, i32> = ThreadSafeCache::new(2);

        cache.put("a", 1);
        cache.put("b", 2);
        cache.put("c", 3);

        assert!(cache.get(&"a").is_none());
        assert!(cache.get(&"b").is_some());
        assert!(cache.get(&"c").is_some());
    }
}
