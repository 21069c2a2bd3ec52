//! Module handling the resources used for rendering banners.

mod filesystem;
mod fonts;
mod images;


pub use self::filesystem::{BytesLoader, PathLoader};
pub use self::fonts::{Font, FontError, FontLoader, FILE_EXTENSION as FONT_FILE_EXTENSION};
pub use self::images::{BackgroundError, BackgroundImage, MEDIA_TYPE_FORMATS};


use std::fmt;
use std::sync::Arc;

use util::cache::ThreadSafeCache;


/// Loader of resources from some external source.
pub trait Loader {
    /// Type of resources that this loader can load.
    type Item;
    /// Error that may occur while loading the resource.
    type Err;

    /// Load a resource of given name.
    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err>;
}


/// A loader that keeps a cache of resources previously loaded.
pub struct CachingLoader<L: Loader> {
    inner: L,
    cache: ThreadSafeCache<String, L::Item>,
    pub(crate) phony: bool,
}

impl<L: Loader> CachingLoader<L> {
    #[inline]
    pub fn new(inner: L, capacity: usize) -> Self {
        CachingLoader{
            inner: inner,
            cache: ThreadSafeCache::new(capacity),
            phony: false,
        }
    }

    /// Create a phony version of CachingLoader that doesn't actually cache.
    ///
    /// Used to transparently wrap a `Loader<Item=T>` into `Loader<Item=Arc<T>>`,
    /// which Rust cannot abstract over otherwise.
    #[inline]
    pub(crate) fn phony(inner: L) -> Self {
        CachingLoader{
            inner: inner,
            cache: ThreadSafeCache::new(1),
            phony: true,
        }
    }

    #[inline]
    pub fn cache(&self) -> &ThreadSafeCache<String, L::Item> {
        &self.cache
    }
}

impl<L: Loader> Loader for CachingLoader<L> {
    type Item = Arc<L::Item>;
    type Err = L::Err;

    /// Load the object from cache or fall back on the original Loader.
    /// Objects loaded the latter way are cached for subsequent calls.
    fn load<'n>(&self, name: &'n str) -> Result<Self::Item, Self::Err> {
        if self.phony {
            let obj = self.inner.load(name)?;
            Ok(Arc::new(obj))
        } else {
            if let Some(obj) = self.cache.get(name) {
                return Ok(obj);
            }
            let obj = self.inner.load(name)?;
            let cached_obj = self.cache.put(name.to_owned(), obj);
            Ok(cached_obj)
        }
    }
}

impl<L: Loader> fmt::Debug for CachingLoader<L> {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("CachingLoader")
            .field("inner", &"...")
            .field("cache", &self.cache)
            .field("phony", &self.phony)
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use super::{CachingLoader, Loader};

    /// Loader doling out consecutive integers, counting its calls.
    struct Counter {
        calls: Cell<usize>,
    }
    impl Counter {
        fn new() -> Self { Counter{calls: Cell::new(0)} }
    }
    impl Loader for Counter {
        type Item = usize;
        type Err = ();
        fn load<'n>(&self, _: &'n str) -> Result<usize, ()> {
            self.calls.set(self.calls.get() + 1);
            Ok(self.calls.get())
        }
    }

    #[test]
    fn caches_repeated_loads() {
        let loader = CachingLoader::new(Counter::new(), 4);
        assert_eq!(1, *loader.load("foo").unwrap());
        assert_eq!(1, *loader.load("foo").unwrap());
        assert_eq!(2, *loader.load("bar").unwrap());
    }

    #[test]
    fn phony_loader_does_not_cache() {
        let loader = CachingLoader::phony(Counter::new());
        assert_eq!(1, *loader.load("foo").unwrap());
        assert_eq!(2, *loader.load("foo").unwrap());
        assert!(loader.cache().is_empty());
    }
}
