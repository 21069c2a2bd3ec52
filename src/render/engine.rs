//! Module which defines the export engine.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use resources::{CachingLoader, Font, FontLoader, Loader};
use util::cache::ThreadSafeCache;
use super::error::ExportError;
use super::output::ExportArtifact;
use super::surface::Surface;
use super::task::ExportTask;


const DEFAULT_FONT_CAPACITY: usize = 16;


/// Banner export engine.
///
/// Rasterization is CPU-bound and not instantaneous, so a host that wants
/// to keep its UI responsive should run `rasterize` in a background thread;
/// the engine is thread-safe (`Sync`) for exactly that reason. Concurrent
/// exports proceed independently — they are not serialized or deduplicated,
/// each produces its own artifact.
///
/// *Note*: `Engine` implements `Clone`
/// by merely cloning a shared reference to the underlying object.
pub struct Engine<Fl = FontLoader>
    where Fl: Loader<Item=Font>
{
    inner: Arc<Inner<Fl>>,
}

/// Shared state of the engine that export tasks have access to.
#[derive(Debug)]
pub(super) struct Inner<Fl>
    where Fl: Loader<Item=Font>
{
    pub(super) font_loader: CachingLoader<Fl>,
}

// Constructors.
impl Engine<FontLoader> {
    /// Create an Engine which loads fonts from given directory path.
    ///
    /// Loaded fonts are cached in memory (LRU cache).
    #[inline]
    pub fn new<D: AsRef<Path>>(font_directory: D) -> Self {
        Self::with_loader(FontLoader::new(font_directory))
    }
}
impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>
{
    /// Create an Engine that uses given loader for fonts.
    ///
    /// Loaded fonts are cached in memory (LRU cache).
    pub fn with_loader(font_loader: Fl) -> Self {
        Engine{inner: Arc::new(Inner{
            font_loader: CachingLoader::new(font_loader, DEFAULT_FONT_CAPACITY),
        })}
    }

    /// Create an Engine that uses given font loader directly.
    ///
    /// Any caching scheme, if necessary, should be implemented
    /// by the loader itself.
    pub fn with_raw_loader(font_loader: Fl) -> Self {
        Engine{inner: Arc::new(Inner{
            font_loader: CachingLoader::phony(font_loader),
        })}
    }
}

// Exporting.
impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>
{
    /// Rasterize the surface, as currently applied, into a PNG artifact.
    ///
    /// The caller is expected to hand over a settled surface;
    /// `Studio::export` does exactly that.
    pub fn rasterize(&self, surface: &Surface) -> Result<ExportArtifact, ExportError<Fl>> {
        ExportTask::new(surface, self.inner.clone()).perform()
    }
}

// Managing resources.
impl<Fl> Engine<Fl>
    where Fl: Loader<Item=Font>
{
    /// Preemptively load a font into the engine's cache.
    pub fn preload_font(&self, name: &str) -> Result<(), Fl::Err> {
        if !self.inner.font_loader.phony {
            self.inner.font_loader.load(name)?;
        }
        Ok(())
    }

    /// Return a reference to the internal font cache, if any.
    /// This can be used to examine cache statistics (hits & misses).
    pub fn font_cache(&self) -> Option<&ThreadSafeCache<String, Font>> {
        if self.inner.font_loader.phony {
            None
        } else {
            Some(self.inner.font_loader.cache())
        }
    }
}

impl<Fl> Clone for Engine<Fl>
    where Fl: Loader<Item=Font>
{
    fn clone(&self) -> Self {
        Engine{inner: self.inner.clone()}
    }
}

impl<Fl> fmt::Debug for Engine<Fl>
    where Fl: Loader<Item=Font>
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_struct("Engine")
            .field("font_loader", &self.inner.font_loader)
            .finish()
    }
}


#[cfg(test)]
mod tests {
    use super::Engine;

    #[test]
    fn thread_safe() {
        fn assert_sync<T: Sync>() {}
        fn assert_send<T: Send>() {}

        assert_sync::<Engine>();
        assert_send::<Engine>();
    }
}
