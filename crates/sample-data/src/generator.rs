//! Composition of a random source and a pool resolver.
//!
//! Domain generators take a [`Generator`] and never reach for global state on
//! their own. [`Generator::global`] shares the process-wide source and
//! resolver, so pinning [`crate::random::set_source`] affects it, while
//! [`Generator::seeded`] owns a private source and replays independently of
//! everything else in the process.

use std::path::Path;
use std::sync::Arc;

use camino::Utf8Path;
use tracing::warn;

use crate::pool::{DirectoryStore, PoolRequest, PoolResolver};
use crate::random::{self, RandomSource, SeedMaterial};
use crate::settings::SampleDataSettings;

/// Handle passed to every domain generator.
///
/// Cloning is cheap and clones share the same source and cache.
///
/// # Example
///
/// ```
/// use sample_data::{Generator, color, number};
///
/// let first = Generator::seeded(42);
/// let second = Generator::seeded(42);
///
/// let options = number::NumberOptions::default().with_int_min(10).with_int_max(20);
/// assert_eq!(number::int(&first, &options), number::int(&second, &options));
/// assert_eq!(color::rgb(&first), color::rgb(&second));
/// ```
#[derive(Debug, Clone)]
pub struct Generator {
    source: Arc<RandomSource>,
    resolver: Arc<PoolResolver>,
}

impl Generator {
    /// Creates a generator from an explicit source and resolver.
    #[must_use]
    pub const fn new(source: Arc<RandomSource>, resolver: Arc<PoolResolver>) -> Self {
        Self { source, resolver }
    }

    /// Returns a generator backed by the process-wide source and resolver.
    #[must_use]
    pub fn global() -> Self {
        Self::new(
            Arc::clone(random::global()),
            Arc::clone(PoolResolver::global()),
        )
    }

    /// Returns a generator with its own reproducible source.
    ///
    /// Datasets come from the process-wide bundled resolver.
    #[must_use]
    pub fn seeded(seed: impl Into<SeedMaterial>) -> Self {
        Self::new(
            Arc::new(RandomSource::new(seed)),
            Arc::clone(PoolResolver::global()),
        )
    }

    /// Builds a generator from loaded settings.
    ///
    /// A configured locale directory that cannot be opened is logged and the
    /// bundled datasets are used instead.
    #[must_use]
    pub fn from_settings(settings: &SampleDataSettings) -> Self {
        let source = settings
            .seed
            .map_or_else(RandomSource::from_time, RandomSource::new);
        let resolver = settings
            .locales_dir()
            .and_then(open_directory_resolver)
            .unwrap_or_else(|| Arc::clone(PoolResolver::global()));

        Self::new(Arc::new(source), resolver)
    }

    /// Returns the random source.
    #[must_use]
    pub fn source(&self) -> &RandomSource {
        &self.source
    }

    /// Returns the pool resolver.
    #[must_use]
    pub fn resolver(&self) -> &PoolResolver {
        &self.resolver
    }

    /// Resolves the pool for `request` and returns one uniformly drawn entry.
    #[must_use]
    pub fn pick(&self, request: &PoolRequest<'_>) -> String {
        let pool = self.resolver.resolve(request);
        let index = self.source.draw_uniform_int(pool.len());
        pool.into_iter().nth(index).unwrap_or_default()
    }
}

impl Default for Generator {
    fn default() -> Self {
        Self::global()
    }
}

fn open_directory_resolver(path: &Path) -> Option<Arc<PoolResolver>> {
    let Some(utf8) = Utf8Path::from_path(path) else {
        warn!(path = %path.display(), "locales directory is not UTF-8; using bundled datasets");
        return None;
    };

    DirectoryStore::open(utf8)
        .map(|store| Arc::new(PoolResolver::new(store)))
        .inspect_err(|err| {
            warn!(path = %utf8, error = %err, "cannot open locales directory; using bundled datasets");
        })
        .ok()
}
