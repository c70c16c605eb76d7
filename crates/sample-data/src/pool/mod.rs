//! Locale-backed pool resolution with caching and fallback.
//!
//! Every string-valued generator asks the resolver for a pool of candidates
//! and then draws one index from the random source. Resolution runs in a
//! fixed order:
//!
//! 1. An unrecognized locale is replaced by [`FALLBACK_LOCALE`].
//! 2. The `(domain, locale, dataset)` key is served from the cache, or loaded
//!    from the [`DatasetStore`], parsed, and cached.
//! 3. If loading fails and the request names an alternate locale, that locale
//!    is tried next.
//! 4. A failed load, or requested fields that are all empty, yields a single
//!    element pool holding the built-in fallback value.
//!
//! Load errors are logged and never returned to generator callers.
//!
//! Lookups take the cache's shared lock and inserts take the exclusive lock.
//! Two threads missing the same key may both load it; the later insert wins
//! and both entries are parsed from the same resource.

mod dataset;
mod fallback;
mod store;

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use tracing::{debug, warn};

pub use dataset::Dataset;
pub use fallback::{
    BASE_LOCALE, FALLBACK_LOCALE, fallback_value, is_recognized_locale, normalize_locale,
};
pub use store::{DatasetStore, DirectoryStore, MemoryStore};

use crate::error::DatasetError;

static GLOBAL_RESOLVER: OnceLock<Arc<PoolResolver>> = OnceLock::new();

/// Generator family owning a set of datasets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Domain {
    /// Color names.
    Color,
    /// Month, weekday and timezone names.
    Date,
    /// Names, genders, honorifics and job fields.
    Person,
}

impl Domain {
    /// Returns the directory name used for the domain's datasets.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Date => "date",
            Self::Person => "person",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Address of one dataset resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DatasetKey {
    domain: Domain,
    locale: String,
    dataset: String,
}

impl DatasetKey {
    /// Creates a key for `dataset` in `locale` under `domain`.
    #[must_use]
    pub fn new(domain: Domain, locale: &str, dataset: &str) -> Self {
        Self {
            domain,
            locale: locale.to_owned(),
            dataset: dataset.to_owned(),
        }
    }

    /// Returns the owning domain.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the locale key.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Returns the dataset file name.
    #[must_use]
    pub fn dataset(&self) -> &str {
        &self.dataset
    }
}

impl fmt::Display for DatasetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.domain, self.locale, self.dataset)
    }
}

/// Describes the pool a generator wants.
///
/// `fields` are concatenated in order, which is how "either gender" pools are
/// formed from the `female` and `male` lists. `fallback_field` names the
/// semantic entry in the fallback table.
///
/// # Example
///
/// ```
/// use sample_data::pool::{Domain, PoolRequest, PoolResolver};
///
/// let resolver = PoolResolver::bundled();
/// let request = PoolRequest::new(Domain::Date, "months.json", &["months"], "month");
///
/// assert_eq!(resolver.resolve(&request).len(), 12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolRequest<'a> {
    domain: Domain,
    locale: &'a str,
    dataset: &'a str,
    fields: &'a [&'a str],
    fallback_field: &'a str,
    alternate_locale: Option<&'a str>,
}

impl<'a> PoolRequest<'a> {
    /// Creates a request for the [`FALLBACK_LOCALE`] with no alternate.
    #[must_use]
    pub const fn new(
        domain: Domain,
        dataset: &'a str,
        fields: &'a [&'a str],
        fallback_field: &'a str,
    ) -> Self {
        Self {
            domain,
            locale: FALLBACK_LOCALE,
            dataset,
            fields,
            fallback_field,
            alternate_locale: None,
        }
    }

    /// Sets the requested locale.
    #[must_use]
    pub const fn with_locale(mut self, locale: &'a str) -> Self {
        self.locale = locale;
        self
    }

    /// Sets the locale tried when the requested locale fails to load.
    #[must_use]
    pub const fn with_alternate_locale(mut self, locale: &'a str) -> Self {
        self.alternate_locale = Some(locale);
        self
    }

    /// Returns the requested domain.
    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    /// Returns the locale as requested, before normalization.
    #[must_use]
    pub const fn locale(&self) -> &'a str {
        self.locale
    }
}

/// Resolves pools from a dataset store through a load-once cache.
pub struct PoolResolver {
    store: Arc<dyn DatasetStore>,
    cache: RwLock<HashMap<DatasetKey, Arc<Dataset>>>,
}

impl PoolResolver {
    /// Creates a resolver over `store`.
    #[must_use]
    pub fn new(store: impl DatasetStore + 'static) -> Self {
        Self::from_shared(Arc::new(store))
    }

    /// Creates a resolver over a shared store.
    #[must_use]
    pub fn from_shared(store: Arc<dyn DatasetStore>) -> Self {
        Self {
            store,
            cache: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a resolver over the datasets shipped with the crate.
    #[must_use]
    pub fn bundled() -> Self {
        Self::new(MemoryStore::bundled())
    }

    /// Returns the pool for `request`, falling back to the built-in value.
    ///
    /// The returned pool is never empty.
    #[must_use]
    pub fn resolve(&self, request: &PoolRequest<'_>) -> Vec<String> {
        let domain = request.domain;
        let locale = normalize_locale(domain, request.locale);
        let key = DatasetKey::new(domain, locale, request.dataset);

        let pool = self
            .dataset(&key)
            .or_else(|err| {
                let Some(alternate) = request.alternate_locale else {
                    return Err(err);
                };
                debug!(%key, %alternate, error = %err, "trying alternate locale");
                self.dataset(&DatasetKey::new(domain, alternate, request.dataset))
            })
            .map(|dataset| dataset.pool(request.fields))
            .unwrap_or_else(|err| {
                warn!(%key, error = %err, "dataset unavailable; using fallback value");
                Vec::new()
            });

        if pool.is_empty() {
            vec![fallback_value(domain, locale, request.fallback_field).to_owned()]
        } else {
            pool
        }
    }

    /// Returns the parsed dataset for `key`, loading it on a cache miss.
    ///
    /// Failed loads are not cached.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError`] if the store cannot supply the dataset or its
    /// contents are not a JSON object.
    pub fn dataset(&self, key: &DatasetKey) -> Result<Arc<Dataset>, DatasetError> {
        if let Some(hit) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
        {
            return Ok(Arc::clone(hit));
        }

        let contents = self.store.read(key)?;
        let parsed = Arc::new(Dataset::from_json(key, &contents)?);

        self.cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.clone(), Arc::clone(&parsed));
        debug!(%key, fields = parsed.len(), "dataset cached");

        Ok(parsed)
    }

    /// Returns the number of datasets held in the cache.
    #[must_use]
    pub fn cached_datasets(&self) -> usize {
        self.cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Returns the process-wide resolver over the bundled datasets.
    #[must_use]
    pub fn global() -> &'static Arc<Self> {
        GLOBAL_RESOLVER.get_or_init(|| Arc::new(Self::bundled()))
    }
}

impl fmt::Debug for PoolResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoolResolver")
            .field("store", &self.store)
            .field("cached_datasets", &self.cached_datasets())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    //! Covers cache reuse, fallback selection and alternate locales.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;

    use rstest::{fixture, rstest};

    use super::*;

    /// Store wrapper counting how often each read reaches the backing store.
    #[derive(Debug)]
    struct CountingStore {
        inner: MemoryStore,
        reads: Arc<AtomicUsize>,
    }

    impl DatasetStore for CountingStore {
        fn read(&self, key: &DatasetKey) -> Result<String, DatasetError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            self.inner.read(key)
        }
    }

    const COLORS: &str = r#"{"colors": ["teal", "plum", "ochre"], "empty": []}"#;

    fn counting(store: MemoryStore) -> (PoolResolver, Arc<AtomicUsize>) {
        let reads = Arc::new(AtomicUsize::new(0));
        let resolver = PoolResolver::new(CountingStore {
            inner: store,
            reads: Arc::clone(&reads),
        });
        (resolver, reads)
    }

    #[fixture]
    fn color_store() -> MemoryStore {
        MemoryStore::new().with_dataset(DatasetKey::new(Domain::Color, "en", "names.json"), COLORS)
    }

    fn color_request(fields: &'static [&'static str]) -> PoolRequest<'static> {
        PoolRequest::new(Domain::Color, "names.json", fields, "name")
    }

    #[rstest]
    fn resolves_requested_field(color_store: MemoryStore) {
        let resolver = PoolResolver::new(color_store);

        assert_eq!(
            resolver.resolve(&color_request(&["colors"])),
            ["teal", "plum", "ochre"]
        );
    }

    #[rstest]
    fn second_resolution_hits_the_cache(color_store: MemoryStore) {
        let (resolver, reads) = counting(color_store);
        let request = color_request(&["colors"]);

        let first = resolver.resolve(&request);
        let second = resolver.resolve(&request);

        assert_eq!(first, second);
        assert_eq!(reads.load(Ordering::SeqCst), 1);
        assert_eq!(resolver.cached_datasets(), 1);
    }

    #[rstest]
    fn different_fields_share_one_cached_dataset(color_store: MemoryStore) {
        let (resolver, reads) = counting(color_store);

        let _ = resolver.resolve(&color_request(&["colors"]));
        let _ = resolver.resolve(&color_request(&["empty"]));

        assert_eq!(reads.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn missing_dataset_yields_fallback_and_is_not_cached() {
        let (resolver, reads) = counting(MemoryStore::new());
        let request = color_request(&["colors"]);

        assert_eq!(resolver.resolve(&request), ["white"]);
        assert_eq!(resolver.resolve(&request), ["white"]);
        assert_eq!(reads.load(Ordering::SeqCst), 2);
        assert_eq!(resolver.cached_datasets(), 0);
    }

    #[rstest]
    #[case::empty_list(&["empty"])]
    #[case::absent_field(&["shades"])]
    fn empty_pool_yields_fallback(color_store: MemoryStore, #[case] fields: &'static [&'static str]) {
        let resolver = PoolResolver::new(color_store);

        assert_eq!(resolver.resolve(&color_request(fields)), ["white"]);
    }

    #[test]
    fn malformed_dataset_yields_fallback() {
        let store = MemoryStore::new()
            .with_dataset(DatasetKey::new(Domain::Color, "en", "names.json"), "{ nope");
        let resolver = PoolResolver::new(store);

        assert_eq!(resolver.resolve(&color_request(&["colors"])), ["white"]);
    }

    #[rstest]
    fn unrecognized_locale_reads_fallback_locale(color_store: MemoryStore) {
        let resolver = PoolResolver::new(color_store);
        let english = resolver.resolve(&color_request(&["colors"]).with_locale("en"));
        let unknown = resolver.resolve(&color_request(&["colors"]).with_locale("tlh"));

        assert_eq!(english, unknown);
    }

    #[test]
    fn recognized_locale_without_dataset_uses_its_own_fallback() {
        let resolver = PoolResolver::new(MemoryStore::new());
        let request = color_request(&["colors"]).with_locale("fr");

        assert_eq!(resolver.resolve(&request), ["blanc"]);
    }

    #[test]
    fn alternate_locale_is_tried_after_a_failed_load() {
        let store = MemoryStore::new().with_dataset(
            DatasetKey::new(Domain::Date, BASE_LOCALE, "timezones.json"),
            r#"{"timezones": ["Europe/Vilnius"]}"#,
        );
        let resolver = PoolResolver::new(store);
        let request = PoolRequest::new(Domain::Date, "timezones.json", &["timezones"], "timezone")
            .with_alternate_locale(BASE_LOCALE);

        assert_eq!(resolver.resolve(&request), ["Europe/Vilnius"]);
    }

    #[test]
    fn alternate_locale_failure_uses_requested_locale_fallback() {
        let resolver = PoolResolver::new(MemoryStore::new());
        let request = PoolRequest::new(Domain::Date, "timezones.json", &["timezones"], "timezone")
            .with_locale("fr")
            .with_alternate_locale(BASE_LOCALE);

        assert_eq!(resolver.resolve(&request), ["Europe/Paris"]);
    }

    #[test]
    fn empty_field_does_not_trigger_alternate_locale() {
        let store = MemoryStore::new()
            .with_dataset(
                DatasetKey::new(Domain::Date, "en", "timezones.json"),
                r#"{"timezones": []}"#,
            )
            .with_dataset(
                DatasetKey::new(Domain::Date, BASE_LOCALE, "timezones.json"),
                r#"{"timezones": ["Asia/Tokyo"]}"#,
            );
        let resolver = PoolResolver::new(store);
        let request = PoolRequest::new(Domain::Date, "timezones.json", &["timezones"], "timezone")
            .with_alternate_locale(BASE_LOCALE);

        assert_eq!(resolver.resolve(&request), ["America/New_York"]);
    }

    #[rstest]
    fn concurrent_misses_converge_on_one_entry(color_store: MemoryStore) {
        let resolver = Arc::new(PoolResolver::new(color_store));

        thread::scope(|scope| {
            for _ in 0..8 {
                let shared = Arc::clone(&resolver);
                scope.spawn(move || {
                    assert_eq!(shared.resolve(&color_request(&["colors"])).len(), 3);
                });
            }
        });

        assert_eq!(resolver.cached_datasets(), 1);
    }

    #[test]
    fn dataset_key_renders_as_colon_path() {
        let key = DatasetKey::new(Domain::Person, "en", "genders.json");

        assert_eq!(key.to_string(), "person:en:genders.json");
    }
}
