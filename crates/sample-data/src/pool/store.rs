//! Backing stores for locale datasets.
//!
//! Stores only hand back raw dataset text; parsing and caching happen in the
//! resolver. Two stores ship with the crate:
//!
//! - [`DirectoryStore`] reads `<root>/<locale>/<domain>/<dataset>` through a
//!   capability handle, so lookups cannot leave the configured root.
//! - [`MemoryStore`] serves datasets from memory. [`MemoryStore::bundled`]
//!   holds the locale files shipped in this crate's `locales/` directory.

use std::collections::HashMap;
use std::fmt;
use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;

use super::{DatasetKey, Domain};
use crate::error::DatasetError;

/// Source of raw dataset text addressed by [`DatasetKey`].
pub trait DatasetStore: fmt::Debug + Send + Sync {
    /// Reads the dataset addressed by `key`.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::NotFound`] when no resource exists for the key
    /// and [`DatasetError::ReadError`] when it exists but cannot be read.
    fn read(&self, key: &DatasetKey) -> Result<String, DatasetError>;
}

/// Reads datasets from a directory tree.
#[derive(Debug)]
pub struct DirectoryStore {
    root: Dir,
}

impl DirectoryStore {
    /// Opens `path` as the dataset root.
    ///
    /// # Errors
    ///
    /// Returns any filesystem error raised while opening the directory.
    pub fn open(path: &Utf8Path) -> io::Result<Self> {
        Dir::open_ambient_dir(path, ambient_authority()).map(Self::from_dir)
    }

    /// Wraps an already opened directory handle.
    #[must_use]
    pub const fn from_dir(root: Dir) -> Self {
        Self { root }
    }
}

impl DatasetStore for DirectoryStore {
    fn read(&self, key: &DatasetKey) -> Result<String, DatasetError> {
        let relative = Utf8PathBuf::from(key.locale())
            .join(key.domain().as_str())
            .join(key.dataset());

        self.root
            .read_to_string(&relative)
            .map_err(|err| match err.kind() {
                io::ErrorKind::NotFound => DatasetError::NotFound {
                    key: key.to_string(),
                },
                _ => DatasetError::ReadError {
                    key: key.to_string(),
                    message: err.to_string(),
                },
            })
    }
}

/// Serves datasets held in memory.
///
/// # Example
///
/// ```
/// use sample_data::pool::{DatasetKey, DatasetStore, Domain, MemoryStore};
///
/// let key = DatasetKey::new(Domain::Color, "en", "names.json");
/// let store = MemoryStore::new().with_dataset(key.clone(), r#"{"colors": ["teal"]}"#);
///
/// assert!(store.read(&key).is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<DatasetKey, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding the datasets shipped with this crate.
    #[must_use]
    pub fn bundled() -> Self {
        BUNDLED
            .iter()
            .fold(Self::new(), |store, (domain, locale, dataset, json)| {
                store.with_dataset(DatasetKey::new(*domain, locale, dataset), *json)
            })
    }

    /// Adds or replaces a dataset, returning the store.
    #[must_use]
    pub fn with_dataset(mut self, key: DatasetKey, json: impl Into<String>) -> Self {
        self.insert(key, json);
        self
    }

    /// Adds or replaces a dataset.
    pub fn insert(&mut self, key: DatasetKey, json: impl Into<String>) {
        self.entries.insert(key, json.into());
    }

    /// Returns the number of datasets held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the store holds no datasets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl DatasetStore for MemoryStore {
    fn read(&self, key: &DatasetKey) -> Result<String, DatasetError> {
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| DatasetError::NotFound {
                key: key.to_string(),
            })
    }
}

const BUNDLED: &[(Domain, &str, &str, &str)] = &[
    (
        Domain::Color,
        "en",
        "names.json",
        include_str!("../../locales/en/color/names.json"),
    ),
    (
        Domain::Color,
        "fr",
        "names.json",
        include_str!("../../locales/fr/color/names.json"),
    ),
    (
        Domain::Date,
        "en",
        "months.json",
        include_str!("../../locales/en/date/months.json"),
    ),
    (
        Domain::Date,
        "en",
        "weekdays.json",
        include_str!("../../locales/en/date/weekdays.json"),
    ),
    (
        Domain::Date,
        "fr",
        "months.json",
        include_str!("../../locales/fr/date/months.json"),
    ),
    (
        Domain::Date,
        "fr",
        "weekdays.json",
        include_str!("../../locales/fr/date/weekdays.json"),
    ),
    (
        Domain::Date,
        "base",
        "timezones.json",
        include_str!("../../locales/base/date/timezones.json"),
    ),
    (
        Domain::Person,
        "en",
        "first_names.json",
        include_str!("../../locales/en/person/first_names.json"),
    ),
    (
        Domain::Person,
        "en",
        "middle_names.json",
        include_str!("../../locales/en/person/middle_names.json"),
    ),
    (
        Domain::Person,
        "en",
        "last_names.json",
        include_str!("../../locales/en/person/last_names.json"),
    ),
    (
        Domain::Person,
        "en",
        "genders.json",
        include_str!("../../locales/en/person/genders.json"),
    ),
    (
        Domain::Person,
        "en",
        "prefixes.json",
        include_str!("../../locales/en/person/prefixes.json"),
    ),
    (
        Domain::Person,
        "en",
        "suffixes.json",
        include_str!("../../locales/en/person/suffixes.json"),
    ),
    (
        Domain::Person,
        "en",
        "job_areas.json",
        include_str!("../../locales/en/person/job_areas.json"),
    ),
    (
        Domain::Person,
        "en",
        "job_descriptors.json",
        include_str!("../../locales/en/person/job_descriptors.json"),
    ),
    (
        Domain::Person,
        "en",
        "job_types.json",
        include_str!("../../locales/en/person/job_types.json"),
    ),
];
