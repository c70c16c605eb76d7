//! Generator settings loaded via OrthoConfig.
//!
//! Values come from `SAMPLE_DATA_*` environment variables, configuration
//! files, and command-line flags. Every field is optional; accessors supply
//! the defaults.

use std::path::{Path, PathBuf};

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::pool::FALLBACK_LOCALE;

const DEFAULT_SAMPLES: usize = 3;

/// Configuration for building a [`crate::Generator`].
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "SAMPLE_DATA")]
pub struct SampleDataSettings {
    /// Directory laid out as `<locale>/<domain>/<dataset>`; bundled datasets
    /// are used when unset.
    pub locales_dir: Option<PathBuf>,
    /// Fixed seed for reproducible output; time-seeded when unset.
    pub seed: Option<u64>,
    /// Locale requested from locale-aware generators.
    pub locale: Option<String>,
    /// Number of values the demo prints per generator.
    pub samples: Option<usize>,
}

impl SampleDataSettings {
    /// Return the configured locales directory, if any.
    #[must_use]
    pub fn locales_dir(&self) -> Option<&Path> {
        self.locales_dir.as_deref()
    }

    /// Return the configured locale, falling back to the default.
    #[must_use]
    pub fn locale(&self) -> &str {
        self.locale.as_deref().unwrap_or(FALLBACK_LOCALE)
    }

    /// Return the configured sample count, falling back to the default.
    #[must_use]
    pub fn samples(&self) -> usize {
        self.samples.unwrap_or(DEFAULT_SAMPLES)
    }
}
