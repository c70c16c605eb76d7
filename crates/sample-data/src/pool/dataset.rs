//! Parsed locale datasets.
//!
//! A dataset is a JSON object whose values are ordered lists of strings:
//!
//! ```json
//! { "female": ["Ada", "Grace"], "male": ["Alan", "Edsger"] }
//! ```
//!
//! Members whose value is anything other than a list of strings are kept out
//! of the parsed dataset, so asking for them yields an empty pool.

use std::collections::HashMap;

use serde::Deserialize;
use serde::de::IgnoredAny;

use super::DatasetKey;
use crate::error::DatasetError;

/// Named pools parsed from one dataset resource.
///
/// # Example
///
/// ```
/// use sample_data::pool::{Dataset, DatasetKey, Domain};
///
/// let key = DatasetKey::new(Domain::Color, "en", "names.json");
/// let dataset = Dataset::from_json(&key, r#"{"colors": ["teal", "plum"]}"#)
///     .expect("valid dataset");
///
/// assert_eq!(dataset.field("colors"), ["teal", "plum"]);
/// assert!(dataset.field("missing").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    fields: HashMap<String, Vec<String>>,
}

impl Dataset {
    /// Parses a dataset from its JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::ParseError`] if the text is not a JSON object.
    pub fn from_json(key: &DatasetKey, json: &str) -> Result<Self, DatasetError> {
        let raw: HashMap<String, RawField> =
            serde_json::from_str(json).map_err(|e| DatasetError::ParseError {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let fields = raw
            .into_iter()
            .filter_map(|(name, field)| match field {
                RawField::Strings(values) => Some((name, values)),
                RawField::Other(_) => None,
            })
            .collect();

        Ok(Self { fields })
    }

    /// Returns the ordered values of `name`, or an empty slice.
    #[must_use]
    pub fn field(&self, name: &str) -> &[String] {
        self.fields.get(name).map_or(&[], Vec::as_slice)
    }

    /// Concatenates the values of `names` in the order given.
    #[must_use]
    pub fn pool(&self, names: &[&str]) -> Vec<String> {
        names
            .iter()
            .flat_map(|name| self.field(name).iter().cloned())
            .collect()
    }

    /// Returns the number of string-list fields in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if the dataset holds no string-list fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Raw JSON representation of a dataset member.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawField {
    Strings(Vec<String>),
    Other(IgnoredAny),
}
