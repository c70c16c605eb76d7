//! Person names, honorifics, genders and job titles.
//!
//! Name and prefix datasets hold one list per gender and suffix datasets one
//! list per suffix type. Without a filter the lists are concatenated, female
//! before male and academic before generational, and one entry is drawn from
//! the combined pool.

use serde::{Deserialize, Serialize};

use crate::generator::Generator;
use crate::pool::{Domain, FALLBACK_LOCALE, PoolRequest};

const BOTH_GENDERS: &[&str] = &["female", "male"];
const BOTH_SUFFIX_TYPES: &[&str] = &["academic", "generational"];

/// Gender filter for gendered pools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    /// Entries from the `female` list.
    Female,
    /// Entries from the `male` list.
    Male,
}

impl Gender {
    /// Returns the dataset field holding this gender's entries.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Female => "female",
            Self::Male => "male",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label {
            "female" => Some(Self::Female),
            "male" => Some(Self::Male),
            _ => None,
        }
    }

    const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Female => &["female"],
            Self::Male => &["male"],
        }
    }
}

/// Suffix family filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuffixType {
    /// Degrees and post-nominals such as `PhD`.
    Academic,
    /// Lineage markers such as `Jr.`.
    Generational,
}

impl SuffixType {
    /// Returns the dataset field holding this suffix family.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Academic => "academic",
            Self::Generational => "generational",
        }
    }

    const fn fields(self) -> &'static [&'static str] {
        match self {
            Self::Academic => &["academic"],
            Self::Generational => &["generational"],
        }
    }
}

/// Options for person generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonOptions {
    locale: String,
    gender: Option<Gender>,
    suffix_type: Option<SuffixType>,
}

impl Default for PersonOptions {
    fn default() -> Self {
        Self {
            locale: FALLBACK_LOCALE.to_owned(),
            gender: None,
            suffix_type: None,
        }
    }
}

impl PersonOptions {
    /// Sets the locale used for every person pool.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Restricts gendered pools to one gender.
    #[must_use]
    pub const fn with_gender(mut self, gender: Gender) -> Self {
        self.gender = Some(gender);
        self
    }

    /// Restricts suffixes to one family.
    #[must_use]
    pub const fn with_suffix_type(mut self, suffix_type: SuffixType) -> Self {
        self.suffix_type = Some(suffix_type);
        self
    }

    /// Returns the configured locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn gender_fields(&self) -> &'static [&'static str] {
        self.gender.map_or(BOTH_GENDERS, Gender::fields)
    }

    fn suffix_fields(&self) -> &'static [&'static str] {
        self.suffix_type.map_or(BOTH_SUFFIX_TYPES, SuffixType::fields)
    }
}

/// A generated person record.
///
/// # Example
///
/// ```
/// use sample_data::{Generator, person::{self, PersonOptions}};
///
/// let record = person::person(&Generator::seeded(3), &PersonOptions::default());
/// assert_eq!(
///     record.full_name(),
///     format!("{} {}", record.first_name, record.last_name)
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// Honorific such as `Dr.`.
    pub prefix: String,
    /// Given name.
    pub first_name: String,
    /// Middle name.
    pub middle_name: String,
    /// Family name.
    pub last_name: String,
    /// Gender label the names were drawn for.
    pub gender: String,
    /// Job title in `descriptor area type` form.
    pub job_title: String,
}

impl Person {
    /// Returns `first_name last_name`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Returns a random first name.
#[must_use]
pub fn first_name(generator: &Generator, options: &PersonOptions) -> String {
    draw(
        generator,
        options,
        "first_names.json",
        options.gender_fields(),
        "first_name",
    )
}

/// Returns a random middle name.
#[must_use]
pub fn middle_name(generator: &Generator, options: &PersonOptions) -> String {
    draw(
        generator,
        options,
        "middle_names.json",
        options.gender_fields(),
        "middle_name",
    )
}

/// Returns a random last name.
#[must_use]
pub fn last_name(generator: &Generator, options: &PersonOptions) -> String {
    draw(
        generator,
        options,
        "last_names.json",
        &["last_names"],
        "last_name",
    )
}

/// Returns a random gender label.
#[must_use]
pub fn gender(generator: &Generator, options: &PersonOptions) -> String {
    draw(generator, options, "genders.json", &["genders"], "gender")
}

/// Returns a random name prefix.
#[must_use]
pub fn prefix(generator: &Generator, options: &PersonOptions) -> String {
    draw(
        generator,
        options,
        "prefixes.json",
        options.gender_fields(),
        "prefix",
    )
}

/// Returns a random name suffix.
#[must_use]
pub fn suffix(generator: &Generator, options: &PersonOptions) -> String {
    draw(
        generator,
        options,
        "suffixes.json",
        options.suffix_fields(),
        "suffix",
    )
}

/// Returns a random job area such as `Marketing`.
#[must_use]
pub fn job_area(generator: &Generator, options: &PersonOptions) -> String {
    draw(generator, options, "job_areas.json", &["areas"], "job_area")
}

/// Returns a random job descriptor such as `Senior`.
#[must_use]
pub fn job_descriptor(generator: &Generator, options: &PersonOptions) -> String {
    draw(
        generator,
        options,
        "job_descriptors.json",
        &["descriptors"],
        "job_descriptor",
    )
}

/// Returns a random job type such as `Engineer`.
#[must_use]
pub fn job_type(generator: &Generator, options: &PersonOptions) -> String {
    draw(generator, options, "job_types.json", &["types"], "job_type")
}

/// Returns `descriptor area type`, each part drawn in that order.
#[must_use]
pub fn job_title(generator: &Generator, options: &PersonOptions) -> String {
    let descriptor = job_descriptor(generator, options);
    let area = job_area(generator, options);
    let kind = job_type(generator, options);
    format!("{descriptor} {area} {kind}")
}

/// Returns `first last` with names drawn from the same gender filter.
#[must_use]
pub fn full_name(generator: &Generator, options: &PersonOptions) -> String {
    let first = first_name(generator, options);
    let last = last_name(generator, options);
    format!("{first} {last}")
}

/// Returns a complete person record.
///
/// Without a gender filter a gender label is drawn first and the names and
/// prefix are drawn from that gender's lists.
#[must_use]
pub fn person(generator: &Generator, options: &PersonOptions) -> Person {
    let label = options
        .gender
        .map_or_else(|| gender(generator, options), |fixed| fixed.as_str().to_owned());
    let scoped = Gender::from_label(&label).map_or_else(
        || options.clone(),
        |drawn| options.clone().with_gender(drawn),
    );

    Person {
        prefix: prefix(generator, &scoped),
        first_name: first_name(generator, &scoped),
        middle_name: middle_name(generator, &scoped),
        last_name: last_name(generator, &scoped),
        gender: label,
        job_title: job_title(generator, &scoped),
    }
}

fn draw(
    generator: &Generator,
    options: &PersonOptions,
    dataset: &str,
    fields: &[&str],
    fallback_field: &str,
) -> String {
    generator.pick(
        &PoolRequest::new(Domain::Person, dataset, fields, fallback_field)
            .with_locale(options.locale()),
    )
}
