//! Built-in fallback values and the recognized locale set.
//!
//! A locale is recognized for a domain when this table carries an entry for
//! it. Anything else is normalized to [`FALLBACK_LOCALE`] before a dataset is
//! looked up.

use super::Domain;

/// Locale substituted for unrecognized locale keys.
pub const FALLBACK_LOCALE: &str = "en";

/// Locale-independent datasets live under this key.
pub const BASE_LOCALE: &str = "base";

type FieldTable = &'static [(&'static str, &'static str)];
type LocaleTable = &'static [(&'static str, FieldTable)];

const COLOR: LocaleTable = &[("en", &[("name", "white")]), ("fr", &[("name", "blanc")])];

const DATE: LocaleTable = &[
    (
        "en",
        &[
            ("timezone", "America/New_York"),
            ("weekday", "Monday"),
            ("month", "January"),
        ],
    ),
    (
        "fr",
        &[
            ("timezone", "Europe/Paris"),
            ("weekday", "lundi"),
            ("month", "janvier"),
        ],
    ),
];

const PERSON: LocaleTable = &[(
    "en",
    &[
        ("first_name", "John"),
        ("middle_name", "Smith"),
        ("last_name", "Doe"),
        ("gender", "female"),
        ("prefix", "Dr."),
        ("suffix", "Sr."),
        ("job_area", "Sales"),
        ("job_descriptor", "Lead"),
        ("job_type", "Officer"),
    ],
)];

const fn locales(domain: Domain) -> LocaleTable {
    match domain {
        Domain::Color => COLOR,
        Domain::Date => DATE,
        Domain::Person => PERSON,
    }
}

fn fields(domain: Domain, locale: &str) -> Option<FieldTable> {
    locales(domain)
        .iter()
        .find(|(candidate, _)| *candidate == locale)
        .map(|(_, table)| *table)
}

/// Returns `true` when `domain` has datasets and fallbacks for `locale`.
#[must_use]
pub fn is_recognized_locale(domain: Domain, locale: &str) -> bool {
    fields(domain, locale).is_some()
}

/// Returns `locale` if recognized for `domain`, otherwise [`FALLBACK_LOCALE`].
#[must_use]
pub fn normalize_locale(domain: Domain, locale: &str) -> &str {
    if is_recognized_locale(domain, locale) {
        locale
    } else {
        FALLBACK_LOCALE
    }
}

/// Looks up the literal default for a semantic field.
///
/// Unrecognized locales read the [`FALLBACK_LOCALE`] row; a field missing
/// from the table yields an empty string.
#[must_use]
pub fn fallback_value(domain: Domain, locale: &str, field: &str) -> &'static str {
    fields(domain, normalize_locale(domain, locale))
        .and_then(|table| table.iter().find(|(name, _)| *name == field))
        .map_or("", |(_, value)| *value)
}
