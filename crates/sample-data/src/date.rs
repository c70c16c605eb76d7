//! Random instants, month and weekday names, and IANA timezones.
//!
//! Instants are [`chrono::DateTime<Utc>`] values. Ranges are drawn at whole
//! second granularity, so a result keeps the sub-second part of its lower
//! bound.
//!
//! Windows for [`any`], [`future`] and [`past`] are derived from an anchor
//! instant shifted by a years/months/days span. Month arithmetic clamps to the
//! last day of the target month, so 31 January plus one month is 28 or 29
//! February.

use chrono::{DateTime, Months, TimeDelta, Utc};

use crate::generator::Generator;
use crate::pool::{BASE_LOCALE, Domain, FALLBACK_LOCALE, PoolRequest};

const DEFAULT_YEARS: i32 = 100;

/// Options for date generation.
///
/// The anchor defaults to the moment a generator runs.
///
/// # Example
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use sample_data::{Generator, date::{self, DateOptions}};
///
/// let anchor = Utc.with_ymd_and_hms(2020, 6, 15, 12, 0, 0).unwrap();
/// let options = DateOptions::default()
///     .with_relative(anchor)
///     .with_years(0)
///     .with_days(10);
///
/// let instant = date::future(&Generator::seeded(1), &options);
/// assert!(instant > anchor && instant <= anchor + chrono::TimeDelta::days(10));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateOptions {
    locale: String,
    relative: Option<DateTime<Utc>>,
    years: i32,
    months: i32,
    days: i32,
}

impl Default for DateOptions {
    fn default() -> Self {
        Self {
            locale: FALLBACK_LOCALE.to_owned(),
            relative: None,
            years: DEFAULT_YEARS,
            months: 0,
            days: 0,
        }
    }
}

impl DateOptions {
    /// Sets the locale used for month, weekday and timezone pools.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Pins the anchor instant windows are measured from.
    #[must_use]
    pub const fn with_relative(mut self, relative: DateTime<Utc>) -> Self {
        self.relative = Some(relative);
        self
    }

    /// Sets the years component of the window span.
    #[must_use]
    pub const fn with_years(mut self, years: i32) -> Self {
        self.years = years;
        self
    }

    /// Sets the months component of the window span.
    #[must_use]
    pub const fn with_months(mut self, months: i32) -> Self {
        self.months = months;
        self
    }

    /// Sets the days component of the window span.
    #[must_use]
    pub const fn with_days(mut self, days: i32) -> Self {
        self.days = days;
        self
    }

    /// Returns the configured locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn anchor(&self) -> DateTime<Utc> {
        self.relative.unwrap_or_else(Utc::now)
    }

    fn span_months(&self) -> i64 {
        i64::from(self.years) * 12 + i64::from(self.months)
    }
}

/// Returns a random instant between `from` and `to`, both inclusive.
///
/// Inverted bounds are swapped. Bounds that fall in the same whole second
/// return `from` without drawing.
#[must_use]
pub fn between(generator: &Generator, from: DateTime<Utc>, to: DateTime<Utc>) -> DateTime<Utc> {
    let (start, end) = if from > to { (to, from) } else { (from, to) };

    let seconds = end.timestamp().abs_diff(start.timestamp());
    if seconds == 0 {
        return start;
    }

    let offset = generator
        .source()
        .draw_uniform_int64(seconds.saturating_add(1));
    i64::try_from(offset)
        .ok()
        .and_then(TimeDelta::try_seconds)
        .and_then(|delta| start.checked_add_signed(delta))
        .unwrap_or(end)
}

/// Returns a random instant within the span on either side of the anchor.
#[must_use]
pub fn any(generator: &Generator, options: &DateOptions) -> DateTime<Utc> {
    let anchor = options.anchor();
    let months = options.span_months();
    let days = i64::from(options.days);

    between(
        generator,
        shift(anchor, -months, -days),
        shift(anchor, months, days),
    )
}

/// Returns a random instant from one day after the anchor to the end of the
/// span.
///
/// A span ending before that first day is replaced by one year.
#[must_use]
pub fn future(generator: &Generator, options: &DateOptions) -> DateTime<Utc> {
    let anchor = options.anchor();
    let earliest = shift(anchor, 0, 1);
    let configured = shift(anchor, options.span_months(), i64::from(options.days));
    let latest = if configured < earliest {
        shift(anchor, 12, 0)
    } else {
        configured
    };

    between(generator, earliest, latest)
}

/// Returns a random instant from the start of the span to one day before the
/// anchor.
///
/// A span starting after that last day is replaced by one year.
#[must_use]
pub fn past(generator: &Generator, options: &DateOptions) -> DateTime<Utc> {
    let anchor = options.anchor();
    let latest = shift(anchor, 0, -1);
    let configured = shift(anchor, -options.span_months(), -i64::from(options.days));
    let earliest = if configured > latest {
        shift(anchor, -12, 0)
    } else {
        configured
    };

    between(generator, earliest, latest)
}

/// Returns a random month name in the configured locale.
#[must_use]
pub fn month(generator: &Generator, options: &DateOptions) -> String {
    generator.pick(
        &PoolRequest::new(Domain::Date, "months.json", &["months"], "month")
            .with_locale(options.locale()),
    )
}

/// Returns a random weekday name in the configured locale.
#[must_use]
pub fn weekday(generator: &Generator, options: &DateOptions) -> String {
    generator.pick(
        &PoolRequest::new(Domain::Date, "weekdays.json", &["weekdays"], "weekday")
            .with_locale(options.locale()),
    )
}

/// Returns a random IANA timezone identifier.
///
/// Timezones are locale independent; the shared `base` dataset is read when
/// the locale has none of its own.
#[must_use]
pub fn timezone(generator: &Generator, options: &DateOptions) -> String {
    generator.pick(
        &PoolRequest::new(Domain::Date, "timezones.json", &["timezones"], "timezone")
            .with_locale(options.locale())
            .with_alternate_locale(BASE_LOCALE),
    )
}

/// Moves `anchor` by whole months and then days, falling back to the anchor
/// when the result leaves chrono's range.
fn shift(anchor: DateTime<Utc>, months: i64, days: i64) -> DateTime<Utc> {
    let by_months = u32::try_from(months.unsigned_abs())
        .ok()
        .map(Months::new)
        .and_then(|step| {
            if months < 0 {
                anchor.checked_sub_months(step)
            } else {
                anchor.checked_add_months(step)
            }
        });

    by_months
        .zip(TimeDelta::try_days(days))
        .and_then(|(moved, delta)| moved.checked_add_signed(delta))
        .unwrap_or(anchor)
}

#[cfg(test)]
mod tests {
    //! Window arithmetic, range draws and localized pools.

    use chrono::TimeZone;
    use rstest::{fixture, rstest};

    use super::*;
    use crate::random::RandomSource;

    #[fixture]
    fn anchor() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 8, 30, 0)
            .single()
            .expect("valid instant")
    }

    fn sample(draw: impl Fn(&Generator) -> DateTime<Utc>) -> Vec<DateTime<Utc>> {
        let generator = Generator::seeded(77);
        (0..300).map(|_| draw(&generator)).collect()
    }

    #[rstest]
    fn equal_instants_return_without_drawing(anchor: DateTime<Utc>) {
        let generator = Generator::seeded(12);
        let reference = RandomSource::new(12);

        assert_eq!(between(&generator, anchor, anchor), anchor);
        assert_eq!(
            generator.source().draw_uniform_int64(u64::MAX),
            reference.draw_uniform_int64(u64::MAX)
        );
    }

    #[rstest]
    fn same_second_returns_earlier_bound(anchor: DateTime<Utc>) {
        let later = anchor + TimeDelta::milliseconds(400);

        assert_eq!(between(&Generator::seeded(3), later, anchor), anchor);
    }

    #[rstest]
    fn between_swaps_and_stays_inclusive(anchor: DateTime<Utc>) {
        let end = anchor + TimeDelta::seconds(3);

        let values = sample(|g| between(g, end, anchor));

        assert!(values.iter().all(|value| (anchor..=end).contains(value)));
        assert!(values.contains(&anchor));
        assert!(values.contains(&end));
    }

    #[rstest]
    fn any_stays_inside_symmetric_window(anchor: DateTime<Utc>) {
        let options = DateOptions::default()
            .with_relative(anchor)
            .with_years(1)
            .with_months(2)
            .with_days(3);
        let earliest = Utc
            .with_ymd_and_hms(2023, 1, 7, 8, 30, 0)
            .single()
            .expect("valid instant");
        let latest = Utc
            .with_ymd_and_hms(2025, 5, 13, 8, 30, 0)
            .single()
            .expect("valid instant");

        for value in sample(|g| any(g, &options)) {
            assert!((earliest..=latest).contains(&value), "{value} escaped");
        }
    }

    #[rstest]
    fn future_starts_one_day_after_anchor(anchor: DateTime<Utc>) {
        let options = DateOptions::default().with_relative(anchor).with_years(0).with_days(5);

        for value in sample(|g| future(g, &options)) {
            assert!(value >= anchor + TimeDelta::days(1));
            assert!(value <= anchor + TimeDelta::days(5));
        }
    }

    #[rstest]
    fn future_with_inverted_span_defaults_to_one_year(anchor: DateTime<Utc>) {
        let options = DateOptions::default().with_relative(anchor).with_years(-2);
        let year_later = anchor.checked_add_months(Months::new(12)).expect("in range");

        for value in sample(|g| future(g, &options)) {
            assert!(value > anchor && value <= year_later, "{value} escaped");
        }
    }

    #[rstest]
    fn past_ends_one_day_before_anchor(anchor: DateTime<Utc>) {
        let options = DateOptions::default().with_relative(anchor).with_years(0).with_months(1);

        for value in sample(|g| past(g, &options)) {
            assert!(value <= anchor - TimeDelta::days(1));
            assert!(value >= anchor - TimeDelta::days(29));
        }
    }

    #[rstest]
    fn past_with_inverted_span_defaults_to_one_year(anchor: DateTime<Utc>) {
        let options = DateOptions::default().with_relative(anchor).with_years(0).with_days(-30);
        let year_earlier = anchor.checked_sub_months(Months::new(12)).expect("in range");

        for value in sample(|g| past(g, &options)) {
            assert!(value < anchor && value >= year_earlier, "{value} escaped");
        }
    }

    #[test]
    fn default_window_spans_a_century_around_now() {
        let now = Utc::now();
        let value = any(&Generator::seeded(5), &DateOptions::default());

        assert!((value - now).num_days().abs() <= 36_600);
    }

    #[rstest]
    fn month_end_shift_clamps(anchor: DateTime<Utc>) {
        let january = Utc
            .with_ymd_and_hms(2023, 1, 31, 0, 0, 0)
            .single()
            .expect("valid instant");
        let february = Utc
            .with_ymd_and_hms(2023, 2, 28, 0, 0, 0)
            .single()
            .expect("valid instant");

        assert_eq!(shift(january, 1, 0), february);
        assert_eq!(shift(anchor, i64::MAX, 0), anchor);
    }

    #[rstest]
    #[case("en", "January")]
    #[case("fr", "janvier")]
    fn month_reads_the_locale_pool(#[case] locale: &str, #[case] member: &str) {
        let generator = Generator::seeded(1);
        let options = DateOptions::default().with_locale(locale);
        let months: Vec<String> = (0..200).map(|_| month(&generator, &options)).collect();

        assert!(months.iter().any(|name| name == member));
        assert!(months.iter().all(|name| !name.is_empty()));
    }

    #[rstest]
    #[case::month(month)]
    #[case::weekday(weekday)]
    #[case::timezone(timezone)]
    fn unknown_locale_matches_english(#[case] draw: fn(&Generator, &DateOptions) -> String) {
        let english = draw(&Generator::seeded(31), &DateOptions::default());
        let unknown = draw(
            &Generator::seeded(31),
            &DateOptions::default().with_locale("xx-XX"),
        );

        assert_eq!(english, unknown);
    }

    #[test]
    fn timezone_reads_the_shared_base_dataset() {
        let generator = Generator::seeded(8);
        let zones = generator.resolver().resolve(
            &PoolRequest::new(Domain::Date, "timezones.json", &["timezones"], "timezone")
                .with_alternate_locale(BASE_LOCALE),
        );

        assert!(zones.len() > 1);
        for _ in 0..50 {
            assert!(zones.contains(&timezone(&generator, &DateOptions::default())));
        }
    }
}
