//! Bounded integers, rounded floats, radix strings and roman numerals.
//!
//! Every generator reads its bounds from [`NumberOptions`]. Inverted bounds
//! are swapped rather than rejected, so no generator here can fail.

use crate::error::RomanNumeralError;
use crate::generator::Generator;

/// Smallest value representable as a roman numeral.
pub const ROMAN_MIN: i64 = 1;

/// Largest value representable as a roman numeral.
pub const ROMAN_MAX: i64 = 3999;

const BINARY_PREFIX: &str = "0b";
const OCTAL_PREFIX: &str = "0";
const HEX_PREFIX: &str = "0x";

const NUMERALS: [(i64, &str); 13] = [
    (1000, "M"),
    (900, "CM"),
    (500, "D"),
    (400, "CD"),
    (100, "C"),
    (90, "XC"),
    (50, "L"),
    (40, "XL"),
    (10, "X"),
    (9, "IX"),
    (5, "V"),
    (4, "IV"),
    (1, "I"),
];

/// Bounds and formatting switches for every number generator.
///
/// # Example
///
/// ```
/// use sample_data::number::NumberOptions;
///
/// let options = NumberOptions::default()
///     .with_int_min(-50)
///     .with_int_max(50)
///     .with_int_multiple(5)
///     .with_hex_prefix(true);
/// assert_eq!(options, NumberOptions::default()
///     .with_int_max(50)
///     .with_int_min(-50)
///     .with_hex_prefix(true)
///     .with_int_multiple(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberOptions {
    int_min: i64,
    int_max: i64,
    int_multiple: i64,
    float_min: f64,
    float_max: f64,
    float_fraction_digits: i32,
    binary_min: i64,
    binary_max: i64,
    binary_prefix: bool,
    octal_min: i64,
    octal_max: i64,
    octal_prefix: bool,
    hex_min: i64,
    hex_max: i64,
    hex_prefix: bool,
    roman_min: i64,
    roman_max: i64,
}

impl Default for NumberOptions {
    fn default() -> Self {
        Self {
            int_min: 0,
            int_max: i64::MAX,
            int_multiple: 1,
            float_min: 0.0,
            float_max: 1.0,
            float_fraction_digits: 2,
            binary_min: 0,
            binary_max: 1,
            binary_prefix: false,
            octal_min: 0,
            octal_max: 7,
            octal_prefix: false,
            hex_min: 0,
            hex_max: 15,
            hex_prefix: false,
            roman_min: ROMAN_MIN,
            roman_max: ROMAN_MAX,
        }
    }
}

impl NumberOptions {
    /// Sets the inclusive lower bound for [`int`].
    #[must_use]
    pub const fn with_int_min(mut self, min: i64) -> Self {
        self.int_min = min;
        self
    }

    /// Sets the inclusive upper bound for [`int`].
    #[must_use]
    pub const fn with_int_max(mut self, max: i64) -> Self {
        self.int_max = max;
        self
    }

    /// Restricts [`int`] to multiples of `multiple`. Values below one are
    /// ignored.
    #[must_use]
    pub const fn with_int_multiple(mut self, multiple: i64) -> Self {
        if multiple > 0 {
            self.int_multiple = multiple;
        }
        self
    }

    /// Sets the inclusive lower bound for [`float`].
    #[must_use]
    pub const fn with_float_min(mut self, min: f64) -> Self {
        self.float_min = min;
        self
    }

    /// Sets the exclusive upper bound for [`float`].
    #[must_use]
    pub const fn with_float_max(mut self, max: f64) -> Self {
        self.float_max = max;
        self
    }

    /// Sets how many fraction digits [`float`] rounds to. Negative values are
    /// ignored.
    #[must_use]
    pub const fn with_float_fraction_digits(mut self, digits: i32) -> Self {
        if digits >= 0 {
            self.float_fraction_digits = digits;
        }
        self
    }

    /// Sets the inclusive lower bound for [`binary`].
    #[must_use]
    pub const fn with_binary_min(mut self, min: i64) -> Self {
        self.binary_min = min;
        self
    }

    /// Sets the inclusive upper bound for [`binary`].
    #[must_use]
    pub const fn with_binary_max(mut self, max: i64) -> Self {
        self.binary_max = max;
        self
    }

    /// Toggles the `0b` prefix.
    #[must_use]
    pub const fn with_binary_prefix(mut self, include: bool) -> Self {
        self.binary_prefix = include;
        self
    }

    /// Sets the inclusive lower bound for [`octal`].
    #[must_use]
    pub const fn with_octal_min(mut self, min: i64) -> Self {
        self.octal_min = min;
        self
    }

    /// Sets the inclusive upper bound for [`octal`].
    #[must_use]
    pub const fn with_octal_max(mut self, max: i64) -> Self {
        self.octal_max = max;
        self
    }

    /// Toggles the `0` prefix.
    #[must_use]
    pub const fn with_octal_prefix(mut self, include: bool) -> Self {
        self.octal_prefix = include;
        self
    }

    /// Sets the inclusive lower bound for [`hex`].
    #[must_use]
    pub const fn with_hex_min(mut self, min: i64) -> Self {
        self.hex_min = min;
        self
    }

    /// Sets the inclusive upper bound for [`hex`].
    #[must_use]
    pub const fn with_hex_max(mut self, max: i64) -> Self {
        self.hex_max = max;
        self
    }

    /// Toggles the `0x` prefix.
    #[must_use]
    pub const fn with_hex_prefix(mut self, include: bool) -> Self {
        self.hex_prefix = include;
        self
    }

    /// Sets the lower bound for [`roman`], raised to [`ROMAN_MIN`] if smaller.
    #[must_use]
    pub const fn with_roman_min(mut self, min: i64) -> Self {
        self.roman_min = if min < ROMAN_MIN { ROMAN_MIN } else { min };
        self
    }

    /// Sets the upper bound for [`roman`], lowered to [`ROMAN_MAX`] if larger.
    #[must_use]
    pub const fn with_roman_max(mut self, max: i64) -> Self {
        self.roman_max = if max > ROMAN_MAX { ROMAN_MAX } else { max };
        self
    }
}

/// Returns a random integer within the configured bounds.
///
/// With a multiple `k` above one, the lower bound is raised and the upper
/// bound lowered to the nearest multiples of `k` and one of the multiples in
/// between is drawn uniformly. When no multiple lies inside the range the
/// lowered upper bound is returned.
#[must_use]
pub fn int(generator: &Generator, options: &NumberOptions) -> i64 {
    let (min, max) = ordered(options.int_min, options.int_max);
    let step = options.int_multiple;

    let high = round_down(max, step).unwrap_or(max);
    let Some(low) = round_up(min, step).filter(|low| *low <= high) else {
        return high;
    };
    if low == high {
        return low;
    }

    let stride = step.unsigned_abs();
    let slots = high
        .abs_diff(low)
        .div_euclid(stride)
        .checked_add(1)
        .unwrap_or(u64::MAX);
    let index = generator.source().draw_uniform_int64(slots);
    low.saturating_add_unsigned(index.saturating_mul(stride))
}

/// Returns a random float in `[min, max)` rounded to the configured number of
/// fraction digits, half away from zero.
///
/// Equal bounds return the bound without drawing.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    reason = "scaling a unit draw into a float range"
)]
pub fn float(generator: &Generator, options: &NumberOptions) -> f64 {
    let (min, max) = if options.float_min > options.float_max {
        (options.float_max, options.float_min)
    } else {
        (options.float_min, options.float_max)
    };
    if same_float(min, max) {
        return min;
    }

    let scaled = min + generator.source().draw_uniform_float() * (max - min);
    let factor = 10_f64.powi(options.float_fraction_digits);
    let rounded = (scaled * factor).round() / factor;
    if rounded.is_finite() { rounded } else { scaled }
}

/// Returns a random non-negative integer rendered in base 2.
#[must_use]
pub fn binary(generator: &Generator, options: &NumberOptions) -> String {
    let value = radix_value(generator, options.binary_min, options.binary_max);
    with_prefix(options.binary_prefix, BINARY_PREFIX, format!("{value:b}"))
}

/// Returns a random non-negative integer rendered in base 8.
#[must_use]
pub fn octal(generator: &Generator, options: &NumberOptions) -> String {
    let value = radix_value(generator, options.octal_min, options.octal_max);
    with_prefix(options.octal_prefix, OCTAL_PREFIX, format!("{value:o}"))
}

/// Returns a random non-negative integer rendered in lowercase base 16.
#[must_use]
pub fn hex(generator: &Generator, options: &NumberOptions) -> String {
    let value = radix_value(generator, options.hex_min, options.hex_max);
    with_prefix(options.hex_prefix, HEX_PREFIX, format!("{value:x}"))
}

/// Returns a random roman numeral within the configured bounds.
///
/// Bounds are ordered and then held inside `ROMAN_MIN..=ROMAN_MAX`, so the
/// result is always a valid numeral.
#[must_use]
pub fn roman(generator: &Generator, options: &NumberOptions) -> String {
    let (min, max) = ordered(options.roman_min, options.roman_max);
    let value = draw_between(
        generator,
        min.clamp(ROMAN_MIN, ROMAN_MAX),
        max.clamp(ROMAN_MIN, ROMAN_MAX),
    );
    numeral(value)
}

/// Converts `value` to a roman numeral using subtractive notation.
///
/// # Errors
///
/// Returns [`RomanNumeralError::OutOfRange`] when `value` lies outside
/// `ROMAN_MIN..=ROMAN_MAX`.
///
/// # Example
///
/// ```
/// use sample_data::number::to_roman;
///
/// assert_eq!(to_roman(1994).as_deref(), Ok("MCMXCIV"));
/// assert!(to_roman(4000).is_err());
/// ```
pub fn to_roman(value: i64) -> Result<String, RomanNumeralError> {
    if (ROMAN_MIN..=ROMAN_MAX).contains(&value) {
        Ok(numeral(value))
    } else {
        Err(RomanNumeralError::OutOfRange { value })
    }
}

fn numeral(value: i64) -> String {
    let mut remaining = value;
    let mut out = String::new();
    for (weight, symbol) in NUMERALS {
        while remaining >= weight {
            out.push_str(symbol);
            remaining -= weight;
        }
    }
    out
}

const fn ordered(first: i64, second: i64) -> (i64, i64) {
    if first > second {
        (second, first)
    } else {
        (first, second)
    }
}

fn round_up(value: i64, step: i64) -> Option<i64> {
    match value.rem_euclid(step) {
        0 => Some(value),
        rem => value.checked_add(step - rem),
    }
}

fn round_down(value: i64, step: i64) -> Option<i64> {
    value.checked_sub(value.rem_euclid(step))
}

fn radix_value(generator: &Generator, min: i64, max: i64) -> i64 {
    let (low, high) = ordered(min, max);
    draw_between(generator, low.max(0), high.max(0))
}

fn draw_between(generator: &Generator, low: i64, high: i64) -> i64 {
    if low >= high {
        return low;
    }
    let slots = high.abs_diff(low).checked_add(1).unwrap_or(u64::MAX);
    low.saturating_add_unsigned(generator.source().draw_uniform_int64(slots))
}

fn with_prefix(include: bool, prefix: &str, digits: String) -> String {
    if include {
        format!("{prefix}{digits}")
    } else {
        digits
    }
}

#[expect(
    clippy::float_cmp,
    reason = "equal bounds collapse the range to a single value"
)]
const fn same_float(first: f64, second: f64) -> bool {
    first == second
}
