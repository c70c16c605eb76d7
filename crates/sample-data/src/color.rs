//! Random colors in RGB, HSL and CMYK spaces, plus localized color names.
//!
//! Alpha channels are drawn in steps of one hundredth. A color whose alpha is
//! exactly `1.0` renders without its alpha component.
//!
//! # Example
//!
//! ```
//! use sample_data::color::RgbaColor;
//!
//! let opaque = RgbaColor { red: 12, green: 34, blue: 56, alpha: 1.0 };
//! let faded = RgbaColor { alpha: 0.5, ..opaque };
//!
//! assert_eq!(opaque.to_string(), "rgb(12, 34, 56)");
//! assert_eq!(faded.to_string(), "rgba(12, 34, 56, 0.50)");
//! ```

use std::fmt;

use serde::Serialize;

use crate::generator::Generator;
use crate::pool::{Domain, FALLBACK_LOCALE, PoolRequest};

const NAMES_DATASET: &str = "names.json";

/// Options for color generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorOptions {
    locale: String,
}

impl Default for ColorOptions {
    fn default() -> Self {
        Self {
            locale: FALLBACK_LOCALE.to_owned(),
        }
    }
}

impl ColorOptions {
    /// Sets the locale used for color names.
    #[must_use]
    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    /// Returns the configured locale.
    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }
}

/// A color in the RGB space with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RgbaColor {
    /// Red channel, 0–255.
    pub red: u8,
    /// Green channel, 0–255.
    pub green: u8,
    /// Blue channel, 0–255.
    pub blue: u8,
    /// Opacity in `[0.0, 1.0]`.
    pub alpha: f64,
}

impl fmt::Display for RgbaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_opaque(self.alpha) {
            write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {:.2})",
                self.red, self.green, self.blue, self.alpha
            )
        }
    }
}

/// A color in the HSL space with an alpha channel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HslaColor {
    /// Hue in degrees, 0–360.
    pub hue: u16,
    /// Saturation percentage, 0–100.
    pub saturation: u8,
    /// Lightness percentage, 0–100.
    pub lightness: u8,
    /// Opacity in `[0.0, 1.0]`.
    pub alpha: f64,
}

impl fmt::Display for HslaColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_opaque(self.alpha) {
            write!(
                f,
                "hsl({}°, {}%, {}%)",
                self.hue, self.saturation, self.lightness
            )
        } else {
            write!(
                f,
                "hsla({}°, {}%, {}%, {:.2})",
                self.hue, self.saturation, self.lightness, self.alpha
            )
        }
    }
}

/// A color in the CMYK space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CmykColor {
    /// Cyan percentage, 0–100.
    pub cyan: u8,
    /// Magenta percentage, 0–100.
    pub magenta: u8,
    /// Yellow percentage, 0–100.
    pub yellow: u8,
    /// Key (black) percentage, 0–100.
    pub key: u8,
}

impl fmt::Display for CmykColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cmyk({}%, {}%, {}%, {}%)",
            self.cyan, self.magenta, self.yellow, self.key
        )
    }
}

/// Returns a random color name in the configured locale.
#[must_use]
pub fn name(generator: &Generator, options: &ColorOptions) -> String {
    let request = PoolRequest::new(Domain::Color, NAMES_DATASET, &["colors"], "name")
        .with_locale(options.locale());
    generator.pick(&request)
}

/// Returns a random opaque RGB color.
#[must_use]
pub fn rgb(generator: &Generator) -> RgbaColor {
    RgbaColor {
        red: channel(generator, 256),
        green: channel(generator, 256),
        blue: channel(generator, 256),
        alpha: 1.0,
    }
}

/// Returns a random RGB color with a random alpha.
#[must_use]
pub fn rgba(generator: &Generator) -> RgbaColor {
    RgbaColor {
        red: channel(generator, 256),
        green: channel(generator, 256),
        blue: channel(generator, 256),
        alpha: alpha(generator),
    }
}

/// Returns a random opaque HSL color.
#[must_use]
pub fn hsl(generator: &Generator) -> HslaColor {
    HslaColor {
        hue: hue(generator),
        saturation: channel(generator, 101),
        lightness: channel(generator, 101),
        alpha: 1.0,
    }
}

/// Returns a random HSL color with a random alpha.
#[must_use]
pub fn hsla(generator: &Generator) -> HslaColor {
    HslaColor {
        hue: hue(generator),
        saturation: channel(generator, 101),
        lightness: channel(generator, 101),
        alpha: alpha(generator),
    }
}

/// Returns a random CMYK color.
#[must_use]
pub fn cmyk(generator: &Generator) -> CmykColor {
    CmykColor {
        cyan: channel(generator, 101),
        magenta: channel(generator, 101),
        yellow: channel(generator, 101),
        key: channel(generator, 101),
    }
}

fn channel(generator: &Generator, bound: usize) -> u8 {
    u8::try_from(generator.source().draw_uniform_int(bound)).unwrap_or(u8::MAX)
}

fn hue(generator: &Generator) -> u16 {
    u16::try_from(generator.source().draw_uniform_int(361)).unwrap_or(360)
}

#[expect(
    clippy::float_arithmetic,
    reason = "alpha is a whole percentage scaled into the unit interval"
)]
fn alpha(generator: &Generator) -> f64 {
    f64::from(channel(generator, 101)) / 100.0
}

#[expect(
    clippy::float_cmp,
    reason = "only the exact literal 1.0 denotes full opacity"
)]
const fn is_opaque(alpha: f64) -> bool {
    alpha == 1.0
}
