//! Reproducible synthetic data for tests, demos and seed fixtures.
//!
//! Generators produce colors, dates, numbers and person attributes. Numeric
//! values come from closed ranges; strings come from locale-keyed pools
//! loaded from JSON datasets and cached for the life of the process.
//!
//! # Overview
//!
//! - [`random`] owns the swappable ChaCha8 source every generator draws from.
//! - [`pool`] resolves locale datasets with a load-once cache and built-in
//!   fallback values, so a missing or broken dataset never surfaces an error.
//! - [`color`], [`date`], [`number`] and [`person`] hold the generators. Each
//!   takes a [`Generator`] and an options struct built with `with_*` setters.
//! - [`SampleDataSettings`] loads a seed, locale and dataset directory from
//!   the environment for [`Generator::from_settings`].
//!
//! # Example
//!
//! ```
//! use sample_data::{Generator, number, person};
//!
//! let generator = Generator::seeded(7);
//! let replay = Generator::seeded(7);
//!
//! let options = person::PersonOptions::default().with_gender(person::Gender::Female);
//! assert_eq!(
//!     person::full_name(&generator, &options),
//!     person::full_name(&replay, &options),
//! );
//!
//! let roman = number::roman(&generator, &number::NumberOptions::default());
//! assert!(!roman.is_empty());
//! ```

pub mod color;
pub mod date;
mod error;
mod generator;
pub mod number;
pub mod person;
pub mod pool;
pub mod random;
mod settings;

pub use error::{DatasetError, RomanNumeralError};
pub use generator::Generator;
pub use settings::SampleDataSettings;
