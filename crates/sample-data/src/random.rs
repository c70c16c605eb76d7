//! Shared, swappable pseudorandom source.
//!
//! Every generator draws through a [`RandomSource`]. A source owns one active
//! ChaCha8 generator behind a reader/writer lock: draws take the shared side,
//! while [`RandomSource::set_source`] and [`RandomSource::reset_source`] take
//! the exclusive side to replace the generator wholesale. A draw that is in
//! flight when a swap is requested finishes against the generator it entered
//! with, and the swap waits for it.
//!
//! The process-wide instance returned by [`global`] backs the free functions
//! in this module, which are the single access point for callers that want
//! to pin or reset the sequence used by [`crate::Generator::global`].
//!
//! # Example
//!
//! ```
//! use sample_data::random::{RandomSource, SeedMaterial};
//!
//! let first = RandomSource::new(SeedMaterial::new(42, 43));
//! let second = RandomSource::new(SeedMaterial::new(42, 43));
//!
//! assert_eq!(first.draw_uniform_int(100), second.draw_uniform_int(100));
//! ```

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, OnceLock, PoisonError, RwLock};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

static RESET_COUNTER: AtomicU64 = AtomicU64::new(0);

static GLOBAL_SOURCE: OnceLock<Arc<RandomSource>> = OnceLock::new();

/// Input used to construct a reproducible generator.
///
/// `seed` keys the ChaCha8 generator and `stream` selects one of its
/// independent output streams, so a pair of values behaves like the two-word
/// seeds common to PCG-style sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SeedMaterial {
    seed: u64,
    stream: u64,
}

impl SeedMaterial {
    /// Creates seed material from a seed and a stream selector.
    #[must_use]
    pub const fn new(seed: u64, stream: u64) -> Self {
        Self { seed, stream }
    }

    /// Derives seed material from the wall clock.
    ///
    /// The stream is taken from a process-wide counter so two calls within
    /// the same clock tick still produce distinct sequences.
    #[must_use]
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_nanos())
            .unwrap_or_default();
        let seed = u64::try_from(nanos.rem_euclid(u128::from(u64::MAX))).unwrap_or(u64::MAX);
        let stream = RESET_COUNTER.fetch_add(1, Ordering::Relaxed);
        Self { seed, stream }
    }

    /// Returns the seed word.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the stream selector.
    #[must_use]
    pub const fn stream(&self) -> u64 {
        self.stream
    }

    fn build(self) -> ChaCha8Rng {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(self.stream);
        rng
    }
}

impl From<u64> for SeedMaterial {
    fn from(seed: u64) -> Self {
        Self::new(seed, 0)
    }
}

impl From<(u64, u64)> for SeedMaterial {
    fn from((seed, stream): (u64, u64)) -> Self {
        Self::new(seed, stream)
    }
}

type SharedRng = Arc<Mutex<ChaCha8Rng>>;

/// A replaceable pseudorandom generator safe to share across threads.
pub struct RandomSource {
    active: RwLock<SharedRng>,
}

impl RandomSource {
    /// Creates a source producing the sequence determined by `seed`.
    #[must_use]
    pub fn new(seed: impl Into<SeedMaterial>) -> Self {
        Self {
            active: RwLock::new(Arc::new(Mutex::new(seed.into().build()))),
        }
    }

    /// Creates a source seeded from the wall clock.
    #[must_use]
    pub fn from_time() -> Self {
        Self::new(SeedMaterial::from_time())
    }

    /// Returns an integer uniformly distributed in `[0, n)`.
    ///
    /// A zero bound yields zero without consuming a draw.
    #[must_use]
    pub fn draw_uniform_int(&self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        self.with_rng(|rng| rng.random_range(0..n))
    }

    /// Returns a 64-bit integer uniformly distributed in `[0, n)`.
    ///
    /// A zero bound yields zero without consuming a draw.
    #[must_use]
    pub fn draw_uniform_int64(&self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        self.with_rng(|rng| rng.random_range(0..n))
    }

    /// Returns a float uniformly distributed in `[0.0, 1.0)`.
    #[must_use]
    pub fn draw_uniform_float(&self) -> f64 {
        self.with_rng(|rng| rng.random::<f64>())
    }

    /// Replaces the active generator with one built from `seed`.
    pub fn set_source(&self, seed: impl Into<SeedMaterial>) {
        let material = seed.into();
        self.swap(material);
        debug!(seed = material.seed, stream = material.stream, "random source replaced");
    }

    /// Replaces the active generator with a freshly time-seeded one.
    pub fn reset_source(&self) {
        self.swap(SeedMaterial::from_time());
        debug!("random source reset to time-derived seed");
    }

    fn swap(&self, material: SeedMaterial) {
        let replacement = Arc::new(Mutex::new(material.build()));
        let mut active = self.active.write().unwrap_or_else(PoisonError::into_inner);
        *active = replacement;
    }

    fn with_rng<T>(&self, draw: impl FnOnce(&mut ChaCha8Rng) -> T) -> T {
        let active = self.active.read().unwrap_or_else(PoisonError::into_inner);
        let mut rng = active.lock().unwrap_or_else(PoisonError::into_inner);
        draw(&mut rng)
    }
}

impl Default for RandomSource {
    fn default() -> Self {
        Self::from_time()
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomSource").finish_non_exhaustive()
    }
}

/// Returns the process-wide source, creating it time-seeded on first use.
#[must_use]
pub fn global() -> &'static Arc<RandomSource> {
    GLOBAL_SOURCE.get_or_init(|| Arc::new(RandomSource::from_time()))
}

/// Draws from the process-wide source; see [`RandomSource::draw_uniform_int`].
#[must_use]
pub fn draw_uniform_int(n: usize) -> usize {
    global().draw_uniform_int(n)
}

/// Draws from the process-wide source; see [`RandomSource::draw_uniform_int64`].
#[must_use]
pub fn draw_uniform_int64(n: u64) -> u64 {
    global().draw_uniform_int64(n)
}

/// Draws from the process-wide source; see [`RandomSource::draw_uniform_float`].
#[must_use]
pub fn draw_uniform_float() -> f64 {
    global().draw_uniform_float()
}

/// Pins the process-wide source to a reproducible sequence.
pub fn set_source(seed: impl Into<SeedMaterial>) {
    global().set_source(seed);
}

/// Returns the process-wide source to time-derived behaviour.
pub fn reset_source() {
    global().reset_source();
}
