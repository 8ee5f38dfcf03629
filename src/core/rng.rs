//! Deterministic random number generation for evaluators.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical sequence
//! - **Keyed streams**: `keyed` derives an independent stream from a seed
//!   and a key (e.g. a position hash), so a randomized evaluator scores the
//!   same position the same way on every visit
//!
//! ```
//! use npmm::core::GameRng;
//!
//! let mut a = GameRng::keyed(42, 7);
//! let mut b = GameRng::keyed(42, 7);
//! assert_eq!(a.gen_unit(), b.gen_unit());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Golden-ratio multiplier used to spread keys across seeds.
const KEY_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Deterministic RNG backed by ChaCha8.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create the stream for `key` under `seed`.
    ///
    /// Different keys give different sequences; the same `(seed, key)`
    /// pair always gives the same sequence.
    #[must_use]
    pub fn keyed(seed: u64, key: u64) -> Self {
        Self::new(seed ^ key.wrapping_mul(KEY_MIX).rotate_left(17))
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform float in `[0, 1)`.
    pub fn gen_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Split the unit interval into `parts` random non-negative shares
    /// that sum to 1.
    ///
    /// Draws `parts - 1` cut points, sorts them, and returns the gaps.
    pub fn simplex(&mut self, parts: usize) -> Vec<f64> {
        if parts == 0 {
            return Vec::new();
        }

        let mut cuts: Vec<f64> = Vec::with_capacity(parts + 1);
        cuts.push(0.0);
        cuts.extend((1..parts).map(|_| self.gen_unit()));
        cuts.push(1.0);
        cuts.sort_unstable_by(f64::total_cmp);

        cuts.windows(2).map(|w| w[1] - w[0]).collect()
    }
}
