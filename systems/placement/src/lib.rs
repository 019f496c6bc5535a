#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic target placement system driven by a seeded RNG.

use autosnake_core::CellCoord;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Configuration parameters required to construct the placement system.
#[derive(Clone, Copy, Debug)]
pub struct Config {
    rng_seed: u64,
}

impl Config {
    /// Creates a new configuration using the provided seed.
    #[must_use]
    pub const fn new(rng_seed: u64) -> Self {
        Self { rng_seed }
    }
}

/// Samples uniformly random unoccupied cells for target relocation.
#[derive(Clone, Debug)]
pub struct Placement {
    rng: ChaCha8Rng,
}

impl Placement {
    /// Creates a new placement system using the supplied configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(config.rng_seed),
        }
    }

    /// Picks an in-bounds cell for which `is_occupied` returns false.
    ///
    /// Sampling is bounded by `width * height` attempts so the call
    /// terminates even on a nearly full board; if the cap is exhausted the
    /// last sampled cell is returned regardless of occupancy. That is a
    /// documented degradation rather than a failure.
    ///
    /// # Panics
    ///
    /// Panics when either dimension is not positive.
    pub fn place<F>(&mut self, width: i32, height: i32, mut is_occupied: F) -> CellCoord
    where
        F: FnMut(CellCoord) -> bool,
    {
        assert!(
            width >= 1 && height >= 1,
            "grid dimensions must be positive, got {width}x{height}"
        );

        let attempt_cap = u64::from(width.unsigned_abs()) * u64::from(height.unsigned_abs());
        let mut attempts = 0;
        loop {
            let cell = CellCoord::new(
                self.rng.gen_range(0..width),
                self.rng.gen_range(0..height),
            );
            attempts += 1;
            if !is_occupied(cell) || attempts >= attempt_cap {
                return cell;
            }
        }
    }
}
