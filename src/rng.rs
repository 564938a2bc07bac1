//! Deterministic seeded RNG: the same seed, tileset, and parameters always
//! reproduce identical output.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Build the deterministic RNG for a single solve.
pub fn seeded(seed: u32) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(u64::from(seed))
}

/// The effective seed for run `run_index` of a multi-run batch: `seed + run_index`.
pub fn seed_for_run(base_seed: u32, run_index: u32) -> u32 {
    base_seed.wrapping_add(run_index)
}
