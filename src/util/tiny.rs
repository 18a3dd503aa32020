use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoroshiro64StarStar;

/// A cheap deterministic rng for reproducible tests.
pub fn consistent_rng() -> impl Rng {
    seeded_rng(0)
}

pub fn seeded_rng(seed: u64) -> impl Rng {
    Xoroshiro64StarStar::seed_from_u64(seed)
}
