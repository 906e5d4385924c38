//! Deterministic run-level RNG wrapper.
//!
//! Obstacle placement and movement draw all their randomness from one
//! `RunRng` seeded by `PlannerConfig::seed`, so a run is reproducible bit for
//! bit under a fixed seed.  The planner owns the generator and threads it
//! explicitly into every sampling call; nothing in the workspace touches a
//! global or thread-local random source.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG for one planning run.
pub struct RunRng(SmallRng);

impl RunRng {
    pub fn new(seed: u64) -> Self {
        RunRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// Choose a random element from a slice.
    /// Returns `None` if the slice is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}
