//! Random instance generation.
//!
//! Seeded uniform instances for benchmarks and tests, in the style of the
//! Taillard benchmark sets (durations drawn independently per operation).
//! Generation is deterministic for a fixed seed, so generated instances
//! can serve as reproducible fixtures.
//!
//! # Reference
//! Taillard (1993), "Benchmarks for basic scheduling problems"

use std::ops::RangeInclusive;

use rand::Rng;

use crate::models::{Instance, Job};

/// Generates an instance with uniform random durations.
///
/// Job ids are assigned 1-based in generation order; every job gets one
/// duration per machine drawn from `durations`.
pub fn generate_instance<R: Rng>(
    jobs: usize,
    machines: usize,
    durations: RangeInclusive<u64>,
    rng: &mut R,
) -> Instance {
    let mut instance = Instance::new(machines);
    for id in 1..=jobs {
        let times = (0..machines)
            .map(|_| rng.random_range(durations.clone()))
            .collect();
        instance = instance.with_job(Job::new(id as u32, times));
    }
    instance
}
