//! Permutation flow-shop scheduling with the NEH construction heuristic.
//!
//! Given `n` jobs that all visit the same `m` machines in the same order,
//! find a job sequence that minimizes the makespan — the completion time
//! of the last job on the last machine. The same permutation is applied
//! on every machine (no passing, no preemption).
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Job`, `Instance`, `Schedule`
//! - **`makespan`**: Makespan evaluation for a fixed permutation
//! - **`solver`**: The NEH constructor and schedule KPIs
//! - **`ranking`**: Priority rules (LPT, SPT) and the ranking engine
//! - **`validation`**: Input integrity checks (duplicate IDs, matrix shape)
//! - **`format`**: Text-dataset parsing and result rendering
//! - **`generator`**: Seeded random instance generation
//!
//! # Guarantees
//!
//! The solver is deterministic: the same instance always yields the same
//! sequence, independent of the order jobs were added. It is a greedy
//! construction heuristic, not an exact solver: the result is a strong
//! baseline, not a proven optimum.
//!
//! # References
//!
//! - Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//!   n-job flow-shop sequencing problem", Omega 11(1)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6
//! - Taillard (1993), "Benchmarks for basic scheduling problems"

pub mod error;
pub mod format;
pub mod generator;
pub mod makespan;
pub mod models;
pub mod ranking;
pub mod solver;
pub mod validation;
