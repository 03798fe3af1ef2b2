//! Solver error types.
//!
//! Both variants are precondition violations: they are detected before any
//! computation proceeds and are not recoverable within the core. There are
//! no transient failure modes: the algorithms are pure and deterministic,
//! so no retry or partial-result logic exists.

use std::fmt;

/// Errors surfaced by the makespan evaluator and the NEH solver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The instance contains no jobs.
    EmptyInstance,
    /// A job's duration count does not match the instance's machine count.
    InvalidJobData {
        /// Offending job.
        job_id: u32,
        /// Machine count of the instance.
        expected: usize,
        /// Duration count the job actually carries.
        actual: usize,
    },
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::EmptyInstance => write!(f, "instance contains no jobs"),
            SolveError::InvalidJobData {
                job_id,
                expected,
                actual,
            } => write!(
                f,
                "job {job_id} has {actual} durations, expected {expected} (one per machine)"
            ),
        }
    }
}

impl std::error::Error for SolveError {}
