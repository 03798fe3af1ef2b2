//! Problem instance model.
//!
//! An instance fixes the machine count and the job set. Job identifiers
//! are 1-based and assigned in input order when the instance is built
//! from a duration matrix.

use serde::{Deserialize, Serialize};

use super::Job;

/// A permutation flow-shop problem instance.
///
/// `machines` is fixed per instance; every well-formed job carries exactly
/// that many durations. Shape violations are surfaced by the solver
/// (`SolveError::InvalidJobData`) or reported in bulk by
/// [`crate::validation::validate_instance`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instance {
    /// Number of machines every job visits, in the same order.
    pub machines: usize,
    /// Jobs to sequence.
    pub jobs: Vec<Job>,
}

impl Instance {
    /// Creates an empty instance with the given machine count.
    pub fn new(machines: usize) -> Self {
        Self {
            machines,
            jobs: Vec::new(),
        }
    }

    /// Builds an instance from a row-major duration matrix.
    ///
    /// Row `i` becomes job `i + 1` (1-based ids, input order preserved).
    pub fn from_matrix(machines: usize, rows: Vec<Vec<u64>>) -> Self {
        let jobs = rows
            .into_iter()
            .enumerate()
            .map(|(i, times)| Job::new(i as u32 + 1, times))
            .collect();
        Self { machines, jobs }
    }

    /// Adds a job.
    pub fn with_job(mut self, job: Job) -> Self {
        self.jobs.push(job);
        self
    }

    /// Number of jobs.
    pub fn job_count(&self) -> usize {
        self.jobs.len()
    }

    /// Number of machines.
    pub fn machine_count(&self) -> usize {
        self.machines
    }

    /// Whether the instance has no jobs.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
