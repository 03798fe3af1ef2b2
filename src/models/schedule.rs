//! Schedule (solution) model.
//!
//! A schedule is an ordered job sequence: the order in which jobs are
//! released onto machine 1 and, by the no-passing convention, processed
//! on every subsequent machine. Its makespan is always re-derived by the
//! evaluator, never cached across mutations.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

use serde::{Deserialize, Serialize};

use super::Job;

/// An ordered job sequence (a permutation schedule).
///
/// During construction a schedule holds only the jobs inserted so far;
/// a finished schedule holds every job of the instance exactly once.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Jobs in processing order.
    pub jobs: Vec<Job>,
}

impl Schedule {
    /// Creates an empty schedule.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a schedule from an ordered job sequence.
    pub fn from_jobs(jobs: Vec<Job>) -> Self {
        Self { jobs }
    }

    /// Appends a job at the end of the sequence.
    pub fn push(&mut self, job: Job) {
        self.jobs.push(job);
    }

    /// Inserts a job at the given position (0 = before the first job).
    pub fn insert(&mut self, position: usize, job: Job) {
        self.jobs.insert(position, job);
    }

    /// Number of jobs in the sequence.
    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    /// Whether the sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }

    /// Job identifiers in processing order.
    pub fn job_ids(&self) -> Vec<u32> {
        self.jobs.iter().map(|j| j.id).collect()
    }

    /// Iterates over jobs in processing order.
    pub fn iter(&self) -> std::slice::Iter<'_, Job> {
        self.jobs.iter()
    }
}
