//! Job model.
//!
//! A job is the unit of sequencing in a permutation flow shop: it visits
//! every machine in the same fixed order and carries one processing
//! duration per machine.
//!
//! # Reference
//! Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

use serde::{Deserialize, Serialize};

/// A job to be sequenced.
///
/// Immutable once constructed: solvers reorder job values, they never
/// touch a job's durations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    /// Unique job identifier (1-based, assigned by input order).
    pub id: u32,
    /// Processing duration on each machine, in machine-visitation order.
    pub processing_times: Vec<u64>,
}

impl Job {
    /// Creates a new job.
    pub fn new(id: u32, processing_times: Vec<u64>) -> Self {
        Self {
            id,
            processing_times,
        }
    }

    /// Total processing time across all machines.
    ///
    /// This is the NEH ranking key: jobs are seeded into the schedule in
    /// descending order of total time.
    pub fn total_time(&self) -> u64 {
        self.processing_times.iter().sum()
    }

    /// Processing duration on the given machine (0-indexed).
    pub fn time_on(&self, machine: usize) -> Option<u64> {
        self.processing_times.get(machine).copied()
    }

    /// Number of machines this job carries durations for.
    pub fn machine_count(&self) -> usize {
        self.processing_times.len()
    }
}
