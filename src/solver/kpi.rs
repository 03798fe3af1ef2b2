//! Schedule quality metrics (KPIs).
//!
//! Computes standard flow-shop performance indicators from a finished
//! permutation. All values derive from the same completion-time
//! recurrence the evaluator uses; nothing is cached on the schedule.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan (C_max) | Completion of the last job on the last machine |
//! | Total Flow Time | Sum of per-job completions on the last machine |
//! | Avg Flow Time | Mean of those completions |
//! | Idle by Machine | makespan − busy time, per machine |
//! | Avg Utilization | Mean of busy / makespan across machines |
//!
//! # Reference
//! Pinedo (2016), "Scheduling", Ch. 1.2: Performance Measures

use crate::error::SolveError;
use crate::makespan;
use crate::models::Schedule;

/// Flow-shop schedule performance indicators.
#[derive(Debug, Clone)]
pub struct ScheduleKpi {
    /// Makespan: completion of the last job on the last machine.
    pub makespan: u64,
    /// Sum of per-job completion times on the last machine. All jobs are
    /// released at t=0, so completion equals flow time.
    pub total_flow_time: u64,
    /// Mean per-job flow time.
    pub avg_flow_time: f64,
    /// Idle time per machine: makespan − busy time. Trailing idle (after
    /// the machine's last operation) counts.
    pub idle_by_machine: Vec<u64>,
    /// Mean of busy / makespan across machines (0.0 for empty schedules).
    pub avg_utilization: f64,
}

impl ScheduleKpi {
    /// Computes KPIs for a schedule on `machines` machines.
    ///
    /// Propagates [`SolveError::InvalidJobData`] from the evaluator when a
    /// job's duration count differs from `machines`.
    pub fn calculate(schedule: &Schedule, machines: usize) -> Result<Self, SolveError> {
        let finishes = makespan::job_completion_times(&schedule.jobs, machines)?;
        let makespan = finishes.last().copied().unwrap_or(0);

        let total_flow_time: u64 = finishes.iter().sum();
        let avg_flow_time = if finishes.is_empty() {
            0.0
        } else {
            total_flow_time as f64 / finishes.len() as f64
        };

        let mut busy = vec![0u64; machines];
        for job in schedule.iter() {
            for (j, &t) in job.processing_times.iter().enumerate() {
                busy[j] += t;
            }
        }

        let idle_by_machine: Vec<u64> = busy.iter().map(|&b| makespan - b).collect();
        let avg_utilization = if makespan == 0 || machines == 0 {
            0.0
        } else {
            let sum: f64 = busy.iter().map(|&b| b as f64 / makespan as f64).sum();
            sum / machines as f64
        };

        Ok(Self {
            makespan,
            total_flow_time,
            avg_flow_time,
            idle_by_machine,
            avg_utilization,
        })
    }
}
