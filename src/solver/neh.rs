//! NEH construction heuristic.
//!
//! # Algorithm
//!
//! 1. Rank jobs by descending total processing time (LPT), ties by
//!    ascending job id.
//! 2. Seed the schedule with the first ranked job.
//! 3. For each remaining job in ranked order, evaluate every insertion
//!    position (before the first job through after the last) and keep the
//!    first position that achieves the smallest makespan.
//!
//! Each candidate is evaluated from scratch by the makespan recurrence;
//! ties between positions resolve toward the lowest index, never by
//! comparing job ids.
//!
//! # Complexity
//! O(n) insertion rounds × O(n) positions × O(n·m) evaluation = O(n³·m).
//! Fine for tens to low hundreds of jobs.
//!
//! # Reference
//! Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//! n-job flow-shop sequencing problem", Omega 11(1)

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::makespan;
use crate::models::{Instance, Job, Schedule};
use crate::ranking::{rules, RankingEngine};

/// A solved instance: the constructed sequence and its makespan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NehResult {
    /// The constructed job sequence.
    pub schedule: Schedule,
    /// Makespan of that sequence, re-derived by the evaluator.
    pub makespan: u64,
}

impl NehResult {
    /// Job identifiers in processing order.
    pub fn job_ids(&self) -> Vec<u32> {
        self.schedule.job_ids()
    }
}

impl fmt::Display for NehResult {
    /// Renders `Cmax = <makespan>` followed by the id sequence.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cmax = {}", self.makespan)?;
        let ids: Vec<String> = self.job_ids().iter().map(|id| id.to_string()).collect();
        write!(f, "{}", ids.join(" "))
    }
}

/// The NEH constructor.
///
/// Deterministic: the same instance always yields the same sequence,
/// independent of the order jobs were supplied. Solvers carry no mutable
/// state, so one solver may be reused across instances and threads.
///
/// # Example
/// ```
/// use u_flowshop::models::Instance;
/// use u_flowshop::solver::NehSolver;
///
/// let instance = Instance::from_matrix(2, vec![vec![5, 3], vec![2, 6]]);
/// let result = NehSolver::new().solve(&instance).unwrap();
/// assert_eq!(result.job_ids(), vec![2, 1]);
/// assert_eq!(result.makespan, 11);
/// ```
#[derive(Debug, Clone)]
pub struct NehSolver {
    ranking: RankingEngine,
}

impl NehSolver {
    /// Creates a solver with the standard NEH ranking (LPT, ties by id).
    pub fn new() -> Self {
        Self {
            ranking: RankingEngine::new().with_rule(rules::Lpt),
        }
    }

    /// Replaces the ranking engine.
    ///
    /// The insertion phase is unchanged; only the order in which jobs are
    /// offered to it varies. The engine's by-id fallback keeps any
    /// configuration deterministic.
    pub fn with_ranking(mut self, ranking: RankingEngine) -> Self {
        self.ranking = ranking;
        self
    }

    /// Builds a schedule for the instance.
    ///
    /// Fails with [`SolveError::EmptyInstance`] when the instance has no
    /// jobs and with [`SolveError::InvalidJobData`] when any job's duration
    /// count differs from the instance's machine count. Both are checked
    /// before construction starts; no partial schedule is ever returned.
    pub fn solve(&self, instance: &Instance) -> Result<NehResult, SolveError> {
        if instance.is_empty() {
            return Err(SolveError::EmptyInstance);
        }
        let machines = instance.machines;
        for job in &instance.jobs {
            if job.machine_count() != machines {
                return Err(SolveError::InvalidJobData {
                    job_id: job.id,
                    expected: machines,
                    actual: job.machine_count(),
                });
            }
        }

        let order = self.ranking.sort_indices(&instance.jobs);

        let mut working: Vec<Job> = Vec::with_capacity(instance.job_count());
        working.push(instance.jobs[order[0]].clone());

        for &idx in &order[1..] {
            let job = &instance.jobs[idx];
            let mut best_position = 0;
            let mut best_makespan = u64::MAX;

            // One working buffer per round: insert, evaluate, revert.
            for position in 0..=working.len() {
                working.insert(position, job.clone());
                let candidate = makespan::evaluate(&working, machines)?;
                working.remove(position);

                // Strict improvement only: the first position reaching a
                // given makespan is the one kept.
                if candidate < best_makespan {
                    best_makespan = candidate;
                    best_position = position;
                }
            }

            working.insert(best_position, job.clone());
        }

        let final_makespan = makespan::evaluate(&working, machines)?;
        Ok(NehResult {
            schedule: Schedule::from_jobs(working),
            makespan: final_makespan,
        })
    }
}

impl Default for NehSolver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_job() {
        let instance = Instance::from_matrix(3, vec![vec![4, 5, 6]]);
        let result = NehSolver::new().solve(&instance).unwrap();
        assert_eq!(result.job_ids(), vec![1]);
        assert_eq!(result.makespan, 15);
    }

    #[test]
    fn test_two_jobs_two_machines() {
        // Ranked: job 1 (total 8) seeds. Inserting job 2 at position 0
        // gives makespan 11, at position 1 gives 14 → [2, 1].
        let instance = Instance::from_matrix(2, vec![vec![5, 3], vec![2, 6]]);
        let result = NehSolver::new().solve(&instance).unwrap();
        assert_eq!(result.job_ids(), vec![2, 1]);
        assert_eq!(result.makespan, 11);
    }

    #[test]
    fn test_empty_instance() {
        let instance = Instance::new(3);
        assert_eq!(
            NehSolver::new().solve(&instance).unwrap_err(),
            SolveError::EmptyInstance
        );
    }

    #[test]
    fn test_malformed_job_rejected_before_solving() {
        let instance = Instance::new(3)
            .with_job(Job::new(1, vec![1, 2, 3]))
            .with_job(Job::new(2, vec![1, 2]));
        assert_eq!(
            NehSolver::new().solve(&instance).unwrap_err(),
            SolveError::InvalidJobData {
                job_id: 2,
                expected: 3,
                actual: 2
            }
        );
    }

    #[test]
    fn test_determinism() {
        let instance = Instance::from_matrix(
            3,
            vec![
                vec![3, 7, 2],
                vec![5, 1, 8],
                vec![6, 6, 1],
                vec![2, 2, 9],
            ],
        );
        let solver = NehSolver::new();
        let a = solver.solve(&instance).unwrap();
        let b = solver.solve(&instance).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_input_order_independence() {
        let rows = vec![vec![3, 7, 2], vec![5, 1, 8], vec![6, 6, 1]];
        let forward = Instance::from_matrix(3, rows.clone());

        // Same jobs (same ids), supplied in reverse.
        let mut reversed = Instance::new(3);
        for (i, times) in rows.iter().enumerate().rev() {
            reversed = reversed.with_job(Job::new(i as u32 + 1, times.clone()));
        }

        let solver = NehSolver::new();
        assert_eq!(
            solver.solve(&forward).unwrap().job_ids(),
            solver.solve(&reversed).unwrap().job_ids()
        );
    }

    #[test]
    fn test_seed_is_largest_total_time() {
        // The construction seeds with the largest-total job, ties by
        // smallest id. (Later insertions may still push other jobs in
        // front of it, as in the two-job scenario above.)
        let jobs = vec![
            Job::new(1, vec![1, 1]),
            Job::new(2, vec![9, 9]),
            Job::new(3, vec![4, 4]),
            Job::new(4, vec![9, 9]),
        ];
        let ranking = RankingEngine::new().with_rule(rules::Lpt);
        let order = ranking.sort_indices(&jobs);
        assert_eq!(jobs[order[0]].id, 2);
        assert_eq!(jobs[order[0]].total_time(), 18);
    }

    #[test]
    fn test_improves_on_input_order() {
        let instance = Instance::from_matrix(
            3,
            vec![
                vec![3, 7, 2],
                vec![5, 1, 8],
                vec![6, 6, 1],
                vec![2, 2, 9],
                vec![4, 4, 4],
            ],
        );
        let result = NehSolver::new().solve(&instance).unwrap();
        let input_order = makespan::evaluate(&instance.jobs, 3).unwrap();
        assert!(result.makespan <= input_order);
    }

    #[test]
    fn test_result_contains_every_job_once() {
        let instance = Instance::from_matrix(
            2,
            vec![vec![1, 2], vec![2, 1], vec![3, 3], vec![1, 1]],
        );
        let result = NehSolver::new().solve(&instance).unwrap();
        let mut ids = result.job_ids();
        ids.sort_unstable();
        assert_eq!(ids, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_display_report_shape() {
        let instance = Instance::from_matrix(2, vec![vec![5, 3], vec![2, 6]]);
        let result = NehSolver::new().solve(&instance).unwrap();
        assert_eq!(result.to_string(), "Cmax = 11\n2 1");
    }

    #[test]
    fn test_alternate_ranking_stays_deterministic() {
        let instance = Instance::from_matrix(2, vec![vec![5, 3], vec![2, 6], vec![4, 4]]);
        let solver =
            NehSolver::new().with_ranking(RankingEngine::new().with_rule(rules::Spt));
        let a = solver.solve(&instance).unwrap();
        let b = solver.solve(&instance).unwrap();
        assert_eq!(a, b);
    }
}
