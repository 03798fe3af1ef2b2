//! NEH construction and schedule KPIs.
//!
//! # Algorithm
//!
//! `NehSolver` implements the Nawaz–Enscore–Ham construction heuristic:
//! rank jobs by descending total processing time, then grow the schedule
//! by inserting each job at its makespan-minimizing position. It is a
//! strong deterministic baseline, not an exact solver.
//!
//! # KPI
//!
//! `ScheduleKpi` computes quality metrics from a finished permutation:
//! makespan, flow time, per-machine idle time, and utilization.
//!
//! # References
//!
//! - Nawaz, Enscore & Ham (1983), "A heuristic algorithm for the m-machine,
//!   n-job flow-shop sequencing problem", Omega 11(1)
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 6

mod kpi;
mod neh;

pub use kpi::ScheduleKpi;
pub use neh::{NehResult, NehSolver};
