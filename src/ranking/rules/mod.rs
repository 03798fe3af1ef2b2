//! Built-in ranking rules.
//!
//! # Score Convention
//! All rules return lower scores for jobs that rank earlier.
//!
//! # References
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4
//! - Nawaz, Enscore & Ham (1983), Omega 11(1): LPT ranking as the NEH seed order

use super::{RankingRule, RuleScore};
use crate::models::Job;

/// Longest Processing Time.
///
/// Ranks jobs with larger total processing time first. This is the NEH
/// seed order: placing long jobs early gives the insertion phase the most
/// freedom to hide short jobs in gaps.
#[derive(Debug, Clone, Copy)]
pub struct Lpt;

impl RankingRule for Lpt {
    fn name(&self) -> &'static str {
        "LPT"
    }

    fn score(&self, job: &Job) -> RuleScore {
        -(job.total_time() as RuleScore)
    }

    fn description(&self) -> &'static str {
        "Longest Processing Time"
    }
}

/// Shortest Processing Time.
///
/// Ranks jobs with smaller total processing time first. Classic flow-time
/// minimizer; offered as an alternative seed order for experimentation.
///
/// # Reference
/// Smith (1956), optimal for mean flow time on a single machine.
#[derive(Debug, Clone, Copy)]
pub struct Spt;

impl RankingRule for Spt {
    fn name(&self) -> &'static str {
        "SPT"
    }

    fn score(&self, job: &Job) -> RuleScore {
        job.total_time() as RuleScore
    }

    fn description(&self) -> &'static str {
        "Shortest Processing Time"
    }
}

/// Ascending job identifier.
///
/// The deterministic fallback: input order as assigned by 1-based ids.
#[derive(Debug, Clone, Copy)]
pub struct ById;

impl RankingRule for ById {
    fn name(&self) -> &'static str {
        "BY_ID"
    }

    fn score(&self, job: &Job) -> RuleScore {
        job.id as RuleScore
    }

    fn description(&self) -> &'static str {
        "Ascending Job Identifier"
    }
}
