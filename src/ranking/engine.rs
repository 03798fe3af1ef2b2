//! Rule engine for deterministic job ordering.
//!
//! Composes ranking rules in sequence: the next rule is consulted only
//! when all earlier rules tie. After the chain is exhausted, ascending
//! job id always breaks the remaining ties, so an engine's ordering is a
//! total order independent of the input arrangement.

use std::sync::Arc;

use super::{RankingRule, RuleScore};
use crate::models::Job;

/// A composable rule engine for job ordering.
///
/// # Example
/// ```
/// use u_flowshop::ranking::{RankingEngine, rules};
///
/// let engine = RankingEngine::new()
///     .with_rule(rules::Lpt)
///     .with_tie_breaker(rules::Spt);
/// ```
#[derive(Clone, Default)]
pub struct RankingEngine {
    rules: Vec<Arc<dyn RankingRule>>,
}

impl RankingEngine {
    /// Creates an empty engine (orders by job id only).
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Adds a primary rule.
    pub fn with_rule<R: RankingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted only when earlier rules tie.
    ///
    /// Alias of [`with_rule`](Self::with_rule); named for call-site clarity.
    pub fn with_tie_breaker<R: RankingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sorts jobs into ranked order.
    ///
    /// Returns indices into the original slice. Ties left by the rule
    /// chain fall back to ascending job id, so the result depends only on
    /// job contents, never on input arrangement.
    pub fn sort_indices(&self, jobs: &[Job]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..jobs.len()).collect();
        indices.sort_by(|&a, &b| self.compare(&jobs[a], &jobs[b]));
        indices
    }

    /// Scores a single job under each rule in chain order.
    pub fn evaluate(&self, job: &Job) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.score(job)).collect()
    }

    fn compare(&self, a: &Job, b: &Job) -> std::cmp::Ordering {
        for rule in &self.rules {
            let ord = rule.score(a).cmp(&rule.score(b));
            if ord != std::cmp::Ordering::Equal {
                return ord;
            }
        }
        a.id.cmp(&b.id)
    }
}

impl std::fmt::Debug for RankingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RankingEngine")
            .field(
                "rules",
                &self.rules.iter().map(|r| r.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ranking::rules;

    #[test]
    fn test_lpt_ordering() {
        let jobs = vec![
            Job::new(1, vec![1, 1]),
            Job::new(2, vec![5, 5]),
            Job::new(3, vec![3, 3]),
        ];
        let engine = RankingEngine::new().with_rule(rules::Lpt);
        assert_eq!(engine.sort_indices(&jobs), vec![1, 2, 0]);
    }

    #[test]
    fn test_ties_fall_back_to_id() {
        // Equal totals: id order must decide, regardless of input order.
        let jobs = vec![Job::new(2, vec![4, 4]), Job::new(1, vec![5, 3])];
        let engine = RankingEngine::new().with_rule(rules::Lpt);
        let order = engine.sort_indices(&jobs);
        assert_eq!(jobs[order[0]].id, 1);
        assert_eq!(jobs[order[1]].id, 2);
    }

    #[test]
    fn test_ordering_is_input_order_independent() {
        let a = vec![
            Job::new(1, vec![2, 2]),
            Job::new(2, vec![5, 5]),
            Job::new(3, vec![2, 2]),
        ];
        let mut b = a.clone();
        b.reverse();

        let engine = RankingEngine::new().with_rule(rules::Lpt);
        let ids_a: Vec<u32> = engine.sort_indices(&a).iter().map(|&i| a[i].id).collect();
        let ids_b: Vec<u32> = engine.sort_indices(&b).iter().map(|&i| b[i].id).collect();
        assert_eq!(ids_a, ids_b);
        assert_eq!(ids_a, vec![2, 1, 3]);
    }

    #[test]
    fn test_empty_engine_orders_by_id() {
        let jobs = vec![Job::new(3, vec![1]), Job::new(1, vec![9]), Job::new(2, vec![5])];
        let engine = RankingEngine::new();
        let ids: Vec<u32> = engine
            .sort_indices(&jobs)
            .iter()
            .map(|&i| jobs[i].id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_tie_breaker_chain() {
        // Same totals under LPT; SPT also ties; id decides.
        let jobs = vec![Job::new(2, vec![3, 3]), Job::new(1, vec![3, 3])];
        let engine = RankingEngine::new()
            .with_rule(rules::Lpt)
            .with_tie_breaker(rules::Spt);
        let order = engine.sort_indices(&jobs);
        assert_eq!(jobs[order[0]].id, 1);
    }

    #[test]
    fn test_evaluate_scores() {
        let job = Job::new(1, vec![2, 3]);
        let engine = RankingEngine::new()
            .with_rule(rules::Lpt)
            .with_rule(rules::Spt);
        assert_eq!(engine.evaluate(&job), vec![-5, 5]);
    }

    #[test]
    fn test_empty_jobs() {
        let engine = RankingEngine::new().with_rule(rules::Lpt);
        assert!(engine.sort_indices(&[]).is_empty());
    }
}
