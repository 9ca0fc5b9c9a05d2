//! Rule engine for multi-criteria ordering.
//!
//! Applies rules in sequence, consulting the next rule only on ties, and
//! falls back to a final tie-breaking policy when every rule ties.

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// How ties are broken after all rules are exhausted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreaker {
    /// Keep input order (stable sort).
    #[default]
    Stable,
    /// Ascending job id, regardless of input order.
    ByJob,
}

/// A composable rule engine for process ordering.
///
/// # Example
/// ```
/// use cpu_schedule::dispatching::{rules, RuleEngine, TieBreaker};
///
/// let engine = RuleEngine::new()
///     .with_rule(rules::ArrivalOrder)
///     .with_final_tie_breaker(TieBreaker::ByJob);
/// assert_eq!(engine.rule_names(), vec!["FCFS"]);
/// ```
#[derive(Clone)]
pub struct RuleEngine {
    rules: Vec<Arc<dyn DispatchingRule>>,
    tie_breaker: TieBreaker,
    epsilon: f64,
}

impl RuleEngine {
    /// Creates an empty rule engine.
    ///
    /// With no rules every pair ties and the final tie-breaker decides.
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            tie_breaker: TieBreaker::Stable,
            epsilon: 0.0,
        }
    }

    /// Adds the primary rule.
    pub fn with_rule<R: DispatchingRule + 'static>(mut self, rule: R) -> Self {
        self.rules.push(Arc::new(rule));
        self
    }

    /// Adds a tie-breaking rule, consulted when all earlier rules tie.
    pub fn with_tie_breaker<R: DispatchingRule + 'static>(self, rule: R) -> Self {
        self.with_rule(rule)
    }

    /// Sets the final tie-breaking policy.
    pub fn with_final_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Sets the width of the score buckets that count as ties.
    ///
    /// Scores are compared by `floor(score / epsilon)`, so two scores tie
    /// when they fall in the same bucket. Ties stay transitive, which the
    /// sort requires. Defaults to `0.0`: only exactly equal scores tie.
    /// Non-positive or non-finite values mean exact comparison.
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    /// Returns indices into `processes`, highest priority first.
    pub fn sort_indices(&self, processes: &[Process]) -> Vec<usize> {
        let mut indices: Vec<usize> = (0..processes.len()).collect();
        // `sort_by` is stable: full ties keep input order.
        indices.sort_by(|&a, &b| self.compare(&processes[a], &processes[b]));
        indices
    }

    /// Returns a reordered copy of `processes`, highest priority first.
    pub fn sort(&self, processes: &[Process]) -> Vec<Process> {
        self.sort_indices(processes)
            .into_iter()
            .map(|i| processes[i])
            .collect()
    }

    /// Evaluates a single process and returns scores from each rule.
    pub fn evaluate(&self, process: &Process) -> Vec<RuleScore> {
        self.rules.iter().map(|r| r.evaluate(process)).collect()
    }

    /// Names of the configured rules, in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Final tie-breaking policy.
    pub fn tie_breaker(&self) -> TieBreaker {
        self.tie_breaker
    }

    fn compare(&self, a: &Process, b: &Process) -> Ordering {
        for rule in &self.rules {
            let score_a = self.bucket(rule.evaluate(a));
            let score_b = self.bucket(rule.evaluate(b));

            match score_a.partial_cmp(&score_b).unwrap_or(Ordering::Equal) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }

        match self.tie_breaker {
            TieBreaker::Stable => Ordering::Equal,
            TieBreaker::ByJob => a.job.cmp(&b.job),
        }
    }

    fn bucket(&self, score: RuleScore) -> RuleScore {
        if self.epsilon > 0.0 && self.epsilon.is_finite() {
            (score / self.epsilon).floor()
        } else {
            score
        }
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for RuleEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleEngine")
            .field("rules", &self.rule_names())
            .field("tie_breaker", &self.tie_breaker)
            .field("epsilon", &self.epsilon)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules;

    fn jobs(processes: &[Process]) -> Vec<usize> {
        processes.iter().map(|p| p.job).collect()
    }

    #[test]
    fn test_arrival_ordering() {
        let processes = vec![
            Process::new(0, 5.0, 1.0),
            Process::new(1, 0.0, 1.0),
            Process::new(2, 2.0, 1.0),
        ];
        let engine = RuleEngine::new().with_rule(rules::ArrivalOrder);
        assert_eq!(engine.sort_indices(&processes), vec![1, 2, 0]);
    }

    #[test]
    fn test_stable_ties_keep_input_order() {
        // Input order deliberately differs from job order.
        let processes = vec![
            Process::new(3, 0.0, 1.0),
            Process::new(1, 0.0, 1.0),
            Process::new(2, 0.0, 1.0),
        ];
        let engine = RuleEngine::new().with_rule(rules::ArrivalOrder);
        assert_eq!(jobs(&engine.sort(&processes)), vec![3, 1, 2]);
    }

    #[test]
    fn test_by_job_tie_breaker() {
        let processes = vec![
            Process::new(3, 0.0, 1.0),
            Process::new(1, 0.0, 1.0),
            Process::new(2, 0.0, 1.0),
        ];
        let engine = RuleEngine::new()
            .with_rule(rules::ArrivalOrder)
            .with_final_tie_breaker(TieBreaker::ByJob);
        assert_eq!(jobs(&engine.sort(&processes)), vec![1, 2, 3]);
    }

    #[test]
    fn test_sequential_with_tie_breaker() {
        let processes = vec![
            Process::new(0, 3.0, 2.0),
            Process::new(1, 1.0, 2.0), // Same burst as job 0, arrives earlier
            Process::new(2, 0.0, 4.0),
        ];
        let engine = RuleEngine::new()
            .with_rule(rules::ShortestBurst)
            .with_tie_breaker(rules::ArrivalOrder);
        assert_eq!(jobs(&engine.sort(&processes)), vec![1, 0, 2]);
    }

    #[test]
    fn test_epsilon_ties() {
        let processes = vec![Process::new(0, 1.0004, 1.0), Process::new(1, 1.0002, 1.0)];
        let exact = RuleEngine::new().with_rule(rules::ArrivalOrder);
        assert_eq!(jobs(&exact.sort(&processes)), vec![1, 0]);

        let loose = RuleEngine::new()
            .with_rule(rules::ArrivalOrder)
            .with_epsilon(1e-3);
        assert_eq!(jobs(&loose.sort(&processes)), vec![0, 1]);
    }

    #[test]
    fn test_epsilon_ties_are_transitive() {
        // Pairwise tolerance would tie a~b and b~c but order a<c.
        let processes = vec![
            Process::new(0, 0.0016, 1.0),
            Process::new(1, 0.0008, 1.0),
            Process::new(2, 0.0, 1.0),
        ];
        let engine = RuleEngine::new()
            .with_rule(rules::ArrivalOrder)
            .with_epsilon(1e-3);
        // Buckets: job 0 -> 1, jobs 1 and 2 -> 0 (stable among themselves).
        assert_eq!(jobs(&engine.sort(&processes)), vec![1, 2, 0]);

        let many: Vec<Process> = (0..200)
            .map(|i| Process::new(i, (199 - i) as f64 * 0.0004, 1.0))
            .collect();
        let sorted = engine.sort(&many);
        assert!(sorted
            .windows(2)
            .all(|w| (w[0].at / 1e-3).floor() <= (w[1].at / 1e-3).floor()));
    }

    #[test]
    fn test_empty_processes() {
        let engine = RuleEngine::new().with_rule(rules::ArrivalOrder);
        assert!(engine.sort_indices(&[]).is_empty());
        assert!(engine.sort(&[]).is_empty());
    }

    #[test]
    fn test_no_rules_uses_tie_breaker() {
        let processes = vec![Process::new(1, 9.0, 1.0), Process::new(0, 0.0, 1.0)];
        assert_eq!(RuleEngine::new().sort_indices(&processes), vec![0, 1]);
        let by_job = RuleEngine::new().with_final_tie_breaker(TieBreaker::ByJob);
        assert_eq!(by_job.sort_indices(&processes), vec![1, 0]);
    }

    #[test]
    fn test_evaluate_scores() {
        let engine = RuleEngine::new()
            .with_rule(rules::ArrivalOrder)
            .with_rule(rules::LongestBurst);
        let scores = engine.evaluate(&Process::new(0, 2.0, 3.0));
        assert_eq!(scores, vec![2.0, -3.0]);
    }

    #[test]
    fn test_debug_lists_rule_names() {
        let engine = RuleEngine::new().with_rule(rules::ShortestBurst);
        assert!(format!("{engine:?}").contains("SJF"));
    }
}
