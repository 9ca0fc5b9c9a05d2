//! Dispatching rules and rule engine for process ordering.
//!
//! A scheduling discipline is "sort, then simulate": only the ordering
//! differs between disciplines. Rules score processes; the
//! [`RuleEngine`] chains them into a comparator and sorts stably.
//!
//! # Usage
//!
//! ```
//! use cpu_schedule::dispatching::{rules, RuleEngine};
//! use cpu_schedule::models::Process;
//!
//! let engine = RuleEngine::new()
//!     .with_rule(rules::ShortestBurst)
//!     .with_tie_breaker(rules::ArrivalOrder);
//!
//! let processes = vec![Process::new(0, 0.0, 4.0), Process::new(1, 1.0, 2.0)];
//! let ordered = engine.sort(&processes);
//! assert_eq!(ordered[0].job, 1);
//! ```

mod engine;
pub mod rules;

pub use engine::{RuleEngine, TieBreaker};

use crate::models::Process;
use std::fmt::Debug;

/// Score returned by a dispatching rule.
///
/// Lower scores = higher priority (run first).
pub type RuleScore = f64;

/// A dispatching rule that evaluates process priority.
///
/// # Score Convention
/// **Lower score = higher priority.** Rules return smaller values for
/// processes that should run first.
pub trait DispatchingRule: Send + Sync + Debug {
    /// Rule name (e.g., "FCFS", "SJF").
    fn name(&self) -> &'static str;

    /// Evaluates the priority of a process.
    fn evaluate(&self, process: &Process) -> RuleScore;

    /// Rule description.
    fn description(&self) -> &'static str {
        self.name()
    }
}
