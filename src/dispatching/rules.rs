//! Built-in dispatching rules.
//!
//! All rules return lower scores for processes that should run first.

use super::{DispatchingRule, RuleScore};
use crate::models::Process;

/// First Come First Served.
///
/// Orders by arrival time. Equal arrivals score equal, so input order
/// decides under the engine's stable sort.
#[derive(Debug, Clone, Copy)]
pub struct ArrivalOrder;

impl DispatchingRule for ArrivalOrder {
    fn name(&self) -> &'static str {
        "FCFS"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.at
    }

    fn description(&self) -> &'static str {
        "First Come First Served"
    }
}

/// Shortest Job First.
///
/// Orders by burst time, shortest first.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl DispatchingRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        process.bt
    }

    fn description(&self) -> &'static str {
        "Shortest Job First"
    }
}

/// Longest Job First.
#[derive(Debug, Clone, Copy)]
pub struct LongestBurst;

impl DispatchingRule for LongestBurst {
    fn name(&self) -> &'static str {
        "LJF"
    }

    fn evaluate(&self, process: &Process) -> RuleScore {
        -process.bt
    }

    fn description(&self) -> &'static str {
        "Longest Job First"
    }
}
