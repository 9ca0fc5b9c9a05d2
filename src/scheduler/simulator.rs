//! Single-CPU, run-to-completion simulation.
//!
//! # Algorithm
//!
//! 1. Order processes with the rule engine (stable).
//! 2. For each process in order:
//!    - first process, or arrival strictly after the previous finish
//!      (CPU idle): start at the process's own arrival;
//!    - otherwise: start at the previous finish.
//! 3. Finish = start + burst; emit one Gantt segment per process.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the simulation pass.

use log::{debug, trace};

use super::Discipline;
use crate::config::SimulationConfig;
use crate::dispatching::RuleEngine;
use crate::error::ScheduleError;
use crate::models::{GanttSegment, Process, Solution, Time};
use crate::validation::normalize;

/// Non-preemptive single-CPU scheduling engine.
///
/// Defaults to first-come-first-served. Each call is a pure function of
/// its input; a `Simulator` holds only the ordering configuration.
///
/// # Example
///
/// ```
/// use cpu_schedule::scheduler::Simulator;
///
/// let solution = Simulator::new().simulate(&[0.0, 5.0], &[3.0, 2.0]).unwrap();
/// let spans: Vec<(usize, f64, f64)> = solution
///     .gantt_segments
///     .iter()
///     .map(|s| (s.job, s.start, s.stop))
///     .collect();
/// assert_eq!(spans, vec![(0, 0.0, 3.0), (1, 5.0, 7.0)]);
/// ```
#[derive(Debug, Clone)]
pub struct Simulator {
    rule_engine: RuleEngine,
    label: String,
}

impl Simulator {
    /// Creates a first-come-first-served simulator.
    pub fn new() -> Self {
        Self::with_discipline(Discipline::Fcfs)
    }

    /// Creates a simulator for a built-in discipline.
    pub fn with_discipline(discipline: Discipline) -> Self {
        Self {
            rule_engine: discipline.rule_engine(),
            label: discipline.name().to_string(),
        }
    }

    /// Creates a simulator from configuration.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let mut simulator = Self::with_discipline(config.discipline);
        simulator.rule_engine = simulator
            .rule_engine
            .with_final_tie_breaker(config.tie_breaker);
        simulator
    }

    /// Replaces the ordering with a custom rule engine.
    pub fn with_rule_engine(mut self, engine: RuleEngine) -> Self {
        self.label = engine.rule_names().join("+");
        self.rule_engine = engine;
        self
    }

    /// The ordering in use.
    pub fn rule_engine(&self) -> &RuleEngine {
        &self.rule_engine
    }

    /// Normalizes the raw input arrays and simulates them.
    ///
    /// # Errors
    /// [`ScheduleError::ShapeMismatch`], [`ScheduleError::InvalidBurst`], or
    /// [`ScheduleError::InvalidArrival`] from normalization. The simulation
    /// does not run when normalization fails.
    pub fn simulate(
        &self,
        arrival_times: &[Time],
        burst_times: &[Time],
    ) -> Result<Solution, ScheduleError> {
        let processes = normalize(arrival_times, burst_times)?;
        Ok(self.solve(&processes))
    }

    /// Simulates already-normalized process records.
    ///
    /// Assumes every record has a positive burst and a non-negative arrival.
    /// Solved processes come back in simulation order.
    pub fn solve(&self, processes: &[Process]) -> Solution {
        debug!(
            "Simulating {} processes with {}",
            processes.len(),
            self.label
        );

        let ordered = self.rule_engine.sort(processes);
        let mut solution = Solution::new();
        let mut prev_finish: Option<Time> = None;

        for process in &ordered {
            let start = match prev_finish {
                None => process.at,
                Some(prev) if process.at > prev => {
                    trace!("CPU idle from {} to {}", prev, process.at);
                    process.at
                }
                Some(prev) => prev,
            };
            let solved = process.solve(start);
            let finish = solved.ft;

            trace!("Job {} runs {}..{}", process.job, start, finish);
            solution.record(solved, GanttSegment::new(process.job, start, finish));
            prev_finish = Some(finish);
        }

        debug!(
            "Simulation finished: makespan {}, idle {}",
            solution.makespan(),
            solution.idle_time()
        );
        solution
    }
}

impl Default for Simulator {
    fn default() -> Self {
        Self::new()
    }
}
