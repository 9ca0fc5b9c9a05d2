//! Scheduling engine and KPI evaluation.
//!
//! # Algorithm
//!
//! [`Simulator`] orders processes with a [`crate::dispatching::RuleEngine`]
//! and then runs them back to back on a single CPU, non-preemptively. A
//! process starts at its own arrival when the CPU is idle, otherwise at the
//! previous finish time.
//!
//! # KPI
//!
//! [`ScheduleKpi`] summarizes a solution: averages of turnaround and waiting
//! time, idle time, utilization, and throughput.

mod discipline;
mod kpi;
mod simulator;

pub use discipline::Discipline;
pub use kpi::ScheduleKpi;
pub use simulator::Simulator;

use crate::error::ScheduleError;
use crate::models::{Solution, Time};

/// Simulates first-come-first-served scheduling over raw input arrays.
///
/// Shorthand for `Simulator::new().simulate(arrival_times, burst_times)`.
///
/// # Example
/// ```
/// let solution = cpu_schedule::scheduler::fcfs(&[0.0, 1.0, 2.0], &[5.0, 3.0, 1.0]).unwrap();
/// assert_eq!(solution.finish_times(), vec![5.0, 8.0, 9.0]);
/// ```
pub fn fcfs(arrival_times: &[Time], burst_times: &[Time]) -> Result<Solution, ScheduleError> {
    Simulator::new().simulate(arrival_times, burst_times)
}
