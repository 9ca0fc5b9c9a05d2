//! Schedule quality metrics (KPIs).
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | Latest finish time |
//! | Avg Turnaround | Mean of `ft - at` |
//! | Avg Waiting | Mean of `ft - at - bt` |
//! | Idle Time | Sum of gaps between consecutive segments |
//! | Utilization | Busy time / (makespan - first start) |
//! | Throughput | Processes per time unit over the same span |

use serde::{Deserialize, Serialize};

use crate::models::{Solution, Time};

/// Schedule performance indicators.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleKpi {
    /// Number of simulated processes.
    pub process_count: usize,
    /// Latest finish time.
    pub makespan: Time,
    /// Mean turnaround time.
    pub avg_turnaround: Time,
    /// Mean waiting time.
    pub avg_waiting: Time,
    /// Sum of waiting times.
    pub total_waiting: Time,
    /// Longest single wait.
    pub max_waiting: Time,
    /// Total CPU idle time between the first start and the makespan.
    pub idle_time: Time,
    /// CPU utilization (0.0..=1.0).
    pub utilization: f64,
    /// Completed processes per time unit.
    pub throughput: f64,
}

impl ScheduleKpi {
    /// Computes KPIs from a solution.
    pub fn calculate(solution: &Solution) -> Self {
        let count = solution.len();
        let makespan = solution.makespan();

        let total_turnaround: Time = solution.solved_processes.iter().map(|p| p.tat).sum();
        let total_waiting: Time = solution.solved_processes.iter().map(|p| p.wat).sum();
        let max_waiting = solution
            .solved_processes
            .iter()
            .map(|p| p.wat)
            .fold(0.0, Time::max);

        let span = solution
            .first_start()
            .map(|start| makespan - start)
            .unwrap_or(0.0);

        let (avg_turnaround, avg_waiting) = if count == 0 {
            (0.0, 0.0)
        } else {
            (
                total_turnaround / count as f64,
                total_waiting / count as f64,
            )
        };

        let (utilization, throughput) = if span <= 0.0 {
            (0.0, 0.0)
        } else {
            (solution.total_burst() / span, count as f64 / span)
        };

        Self {
            process_count: count,
            makespan,
            avg_turnaround,
            avg_waiting,
            total_waiting,
            max_waiting,
            idle_time: solution.idle_time(),
            utilization,
            throughput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::fcfs;

    #[test]
    fn test_kpi_back_to_back() {
        let solution = fcfs(&[0.0, 1.0, 2.0], &[5.0, 3.0, 1.0]).unwrap();
        let kpi = ScheduleKpi::calculate(&solution);
        assert_eq!(kpi.process_count, 3);
        assert_eq!(kpi.makespan, 9.0);
        assert!((kpi.avg_turnaround - 19.0 / 3.0).abs() < 1e-10); // (5+7+7)/3
        assert!((kpi.avg_waiting - 10.0 / 3.0).abs() < 1e-10); // (0+4+6)/3
        assert_eq!(kpi.total_waiting, 10.0);
        assert_eq!(kpi.max_waiting, 6.0);
        assert_eq!(kpi.idle_time, 0.0);
        assert!((kpi.utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 3.0 / 9.0).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_with_idle_gap() {
        let solution = fcfs(&[0.0, 5.0], &[3.0, 2.0]).unwrap();
        let kpi = ScheduleKpi::calculate(&solution);
        assert_eq!(kpi.idle_time, 2.0);
        // Busy 5 over span 7.
        assert!((kpi.utilization - 5.0 / 7.0).abs() < 1e-10);
        assert_eq!(kpi.avg_waiting, 0.0);
    }

    #[test]
    fn test_kpi_span_starts_at_first_segment() {
        let solution = fcfs(&[10.0], &[4.0]).unwrap();
        let kpi = ScheduleKpi::calculate(&solution);
        assert_eq!(kpi.makespan, 14.0);
        assert!((kpi.utilization - 1.0).abs() < 1e-10);
        assert!((kpi.throughput - 0.25).abs() < 1e-10);
    }

    #[test]
    fn test_kpi_empty() {
        let kpi = ScheduleKpi::calculate(&Solution::new());
        assert_eq!(kpi.process_count, 0);
        assert_eq!(kpi.makespan, 0.0);
        assert_eq!(kpi.avg_waiting, 0.0);
        assert_eq!(kpi.utilization, 0.0);
        assert_eq!(kpi.throughput, 0.0);
    }
}
