//! Simulation result.
//!
//! A solution pairs the solved processes (in simulation order) with the
//! Gantt segments describing CPU occupancy.

use serde::{Deserialize, Serialize};

use super::{GanttSegment, GanttTimeline, SolvedProcess, Time};

/// Output of one simulation run.
///
/// `solved_processes` is in simulation order, not job order. Use
/// [`Solution::by_job`] when original input order is needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    /// Solved processes in the order they ran.
    pub solved_processes: Vec<SolvedProcess>,
    /// CPU occupancy intervals in non-decreasing start order.
    pub gantt_segments: Vec<GanttSegment>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a solved process together with the segment it occupied.
    pub fn record(&mut self, solved: SolvedProcess, segment: GanttSegment) {
        self.solved_processes.push(solved);
        self.gantt_segments.push(segment);
    }

    /// Finish time of each position in simulation order.
    pub fn finish_times(&self) -> Vec<Time> {
        self.solved_processes.iter().map(|p| p.ft).collect()
    }

    /// Solved processes re-sorted into original job order.
    pub fn by_job(&self) -> Vec<SolvedProcess> {
        let mut solved = self.solved_processes.clone();
        solved.sort_by_key(|p| p.job);
        solved
    }

    /// Finds the solved process for a job.
    pub fn process(&self, job: usize) -> Option<&SolvedProcess> {
        self.solved_processes.iter().find(|p| p.job == job)
    }

    /// Returns all segments for a job.
    pub fn segments_for_job(&self, job: usize) -> Vec<&GanttSegment> {
        self.gantt_segments.iter().filter(|s| s.job == job).collect()
    }

    /// Latest segment end, or 0 when nothing ran.
    pub fn makespan(&self) -> Time {
        self.gantt_segments
            .iter()
            .map(|s| s.stop)
            .fold(0.0, Time::max)
    }

    /// Earliest segment start, if any segment exists.
    pub fn first_start(&self) -> Option<Time> {
        self.gantt_segments.first().map(|s| s.start)
    }

    /// Total CPU busy time (sum of segment durations).
    pub fn total_burst(&self) -> Time {
        self.gantt_segments.iter().map(GanttSegment::duration).sum()
    }

    /// Total CPU idle time between the first start and the makespan.
    pub fn idle_time(&self) -> Time {
        self.gantt_segments
            .windows(2)
            .map(|w| w[0].gap_before(&w[1]))
            .sum()
    }

    /// Chart row model for these segments.
    pub fn timeline(&self) -> GanttTimeline {
        GanttTimeline::from_segments(&self.gantt_segments)
    }

    /// Number of solved processes.
    pub fn len(&self) -> usize {
        self.solved_processes.len()
    }

    /// Whether no process was simulated.
    pub fn is_empty(&self) -> bool {
        self.solved_processes.is_empty()
    }
}
