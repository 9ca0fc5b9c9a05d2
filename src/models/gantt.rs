//! Gantt chart data.
//!
//! The engine emits [`GanttSegment`]s: non-overlapping CPU occupancy
//! intervals in non-decreasing start order. Idle time is never emitted as
//! a segment; it is the gap between one segment's `stop` and the next
//! segment's `start`.
//!
//! [`GanttTimeline`] turns segments into the row model a chart renderer
//! draws: one cell per occupancy (or idle gap) and one tick per boundary.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Time;

/// A maximal interval during which `job` occupies the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GanttSegment {
    /// Job occupying the CPU.
    pub job: usize,
    /// Interval start.
    pub start: Time,
    /// Interval end (exclusive). Always greater than `start`.
    pub stop: Time,
}

impl GanttSegment {
    /// Creates a new segment.
    pub fn new(job: usize, start: Time, stop: Time) -> Self {
        Self { job, start, stop }
    }

    /// Occupancy length (`stop - start`).
    #[inline]
    pub fn duration(&self) -> Time {
        self.stop - self.start
    }

    /// Idle time between this segment's end and `next`'s start.
    ///
    /// Zero when the segments are contiguous.
    #[inline]
    pub fn gap_before(&self, next: &GanttSegment) -> Time {
        (next.start - self.stop).max(0.0)
    }
}

/// One cell of a Gantt chart row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "job", rename_all = "lowercase")]
pub enum TimelineCell {
    /// The CPU runs `job`.
    Run(usize),
    /// The CPU is idle.
    Idle,
}

/// Chart row model derived from Gantt segments.
///
/// `cells[i]` spans `ticks[i]..ticks[i + 1]`, so a non-empty timeline always
/// has exactly one more tick than cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GanttTimeline {
    /// Occupancy cells, idle gaps included.
    pub cells: Vec<TimelineCell>,
    /// Boundary instants.
    pub ticks: Vec<Time>,
    /// Index of the last cell for each job.
    pub last_cell: BTreeMap<usize, usize>,
}

impl GanttTimeline {
    /// Builds the timeline, inserting an [`TimelineCell::Idle`] cell wherever
    /// a segment does not start at the previous boundary.
    ///
    /// # Example
    ///
    /// ```
    /// use cpu_schedule::models::{GanttSegment, GanttTimeline, TimelineCell};
    ///
    /// let timeline = GanttTimeline::from_segments(&[
    ///     GanttSegment::new(0, 0.0, 3.0),
    ///     GanttSegment::new(1, 5.0, 7.0),
    /// ]);
    /// assert_eq!(
    ///     timeline.cells,
    ///     vec![TimelineCell::Run(0), TimelineCell::Idle, TimelineCell::Run(1)]
    /// );
    /// assert_eq!(timeline.ticks, vec![0.0, 3.0, 5.0, 7.0]);
    /// ```
    pub fn from_segments(segments: &[GanttSegment]) -> Self {
        let mut timeline = Self::default();

        for seg in segments {
            match timeline.ticks.last() {
                None => timeline.ticks.push(seg.start),
                Some(&last) if last == seg.start => {}
                Some(_) => {
                    timeline.cells.push(TimelineCell::Idle);
                    timeline.ticks.push(seg.start);
                }
            }
            timeline.cells.push(TimelineCell::Run(seg.job));
            timeline.ticks.push(seg.stop);
            timeline
                .last_cell
                .insert(seg.job, timeline.cells.len() - 1);
        }

        timeline
    }

    /// Number of idle cells.
    pub fn idle_count(&self) -> usize {
        self.cells
            .iter()
            .filter(|c| matches!(c, TimelineCell::Idle))
            .count()
    }

    /// Whether `index` is the last cell of its job.
    pub fn is_last_cell(&self, index: usize) -> bool {
        match self.cells.get(index) {
            Some(TimelineCell::Run(job)) => self.last_cell.get(job) == Some(&index),
            _ => false,
        }
    }

    /// Whether the timeline has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_duration_and_gap() {
        let a = GanttSegment::new(0, 0.0, 3.0);
        let b = GanttSegment::new(1, 5.0, 7.0);
        assert_eq!(a.duration(), 3.0);
        assert_eq!(a.gap_before(&b), 2.0);

        let c = GanttSegment::new(2, 7.0, 8.0);
        assert_eq!(b.gap_before(&c), 0.0);
    }

    #[test]
    fn test_timeline_contiguous() {
        let t = GanttTimeline::from_segments(&[
            GanttSegment::new(0, 0.0, 5.0),
            GanttSegment::new(1, 5.0, 8.0),
            GanttSegment::new(2, 8.0, 9.0),
        ]);
        assert_eq!(t.cells.len(), 3);
        assert_eq!(t.ticks, vec![0.0, 5.0, 8.0, 9.0]);
        assert_eq!(t.idle_count(), 0);
    }

    #[test]
    fn test_timeline_leading_offset_is_not_idle() {
        // First segment starting late opens the chart at its start.
        let t = GanttTimeline::from_segments(&[GanttSegment::new(0, 4.0, 6.0)]);
        assert_eq!(t.cells, vec![TimelineCell::Run(0)]);
        assert_eq!(t.ticks, vec![4.0, 6.0]);
    }

    #[test]
    fn test_timeline_last_cell_after_idle() {
        let t = GanttTimeline::from_segments(&[
            GanttSegment::new(0, 0.0, 2.0),
            GanttSegment::new(1, 3.0, 4.0),
            GanttSegment::new(0, 4.0, 6.0),
        ]);
        // cells: Run(0), Idle, Run(1), Run(0)
        assert_eq!(t.cells.len(), 4);
        assert_eq!(t.ticks.len(), 5);
        assert_eq!(t.last_cell[&1], 2);
        assert_eq!(t.last_cell[&0], 3);
        assert!(!t.is_last_cell(0));
        assert!(!t.is_last_cell(1));
        assert!(t.is_last_cell(3));
    }

    #[test]
    fn test_timeline_empty() {
        let t = GanttTimeline::from_segments(&[]);
        assert!(t.is_empty());
        assert!(t.ticks.is_empty());
    }

    #[test]
    fn test_cell_serde() {
        let json = serde_json::to_string(&TimelineCell::Run(3)).unwrap();
        assert_eq!(json, r#"{"kind":"run","job":3}"#);
        let json = serde_json::to_string(&TimelineCell::Idle).unwrap();
        assert_eq!(json, r#"{"kind":"idle"}"#);
    }
}
