//! Scheduling domain models.
//!
//! Provides the data types flowing through a simulation: input process
//! records, solved processes with their metrics, and Gantt segments.
//! All types are plain data and serialize with serde so renderers can
//! consume them directly.
//!
//! # Terminology
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `job` | Input position of the process (permanent id) |
//! | `at` | Arrival time |
//! | `bt` | Burst time |
//! | `ft` | Finish (completion) time |
//! | `tat` | Turnaround time, `ft - at` |
//! | `wat` | Waiting time, `tat - bt` |

mod gantt;
mod process;
mod solution;

pub use gantt::{GanttSegment, GanttTimeline, TimelineCell};
pub use process::{Process, SolvedProcess};
pub use solution::Solution;

/// Simulated time, in abstract units.
pub type Time = f64;
