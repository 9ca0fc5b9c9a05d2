//! Non-preemptive CPU scheduling simulation.
//!
//! Given arrival and burst times for a set of processes, computes each
//! process's finish, turnaround, and waiting time, and the Gantt segments
//! describing which process occupies the single CPU when.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Process`, `SolvedProcess`, `GanttSegment`,
//!   `GanttTimeline`, `Solution`
//! - **`validation`**: Input checks and normalization into process records
//! - **`dispatching`**: Ordering rules and the `RuleEngine`
//! - **`scheduler`**: The `Simulator`, built-in `Discipline`s, and `ScheduleKpi`
//! - **`config`**: Serde-backed engine configuration
//! - **`workload`**: Seeded random workloads
//!
//! # Example
//!
//! ```
//! use cpu_schedule::scheduler::{ScheduleKpi, Simulator};
//!
//! let solution = Simulator::new()
//!     .simulate(&[0.0, 1.0, 2.0], &[5.0, 3.0, 1.0])
//!     .unwrap();
//! let kpi = ScheduleKpi::calculate(&solution);
//! assert_eq!(kpi.makespan, 9.0);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems"

pub mod config;
pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::ScheduleError;
