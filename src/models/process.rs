//! Process records.
//!
//! A [`Process`] is the canonical input record: a job id paired with its
//! arrival and burst times. A [`SolvedProcess`] extends it with the
//! completion metrics produced by simulation.

use serde::{Deserialize, Serialize};

use super::Time;

/// A process to be scheduled.
///
/// `job` is the original input position. It is assigned once by the
/// normalizer and never recomputed after sorting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Process {
    /// Job id (0-based input position).
    pub job: usize,
    /// Arrival time.
    pub at: Time,
    /// Burst time (CPU time required, uninterrupted).
    pub bt: Time,
}

impl Process {
    /// Creates a new process record.
    pub fn new(job: usize, at: Time, bt: Time) -> Self {
        Self { job, at, bt }
    }

    /// Runs this process from `start` to completion.
    ///
    /// Waiting time is taken as `start - at` rather than `ft - at - bt`, so
    /// it is exactly zero when the process starts on arrival and never
    /// picks up rounding error below zero. `start` must not precede `at`.
    pub fn solve(&self, start: Time) -> SolvedProcess {
        let ft = start + self.bt;
        SolvedProcess {
            job: self.job,
            at: self.at,
            bt: self.bt,
            ft,
            tat: ft - self.at,
            wat: start - self.at,
        }
    }
}

/// A process after simulation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolvedProcess {
    /// Job id (0-based input position).
    pub job: usize,
    /// Arrival time.
    pub at: Time,
    /// Burst time.
    pub bt: Time,
    /// Finish time.
    pub ft: Time,
    /// Turnaround time: `ft - at`.
    pub tat: Time,
    /// Waiting time: `ft - at - bt`, computed as `start - at`. Never negative.
    pub wat: Time,
}

impl SolvedProcess {
    /// Instant the process started running (`ft - bt`).
    #[inline]
    pub fn start(&self) -> Time {
        self.ft - self.bt
    }

    /// The input record this result was derived from.
    pub fn process(&self) -> Process {
        Process::new(self.job, self.at, self.bt)
    }
}
