//! Error taxonomy for scheduling simulation.
//!
//! Every failure is surfaced to the caller as a typed [`ScheduleError`];
//! the engine never returns a partially simulated result.

use thiserror::Error;

use crate::models::Time;

/// A scheduling input or configuration error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    /// Arrival and burst sequences have different lengths.
    #[error("Shape mismatch: {arrivals} arrival times but {bursts} burst times")]
    ShapeMismatch {
        /// Length of the arrival-time sequence.
        arrivals: usize,
        /// Length of the burst-time sequence.
        bursts: usize,
    },
    /// A burst time is zero, negative, not a finite number, or too small to
    /// advance the clock at the schedule's time magnitude.
    #[error(
        "Invalid burst time {burst} for job {job}: must be a positive finite number \
         that advances the clock at the schedule's time scale"
    )]
    InvalidBurst {
        /// Job id (input position).
        job: usize,
        /// Offending burst time.
        burst: Time,
    },
    /// An arrival time is negative or not a finite number.
    #[error("Invalid arrival time {arrival} for job {job}: must be a non-negative finite number")]
    InvalidArrival {
        /// Job id (input position).
        job: usize,
        /// Offending arrival time.
        arrival: Time,
    },
    /// A configuration document could not be parsed.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl ScheduleError {
    /// Job id the error refers to, if any.
    pub fn job(&self) -> Option<usize> {
        match self {
            Self::InvalidBurst { job, .. } | Self::InvalidArrival { job, .. } => Some(*job),
            Self::ShapeMismatch { .. } | Self::Config(_) => None,
        }
    }
}
