//! Random workload generation.
//!
//! Produces valid arrival/burst arrays for demos and property checks.
//! Values are whole numbers by default; [`WorkloadGenerator::with_fraction_digits`]
//! yields decimal fractions, which are not exact in `f64`.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::models::Time;

/// Raw simulation input: parallel arrival and burst arrays.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workload {
    /// Arrival time per job.
    pub arrival_times: Vec<Time>,
    /// Burst time per job.
    pub burst_times: Vec<Time>,
}

impl Workload {
    /// Number of jobs.
    pub fn len(&self) -> usize {
        self.arrival_times.len()
    }

    /// Whether the workload has no jobs.
    pub fn is_empty(&self) -> bool {
        self.arrival_times.is_empty()
    }
}

/// Seeded generator of random workloads.
///
/// The same seed and settings always produce the same workload.
///
/// # Example
/// ```
/// use cpu_schedule::workload::WorkloadGenerator;
///
/// let a = WorkloadGenerator::new(7).with_process_count(4).generate();
/// let b = WorkloadGenerator::new(7).with_process_count(4).generate();
/// assert_eq!(a, b);
/// assert_eq!(a.len(), 4);
/// ```
#[derive(Debug, Clone)]
pub struct WorkloadGenerator {
    seed: u64,
    process_count: usize,
    max_arrival: u32,
    min_burst: u32,
    max_burst: u32,
    fraction_digits: u32,
}

impl WorkloadGenerator {
    /// Creates a generator: 5 processes, arrivals in `0..=10`, bursts in `1..=10`.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            process_count: 5,
            max_arrival: 10,
            min_burst: 1,
            max_burst: 10,
            fraction_digits: 0,
        }
    }

    /// Sets the number of processes.
    pub fn with_process_count(mut self, count: usize) -> Self {
        self.process_count = count;
        self
    }

    /// Sets the latest possible arrival time.
    pub fn with_max_arrival(mut self, max_arrival: u32) -> Self {
        self.max_arrival = max_arrival;
        self
    }

    /// Sets the burst range (inclusive). Bursts are always at least 1.
    pub fn with_burst_range(mut self, min: u32, max: u32) -> Self {
        self.min_burst = min.max(1);
        self.max_burst = max.max(self.min_burst);
        self
    }

    /// Sets the number of decimal digits after the point (capped at 6).
    ///
    /// Ranges stay the same; values are drawn on a `10^-digits` grid.
    pub fn with_fraction_digits(mut self, digits: u32) -> Self {
        self.fraction_digits = digits.min(6);
        self
    }

    /// Generates a workload.
    pub fn generate(&self) -> Workload {
        let mut rng = SmallRng::seed_from_u64(self.seed);
        let mut workload = Workload::default();
        let scale = 10u64.pow(self.fraction_digits);
        let max_arrival = u64::from(self.max_arrival) * scale;
        let min_burst = u64::from(self.min_burst) * scale;
        let max_burst = u64::from(self.max_burst) * scale;

        for _ in 0..self.process_count {
            let at = rng.random_range(0..=max_arrival);
            let bt = rng.random_range(min_burst..=max_burst);
            workload.arrival_times.push(at as Time / scale as Time);
            workload.burst_times.push(bt as Time / scale as Time);
        }

        workload
    }
}
