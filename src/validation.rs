//! Input validation and normalization.
//!
//! Turns the raw parallel arrays (arrival times, burst times) into
//! [`Process`] records. Detects:
//! - Length mismatch between the two arrays
//! - Non-positive or non-finite burst times
//! - Negative or non-finite arrival times
//! - Burst times too small to advance the clock at the schedule's horizon
//!
//! [`validate_input`] reports every problem at once (useful for form
//! feedback); [`normalize`] fails fast on the first one.

use crate::error::ScheduleError;
use crate::models::{Process, Time};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ScheduleError>>;

/// Validates arrival and burst sequences.
///
/// Checks:
/// 1. Both sequences have the same length
/// 2. Every burst time is positive and finite
/// 3. Every arrival time is non-negative and finite
/// 4. Every burst still advances the clock at the schedule horizon
///    (`max(at) + sum(bt)`); runs only when checks 1-3 pass
///
/// Element checks cover the common prefix when lengths differ.
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(arrival_times: &[Time], burst_times: &[Time]) -> ValidationResult {
    let mut errors = Vec::new();

    if let Some(err) = check_shape(arrival_times, burst_times) {
        errors.push(err);
    }

    for (job, (&at, &bt)) in arrival_times.iter().zip(burst_times).enumerate() {
        errors.extend(check_record(job, at, bt));
    }

    if errors.is_empty() {
        errors.extend(check_horizon(arrival_times, burst_times));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Pairs arrival and burst times into process records.
///
/// Record `i` carries `job = i`, `at = arrival_times[i]`, `bt = burst_times[i]`.
///
/// # Errors
/// The first problem found: [`ScheduleError::ShapeMismatch`] before any
/// per-job error, then per job in input order, burst before arrival.
///
/// # Example
/// ```
/// use cpu_schedule::validation::normalize;
///
/// let processes = normalize(&[0.0, 1.0], &[5.0, 3.0]).unwrap();
/// assert_eq!(processes[1].job, 1);
/// assert_eq!(processes[1].bt, 3.0);
/// ```
pub fn normalize(
    arrival_times: &[Time],
    burst_times: &[Time],
) -> Result<Vec<Process>, ScheduleError> {
    if let Some(err) = check_shape(arrival_times, burst_times) {
        return Err(err);
    }

    let processes = arrival_times
        .iter()
        .zip(burst_times)
        .enumerate()
        .map(|(job, (&at, &bt))| match check_record(job, at, bt).next() {
            Some(err) => Err(err),
            None => Ok(Process::new(job, at, bt)),
        })
        .collect::<Result<Vec<_>, _>>()?;

    match check_horizon(arrival_times, burst_times).next() {
        Some(err) => Err(err),
        None => Ok(processes),
    }
}

fn check_shape(arrival_times: &[Time], burst_times: &[Time]) -> Option<ScheduleError> {
    (arrival_times.len() != burst_times.len()).then(|| ScheduleError::ShapeMismatch {
        arrivals: arrival_times.len(),
        bursts: burst_times.len(),
    })
}

fn check_record(job: usize, at: Time, bt: Time) -> impl Iterator<Item = ScheduleError> {
    let burst =
        (!(bt.is_finite() && bt > 0.0)).then_some(ScheduleError::InvalidBurst { job, burst: bt });
    let arrival = (!(at.is_finite() && at >= 0.0))
        .then_some(ScheduleError::InvalidArrival { job, arrival: at });
    burst.into_iter().chain(arrival)
}

/// Rejects bursts that vanish when added to the latest possible start.
///
/// No start exceeds `max(at) + sum(bt)`, and float spacing only shrinks
/// below that, so a burst visible at the horizon is visible at every start.
fn check_horizon<'a>(
    arrival_times: &'a [Time],
    burst_times: &'a [Time],
) -> impl Iterator<Item = ScheduleError> + 'a {
    let latest_arrival = arrival_times.iter().copied().fold(0.0, Time::max);
    let horizon = latest_arrival + burst_times.iter().sum::<Time>();

    burst_times
        .iter()
        .enumerate()
        .filter(move |&(_, &bt)| horizon + bt == horizon)
        .map(|(job, &bt)| ScheduleError::InvalidBurst { job, burst: bt })
}
