//! Simulation configuration.
//!
//! A [`SimulationConfig`] selects the discipline and the final tie-breaking
//! policy. Every field has a default, so `{}` is a valid document.
//!
//! ```
//! use cpu_schedule::config::SimulationConfig;
//! use cpu_schedule::dispatching::TieBreaker;
//! use cpu_schedule::scheduler::Discipline;
//!
//! let config = SimulationConfig::from_json(r#"{ "discipline": "sjf" }"#).unwrap();
//! assert_eq!(config.discipline, Discipline::Sjf);
//! assert_eq!(config.tie_breaker, TieBreaker::Stable);
//! ```

use serde::{Deserialize, Serialize};

use crate::dispatching::TieBreaker;
use crate::error::ScheduleError;
use crate::scheduler::Discipline;

/// Engine configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ordering discipline.
    pub discipline: Discipline,
    /// Policy for processes every rule ranks equal.
    pub tie_breaker: TieBreaker,
}

impl SimulationConfig {
    /// Creates the default configuration (FCFS, stable ties).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the discipline.
    pub fn with_discipline(mut self, discipline: Discipline) -> Self {
        self.discipline = discipline;
        self
    }

    /// Sets the final tie-breaking policy.
    pub fn with_tie_breaker(mut self, tie_breaker: TieBreaker) -> Self {
        self.tie_breaker = tie_breaker;
        self
    }

    /// Parses a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ScheduleError> {
        serde_json::from_str(json).map_err(|e| ScheduleError::Config(e.to_string()))
    }

    /// Serializes to a JSON document.
    pub fn to_json(&self) -> Result<String, ScheduleError> {
        serde_json::to_string_pretty(self).map_err(|e| ScheduleError::Config(e.to_string()))
    }
}
