//! Built-in scheduling disciplines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::dispatching::{rules, RuleEngine};
use crate::error::ScheduleError;

/// A non-preemptive scheduling discipline.
///
/// Every discipline shares the same simulation loop; only the ordering
/// (its [`RuleEngine`]) differs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Discipline {
    /// First Come First Served: arrival time ascending.
    #[default]
    Fcfs,
    /// Shortest Job First: burst ascending, then arrival.
    Sjf,
    /// Longest Job First: burst descending, then arrival.
    Ljf,
}

impl Discipline {
    /// All built-in disciplines.
    pub const ALL: [Discipline; 3] = [Discipline::Fcfs, Discipline::Sjf, Discipline::Ljf];

    /// Short name (e.g., "FCFS").
    pub fn name(&self) -> &'static str {
        match self {
            Self::Fcfs => "FCFS",
            Self::Sjf => "SJF",
            Self::Ljf => "LJF",
        }
    }

    /// Builds the ordering for this discipline.
    pub fn rule_engine(&self) -> RuleEngine {
        match self {
            Self::Fcfs => RuleEngine::new().with_rule(rules::ArrivalOrder),
            Self::Sjf => RuleEngine::new()
                .with_rule(rules::ShortestBurst)
                .with_tie_breaker(rules::ArrivalOrder),
            Self::Ljf => RuleEngine::new()
                .with_rule(rules::LongestBurst)
                .with_tie_breaker(rules::ArrivalOrder),
        }
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Discipline {
    type Err = ScheduleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ScheduleError::Config(format!("unknown discipline '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("fcfs".parse::<Discipline>().unwrap(), Discipline::Fcfs);
        assert_eq!(" SJF ".parse::<Discipline>().unwrap(), Discipline::Sjf);
        assert!(matches!(
            "rr".parse::<Discipline>(),
            Err(ScheduleError::Config(_))
        ));
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for d in Discipline::ALL {
            assert_eq!(d.to_string().parse::<Discipline>().unwrap(), d);
        }
    }

    #[test]
    fn test_rule_engines() {
        assert_eq!(Discipline::Fcfs.rule_engine().rule_names(), vec!["FCFS"]);
        assert_eq!(
            Discipline::Sjf.rule_engine().rule_names(),
            vec!["SJF", "FCFS"]
        );
        assert_eq!(
            Discipline::Ljf.rule_engine().rule_names(),
            vec!["LJF", "FCFS"]
        );
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Discipline::Ljf).unwrap(), r#""ljf""#);
        let d: Discipline = serde_json::from_str(r#""sjf""#).unwrap();
        assert_eq!(d, Discipline::Sjf);
    }
}
