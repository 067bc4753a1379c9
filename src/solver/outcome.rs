//! Solve results and search statistics.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::Schedule;

/// Why no schedule was produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum InfeasibleReason {
    /// Total weekly capacity differs from what the quota demands, so no
    /// complete assignment can satisfy both.
    CapacityMismatch {
        /// Remote person-days demanded (`people × quota`).
        required: u64,
        /// Remote slots offered by the week.
        available: u64,
    },
    /// Every candidate on every day was tried without an accepted week.
    SearchExhausted,
}

impl fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityMismatch { required, available } => write!(
                f,
                "quota needs {required} remote days but the week offers {available} slots"
            ),
            Self::SearchExhausted => {
                write!(f, "no assignment satisfies quota, streak and forbidden-day rules")
            }
        }
    }
}

/// Result of one solve pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveOutcome {
    /// First accepted schedule.
    Solved(Schedule),
    /// No schedule exists under the given constraints.
    Infeasible(InfeasibleReason),
    /// Search stopped at the configured node limit before finishing.
    LimitReached {
        /// Candidates tried before stopping.
        nodes: u64,
    },
}

impl SolveOutcome {
    /// Whether a schedule was found.
    pub fn is_solved(&self) -> bool {
        matches!(self, Self::Solved(_))
    }

    /// The schedule, if one was found.
    pub fn schedule(&self) -> Option<&Schedule> {
        match self {
            Self::Solved(schedule) => Some(schedule),
            _ => None,
        }
    }

    /// Consumes the outcome, returning the schedule if one was found.
    pub fn into_schedule(self) -> Option<Schedule> {
        match self {
            Self::Solved(schedule) => Some(schedule),
            _ => None,
        }
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Candidates taken from a day's shuffled list.
    pub candidates_tried: u64,
    /// Candidates the constraint check rejected.
    pub candidates_rejected: u64,
    /// Complete weeks that missed the quota.
    pub dead_ends: u64,
    /// Day states entered (holidays included).
    pub days_visited: u64,
}

/// Outcome plus the statistics of the search that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveReport {
    /// What the search produced.
    pub outcome: SolveOutcome,
    /// Search counters.
    pub stats: SearchStats,
}
