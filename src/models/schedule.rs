//! Schedule (solution) model.
//!
//! A schedule is one remote set per day of the week. It is produced once
//! per successful solve and never modified afterwards.

use serde::{Deserialize, Serialize};

use super::PersonMask;

/// A complete weekly remote assignment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    /// Remote set per day, in week order.
    pub days: Vec<PersonMask>,
}

/// A broken scheduling rule found by [`crate::audit::audit_schedule`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Type of violation.
    pub violation_type: ViolationType,
    /// Person or day name the violation concerns.
    pub entity: String,
    /// Day index, when the violation is tied to one day.
    pub day: Option<usize>,
    /// Human-readable description.
    pub message: String,
    /// Severity (0-100, higher = worse).
    pub severity: i32,
}

/// Classification of schedule violations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationType {
    /// Schedule length differs from the number of days.
    LengthMismatch,
    /// A mask refers to a person index outside the roster.
    UnknownPerson,
    /// Day headcount differs from its planned capacity.
    CapacityMismatch,
    /// Someone is remote on a holiday.
    HolidayAssigned,
    /// A person's remote total differs from the quota.
    QuotaMismatch,
    /// A person exceeds the consecutive-day limit.
    StreakTooLong,
    /// A person is remote on one of their forbidden days.
    ForbiddenDay,
}

impl Violation {
    /// Creates a violation.
    pub fn new(
        violation_type: ViolationType,
        entity: impl Into<String>,
        day: Option<usize>,
        message: impl Into<String>,
    ) -> Self {
        let severity = match violation_type {
            ViolationType::LengthMismatch | ViolationType::UnknownPerson => 100,
            ViolationType::HolidayAssigned | ViolationType::ForbiddenDay => 90,
            ViolationType::CapacityMismatch | ViolationType::QuotaMismatch => 80,
            ViolationType::StreakTooLong => 70,
        };
        Self {
            violation_type,
            entity: entity.into(),
            day,
            message: message.into(),
            severity,
        }
    }
}

impl Schedule {
    /// Wraps per-day masks.
    pub fn from_masks(days: Vec<PersonMask>) -> Self {
        Self { days }
    }

    /// Number of days covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the schedule covers no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Remote set of a day (empty if out of range).
    pub fn mask(&self, day: usize) -> PersonMask {
        self.days.get(day).copied().unwrap_or_default()
    }

    /// Whether `person` is remote on `day`.
    pub fn is_remote(&self, person: usize, day: usize) -> bool {
        self.mask(day).contains(person)
    }

    /// Total remote days of `person`.
    pub fn remote_count(&self, person: usize) -> u32 {
        self.days.iter().filter(|mask| mask.contains(person)).count() as u32
    }

    /// Longest run of consecutive remote days of `person`.
    pub fn longest_streak(&self, person: usize) -> u32 {
        let mut longest = 0;
        let mut current = 0;
        for mask in &self.days {
            if mask.contains(person) {
                current += 1;
                longest = longest.max(current);
            } else {
                current = 0;
            }
        }
        longest
    }
}
