//! Work week model.
//!
//! A [`WeekPlan`] is the ordered list of days together with the remote
//! capacity computed by [`crate::capacity::plan_slots`].

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::capacity::plan_slots;

/// One day of the planned week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    /// Position in the week (0-based).
    pub index: usize,
    /// Display name.
    pub name: String,
    /// Remote slots available (0 on holidays).
    pub capacity: u32,
    /// Whether this is the designated extra-capacity day.
    pub extra: bool,
    /// Whether this day is a holiday.
    pub holiday: bool,
}

impl Day {
    /// Whether nobody can be remote on this day.
    #[inline]
    pub fn is_closed(&self) -> bool {
        self.capacity == 0
    }

    /// Header label used by reports and exports.
    ///
    /// Holidays are marked `(holiday)`, the extra-capacity day shows its
    /// slot count.
    pub fn label(&self) -> String {
        if self.holiday {
            format!("{} (holiday)", self.name)
        } else if self.extra {
            format!("{} ({} slots)", self.name, self.capacity)
        } else {
            self.name.clone()
        }
    }
}

/// Ordered days with their remote capacities.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekPlan {
    /// Days in week order.
    pub days: Vec<Day>,
}

impl WeekPlan {
    /// Plans a week from day names and capacity settings.
    ///
    /// Out-of-range indices in `extra_day` or `holidays` are ignored;
    /// callers resolve and validate names beforehand.
    pub fn new<S: AsRef<str>>(
        names: &[S],
        base_slots: u32,
        extra_day: Option<usize>,
        holidays: &BTreeSet<usize>,
    ) -> Self {
        let slots = plan_slots(names.len(), base_slots, extra_day, holidays);
        let days = names
            .iter()
            .zip(slots)
            .enumerate()
            .map(|(index, (name, capacity))| Day {
                index,
                name: name.as_ref().to_string(),
                capacity,
                extra: extra_day == Some(index),
                holiday: holidays.contains(&index),
            })
            .collect();
        Self { days }
    }

    /// Number of days.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the week has no days.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Remote capacity of a day (0 if out of range).
    pub fn capacity(&self, day: usize) -> u32 {
        self.days.get(day).map_or(0, |d| d.capacity)
    }

    /// Per-day capacities in week order.
    pub fn slots(&self) -> Vec<u32> {
        self.days.iter().map(|d| d.capacity).collect()
    }

    /// Sum of remote slots over the week.
    pub fn total_slots(&self) -> u64 {
        self.days.iter().map(|d| u64::from(d.capacity)).sum()
    }

    /// Finds a day by name, ignoring ASCII case.
    pub fn day_index(&self, name: &str) -> Option<usize> {
        day_index(&self.days, name, |d| d.name.as_str())
    }
}

/// Case-insensitive lookup of a day name in an ordered list.
pub(crate) fn day_index<T>(days: &[T], name: &str, key: impl Fn(&T) -> &str) -> Option<usize> {
    let wanted = name.trim();
    days.iter().position(|d| key(d).eq_ignore_ascii_case(wanted))
}
