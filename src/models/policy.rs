//! Rostering rules: per-person quota, streak limit, and forbidden days.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use super::{PersonMask, MAX_PEOPLE};

/// Quota and streak rules applied to every person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemotePolicy {
    /// Exact number of remote days each person must receive.
    pub quota_per_person: u32,
    /// Longest allowed run of consecutive remote days.
    pub max_consecutive_days: u32,
}

impl Default for RemotePolicy {
    fn default() -> Self {
        Self {
            quota_per_person: 3,
            max_consecutive_days: 2,
        }
    }
}

impl RemotePolicy {
    /// Sets the per-person quota.
    pub fn with_quota(mut self, quota: u32) -> Self {
        self.quota_per_person = quota;
        self
    }

    /// Sets the consecutive-day limit.
    pub fn with_max_consecutive(mut self, days: u32) -> Self {
        self.max_consecutive_days = days;
        self
    }
}

/// Days on which specific people must not be remote.
///
/// Keyed by person index; values are day indices. Typical use is the
/// first day back from vacation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForbiddenDays {
    by_person: BTreeMap<usize, BTreeSet<usize>>,
}

impl ForbiddenDays {
    /// Creates an empty map (nothing forbidden).
    pub fn new() -> Self {
        Self::default()
    }

    /// Forbids `day` for `person`.
    pub fn insert(&mut self, person: usize, day: usize) {
        self.by_person.entry(person).or_default().insert(day);
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with(mut self, person: usize, day: usize) -> Self {
        self.insert(person, day);
        self
    }

    /// Whether `person` is forbidden from being remote on `day`.
    #[inline]
    pub fn is_forbidden(&self, person: usize, day: usize) -> bool {
        self.by_person
            .get(&person)
            .is_some_and(|days| days.contains(&day))
    }

    /// People forbidden on `day`, as a mask. Indices beyond the mask
    /// width are left out.
    pub fn people_on(&self, day: usize) -> PersonMask {
        self.by_person
            .iter()
            .filter(|(&person, days)| person < MAX_PEOPLE && days.contains(&day))
            .map(|(&person, _)| person)
            .collect()
    }

    /// All `(person, day)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.by_person
            .iter()
            .flat_map(|(&person, days)| days.iter().map(move |&day| (person, day)))
    }

    /// Whether no day is forbidden for anyone.
    pub fn is_empty(&self) -> bool {
        self.by_person.values().all(BTreeSet::is_empty)
    }
}
