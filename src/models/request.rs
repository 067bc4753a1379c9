//! Solve input: who, which week, and which rules.

use serde::{Deserialize, Serialize};

use super::{ForbiddenDays, Person, RemotePolicy, WeekPlan};

/// Everything a solve needs, already resolved to indices.
///
/// People are solved in the order given; callers that want fairness by
/// order shuffle the roster before building the request.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use remote_roster::models::{ForbiddenDays, Person, RemotePolicy, RosterRequest, WeekPlan};
///
/// let people = Person::roster(["Ayoub", "Sara", "Omar"]);
/// let week = WeekPlan::new(&["Mon", "Tue", "Wed"], 2, None, &BTreeSet::new());
/// let request = RosterRequest::new(people, week)
///     .with_policy(RemotePolicy::default().with_quota(2))
///     .with_forbidden(ForbiddenDays::new().with(1, 0));
/// assert_eq!(request.required_slots(), 6);
/// assert_eq!(request.person_index("sara"), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRequest {
    /// Roster in solve order; `people[i].index == i`.
    pub people: Vec<Person>,
    /// Days and capacities.
    pub week: WeekPlan,
    /// Quota and streak rules.
    pub policy: RemotePolicy,
    /// Per-person forbidden days.
    pub forbidden: ForbiddenDays,
}

impl RosterRequest {
    /// Creates a request with the default policy and no forbidden days.
    pub fn new(people: Vec<Person>, week: WeekPlan) -> Self {
        Self {
            people,
            week,
            policy: RemotePolicy::default(),
            forbidden: ForbiddenDays::new(),
        }
    }

    /// Sets the policy.
    pub fn with_policy(mut self, policy: RemotePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Sets the forbidden days.
    pub fn with_forbidden(mut self, forbidden: ForbiddenDays) -> Self {
        self.forbidden = forbidden;
        self
    }

    /// Number of people.
    #[inline]
    pub fn person_count(&self) -> usize {
        self.people.len()
    }

    /// Number of days.
    #[inline]
    pub fn day_count(&self) -> usize {
        self.week.len()
    }

    /// Remote person-days the quota demands.
    pub fn required_slots(&self) -> u64 {
        self.people.len() as u64 * u64::from(self.policy.quota_per_person)
    }

    /// Finds a person by name, ignoring ASCII case.
    pub fn person_index(&self, name: &str) -> Option<usize> {
        let wanted = name.trim();
        self.people
            .iter()
            .find(|p| p.name.eq_ignore_ascii_case(wanted))
            .map(|p| p.index)
    }

    /// Names of the people in a day's remote set, in roster order.
    pub fn names_in(&self, mask: super::PersonMask) -> Vec<&str> {
        mask.iter()
            .filter_map(|i| self.people.get(i))
            .map(|p| p.name.as_str())
            .collect()
    }
}
