//! Week configuration loaded from TOML.
//!
//! Everything is given by name (people, days, holidays, vacation returns)
//! and resolved to indices by [`WeekConfig::build_request`]. Unknown or
//! duplicate names are reported by [`crate::validation::validate_config`]
//! before any search starts.
//!
//! # Example file
//! ```toml
//! people = ["Oussama", "Outman", "Ayoub", "Omar", "Yamin", "Sara", "Hamza"]
//! days = ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi"]
//! base_slots = 4
//! extra_day = "Mercredi"
//! holidays = []
//! quota_per_person = 3
//! max_consecutive_days = 2
//!
//! [vacation_returns]
//! Sara = "Jeudi"
//! ```

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use crate::error::{Result, RosterError};
use crate::models::{day_index, ForbiddenDays, Person, RemotePolicy, RosterRequest, WeekPlan};
use crate::validation::validate_config;

/// Named description of one week to roster.
///
/// Unknown keys are rejected so that a misspelled setting cannot fall back
/// to its default unnoticed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WeekConfig {
    /// Roster member names.
    pub people: Vec<String>,
    /// Day names in week order.
    pub days: Vec<String>,
    /// Remote slots on an ordinary day.
    pub base_slots: u32,
    /// Day receiving one extra slot.
    pub extra_day: Option<String>,
    /// Days with zero capacity.
    pub holidays: Vec<String>,
    /// Person → first day back from vacation (not remote that day).
    pub vacation_returns: BTreeMap<String, String>,
    /// Person → further days on which they must not be remote.
    pub forbidden_days: BTreeMap<String, Vec<String>>,
    /// Exact number of remote days per person.
    pub quota_per_person: u32,
    /// Longest allowed run of consecutive remote days.
    pub max_consecutive_days: u32,
    /// Shuffle the roster before solving.
    pub shuffle_people: bool,
    /// Stop the search after this many candidate trials.
    pub node_limit: Option<u64>,
}

impl Default for WeekConfig {
    fn default() -> Self {
        Self {
            people: ["Oussama", "Outman", "Ayoub", "Omar", "Yamin", "Sara", "Hamza"]
                .map(String::from)
                .to_vec(),
            days: ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi"]
                .map(String::from)
                .to_vec(),
            base_slots: 4,
            extra_day: Some("Mercredi".to_string()),
            holidays: Vec::new(),
            vacation_returns: BTreeMap::new(),
            forbidden_days: BTreeMap::new(),
            quota_per_person: RemotePolicy::default().quota_per_person,
            max_consecutive_days: RemotePolicy::default().max_consecutive_days,
            shuffle_people: true,
            node_limit: None,
        }
    }
}

impl WeekConfig {
    /// Parses a TOML document. Missing keys take their default.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| RosterError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Marks a day as a holiday.
    pub fn with_holiday(mut self, day: impl Into<String>) -> Self {
        self.holidays.push(day.into());
        self
    }

    /// Records a vacation return day for a person.
    pub fn with_vacation_return(mut self, person: impl Into<String>, day: impl Into<String>) -> Self {
        self.vacation_returns.insert(person.into(), day.into());
        self
    }

    /// Sets quota and streak limit from a policy.
    pub fn with_policy(mut self, policy: RemotePolicy) -> Self {
        self.quota_per_person = policy.quota_per_person;
        self.max_consecutive_days = policy.max_consecutive_days;
        self
    }

    /// Quota and streak rules as a [`RemotePolicy`].
    pub fn policy(&self) -> RemotePolicy {
        RemotePolicy::default()
            .with_quota(self.quota_per_person)
            .with_max_consecutive(self.max_consecutive_days)
    }

    /// Validates and resolves names, shuffling the roster with `rng` when
    /// `shuffle_people` is set.
    pub fn build_request<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RosterRequest> {
        validate_config(self)?;
        let mut names = self.people.clone();
        if self.shuffle_people {
            names.shuffle(rng);
        }
        Ok(self.resolve(names))
    }

    /// Validates and resolves names, keeping the configured roster order.
    pub fn build_request_ordered(&self) -> Result<RosterRequest> {
        validate_config(self)?;
        Ok(self.resolve(self.people.clone()))
    }

    /// Day index for a name, ignoring ASCII case.
    pub fn day_index(&self, name: &str) -> Option<usize> {
        day_index(&self.days, name, String::as_str)
    }

    /// Assumes `validate_config` passed.
    fn resolve(&self, names: Vec<String>) -> RosterRequest {
        let holidays: BTreeSet<usize> = self
            .holidays
            .iter()
            .filter_map(|d| self.day_index(d))
            .collect();
        let extra_day = self.extra_day.as_deref().and_then(|d| self.day_index(d));
        let week = WeekPlan::new(&self.days, self.base_slots, extra_day, &holidays);

        let people = Person::roster(names);
        let person_index = |name: &str| {
            people
                .iter()
                .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
                .map(|p| p.index)
        };

        let mut forbidden = ForbiddenDays::new();
        let named = self
            .vacation_returns
            .iter()
            .chain(
                self.forbidden_days
                    .iter()
                    .flat_map(|(person, days)| days.iter().map(move |day| (person, day))),
            );
        for (person, day) in named {
            if let (Some(p), Some(d)) = (person_index(person.as_str()), self.day_index(day)) {
                forbidden.insert(p, d);
            }
        }

        RosterRequest::new(people, week)
            .with_policy(self.policy())
            .with_forbidden(forbidden)
    }
}
