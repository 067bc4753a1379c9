//! Input validation for rostering problems.
//!
//! Checks structural integrity of a week configuration or a resolved
//! request before any search starts. Detects:
//! - Duplicate person or day names
//! - Day names (holidays, extra day, vacation returns) that match no day
//! - Person names in forbidden-day maps that match nobody
//! - Rosters wider than a [`PersonMask`](crate::models::PersonMask)
//! - Person indices that do not match roster positions
//!
//! Every problem is collected; nothing stops at the first error.

use std::collections::HashSet;

use crate::config::WeekConfig;
use crate::models::{RosterRequest, MAX_PEOPLE};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Two people share a name.
    DuplicatePerson,
    /// Two days share a name.
    DuplicateDay,
    /// A day name or index refers to no day of the week.
    UnknownDay,
    /// A person name or index refers to nobody on the roster.
    UnknownPerson,
    /// More people than a mask can hold.
    TooManyPeople,
    /// The week has no days.
    EmptyWeek,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a named week configuration.
///
/// Checks:
/// 1. The week has at least one day
/// 2. No duplicate day names (case-insensitive)
/// 3. No duplicate person names (case-insensitive)
/// 4. At most [`MAX_PEOPLE`] people
/// 5. Holidays and the extra day name existing days
/// 6. Vacation returns and forbidden days name existing people and days
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_config(config: &WeekConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if config.days.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyWeek,
            "Week has no days",
        ));
    }

    check_duplicates(&config.days, ValidationErrorKind::DuplicateDay, "day", &mut errors);
    check_duplicates(&config.people, ValidationErrorKind::DuplicatePerson, "person", &mut errors);
    check_width(config.people.len(), &mut errors);

    let known_day = |name: &str| config.day_index(name).is_some();
    let known_person = |name: &str| {
        config
            .people
            .iter()
            .any(|p| p.eq_ignore_ascii_case(name.trim()))
    };

    for day in &config.holidays {
        if !known_day(day.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDay,
                format!("Unknown holiday day '{day}'"),
            ));
        }
    }

    if let Some(day) = &config.extra_day {
        if !known_day(day.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDay,
                format!("Unknown extra-capacity day '{day}'"),
            ));
        }
    }

    let named = config.vacation_returns.iter().chain(
        config
            .forbidden_days
            .iter()
            .flat_map(|(person, days)| days.iter().map(move |day| (person, day))),
    );
    for (person, day) in named {
        if !known_person(person.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownPerson,
                format!("Forbidden day set for unknown person '{person}'"),
            ));
        }
        if !known_day(day.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDay,
                format!("Unknown forbidden day '{day}' for '{person}'"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates a resolved request.
///
/// Checks:
/// 1. At most [`MAX_PEOPLE`] people
/// 2. `people[i].index == i` for every person
/// 3. No duplicate person names
/// 4. Forbidden-day entries refer to existing people and days
pub fn validate_request(request: &RosterRequest) -> ValidationResult {
    let mut errors = Vec::new();

    check_width(request.people.len(), &mut errors);

    for (position, person) in request.people.iter().enumerate() {
        if person.index != position {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownPerson,
                format!(
                    "Person '{}' has index {} but sits at position {}",
                    person.name, person.index, position
                ),
            ));
        }
    }

    let names: Vec<&str> = request.people.iter().map(|p| p.name.as_str()).collect();
    check_duplicates(&names, ValidationErrorKind::DuplicatePerson, "person", &mut errors);

    for (person, day) in request.forbidden.iter() {
        if person >= request.person_count() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownPerson,
                format!("Forbidden day set for unknown person index {person}"),
            ));
        }
        if day >= request.day_count() {
            errors.push(ValidationError::new(
                ValidationErrorKind::UnknownDay,
                format!("Forbidden day index {day} is outside the week"),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_width(people: usize, errors: &mut Vec<ValidationError>) {
    if people > MAX_PEOPLE {
        errors.push(ValidationError::new(
            ValidationErrorKind::TooManyPeople,
            format!("Roster has {people} people; at most {MAX_PEOPLE} are supported"),
        ));
    }
}

fn check_duplicates<S: AsRef<str>>(
    names: &[S],
    kind: ValidationErrorKind,
    what: &str,
    errors: &mut Vec<ValidationError>,
) {
    let mut seen = HashSet::new();
    for name in names {
        let name = name.as_ref();
        if !seen.insert(name.trim().to_ascii_lowercase()) {
            errors.push(ValidationError::new(
                kind.clone(),
                format!("Duplicate {what} '{name}'"),
            ));
        }
    }
}
