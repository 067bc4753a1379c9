//! Schedule audit.
//!
//! Re-checks a finished schedule against every rostering rule,
//! independently of how it was produced. The solver never returns a
//! schedule that fails the audit; the audit exists for schedules coming
//! from elsewhere (files, hand edits) and as a check before export.
//!
//! # Checks
//!
//! | Rule | Violation |
//! |------|-----------|
//! | One mask per day | `LengthMismatch` |
//! | Masks only use roster indices | `UnknownPerson` |
//! | Holidays are empty | `HolidayAssigned` |
//! | Headcount equals capacity | `CapacityMismatch` |
//! | Total equals quota | `QuotaMismatch` |
//! | No run longer than the limit | `StreakTooLong` |
//! | Forbidden days unused | `ForbiddenDay` |

use crate::models::{RosterRequest, Schedule, Violation, ViolationType};

/// Lists every rule the schedule breaks. Empty means the schedule is valid.
pub fn audit_schedule(request: &RosterRequest, schedule: &Schedule) -> Vec<Violation> {
    let mut violations = Vec::new();
    let n = request.person_count();

    if schedule.len() != request.day_count() {
        violations.push(Violation::new(
            ViolationType::LengthMismatch,
            "schedule",
            None,
            format!(
                "Schedule covers {} days, week has {}",
                schedule.len(),
                request.day_count()
            ),
        ));
    }

    for (day, mask) in schedule.days.iter().enumerate() {
        let Some(info) = request.week.days.get(day) else {
            continue;
        };

        if mask.exceeds_width(n) {
            violations.push(Violation::new(
                ViolationType::UnknownPerson,
                &info.name,
                Some(day),
                format!("{} assigns people outside the roster of {n}", info.name),
            ));
        }

        if info.holiday && !mask.is_empty() {
            violations.push(Violation::new(
                ViolationType::HolidayAssigned,
                &info.name,
                Some(day),
                format!("{} is a holiday but has {} remote", info.name, mask.count()),
            ));
        } else if mask.count() != info.capacity {
            violations.push(Violation::new(
                ViolationType::CapacityMismatch,
                &info.name,
                Some(day),
                format!(
                    "{} has {} remote, capacity is {}",
                    info.name,
                    mask.count(),
                    info.capacity
                ),
            ));
        }

        let forbidden = request.forbidden.people_on(day);
        for person in forbidden.iter().filter(|&p| schedule.is_remote(p, day)) {
            let name = request.people.get(person).map_or("?", |p| p.name.as_str());
            violations.push(Violation::new(
                ViolationType::ForbiddenDay,
                name,
                Some(day),
                format!("{} is remote on forbidden day {}", name, info.name),
            ));
        }
    }

    let policy = &request.policy;
    for person in &request.people {
        let total = schedule.remote_count(person.index);
        if total != policy.quota_per_person {
            violations.push(Violation::new(
                ViolationType::QuotaMismatch,
                &person.name,
                None,
                format!(
                    "{} has {} remote days, quota is {}",
                    person.name, total, policy.quota_per_person
                ),
            ));
        }

        let streak = schedule.longest_streak(person.index);
        if streak > policy.max_consecutive_days {
            violations.push(Violation::new(
                ViolationType::StreakTooLong,
                &person.name,
                None,
                format!(
                    "{} is remote {} days in a row, limit is {}",
                    person.name, streak, policy.max_consecutive_days
                ),
            ));
        }
    }

    violations
}
