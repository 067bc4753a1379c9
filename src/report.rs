//! Plain-text rendering of plans, schedules and outcomes.

use crate::models::{RosterRequest, Schedule};
use crate::solver::{InfeasibleReason, SolveOutcome, SolveReport};

/// Summary of the planned week: extra-capacity day and holidays.
pub fn render_plan(request: &RosterRequest) -> String {
    let days = &request.week.days;
    let mut lines: Vec<String> = days
        .iter()
        .filter(|d| d.extra && !d.holiday)
        .map(|d| format!("{} has {} slots this week.\n", d.name, d.capacity))
        .collect();

    let holidays: Vec<&str> = days.iter().filter(|d| d.holiday).map(|d| d.name.as_str()).collect();
    if !holidays.is_empty() {
        lines.push(format!("Holidays: {}\n", holidays.join(", ")));
    }
    lines.concat()
}

/// One line per day listing who is remote, or `holiday`.
///
/// ```text
/// Weekly Schedule:
///  Lundi: holiday
///  Mardi: Sara, Omar, Hamza, Ayoub
/// ```
pub fn render_schedule(request: &RosterRequest, schedule: &Schedule) -> String {
    let lines = request.week.days.iter().map(|info| {
        let remote = if info.holiday {
            "holiday".to_string()
        } else {
            request.names_in(schedule.mask(info.index)).join(", ")
        };
        format!(" {}: {}\n", info.name, remote)
    });
    std::iter::once("Weekly Schedule:\n".to_string()).chain(lines).collect()
}

/// Schedule on success; otherwise a message telling the user what to change.
pub fn render_outcome(request: &RosterRequest, report: &SolveReport) -> String {
    match &report.outcome {
        SolveOutcome::Solved(schedule) => render_schedule(request, schedule),
        SolveOutcome::Infeasible(reason @ InfeasibleReason::CapacityMismatch { .. }) => format!(
            "No valid schedule: {reason}.\n\
             Adjust the quota, the number of people, base slots or holidays so they match.\n"
        ),
        SolveOutcome::Infeasible(reason @ InfeasibleReason::SearchExhausted) => format!(
            "No valid schedule: {reason}.\n\
             Relax forbidden days or the consecutive-day limit.\n"
        ),
        SolveOutcome::LimitReached { nodes } => format!(
            "Search stopped after {nodes} candidates without a schedule.\n\
             Raise node_limit or try another seed.\n"
        ),
    }
}
