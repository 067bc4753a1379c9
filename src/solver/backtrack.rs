//! Randomized backtracking search.
//!
//! # Algorithm
//!
//! 1. Plan per-day capacities and enumerate each capacity's combinations
//!    once (days with equal capacity share a list).
//! 2. Walk days in order. A zero-capacity day records an empty set and
//!    moves on without touching anyone's counters.
//! 3. On other days, shuffle that day's combinations and try them in that
//!    order. Illegal candidates are skipped; a legal one advances the
//!    running state and recurses into the next day.
//! 4. After the last day, accept iff every person reached the quota
//!    exactly. The first accepted week ends the whole search.
//!
//! Sibling order is reshuffled every time a day is entered, so repeated
//! solves over the same input can return different schedules. A fixed
//! seed reproduces the same one.
//!
//! # Complexity
//! Worst case O(∏ C(n, capacity_d)) candidate trials; the optional node
//! limit bounds it.
//!
//! # Reference
//! Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach",
//! Ch. 6.3 (Backtracking Search for CSPs)

use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use tracing::{debug, info, instrument, trace};

use super::constraint::{check_candidate, RunningState};
use super::outcome::{InfeasibleReason, SearchStats, SolveOutcome, SolveReport};
use crate::combination::generate;
use crate::error::Result;
use crate::models::{PersonMask, RosterRequest, Schedule};
use crate::validation::validate_request;

/// Solver settings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum candidate trials before giving up (`None` = unbounded).
    pub node_limit: Option<u64>,
}

impl SolverConfig {
    /// Sets the node limit.
    pub fn with_node_limit(mut self, limit: u64) -> Self {
        self.node_limit = Some(limit);
        self
    }
}

/// Randomized backtracking solver for weekly remote rosters.
///
/// # Example
///
/// ```
/// use std::collections::BTreeSet;
/// use rand::SeedableRng;
/// use rand::rngs::SmallRng;
/// use remote_roster::models::{Person, RemotePolicy, RosterRequest, WeekPlan};
/// use remote_roster::solver::BacktrackingSolver;
///
/// let people = Person::roster(["Ayoub", "Sara", "Omar", "Hamza"]);
/// let week = WeekPlan::new(&["Mon", "Tue", "Wed", "Thu"], 2, None, &BTreeSet::new());
/// let request = RosterRequest::new(people, week)
///     .with_policy(RemotePolicy::default().with_quota(2));
///
/// let mut rng = SmallRng::seed_from_u64(1);
/// let report = BacktrackingSolver::new().solve(&request, &mut rng).unwrap();
/// let schedule = report.outcome.schedule().unwrap();
/// assert!((0..4).all(|p| schedule.remote_count(p) == 2));
/// ```
#[derive(Debug, Clone, Default)]
pub struct BacktrackingSolver {
    config: SolverConfig,
}

impl BacktrackingSolver {
    /// Creates an unbounded solver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a solver with the given settings.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Runs one search pass.
    ///
    /// Invalid requests fail with [`RosterError::InvalidConfig`](crate::error::RosterError)
    /// before any search. Infeasibility is a normal
    /// [`SolveOutcome::Infeasible`], never an error.
    #[instrument(
        name = "solve",
        skip_all,
        fields(people = request.person_count(), days = request.day_count())
    )]
    pub fn solve<R: Rng + ?Sized>(&self, request: &RosterRequest, rng: &mut R) -> Result<SolveReport> {
        validate_request(request)?;

        let required = request.required_slots();
        let available = request.week.total_slots();
        debug!(
            slots = ?request.week.slots(),
            quota = request.policy.quota_per_person,
            max_consecutive = request.policy.max_consecutive_days,
            forbidden = request.forbidden.iter().count(),
            "planned week"
        );

        if required != available {
            info!(required, available, "capacity cannot match quota");
            return Ok(SolveReport {
                outcome: SolveOutcome::Infeasible(InfeasibleReason::CapacityMismatch {
                    required,
                    available,
                }),
                stats: SearchStats::default(),
            });
        }

        let n = request.person_count();
        let mut by_capacity: BTreeMap<u32, Vec<PersonMask>> = BTreeMap::new();
        for day in &request.week.days {
            if !day.is_closed() {
                by_capacity
                    .entry(day.capacity)
                    .or_insert_with(|| generate(n, day.capacity as usize));
            }
        }
        let choices: Vec<&[PersonMask]> = request
            .week
            .days
            .iter()
            .map(|day| by_capacity.get(&day.capacity).map_or(&[][..], Vec::as_slice))
            .collect();

        let mut search = Search {
            request,
            choices,
            rng,
            node_limit: self.config.node_limit,
            schedule: vec![PersonMask::EMPTY; request.day_count()],
            stats: SearchStats::default(),
        };
        let step = search.visit(0, &RunningState::new(n));
        let stats = search.stats;

        let outcome = match step {
            Step::Accepted => SolveOutcome::Solved(Schedule::from_masks(search.schedule)),
            Step::Exhausted => SolveOutcome::Infeasible(InfeasibleReason::SearchExhausted),
            Step::Stopped => SolveOutcome::LimitReached {
                nodes: stats.candidates_tried,
            },
        };

        match &outcome {
            SolveOutcome::Solved(_) => info!(tried = stats.candidates_tried, "schedule found"),
            SolveOutcome::Infeasible(_) => info!(tried = stats.candidates_tried, "search exhausted"),
            SolveOutcome::LimitReached { nodes } => info!(nodes, "node limit reached"),
        }

        Ok(SolveReport { outcome, stats })
    }
}

enum Step {
    Accepted,
    Exhausted,
    Stopped,
}

struct Search<'a, R: ?Sized> {
    request: &'a RosterRequest,
    choices: Vec<&'a [PersonMask]>,
    rng: &'a mut R,
    node_limit: Option<u64>,
    schedule: Vec<PersonMask>,
    stats: SearchStats,
}

impl<R: Rng + ?Sized> Search<'_, R> {
    fn visit(&mut self, day: usize, state: &RunningState) -> Step {
        if day == self.schedule.len() {
            if state.meets_quota(self.request.policy.quota_per_person) {
                return Step::Accepted;
            }
            self.stats.dead_ends += 1;
            return Step::Exhausted;
        }

        self.stats.days_visited += 1;

        if self.request.week.capacity(day) == 0 {
            self.schedule[day] = PersonMask::EMPTY;
            return self.visit(day + 1, state);
        }

        let mut order = self.choices[day].to_vec();
        order.shuffle(&mut *self.rng);
        trace!(day, candidates = order.len(), "entering day");

        for candidate in order {
            if self
                .node_limit
                .is_some_and(|limit| self.stats.candidates_tried >= limit)
            {
                return Step::Stopped;
            }
            self.stats.candidates_tried += 1;

            if let Err(rejection) = check_candidate(
                day,
                candidate,
                state.counts(),
                state.consecutive(),
                &self.request.policy,
                &self.request.forbidden,
            ) {
                self.stats.candidates_rejected += 1;
                trace!(day, mask = candidate.bits(), %rejection, "rejected");
                continue;
            }

            self.schedule[day] = candidate;
            match self.visit(day + 1, &state.advance(candidate)) {
                Step::Exhausted => continue,
                done => return done,
            }
        }

        Step::Exhausted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::audit_schedule;
    use crate::config::WeekConfig;
    use crate::error::RosterError;
    use crate::models::{ForbiddenDays, Person, RemotePolicy, WeekPlan};
    use proptest::prelude::*;
    use rand::rngs::SmallRng;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    const PEOPLE: [&str; 7] = ["Oussama", "Outman", "Ayoub", "Omar", "Yamin", "Sara", "Hamza"];
    const DAYS: [&str; 5] = ["Lundi", "Mardi", "Mercredi", "Jeudi", "Vendredi"];

    fn reference_request(holidays: &[usize]) -> RosterRequest {
        let holidays: BTreeSet<usize> = holidays.iter().copied().collect();
        let week = WeekPlan::new(&DAYS, 4, Some(2), &holidays);
        RosterRequest::new(Person::roster(PEOPLE), week)
    }

    fn solve_seeded(request: &RosterRequest, seed: u64) -> SolveReport {
        let mut rng = SmallRng::seed_from_u64(seed);
        BacktrackingSolver::new().solve(request, &mut rng).unwrap()
    }

    fn assert_valid(request: &RosterRequest, schedule: &Schedule) {
        let violations = audit_schedule(request, schedule);
        assert!(violations.is_empty(), "violations: {violations:?}");
    }

    #[test]
    fn test_reference_week_solves() {
        let request = reference_request(&[]);
        let report = solve_seeded(&request, 42);
        let schedule = report.outcome.schedule().expect("reference week is feasible");

        assert_eq!(schedule.len(), 5);
        assert_eq!(schedule.mask(2).count(), 5);
        for day in [0, 1, 3, 4] {
            assert_eq!(schedule.mask(day).count(), 4);
        }
        for p in 0..7 {
            assert_eq!(schedule.remote_count(p), 3);
            assert!(schedule.longest_streak(p) <= 2);
        }
        assert_valid(&request, schedule);
        assert!(report.stats.candidates_tried > 0);
    }

    #[test]
    fn test_reference_week_with_holiday_is_infeasible() {
        // 0 + 4 + 5 + 4 + 4 = 17 slots against 7 × 3 = 21 remote days
        let report = solve_seeded(&reference_request(&[0]), 1);
        assert_eq!(
            report.outcome,
            SolveOutcome::Infeasible(InfeasibleReason::CapacityMismatch {
                required: 21,
                available: 17
            })
        );
        assert_eq!(report.stats, SearchStats::default());
    }

    #[test]
    fn test_forbidden_day_honored() {
        let request = reference_request(&[]).with_forbidden(ForbiddenDays::new().with(0, 0));
        for seed in 0..10 {
            let report = solve_seeded(&request, seed);
            let schedule = report.outcome.schedule().expect("feasible");
            assert!(!schedule.is_remote(0, 0));
            assert_valid(&request, schedule);
        }
    }

    #[test]
    fn test_quota_above_capacity_is_infeasible() {
        let request = reference_request(&[0]).with_policy(RemotePolicy::default().with_quota(4));
        let report = solve_seeded(&request, 3);
        assert!(matches!(
            report.outcome,
            SolveOutcome::Infeasible(InfeasibleReason::CapacityMismatch {
                required: 28,
                available: 17
            })
        ));
    }

    #[test]
    fn test_all_holidays() {
        let all: Vec<usize> = (0..5).collect();

        let report = solve_seeded(&reference_request(&all), 5);
        assert!(!report.outcome.is_solved());

        let request = reference_request(&all).with_policy(RemotePolicy::default().with_quota(0));
        let report = solve_seeded(&request, 5);
        let schedule = report.outcome.schedule().expect("quota 0 fits an empty week");
        assert!(schedule.days.iter().all(|m| m.is_empty()));
        assert_eq!(report.stats.days_visited, 5);
    }

    #[test]
    fn test_holiday_overriding_extra_day() {
        // 8 people × 2 = 16 = 4 + 4 + 0 + 4 + 4
        let names: Vec<String> = (0..8).map(|i| format!("P{i}")).collect();
        let week = WeekPlan::new(&DAYS, 4, Some(2), &BTreeSet::from([2]));
        let request = RosterRequest::new(Person::roster(names), week)
            .with_policy(RemotePolicy::default().with_quota(2));

        let report = solve_seeded(&request, 11);
        let schedule = report.outcome.schedule().expect("feasible");
        assert!(schedule.mask(2).is_empty());
        assert_valid(&request, schedule);
    }

    #[test]
    fn test_search_exhausted() {
        // Capacities add up, but the streak limit makes it impossible:
        // each of 2 people must work all 3 days.
        let week = WeekPlan::new(&["A", "B", "C"], 2, None, &BTreeSet::new());
        let request = RosterRequest::new(Person::roster(["X", "Y"]), week);
        let report = solve_seeded(&request, 9);
        assert_eq!(report.outcome, SolveOutcome::Infeasible(InfeasibleReason::SearchExhausted));
        assert!(report.stats.candidates_rejected > 0);
    }

    #[test]
    fn test_streak_carries_across_holiday() {
        // Holiday on day 1 leaves streaks untouched, so X cannot take
        // days 0, 2 and 3 with a limit of 2.
        let week = WeekPlan::new(&["A", "B", "C", "D"], 1, None, &BTreeSet::from([1]));
        let request = RosterRequest::new(Person::roster(["X"]), week);
        let report = solve_seeded(&request, 0);
        assert_eq!(report.outcome, SolveOutcome::Infeasible(InfeasibleReason::SearchExhausted));
    }

    #[test]
    fn test_capacity_above_headcount() {
        // One day needs 3 people out of 2; the other day balances the sum
        let week = WeekPlan::new(&["A", "B"], 3, None, &BTreeSet::from([1]));
        let request = RosterRequest::new(Person::roster(["X", "Y", "Z"]), week)
            .with_policy(RemotePolicy::default().with_quota(1));
        assert!(solve_seeded(&request, 2).outcome.is_solved());

        let week = WeekPlan::new(&["A", "B"], 3, None, &BTreeSet::from([1]));
        let request = RosterRequest::new(Person::roster(["X"]), week)
            .with_policy(RemotePolicy::default().with_quota(3));
        assert_eq!(
            solve_seeded(&request, 2).outcome,
            SolveOutcome::Infeasible(InfeasibleReason::SearchExhausted)
        );
    }

    #[test]
    fn test_node_limit() {
        let request = reference_request(&[]);
        let solver = BacktrackingSolver::with_config(SolverConfig::default().with_node_limit(1));
        let mut rng = SmallRng::seed_from_u64(4);
        let report = solver.solve(&request, &mut rng).unwrap();
        assert_eq!(report.outcome, SolveOutcome::LimitReached { nodes: 1 });
        assert_eq!(report.stats.candidates_tried, 1);
    }

    #[test]
    fn test_deterministic_under_seed() {
        let request = reference_request(&[]);
        let a = solve_seeded(&request, 2024);
        let b = solve_seeded(&request, 2024);
        assert_eq!(a, b);
    }

    #[test]
    fn test_different_seeds_vary() {
        let request = reference_request(&[]);
        let schedules: BTreeSet<Vec<u64>> = (0..20)
            .filter_map(|seed| solve_seeded(&request, seed).outcome.into_schedule())
            .map(|s| s.days.iter().map(|m| m.bits()).collect())
            .collect();
        assert!(schedules.len() > 1);
    }

    #[test]
    fn test_invalid_request_fails_fast() {
        let request = reference_request(&[]).with_forbidden(ForbiddenDays::new().with(0, 9));
        let mut rng = SmallRng::seed_from_u64(0);
        let err = BacktrackingSolver::new().solve(&request, &mut rng).unwrap_err();
        assert!(matches!(err, RosterError::InvalidConfig(_)));
    }

    #[test]
    fn test_from_config_with_vacation_return() {
        let config = WeekConfig::default().with_vacation_return("Oussama", "Lundi");
        let mut rng = SmallRng::seed_from_u64(77);
        let request = config.build_request(&mut rng).unwrap();
        let oussama = request.person_index("Oussama").unwrap();

        let report = BacktrackingSolver::new().solve(&request, &mut rng).unwrap();
        let schedule = report.outcome.schedule().expect("feasible");
        assert!(!schedule.is_remote(oussama, 0));
        assert_valid(&request, schedule);
    }

    #[test]
    fn test_empty_roster_and_zero_quota() {
        let week = WeekPlan::new(&["A"], 0, None, &BTreeSet::new());
        let request = RosterRequest::new(Vec::new(), week);
        let report = solve_seeded(&request, 0);
        assert_eq!(report.outcome, SolveOutcome::Solved(Schedule::from_masks(vec![PersonMask::EMPTY])));
    }

    /// Week over `DAYS` whose capacities add up to `people × quota`.
    ///
    /// The remainder goes to days 0, 2, 4, 1, 3 in that order. Taking
    /// `quota` consecutive entries of that cycle per person never puts
    /// anyone on three adjacent days, so the week is feasible when
    /// nothing is forbidden.
    fn balanced_request(people: usize, quota: u32) -> RosterRequest {
        const SPREAD: [usize; 5] = [0, 2, 4, 1, 3];
        let total = people as u32 * quota;
        let mut week = WeekPlan::new(&DAYS, total / 5, None, &BTreeSet::new());
        for &day in SPREAD.iter().take((total % 5) as usize) {
            week.days[day].capacity += 1;
        }
        RosterRequest::new(Person::roster((0..people).map(|i| format!("P{i}"))), week)
            .with_policy(RemotePolicy::default().with_quota(quota))
    }

    #[test]
    fn test_balanced_weeks_all_solve() {
        for people in 2..=6 {
            for quota in 1..=3 {
                let request = balanced_request(people, quota);
                assert_eq!(request.week.total_slots(), request.required_slots());
                let report = solve_seeded(&request, 1);
                let schedule = report
                    .outcome
                    .schedule()
                    .unwrap_or_else(|| panic!("{people} people, quota {quota}: {:?}", report.outcome));
                assert_valid(&request, schedule);
            }
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(48))]

        #[test]
        fn prop_accepted_schedules_are_valid(
            seed in any::<u64>(),
            people in 2usize..=6,
            quota in 1u32..=3,
            forbidden in proptest::option::of((0usize..6, 0usize..5)),
        ) {
            let forbidden = forbidden.filter(|&(person, _)| person < people);
            let mut request = balanced_request(people, quota);
            if let Some((person, day)) = forbidden {
                request = request.with_forbidden(ForbiddenDays::new().with(person, day));
            }

            let report = solve_seeded(&request, seed);
            match report.outcome {
                SolveOutcome::Solved(schedule) => {
                    prop_assert!(audit_schedule(&request, &schedule).is_empty());
                    if let Some((person, day)) = forbidden {
                        prop_assert!(!schedule.is_remote(person, day));
                    }
                }
                SolveOutcome::Infeasible(InfeasibleReason::SearchExhausted) => {
                    prop_assert!(forbidden.is_some(), "unconstrained balanced week must solve");
                }
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
        }
    }
}
