//! Per-day legality checks and the running per-person state.
//!
//! # Rules
//! A candidate remote set for day `d` is legal iff every person `p` in it:
//! - has a current streak below the consecutive-day limit,
//! - has fewer remote days than the quota,
//! - is not forbidden on `d`.
//!
//! People outside the candidate are never checked; not being remote
//! always resets their streak, which [`RunningState::advance`] applies.

use std::fmt;

use crate::models::{ForbiddenDays, PersonMask, RemotePolicy};

/// Which rule rejected a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Would extend a streak past the consecutive-day limit.
    StreakLimit,
    /// Person already reached the quota.
    QuotaReached,
    /// Day is forbidden for the person.
    ForbiddenDay,
}

/// First rule a candidate breaks, and for whom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rejection {
    /// Person index that failed the check.
    pub person: usize,
    /// Rule broken.
    pub reason: RejectReason,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = match self.reason {
            RejectReason::StreakLimit => "streak limit",
            RejectReason::QuotaReached => "quota reached",
            RejectReason::ForbiddenDay => "forbidden day",
        };
        write!(f, "person {}: {}", self.person, rule)
    }
}

/// Remote totals and current streaks after the most recently placed day.
///
/// Values are never shared between sibling branches: [`advance`](Self::advance)
/// returns a fresh copy for the next day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningState {
    counts: Vec<u32>,
    consecutive: Vec<u32>,
}

impl RunningState {
    /// State at the start of the week: nobody remote yet.
    pub fn new(people: usize) -> Self {
        Self {
            counts: vec![0; people],
            consecutive: vec![0; people],
        }
    }

    /// Cumulative remote days per person.
    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    /// Current unbroken remote streak per person.
    pub fn consecutive(&self) -> &[u32] {
        &self.consecutive
    }

    /// State after placing `mask` on the next day.
    ///
    /// People in the mask get +1 on both counters; everyone else has
    /// their streak reset.
    pub fn advance(&self, mask: PersonMask) -> Self {
        let mut next = self.clone();
        for p in 0..next.counts.len() {
            if mask.contains(p) {
                next.counts[p] += 1;
                next.consecutive[p] += 1;
            } else {
                next.consecutive[p] = 0;
            }
        }
        next
    }

    /// Whether every person's total equals `quota`.
    pub fn meets_quota(&self, quota: u32) -> bool {
        self.counts.iter().all(|&c| c == quota)
    }
}

/// Checks a candidate remote set for `day` against the running state.
///
/// Returns the first broken rule, scanning people in index order.
/// Never mutates anything.
pub fn check_candidate(
    day: usize,
    candidate: PersonMask,
    counts: &[u32],
    consecutive: &[u32],
    policy: &RemotePolicy,
    forbidden: &ForbiddenDays,
) -> Result<(), Rejection> {
    for person in candidate.iter() {
        let reason = if consecutive.get(person).copied().unwrap_or(0) >= policy.max_consecutive_days {
            Some(RejectReason::StreakLimit)
        } else if counts.get(person).copied().unwrap_or(0) >= policy.quota_per_person {
            Some(RejectReason::QuotaReached)
        } else if forbidden.is_forbidden(person, day) {
            Some(RejectReason::ForbiddenDay)
        } else {
            None
        };

        if let Some(reason) = reason {
            return Err(Rejection { person, reason });
        }
    }
    Ok(())
}

/// Boolean form of [`check_candidate`].
#[inline]
pub fn is_legal(
    day: usize,
    candidate: PersonMask,
    counts: &[u32],
    consecutive: &[u32],
    policy: &RemotePolicy,
    forbidden: &ForbiddenDays,
) -> bool {
    check_candidate(day, candidate, counts, consecutive, policy, forbidden).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask(people: &[usize]) -> PersonMask {
        people.iter().copied().collect()
    }

    #[test]
    fn test_fresh_state_accepts_anything() {
        let state = RunningState::new(4);
        let policy = RemotePolicy::default();
        let forbidden = ForbiddenDays::new();
        assert!(is_legal(0, mask(&[0, 1, 2, 3]), state.counts(), state.consecutive(), &policy, &forbidden));
    }

    #[test]
    fn test_streak_limit() {
        let state = RunningState::new(3)
            .advance(mask(&[0, 1]))
            .advance(mask(&[0]));
        let policy = RemotePolicy::default();
        let forbidden = ForbiddenDays::new();

        let err = check_candidate(2, mask(&[0]), state.counts(), state.consecutive(), &policy, &forbidden)
            .unwrap_err();
        assert_eq!(err, Rejection { person: 0, reason: RejectReason::StreakLimit });

        // Person 1 skipped day 1, so the streak was reset
        assert!(is_legal(2, mask(&[1, 2]), state.counts(), state.consecutive(), &policy, &forbidden));
    }

    #[test]
    fn test_quota_reached() {
        let policy = RemotePolicy::default().with_quota(1);
        let state = RunningState::new(2).advance(mask(&[1]));
        let err = check_candidate(1, mask(&[0, 1]), state.counts(), state.consecutive(), &policy, &ForbiddenDays::new())
            .unwrap_err();
        assert_eq!(err.person, 1);
        assert_eq!(err.reason, RejectReason::QuotaReached);
    }

    #[test]
    fn test_forbidden_day() {
        let state = RunningState::new(2);
        let policy = RemotePolicy::default();
        let forbidden = ForbiddenDays::new().with(1, 0);

        let err = check_candidate(0, mask(&[0, 1]), state.counts(), state.consecutive(), &policy, &forbidden)
            .unwrap_err();
        assert_eq!(err.reason, RejectReason::ForbiddenDay);
        assert!(is_legal(1, mask(&[0, 1]), state.counts(), state.consecutive(), &policy, &forbidden));
    }

    #[test]
    fn test_unset_people_not_checked() {
        let policy = RemotePolicy::default().with_quota(1);
        let state = RunningState::new(2).advance(mask(&[0]));
        let forbidden = ForbiddenDays::new().with(0, 1);
        // Person 0 is over quota and forbidden, but not in the candidate
        assert!(is_legal(1, mask(&[1]), state.counts(), state.consecutive(), &policy, &forbidden));
    }

    #[test]
    fn test_advance_resets_streak() {
        let state = RunningState::new(2)
            .advance(mask(&[0, 1]))
            .advance(mask(&[0]));
        assert_eq!(state.counts(), &[2, 1]);
        assert_eq!(state.consecutive(), &[2, 0]);
        assert!(!state.meets_quota(2));
        assert!(state.advance(mask(&[1])).meets_quota(2));
    }

    #[test]
    fn test_advance_leaves_parent_untouched() {
        let parent = RunningState::new(2).advance(mask(&[0]));
        let _left = parent.advance(mask(&[0]));
        let _right = parent.advance(mask(&[1]));
        assert_eq!(parent.counts(), &[1, 0]);
        assert_eq!(parent.consecutive(), &[1, 0]);
    }

    #[test]
    fn test_rejection_display() {
        let r = Rejection { person: 3, reason: RejectReason::QuotaReached };
        assert_eq!(r.to_string(), "person 3: quota reached");
    }
}
