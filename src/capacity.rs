//! Day capacity planning.
//!
//! Computes how many remote slots each day of the week offers.
//!
//! # Rules
//! 1. Every day starts at the base capacity.
//! 2. The designated extra-capacity day gets one more slot.
//! 3. Holidays are forced to zero, overriding rule 2.
//!
//! Indices are trusted here; name resolution and range checks happen in
//! [`crate::validation`] before a plan is built.

use std::collections::BTreeSet;

/// Plans remote slots per day.
///
/// # Arguments
/// * `num_days` - Length of the week.
/// * `base_slots` - Slots on an ordinary day.
/// * `extra_day` - Day index receiving one extra slot, if any.
/// * `holidays` - Day indices with zero capacity.
///
/// # Example
/// ```
/// use std::collections::BTreeSet;
/// use remote_roster::capacity::plan_slots;
///
/// let holidays = BTreeSet::from([0]);
/// assert_eq!(plan_slots(5, 4, Some(2), &holidays), vec![0, 4, 5, 4, 4]);
/// ```
pub fn plan_slots(
    num_days: usize,
    base_slots: u32,
    extra_day: Option<usize>,
    holidays: &BTreeSet<usize>,
) -> Vec<u32> {
    let mut slots = vec![base_slots; num_days];

    if let Some(slot) = extra_day.and_then(|d| slots.get_mut(d)) {
        *slot += 1;
    }

    for &day in holidays {
        if let Some(slot) = slots.get_mut(day) {
            *slot = 0;
        }
    }

    slots
}
