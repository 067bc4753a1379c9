//! Combination enumeration over person indices.
//!
//! Lists every way to pick exactly `k` people out of `n` as a
//! [`PersonMask`].
//!
//! # Algorithm
//! Recursive choose-or-skip over positions `0..n`, picking positions in
//! increasing order so that no set is produced twice. A branch stops as
//! soon as fewer positions remain than people still to pick.
//!
//! # Complexity
//! O(C(n, k)) masks, each built in O(k).
//!
//! # Reference
//! Knuth (2011), "The Art of Computer Programming", Vol. 4A, §7.2.1.3

use crate::models::{PersonMask, MAX_PEOPLE};

/// All masks over `n` bits with exactly `k` bits set.
///
/// `k == 0` yields the single empty mask; `k > n` yields nothing. The
/// result is in lexicographic order of the chosen positions; callers
/// that need random order shuffle it.
///
/// # Panics
/// Panics if `n > MAX_PEOPLE`.
///
/// # Example
/// ```
/// use remote_roster::combination::generate;
///
/// let masks = generate(4, 2);
/// assert_eq!(masks.len(), 6);
/// assert!(masks.iter().all(|m| m.count() == 2));
/// ```
pub fn generate(n: usize, k: usize) -> Vec<PersonMask> {
    assert!(n <= MAX_PEOPLE, "cannot enumerate over {n} people");

    if k > n {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(usize::try_from(binomial(n, k)).unwrap_or(0));
    combine(0, PersonMask::EMPTY, n, k, &mut out);
    out
}

fn combine(start: usize, mask: PersonMask, n: usize, k: usize, out: &mut Vec<PersonMask>) {
    if k == 0 {
        out.push(mask);
        return;
    }
    for i in start..=(n - k) {
        combine(i + 1, mask.with(i), n, k - 1, out);
    }
}

/// Binomial coefficient C(n, k), saturating at `u64::MAX`.
pub fn binomial(n: usize, k: usize) -> u64 {
    if k > n {
        return 0;
    }
    let k = k.min(n - k) as u64;
    let n = n as u64;
    let mut acc: u128 = 1;
    for i in 0..k {
        acc = acc * u128::from(n - i) / u128::from(i + 1);
        if acc > u128::from(u64::MAX) {
            return u64::MAX;
        }
    }
    acc as u64
}
