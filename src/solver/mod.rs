//! Weekly remote-day solver.
//!
//! Finds one assignment of people to remote days such that every day is
//! filled to its capacity, everyone reaches the quota exactly, nobody is
//! remote longer than the streak limit, and forbidden days stay free.
//!
//! # Algorithm
//!
//! `BacktrackingSolver` runs a depth-first search over days. Each day's
//! candidates are all remote sets of the day's capacity, tried in a freshly
//! shuffled order. A capacity pre-check rejects weeks whose total slots
//! cannot match `people × quota` before any search.
//!
//! # Outcomes
//!
//! Infeasibility and node-limit stops are ordinary [`SolveOutcome`] values.
//! Only malformed requests are errors.
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Dechter (2003), "Constraint Processing", Ch. 5

mod backtrack;
mod constraint;
mod outcome;

pub use backtrack::{BacktrackingSolver, SolverConfig};
pub use constraint::{check_candidate, is_legal, RejectReason, Rejection, RunningState};
pub use outcome::{InfeasibleReason, SearchStats, SolveOutcome, SolveReport};
