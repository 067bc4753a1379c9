//! Weekly remote-work rostering.
//!
//! Decides which people work remotely on which day of a week so that each
//! day's remote capacity is filled exactly, everyone gets the same number
//! of remote days, nobody is remote too many days in a row, and vacation
//! returns or other forbidden days are respected.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Person`, `PersonMask`, `WeekPlan`, `Day`,
//!   `RemotePolicy`, `ForbiddenDays`, `RosterRequest`, `Schedule`, `Violation`
//! - **`capacity`**: Per-day slot planning (base, extra day, holidays)
//! - **`combination`**: Enumeration of fixed-size remote sets as bitmasks
//! - **`solver`**: Randomized backtracking search and its outcomes
//! - **`audit`**: Independent re-check of a finished schedule
//! - **`config`**: Named week configuration loaded from TOML
//! - **`validation`**: Input integrity checks (duplicate and unknown names)
//! - **`report`**, **`export`**: Text report and CSV table
//!
//! # Example
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::SmallRng;
//! use remote_roster::config::WeekConfig;
//! use remote_roster::solver::BacktrackingSolver;
//!
//! let mut rng = SmallRng::seed_from_u64(7);
//! let request = WeekConfig::default().build_request(&mut rng).unwrap();
//! let report = BacktrackingSolver::new().solve(&request, &mut rng).unwrap();
//! assert!(report.outcome.is_solved());
//! ```
//!
//! # References
//!
//! - Russell & Norvig (2020), "Artificial Intelligence: A Modern Approach", Ch. 6
//! - Burke et al. (2004), "The State of the Art of Nurse Rostering"

pub mod audit;
pub mod capacity;
pub mod combination;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod report;
pub mod solver;
pub mod validation;

pub use error::{Result, RosterError};
