//! Rostering domain models.
//!
//! Provides the data types for describing one week to roster and the
//! resulting schedule.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Person` | Roster member with a stable bit index |
//! | `PersonMask` | Set of people remote on one day |
//! | `Day` / `WeekPlan` | Days of the week and their remote capacity |
//! | `RemotePolicy` | Per-person quota and consecutive-day limit |
//! | `ForbiddenDays` | Days a person may not be remote |
//! | `RosterRequest` | Complete solve input |
//! | `Schedule` | One remote set per day |

mod person;
mod policy;
mod request;
mod schedule;
mod week;

pub use person::{Person, PersonMask, MAX_PEOPLE};
pub use policy::{ForbiddenDays, RemotePolicy};
pub use request::RosterRequest;
pub use schedule::{Schedule, Violation, ViolationType};
pub use week::{Day, WeekPlan};

pub(crate) use week::day_index;
