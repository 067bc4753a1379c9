//! CSV export of a schedule.
//!
//! One column per day. The header holds [`Day::label`](crate::models::Day::label);
//! each column then lists that day's remote people top-down, independently
//! of the other columns. Short columns are padded with empty cells and
//! holiday columns stay empty.

use csv::WriterBuilder;
use std::fs::File;
use std::io;
use std::path::Path;
use tracing::debug;

use crate::error::Result;
use crate::models::{RosterRequest, Schedule};

/// Writes the schedule table to any writer.
pub fn write_csv<W: io::Write>(writer: W, request: &RosterRequest, schedule: &Schedule) -> Result<()> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    let header: Vec<String> = request.week.days.iter().map(|d| d.label()).collect();
    wtr.write_record(&header)?;

    let columns: Vec<Vec<&str>> = request
        .week
        .days
        .iter()
        .map(|day| {
            if day.holiday {
                Vec::new()
            } else {
                request.names_in(schedule.mask(day.index))
            }
        })
        .collect();
    let depth = columns.iter().map(Vec::len).max().unwrap_or(0);

    for row in 0..depth {
        let record: Vec<&str> = columns
            .iter()
            .map(|col| col.get(row).copied().unwrap_or(""))
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes the schedule table to a file, replacing it if present.
pub fn export_csv(path: impl AsRef<Path>, request: &RosterRequest, schedule: &Schedule) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_csv(file, request, schedule)?;
    debug!(path = %path.display(), "schedule exported");
    Ok(())
}
