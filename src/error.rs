//! Crate error type.
//!
//! Infeasible constraints are not errors: they come back as
//! [`crate::solver::SolveOutcome::Infeasible`]. Errors here mean the input
//! could not be turned into a solvable request, or an I/O step failed.

use std::path::PathBuf;

use crate::validation::ValidationError;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, RosterError>;

/// Errors raised before or around a solve.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// The configuration or request is inconsistent.
    #[error("invalid configuration: {}", summarize(.0))]
    InvalidConfig(Vec<ValidationError>),

    /// Reading a file failed.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The TOML configuration could not be parsed.
    #[error("malformed configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// CSV export failed.
    #[error("CSV export failed: {0}")]
    Csv(#[from] csv::Error),
}

impl RosterError {
    /// Validation problems, if this is a configuration error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidConfig(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for RosterError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidConfig(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
