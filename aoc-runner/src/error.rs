//! Error types for the runner

use aoc_http_client::AocError;
use aoc_solver::SolverError;
use std::path::PathBuf;
use thiserror::Error;

/// Main CLI error type
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid or inconsistent configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two solvers claim the same day
    #[error("Registration error: {0}")]
    Registration(#[from] aoc_solver::RegistrationError),

    /// HTTP client could not be created
    #[error("HTTP client error: {0}")]
    Http(#[from] AocError),

    /// The run itself aborted
    #[error(transparent)]
    Run(#[from] RunError),
}

/// Errors fetching a day's puzzle input
#[derive(Error, Debug)]
pub enum InputError {
    /// No cached input and no session credential to download it with
    #[error(
        "No cached input for {year} day {day} and no session configured; set AOC_SESSION (or add it to .env)"
    )]
    MissingSession { year: u16, day: u8 },

    /// Remote fetch failed (bad status or connection failure)
    #[error("Input fetch failed for {year}/{day}: {source}")]
    Network {
        year: u16,
        day: u8,
        #[source]
        source: AocError,
    },

    /// Local filesystem problem
    #[error("Cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl InputError {
    /// Whether no later day could succeed either
    pub fn is_fatal(&self) -> bool {
        matches!(self, InputError::MissingSession { .. })
    }
}

/// Why a single day could not complete
#[derive(Error, Debug)]
pub enum DayError {
    /// Input could not be obtained
    #[error(transparent)]
    Input(#[from] InputError),

    /// Solver missing, or failed while preparing or solving
    #[error(transparent)]
    Solver(#[from] SolverError),
}

/// Errors that abort a whole run
#[derive(Error, Debug)]
pub enum RunError {
    /// Configuration problem no later day could recover from
    #[error("Configuration error: {0}")]
    Configuration(#[source] InputError),

    /// The report could not be written
    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),
}
