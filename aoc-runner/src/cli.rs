//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Advent of Code day runner
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run Advent of Code solvers", version)]
pub struct Args {
    /// Year to run (defaults to the current or most recent event)
    #[arg(short, long)]
    pub year: Option<u16>,

    /// Last day to run (defaults to today in December, otherwise 25)
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=25))]
    pub day: Option<u8>,

    /// First day to run
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=25), conflicts_with = "only")]
    pub from: Option<u8>,

    /// Run only the selected day instead of every day up to it
    #[arg(short, long)]
    pub only: bool,

    /// Sample input file under input/{year}/sample/ (single-day runs only)
    #[arg(short, long)]
    pub sample: Option<String>,

    /// Discard solver display output
    #[arg(short, long)]
    pub quiet: bool,

    /// Directory holding input/ and results/
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// List registered solvers for the year and exit
    #[arg(long)]
    pub list: bool,
}
