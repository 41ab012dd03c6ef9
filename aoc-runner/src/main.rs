//! AOC runner - runs Advent of Code day solvers, caches input and records answers

mod cli;
mod config;
mod error;
mod input;
mod ledger;
mod logging;
mod output;
mod runner;

// Import aoc-solutions to link the solver plugins
use aoc_solutions as _;

use aoc_http_client::AocClient;
use aoc_solver::{RegistryBuilder, SolverRegistry};
use clap::Parser;
use cli::Args;
use config::Config;
use input::{InputCache, InputProvider};
use ledger::ResultLedger;
use runner::{RunOptions, Runner};
use tracing::warn;

fn main() {
    logging::init();
    if let Err(e) = tolerate_missing(dotenvy::dotenv()) {
        warn!(error = %e, "could not load .env");
    }

    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), error::CliError> {
    let today = chrono::Local::now().date_naive();
    let config = Config::from_args(args, today, |key| std::env::var(key).ok())?;

    let registry = RegistryBuilder::new().register_all_plugins()?.build();

    if config.list {
        print_registered(&registry, config.year);
        return Ok(());
    }

    let inputs = InputProvider::new(
        InputCache::new(config.input_dir()),
        AocClient::new()?,
        config.session.clone(),
    );
    let ledger = ResultLedger::new(config.results_dir());
    let runner = Runner::new(
        registry,
        inputs,
        ledger,
        RunOptions {
            sample: config.sample.clone(),
            display_output: config.display_output,
        },
    );

    let stdout = std::io::stdout();
    runner.run(
        config.year,
        config.start_day,
        config.end_day,
        &mut stdout.lock(),
    )?;

    Ok(())
}

fn print_registered(registry: &SolverRegistry, year: u16) {
    let days = registry.days(year);
    if days.is_empty() {
        println!("No solvers registered for {}.", year);
        return;
    }
    println!("Solvers registered for {}:", year);
    for day in days {
        println!("  - {}/day{:02}", year, day);
    }
}

/// A missing `.env` is fine; the session may come from the real environment
fn tolerate_missing<T>(loaded: Result<T, dotenvy::Error>) -> Result<(), dotenvy::Error> {
    match loaded {
        Ok(_) => Ok(()),
        Err(e) if e.not_found() => Ok(()),
        Err(e) => Err(e),
    }
}
