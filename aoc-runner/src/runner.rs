//! Sequential day runner: resolve, load input, prepare, solve, record, report

use crate::error::{DayError, InputError, RunError};
use crate::input::InputProvider;
use crate::ledger::ResultLedger;
use crate::output::ReportFormatter;
use aoc_solver::{DynSolver, OutputSink, Part, SolveError, SolverError, SolverRegistry};
use std::any::Any;
use std::cell::Cell;
use std::fmt;
use std::io::Write;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Once;
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

/// Progress of a single day through the runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStage {
    Idle,
    Preparing,
    RunningPart1,
    RunningPart2,
    Recorded,
    Reported,
}

impl DayStage {
    fn running(part: Part) -> Self {
        match part {
            Part::One => DayStage::RunningPart1,
            Part::Two => DayStage::RunningPart2,
        }
    }
}

impl fmt::Display for DayStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            DayStage::Idle => "starting",
            DayStage::Preparing => "preparing",
            DayStage::RunningPart1 => "running part 1",
            DayStage::RunningPart2 => "running part 2",
            DayStage::Recorded => "recording",
            DayStage::Reported => "reporting",
        };
        f.write_str(text)
    }
}

/// Outcome of one part
#[derive(Debug, Clone, Default)]
pub struct PartOutcome {
    /// The answer, absent if the part never completed
    pub answer: Option<String>,
    /// Wall-clock time, absent if the part never completed
    pub duration: Option<Duration>,
    /// Whether the ledger had not seen this answer before
    pub unique: bool,
}

/// Timings and answers for one day
#[derive(Debug, Clone, Default)]
pub struct DayResult {
    pub preparation: Option<Duration>,
    pub part1: PartOutcome,
    pub part2: PartOutcome,
}

impl DayResult {
    pub fn part(&self, part: Part) -> &PartOutcome {
        match part {
            Part::One => &self.part1,
            Part::Two => &self.part2,
        }
    }

    fn part_mut(&mut self, part: Part) -> &mut PartOutcome {
        match part {
            Part::One => &mut self.part1,
            Part::Two => &mut self.part2,
        }
    }

    /// Sum of all measured intervals
    pub fn total(&self) -> Duration {
        [self.preparation, self.part1.duration, self.part2.duration]
            .into_iter()
            .flatten()
            .sum()
    }
}

/// Where and why a day stopped early
#[derive(Debug)]
pub struct DayFailure {
    pub stage: DayStage,
    pub error: DayError,
}

impl DayFailure {
    fn new(stage: DayStage, error: impl Into<DayError>) -> Self {
        Self {
            stage,
            error: error.into(),
        }
    }
}

/// Everything reported for one day
#[derive(Debug)]
pub struct DayReport {
    pub day: u8,
    pub result: DayResult,
    pub failure: Option<DayFailure>,
}

/// All days of a run
#[derive(Debug, Default)]
pub struct RunSummary {
    pub days: Vec<DayReport>,
}

impl RunSummary {
    /// Grand total across days
    pub fn total(&self) -> Duration {
        self.days.iter().map(|d| d.result.total()).sum()
    }
}

/// Per-run options
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Sample file name under `input/{year}/sample/`, honored in single-day runs
    pub sample: Option<String>,
    /// Give solvers a stdout sink instead of a null one
    pub display_output: bool,
}

pub struct Runner {
    registry: SolverRegistry,
    inputs: InputProvider,
    ledger: ResultLedger,
    options: RunOptions,
    display: Box<dyn Fn() -> OutputSink>,
}

impl Runner {
    pub fn new(
        registry: SolverRegistry,
        inputs: InputProvider,
        ledger: ResultLedger,
        options: RunOptions,
    ) -> Self {
        Self {
            registry,
            inputs,
            ledger,
            options,
            display: Box::new(OutputSink::stdout),
        }
    }

    /// Replace the writer solvers get when `display_output` is set (stdout by default)
    pub fn with_display(mut self, display: impl Fn() -> OutputSink + 'static) -> Self {
        self.display = Box::new(display);
        self
    }

    /// Run days `start_day..=end_day` of `year`, writing the report to `out`
    ///
    /// A failing day is reported and the run moves on. Only a missing
    /// session credential (or a broken report writer) aborts the run.
    pub fn run(
        &self,
        year: u16,
        start_day: u8,
        end_day: u8,
        out: &mut dyn Write,
    ) -> Result<RunSummary, RunError> {
        let single_day = start_day == end_day;
        let mut formatter = ReportFormatter::new(out);
        let mut summary = RunSummary::default();

        formatter.print_title(year)?;
        for day in start_day..=end_day {
            formatter.print_day_header(day)?;
            let report = self.run_day(year, day, single_day)?;
            formatter.print_day(&report)?;
            debug!(year, day, stage = %DayStage::Reported, "day done");
            summary.days.push(report);
        }
        formatter.print_total(summary.total())?;

        Ok(summary)
    }

    fn run_day(&self, year: u16, day: u8, single_day: bool) -> Result<DayReport, RunError> {
        let mut result = DayResult::default();

        let failure = match self.solve_day(year, day, single_day, &mut result) {
            Ok(()) => None,
            Err(DayFailure {
                error: DayError::Input(e),
                ..
            }) if e.is_fatal() => return Err(RunError::Configuration(e)),
            Err(failure) => {
                error!(
                    year,
                    day,
                    stage = %failure.stage,
                    "Could not execute day {}: {}",
                    day,
                    failure.error
                );
                Some(failure)
            }
        };

        self.record(year, day, &mut result);
        debug!(year, day, stage = %DayStage::Recorded, "answers recorded");

        Ok(DayReport {
            day,
            result,
            failure,
        })
    }

    fn solve_day(
        &self,
        year: u16,
        day: u8,
        single_day: bool,
        result: &mut DayResult,
    ) -> Result<(), DayFailure> {
        let stage = DayStage::Idle;
        let factory = self
            .registry
            .resolve(year, day)
            .map_err(|e| DayFailure::new(stage, e))?;
        let input = self
            .load_input(year, day, single_day)
            .map_err(|e| DayFailure::new(stage, e))?;

        let stage = DayStage::Preparing;
        debug!(year, day, %stage);
        let (mut solver, elapsed): (Box<dyn DynSolver>, Duration) = timed(|| {
            factory(input.as_str(), self.sink()).map_err(SolverError::ParseError)
        })
        .map_err(|e| DayFailure::new(stage, e))?;
        result.preparation = Some(elapsed);

        for part in Part::ALL {
            let stage = DayStage::running(part);
            debug!(year, day, %stage);
            let (answer, elapsed) = timed(|| solver.solve(part).map_err(SolverError::SolveError))
                .map_err(|e| DayFailure::new(stage, e))?;
            let outcome = result.part_mut(part);
            outcome.answer = Some(answer);
            outcome.duration = Some(elapsed);
        }

        Ok(())
    }

    fn load_input(&self, year: u16, day: u8, single_day: bool) -> Result<String, InputError> {
        match &self.options.sample {
            Some(name) if single_day => self.inputs.sample_input(year, name),
            _ => self.inputs.get_input(year, day),
        }
    }

    fn sink(&self) -> OutputSink {
        if self.options.display_output {
            (self.display)()
        } else {
            OutputSink::null()
        }
    }

    /// Record both parts; ledger I/O problems are logged and treated as unique
    fn record(&self, year: u16, day: u8, result: &mut DayResult) {
        for part in Part::ALL {
            let outcome = result.part_mut(part);
            let answer = outcome.answer.as_deref().unwrap_or_default();
            outcome.unique = match self.ledger.record(year, day, part, answer) {
                Ok(unique) => unique,
                Err(e) => {
                    warn!(
                        path = %self.ledger.ledger_path(year, day, part).display(),
                        error = %e,
                        "could not append to ledger"
                    );
                    true
                }
            };
        }
    }
}

thread_local! {
    static IN_SOLVER: Cell<bool> = const { Cell::new(false) };
}

/// Silence the panic hook while solver code runs on this thread; the panic is
/// reported through the day's failure instead
fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if !IN_SOLVER.with(Cell::get) {
                previous(info);
            }
        }));
    });
}

/// Run solver code, timing it and turning a panic into a solve error
fn timed<T>(f: impl FnOnce() -> Result<T, SolverError>) -> Result<(T, Duration), SolverError> {
    install_panic_hook();
    IN_SOLVER.with(|flag| flag.set(true));
    let start = Instant::now();
    let outcome = panic::catch_unwind(AssertUnwindSafe(f));
    let elapsed = start.elapsed();
    IN_SOLVER.with(|flag| flag.set(false));

    match outcome {
        Ok(Ok(value)) => Ok((value, elapsed)),
        Ok(Err(e)) => Err(e),
        Err(payload) => Err(SolverError::SolveError(SolveError::Panicked(
            panic_message(payload.as_ref()),
        ))),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
