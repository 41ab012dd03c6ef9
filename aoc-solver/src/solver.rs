//! Core solver trait and related types

use crate::error::{ParseError, SolveError};
use std::fmt;
use std::io::{self, Write};

/// One of the two independently scored halves of a day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Part {
    One,
    Two,
}

impl Part {
    /// Both parts in solving order
    pub const ALL: [Part; 2] = [Part::One, Part::Two];

    /// The part number as used in file names and reports
    pub fn number(self) -> u8 {
        match self {
            Part::One => 1,
            Part::Two => 2,
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Destination for a solver's display and debug output
///
/// A null sink silently accepts and discards everything written to it.
///
/// # Example
///
/// ```
/// use aoc_solver::OutputSink;
/// use std::io::Write;
///
/// let mut out = OutputSink::null();
/// writeln!(out, "discarded").unwrap();
/// assert!(out.is_null());
/// ```
pub struct OutputSink {
    writer: Option<Box<dyn Write + Send>>,
}

impl OutputSink {
    /// A sink that discards all output
    pub fn null() -> Self {
        Self { writer: None }
    }

    /// A sink writing to standard output
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// A sink wrapping an arbitrary writer
    pub fn new(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Some(Box::new(writer)),
        }
    }

    /// Whether output written to this sink is discarded
    pub fn is_null(&self) -> bool {
        self.writer.is_none()
    }
}

impl Default for OutputSink {
    fn default() -> Self {
        Self::null()
    }
}

impl fmt::Debug for OutputSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OutputSink")
            .field("null", &self.is_null())
            .finish()
    }
}

impl Write for OutputSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.writer {
            Some(w) => w.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.writer {
            Some(w) => w.flush(),
            None => Ok(()),
        }
    }
}

/// Core trait that all Advent of Code solvers must implement.
///
/// Construction receives the raw puzzle input and does all parsing and
/// preprocessing; the runner times it separately from the two parts.
///
/// # Example
///
/// ```
/// use aoc_solver::{OutputSink, ParseError, SolveError, Solver};
///
/// struct Day1Solver {
///     numbers: Vec<i32>,
/// }
///
/// impl Solver for Day1Solver {
///     fn new(input: &str, _out: OutputSink) -> Result<Self, ParseError> {
///         let numbers = input
///             .lines()
///             .map(|line| {
///                 line.parse()
///                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
///             })
///             .collect::<Result<Vec<_>, _>>()?;
///         Ok(Self { numbers })
///     }
///
///     fn part1(&mut self) -> Result<String, SolveError> {
///         Ok(self.numbers.iter().sum::<i32>().to_string())
///     }
///
///     fn part2(&mut self) -> Result<String, SolveError> {
///         Ok(self.numbers.iter().product::<i32>().to_string())
///     }
/// }
/// ```
pub trait Solver: Sized + 'static {
    /// Parse and prepare the input
    ///
    /// # Arguments
    /// * `input` - The entire puzzle input as downloaded
    /// * `out` - Sink for any display/debug output
    fn new(input: &str, out: OutputSink) -> Result<Self, ParseError>;

    /// Solve part 1 using the prepared input
    fn part1(&mut self) -> Result<String, SolveError>;

    /// Solve part 2 using the prepared input
    fn part2(&mut self) -> Result<String, SolveError>;
}

/// Type-erased interface for working with any solver through dynamic dispatch
///
/// Every [`Solver`] implements this trait, which lets the registry hand out
/// `Box<dyn DynSolver>` regardless of the concrete day type.
pub trait DynSolver {
    /// Solve the specified part
    fn solve(&mut self, part: Part) -> Result<String, SolveError>;
}

impl<S: Solver> DynSolver for S {
    fn solve(&mut self, part: Part) -> Result<String, SolveError> {
        match part {
            Part::One => self.part1(),
            Part::Two => self.part2(),
        }
    }
}
