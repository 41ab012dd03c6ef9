//! Advent of Code Solver Library
//!
//! The contract every day implementation satisfies, plus a static
//! registration table that maps (year, day) to a solver factory.
//!
//! # Overview
//!
//! This library provides:
//! - The [`Solver`] trait: construct from raw input, then answer two parts
//! - [`DynSolver`] for type-erased dispatch by [`Part`]
//! - [`OutputSink`], the optional destination for solver display output
//! - A [`SolverRegistry`] built with [`RegistryBuilder`]
//! - Link-time plugin collection through [`SolverPlugin`] and `#[derive(AutoRegisterSolver)]`
//!
//! # Quick Example
//!
//! ```
//! use aoc_solver::{OutputSink, ParseError, Part, RegistryBuilder, SolveError, Solver};
//!
//! pub struct MyDay1 {
//!     numbers: Vec<i32>,
//! }
//!
//! impl Solver for MyDay1 {
//!     fn new(input: &str, _out: OutputSink) -> Result<Self, ParseError> {
//!         let numbers = input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect::<Result<_, _>>()?;
//!         Ok(Self { numbers })
//!     }
//!
//!     fn part1(&mut self) -> Result<String, SolveError> {
//!         Ok(self.numbers.iter().sum::<i32>().to_string())
//!     }
//!
//!     fn part2(&mut self) -> Result<String, SolveError> {
//!         Ok(self.numbers.iter().max().copied().unwrap_or_default().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<MyDay1>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let factory = registry.resolve(2023, 1).unwrap();
//! let mut solver = factory("1\n2\n3", OutputSink::null()).unwrap();
//! assert_eq!(solver.solve(Part::One).unwrap(), "6");
//! ```
//!
//! ## Plugin System and Derive Macro
//!
//! Use `#[derive(AutoRegisterSolver)]` to register solvers at link time:
//! ```ignore
//! #[derive(AutoRegisterSolver)]
//! #[aoc(year = 2023, day = 1)]
//! struct Day1Solver { /* ... */ }
//! ```

mod error;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use registry::{
    PluginFactory, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry, instantiate,
};
pub use solver::{DynSolver, OutputSink, Part, Solver};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macro
pub use aoc_solver_macros::AutoRegisterSolver;
