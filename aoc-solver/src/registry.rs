//! Solver registry for looking up and creating solver instances

use crate::error::{ParseError, RegistrationError, SolverError};
use crate::solver::{DynSolver, OutputSink, Solver};
use std::collections::BTreeMap;

/// Factory function type for creating solver instances
///
/// Given the raw input and an output sink, produces a ready-to-solve instance.
/// Calling it runs the solver's full preparation step.
pub type SolverFactory =
    Box<dyn Fn(&str, OutputSink) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync>;

/// Plain function pointer factory, usable in statics
pub type PluginFactory = fn(&str, OutputSink) -> Result<Box<dyn DynSolver>, ParseError>;

/// Construct a boxed solver of type `S`
///
/// This is the function the derive macro stores in each [`SolverPlugin`].
pub fn instantiate<S: Solver>(
    input: &str,
    out: OutputSink,
) -> Result<Box<dyn DynSolver>, ParseError> {
    Ok(Box::new(S::new(input, out)?))
}

/// Builder for constructing a SolverRegistry with fluent API
///
/// The registry is immutable after construction. Duplicate (year, day)
/// registrations are rejected.
///
/// # Example
///
/// ```
/// # use aoc_solver::{OutputSink, ParseError, RegistryBuilder, SolveError, Solver};
/// struct Echo(String);
///
/// impl Solver for Echo {
///     fn new(input: &str, _out: OutputSink) -> Result<Self, ParseError> {
///         Ok(Echo(input.to_string()))
///     }
///     fn part1(&mut self) -> Result<String, SolveError> {
///         Ok(self.0.clone())
///     }
///     fn part2(&mut self) -> Result<String, SolveError> {
///         Ok(self.0.len().to_string())
///     }
/// }
///
/// let registry = RegistryBuilder::new()
///     .register_solver::<Echo>(2022, 1)
///     .unwrap()
///     .build();
/// assert!(registry.contains(2022, 1));
/// ```
pub struct RegistryBuilder {
    solvers: BTreeMap<(u16, u8), SolverFactory>,
}

impl RegistryBuilder {
    /// Create a new empty registry builder
    pub fn new() -> Self {
        Self {
            solvers: BTreeMap::new(),
        }
    }

    /// Register a solver factory function for a specific year and day
    ///
    /// # Returns
    /// * `Ok(Self)` - Builder with the solver registered, ready for chaining
    /// * `Err(RegistrationError)` - Duplicate solver for this year-day combination
    pub fn register<F>(mut self, year: u16, day: u8, factory: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&str, OutputSink) -> Result<Box<dyn DynSolver>, ParseError> + Send + Sync + 'static,
    {
        if self.solvers.contains_key(&(year, day)) {
            return Err(RegistrationError::DuplicateSolver(year, day));
        }
        self.solvers.insert((year, day), Box::new(factory));
        Ok(self)
    }

    /// Register a [`Solver`] type for a specific year and day
    pub fn register_solver<S: Solver>(self, year: u16, day: u8) -> Result<Self, RegistrationError> {
        self.register(year, day, instantiate::<S>)
    }

    /// Register all collected solver plugins
    ///
    /// Iterates through all plugins submitted via `inventory::submit!`
    /// (usually through `#[derive(AutoRegisterSolver)]`).
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// let registry = RegistryBuilder::new()
    ///     .register_all_plugins()
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_all_plugins(self) -> Result<Self, RegistrationError> {
        self.register_solver_plugins(|_| true)
    }

    /// Register solver plugins that match the given filter predicate
    ///
    /// ```no_run
    /// # use aoc_solver::RegistryBuilder;
    /// // Register only 2022 solvers
    /// let registry = RegistryBuilder::new()
    ///     .register_solver_plugins(|plugin| plugin.year == 2022)
    ///     .unwrap()
    ///     .build();
    /// ```
    pub fn register_solver_plugins<F>(mut self, filter: F) -> Result<Self, RegistrationError>
    where
        F: Fn(&SolverPlugin) -> bool,
    {
        for plugin in inventory::iter::<SolverPlugin>() {
            if filter(plugin) {
                self = self.register(plugin.year, plugin.day, plugin.factory)?;
            }
        }
        Ok(self)
    }

    /// Finalize the builder and create an immutable registry
    pub fn build(self) -> SolverRegistry {
        SolverRegistry {
            solvers: self.solvers,
        }
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable registry mapping (year, day) pairs to solver factories
pub struct SolverRegistry {
    solvers: BTreeMap<(u16, u8), SolverFactory>,
}

impl SolverRegistry {
    /// Look up the factory for a specific year and day
    ///
    /// # Returns
    /// * `Ok(&SolverFactory)` - The registered factory
    /// * `Err(SolverError::NotFound)` - Nothing registered for this year and day
    pub fn resolve(&self, year: u16, day: u8) -> Result<&SolverFactory, SolverError> {
        self.solvers
            .get(&(year, day))
            .ok_or(SolverError::NotFound(year, day))
    }

    /// Resolve and immediately construct a solver instance
    pub fn create_solver(
        &self,
        year: u16,
        day: u8,
        input: &str,
        out: OutputSink,
    ) -> Result<Box<dyn DynSolver>, SolverError> {
        let factory = self.resolve(year, day)?;
        factory(input, out).map_err(SolverError::ParseError)
    }

    /// Check whether a solver is registered for year/day
    pub fn contains(&self, year: u16, day: u8) -> bool {
        self.solvers.contains_key(&(year, day))
    }

    /// Registered days for a year, ascending
    pub fn days(&self, year: u16) -> Vec<u8> {
        self.solvers
            .range((year, 0)..=(year, u8::MAX))
            .map(|(&(_, day), _)| day)
            .collect()
    }

    /// Number of registered solvers
    pub fn len(&self) -> usize {
        self.solvers.len()
    }

    /// Whether the registry holds no solvers
    pub fn is_empty(&self) -> bool {
        self.solvers.is_empty()
    }
}

/// Plugin record for automatic solver registration
///
/// Normally produced by `#[derive(AutoRegisterSolver)]`, but can be submitted
/// by hand:
///
/// ```no_run
/// use aoc_solver::{instantiate, OutputSink, ParseError, SolveError, Solver, SolverPlugin};
///
/// struct Day1Solver;
///
/// impl Solver for Day1Solver {
///     fn new(_: &str, _: OutputSink) -> Result<Self, ParseError> {
///         Ok(Day1Solver)
///     }
///     fn part1(&mut self) -> Result<String, SolveError> {
///         Ok(String::new())
///     }
///     fn part2(&mut self) -> Result<String, SolveError> {
///         Ok(String::new())
///     }
/// }
///
/// inventory::submit! {
///     SolverPlugin {
///         year: 2023,
///         day: 1,
///         factory: instantiate::<Day1Solver>,
///     }
/// }
/// ```
pub struct SolverPlugin {
    /// The Advent of Code year
    pub year: u16,
    /// The day number (1-25)
    pub day: u8,
    /// Constructs the solver from input and output sink
    pub factory: PluginFactory,
}

inventory::collect!(SolverPlugin);
