//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct holds every parameter of a run: the search
//! space, the genome width, the population layout, the three operator kinds and
//! the termination policy. Options are validated once, when the builder builds
//! them; the engine trusts them afterwards.
//!
//! ## Example
//!
//! ```rust
//! use bitga::evolution::{EvolutionOptions, LogLevel};
//! use bitga::search_space::Goal;
//! use bitga::selection::SelectionKind;
//!
//! let options = EvolutionOptions::builder()
//!     .goal(Goal::Minimize)
//!     .bounds(-1.0, 1.0)
//!     .population_size(50)
//!     .preserved_part(0.1)
//!     .selection(SelectionKind::Tournament)
//!     .selection_part(0.5)
//!     .log_level(LogLevel::Minimal)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.get_preserved_positions(), 5);
//! assert_eq!(options.get_selection_size(), 25);
//!
//! // Invalid combinations are rejected when building.
//! assert!(EvolutionOptions::builder().bounds(1.0, 1.0).build().is_err());
//! ```
//!
//! ## Parts
//!
//! `preserved_part` and `selection_part` are either a count (values `>= 1`) or a
//! fraction of the population (values `< 1`), truncated to a whole number of
//! entities.

use std::fmt;

use crate::breeding::{CrossbreedingKind, MutationKind};
use crate::error::{GeneticError, Result};
use crate::genome::{DEFAULT_GENOME_WIDTH, MAX_GENOME_WIDTH};
use crate::population::Zones;
use crate::search_space::{Goal, SearchSpace};
use crate::selection::SelectionKind;

/// The smallest population the engine accepts.
pub const MIN_POPULATION_SIZE: usize = 3;

/// How much the launcher reports through `tracing` while it runs.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// The options summary, one line per epoch and a ranked population dump.
    Verbose,
    /// One line per epoch and the termination reason.
    Minimal,
    #[default]
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    space: SearchSpace,
    genome_width: usize,
    population_size: usize,
    preserved_positions: usize,
    selection: SelectionKind,
    selection_size: usize,
    crossbreeding: CrossbreedingKind,
    mutation: MutationKind,
    mutation_probability: f64,
    max_epochs: usize,
    max_valueless_epochs: usize,
    quality_epsilon: f64,
    log_level: LogLevel,
}

impl EvolutionOptions {
    /// Returns a builder preloaded with the default parameters.
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }

    pub fn get_search_space(&self) -> &SearchSpace {
        &self.space
    }

    pub fn get_goal(&self) -> Goal {
        self.space.goal
    }

    pub fn get_genome_width(&self) -> usize {
        self.genome_width
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_preserved_positions(&self) -> usize {
        self.preserved_positions
    }

    pub fn get_selection(&self) -> SelectionKind {
        self.selection
    }

    pub fn get_selection_size(&self) -> usize {
        self.selection_size
    }

    pub fn get_crossbreeding(&self) -> CrossbreedingKind {
        self.crossbreeding
    }

    pub fn get_mutation(&self) -> MutationKind {
        self.mutation
    }

    pub fn get_mutation_probability(&self) -> f64 {
        self.mutation_probability
    }

    pub fn get_max_epochs(&self) -> usize {
        self.max_epochs
    }

    pub fn get_max_valueless_epochs(&self) -> usize {
        self.max_valueless_epochs
    }

    pub fn get_quality_epsilon(&self) -> f64 {
        self.quality_epsilon
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// The elite prefix and parent pool implied by these options.
    pub fn zones(&self) -> Zones {
        Zones::new(self.preserved_positions, self.selection_size)
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            space: SearchSpace::new(0.0, 10.0, Goal::Maximize),
            genome_width: DEFAULT_GENOME_WIDTH,
            population_size: 40,
            preserved_positions: 2,
            selection: SelectionKind::Roulette,
            selection_size: 16,
            crossbreeding: CrossbreedingKind::TwoPoint,
            mutation: MutationKind::Swap,
            mutation_probability: 0.2,
            max_epochs: 100,
            max_valueless_epochs: 5,
            quality_epsilon: 1e-7,
            log_level: LogLevel::None,
        }
    }
}

impl fmt::Display for EvolutionOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mode: {}", self.space.goal)?;
        writeln!(f, "search space: [{}, {}]", self.space.left, self.space.right)?;
        writeln!(f, "genome width: {}", self.genome_width)?;
        writeln!(f, "population size: {}", self.population_size)?;
        writeln!(f, "max epochs: {}", self.max_epochs)?;
        writeln!(f, "max valueless epochs: {}", self.max_valueless_epochs)?;
        writeln!(f, "quality epsilon: {}", self.quality_epsilon)?;
        writeln!(f, "preserved positions: {}", self.preserved_positions)?;
        writeln!(f, "selection: {}", self.selection)?;
        writeln!(f, "selection size: {}", self.selection_size)?;
        writeln!(f, "crossbreeding: {}", self.crossbreeding)?;
        write!(
            f,
            "mutation: {} ({})",
            self.mutation, self.mutation_probability
        )
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset parameters keep their defaults.
#[derive(Debug, Clone)]
pub struct EvolutionOptionsBuilder {
    goal: Goal,
    left: f64,
    right: f64,
    genome_width: usize,
    population_size: usize,
    preserved_part: f64,
    selection: SelectionKind,
    selection_part: f64,
    crossbreeding: CrossbreedingKind,
    mutation: MutationKind,
    mutation_probability: f64,
    max_epochs: usize,
    max_valueless_epochs: usize,
    quality_epsilon: f64,
    log_level: LogLevel,
}

impl Default for EvolutionOptionsBuilder {
    fn default() -> Self {
        Self {
            goal: Goal::Maximize,
            left: 0.0,
            right: 10.0,
            genome_width: DEFAULT_GENOME_WIDTH,
            population_size: 40,
            preserved_part: 2.0,
            selection: SelectionKind::Roulette,
            selection_part: 0.4,
            crossbreeding: CrossbreedingKind::TwoPoint,
            mutation: MutationKind::Swap,
            mutation_probability: 0.2,
            max_epochs: 100,
            max_valueless_epochs: 5,
            quality_epsilon: 1e-7,
            log_level: LogLevel::None,
        }
    }
}

impl EvolutionOptionsBuilder {
    pub fn goal(mut self, value: Goal) -> Self {
        self.goal = value;
        self
    }

    /// Sets the search interval `[left, right)`.
    pub fn bounds(mut self, left: f64, right: f64) -> Self {
        self.left = left;
        self.right = right;
        self
    }

    pub fn left(mut self, value: f64) -> Self {
        self.left = value;
        self
    }

    pub fn right(mut self, value: f64) -> Self {
        self.right = value;
        self
    }

    pub fn genome_width(mut self, value: usize) -> Self {
        self.genome_width = value;
        self
    }

    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = value;
        self
    }

    /// Number (`>= 1`) or fraction (`< 1`) of elites.
    pub fn preserved_part(mut self, value: f64) -> Self {
        self.preserved_part = value;
        self
    }

    pub fn preserved_positions(self, value: usize) -> Self {
        self.preserved_part(value as f64)
    }

    pub fn selection(mut self, value: SelectionKind) -> Self {
        self.selection = value;
        self
    }

    /// Number (`>= 1`) or fraction (`< 1`) of entities kept as parents,
    /// elites included.
    pub fn selection_part(mut self, value: f64) -> Self {
        self.selection_part = value;
        self
    }

    pub fn selection_size(self, value: usize) -> Self {
        self.selection_part(value as f64)
    }

    pub fn crossbreeding(mut self, value: CrossbreedingKind) -> Self {
        self.crossbreeding = value;
        self
    }

    pub fn mutation(mut self, value: MutationKind) -> Self {
        self.mutation = value;
        self
    }

    pub fn mutation_probability(mut self, value: f64) -> Self {
        self.mutation_probability = value;
        self
    }

    pub fn max_epochs(mut self, value: usize) -> Self {
        self.max_epochs = value;
        self
    }

    pub fn max_valueless_epochs(mut self, value: usize) -> Self {
        self.max_valueless_epochs = value;
        self
    }

    pub fn quality_epsilon(mut self, value: f64) -> Self {
        self.quality_epsilon = value;
        self
    }

    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = value;
        self
    }

    /// Resolves the parts and checks every parameter.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` naming the first invalid parameter.
    pub fn build(self) -> Result<EvolutionOptions> {
        if !self.left.is_finite() || !self.right.is_finite() || self.left >= self.right {
            return Err(config_error(format!(
                "search space [{}, {}] must be finite with left < right",
                self.left, self.right
            )));
        }
        if !(1..=MAX_GENOME_WIDTH).contains(&self.genome_width) {
            return Err(config_error(format!(
                "genome width {} must be between 1 and {}",
                self.genome_width, MAX_GENOME_WIDTH
            )));
        }
        if self.population_size < MIN_POPULATION_SIZE {
            return Err(config_error(format!(
                "population size {} must be at least {}",
                self.population_size, MIN_POPULATION_SIZE
            )));
        }

        let preserved_positions =
            resolve_part("preserved part", self.preserved_part, self.population_size)?;
        let selection_size =
            resolve_part("selection part", self.selection_part, self.population_size)?;

        if selection_size == 0 {
            return Err(config_error(
                "selection must keep at least one entity".to_string(),
            ));
        }
        if selection_size > self.population_size {
            return Err(config_error(format!(
                "selection size {} exceeds population size {}",
                selection_size, self.population_size
            )));
        }
        if preserved_positions > selection_size {
            return Err(config_error(format!(
                "preserved positions {} exceed selection size {}",
                preserved_positions, selection_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_probability) {
            return Err(config_error(format!(
                "mutation probability {} must be within [0, 1]",
                self.mutation_probability
            )));
        }
        if self.max_epochs == 0 {
            return Err(config_error("max epochs must be at least 1".to_string()));
        }
        if self.max_valueless_epochs == 0 {
            return Err(config_error(
                "max valueless epochs must be at least 1".to_string(),
            ));
        }
        if !self.quality_epsilon.is_finite() || self.quality_epsilon <= 0.0 {
            return Err(config_error(format!(
                "quality epsilon {} must be positive",
                self.quality_epsilon
            )));
        }

        Ok(EvolutionOptions {
            space: SearchSpace::new(self.left, self.right, self.goal),
            genome_width: self.genome_width,
            population_size: self.population_size,
            preserved_positions,
            selection: self.selection,
            selection_size,
            crossbreeding: self.crossbreeding,
            mutation: self.mutation,
            mutation_probability: self.mutation_probability,
            max_epochs: self.max_epochs,
            max_valueless_epochs: self.max_valueless_epochs,
            quality_epsilon: self.quality_epsilon,
            log_level: self.log_level,
        })
    }
}

fn config_error(message: String) -> GeneticError {
    GeneticError::Configuration(message)
}

fn resolve_part(name: &str, part: f64, population_size: usize) -> Result<usize> {
    if !part.is_finite() || part < 0.0 {
        return Err(config_error(format!(
            "invalid {} value '{}'",
            name, part
        )));
    }
    if part >= 1.0 {
        Ok(part as usize)
    } else {
        Ok((part * population_size as f64) as usize)
    }
}
