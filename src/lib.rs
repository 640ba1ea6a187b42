pub mod breeding;
pub mod config;
pub mod entity;
pub mod error;
pub mod evolution;
pub mod genome;
pub mod population;
pub mod rng;
pub mod search_space;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result, ResultExt};
pub use evolution::{EvolutionLauncher, EvolutionOptions, EvolutionResult, Objective};
pub use search_space::{Goal, SearchSpace};
