pub mod builder;
pub mod convergence;
pub mod launcher;
pub mod objective;
pub mod options;

pub use builder::EvolutionLauncherBuilder;
pub use convergence::{StagnationTracker, TerminationReason};
pub use launcher::{EpochObserver, EpochReport, EvolutionLauncher, EvolutionResult};
pub use objective::Objective;
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel, MIN_POPULATION_SIZE};
