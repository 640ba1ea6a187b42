//! # Breeding
//!
//! The genome-level operators: crossbreeding two parents into a child, and
//! mutating a genome in place. Both are closed enums; the population picks the
//! variant from the options and dispatches through an exhaustive `match`.
pub mod crossover;
pub mod mutation;

pub use crossover::CrossbreedingKind;
pub use mutation::{reverse_from, swap_bits, MutationKind};
