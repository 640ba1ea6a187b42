//! # Mutation
//!
//! In-place perturbations of a single genome. Callers owning a cached fitness
//! must treat it as stale after any of these run.

use std::fmt;
use std::str::FromStr;

use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationKind {
    /// Flips one random bit.
    Random,
    /// Exchanges two random bits.
    Swap,
    /// Reverses the bits from a random start index up to the last bit.
    Reverse,
}

impl MutationKind {
    pub fn mutate(&self, genome: &mut Genome, rng: &mut RandomNumberGenerator) {
        let width = genome.width();

        match self {
            MutationKind::Random => {
                let index = rng.index(width);
                genome.toggle(index);
            }
            MutationKind::Swap => {
                let first = rng.index(width);
                let second = rng.index(width);
                exchange(genome, first, second);
            }
            MutationKind::Reverse => {
                let start = rng.index(width);
                reverse_tail(genome, start);
            }
        }
    }
}

/// Exchanges the bits at `first` and `second`. Equal indices leave the genome
/// unchanged.
pub fn swap_bits(genome: &mut Genome, first: usize, second: usize) -> Result<()> {
    genome.get(first)?;
    genome.get(second)?;
    exchange(genome, first, second);
    Ok(())
}

/// Reverses the bit order of `[start, width - 1]`.
pub fn reverse_from(genome: &mut Genome, start: usize) -> Result<()> {
    genome.get(start)?;
    reverse_tail(genome, start);
    Ok(())
}

fn exchange(genome: &mut Genome, first: usize, second: usize) {
    let a = genome.bit(first);
    let b = genome.bit(second);
    genome.put(first, b);
    genome.put(second, a);
}

// Walks inward from both ends until the bounds meet or cross.
fn reverse_tail(genome: &mut Genome, start: usize) {
    let mut i = start;
    let mut j = genome.width() - 1;
    while i < j {
        exchange(genome, i, j);
        i += 1;
        j -= 1;
    }
}

impl FromStr for MutationKind {
    type Err = GeneticError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "random" => Ok(MutationKind::Random),
            "swap" => Ok(MutationKind::Swap),
            "reverse" => Ok(MutationKind::Reverse),
            other => Err(GeneticError::Configuration(format!(
                "unknown mutation type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for MutationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MutationKind::Random => "random",
            MutationKind::Swap => "swap",
            MutationKind::Reverse => "reverse",
        };
        write!(f, "{}", name)
    }
}
