//! # Crossbreeding
//!
//! Produces one child genome from two parents. Every bit of the child is taken
//! from the parent at the same index; parents are never modified.

use std::fmt;
use std::str::FromStr;

use crate::error::GeneticError;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossbreedingKind {
    /// Bits below a random cut point come from the first parent, the rest from
    /// the second.
    OnePoint,
    /// Bits inside a random closed segment come from the second parent, the
    /// rest from the first.
    TwoPoint,
    /// Each bit comes from either parent with equal probability.
    Uniform,
}

impl CrossbreedingKind {
    pub fn crossbreed(
        &self,
        first: &Genome,
        second: &Genome,
        rng: &mut RandomNumberGenerator,
    ) -> Genome {
        debug_assert_eq!(first.width(), second.width());
        let width = first.width();

        match self {
            CrossbreedingKind::OnePoint => {
                let point = rng.index(width);
                one_point(first, second, point)
            }
            CrossbreedingKind::TwoPoint => {
                let mut low = rng.index(width);
                let mut high = rng.index(width);
                if low > high {
                    std::mem::swap(&mut low, &mut high);
                }
                two_point(first, second, low, high)
            }
            CrossbreedingKind::Uniform => {
                let mut child = Genome::zeros(width);
                for index in 0..width {
                    let source = if rng.unit() < 0.5 { first } else { second };
                    child.put(index, source.bit(index));
                }
                child
            }
        }
    }
}

/// Bits `[0, point)` from `first`, `[point, width)` from `second`.
pub(crate) fn one_point(first: &Genome, second: &Genome, point: usize) -> Genome {
    let mut child = Genome::zeros(first.width());
    for index in 0..first.width() {
        let source = if index < point { first } else { second };
        child.put(index, source.bit(index));
    }
    child
}

/// Bits `[low, high]` from `second`, everything else from `first`.
pub(crate) fn two_point(first: &Genome, second: &Genome, low: usize, high: usize) -> Genome {
    let mut child = Genome::zeros(first.width());
    for index in 0..first.width() {
        let source = if index < low || index > high {
            first
        } else {
            second
        };
        child.put(index, source.bit(index));
    }
    child
}

impl FromStr for CrossbreedingKind {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one_point" => Ok(CrossbreedingKind::OnePoint),
            "two_point" => Ok(CrossbreedingKind::TwoPoint),
            "uniform" => Ok(CrossbreedingKind::Uniform),
            other => Err(GeneticError::Configuration(format!(
                "unknown crossbreeding type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for CrossbreedingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CrossbreedingKind::OnePoint => "one point",
            CrossbreedingKind::TwoPoint => "two point",
            CrossbreedingKind::Uniform => "uniform",
        };
        write!(f, "{}", name)
    }
}
