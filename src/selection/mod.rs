//! # Selection
//!
//! Selection fills the parent pool `[preserved, selected)` of a population after
//! elitism has placed the best entities in `[0, preserved)`. Every strategy
//! works on a snapshot of the fitness scores taken before the pass, so the
//! candidates drawn for one slot never include copies written for an earlier
//! slot of the same pass.
pub mod cut;
pub mod elitist;
pub mod random;
pub mod roulette;
pub mod tournament;

use std::fmt;
use std::str::FromStr;

use crate::error::GeneticError;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionKind {
    /// Uniformly random copies, fitness ignored.
    Random,
    /// Binary tournaments between two random entities.
    Tournament,
    /// Fitness-proportionate selection on min-max normalized scores.
    Roulette,
    /// Truncation: the population is ranked and the top slots are kept.
    Cut,
}

impl FromStr for SelectionKind {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "random" => Ok(SelectionKind::Random),
            "tournament" => Ok(SelectionKind::Tournament),
            "roulette" => Ok(SelectionKind::Roulette),
            "cut" => Ok(SelectionKind::Cut),
            other => Err(GeneticError::Configuration(format!(
                "unknown selection type '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for SelectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SelectionKind::Random => "random",
            SelectionKind::Tournament => "tournament",
            SelectionKind::Roulette => "roulette",
            SelectionKind::Cut => "cut",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_round_trips_display() {
        for kind in [
            SelectionKind::Random,
            SelectionKind::Tournament,
            SelectionKind::Roulette,
            SelectionKind::Cut,
        ] {
            assert_eq!(kind.to_string().parse::<SelectionKind>().unwrap(), kind);
        }
        assert!("roullete".parse::<SelectionKind>().is_err());
    }
}
