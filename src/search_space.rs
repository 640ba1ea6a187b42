//! # SearchSpace
//!
//! The search interval and the optimization goal. All fitness comparisons in the
//! crate go through [`Goal::is_better`], which multiplies the difference of two
//! scores by `+1` (maximize) or `-1` (minimize) and tests for a strictly
//! positive result. Equal scores are never "better".

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::GeneticError;
use crate::genome::Genome;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Goal {
    #[default]
    Maximize,
    Minimize,
}

impl Goal {
    pub fn scale(&self) -> f64 {
        match self {
            Goal::Maximize => 1.0,
            Goal::Minimize => -1.0,
        }
    }

    /// Whether score `a` is strictly better than score `b`.
    pub fn is_better(&self, a: f64, b: f64) -> bool {
        (a - b) * self.scale() > 0.0
    }

    /// Orders better scores first. Scores that are not strictly better in
    /// either direction (ties, NaN) compare equal.
    pub fn rank(&self, a: f64, b: f64) -> Ordering {
        if self.is_better(a, b) {
            Ordering::Less
        } else if self.is_better(b, a) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }
}

impl FromStr for Goal {
    type Err = GeneticError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "max" => Ok(Goal::Maximize),
            "min" => Ok(Goal::Minimize),
            other => Err(GeneticError::Configuration(format!(
                "unknown mode argument '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Goal::Maximize => write!(f, "max"),
            Goal::Minimize => write!(f, "min"),
        }
    }
}

/// The interval `[left, right)` searched for an extremum, and whether the
/// extremum is a maximum or a minimum.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchSpace {
    pub left: f64,
    pub right: f64,
    pub goal: Goal,
}

impl SearchSpace {
    /// `left < right` is validated when options are built, not here.
    pub fn new(left: f64, right: f64, goal: Goal) -> Self {
        Self { left, right, goal }
    }

    /// Maps a genome linearly onto the interval:
    /// `left + value * (right - left) / 2^width`.
    ///
    /// Wide genomes can round the top values up to `right`; those are clamped
    /// to the largest float below it, so the result always lies in
    /// `[left, right)`.
    pub fn decode(&self, genome: &Genome) -> f64 {
        let value =
            self.left + genome.value() as f64 * (self.right - self.left) / genome.cardinality();
        if value >= self.right {
            predecessor(self.right).max(self.left)
        } else {
            value
        }
    }

    pub fn is_better(&self, a: f64, b: f64) -> bool {
        self.goal.is_better(a, b)
    }
}

// Largest f64 strictly below a finite `x`.
fn predecessor(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}

impl Default for SearchSpace {
    fn default() -> Self {
        Self::new(0.0, 10.0, Goal::Maximize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::MAX_GENOME_WIDTH;

    #[test]
    fn test_is_better_respects_goal() {
        assert!(Goal::Maximize.is_better(2.0, 1.0));
        assert!(!Goal::Maximize.is_better(1.0, 2.0));
        assert!(Goal::Minimize.is_better(1.0, 2.0));
        assert!(!Goal::Minimize.is_better(2.0, 1.0));
    }

    #[test]
    fn test_ties_are_never_better() {
        for goal in [Goal::Maximize, Goal::Minimize] {
            assert!(!goal.is_better(3.5, 3.5));
            assert_eq!(goal.rank(3.5, 3.5), Ordering::Equal);
        }
    }

    #[test]
    fn test_rank_puts_best_first() {
        let mut scores = vec![1.0, 3.0, 2.0];
        scores.sort_by(|a, b| Goal::Maximize.rank(*a, *b));
        assert_eq!(scores, vec![3.0, 2.0, 1.0]);
        scores.sort_by(|a, b| Goal::Minimize.rank(*a, *b));
        assert_eq!(scores, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_decode_bounds() {
        let space = SearchSpace::new(-2.0, 10.0, Goal::Maximize);
        for width in [1, 8, 30, MAX_GENOME_WIDTH] {
            assert_eq!(space.decode(&Genome::zeros(width)), -2.0);
            let top = Genome::new(u64::MAX, width);
            assert!(space.decode(&top) < 10.0);
        }
    }

    #[test]
    fn test_decode_top_stays_below_right_at_full_width() {
        let top = Genome::new(u64::MAX, MAX_GENOME_WIDTH);
        let intervals = [
            (1.0, 2.0),
            (3.0, 4.0),
            (100.0, 101.0),
            (-1.0, 0.0),
            (-5.0, -4.0),
        ];
        for (left, right) in intervals {
            let space = SearchSpace::new(left, right, Goal::Maximize);
            let decoded = space.decode(&top);
            assert!(decoded < right, "[{}, {}) decoded top to {}", left, right, decoded);
            assert!(decoded >= left);
        }
    }

    #[test]
    fn test_predecessor() {
        assert!(predecessor(2.0) < 2.0);
        assert_eq!(predecessor(2.0), 2.0 - f64::EPSILON);
        assert!(predecessor(-3.0) < -3.0);
        assert!(predecessor(0.0) < 0.0);
    }

    #[test]
    fn test_decode_monotonic() {
        let space = SearchSpace::new(0.0, 1.0, Goal::Minimize);
        let width = 10;
        let mut previous = f64::NEG_INFINITY;
        for value in 0..(1u64 << width) {
            let decoded = space.decode(&Genome::new(value, width));
            assert!(decoded >= previous);
            previous = decoded;
        }
    }

    #[test]
    fn test_goal_from_str() {
        assert_eq!("max".parse::<Goal>().unwrap(), Goal::Maximize);
        assert_eq!("min".parse::<Goal>().unwrap(), Goal::Minimize);
        assert!("maximum".parse::<Goal>().is_err());
    }
}
