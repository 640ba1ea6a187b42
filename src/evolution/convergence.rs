//! # Convergence
//!
//! Decides when the evolution loop stops: either the epoch budget runs out or
//! the best fitness stops moving by at least `epsilon` for `limit` consecutive
//! epochs.

use std::fmt;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReason {
    /// `max_epochs` epochs were executed.
    MaxEpochs,
    /// The best fitness changed by less than the quality epsilon for
    /// `max_valueless_epochs` consecutive epochs.
    Stagnation,
}

impl fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TerminationReason::MaxEpochs => write!(f, "epoch budget exhausted"),
            TerminationReason::Stagnation => write!(f, "best fitness stagnated"),
        }
    }
}

/// Counts consecutive epochs whose best fitness moved by less than `epsilon`.
#[derive(Debug, Clone)]
pub struct StagnationTracker {
    epsilon: f64,
    limit: usize,
    previous: Option<f64>,
    stagnant: usize,
}

impl StagnationTracker {
    pub fn new(epsilon: f64, limit: usize) -> Self {
        Self {
            epsilon,
            limit,
            previous: None,
            stagnant: 0,
        }
    }

    /// Records the best fitness of the current epoch and returns `true` once
    /// the stagnation limit is reached. The first observation only sets the
    /// baseline.
    pub fn observe(&mut self, best: f64) -> bool {
        if let Some(previous) = self.previous {
            if (previous - best).abs() < self.epsilon {
                self.stagnant += 1;
            } else {
                self.stagnant = 0;
            }
        }
        self.previous = Some(best);
        self.stagnant >= self.limit
    }

    pub fn stagnant_epochs(&self) -> usize {
        self.stagnant
    }
}
