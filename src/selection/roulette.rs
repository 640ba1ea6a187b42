//! Roulette selection: fitness-proportionate sampling on min-max normalized
//! scores.
//!
//! The best score maps to weight 1 and the worst to weight 0, whatever the
//! goal, so the worst entity is never picked while the spread is non-zero.
//! When every score is equal the wheel is uniform.
//!
//! ```
//! use bitga::entity::Entity;
//! use bitga::genome::Genome;
//! use bitga::population::{Population, Zones};
//! use bitga::rng::RandomNumberGenerator;
//! use bitga::search_space::{Goal, SearchSpace};
//! use bitga::selection::SelectionKind;
//!
//! let entities = vec![
//!     Entity::from_genome(Genome::new(0, 4)),
//!     Entity::from_genome(Genome::new(15, 4)),
//! ];
//! let space = SearchSpace::new(0.0, 16.0, Goal::Maximize);
//! let mut population = Population::from_entities(entities, space).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(3);
//!
//! population.evaluate(&|x: f64| x);
//! population.select(SelectionKind::Roulette, Zones::new(0, 2), &mut rng).unwrap();
//! assert!(population.entities().iter().all(|e| e.genome().value() == 15));
//! ```

use crate::rng::RandomNumberGenerator;
use crate::search_space::Goal;

/// Normalizes the scores into `[0, 1]` weights where the best entity weighs 1
/// and the worst weighs 0. A population whose scores are all equal gets a
/// weight of 1 everywhere, which makes the wheel uniform.
pub(crate) fn weights(scores: &[f64], goal: Goal) -> Vec<f64> {
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let delta = max - min;

    if delta == 0.0 {
        return vec![1.0; scores.len()];
    }

    scores
        .iter()
        .map(|&score| match goal {
            Goal::Maximize => (score - min) / delta,
            Goal::Minimize => (max - score) / delta,
        })
        .collect()
}

/// Walks the cumulative buckets `[pi, pi + w / sum)` and returns the index of
/// the bucket holding `r`. Rounding can leave `r` past the last bucket, in
/// which case the last index is returned.
pub(crate) fn spin(weights: &[f64], sum: f64, r: f64) -> usize {
    let mut pi = 0.0;
    for (index, &weight) in weights.iter().enumerate() {
        let share = weight / sum;
        if r >= pi && r < pi + share {
            return index;
        }
        pi += share;
    }
    weights.len() - 1
}

/// Spins the wheel once per slot.
pub(crate) fn pick(
    scores: &[f64],
    goal: Goal,
    slots: usize,
    rng: &mut RandomNumberGenerator,
) -> Vec<usize> {
    let weights = weights(scores, goal);
    let sum: f64 = weights.iter().sum();
    (0..slots).map(|_| spin(&weights, sum, rng.unit())).collect()
}
