//! Tournament selection: for each parent-pool slot two entities are drawn
//! uniformly from the population and the better one is copied into the slot.
//!
//! Binary tournaments keep the selection pressure mild. Weak entities still
//! reach the pool whenever they meet an even weaker one, and the first
//! contestant has to be strictly better to win, so ties go to the second.
//!
//! ```
//! use bitga::entity::Entity;
//! use bitga::genome::Genome;
//! use bitga::population::{Population, Zones};
//! use bitga::rng::RandomNumberGenerator;
//! use bitga::search_space::SearchSpace;
//! use bitga::selection::SelectionKind;
//!
//! let entities = (0..8).map(|v| Entity::from_genome(Genome::new(v, 4))).collect();
//! let mut population = Population::from_entities(entities, SearchSpace::default()).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(2);
//!
//! population.evaluate(&|x: f64| x);
//! population.select(SelectionKind::Tournament, Zones::new(0, 4), &mut rng).unwrap();
//!
//! // Winners are copied together with their fitness.
//! assert!(population.entities()[..4].iter().all(|e| e.fitness().is_ok()));
//! ```

use crate::rng::RandomNumberGenerator;
use crate::search_space::Goal;

/// Runs one binary tournament per slot. Both contestants are drawn uniformly
/// from the whole population, the first before the second.
pub(crate) fn pick(
    scores: &[f64],
    goal: Goal,
    slots: usize,
    rng: &mut RandomNumberGenerator,
) -> Vec<usize> {
    (0..slots)
        .map(|_| {
            let first = rng.index(scores.len());
            let second = rng.index(scores.len());
            duel(scores, goal, first, second)
        })
        .collect()
}

/// The first contestant only wins when strictly better; a tie goes to the
/// second.
pub(crate) fn duel(scores: &[f64], goal: Goal, first: usize, second: usize) -> usize {
    if goal.is_better(scores[first], scores[second]) {
        first
    } else {
        second
    }
}
