//! Cut (truncation) selection: the whole population is ranked best first, which
//! leaves the top `selected` entities as the parent pool.
//!
//! The ranking is a stable insertion sort. Entities with equal scores keep
//! their relative order, and comparisons that are not strictly better (NaN
//! included) never move an entity.
//!
//! ```
//! use bitga::entity::Entity;
//! use bitga::genome::Genome;
//! use bitga::population::{Population, Zones};
//! use bitga::rng::RandomNumberGenerator;
//! use bitga::search_space::{Goal, SearchSpace};
//! use bitga::selection::SelectionKind;
//!
//! let entities = [3, 9, 1, 7]
//!     .iter()
//!     .map(|&v| Entity::from_genome(Genome::new(v, 4)))
//!     .collect();
//! let space = SearchSpace::new(0.0, 16.0, Goal::Minimize);
//! let mut population = Population::from_entities(entities, space).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(4);
//!
//! population.evaluate(&|x: f64| x);
//! population.select(SelectionKind::Cut, Zones::new(0, 2), &mut rng).unwrap();
//!
//! let ranked: Vec<u64> = population.entities().iter().map(|e| e.genome().value()).collect();
//! assert_eq!(ranked, vec![1, 3, 7, 9]);
//! ```

use crate::search_space::Goal;

/// Stable insertion sort of `items` by `scores`, best first. `scores` is
/// permuted alongside so the two stay aligned.
pub(crate) fn rank<T>(items: &mut [T], scores: &mut [f64], goal: Goal) {
    debug_assert_eq!(items.len(), scores.len());
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && goal.is_better(scores[j], scores[j - 1]) {
            items.swap(j, j - 1);
            scores.swap(j, j - 1);
            j -= 1;
        }
    }
}
