//! Random selection: every parent-pool slot receives a copy of an entity drawn
//! uniformly from the whole population. Fitness plays no part, so this is the
//! baseline the other strategies are measured against.
//!
//! ```
//! use bitga::entity::Entity;
//! use bitga::genome::Genome;
//! use bitga::population::{Population, Zones};
//! use bitga::rng::RandomNumberGenerator;
//! use bitga::search_space::SearchSpace;
//! use bitga::selection::SelectionKind;
//!
//! let entities = (0..6).map(|v| Entity::from_genome(Genome::new(v, 4))).collect();
//! let mut population = Population::from_entities(entities, SearchSpace::default()).unwrap();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! // No evaluation is needed when fitness is ignored.
//! population.select(SelectionKind::Random, Zones::new(0, 3), &mut rng).unwrap();
//! assert_eq!(population.len(), 6);
//! ```

use crate::rng::RandomNumberGenerator;

/// Draws one uniformly random index in `[0, population_len)` per slot.
pub(crate) fn pick(
    population_len: usize,
    slots: usize,
    rng: &mut RandomNumberGenerator,
) -> Vec<usize> {
    (0..slots).map(|_| rng.index(population_len)).collect()
}
