//! # Population
//!
//! A fixed-size, ordered collection of entities and the per-generation passes
//! that act on it. The size never changes during a run; each generation the
//! slots are split into three zones described by [`Zones`]:
//!
//! ```text
//! [0, preserved)          elites, exempt from replacement and mutation
//! [preserved, selected)   parent pool written by selection
//! [selected, len)         offspring written by crossbreeding
//! ```
//!
//! Passes that compare fitness read every score up front and fail with
//! [`GeneticError::NotEvaluated`] if any entity has not been evaluated since
//! its last change.

use std::fmt;

use crate::breeding::{CrossbreedingKind, MutationKind};
use crate::entity::Entity;
use crate::error::{GeneticError, Result};
use crate::evolution::Objective;
use crate::rng::RandomNumberGenerator;
use crate::search_space::SearchSpace;
use crate::selection::{self, SelectionKind};

/// Boundaries of the elite prefix and of the parent pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zones {
    /// Slots `[0, preserved)` hold the elites.
    pub preserved: usize,
    /// Slots `[0, selected)` are the parents of the next offspring.
    pub selected: usize,
}

impl Zones {
    /// Zones are checked against the population by every pass that uses them.
    pub fn new(preserved: usize, selected: usize) -> Self {
        Self {
            preserved,
            selected,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Population {
    entities: Vec<Entity>,
    space: SearchSpace,
}

impl Population {
    /// Creates `size` entities with independently random genomes of `width` bits.
    pub fn random(
        size: usize,
        width: usize,
        space: SearchSpace,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Self> {
        let entities = (0..size).map(|_| Entity::random(width, rng)).collect();
        Self::from_entities(entities, space)
    }

    pub fn from_entities(entities: Vec<Entity>, space: SearchSpace) -> Result<Self> {
        if entities.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }
        Ok(Self { entities, space })
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    /// Always false: a population is never constructed empty and never shrinks.
    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn space(&self) -> &SearchSpace {
        &self.space
    }

    // Parents are drawn from [0, selected), so the pool must be non-empty and
    // fit inside the population.
    fn check_zones(&self, zones: Zones) -> Result<()> {
        if zones.selected == 0
            || zones.selected > self.entities.len()
            || zones.preserved > zones.selected
        {
            return Err(GeneticError::Configuration(format!(
                "zones (preserved {}, selected {}) do not fit a population of {}",
                zones.preserved,
                zones.selected,
                self.entities.len()
            )));
        }
        Ok(())
    }

    fn scores(&self) -> Result<Vec<f64>> {
        self.entities.iter().map(Entity::fitness).collect()
    }

    /// Evaluates every entity with the objective.
    pub fn evaluate<O>(&mut self, objective: &O)
    where
        O: Objective + ?Sized,
    {
        let space = self.space;
        for entity in &mut self.entities {
            entity.evaluate(objective, &space);
        }
    }

    /// Stable sort, best entity first.
    pub fn sort(&mut self) -> Result<()> {
        let mut scores = self.scores()?;
        selection::cut::rank(&mut self.entities, &mut scores, self.space.goal);
        Ok(())
    }

    /// A copy of the best entity; the first one wins a tie.
    pub fn best(&self) -> Result<Entity> {
        let scores = self.scores()?;
        let mut best = 0;
        for index in 1..scores.len() {
            if self.space.is_better(scores[index], scores[best]) {
                best = index;
            }
        }
        Ok(self.entities[best].clone())
    }

    /// Moves the `count` best entities, best first, into slots `[0, count)`.
    pub fn preserve_best(&mut self, count: usize) -> Result<()> {
        let mut scores = self.scores()?;
        selection::elitist::preserve_best(&mut self.entities, &mut scores, self.space.goal, count);
        Ok(())
    }

    /// Fills the parent pool `[zones.preserved, zones.selected)` using `kind`.
    /// Elites must already be in place.
    pub fn select(
        &mut self,
        kind: SelectionKind,
        zones: Zones,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        self.check_zones(zones)?;
        let slots = zones.selected - zones.preserved;
        let goal = self.space.goal;

        let picks = match kind {
            SelectionKind::Random => selection::random::pick(self.len(), slots, rng),
            SelectionKind::Tournament => {
                selection::tournament::pick(&self.scores()?, goal, slots, rng)
            }
            SelectionKind::Roulette => selection::roulette::pick(&self.scores()?, goal, slots, rng),
            SelectionKind::Cut => return self.sort(),
        };

        let chosen: Vec<Entity> = picks
            .into_iter()
            .map(|index| self.entities[index].clone())
            .collect();
        for (slot, entity) in (zones.preserved..zones.selected).zip(chosen) {
            self.entities[slot] = entity;
        }
        Ok(())
    }

    /// Replaces every slot in `[zones.selected, len)` with a child of two
    /// parents drawn from `[0, zones.selected)`.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` when the zones do not fit the
    /// population or leave the parent pool empty.
    pub fn crossbreed(
        &mut self,
        kind: CrossbreedingKind,
        zones: Zones,
        rng: &mut RandomNumberGenerator,
    ) -> Result<()> {
        self.check_zones(zones)?;
        for slot in zones.selected..self.entities.len() {
            let first = rng.index(zones.selected);
            let second = rng.index(zones.selected);
            let child = kind.crossbreed(
                self.entities[first].genome(),
                self.entities[second].genome(),
                rng,
            );
            self.entities[slot] = Entity::from_genome(child);
        }
        Ok(())
    }

    /// Mutates each non-elite entity with the given probability.
    pub fn mutate(
        &mut self,
        kind: MutationKind,
        zones: Zones,
        probability: f64,
        rng: &mut RandomNumberGenerator,
    ) {
        for entity in self.entities.iter_mut().skip(zones.preserved) {
            if rng.unit() < probability {
                entity.mutate(kind, rng);
            }
        }
    }
}

/// Numbered listing of the entities in their current order.
impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, entity) in self.entities.iter().enumerate() {
            writeln!(f, "{}. {}", index + 1, entity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::Genome;
    use crate::search_space::Goal;

    fn population_of(values: &[u64], goal: Goal) -> Population {
        let entities = values
            .iter()
            .map(|&v| Entity::from_genome(Genome::new(v, 8)))
            .collect();
        Population::from_entities(entities, SearchSpace::new(0.0, 256.0, goal)).unwrap()
    }

    fn identity(x: f64) -> f64 {
        x
    }

    fn values(population: &Population) -> Vec<u64> {
        population
            .entities()
            .iter()
            .map(|e| e.genome().value())
            .collect()
    }

    #[test]
    fn test_empty_population_is_rejected() {
        let result = Population::from_entities(Vec::new(), SearchSpace::default());
        assert!(matches!(result, Err(GeneticError::EmptyPopulation)));
    }

    #[test]
    fn test_random_population_size() {
        let mut rng = RandomNumberGenerator::from_seed(1);
        let population = Population::random(12, 30, SearchSpace::default(), &mut rng).unwrap();
        assert_eq!(population.len(), 12);
        assert!(!population.is_empty());
        assert!(population.entities().iter().all(|e| !e.is_evaluated()));
    }

    #[test]
    fn test_reads_before_evaluation_fail() {
        let mut population = population_of(&[1, 2, 3], Goal::Maximize);
        assert!(matches!(population.best(), Err(GeneticError::NotEvaluated)));
        assert!(population.sort().is_err());
        assert!(population.preserve_best(1).is_err());
    }

    #[test]
    fn test_sort_and_best() {
        let mut population = population_of(&[10, 200, 30, 200, 5], Goal::Maximize);
        population.evaluate(&identity);
        assert_eq!(population.best().unwrap().genome().value(), 200);
        population.sort().unwrap();
        assert_eq!(values(&population), vec![200, 200, 30, 10, 5]);

        let mut population = population_of(&[10, 200, 30, 5], Goal::Minimize);
        population.evaluate(&identity);
        population.sort().unwrap();
        assert_eq!(values(&population), vec![5, 10, 30, 200]);
    }

    #[test]
    fn test_best_prefers_first_on_tie() {
        let entities = vec![
            Entity::from_genome(Genome::new(1, 8)),
            Entity::from_genome(Genome::new(2, 8)),
        ];
        let mut population = Population::from_entities(entities, SearchSpace::default()).unwrap();
        population.evaluate(&|_: f64| 0.0);
        assert_eq!(population.best().unwrap().genome().value(), 1);
    }

    #[test]
    fn test_elites_dominate_previous_population_after_selection() {
        let mut rng = RandomNumberGenerator::from_seed(77);
        for kind in [
            SelectionKind::Random,
            SelectionKind::Tournament,
            SelectionKind::Roulette,
            SelectionKind::Cut,
        ] {
            for goal in [Goal::Maximize, Goal::Minimize] {
                let space = SearchSpace::new(-5.0, 5.0, goal);
                let mut population = Population::random(20, 16, space, &mut rng).unwrap();
                population.evaluate(&|x: f64| x * x - x);

                let zones = Zones::new(3, 10);
                population.preserve_best(zones.preserved).unwrap();
                let others: Vec<f64> = population.entities()[zones.preserved..]
                    .iter()
                    .map(|e| e.fitness().unwrap())
                    .collect();
                population.select(kind, zones, &mut rng).unwrap();

                for elite in &population.entities()[..zones.preserved] {
                    let elite = elite.fitness().unwrap();
                    for &other in &others {
                        assert!((elite - other) * goal.scale() >= 0.0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_selection_leaves_offspring_zone() {
        let mut rng = RandomNumberGenerator::from_seed(3);
        let mut population = population_of(&[1, 2, 3, 4, 5, 6], Goal::Maximize);
        population.evaluate(&identity);
        population.preserve_best(1).unwrap();
        let tail_before = values(&population)[4..].to_vec();
        population
            .select(SelectionKind::Tournament, Zones::new(1, 4), &mut rng)
            .unwrap();
        assert_eq!(values(&population)[0], 6);
        assert_eq!(values(&population)[4..].to_vec(), tail_before);
    }

    #[test]
    fn test_cut_selection_ranks_population() {
        let mut rng = RandomNumberGenerator::from_seed(4);
        let mut population = population_of(&[3, 9, 1, 7, 5], Goal::Maximize);
        population.evaluate(&identity);
        population.preserve_best(1).unwrap();
        population
            .select(SelectionKind::Cut, Zones::new(1, 3), &mut rng)
            .unwrap();
        assert_eq!(values(&population), vec![9, 7, 5, 3, 1]);
    }

    #[test]
    fn test_crossbreed_only_touches_offspring_zone() {
        let mut rng = RandomNumberGenerator::from_seed(5);
        let mut population = population_of(&[0xA5, 0xAA, 1, 2, 3, 4], Goal::Maximize);
        population.evaluate(&identity);
        population
            .crossbreed(CrossbreedingKind::Uniform, Zones::new(0, 2), &mut rng)
            .unwrap();

        assert_eq!(&values(&population)[..2], &[0xA5, 0xAA]);
        assert!(population.entities()[..2].iter().all(Entity::is_evaluated));
        for child in &population.entities()[2..] {
            assert!(!child.is_evaluated());
            // Both parents share the high nibble.
            assert_eq!(child.genome().value() & 0xF0, 0xA0);
        }
    }

    #[test]
    fn test_zones_outside_population_are_rejected() {
        let mut rng = RandomNumberGenerator::from_seed(8);
        let mut population = population_of(&[1, 2, 3, 4], Goal::Maximize);
        population.evaluate(&identity);

        for zones in [Zones::new(0, 0), Zones::new(1, 5), Zones::new(3, 2)] {
            for kind in [
                SelectionKind::Random,
                SelectionKind::Roulette,
                SelectionKind::Cut,
            ] {
                match population.select(kind, zones, &mut rng) {
                    Err(GeneticError::Configuration(msg)) => {
                        assert!(msg.contains("population of 4"));
                    }
                    other => panic!("Expected Configuration error, got {:?}", other),
                }
            }
            assert!(population
                .crossbreed(CrossbreedingKind::OnePoint, zones, &mut rng)
                .is_err());
        }
        assert_eq!(values(&population), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_mutate_spares_elites() {
        let mut rng = RandomNumberGenerator::from_seed(6);
        let mut population = population_of(&[1, 2, 3, 4, 5], Goal::Maximize);
        population.evaluate(&identity);
        population.mutate(MutationKind::Random, Zones::new(2, 3), 1.0, &mut rng);

        assert_eq!(&values(&population)[..2], &[1, 2]);
        assert!(population.entities()[..2].iter().all(Entity::is_evaluated));
        assert!(population.entities()[2..].iter().all(|e| !e.is_evaluated()));
    }

    #[test]
    fn test_zero_probability_never_mutates() {
        let mut rng = RandomNumberGenerator::from_seed(7);
        let mut population = population_of(&[1, 2, 3, 4, 5], Goal::Maximize);
        population.evaluate(&identity);
        population.mutate(MutationKind::Reverse, Zones::new(0, 3), 0.0, &mut rng);
        assert_eq!(values(&population), vec![1, 2, 3, 4, 5]);
        assert!(population.entities().iter().all(Entity::is_evaluated));
    }

    #[test]
    fn test_display_numbers_entities() {
        let population = population_of(&[1, 2], Goal::Maximize);
        let dump = population.to_string();
        assert!(dump.starts_with("1. entity: (not evaluated), bits: [00000001]"));
        assert!(dump.contains("2. entity: (not evaluated), bits: [00000010] (int value: 2)"));
    }
}
