//! # Entity
//!
//! An `Entity` is a candidate solution: a [`Genome`] plus the fitness it scored
//! at the last evaluation. Fitness is `None` until the entity is evaluated and
//! goes back to `None` after any change to the genome, so a stale read is
//! reported as [`GeneticError::NotEvaluated`] instead of returning an old score.
//!
//! ## Example
//!
//! ```rust
//! use bitga::entity::Entity;
//! use bitga::genome::Genome;
//! use bitga::search_space::{Goal, SearchSpace};
//!
//! let space = SearchSpace::new(0.0, 8.0, Goal::Maximize);
//! let mut entity = Entity::from_genome(Genome::new(0b100, 3));
//!
//! assert!(entity.fitness().is_err());
//! assert_eq!(entity.evaluate(&|x: f64| x * x, &space), 16.0);
//! assert_eq!(entity.fitness().unwrap(), 16.0);
//!
//! entity.flip_bit(0).unwrap();
//! assert!(entity.fitness().is_err());
//! ```

use std::fmt;

use crate::breeding::MutationKind;
use crate::error::{GeneticError, Result};
use crate::evolution::Objective;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;
use crate::search_space::SearchSpace;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    genome: Genome,
    fitness: Option<f64>,
}

impl Entity {
    /// Creates an unevaluated entity with a uniformly random genome.
    pub fn random(width: usize, rng: &mut RandomNumberGenerator) -> Self {
        Self::from_genome(Genome::random(width, rng))
    }

    pub fn from_genome(genome: Genome) -> Self {
        Self {
            genome,
            fitness: None,
        }
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn decode(&self, space: &SearchSpace) -> f64 {
        space.decode(&self.genome)
    }

    /// Scores the decoded value with the objective, caches and returns it.
    pub fn evaluate<O>(&mut self, objective: &O, space: &SearchSpace) -> f64
    where
        O: Objective + ?Sized,
    {
        let score = objective.score(self.decode(space));
        self.fitness = Some(score);
        score
    }

    pub fn fitness(&self) -> Result<f64> {
        self.fitness.ok_or(GeneticError::NotEvaluated)
    }

    pub fn is_evaluated(&self) -> bool {
        self.fitness.is_some()
    }

    pub fn get_bit(&self, index: usize) -> Result<bool> {
        self.genome.get(index)
    }

    pub fn set_bit(&mut self, index: usize, bit: bool) -> Result<()> {
        self.genome.set(index, bit)?;
        self.fitness = None;
        Ok(())
    }

    pub fn flip_bit(&mut self, index: usize) -> Result<()> {
        self.genome.flip(index)?;
        self.fitness = None;
        Ok(())
    }

    /// Applies one mutation in place. The fitness is stale afterwards.
    pub fn mutate(&mut self, kind: MutationKind, rng: &mut RandomNumberGenerator) {
        kind.mutate(&mut self.genome, rng);
        self.fitness = None;
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fitness {
            Some(score) => write!(f, "entity: {}", score)?,
            None => write!(f, "entity: (not evaluated)")?,
        }
        write!(f, ", bits: [{}] (int value: {})", self.genome, self.genome.value())
    }
}
