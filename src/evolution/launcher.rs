use tracing::{debug, info};

use super::{
    convergence::{StagnationTracker, TerminationReason},
    objective::Objective,
    options::{EvolutionOptions, LogLevel},
};
use crate::{
    entity::Entity,
    error::{GeneticError, OptionExt, Result},
    population::Population,
    rng::RandomNumberGenerator,
};

/// What the launcher exposes to an observer after evaluating an epoch.
#[derive(Debug, Clone, Copy)]
pub struct EpochReport<'a> {
    /// Zero-based index of the epoch.
    pub epoch: usize,
    /// Best entity of this epoch (not necessarily of the run).
    pub best: &'a Entity,
    /// Decoded value of `best`.
    pub value: f64,
    /// Fitness of `best`.
    pub fitness: f64,
    /// Consecutive epochs, including this one, without meaningful improvement.
    pub stagnant_epochs: usize,
    /// The evaluated population, before selection reorders it.
    pub population: &'a Population,
}

/// Receives one report per epoch. Implemented for any `FnMut(&EpochReport)`.
pub trait EpochObserver {
    fn on_epoch(&mut self, report: &EpochReport<'_>);
}

impl<F> EpochObserver for F
where
    F: FnMut(&EpochReport<'_>),
{
    fn on_epoch(&mut self, report: &EpochReport<'_>) {
        self(report)
    }
}

struct SilentObserver;

impl EpochObserver for SilentObserver {
    fn on_epoch(&mut self, _report: &EpochReport<'_>) {}
}

/// The outcome of a run.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult {
    /// Best entity seen in any epoch.
    pub best: Entity,
    /// Decoded value of `best`.
    pub value: f64,
    /// Fitness of `best`.
    pub fitness: f64,
    /// Number of epochs executed.
    pub epochs: usize,
    pub reason: TerminationReason,
    /// Best fitness of each executed epoch, in order.
    pub history: Vec<f64>,
}

/// Runs the generational loop for one objective under one set of options.
#[derive(Debug, Clone)]
pub struct EvolutionLauncher<O>
where
    O: Objective,
{
    options: EvolutionOptions,
    objective: O,
}

impl<O> EvolutionLauncher<O>
where
    O: Objective,
{
    /// Creates a new `EvolutionLauncher` from validated options and an objective.
    pub fn new(options: EvolutionOptions, objective: O) -> Self {
        Self { options, objective }
    }

    pub fn options(&self) -> &EvolutionOptions {
        &self.options
    }

    pub fn objective(&self) -> &O {
        &self.objective
    }

    /// Evolves a fresh random population until the epoch budget runs out or the
    /// best fitness stagnates.
    ///
    /// # Errors
    ///
    /// Only contract violations inside the engine surface here; with options
    /// produced by the builder a run does not fail.
    pub fn run(&self, rng: &mut RandomNumberGenerator) -> Result<EvolutionResult> {
        self.run_with_observer(rng, &mut SilentObserver)
    }

    /// Same as [`run`](Self::run), reporting every epoch to `observer` right
    /// after evaluation.
    ///
    /// Each epoch evaluates the population, records the best entity, checks
    /// for stagnation, then places the elites and runs selection,
    /// crossbreeding and mutation.
    pub fn run_with_observer<Obs>(
        &self,
        rng: &mut RandomNumberGenerator,
        observer: &mut Obs,
    ) -> Result<EvolutionResult>
    where
        Obs: EpochObserver + ?Sized,
    {
        let options = &self.options;
        let space = *options.get_search_space();
        let zones = options.zones();
        let log_level = options.get_log_level();

        if log_level == LogLevel::Verbose {
            info!("starting evolution with options:\n{}", options);
        }

        let mut population = Population::random(
            options.get_population_size(),
            options.get_genome_width(),
            space,
            rng,
        )?;
        let mut tracker = StagnationTracker::new(
            options.get_quality_epsilon(),
            options.get_max_valueless_epochs(),
        );
        let mut best_so_far: Option<Entity> = None;
        let mut history = Vec::with_capacity(options.get_max_epochs());
        let mut reason = TerminationReason::MaxEpochs;

        for epoch in 0..options.get_max_epochs() {
            population.evaluate(&self.objective);

            let best = population.best()?;
            let fitness = best.fitness()?;
            let value = best.decode(&space);
            history.push(fitness);

            let improved = match &best_so_far {
                Some(current) => space.is_better(fitness, current.fitness()?),
                None => true,
            };
            if improved {
                best_so_far = Some(best.clone());
            }

            let stagnated = tracker.observe(fitness);

            match log_level {
                LogLevel::Verbose => {
                    info!(
                        epoch,
                        value,
                        fitness,
                        stagnant = tracker.stagnant_epochs(),
                        "epoch evaluated"
                    );
                    let mut ranked = population.clone();
                    ranked.sort()?;
                    debug!("epoch {} population:\n{}", epoch, ranked);
                }
                LogLevel::Minimal => {
                    info!(
                        epoch,
                        value,
                        fitness,
                        stagnant = tracker.stagnant_epochs(),
                        "epoch evaluated"
                    );
                }
                LogLevel::None => {}
            }

            observer.on_epoch(&EpochReport {
                epoch,
                best: &best,
                value,
                fitness,
                stagnant_epochs: tracker.stagnant_epochs(),
                population: &population,
            });

            if stagnated {
                reason = TerminationReason::Stagnation;
                break;
            }

            population.preserve_best(zones.preserved)?;
            population.select(options.get_selection(), zones, rng)?;
            population.crossbreed(options.get_crossbreeding(), zones, rng)?;
            population.mutate(
                options.get_mutation(),
                zones,
                options.get_mutation_probability(),
                rng,
            );
        }

        let best = best_so_far.ok_or_else_genetic(|| {
            GeneticError::Evolution("Evolution completed without evaluating an epoch".to_string())
        })?;
        let fitness = best.fitness()?;
        let value = best.decode(&space);

        if log_level != LogLevel::None {
            info!(epochs = history.len(), %reason, value, fitness, "evolution finished");
        }

        Ok(EvolutionResult {
            best,
            value,
            fitness,
            epochs: history.len(),
            reason,
            history,
        })
    }
}
