use crate::error::{GeneticError, Result};

use super::{EvolutionLauncher, EvolutionOptions, Objective};

/// Assembles an [`EvolutionLauncher`]. The objective is required; options fall
/// back to [`EvolutionOptions::default`].
pub struct EvolutionLauncherBuilder<O>
where
    O: Objective,
{
    options: Option<EvolutionOptions>,
    objective: Option<O>,
}

impl<O> EvolutionLauncherBuilder<O>
where
    O: Objective,
{
    pub fn new() -> Self {
        Self {
            options: None,
            objective: None,
        }
    }

    pub fn with_options(mut self, options: EvolutionOptions) -> Self {
        self.options = Some(options);
        self
    }

    pub fn with_objective(mut self, objective: O) -> Self {
        self.objective = Some(objective);
        self
    }

    pub fn build(self) -> Result<EvolutionLauncher<O>> {
        let objective = self
            .objective
            .ok_or_else(|| GeneticError::Configuration("Objective not specified".to_string()))?;

        Ok(EvolutionLauncher::new(
            self.options.unwrap_or_default(),
            objective,
        ))
    }
}

impl<O> Default for EvolutionLauncherBuilder<O>
where
    O: Objective,
{
    fn default() -> Self {
        Self::new()
    }
}
