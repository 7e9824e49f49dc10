// src/config/validate.rs

use crate::config::model::{ConfigFile, ExperimentSection};
use crate::errors::{PlandagError, Result};

/// Run basic semantic validation against a loaded configuration.
///
/// This checks that the experiment parameters satisfy the generator's
/// preconditions; it does **not** touch anything about individual instances —
/// those are validated (or deliberately left unchecked) by the input layer.
pub fn validate_config(cfg: &ConfigFile) -> Result<()> {
    validate_experiment(&cfg.experiment)
}

fn validate_experiment(exp: &ExperimentSection) -> Result<()> {
    if exp.trials == 0 {
        return Err(PlandagError::Config(
            "[experiment].trials must be >= 1 (got 0)".to_string(),
        ));
    }
    if exp.n_steps == 0 {
        return Err(PlandagError::Config(
            "[experiment].n_steps must be >= 1 (got 0)".to_string(),
        ));
    }
    if exp.n_start < 4 {
        return Err(PlandagError::Config(format!(
            "[experiment].n_start must be >= 4 (got {}): the generator draws \
             maxFrontierSize from [3, n)",
            exp.n_start
        )));
    }
    if exp.edge_percent > 100 {
        return Err(PlandagError::Config(format!(
            "[experiment].edge_percent must be <= 100 (got {})",
            exp.edge_percent
        )));
    }
    Ok(())
}
