// src/config/model.rs

use serde::Deserialize;

/// Top-level experiment configuration as read from a TOML file.
///
/// ```toml
/// [experiment]
/// n_start = 8
/// n_steps = 5
/// trials = 20
/// edge_percent = 3
/// seed = 42
/// verbose = false
/// ```
///
/// Every field is optional and has a sensible default.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ConfigFile {
    /// Batch parameters from `[experiment]`.
    #[serde(default)]
    pub experiment: ExperimentSection,
}

/// `[experiment]` section.
///
/// An experiment runs `trials` random instances for each task count in
/// `n_start .. n_start + n_steps`, aggregating statistics per task count.
#[derive(Debug, Clone, Deserialize)]
pub struct ExperimentSection {
    /// Smallest task count in the sweep.
    #[serde(default = "default_n_start")]
    pub n_start: usize,

    /// How many consecutive task counts to sweep.
    #[serde(default = "default_n_steps")]
    pub n_steps: usize,

    /// Random instances per task count.
    #[serde(default = "default_trials")]
    pub trials: usize,

    /// Probability (in percent) that an eligible ordered pair becomes a
    /// precedence edge.
    #[serde(default = "default_edge_percent")]
    pub edge_percent: u32,

    /// RNG seed; omitted means seeded from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Print a per-run block for every trial.
    #[serde(default)]
    pub verbose: bool,
}

fn default_n_start() -> usize {
    8
}

fn default_n_steps() -> usize {
    5
}

fn default_trials() -> usize {
    20
}

fn default_edge_percent() -> u32 {
    3
}

impl Default for ExperimentSection {
    fn default() -> Self {
        Self {
            n_start: default_n_start(),
            n_steps: default_n_steps(),
            trials: default_trials(),
            edge_percent: default_edge_percent(),
            seed: None,
            verbose: false,
        }
    }
}
