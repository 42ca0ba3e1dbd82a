//! Simulation configuration
//!
//! `SimulationConfig` is the single input type for the engine. All fields
//! have defaults matching the classic demonstration setup: 3 groups of 10
//! observations, 1000 trials, alpha = 0.05.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};

fn default_n_groups() -> usize {
    3
}

fn default_n_obs() -> usize {
    10
}

fn default_n_iter() -> usize {
    1000
}

fn default_threshold() -> f64 {
    0.05
}

fn default_seed() -> u64 {
    42
}

/// How much of the per-trial data the engine keeps in its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DetailLevel {
    /// Only the reject-rates (proportion of p-values below the threshold)
    #[default]
    Summary,
    /// Also the full p-value distributions and their five-number summaries
    Full,
}

/// Complete configuration for one simulation call.
///
/// Every group in every trial is drawn from the same standard-normal
/// population, so any rejection is by construction a false positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of groups per trial (>= 2)
    #[serde(default = "default_n_groups")]
    pub n_groups: usize,
    /// Observations per group (>= 2)
    #[serde(default = "default_n_obs")]
    pub n_obs: usize,
    /// Number of Monte Carlo trials (>= 1)
    #[serde(default = "default_n_iter")]
    pub n_iter: usize,
    /// Significance threshold, open interval (0, 1)
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Master seed for the per-trial seed stream
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Emit progress events every `PROGRESS_CADENCE` iterations
    #[serde(default)]
    pub verbose: bool,
    /// What to keep in the result beyond the reject-rates
    #[serde(default)]
    pub detail_level: DetailLevel,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            n_groups: default_n_groups(),
            n_obs: default_n_obs(),
            n_iter: default_n_iter(),
            threshold: default_threshold(),
            seed: default_seed(),
            verbose: false,
            detail_level: DetailLevel::Summary,
        }
    }
}

impl SimulationConfig {
    /// Fail-fast precondition check, run before any trial.
    pub fn validate(&self) -> Result<()> {
        if self.n_groups < 2 {
            return Err(SimError::InvalidGroupCount(self.n_groups));
        }
        if self.n_obs < 2 {
            return Err(SimError::InvalidObsCount(self.n_obs));
        }
        if self.n_iter < 1 {
            return Err(SimError::InvalidIterations(self.n_iter));
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(SimError::InvalidThreshold(self.threshold));
        }
        Ok(())
    }
}
