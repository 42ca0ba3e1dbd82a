//! Sweep evaluator - one engine run per grid cell.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SimError};
use crate::simulation::{SimulationProgress, simulate_with_progress};

use super::{SweepConfig, SweepMatrix};

/// Reject-rate matrices for both test types, one cell per
/// (group count, observation count) combination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepResults {
    /// Minimum-pairwise-p reject-rates
    pub pairwise: SweepMatrix,
    /// One-way ANOVA reject-rates
    pub omnibus: SweepMatrix,
}

impl SweepResults {
    /// Matrix shape as (rows, cols); both matrices always agree.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.pairwise.shape()
    }
}

/// Run the simulation engine over the full Cartesian grid.
///
/// Every cell uses the sweep's shared seed, so a cell's value is identical
/// to an isolated engine run with the same combination. Cancellation
/// through the progress tracker aborts the whole sweep.
pub fn sweep_evaluate(
    config: &SweepConfig,
    progress: Option<&SimulationProgress>,
) -> Result<SweepResults> {
    config.validate()?;

    // Progress counts individual trials, not cells, so long cells still
    // move the bar.
    if let Some(p) = progress {
        p.reset(config.total_points() * config.n_iter);
    }

    let mut pairwise = SweepMatrix::new(config.group_counts.clone(), config.obs_counts.clone());
    let mut omnibus = SweepMatrix::new(config.group_counts.clone(), config.obs_counts.clone());

    let (rows, cols) = config.shape();
    for row in 0..rows {
        for col in 0..cols {
            if let Some(p) = progress
                && p.is_cancelled()
            {
                return Err(SimError::Cancelled);
            }

            let cell = config.cell_config(row, col);
            let summary = simulate_with_progress(&cell, progress)?;

            pairwise.set(row, col, summary.pairwise.reject_rate);
            omnibus.set(row, col, summary.omnibus.reject_rate);

            tracing::debug!(
                n_groups = cell.n_groups,
                n_obs = cell.n_obs,
                pairwise_rate = summary.pairwise.reject_rate,
                omnibus_rate = summary.omnibus.reject_rate,
                "sweep cell complete"
            );
        }
    }

    Ok(SweepResults { pairwise, omnibus })
}
