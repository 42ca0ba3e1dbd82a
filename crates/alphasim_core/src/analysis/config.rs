//! Configuration and grid storage for sweep analysis.

use serde::{Deserialize, Serialize};

use crate::config::{DetailLevel, SimulationConfig};
use crate::error::{Result, SimError};

fn default_n_iter() -> usize {
    1000
}

fn default_threshold() -> f64 {
    0.05
}

fn default_seed() -> u64 {
    42
}

/// Configuration for a 2-D sweep over group and observation counts.
///
/// The remaining engine parameters (`n_iter`, `threshold`, `seed`) are held
/// fixed across all cells; each cell runs with minimal verbosity and
/// summary-level detail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepConfig {
    /// Candidate group counts (matrix row labels, in this order)
    pub group_counts: Vec<usize>,
    /// Candidate observations-per-group counts (matrix column labels)
    pub obs_counts: Vec<usize>,
    /// Monte Carlo iterations per cell
    #[serde(default = "default_n_iter")]
    pub n_iter: usize,
    /// Significance threshold shared by all cells
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Seed applied to every cell, so each cell reproduces an isolated
    /// run of the engine with the same combination
    #[serde(default = "default_seed")]
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            group_counts: vec![2, 3, 4, 5, 6],
            obs_counts: vec![10, 25, 50, 100],
            n_iter: default_n_iter(),
            threshold: default_threshold(),
            seed: default_seed(),
        }
    }
}

impl SweepConfig {
    /// Fail-fast validation of the whole grid before any cell runs.
    pub fn validate(&self) -> Result<()> {
        if self.group_counts.is_empty() {
            return Err(SimError::EmptySweepAxis("group_counts"));
        }
        if self.obs_counts.is_empty() {
            return Err(SimError::EmptySweepAxis("obs_counts"));
        }
        // Validating the first cell covers the shared parameters; the
        // axis entries are checked individually.
        for &k in &self.group_counts {
            if k < 2 {
                return Err(SimError::InvalidGroupCount(k));
            }
        }
        for &n in &self.obs_counts {
            if n < 2 {
                return Err(SimError::InvalidObsCount(n));
            }
        }
        self.cell_config(0, 0).validate()
    }

    /// Grid shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.group_counts.len(), self.obs_counts.len())
    }

    /// Total number of grid cells.
    #[must_use]
    pub fn total_points(&self) -> usize {
        self.group_counts.len() * self.obs_counts.len()
    }

    /// The engine configuration for one grid cell.
    ///
    /// A pure function of the cell indices, so cells are independently
    /// schedulable units of work.
    #[must_use]
    pub fn cell_config(&self, row: usize, col: usize) -> SimulationConfig {
        SimulationConfig {
            n_groups: self.group_counts[row],
            n_obs: self.obs_counts[col],
            n_iter: self.n_iter,
            threshold: self.threshold,
            seed: self.seed,
            verbose: false,
            detail_level: DetailLevel::Summary,
        }
    }
}

/// Row-major 2-D reject-rate table with axis labels.
///
/// Rows are indexed by group count, columns by observation count, using
/// the orderings supplied in `SweepConfig`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SweepMatrix {
    group_counts: Vec<usize>,
    obs_counts: Vec<usize>,
    /// Cell (i, j) lives at `data[i * obs_counts.len() + j]`
    data: Vec<f64>,
}

impl SweepMatrix {
    /// Create a zero-filled matrix with the given axis labels.
    #[must_use]
    pub fn new(group_counts: Vec<usize>, obs_counts: Vec<usize>) -> Self {
        let len = group_counts.len() * obs_counts.len();
        Self {
            group_counts,
            obs_counts,
            data: vec![0.0; len],
        }
    }

    /// Matrix shape as (rows, cols).
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.group_counts.len(), self.obs_counts.len())
    }

    /// Row labels: the swept group counts.
    #[must_use]
    pub fn group_counts(&self) -> &[usize] {
        &self.group_counts
    }

    /// Column labels: the swept observation counts.
    #[must_use]
    pub fn obs_counts(&self) -> &[usize] {
        &self.obs_counts
    }

    /// Reject-rate at (row, col), or `None` out of bounds.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.flat_index(row, col).map(|i| self.data[i])
    }

    /// Set the reject-rate at (row, col). Returns false out of bounds.
    pub fn set(&mut self, row: usize, col: usize, value: f64) -> bool {
        if let Some(i) = self.flat_index(row, col) {
            self.data[i] = value;
            true
        } else {
            false
        }
    }

    /// One row of reject-rates (fixed group count across all obs counts).
    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let cols = self.obs_counts.len();
        if row < self.group_counts.len() {
            Some(&self.data[row * cols..(row + 1) * cols])
        } else {
            None
        }
    }

    /// The full row-major backing data.
    #[must_use]
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    fn flat_index(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.group_counts.len() && col < self.obs_counts.len() {
            Some(row * self.obs_counts.len() + col)
        } else {
            None
        }
    }
}
