//! Trial execution and the Monte Carlo engine
//!
//! One trial draws `n_groups` identical-population samples and runs both
//! tests on the same data. The engine repeats this `n_iter` times with
//! per-trial seeds derived up front from the master seed, so sequential
//! and parallel execution produce bit-identical p-value distributions.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use crate::config::{DetailLevel, SimulationConfig};
use crate::error::{Result, SimError};
use crate::hypothesis::{min_pairwise_p, one_way_anova};
use crate::sample::draw_trial;
use crate::summary::{FiveNumberSummary, proportion_below};

/// Progress events are emitted every this many completed iterations.
pub const PROGRESS_CADENCE: usize = 10;

/// Both p-values from a single trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialOutcome {
    /// Minimum p-value over all pairwise Welch tests
    pub pairwise_min_p: f64,
    /// p-value of the one-way ANOVA on the same data
    pub omnibus_p: f64,
}

/// Run one full trial: sample, then both tests on identical data.
///
/// The only side effect is consumption of the supplied random source.
pub fn run_trial<R: Rng>(rng: &mut R, n_groups: usize, n_obs: usize) -> Result<TrialOutcome> {
    let groups = draw_trial(rng, n_groups, n_obs);

    Ok(TrialOutcome {
        pairwise_min_p: min_pairwise_p(&groups)?,
        omnibus_p: one_way_anova(&groups)?.p_value,
    })
}

/// Shared progress tracking for a simulation run.
///
/// The engine only increments the completed counter and checks the
/// cancellation flag; resetting the counters is the caller's job, which
/// lets a sweep share one tracker across all of its cells.
#[derive(Debug, Clone)]
pub struct SimulationProgress {
    completed: Arc<AtomicUsize>,
    total: Arc<AtomicUsize>,
    cancelled: Arc<AtomicBool>,
}

impl SimulationProgress {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            completed: Arc::new(AtomicUsize::new(0)),
            total: Arc::new(AtomicUsize::new(total)),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Create from existing atomics (for front-end integration).
    pub fn from_atomics(
        completed: Arc<AtomicUsize>,
        total: Arc<AtomicUsize>,
        cancelled: Arc<AtomicBool>,
    ) -> Self {
        Self {
            completed,
            total,
            cancelled,
        }
    }

    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total.load(Ordering::Relaxed)
    }

    /// Increment the completed counter, returning the new count.
    pub fn increment(&self) -> usize {
        self.completed.fetch_add(1, Ordering::Relaxed) + 1
    }

    pub fn reset(&self, total: usize) {
        self.completed.store(0, Ordering::Relaxed);
        self.total.store(total, Ordering::Relaxed);
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

impl Default for SimulationProgress {
    fn default() -> Self {
        Self::new(0)
    }
}

/// Reject-rate and optional distribution detail for one test type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestSummary {
    /// Proportion of trials with p strictly below the threshold
    pub reject_rate: f64,
    /// Five-number summary of the p-value distribution (Full detail only)
    pub summary: Option<FiveNumberSummary>,
    /// The raw p-value distribution, length `n_iter` (Full detail only)
    pub p_values: Option<Vec<f64>>,
}

/// Structured result of one simulation call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationSummary {
    pub n_iter: usize,
    pub threshold: f64,
    /// Minimum-pairwise-p test (the uncorrected multiple-comparisons method)
    pub pairwise: TestSummary,
    /// One-way ANOVA omnibus test
    pub omnibus: TestSummary,
}

/// Run the full simulation described by `config`.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationSummary> {
    simulate_with_progress(config, None)
}

/// Run the simulation, optionally reporting to a shared progress tracker.
///
/// Cancellation through the tracker aborts the whole call with
/// `SimError::Cancelled`; no partial results are returned.
pub fn simulate_with_progress(
    config: &SimulationConfig,
    progress: Option<&SimulationProgress>,
) -> Result<SimulationSummary> {
    config.validate()?;

    // One seed per trial, derived from the master seed. Trials then run
    // in any order (or in parallel) without changing any single trial.
    let mut seeder = SmallRng::seed_from_u64(config.seed);
    let seeds: Vec<u64> = (0..config.n_iter).map(|_| seeder.next_u64()).collect();

    let completed = AtomicUsize::new(0);
    let run_seeded = |seed: &u64| -> Result<TrialOutcome> {
        if let Some(p) = progress
            && p.is_cancelled()
        {
            return Err(SimError::Cancelled);
        }

        let mut rng = SmallRng::seed_from_u64(*seed);
        let outcome = run_trial(&mut rng, config.n_groups, config.n_obs)?;

        let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
        if let Some(p) = progress {
            p.increment();
        }
        if config.verbose && done % PROGRESS_CADENCE == 0 {
            tracing::info!(completed = done, total = config.n_iter, "simulation progress");
        }

        Ok(outcome)
    };

    #[cfg(feature = "parallel")]
    let outcomes: Result<Vec<TrialOutcome>> = seeds.par_iter().map(run_seeded).collect();
    #[cfg(not(feature = "parallel"))]
    let outcomes: Result<Vec<TrialOutcome>> = seeds.iter().map(run_seeded).collect();
    let outcomes = outcomes?;

    let pairwise_ps: Vec<f64> = outcomes.iter().map(|o| o.pairwise_min_p).collect();
    let omnibus_ps: Vec<f64> = outcomes.iter().map(|o| o.omnibus_p).collect();
    debug_assert_eq!(pairwise_ps.len(), config.n_iter);

    Ok(SimulationSummary {
        n_iter: config.n_iter,
        threshold: config.threshold,
        pairwise: summarize(pairwise_ps, config),
        omnibus: summarize(omnibus_ps, config),
    })
}

fn summarize(p_values: Vec<f64>, config: &SimulationConfig) -> TestSummary {
    let reject_rate = proportion_below(&p_values, config.threshold);
    match config.detail_level {
        DetailLevel::Summary => TestSummary {
            reject_rate,
            summary: None,
            p_values: None,
        },
        DetailLevel::Full => TestSummary {
            reject_rate,
            summary: FiveNumberSummary::from_values(&p_values),
            p_values: Some(p_values),
        },
    }
}
