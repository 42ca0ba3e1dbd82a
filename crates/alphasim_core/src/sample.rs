//! Null-population sampling
//!
//! Every group in every trial is drawn from the same reference population,
//! a standard normal. The RNG is injected so that trials can be seeded
//! independently for reproducibility and parallel execution.

use rand::Rng;
use rand_distr::StandardNormal;

/// Draw `n_groups` independent groups of `n_obs` standard-normal
/// observations each.
///
/// Preconditions (`n_groups >= 2`, `n_obs >= 2`) are enforced by
/// `SimulationConfig::validate` before any trial runs.
pub fn draw_trial<R: Rng>(rng: &mut R, n_groups: usize, n_obs: usize) -> Vec<Vec<f64>> {
    (0..n_groups)
        .map(|_| (0..n_obs).map(|_| rng.sample(StandardNormal)).collect())
        .collect()
}
