//! Statistical properties of the two methods under the null hypothesis.
//!
//! All bounds leave several standard deviations of Monte Carlo slack
//! around the expected values so the tests are seed-robust.

use crate::config::SimulationConfig;
use crate::simulation::simulate;

fn run(n_groups: usize, n_obs: usize, n_iter: usize, seed: u64) -> (f64, f64) {
    let config = SimulationConfig {
        n_groups,
        n_obs,
        n_iter,
        seed,
        ..SimulationConfig::default()
    };
    let result = simulate(&config).unwrap();
    (result.pairwise.reject_rate, result.omnibus.reject_rate)
}

/// With 3 groups of 10 at alpha = 0.05 the omnibus test holds its nominal
/// rate while the uncorrected pairwise minimum rejects far more often.
#[test]
fn test_inflation_at_three_groups() {
    let (pairwise, omnibus) = run(3, 10, 10_000, 42);

    // Nominal: binomial sd is ~0.0022 at 10k iterations
    assert!(
        (0.04..=0.06).contains(&omnibus),
        "omnibus rate {omnibus} not near nominal 0.05"
    );
    // Three comparisons push the minimum's rate to roughly 0.12
    assert!(
        (0.09..=0.15).contains(&pairwise),
        "pairwise rate {pairwise} not in expected inflated band"
    );
    assert!(pairwise > omnibus + 0.03);
}

/// More groups mean more comparisons, so the pairwise reject-rate must not
/// decrease in the group count while the omnibus rate stays near nominal.
#[test]
fn test_pairwise_rate_grows_with_groups() {
    let (p2, o2) = run(2, 10, 2_000, 7);
    let (p3, o3) = run(3, 10, 2_000, 7);
    let (p5, o5) = run(5, 10, 2_000, 7);

    assert!(p2 < p3, "rate should grow from 2 to 3 groups: {p2} vs {p3}");
    assert!(p3 < p5, "rate should grow from 3 to 5 groups: {p3} vs {p5}");

    for rate in [o2, o3, o5] {
        assert!(
            (0.03..=0.07).contains(&rate),
            "omnibus rate {rate} drifted from nominal"
        );
    }
}

/// With exactly two groups there is a single comparison, so both methods
/// reject at statistically indistinguishable rates.
#[test]
fn test_two_groups_methods_agree() {
    let (pairwise, omnibus) = run(2, 10, 2_000, 11);

    assert!(
        (pairwise - omnibus).abs() < 0.02,
        "two-group rates should agree: pairwise {pairwise}, omnibus {omnibus}"
    );
}

/// Law-of-large-numbers sanity check: more iterations do not move the
/// omnibus rate beyond Monte Carlo noise.
#[test]
fn test_rate_stable_under_more_iterations() {
    let (_, small) = run(3, 10, 2_000, 3);
    let (_, large) = run(3, 10, 8_000, 3);

    assert!(
        (small - large).abs() < 0.02,
        "omnibus rate moved too much: {small} vs {large}"
    );
}

/// Larger samples change test power, not the null false-positive rate.
#[test]
fn test_omnibus_nominal_across_sample_sizes() {
    for n_obs in [5, 20, 60] {
        let (_, omnibus) = run(3, n_obs, 2_000, 21);
        assert!(
            (0.03..=0.07).contains(&omnibus),
            "omnibus rate {omnibus} at n_obs={n_obs} drifted from nominal"
        );
    }
}
