//! Plain-text rendering of simulation and sweep results.

use alphasim_core::analysis::{SweepConfig, SweepResults};
use alphasim_core::config::SimulationConfig;
use alphasim_core::simulation::{SimulationSummary, TestSummary};
use alphasim_core::summary::FiveNumberSummary;

pub fn print_simulation(config: &SimulationConfig, summary: &SimulationSummary) {
    println!(
        "{} trials, {} groups x {} obs, alpha = {}",
        summary.n_iter, config.n_groups, config.n_obs, summary.threshold
    );
    println!();
    println!("{:<22} {:>12}", "method", "reject rate");
    print_method_row("pairwise minimum", &summary.pairwise);
    print_method_row("one-way ANOVA", &summary.omnibus);

    if let (Some(pairwise), Some(omnibus)) =
        (summary.pairwise.summary.as_ref(), summary.omnibus.summary.as_ref())
    {
        println!();
        println!(
            "{:<22} {:>8} {:>8} {:>8} {:>8} {:>8} {:>8}",
            "p-value distribution", "min", "q1", "median", "q3", "max", "mean"
        );
        print_summary_row("pairwise minimum", pairwise);
        print_summary_row("one-way ANOVA", omnibus);
    }
}

fn print_method_row(label: &str, test: &TestSummary) {
    println!("{:<22} {:>12.4}", label, test.reject_rate);
}

fn print_summary_row(label: &str, s: &FiveNumberSummary) {
    println!(
        "{:<22} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>8.4} {:>8.4}",
        label, s.min, s.q1, s.median, s.q3, s.max, s.mean
    );
}

pub fn print_sweep(config: &SweepConfig, results: &SweepResults) {
    println!(
        "{} trials per cell, alpha = {}",
        config.n_iter, config.threshold
    );
    println!();
    print_matrix("pairwise minimum reject rate", results, true);
    println!();
    print_matrix("one-way ANOVA reject rate", results, false);
}

fn print_matrix(title: &str, results: &SweepResults, pairwise: bool) {
    let matrix = if pairwise {
        &results.pairwise
    } else {
        &results.omnibus
    };

    println!("{title} (rows: groups, cols: obs/group)");
    print!("{:>8}", "");
    for n_obs in matrix.obs_counts() {
        print!("{n_obs:>8}");
    }
    println!();

    for (i, n_groups) in matrix.group_counts().iter().enumerate() {
        print!("{n_groups:>8}");
        for rate in matrix.row(i).unwrap_or(&[]) {
            print!("{rate:>8.4}");
        }
        println!();
    }
}
