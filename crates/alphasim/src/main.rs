use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use alphasim_core::analysis::{SweepConfig, sweep_evaluate};
use alphasim_core::config::{DetailLevel, SimulationConfig};
use alphasim_core::simulation::simulate;

mod report;

#[derive(Parser, Debug)]
#[command(name = "alphasim")]
#[command(about = "Monte Carlo demonstration of multiple-comparison false-positive inflation")]
struct Args {
    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Emit results as JSON instead of text tables
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run one simulation and report both false-positive rates
    Run {
        /// Number of groups per trial
        #[arg(long, default_value_t = 3)]
        n_groups: usize,
        /// Observations per group
        #[arg(long, default_value_t = 10)]
        n_obs: usize,
        /// Number of Monte Carlo trials
        #[arg(long, default_value_t = 1000)]
        n_iter: usize,
        /// Significance threshold
        #[arg(long, default_value_t = 0.05)]
        threshold: f64,
        /// Master random seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Report progress every 10 iterations
        #[arg(short, long)]
        verbose: bool,
        /// Also report per-distribution five-number summaries
        #[arg(long)]
        full: bool,
    },
    /// Sweep a (groups x observations) grid and print both matrices
    Sweep {
        /// Comma-separated group counts (matrix rows)
        #[arg(long, value_delimiter = ',', default_value = "2,3,4,5,6")]
        groups: Vec<usize>,
        /// Comma-separated observation counts (matrix columns)
        #[arg(long, value_delimiter = ',', default_value = "10,25,50,100")]
        obs: Vec<usize>,
        /// Monte Carlo trials per grid cell
        #[arg(long, default_value_t = 1000)]
        n_iter: usize,
        /// Significance threshold shared by all cells
        #[arg(long, default_value_t = 0.05)]
        threshold: f64,
        /// Seed applied to every cell
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(args.log_level.clone())),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Run {
            n_groups,
            n_obs,
            n_iter,
            threshold,
            seed,
            verbose,
            full,
        } => {
            let config = SimulationConfig {
                n_groups,
                n_obs,
                n_iter,
                threshold,
                seed,
                verbose,
                detail_level: if full {
                    DetailLevel::Full
                } else {
                    DetailLevel::Summary
                },
            };
            let summary = simulate(&config)?;

            if args.json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                report::print_simulation(&config, &summary);
            }
        }
        Command::Sweep {
            groups,
            obs,
            n_iter,
            threshold,
            seed,
        } => {
            let config = SweepConfig {
                group_counts: groups,
                obs_counts: obs,
                n_iter,
                threshold,
                seed,
            };
            let total = config.total_points();
            let results = sweep_evaluate(&config, None)?;
            tracing::info!(cells = total, "sweep complete");

            if args.json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                report::print_sweep(&config, &results);
            }
        }
    }

    Ok(())
}
