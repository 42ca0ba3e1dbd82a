//! 2-D parameter sweep over (group count, observation count).
//!
//! Runs the simulation engine once per cell of the Cartesian grid and
//! collects each test type's reject-rate into a labeled matrix for
//! downstream heatmap/contour rendering.
//!
//! ```ignore
//! use alphasim_core::analysis::{SweepConfig, sweep_evaluate};
//!
//! let config = SweepConfig {
//!     group_counts: vec![2, 3, 4, 5, 6],
//!     obs_counts: vec![10, 25, 50],
//!     ..Default::default()
//! };
//! let results = sweep_evaluate(&config, None)?;
//! let inflated = results.pairwise.get(4, 0); // 6 groups, 10 obs
//! ```

mod config;
mod evaluator;

pub use config::*;
pub use evaluator::*;
