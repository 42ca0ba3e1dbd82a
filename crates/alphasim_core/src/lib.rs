//! Multiple-comparisons false-positive simulation library
//!
//! This crate quantifies the inflated false-positive rate of running every
//! pairwise two-sample test instead of a single omnibus test. All groups in
//! every trial are drawn from the same standard-normal population, so any
//! rejection is a false positive by construction. It supports:
//! - Welch two-sample t-tests over all unordered group pairs
//! - One-way ANOVA as the omnibus comparison on identical data
//! - Seed-deterministic Monte Carlo aggregation with optional `rayon`
//!   parallelism (the `parallel` feature, on by default)
//! - 2-D sweeps over (group count, observation count) producing labeled
//!   reject-rate matrices for heatmap rendering
//!
//! # Quick start
//!
//! ```ignore
//! use alphasim_core::config::SimulationConfig;
//! use alphasim_core::simulation::simulate;
//!
//! let summary = simulate(&SimulationConfig::default())?;
//! // With 3 groups the pairwise minimum rejects well above the nominal 5%
//! assert!(summary.pairwise.reject_rate > summary.omnibus.reject_rate);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod error;
pub mod hypothesis;
pub mod sample;
pub mod simulation;
pub mod summary;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{DetailLevel, SimulationConfig};
pub use error::{Result, SimError};
pub use simulation::{SimulationProgress, SimulationSummary, simulate};
