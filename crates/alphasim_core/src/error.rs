use std::fmt;

/// Errors surfaced by the simulation core.
///
/// Every variant is a caller-facing configuration or precondition failure;
/// nothing here is retried. A failed trial aborts the enclosing simulation
/// call with no partial results.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Fewer than two groups requested
    InvalidGroupCount(usize),
    /// Fewer than two observations per group requested
    InvalidObsCount(usize),
    /// Zero iterations requested
    InvalidIterations(usize),
    /// Significance threshold outside the open interval (0, 1)
    InvalidThreshold(f64),
    /// A group (or pair of groups) had zero variance, so the test
    /// statistic is undefined
    DegenerateGroups { context: &'static str },
    /// A sweep axis (group counts or observation counts) was empty
    EmptySweepAxis(&'static str),
    /// Simulation was cancelled by user request
    Cancelled,
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidGroupCount(k) => {
                write!(f, "n_groups must be at least 2, got {k}")
            }
            SimError::InvalidObsCount(n) => {
                write!(f, "n_obs must be at least 2, got {n}")
            }
            SimError::InvalidIterations(n) => {
                write!(f, "n_iter must be at least 1, got {n}")
            }
            SimError::InvalidThreshold(t) => {
                write!(f, "threshold must lie in (0, 1), got {t}")
            }
            SimError::DegenerateGroups { context } => {
                write!(f, "zero-variance groups make the {context} undefined")
            }
            SimError::EmptySweepAxis(axis) => {
                write!(f, "sweep axis {axis} is empty")
            }
            SimError::Cancelled => write!(f, "simulation cancelled"),
        }
    }
}

impl std::error::Error for SimError {}

pub type Result<T> = std::result::Result<T, SimError>;
