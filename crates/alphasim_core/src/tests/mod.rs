//! Integration tests for the simulation core
//!
//! Tests are organized by topic:
//! - `engine` - Engine mechanics: determinism, detail levels, progress
//! - `properties` - Statistical properties under the null hypothesis
//! - `sweep` - Grid orchestration and cell isolation

mod properties;
