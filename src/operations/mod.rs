//! High-level operations
//!
//! - PrepareOperation: preflight, runtime setup and the per-platform steps

pub mod prepare;

pub use prepare::{PrepareOperation, PrepareSummary};
