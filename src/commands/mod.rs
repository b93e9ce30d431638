//! Command implementations for the rn-prepare CLI

pub mod completions;
pub mod prepare;
pub mod version;
