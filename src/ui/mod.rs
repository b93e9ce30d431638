//! Terminal output for command results

pub mod summary;
