//! Domain models for rn-prepare
//!
//! Plain types shared by the patch engine, the orchestrator and the UI.

pub mod outcome;
pub mod platform;

pub use outcome::{FileStatus, PatchReport};
pub use platform::Platform;
