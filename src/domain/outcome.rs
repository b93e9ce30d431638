//! Per-file patch outcomes

use std::fmt;
use std::path::PathBuf;

/// Terminal state of a project file after the patch routine ran over it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileStatus {
    /// No patch fragment found, file left untouched
    Skipped,
    /// Fragment found but the guard token was already present
    AlreadyPatched,
    /// Fragment rewritten and the file persisted
    Patched,
}

impl FileStatus {
    /// Whether the file content changed (or would change on a dry run)
    pub fn is_change(self) -> bool {
        matches!(self, FileStatus::Patched)
    }
}

impl fmt::Display for FileStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileStatus::Skipped => write!(f, "does not require patching"),
            FileStatus::AlreadyPatched => write!(f, "already patched"),
            FileStatus::Patched => write!(f, "patched"),
        }
    }
}

/// Outcome of running one patch rule against one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchReport {
    pub path: PathBuf,
    pub rule: &'static str,
    pub status: FileStatus,
}
