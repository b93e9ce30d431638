//! Bundler errors

use super::PrepareError;

/// Creates a bundler spawn failure error
pub fn spawn_failed(program: impl Into<String>, reason: impl ToString) -> PrepareError {
    PrepareError::BundlerSpawnFailed {
        program: program.into(),
        reason: reason.to_string(),
    }
}

/// Creates a bundler exit status error
pub fn failed(status: std::process::ExitStatus) -> PrepareError {
    PrepareError::BundlerFailed {
        status: status.to_string(),
    }
}
