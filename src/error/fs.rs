//! File system errors

use std::path::Path;

use super::PrepareError;

/// Creates a file not found error
pub fn not_found(path: &Path) -> PrepareError {
    PrepareError::FileNotFound {
        path: path.display().to_string(),
    }
}

/// Creates a file read error
pub fn read_failed(path: &Path, reason: impl ToString) -> PrepareError {
    PrepareError::FileReadFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a file write error
pub fn write_failed(path: &Path, reason: impl ToString) -> PrepareError {
    PrepareError::FileWriteFailed {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates an invalid glob error
pub fn glob_invalid(pattern: impl Into<String>, reason: impl ToString) -> PrepareError {
    PrepareError::GlobInvalid {
        pattern: pattern.into(),
        reason: reason.to_string(),
    }
}
