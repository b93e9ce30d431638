//! JavaScript runtime errors

use std::path::Path;

use super::PrepareError;

/// Creates a runtime not found error
pub fn not_found(searched: impl Into<String>) -> PrepareError {
    PrepareError::RuntimeNotFound {
        searched: searched.into(),
    }
}

/// Creates an unreadable runtime version error
pub fn version_unreadable(path: &Path, reason: impl ToString) -> PrepareError {
    PrepareError::RuntimeVersionUnreadable {
        path: path.display().to_string(),
        reason: reason.to_string(),
    }
}

/// Creates a runtime too old error
pub fn too_old(path: &Path, found: impl ToString, required: impl ToString) -> PrepareError {
    PrepareError::RuntimeTooOld {
        path: path.display().to_string(),
        found: found.to_string(),
        required: required.to_string(),
    }
}
