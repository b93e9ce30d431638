//! Platform and project layout errors

use std::path::Path;

use super::PrepareError;

/// Creates an unsupported platform error
pub fn not_supported(platform: impl Into<String>) -> PrepareError {
    PrepareError::PlatformNotSupported {
        platform: platform.into(),
    }
}

/// Creates a missing `node_modules/react-native` error
pub fn dependency_missing(path: &Path) -> PrepareError {
    PrepareError::DependencyMissing {
        path: path.display().to_string(),
    }
}
