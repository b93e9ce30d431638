//! Configuration errors

use super::PrepareError;

/// Creates a missing input error
pub fn missing(name: impl Into<String>) -> PrepareError {
    PrepareError::ConfigMissing { name: name.into() }
}

/// Creates an invalid configuration error
pub fn invalid(message: impl Into<String>) -> PrepareError {
    PrepareError::ConfigInvalid {
        message: message.into(),
    }
}
