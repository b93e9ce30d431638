//! Error types and handling for rn-prepare
//!
//! Uses `thiserror` for error definitions and `miette` for diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Configuration errors
//! - [`platform`]: Platform and project layout errors
//! - [`fs`]: File system errors
//! - [`runtime`]: JavaScript runtime errors
//! - [`bundle`]: Bundler errors

pub mod bundle;
pub mod config;
pub mod fs;
pub mod platform;
pub mod runtime;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for rn-prepare operations
#[derive(Error, Diagnostic, Debug)]
pub enum PrepareError {
    // Preflight errors
    #[error("React Native npm package (react-native) not installed locally: {path}")]
    #[diagnostic(
        code(rn_prepare::preflight::dependency_missing),
        help(
            "Add an npm install step to your build definition before this one, \
             e.g. `npm install --no-optional --only=prod`"
        )
    )]
    DependencyMissing { path: String },

    // Platform errors
    #[error("Platform {platform} not supported")]
    #[diagnostic(
        code(rn_prepare::platform::not_supported),
        help("Supported platforms: ios, android")
    )]
    PlatformNotSupported { platform: String },

    // Configuration errors
    #[error("Missing required input: {name}")]
    #[diagnostic(code(rn_prepare::config::missing))]
    ConfigMissing { name: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(rn_prepare::config::invalid))]
    ConfigInvalid { message: String },

    // File system errors
    #[error("File not found: {path}")]
    #[diagnostic(code(rn_prepare::fs::not_found))]
    FileNotFound { path: String },

    #[error("Failed to read file: {path}: {reason}")]
    #[diagnostic(code(rn_prepare::fs::read_failed))]
    FileReadFailed { path: String, reason: String },

    #[error("Failed to write file: {path}: {reason}")]
    #[diagnostic(code(rn_prepare::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Invalid glob pattern '{pattern}': {reason}")]
    #[diagnostic(code(rn_prepare::fs::glob_invalid))]
    GlobInvalid { pattern: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(rn_prepare::fs::io_error))]
    IoError { message: String },

    // Runtime errors
    #[error("Node.js runtime not found: {searched}")]
    #[diagnostic(
        code(rn_prepare::runtime::not_found),
        help("Install Node.js on the build agent or pass its location with --node")
    )]
    RuntimeNotFound { searched: String },

    #[error("Could not determine Node.js version of {path}: {reason}")]
    #[diagnostic(code(rn_prepare::runtime::version_unreadable))]
    RuntimeVersionUnreadable { path: String, reason: String },

    #[error("Node.js {found} at {path} is older than the required {required}")]
    #[diagnostic(
        code(rn_prepare::runtime::too_old),
        help("Select a newer Node.js version on the build agent before running this step")
    )]
    RuntimeTooOld {
        path: String,
        found: String,
        required: String,
    },

    // Bundler errors
    #[error("Failed to start bundler {program}: {reason}")]
    #[diagnostic(code(rn_prepare::bundle::spawn_failed))]
    BundlerSpawnFailed { program: String, reason: String },

    #[error("Bundler exited with {status}")]
    #[diagnostic(code(rn_prepare::bundle::failed))]
    BundlerFailed { status: String },
}

impl From<std::io::Error> for PrepareError {
    fn from(err: std::io::Error) -> Self {
        PrepareError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, PrepareError>;
