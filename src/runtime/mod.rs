//! JavaScript runtime setup
//!
//! Resolves the Node.js binary the bundler and the patched Gradle build
//! run with, and checks it meets the minimum version. Installing or
//! switching runtimes is left to the build agent.

pub mod version;

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::error::{Result, runtime};

pub use version::Version;

/// Minimum runtime version the React Native CLI supports
pub const DEFAULT_MIN_VERSION: Version = Version::new(4, 0, 0);

/// File name of the runtime executable
pub const NODE_BINARY: &str = if cfg!(windows) { "node.exe" } else { "node" };

/// A located runtime binary and its version
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeRuntime {
    pub path: PathBuf,
    pub version: Version,
}

/// Locate the runtime and verify it is at least `minimum`.
///
/// `explicit` may name the binary itself or the directory holding it;
/// without it the `PATH` environment variable is searched.
pub fn ensure(explicit: Option<&Path>, minimum: Version) -> Result<NodeRuntime> {
    // The bundler runs in the project directory and Gradle in its own, so a
    // relative location has to be pinned to the current directory here
    let path = std::path::absolute(locate(explicit)?)?;
    let version = query_version(&path)?;
    debug!(path = %path.display(), %version, "found Node.js runtime");

    if version < minimum {
        return Err(runtime::too_old(&path, version, minimum));
    }

    info!("Using Node.js {version} at {}", path.display());
    Ok(NodeRuntime { path, version })
}

fn locate(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(explicit) = explicit {
        let candidate = if explicit.is_dir() {
            explicit.join(NODE_BINARY)
        } else {
            explicit.to_path_buf()
        };
        return if candidate.is_file() {
            Ok(candidate)
        } else {
            Err(runtime::not_found(candidate.display().to_string()))
        };
    }

    let path_var = std::env::var_os("PATH").unwrap_or_default();
    search_path(NODE_BINARY, &path_var)
        .ok_or_else(|| runtime::not_found(format!("{NODE_BINARY} on PATH")))
}

/// First directory in a `PATH`-style list that contains `binary`
fn search_path(binary: &str, path_var: &OsStr) -> Option<PathBuf> {
    std::env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}

fn query_version(path: &Path) -> Result<Version> {
    let output = Command::new(path)
        .arg("--version")
        .output()
        .map_err(|e| runtime::version_unreadable(path, e))?;

    if !output.status.success() {
        return Err(runtime::version_unreadable(
            path,
            format!("`--version` exited with {}", output.status),
        ));
    }

    String::from_utf8_lossy(&output.stdout)
        .parse()
        .map_err(|e| runtime::version_unreadable(path, e))
}
