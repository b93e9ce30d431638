//! Offline bundling through the React Native CLI
//!
//! iOS builds would otherwise start the packager server from Xcode; the
//! bundle and source map are produced here instead, before the native build.

pub mod args;
pub mod request;

use std::path::Path;
use std::process::Command;

use tracing::info;

use crate::error::{Result, bundle};
use crate::runtime::NodeRuntime;

pub use request::BundleRequest;

/// Run the bundler for `request` in `working_dir` and wait for it.
///
/// Output is inherited so the bundler's own diagnostics reach the build log.
pub fn run(
    request: &BundleRequest,
    runtime: &NodeRuntime,
    cli_script: &Path,
    working_dir: &Path,
    dry_run: bool,
) -> Result<()> {
    let args = request.args(cli_script);
    let rendered: Vec<String> = args
        .iter()
        .map(|a| a.to_string_lossy().into_owned())
        .collect();
    info!("{} {}", runtime.path.display(), rendered.join(" "));

    if dry_run {
        info!("Dry run: bundler not started");
        return Ok(());
    }

    let status = Command::new(&runtime.path)
        .args(&args)
        .current_dir(working_dir)
        .status()
        .map_err(|e| bundle::spawn_failed(runtime.path.display().to_string(), e))?;

    if !status.success() {
        return Err(bundle::failed(status));
    }

    Ok(())
}
