//! Android: run the bundle task through an explicit runtime
//!
//! The bundle step cannot run ahead of the Gradle build (a native build
//! wipes its output folder), so only the build script is patched.

use tracing::debug;

use crate::config::Settings;
use crate::domain::PatchReport;
use crate::error::{Result, fs};
use crate::patch::{self, rules};
use crate::project::ProjectLayout;
use crate::runtime::NodeRuntime;

pub(super) fn prepare(
    settings: &Settings,
    layout: &ProjectLayout,
    runtime: &NodeRuntime,
) -> Result<Vec<PatchReport>> {
    let gradle = layout.react_gradle();
    if !gradle.is_file() {
        return Err(fs::not_found(&gradle));
    }

    debug!(
        "Platform is Android - patching {} to use the selected Node.js",
        gradle.display()
    );
    let rule = rules::gradle_bundle(&runtime.path, &layout.cli_script())?;
    let status = patch::apply_to_file(&gradle, &rule, settings.dry_run)?;

    Ok(vec![PatchReport {
        path: gradle,
        rule: rule.name,
        status,
    }])
}
