//! iOS: stop Xcode from launching the packager, then bundle offline

use std::path::Path;

use tracing::{debug, info};

use crate::bundler::{self, BundleRequest};
use crate::config::Settings;
use crate::domain::{PatchReport, Platform};
use crate::error::{Result, fs};
use crate::patch::{self, PatchRule, rules};
use crate::project::ProjectLayout;
use crate::runtime::NodeRuntime;

/// Patch every app project and the vendored React project, then bundle.
///
/// Returns the patch reports and whether the bundler ran.
pub(super) fn prepare(
    settings: &Settings,
    layout: &ProjectLayout,
    runtime: &NodeRuntime,
) -> Result<(Vec<PatchReport>, bool)> {
    // Validate bundle inputs before any file is touched
    let request = if settings.skip_bundle {
        None
    } else {
        Some(BundleRequest::new(
            Platform::Ios,
            &settings.bundle,
            settings.source_dir.as_deref(),
            &settings.working_dir,
        )?)
    };

    let reports = patch_projects(settings, layout)?;

    let Some(request) = request else {
        info!("Skipping bundle step");
        return Ok((reports, false));
    };

    bundler::run(
        &request,
        runtime,
        &ProjectLayout::relative_cli_script(),
        &settings.working_dir,
        settings.dry_run,
    )?;
    Ok((reports, !settings.dry_run))
}

fn patch_projects(settings: &Settings, layout: &ProjectLayout) -> Result<Vec<PatchReport>> {
    let app_rule = rules::xcode_packager(&settings.ci_marker)?;
    let react_rule = rules::react_packager(&settings.ci_marker)?;

    let projects = layout.ios_projects()?;
    if projects.is_empty() {
        debug!("No Xcode projects found under {}", layout.root().join("ios").display());
    }

    let mut reports = Vec::with_capacity(projects.len() + 1);
    for project in projects {
        reports.push(patch_one(&project, &app_rule, settings.dry_run)?);
    }

    let react_project = layout.react_xcode_project();
    if !react_project.is_file() {
        return Err(fs::not_found(&react_project));
    }
    reports.push(patch_one(&react_project, &react_rule, settings.dry_run)?);

    Ok(reports)
}

fn patch_one(path: &Path, rule: &PatchRule, dry_run: bool) -> Result<PatchReport> {
    let status = patch::apply_to_file(path, rule, dry_run)?;
    Ok(PatchReport {
        path: path.to_path_buf(),
        rule: rule.name,
        status,
    })
}
