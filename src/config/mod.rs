//! Resolved run configuration
//!
//! [`Settings`] is built once from the parsed command line and passed
//! explicitly to every step; nothing changes the process working directory.

use std::path::{Path, PathBuf};

use crate::cli::PrepareArgs;
use crate::error::{Result, config};
use crate::runtime::Version;

/// Legacy name of the source directory variable, consulted when the
/// current one is unset
pub const LEGACY_SOURCE_DIR_VAR: &str = "BUILD_SOURCEDIRECTORY";

/// Raw bundler inputs, validated later by `BundleRequest::new`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BundleInputs {
    pub entry_file: Option<String>,
    pub bundle_output: Option<String>,
    pub dev: bool,
    pub transformer: Option<String>,
    pub sourcemap_output: Option<String>,
    pub assets_dest: Option<String>,
    pub more_args: Option<String>,
}

/// Everything a prepare run needs to know
#[derive(Debug, Clone)]
pub struct Settings {
    pub working_dir: PathBuf,
    /// Build source directory, also the "not set" value of optional path inputs
    pub source_dir: Option<String>,
    /// Validated only when the platform branch is taken
    pub platform: String,
    pub node: Option<PathBuf>,
    pub min_node_version: Version,
    pub ci_marker: String,
    pub skip_bundle: bool,
    pub dry_run: bool,
    pub bundle: BundleInputs,
}

impl Settings {
    /// Resolve settings from arguments and the process environment
    pub fn from_args(args: PrepareArgs) -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let legacy_source_dir = std::env::var(LEGACY_SOURCE_DIR_VAR).ok();
        Self::resolve(args, &current_dir, legacy_source_dir)
    }

    /// Resolve settings against an explicit current directory
    pub fn resolve(
        args: PrepareArgs,
        current_dir: &Path,
        legacy_source_dir: Option<String>,
    ) -> Result<Self> {
        let source_dir = non_empty(args.source_dir).or_else(|| non_empty(legacy_source_dir));

        let working_dir = args
            .cwd
            .filter(|p| !p.as_os_str().is_empty())
            .or_else(|| source_dir.as_ref().map(PathBuf::from))
            .ok_or_else(|| config::missing("cwd"))?;
        let working_dir = current_dir.join(working_dir);

        if !is_env_name(&args.ci_marker) {
            return Err(config::invalid(format!(
                "'{}' is not a valid environment variable name",
                args.ci_marker
            )));
        }

        Ok(Self {
            working_dir,
            source_dir,
            platform: args.platform,
            node: args.node,
            min_node_version: args.min_node_version,
            ci_marker: args.ci_marker,
            skip_bundle: args.skip_bundle,
            dry_run: args.dry_run,
            bundle: BundleInputs {
                entry_file: args.entry_file,
                bundle_output: args.bundle_output,
                dev: args.dev,
                transformer: args.transformer,
                sourcemap_output: args.sourcemap_output,
                assets_dest: args.assets_dest,
                more_args: args.more_args,
            },
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn is_env_name(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
