//! Bundler invocation parameters

use std::ffi::OsString;
use std::path::Path;

use super::args::split_args;
use crate::config::BundleInputs;
use crate::domain::Platform;
use crate::error::{Result, config};
use crate::path_utils;
use crate::project::walker;

/// Parameters of one bundler run, fixed once built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BundleRequest {
    pub platform: Platform,
    pub entry_file: String,
    pub bundle_output: String,
    pub dev: bool,
    pub transformer: Option<String>,
    pub sourcemap_output: Option<String>,
    pub assets_dest: Option<String>,
    pub extra_args: Vec<String>,
}

impl BundleRequest {
    /// Build a request from task inputs.
    ///
    /// Optional inputs that are empty or equal to `sentinel` (the value the
    /// build system fills in for path inputs left blank) are dropped. An
    /// assets destination that does not exist is resolved as a glob against
    /// `working_dir`, keeping the raw value when nothing matches.
    pub fn new(
        platform: Platform,
        inputs: &BundleInputs,
        sentinel: Option<&str>,
        working_dir: &Path,
    ) -> Result<Self> {
        let entry_file = required(inputs.entry_file.as_deref(), "entryFile")?;
        let bundle_output = required(inputs.bundle_output.as_deref(), "bundleOutput")?;

        let explicit = |value: &Option<String>| -> Option<String> {
            value
                .as_deref()
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .filter(|v| !sentinel.is_some_and(|s| path_utils::same_location(v, s)))
                .map(str::to_string)
        };

        let assets_dest = match explicit(&inputs.assets_dest) {
            Some(dest) if !working_dir.join(&dest).exists() => Some(
                walker::find_first(working_dir, &dest)?
                    .map_or(dest, |found| found.display().to_string()),
            ),
            other => other,
        };

        let extra_args = match inputs.more_args.as_deref() {
            Some(raw) => split_args(raw).map_err(config::invalid)?,
            None => Vec::new(),
        };

        Ok(Self {
            platform,
            entry_file,
            bundle_output,
            dev: inputs.dev,
            transformer: explicit(&inputs.transformer),
            sourcemap_output: explicit(&inputs.sourcemap_output),
            assets_dest,
            extra_args,
        })
    }

    /// Arguments passed to the runtime: the CLI script, the `bundle`
    /// subcommand, the mandatory flags, then whichever optional flags are set
    /// and finally the extra arguments verbatim.
    pub fn args(&self, cli_script: &Path) -> Vec<OsString> {
        let mut args: Vec<OsString> = vec![
            cli_script.into(),
            "bundle".into(),
            "--platform".into(),
            self.platform.as_str().into(),
            "--entry-file".into(),
            self.entry_file.as_str().into(),
            "--bundle-output".into(),
            self.bundle_output.as_str().into(),
            "--dev".into(),
            OsString::from(if self.dev { "true" } else { "false" }),
        ];

        let optional = [
            ("--transformer", &self.transformer),
            ("--sourcemap-output", &self.sourcemap_output),
            ("--assets-dest", &self.assets_dest),
        ];
        for (flag, value) in optional {
            if let Some(value) = value {
                args.push(flag.into());
                args.push(value.as_str().into());
            }
        }

        args.extend(self.extra_args.iter().map(OsString::from));
        args
    }
}

fn required(value: Option<&str>, name: &str) -> Result<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .ok_or_else(|| config::missing(name))
}
