use std::path::PathBuf;

use clap::Parser;

use crate::runtime::{DEFAULT_MIN_VERSION, Version};

/// Arguments for the prepare command
///
/// Every task input can also be supplied through the `INPUT_<NAME>`
/// variable the CI agent exports for it.
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Patch the Android build script:\n    rn-prepare prepare --platform android\n\n\
                   Patch Xcode projects and bundle offline:\n    \
                   rn-prepare prepare --platform ios --entry-file index.ios.js --bundle-output ios/main.jsbundle\n\n\
                   Show what would change without writing:\n    rn-prepare prepare --platform ios --dry-run --skip-bundle")]
pub struct PrepareArgs {
    /// Working directory of the React Native project (defaults to the source directory)
    #[arg(long, env = "INPUT_CWD", value_name = "DIR")]
    pub cwd: Option<PathBuf>,

    /// Build source directory; blank path inputs are filled in with this value
    #[arg(long, env = "BUILD_SOURCESDIRECTORY", value_name = "DIR")]
    pub source_dir: Option<String>,

    /// Target platform (ios or android)
    #[arg(long, env = "INPUT_PLATFORM")]
    pub platform: String,

    /// Entry file of the application bundle (required for ios)
    #[arg(long, env = "INPUT_ENTRYFILE", value_name = "PATH")]
    pub entry_file: Option<String>,

    /// Output path of the bundle (required for ios)
    #[arg(long, env = "INPUT_BUNDLEOUTPUT", value_name = "PATH")]
    pub bundle_output: Option<String>,

    /// Produce a development bundle
    #[arg(
        long,
        env = "INPUT_DEVFLAG",
        value_name = "BOOL",
        default_value_t = false,
        action = clap::ArgAction::Set
    )]
    pub dev: bool,

    /// Custom transformer module passed to the bundler
    #[arg(long, env = "INPUT_TRANSFORMER", value_name = "PATH")]
    pub transformer: Option<String>,

    /// Output path of the source map
    #[arg(long, env = "INPUT_SOURCEMAPOUTPUT", value_name = "PATH")]
    pub sourcemap_output: Option<String>,

    /// Assets destination directory; a glob is resolved to its first match
    #[arg(long, env = "INPUT_ASSETSDEST", value_name = "PATH")]
    pub assets_dest: Option<String>,

    /// Extra arguments appended to the bundler command line
    #[arg(long, env = "INPUT_MOREARGS", value_name = "ARGS", allow_hyphen_values = true)]
    pub more_args: Option<String>,

    /// Node.js binary, or the directory containing it (defaults to PATH lookup)
    #[arg(long, env = "INPUT_NODEPATH", value_name = "PATH")]
    pub node: Option<PathBuf>,

    /// Minimum Node.js version required
    #[arg(long, value_name = "VERSION", default_value_t = DEFAULT_MIN_VERSION)]
    pub min_node_version: Version,

    /// Environment variable that disables the packager scripts in CI builds
    #[arg(long, value_name = "NAME", default_value = crate::patch::rules::DEFAULT_CI_MARKER)]
    pub ci_marker: String,

    /// Patch Xcode projects but do not run the bundler
    #[arg(long)]
    pub skip_bundle: bool,

    /// Show what would be patched and bundled without writing files
    #[arg(long)]
    pub dry_run: bool,
}
