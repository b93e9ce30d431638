//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - prepare: Prepare command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod prepare;

pub use completions::CompletionsArgs;
pub use prepare::PrepareArgs;

/// rn-prepare - React Native CI preparation
///
/// Prepare a React Native project's native sources for a CI build.
#[derive(Parser, Debug)]
#[command(
    name = "rn-prepare",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Prepare a React Native project's native sources for a CI build",
    long_about = "Checks the Node.js runtime, keeps generated Xcode projects from starting the \
                  packager server during CI builds, points the Android build script at an \
                  explicit runtime, and bundles iOS JavaScript ahead of the native build.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  rn-prepare prepare --platform android          \x1b[90m# Patch react.gradle\x1b[0m\n   \
                  rn-prepare prepare --platform ios \\\n     \
                  --entry-file index.ios.js --bundle-output ios/main.jsbundle\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose (debug) logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prepare the native project for a CI build
    Prepare(PrepareArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
