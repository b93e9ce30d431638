//! rn-prepare - React Native CI preparation
//!
//! Prepares a React Native project's native sources for a CI build: checks
//! the Node.js runtime, keeps Xcode builds from blocking on the packager
//! server, points the Android bundle task at an explicit runtime, and
//! bundles iOS JavaScript ahead of the native build.

use clap::Parser;
use miette::Diagnostic;

mod bundler;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod logging;
mod operations;
mod patch;
mod path_utils;
mod project;
mod runtime;
mod ui;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Prepare(args) => commands::prepare::run(args),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        tracing::debug!(code = ?e.code().map(|c| c.to_string()), "run failed");
        eprintln!("Error: {e}");
        if let Some(help) = e.help() {
            eprintln!("  help: {help}");
        }
        std::process::exit(1);
    }
}
