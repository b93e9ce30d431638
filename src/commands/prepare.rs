//! Prepare command implementation
//!
//! The preparation process:
//! 1. Resolve settings (working directory, source directory sentinel)
//! 2. Check `node_modules/react-native` is installed
//! 3. Locate the Node.js runtime and check its version
//! 4. iOS: patch Xcode projects and bundle; Android: patch react.gradle

use crate::cli::PrepareArgs;
use crate::config::Settings;
use crate::error::Result;
use crate::operations::PrepareOperation;
use crate::ui;

/// Run prepare command
pub fn run(args: PrepareArgs) -> Result<()> {
    let settings = Settings::from_args(args)?;
    let dry_run = settings.dry_run;

    let operation = PrepareOperation::new(settings);
    let summary = operation.execute()?;

    ui::summary::print(&summary, operation.layout().root(), dry_run);
    println!("Success: Project ready for native build.");
    Ok(())
}
