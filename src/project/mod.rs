//! React Native project layout
//!
//! Knows where the generated native project files live relative to the
//! working directory; [`walker`] enumerates the globbed ones.

pub mod walker;

use std::path::{Path, PathBuf};

/// Glob of the app's Xcode projects, relative to the working directory
pub const IOS_PROJECT_GLOB: &str = "ios/*.xcodeproj/project.pbxproj";

/// Paths inside a React Native project checkout
#[derive(Debug, Clone)]
pub struct ProjectLayout {
    root: PathBuf,
}

impl ProjectLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `node_modules/react-native`, required before anything else runs
    pub fn react_native_dir(&self) -> PathBuf {
        self.root.join("node_modules").join("react-native")
    }

    /// Entry script of the React Native command line interface
    pub fn cli_script(&self) -> PathBuf {
        self.react_native_dir().join("local-cli").join("cli.js")
    }

    /// Same script relative to the working directory, as passed to the bundler
    pub fn relative_cli_script() -> PathBuf {
        Path::new("node_modules")
            .join("react-native")
            .join("local-cli")
            .join("cli.js")
    }

    /// Xcode project vendored inside the react-native package
    pub fn react_xcode_project(&self) -> PathBuf {
        self.react_native_dir()
            .join("React")
            .join("React.xcodeproj")
            .join("project.pbxproj")
    }

    /// Android build script that drives the bundle task
    pub fn react_gradle(&self) -> PathBuf {
        self.root.join("android").join("app").join("react.gradle")
    }

    /// App Xcode projects found under `ios/`
    pub fn ios_projects(&self) -> crate::error::Result<Vec<PathBuf>> {
        walker::find_files(&self.root, IOS_PROJECT_GLOB)
    }
}
