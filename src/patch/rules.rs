//! Built-in patch rules for React Native native projects

use std::path::Path;

use super::{PatchRule, Rewrite};
use crate::error::Result;

/// Environment marker tested by the wrapped packager scripts
pub const DEFAULT_CI_MARKER: &str = "BUILD_IS_FOR_CI";

const XCODE_PACKAGER_PATTERN: &str = r#""(?P<fragment>.*react-native-xcode\.sh.*)";"#;
const REACT_PACKAGER_PATTERN: &str = r#""(?P<fragment>.*launchPackager\.command.*)";"#;
const GRADLE_BUNDLE_PATTERN: &str = r#""react-native",\s?"bundle","#;

/// Token whose presence marks a packager script as already wrapped
pub fn ci_guard(marker: &str) -> String {
    format!("{marker}+xxx")
}

/// Wrap a pbxproj shell script so it only runs while `marker` is unset.
///
/// The result stays inside a quoted pbxproj string, so quotes and newlines
/// are written as escape sequences.
pub fn wrap_unless_set(fragment: &str, marker: &str) -> String {
    format!(r#"if [ -z \"${{{marker}+xxx}}\" ]\nthen\n{fragment}\nfi"#)
}

/// App project build phase that starts the packager via `react-native-xcode.sh`
pub fn xcode_packager(marker: &str) -> Result<PatchRule> {
    PatchRule::new(
        "xcode-packager",
        XCODE_PACKAGER_PATTERN,
        ci_guard(marker),
        Rewrite::WrapUnlessSet {
            marker: marker.to_string(),
        },
    )
}

/// React.xcodeproj build phase that runs `launchPackager.command`
pub fn react_packager(marker: &str) -> Result<PatchRule> {
    PatchRule::new(
        "react-packager",
        REACT_PACKAGER_PATTERN,
        ci_guard(marker),
        Rewrite::WrapUnlessSet {
            marker: marker.to_string(),
        },
    )
}

/// `react.gradle` bundle task: call the CLI script through an explicit runtime
/// instead of the bare `react-native` executable.
pub fn gradle_bundle(node: &Path, cli_script: &Path) -> Result<PatchRule> {
    let node = groovy_escape(&node.to_string_lossy());
    let cli_script = groovy_escape(&cli_script.to_string_lossy());

    PatchRule::new(
        "gradle-bundle",
        GRADLE_BUNDLE_PATTERN,
        format!(r#""{cli_script}", "bundle","#),
        Rewrite::Replace {
            replacement: format!(r#""{node}", "{cli_script}", "bundle","#),
            all: true,
        },
    )
}

fn groovy_escape(value: &str) -> String {
    value.replace('\\', "\\\\")
}
