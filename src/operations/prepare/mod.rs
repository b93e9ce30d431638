//! Prepare operation
//!
//! Sequence: preflight check, runtime setup, then the platform branch.
//! Every step runs to completion before the next starts and the first
//! error aborts the run.

mod android;
mod ios;

use tracing::debug;

use crate::config::Settings;
use crate::domain::{PatchReport, Platform};
use crate::error::{Result, platform};
use crate::project::ProjectLayout;
use crate::runtime::{self, NodeRuntime};

/// What a successful run did
#[derive(Debug, Clone)]
pub struct PrepareSummary {
    pub platform: Platform,
    pub runtime: NodeRuntime,
    pub reports: Vec<PatchReport>,
    pub bundled: bool,
}

/// Prepares one React Native checkout for a native CI build
pub struct PrepareOperation {
    settings: Settings,
    layout: ProjectLayout,
}

impl PrepareOperation {
    pub fn new(settings: Settings) -> Self {
        let layout = ProjectLayout::new(settings.working_dir.clone());
        Self { settings, layout }
    }

    pub fn layout(&self) -> &ProjectLayout {
        &self.layout
    }

    /// Run the whole pipeline
    pub fn execute(&self) -> Result<PrepareSummary> {
        self.preflight()?;

        let runtime = runtime::ensure(self.settings.node.as_deref(), self.settings.min_node_version)?;

        let platform: Platform = self.settings.platform.parse()?;
        let (reports, bundled) = match platform {
            Platform::Ios => ios::prepare(&self.settings, &self.layout, &runtime)?,
            Platform::Android => (
                android::prepare(&self.settings, &self.layout, &runtime)?,
                false,
            ),
        };

        Ok(PrepareSummary {
            platform,
            runtime,
            reports,
            bundled,
        })
    }

    /// The project's npm dependencies must be installed before anything runs
    fn preflight(&self) -> Result<()> {
        let react_native = self.layout.react_native_dir();
        if !react_native.is_dir() {
            debug!("react-native npm package not installed.");
            return Err(platform::dependency_missing(&react_native));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BundleInputs;
    use crate::error::PrepareError;
    use crate::runtime::DEFAULT_MIN_VERSION;
    use tempfile::TempDir;

    fn settings(root: &std::path::Path, platform: &str) -> Settings {
        Settings {
            working_dir: root.to_path_buf(),
            source_dir: Some(root.display().to_string()),
            platform: platform.to_string(),
            node: Some(root.join("no-such-node")),
            min_node_version: DEFAULT_MIN_VERSION,
            ci_marker: "BUILD_IS_FOR_CI".to_string(),
            skip_bundle: false,
            dry_run: false,
            bundle: BundleInputs::default(),
        }
    }

    #[test]
    fn test_preflight_fails_without_react_native() {
        let temp = TempDir::new().unwrap();
        let err = PrepareOperation::new(settings(temp.path(), "ios"))
            .execute()
            .unwrap_err();
        assert!(matches!(err, PrepareError::DependencyMissing { .. }));
    }

    #[test]
    fn test_runtime_checked_after_preflight() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("node_modules/react-native")).unwrap();
        let err = PrepareOperation::new(settings(temp.path(), "ios"))
            .execute()
            .unwrap_err();
        assert!(matches!(err, PrepareError::RuntimeNotFound { .. }));
    }

    #[cfg(unix)]
    mod with_runtime {
        use super::*;
        use crate::domain::FileStatus;
        use std::os::unix::fs::PermissionsExt;
        use std::path::Path;

        const APP_PBXPROJ: &str = "shellScript = \"export NODE_BINARY=node\\n../node_modules/react-native/packager/react-native-xcode.sh\";\n";
        const REACT_PBXPROJ: &str = "shellScript = \"open \\\"$SRCROOT/../packager/launchPackager.command\\\" || echo \\\"Can't start packager\\\"\";\n";
        const GRADLE: &str = "commandLine \"react-native\", \"bundle\", \"--platform\", \"android\"\n";

        fn write(root: &Path, relative: &str, contents: &str) {
            let path = root.join(relative);
            std::fs::create_dir_all(path.parent().unwrap()).unwrap();
            std::fs::write(path, contents).unwrap();
        }

        /// Fake runtime: answers `--version`, records any other invocation
        fn fake_node(root: &Path) -> std::path::PathBuf {
            let path = root.join("bin/node");
            write(
                root,
                "bin/node",
                "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then echo v18.19.1; exit 0; fi\necho \"$@\" > bundler-args.txt\n",
            );
            std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
            path
        }

        fn project(root: &Path) -> Settings {
            write(root, "node_modules/react-native/package.json", "{}");
            write(root, "ios/App.xcodeproj/project.pbxproj", APP_PBXPROJ);
            write(
                root,
                "node_modules/react-native/React/React.xcodeproj/project.pbxproj",
                REACT_PBXPROJ,
            );
            write(root, "android/app/react.gradle", GRADLE);
            let node = fake_node(root);
            Settings {
                node: Some(node),
                bundle: BundleInputs {
                    entry_file: Some("index.ios.js".to_string()),
                    bundle_output: Some("ios/main.jsbundle".to_string()),
                    ..BundleInputs::default()
                },
                ..settings(root, "ios")
            }
        }

        #[test]
        fn test_ios_patches_and_bundles() {
            let temp = TempDir::new().unwrap();
            let summary = PrepareOperation::new(project(temp.path())).execute().unwrap();

            assert_eq!(summary.platform, Platform::Ios);
            assert!(summary.bundled);
            assert_eq!(summary.reports.len(), 2);
            assert!(summary.reports.iter().all(|r| r.status == FileStatus::Patched));

            let app = std::fs::read_to_string(temp.path().join("ios/App.xcodeproj/project.pbxproj")).unwrap();
            assert!(app.contains(r#"if [ -z \"${BUILD_IS_FOR_CI+xxx}\" ]"#));
            let args = std::fs::read_to_string(temp.path().join("bundler-args.txt")).unwrap();
            assert!(args.starts_with("node_modules/react-native/local-cli/cli.js bundle --platform ios"));
        }

        #[test]
        fn test_ios_second_run_is_noop() {
            let temp = TempDir::new().unwrap();
            let settings = project(temp.path());
            PrepareOperation::new(settings.clone()).execute().unwrap();
            let app_path = temp.path().join("ios/App.xcodeproj/project.pbxproj");
            let first = std::fs::read_to_string(&app_path).unwrap();

            let summary = PrepareOperation::new(settings).execute().unwrap();
            assert!(summary.reports.iter().all(|r| r.status == FileStatus::AlreadyPatched));
            assert_eq!(std::fs::read_to_string(&app_path).unwrap(), first);
        }

        #[test]
        fn test_ios_missing_entry_file_touches_nothing() {
            let temp = TempDir::new().unwrap();
            let settings = Settings {
                bundle: BundleInputs::default(),
                ..project(temp.path())
            };
            let err = PrepareOperation::new(settings).execute().unwrap_err();
            assert!(matches!(err, PrepareError::ConfigMissing { .. }));
            let app = std::fs::read_to_string(temp.path().join("ios/App.xcodeproj/project.pbxproj")).unwrap();
            assert_eq!(app, APP_PBXPROJ);
        }

        #[test]
        fn test_ios_without_app_projects() {
            let temp = TempDir::new().unwrap();
            let settings = Settings {
                skip_bundle: true,
                ..project(temp.path())
            };
            std::fs::remove_dir_all(temp.path().join("ios")).unwrap();

            let summary = PrepareOperation::new(settings).execute().unwrap();
            assert!(!summary.bundled);
            assert_eq!(summary.reports.len(), 1);
            assert_eq!(summary.reports[0].rule, "react-packager");
        }

        #[test]
        fn test_android_patches_gradle() {
            let temp = TempDir::new().unwrap();
            let settings = Settings {
                platform: "android".to_string(),
                ..project(temp.path())
            };
            let node = settings.node.clone().unwrap();

            let summary = PrepareOperation::new(settings).execute().unwrap();
            assert_eq!(summary.platform, Platform::Android);
            assert!(!summary.bundled);

            let gradle = std::fs::read_to_string(temp.path().join("android/app/react.gradle")).unwrap();
            let cli = temp.path().join("node_modules/react-native/local-cli/cli.js");
            assert!(gradle.contains(&format!(
                r#""{}", "{}", "bundle","#,
                node.display(),
                cli.display()
            )));
            assert!(!gradle.contains(r#""react-native", "bundle","#));
            assert!(!temp.path().join("bundler-args.txt").exists());
        }

        #[test]
        fn test_unsupported_platform_touches_nothing() {
            let temp = TempDir::new().unwrap();
            let settings = Settings {
                platform: "windows".to_string(),
                ..project(temp.path())
            };

            let err = PrepareOperation::new(settings).execute().unwrap_err();
            assert!(matches!(err, PrepareError::PlatformNotSupported { .. }));
            assert_eq!(
                std::fs::read_to_string(temp.path().join("android/app/react.gradle")).unwrap(),
                GRADLE
            );
            assert_eq!(
                std::fs::read_to_string(temp.path().join("ios/App.xcodeproj/project.pbxproj")).unwrap(),
                APP_PBXPROJ
            );
        }

        #[test]
        fn test_dry_run_writes_nothing() {
            let temp = TempDir::new().unwrap();
            let settings = Settings {
                dry_run: true,
                ..project(temp.path())
            };

            let summary = PrepareOperation::new(settings).execute().unwrap();
            assert!(!summary.bundled);
            assert!(summary.reports.iter().all(|r| r.status == FileStatus::Patched));
            assert_eq!(
                std::fs::read_to_string(temp.path().join("ios/App.xcodeproj/project.pbxproj")).unwrap(),
                APP_PBXPROJ
            );
            assert!(!temp.path().join("bundler-args.txt").exists());
        }
    }
}
