//! Common test utilities for rn-prepare integration tests

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Environment variables the CI agent could leak into a test run
const CI_VARS: &[&str] = &[
    "INPUT_CWD",
    "INPUT_PLATFORM",
    "INPUT_ENTRYFILE",
    "INPUT_BUNDLEOUTPUT",
    "INPUT_DEVFLAG",
    "INPUT_TRANSFORMER",
    "INPUT_SOURCEMAPOUTPUT",
    "INPUT_ASSETSDEST",
    "INPUT_MOREARGS",
    "INPUT_NODEPATH",
    "BUILD_SOURCESDIRECTORY",
    "BUILD_SOURCEDIRECTORY",
    "RN_PREPARE_LOG",
];

pub const APP_PBXPROJ: &str = "// !$*UTF8*$!\n\
{\n\
\t\t00DD1BFF1BD5951E006B06BC /* Bundle React Native code and images */ = {\n\
\t\t\tisa = PBXShellScriptBuildPhase;\n\
\t\t\tshellPath = /bin/sh;\n\
\t\t\tshellScript = \"export NODE_BINARY=node\\n../node_modules/react-native/packager/react-native-xcode.sh\";\n\
\t\t};\n\
}\n";

pub const REACT_PBXPROJ: &str = "{\n\
\t\t006B79A01A781F38006873D1 /* Start Packager */ = {\n\
\t\t\tshellScript = \"if nc -w 5 -z localhost 8081 ; then\\n  exit 0\\nfi\\nopen \\\"$SRCROOT/../packager/launchPackager.command\\\" || echo \\\"Can't start packager automatically\\\"\";\n\
\t\t};\n\
}\n";

pub const REACT_GRADLE: &str = "task bundleReleaseJsAndAssets(type: Exec) {\n\
    workingDir \"../../\"\n\
    if (Os.isFamily(Os.FAMILY_WINDOWS)) {\n\
        commandLine \"cmd\", \"/c\", \"react-native\", \"bundle\", \"--platform\", \"android\"\n\
    } else {\n\
        commandLine \"react-native\", \"bundle\", \"--platform\", \"android\"\n\
    }\n\
}\n";

/// A React Native checkout in a temporary directory
pub struct TestProject {
    pub temp: TempDir,
    pub path: PathBuf,
}

impl TestProject {
    /// Create an empty project directory
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Create a project with react-native installed and the usual native files
    pub fn react_native() -> Self {
        let project = Self::new();
        project.install_react_native(Path::new(""));
        project
    }

    /// Lay out react-native and the usual native files under `dir`
    pub fn install_react_native(&self, dir: &Path) {
        let write = |path: &str, content: &str| {
            self.write_file(&dir.join(path).to_string_lossy(), content);
        };
        write("node_modules/react-native/package.json", "{}");
        write("ios/App.xcodeproj/project.pbxproj", APP_PBXPROJ);
        write(
            "node_modules/react-native/React/React.xcodeproj/project.pbxproj",
            REACT_PBXPROJ,
        );
        write("android/app/react.gradle", REACT_GRADLE);
    }

    /// Write a file in the project
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from the project
    pub fn read_file(&self, path: &str) -> String {
        std::fs::read_to_string(self.path.join(path)).expect("Failed to read file")
    }

    /// Check if a file exists in the project
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Install a fake `node` that reports `version` and records bundler
    /// invocations to `bundler-args.txt` in its working directory
    #[cfg(unix)]
    pub fn fake_node(&self, version: &str) -> PathBuf {
        self.fake_node_at("bin/node", version)
    }

    /// Install the fake `node` at `path` within the project
    #[cfg(unix)]
    pub fn fake_node_at(&self, path: &str, version: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let script = format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then echo {version}; exit 0; fi\n\
             printf '%s\\n' \"$@\" > bundler-args.txt\n"
        );
        self.write_file(path, &script);
        let path = self.path.join(path);
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake node executable");
        path
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// rn-prepare command with CI task variables cleared
#[allow(deprecated)]
pub fn rn_prepare_cmd() -> Command {
    let mut cmd = Command::cargo_bin("rn-prepare").expect("Failed to find rn-prepare binary");
    for var in CI_VARS {
        cmd.env_remove(var);
    }
    cmd
}

/// `rn-prepare prepare` for `project` with the given platform
pub fn prepare_cmd(project: &Path, platform: &str) -> Command {
    let mut cmd = rn_prepare_cmd();
    cmd.arg("prepare")
        .arg("--cwd")
        .arg(project)
        .arg("--source-dir")
        .arg(project)
        .arg("--platform")
        .arg(platform);
    cmd
}
