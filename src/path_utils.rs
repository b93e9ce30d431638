//! Cross-platform path utilities

use std::path::Path;

/// Render a path with forward slashes, as glob matching expects
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Whether two configured path values name the same location, ignoring
/// trailing separators and slash direction.
pub fn same_location(a: &str, b: &str) -> bool {
    let normalize = |s: &str| {
        let forward = s.replace('\\', "/");
        let trimmed = forward.trim_end_matches('/');
        if trimmed.is_empty() && !forward.is_empty() {
            "/".to_string()
        } else {
            trimmed.to_string()
        }
    };
    normalize(a) == normalize(b)
}
