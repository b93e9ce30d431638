//! Glob-driven project file enumeration
//!
//! Patterns are matched with wax over a walkdir traversal. The literal
//! leading components of a pattern pick the traversal root and, unless
//! the pattern contains `**`, the number of remaining components bounds
//! the traversal depth, so `ios/*.xcodeproj/project.pbxproj` never
//! descends into `node_modules`.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, fs};
use crate::path_utils;

const GLOB_META: &[char] = &['*', '?', '[', '{', '<'];

/// All regular files under `base` matching `pattern`, sorted by path.
///
/// No match is not an error, the result is simply empty.
pub fn find_files(base: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    find(base, pattern, true)
}

/// First file or directory under `base` matching `pattern`.
pub fn find_first(base: &Path, pattern: &str) -> Result<Option<PathBuf>> {
    Ok(find(base, pattern, false)?.into_iter().next())
}

fn find(base: &Path, pattern: &str, files_only: bool) -> Result<Vec<PathBuf>> {
    let (prefix, rest) = split_literal_prefix(pattern);
    let root = base.join(prefix);

    if rest.is_empty() {
        let keep = if files_only { root.is_file() } else { root.exists() };
        return Ok(if keep { vec![root] } else { Vec::new() });
    }

    if !root.is_dir() {
        return Ok(Vec::new());
    }

    let glob = Glob::new(&rest).map_err(|e| fs::glob_invalid(pattern, e))?;

    let mut walker = WalkDir::new(&root)
        .min_depth(1)
        .follow_links(true)
        .sort_by_file_name();
    if !rest.contains("**") {
        walker = walker.max_depth(rest.split('/').count());
    }

    let mut matches: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(std::result::Result::ok)
        .filter(|entry| !files_only || entry.file_type().is_file())
        .filter(|entry| {
            let relative = entry.path().strip_prefix(&root).unwrap_or(entry.path());
            let normalized = path_utils::to_forward_slashes(relative);
            glob.matched(&CandidatePath::from(normalized.as_str())).is_some()
        })
        .map(walkdir::DirEntry::into_path)
        .collect();

    matches.sort();
    Ok(matches)
}

/// Split `pattern` into the literal directory it starts with and the glob
/// that remains, e.g. `ios/*.xcodeproj/x` into (`ios`, `*.xcodeproj/x`).
fn split_literal_prefix(pattern: &str) -> (PathBuf, String) {
    let parts: Vec<&str> = pattern.split('/').collect();
    let literal = parts
        .iter()
        .take_while(|part| !part.contains(GLOB_META))
        .count();

    let prefix = if literal == 0 {
        PathBuf::new()
    } else if literal == 1 && parts[0].is_empty() {
        PathBuf::from("/")
    } else {
        PathBuf::from(parts[..literal].join("/"))
    };

    (prefix, parts[literal..].join("/"))
}
