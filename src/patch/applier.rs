//! Fragment rewriting and file persistence

use std::io::Write;
use std::path::Path;

use regex::NoExpand;
use tempfile::NamedTempFile;
use tracing::{debug, info};

use super::{PatchRule, Rewrite, guard, matcher, rules};
use crate::domain::FileStatus;
use crate::error::{Result, fs};

/// Result of rewriting file text with a rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewritten {
    /// Text left as is, with the reason
    Unchanged(FileStatus),
    /// New text to persist
    Changed(String),
}

/// Apply `rule` to `text` without touching the filesystem.
///
/// Only the located fragment is replaced; every other byte is preserved.
pub fn rewrite(text: &str, rule: &PatchRule) -> Rewritten {
    let Some(fragment) = matcher::find_fragment(text, rule.pattern()) else {
        return Rewritten::Unchanged(FileStatus::Skipped);
    };

    if guard::is_patched(text, rule.guard()) {
        return Rewritten::Unchanged(FileStatus::AlreadyPatched);
    }

    let patched = match rule.rewrite() {
        Rewrite::WrapUnlessSet { marker } => {
            let wrapped = rules::wrap_unless_set(fragment.text, marker);
            splice(text, fragment.span, &wrapped)
        }
        Rewrite::Replace {
            replacement,
            all: true,
        } => rule
            .pattern()
            .replace_all(text, NoExpand(replacement))
            .into_owned(),
        Rewrite::Replace {
            replacement,
            all: false,
        } => splice(text, fragment.span, replacement),
    };

    Rewritten::Changed(patched)
}

fn splice(text: &str, span: std::ops::Range<usize>, with: &str) -> String {
    let mut out = String::with_capacity(text.len() + with.len());
    out.push_str(&text[..span.start]);
    out.push_str(with);
    out.push_str(&text[span.end..]);
    out
}

/// Run `rule` over the file at `path`, persisting the result unless `dry_run`.
pub fn apply_to_file(path: &Path, rule: &PatchRule, dry_run: bool) -> Result<FileStatus> {
    debug!(path = %path.display(), rule = rule.name, "attempting to patch for CI env");

    let text = std::fs::read_to_string(path).map_err(|e| fs::read_failed(path, e))?;

    match rewrite(&text, rule) {
        Rewritten::Unchanged(status) => {
            debug!("{} {status}.", path.display());
            Ok(status)
        }
        Rewritten::Changed(patched) => {
            if dry_run {
                info!("Would patch {} ({})", path.display(), rule.name);
            } else {
                write_atomic(path, &patched)?;
                info!("Patched {} ({})", path.display(), rule.name);
            }
            Ok(FileStatus::Patched)
        }
    }
}

/// Replace the file at `path` with `contents` in one rename, so readers
/// never observe a partially written file.
fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| fs::write_failed(path, e))?;
    tmp.write_all(contents.as_bytes()).map_err(|e| fs::write_failed(path, e))?;

    if let Ok(metadata) = std::fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| fs::write_failed(path, e))?;
    }

    tmp.persist(path).map_err(|e| fs::write_failed(path, e.error))?;
    Ok(())
}
