//! Idempotent text patching of generated native project files
//!
//! A [`PatchRule`] pairs a search pattern with a guard token and a rewrite:
//! - [`matcher`] locates the patch fragment
//! - [`guard`] decides whether the file was already patched
//! - [`applier`] rewrites the fragment and persists the file
//!
//! The built-in rules for React Native projects live in [`rules`].

pub mod applier;
pub mod guard;
pub mod matcher;
pub mod rules;

use regex::{Regex, RegexBuilder};

use crate::error::{Result, config};

pub use applier::apply_to_file;

/// How a located fragment is rewritten
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// Wrap the fragment in a POSIX conditional that only runs it while `marker` is unset
    WrapUnlessSet { marker: String },
    /// Replace the matched text verbatim, either the first match or every match
    Replace { replacement: String, all: bool },
}

/// A search pattern, a guard token and a rewrite applied to one kind of project file
#[derive(Debug, Clone)]
pub struct PatchRule {
    pub name: &'static str,
    pattern: Regex,
    guard: String,
    rewrite: Rewrite,
}

impl PatchRule {
    /// Create a rule; `pattern` is compiled case-insensitive and multi-line.
    ///
    /// A capture group named `fragment` selects the part of the match that is
    /// rewritten, otherwise the whole match is.
    pub fn new(
        name: &'static str,
        pattern: &str,
        guard: impl Into<String>,
        rewrite: Rewrite,
    ) -> Result<Self> {
        let pattern = RegexBuilder::new(pattern)
            .case_insensitive(true)
            .multi_line(true)
            .build()
            .map_err(|e| config::invalid(format!("patch rule '{name}': {e}")))?;

        Ok(Self {
            name,
            pattern,
            guard: guard.into(),
            rewrite,
        })
    }

    pub fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub fn guard(&self) -> &str {
        &self.guard
    }

    pub fn rewrite(&self) -> &Rewrite {
        &self.rewrite
    }
}
