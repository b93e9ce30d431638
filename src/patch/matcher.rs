//! Patch fragment lookup

use std::ops::Range;

use regex::Regex;

/// Name of the capture group that narrows a match down to the fragment
pub const FRAGMENT_GROUP: &str = "fragment";

/// A located patch fragment and its byte span in the searched text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    pub text: &'a str,
    pub span: Range<usize>,
}

/// Find the first fragment matching `pattern` in `text`.
///
/// When the pattern has a `fragment` group (used to exclude the enclosing
/// quotes of a shell script literal) only that group is returned.
pub fn find_fragment<'a>(text: &'a str, pattern: &Regex) -> Option<Fragment<'a>> {
    let captures = pattern.captures(text)?;
    let found = captures
        .name(FRAGMENT_GROUP)
        .or_else(|| captures.get(0))?;

    Some(Fragment {
        text: found.as_str(),
        span: found.range(),
    })
}
