//! Already-patched detection

/// Returns true when `guard` occurs anywhere in `text`.
///
/// An empty guard never counts as present, so a rule without a guard
/// cannot silently disable itself.
pub fn is_patched(text: &str, guard: &str) -> bool {
    !guard.is_empty() && text.contains(guard)
}
