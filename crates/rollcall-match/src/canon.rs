//! The single canonicalization boundary for identifier comparison.
//!
//! Every equality or containment check in the resolver runs on
//! canon-ed values, never on raw ones. Nothing else in the workspace
//! is allowed to re-trim or re-case identifiers ad hoc.

/// Canonicalize a possibly-absent identifier value: absent becomes the
/// empty string, present values are trimmed and lowercased. Total and
/// idempotent.
pub fn canon(value: Option<&str>) -> String {
    value.map(canon_str).unwrap_or_default()
}

/// Canonicalize a present value.
pub fn canon_str(value: &str) -> String {
    value.trim().to_lowercase()
}
