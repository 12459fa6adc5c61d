//! Shared utility helpers.

/// Case-insensitive string equality. ASCII fast path, Unicode fallback.
#[inline]
pub fn eq_ci(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b) || a.to_lowercase() == b.to_lowercase()
}

/// Case-insensitive membership test over a name list.
#[inline]
pub fn contains_name_ci<S: AsRef<str>>(names: &[S], needle: &str) -> bool {
    names.iter().any(|n| eq_ci(n.as_ref(), needle))
}

/// Lowercase key for case-insensitive set/map lookups.
#[inline]
pub fn lower_key(name: &str) -> String {
    name.to_lowercase()
}
