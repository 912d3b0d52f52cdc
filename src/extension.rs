//! Derive a dispatch key from a file name.

/// Return the substring after the last `'.'` in `name`.
///
/// When `name` contains no dot the **entire name is returned unchanged** —
/// this mirrors a `lastIndexOf` of `-1` sliced from index 0 and is the
/// documented contract, not a bug: callers expecting "no extension → empty
/// string" must check for a dot themselves. Matching is case-sensitive;
/// normalize first if case-insensitive dispatch is wanted.
#[must_use]
pub fn extension_of(name: &str) -> &str {
    match name.rfind('.') {
        Some(dot) => &name[dot + 1..],
        None => name,
    }
}
