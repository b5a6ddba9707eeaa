//! Path string normalization.
//!
//! Solution files always spell paths with backslashes, so the canonical form
//! used throughout this crate does too. Normalization:
//! - Accepts both `\` and `/` as separators
//! - Drops `.` segments, repeated separators and trailing separators
//! - Collapses `segment\..` pairs left to right, but only when a concrete
//!   segment precedes the `..` (a leading `..` is never collapsed)

/// Separator used in normalized path strings.
pub const SEPARATOR: char = '\\';

/// Returns `true` for either path separator.
#[must_use]
pub fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Returns `true` if the segment is a drive designator such as `C:`.
///
/// # Examples
///
/// ```
/// use sln_transform::path::normalize::is_drive;
///
/// assert!(is_drive("C:"));
/// assert!(is_drive("d:"));
/// assert!(!is_drive("src"));
/// ```
#[must_use]
pub fn is_drive(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    bytes.len() == 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':'
}

/// Returns `true` if the raw path is rooted (leading separator or drive).
///
/// # Examples
///
/// ```
/// use sln_transform::path::normalize::is_rooted;
///
/// assert!(is_rooted("C:\\work\\All.sln"));
/// assert!(is_rooted("/home/user/All.sln"));
/// assert!(!is_rooted("..\\Lib\\Lib.csproj"));
/// ```
#[must_use]
pub fn is_rooted(path: &str) -> bool {
    if path.starts_with(is_separator) {
        return true;
    }
    let first = path.split(is_separator).next().unwrap_or_default();
    is_drive(first)
}

/// Returns `true` if the segment is one `..` may collapse against.
fn is_concrete(segment: &str) -> bool {
    !segment.is_empty() && segment != ".." && !is_drive(segment)
}

/// Split a normalized path into its segments.
///
/// A rooted path starts with an empty segment; the empty path has none.
#[must_use]
pub fn segments(normalized: &str) -> Vec<&str> {
    if normalized.is_empty() {
        return Vec::new();
    }
    let trimmed = normalized.strip_suffix(SEPARATOR).unwrap_or(normalized);
    if trimmed.is_empty() {
        // The root itself.
        return vec![""];
    }
    trimmed.split(SEPARATOR).collect()
}

/// Join segments produced by [`segments`] back into a normalized string.
#[must_use]
pub fn join(segments: &[&str]) -> String {
    match segments {
        [] => String::new(),
        [""] => SEPARATOR.to_string(),
        [drive] if is_drive(drive) => format!("{drive}{SEPARATOR}"),
        _ => segments.join(&SEPARATOR.to_string()),
    }
}

/// Normalize a raw path string.
///
/// # Examples
///
/// ```
/// use sln_transform::path::normalize::normalize;
///
/// assert_eq!(normalize("a/b/../c"), "a\\c");
/// assert_eq!(normalize("C:\\work\\.\\src\\"), "C:\\work\\src");
/// assert_eq!(normalize("..\\..\\lib"), "..\\..\\lib");
/// ```
#[must_use]
pub fn normalize(path: &str) -> String {
    let mut result: Vec<&str> = Vec::new();

    for (index, segment) in path.split(is_separator).enumerate() {
        match segment {
            "" if index == 0 && !path.is_empty() => result.push(""),
            "" | "." => {}
            ".." if result.last().is_some_and(|last| is_concrete(last)) => {
                result.pop();
            }
            _ => result.push(segment),
        }
    }

    join(&result)
}

/// Combine a base path with a second path.
///
/// A rooted second path replaces the base, matching how solution tooling
/// combines paths.
#[must_use]
pub fn combine(base: &str, path: &str) -> String {
    if base.is_empty() || is_rooted(path) {
        return normalize(path);
    }
    normalize(&format!("{base}{SEPARATOR}{path}"))
}
