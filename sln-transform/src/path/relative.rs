//! Relative path computation.
//!
//! Works on normalized path strings segment by segment. Segments are compared
//! case-insensitively, so `C:\Work` is a prefix of `c:\work\App`.

use super::normalize::{self, SEPARATOR};

fn same_segment(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}

/// Number of leading segments two normalized paths share.
#[must_use]
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    normalize::segments(a)
        .iter()
        .zip(normalize::segments(b).iter())
        .take_while(|(x, y)| same_segment(x, y))
        .count()
}

/// Relative path from the directory `base` to `target`.
///
/// Both inputs must be normalized absolute path strings. Returns `None` when
/// the two share no root (for example different drives), in which case no
/// relative path exists.
///
/// # Examples
///
/// ```
/// use sln_transform::path::relative::relative_segments;
///
/// assert_eq!(
///     relative_segments("C:\\a\\b\\c.csproj", "C:\\a\\d").as_deref(),
///     Some("..\\b\\c.csproj")
/// );
/// assert_eq!(relative_segments("D:\\x", "C:\\a"), None);
/// ```
#[must_use]
pub fn relative_segments(target: &str, base: &str) -> Option<String> {
    let target_segments = normalize::segments(target);
    let base_segments = normalize::segments(base);

    let common = common_prefix_len(target, base);
    if common == 0 {
        return None;
    }

    let mut parts: Vec<&str> = vec![".."; base_segments.len() - common];
    parts.extend_from_slice(&target_segments[common..]);
    Some(parts.join(&SEPARATOR.to_string()))
}
