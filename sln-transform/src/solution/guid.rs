//! GUIDs as they appear in solution files.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use uuid::Uuid;

use crate::error::{Error, Result};

/// Project type GUID of classic C# projects.
pub const CSHARP_PROJECT_TYPE: &str = "{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}";

/// Project type GUID of SDK-style C# projects.
pub const CSHARP_SDK_PROJECT_TYPE: &str = "{9A19103F-16F7-4668-BE54-9A1E7A4F7556}";

/// Project type GUID of solution folders.
pub const SOLUTION_FOLDER_TYPE: &str = "{2150E333-8FDC-42A3-9474-1A3956D46DE8}";

/// A GUID that remembers how it was written.
///
/// Comparison, ordering and hashing use the parsed value, so `{abc…}` and
/// `{ABC…}` are the same GUID, while [`Display`](fmt::Display) reproduces the
/// original spelling for byte-faithful serialization.
///
/// # Examples
///
/// ```
/// use sln_transform::solution::SolutionGuid;
///
/// let upper = SolutionGuid::parse("{2150E333-8FDC-42A3-9474-1A3956D46DE8}").unwrap();
/// let lower = SolutionGuid::parse("{2150e333-8fdc-42a3-9474-1a3956d46de8}").unwrap();
/// assert_eq!(upper, lower);
/// assert_eq!(lower.to_string(), "{2150e333-8fdc-42a3-9474-1a3956d46de8}");
/// ```
#[derive(Debug, Clone)]
pub struct SolutionGuid {
    value: Uuid,
    text: String,
}

impl SolutionGuid {
    /// Parse a GUID, with or without braces.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGuid`] if the text is not a GUID.
    pub fn parse(text: &str) -> Result<Self> {
        let inner = text
            .strip_prefix('{')
            .and_then(|rest| rest.strip_suffix('}'))
            .unwrap_or(text);
        let value = Uuid::parse_str(inner).map_err(|e| Error::InvalidGuid {
            value: text.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self {
            value,
            text: text.to_string(),
        })
    }

    /// Wrap a `Uuid`, spelled upper-case and braced as Visual Studio writes it.
    #[must_use]
    pub fn from_uuid(value: Uuid) -> Self {
        Self {
            value,
            text: format!("{{{value}}}").to_uppercase(),
        }
    }

    /// Generate a fresh random GUID.
    #[must_use]
    pub fn new_v4() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    /// The parsed value.
    #[must_use]
    pub fn value(&self) -> Uuid {
        self.value
    }

    /// The upper-case braced form, independent of the original spelling.
    #[must_use]
    pub fn canonical(&self) -> String {
        format!("{{{}}}", self.value).to_uppercase()
    }

    /// Returns `true` if `text` mentions this GUID in braces, ignoring case.
    ///
    /// Used to match `{Guid}.Debug|Any CPU.ActiveCfg` style keys. Solution
    /// files always brace GUIDs, so bare text does not match.
    ///
    /// # Examples
    ///
    /// ```
    /// use sln_transform::solution::SolutionGuid;
    ///
    /// let guid = SolutionGuid::parse("{5C5A8F3B-1A2B-4C3D-8E9F-0A1B2C3D4E5F}").unwrap();
    /// assert!(guid.appears_in("{5c5a8f3b-1a2b-4c3d-8e9f-0a1b2c3d4e5f}.Debug|x86.Build.0"));
    /// assert!(!guid.appears_in("5C5A8F3B-1A2B-4C3D-8E9F-0A1B2C3D4E5F"));
    /// ```
    #[must_use]
    pub fn appears_in(&self, text: &str) -> bool {
        text.to_uppercase().contains(&self.canonical())
    }

    /// Returns `true` if this is the solution-folder project type.
    #[must_use]
    pub fn is_solution_folder_type(&self) -> bool {
        self.canonical() == SOLUTION_FOLDER_TYPE
    }
}

impl PartialEq for SolutionGuid {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl Eq for SolutionGuid {}

impl Hash for SolutionGuid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl PartialOrd for SolutionGuid {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SolutionGuid {
    fn cmp(&self, other: &Self) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl fmt::Display for SolutionGuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_braced_and_bare() {
        let braced = SolutionGuid::parse("{FAE04EC0-301F-11D3-BF4B-00C04F79EFBC}").unwrap();
        let bare = SolutionGuid::parse("FAE04EC0-301F-11D3-BF4B-00C04F79EFBC").unwrap();
        assert_eq!(braced, bare);
        assert_eq!(bare.canonical(), CSHARP_PROJECT_TYPE);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = SolutionGuid::parse("{not-a-guid}").unwrap_err();
        assert!(matches!(err, Error::InvalidGuid { .. }));
    }

    #[test]
    fn test_display_preserves_spelling() {
        let text = "{fae04ec0-301f-11d3-bf4b-00c04f79efbc}";
        assert_eq!(SolutionGuid::parse(text).unwrap().to_string(), text);
    }

    #[test]
    fn test_new_v4_is_upper_braced() {
        let guid = SolutionGuid::new_v4();
        let text = guid.to_string();
        assert!(text.starts_with('{') && text.ends_with('}'));
        assert_eq!(text, text.to_uppercase());
        assert_eq!(SolutionGuid::parse(&text).unwrap(), guid);
    }

    #[test]
    fn test_appears_in_ignores_case() {
        let guid = SolutionGuid::parse("{5C5A8F3B-1A2B-4C3D-8E9F-0A1B2C3D4E5F}").unwrap();
        assert!(guid.appears_in("{5c5a8f3b-1a2b-4c3d-8e9f-0a1b2c3d4e5f}.Debug|Any CPU.ActiveCfg"));
        assert!(!guid.appears_in("{00000000-0000-0000-0000-000000000000}.Debug|Any CPU.ActiveCfg"));
    }

    #[test]
    fn test_solution_folder_type() {
        assert!(SolutionGuid::parse(SOLUTION_FOLDER_TYPE)
            .unwrap()
            .is_solution_folder_type());
        assert!(!SolutionGuid::parse(CSHARP_PROJECT_TYPE)
            .unwrap()
            .is_solution_folder_type());
    }
}
