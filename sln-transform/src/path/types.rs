//! The immutable path value used by the solution model.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use super::normalize::{self, SEPARATOR};

/// A normalized path with directory and absolute flags.
///
/// Every operation returns a new value. Two paths are equal when their flags
/// match and their normalized strings match case-insensitively.
///
/// # Examples
///
/// ```
/// use sln_transform::path::FilePath;
///
/// let a = FilePath::new_directory("C:\\Foo");
/// let b = FilePath::new_directory("c:\\foo\\");
/// assert_eq!(a, b);
/// assert!(a.is_absolute());
/// ```
#[derive(Debug, Clone)]
pub struct FilePath {
    path: String,
    is_directory: bool,
    is_absolute: bool,
}

impl FilePath {
    /// Create a path, detecting whether it is absolute.
    #[must_use]
    pub fn new(path: &str, is_directory: bool) -> Self {
        Self::with_flags(path, is_directory, normalize::is_rooted(path))
    }

    /// Create a path with explicit flags.
    #[must_use]
    pub fn with_flags(path: &str, is_directory: bool, is_absolute: bool) -> Self {
        Self {
            path: normalize::normalize(path),
            is_directory,
            is_absolute,
        }
    }

    /// Create a file path.
    #[must_use]
    pub fn new_file(path: &str) -> Self {
        Self::new(path, false)
    }

    /// Create a directory path.
    #[must_use]
    pub fn new_directory(path: &str) -> Self {
        Self::new(path, true)
    }

    /// Convert a platform path into a `FilePath`.
    #[must_use]
    pub fn from_std(path: &Path, is_directory: bool) -> Self {
        Self::new(&path.to_string_lossy(), is_directory)
    }

    /// The normalized path string (backslash separated).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.path
    }

    /// Whether this path denotes a directory.
    #[must_use]
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    /// Whether this path is absolute.
    #[must_use]
    pub fn is_absolute(&self) -> bool {
        self.is_absolute
    }

    /// The last segment, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use sln_transform::path::FilePath;
    ///
    /// let path = FilePath::new_file("C:\\work\\App\\App.csproj");
    /// assert_eq!(path.file_name(), Some("App.csproj"));
    /// ```
    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        normalize::segments(&self.path)
            .last()
            .copied()
            .filter(|segment| !segment.is_empty() && !normalize::is_drive(segment))
    }

    /// Render with the platform separator for use with `std::fs`.
    #[must_use]
    pub fn to_path_buf(&self) -> PathBuf {
        PathBuf::from(self.path.replace(SEPARATOR, std::path::MAIN_SEPARATOR_STR))
    }

    /// The directory one level up, or `None` at a root.
    ///
    /// A single relative segment has the empty relative directory as parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use sln_transform::path::FilePath;
    ///
    /// let file = FilePath::new_file("C:\\work\\All.sln");
    /// assert_eq!(file.parent(), Some(FilePath::new_directory("C:\\work")));
    /// assert_eq!(FilePath::new_directory("C:\\").parent(), None);
    /// ```
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let segments = normalize::segments(&self.path);
        match segments.as_slice() {
            [] => None,
            [only] if only.is_empty() || normalize::is_drive(only) => None,
            [_] => Some(Self::with_flags("", true, self.is_absolute)),
            [init @ .., _] => Some(Self::with_flags(
                &normalize::join(init),
                true,
                self.is_absolute,
            )),
        }
    }

    /// The directory this path lives in: itself for directories, the parent
    /// for files.
    fn containing_directory(&self) -> Self {
        if self.is_directory {
            return self.clone();
        }
        self.parent()
            .unwrap_or_else(|| Self::with_flags("", true, self.is_absolute))
    }

    /// A file inside this directory (or inside this file's directory).
    ///
    /// # Examples
    ///
    /// ```
    /// use sln_transform::path::FilePath;
    ///
    /// let sln = FilePath::new_file("C:\\work\\All.sln");
    /// let user = sln.file("All.suo");
    /// assert_eq!(user.as_str(), "C:\\work\\All.suo");
    /// assert!(!user.is_directory());
    /// ```
    #[must_use]
    pub fn file(&self, name: &str) -> Self {
        let dir = self.containing_directory();
        Self::with_flags(
            &normalize::combine(&dir.path, name),
            false,
            dir.is_absolute || normalize::is_rooted(name),
        )
    }

    /// A directory inside this directory (or inside this file's directory).
    #[must_use]
    pub fn directory(&self, name: &str) -> Self {
        let dir = self.containing_directory();
        Self::with_flags(
            &normalize::combine(&dir.path, name),
            true,
            dir.is_absolute || normalize::is_rooted(name),
        )
    }

    /// Resolve this path against `base`.
    ///
    /// Absolute paths are returned unchanged. A file `base` is replaced by
    /// its parent directory first. The result is absolute when `base` is.
    ///
    /// # Examples
    ///
    /// ```
    /// use sln_transform::path::FilePath;
    ///
    /// let sln = FilePath::new_file("C:\\work\\All.sln");
    /// let project = FilePath::new_file("..\\lib\\Lib.csproj");
    /// assert_eq!(project.to_absolute(&sln).as_str(), "C:\\lib\\Lib.csproj");
    /// ```
    #[must_use]
    pub fn to_absolute(&self, base: &FilePath) -> Self {
        if self.is_absolute {
            return self.clone();
        }
        if !base.is_directory {
            return match base.parent() {
                Some(parent) => self.to_absolute(&parent),
                None => self.clone(),
            };
        }
        Self::with_flags(
            &normalize::combine(&base.path, &self.path),
            self.is_directory,
            base.is_absolute,
        )
    }

    /// The shortest relative path from `base` to this path.
    ///
    /// Relative paths are returned unchanged, as are paths that share no
    /// root with `base` (different drives).
    ///
    /// # Examples
    ///
    /// ```
    /// use sln_transform::path::FilePath;
    ///
    /// let base = FilePath::new_directory("C:\\work\\App");
    /// let lib = FilePath::new_file("C:\\work\\Lib\\Lib.csproj");
    /// assert_eq!(lib.relative_to(&base).as_str(), "..\\Lib\\Lib.csproj");
    /// ```
    #[must_use]
    pub fn relative_to(&self, base: &FilePath) -> Self {
        if !base.is_directory {
            return match base.parent() {
                Some(parent) => self.relative_to(&parent),
                None => self.clone(),
            };
        }
        if !self.is_absolute {
            return self.clone();
        }
        match super::relative::relative_segments(&self.path, &base.path) {
            Some(relative) => Self::with_flags(&relative, self.is_directory, false),
            None => self.clone(),
        }
    }

    fn comparison_key(&self) -> String {
        self.path.to_lowercase()
    }
}

impl PartialEq for FilePath {
    fn eq(&self, other: &Self) -> bool {
        self.is_directory == other.is_directory
            && self.is_absolute == other.is_absolute
            && self.comparison_key() == other.comparison_key()
    }
}

impl Eq for FilePath {}

impl Hash for FilePath {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.is_directory.hash(state);
        self.is_absolute.hash(state);
        self.comparison_key().hash(state);
    }
}

impl PartialOrd for FilePath {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FilePath {
    fn cmp(&self, other: &Self) -> Ordering {
        self.comparison_key()
            .cmp(&other.comparison_key())
            .then(self.is_absolute.cmp(&other.is_absolute))
            .then(self.is_directory.cmp(&other.is_directory))
    }
}

impl fmt::Display for FilePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path)
    }
}
