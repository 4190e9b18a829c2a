//! Separator and root conventions
//!
//! A [`PathStyle`] is resolved once (natively, from configuration, or in tests)
//! and carried by every [`NormPath`](crate::NormPath) built with it.

use crate::error::{PathError, Result};
use std::fmt;
use std::str::FromStr;

/// The separator and root characters used to parse and render paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PathStyle {
    separator: char,
    root: char,
}

impl PathStyle {
    /// `/` as both separator and root
    pub const POSIX: PathStyle = PathStyle::new('/', '/');

    /// `\` as both separator and root
    pub const WINDOWS: PathStyle = PathStyle::new('\\', '\\');

    pub const fn new(separator: char, root: char) -> Self {
        Self { separator, root }
    }

    /// The style of the platform this crate was compiled for
    ///
    /// # Examples
    /// ```
    /// use path_norm::PathStyle;
    ///
    /// if cfg!(windows) {
    ///     assert_eq!(PathStyle::native(), PathStyle::WINDOWS);
    /// } else {
    ///     assert_eq!(PathStyle::native(), PathStyle::POSIX);
    /// }
    /// ```
    pub const fn native() -> Self {
        if cfg!(windows) {
            Self::WINDOWS
        } else {
            Self::POSIX
        }
    }

    pub const fn separator(&self) -> char {
        self.separator
    }

    pub const fn root(&self) -> char {
        self.root
    }
}

impl Default for PathStyle {
    fn default() -> Self {
        Self::native()
    }
}

impl FromStr for PathStyle {
    type Err = PathError;

    /// Accepts `posix`, `windows` or `native`, ignoring case
    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "posix" => Ok(Self::POSIX),
            "windows" => Ok(Self::WINDOWS),
            "native" => Ok(Self::native()),
            _ => Err(PathError::invalid_argument(format!(
                "unknown path style: {s}"
            ))),
        }
    }
}

impl fmt::Display for PathStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::POSIX => write!(f, "posix"),
            Self::WINDOWS => write!(f, "windows"),
            Self { separator, root } => write!(f, "separator {separator:?}, root {root:?}"),
        }
    }
}
