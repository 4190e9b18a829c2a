//! The normalized path value
//!
//! A [`NormPath`] is a path reduced to three facts: whether it starts at the
//! root, the named segments it descends through, and how many `..` steps it
//! takes above the first named segment. `.` and `..` never survive parsing,
//! so every operation works on plain segment lists.

use crate::cwd::WorkingDirectory;
use crate::error::{PathError, Result};
use crate::style::PathStyle;
use std::fmt;
use std::str::FromStr;

const CURRENT_DIR: &str = ".";
const PARENT_DIR: &str = "..";

/// A lexically normalized path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormPath {
    segments: Vec<String>,
    pending_up: usize,
    absolute: bool,
    style: PathStyle,
}

impl NormPath {
    /// Parse a raw path string using the native [`PathStyle`]
    pub fn parse(raw: &str) -> Result<Self> {
        Self::parse_with(raw, PathStyle::native())
    }

    /// Parse a raw path string, resolving `.` and `..` in a single pass
    ///
    /// A leading root character makes the path absolute; a single trailing
    /// separator is ignored. `..` directly under the root is a no-op.
    ///
    /// # Errors
    /// `InvalidArgument` if `raw` is empty or contains an empty segment.
    ///
    /// # Examples
    /// ```
    /// use path_norm::{NormPath, PathStyle};
    ///
    /// let path = NormPath::parse_with("/usr/local/lib/../bin/.", PathStyle::POSIX).unwrap();
    /// assert!(path.is_absolute());
    /// assert_eq!(path.segments(), ["usr", "local", "bin"]);
    /// assert_eq!(path.to_string(), "/usr/local/bin/");
    ///
    /// let path = NormPath::parse_with("../../a", PathStyle::POSIX).unwrap();
    /// assert_eq!(path.pending_up(), 2);
    /// assert_eq!(path.size(), 3);
    /// ```
    pub fn parse_with(raw: &str, style: PathStyle) -> Result<Self> {
        if raw.is_empty() {
            return Err(PathError::invalid_argument("path must be non-empty"));
        }

        let mut rest = raw;
        let mut absolute = false;
        if let Some(stripped) = rest.strip_prefix(style.root()) {
            absolute = true;
            rest = stripped;
        }
        if let Some(stripped) = rest.strip_suffix(style.separator()) {
            rest = stripped;
        }

        let mut path = Self {
            segments: Vec::new(),
            pending_up: 0,
            absolute,
            style,
        };
        if !rest.is_empty() {
            for token in rest.split(style.separator()) {
                if token.is_empty() {
                    return Err(PathError::invalid_argument(
                        "path contains an empty segment",
                    ));
                }
                path.push_token(token);
            }
        }
        if path.absolute {
            path.pending_up = 0;
        }

        log::debug!("parsed {raw:?} into {path:?}");
        Ok(path)
    }

    /// Whether the path starts at the root
    pub fn is_absolute(&self) -> bool {
        self.absolute
    }

    /// Number of segments plus unresolved `..` steps
    pub fn size(&self) -> usize {
        self.segments.len() + self.pending_up
    }

    /// True when there are neither segments nor pending `..` steps
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Named segments, root to leaf
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// `..` steps that point above the first segment
    pub fn pending_up(&self) -> usize {
        self.pending_up
    }

    /// The convention this path was parsed with and renders in
    pub fn style(&self) -> PathStyle {
        self.style
    }

    fn push_token(&mut self, token: &str) {
        match token {
            CURRENT_DIR => {}
            PARENT_DIR => self.ascend(1),
            name => self.segments.push(name.to_owned()),
        }
    }

    /// Pop up to `steps` segments and defer the rest.
    ///
    /// An absolute path has no parent above the root, so the shortfall is
    /// dropped there instead of deferred.
    fn ascend(&mut self, steps: usize) {
        let popped = steps.min(self.segments.len());
        self.segments.truncate(self.segments.len() - popped);
        let shortfall = steps - popped;
        if shortfall == 0 {
            return;
        }
        if self.absolute {
            log::debug!("clamping {shortfall} step(s) above the root");
        } else {
            self.pending_up += shortfall;
        }
    }

    /// Append `other` to this path
    ///
    /// `other`'s pending `..` steps consume this path's trailing segments
    /// first. No check is made on `other` being relative; its root flag is
    /// ignored and this path keeps its own. Segments of an `other` written in
    /// a different style are re-split on this path's separator.
    ///
    /// # Examples
    /// ```
    /// use path_norm::{NormPath, PathStyle};
    ///
    /// let base = NormPath::parse_with("/sys/kernel", PathStyle::POSIX).unwrap();
    /// let up = NormPath::parse_with("../../..", PathStyle::POSIX).unwrap();
    /// assert_eq!(base.join_with(&up).to_string(), "/");
    /// ```
    pub fn join_with(mut self, other: &NormPath) -> Self {
        self.ascend(other.pending_up);
        if other.style.separator() == self.style.separator() {
            self.segments.extend(other.segments.iter().cloned());
        } else {
            let sep = self.style.separator();
            for token in other.segments.iter().flat_map(|s| s.split(sep)) {
                if !token.is_empty() {
                    self.push_token(token);
                }
            }
        }
        self
    }

    /// Resolve a relative path against the working directory
    ///
    /// Absolute paths are returned unchanged.
    ///
    /// # Errors
    /// Fails if the working directory cannot be read, or does not parse as
    /// an absolute path in this path's style.
    ///
    /// # Examples
    /// ```
    /// use path_norm::{FixedDirectory, NormPath, PathStyle};
    ///
    /// let cwd = FixedDirectory::new("/home/puffy");
    /// let path = NormPath::parse_with("../guest/./oop", PathStyle::POSIX).unwrap();
    /// assert_eq!(path.absolutize(&cwd).unwrap().to_string(), "/home/guest/oop/");
    /// ```
    pub fn absolutize<D: WorkingDirectory + ?Sized>(self, cwd: &D) -> Result<Self> {
        if self.absolute {
            return Ok(self);
        }
        let base = Self::working_directory(cwd, self.style)?;
        Ok(base.join_with(&self))
    }

    /// The shortest relative path leading from `base` to this path
    ///
    /// # Errors
    /// `InvalidArgument` unless both this path and `base` are absolute and
    /// share the same style.
    ///
    /// # Examples
    /// ```
    /// use path_norm::{NormPath, PathStyle};
    ///
    /// let target = NormPath::parse_with("/home/guest/oop/1", PathStyle::POSIX).unwrap();
    /// let base = NormPath::parse_with("/home/guest/py", PathStyle::POSIX).unwrap();
    /// assert_eq!(target.relativize(&base).unwrap().to_string(), "../oop/1/");
    /// ```
    pub fn relativize(mut self, base: &NormPath) -> Result<Self> {
        if !self.absolute {
            return Err(PathError::invalid_argument("path must be absolute"));
        }
        if !base.absolute {
            return Err(PathError::invalid_argument("base must be absolute"));
        }
        if self.style != base.style {
            return Err(PathError::invalid_argument("path styles differ"));
        }

        let common = self
            .segments
            .iter()
            .zip(&base.segments)
            .take_while(|(ours, theirs)| ours == theirs)
            .count();
        self.segments.drain(..common);
        self.pending_up = base.segments.len() - common;
        self.absolute = false;
        Ok(self)
    }

    /// Express this path relative to the working directory
    ///
    /// Relative paths are returned unchanged.
    pub fn relative<D: WorkingDirectory + ?Sized>(self, cwd: &D) -> Result<Self> {
        if !self.absolute {
            return Ok(self);
        }
        let base = Self::working_directory(cwd, self.style)?;
        self.relativize(&base)
    }

    fn working_directory<D: WorkingDirectory + ?Sized>(
        cwd: &D,
        style: PathStyle,
    ) -> Result<Self> {
        let raw = cwd.current_dir()?;
        let dir = Self::parse_with(&raw, style)?;
        if !dir.absolute {
            return Err(PathError::invalid_argument(format!(
                "current directory must be absolute: {raw}"
            )));
        }
        Ok(dir)
    }
}

impl fmt::Display for NormPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = self.style.separator();
        if self.absolute {
            write!(f, "{}", self.style.root())?;
        } else if self.is_empty() {
            write!(f, "{CURRENT_DIR}{sep}")?;
        } else {
            for _ in 0..self.pending_up {
                write!(f, "{PARENT_DIR}{sep}")?;
            }
        }
        for segment in &self.segments {
            write!(f, "{segment}{sep}")?;
        }
        Ok(())
    }
}

impl FromStr for NormPath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
