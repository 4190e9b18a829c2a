//! String-level path operations
//!
//! These functions take raw path strings, run them through [`NormPath`] and
//! hand back the canonical rendering. The free functions use the native
//! [`PathStyle`] and the process working directory; [`Normalizer`] lets
//! callers pin either one.

use crate::cwd::{ProcessDirectory, WorkingDirectory};
use crate::error::{PathError, Result};
use crate::path::NormPath;
use crate::style::PathStyle;

/// Path operations bound to a style and a working directory source
///
/// # Examples
/// ```
/// use path_norm::{FixedDirectory, Normalizer, PathStyle};
///
/// let fs = Normalizer::new(PathStyle::POSIX, FixedDirectory::new("/home/guest"));
///
/// assert_eq!(fs.join("/tmp", "abc").unwrap(), "/tmp/abc/");
/// assert_eq!(fs.absolute("oop/1").unwrap(), "/home/guest/oop/1/");
/// assert_eq!(fs.relativize("/home/guest/oop/1", "/home/guest/").unwrap(), "../../");
/// assert_eq!(fs.relative("/home/puffy").unwrap(), "../puffy/");
/// ```
#[derive(Debug, Clone)]
pub struct Normalizer<D = ProcessDirectory> {
    style: PathStyle,
    cwd: D,
}

impl Normalizer<ProcessDirectory> {
    /// Native style, process working directory
    pub fn native() -> Self {
        Self::new(PathStyle::native(), ProcessDirectory)
    }
}

impl Default for Normalizer<ProcessDirectory> {
    fn default() -> Self {
        Self::native()
    }
}

impl<D: WorkingDirectory> Normalizer<D> {
    /// Bind operations to `style` and the working directory source `cwd`
    pub fn new(style: PathStyle, cwd: D) -> Self {
        Self { style, cwd }
    }

    /// The style every input is parsed with
    pub fn style(&self) -> PathStyle {
        self.style
    }

    /// Parse `raw` in this normalizer's style
    pub fn parse(&self, raw: &str) -> Result<NormPath> {
        NormPath::parse_with(raw, self.style)
    }

    /// Join `appended` onto `base`
    ///
    /// # Errors
    /// Fails if either input is empty or malformed, or if `appended` is absolute.
    pub fn join(&self, base: &str, appended: &str) -> Result<String> {
        let base = self.parse(base)?;
        let appended = self.parse(appended)?;
        if appended.is_absolute() {
            return Err(PathError::invalid_argument(
                "appended path must be relative",
            ));
        }
        Ok(base.join_with(&appended).to_string())
    }

    /// Resolve `path` against the working directory; absolute input is only reformatted
    pub fn absolute(&self, path: &str) -> Result<String> {
        Ok(self.parse(path)?.absolutize(&self.cwd)?.to_string())
    }

    /// The relative path leading from `base` to `path`
    ///
    /// # Errors
    /// Fails if either input is empty, malformed or not absolute.
    pub fn relativize(&self, base: &str, path: &str) -> Result<String> {
        let path = self.parse(path)?;
        let base = self.parse(base)?;
        Ok(path.relativize(&base)?.to_string())
    }

    /// Express `path` relative to the working directory; relative input is only reformatted
    pub fn relative(&self, path: &str) -> Result<String> {
        Ok(self.parse(path)?.relative(&self.cwd)?.to_string())
    }
}

/// Join two paths and normalize the result
///
/// # Examples
/// ```
/// use path_norm::join;
///
/// assert!(join("path/to/dir", "").is_err());
/// ```
pub fn join(base: &str, appended: &str) -> Result<String> {
    Normalizer::native().join(base, appended)
}

/// Make a path absolute with respect to the process working directory
pub fn absolute(path: &str) -> Result<String> {
    Normalizer::native().absolute(path)
}

/// Relativize `path` against `base`; both must be absolute
pub fn relativize(base: &str, path: &str) -> Result<String> {
    Normalizer::native().relativize(base, path)
}

/// Make a path relative to the process working directory
pub fn relative(path: &str) -> Result<String> {
    Normalizer::native().relative(path)
}
