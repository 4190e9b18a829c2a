//! Access to the current working directory
//!
//! The working directory is the only piece of the environment the path
//! operations consult. It is modeled as a capability so callers (and tests)
//! can substitute a fixed value for the process's real directory.

use crate::error::{PathError, Result};

/// Source of the current working directory as a path string
pub trait WorkingDirectory {
    /// Returns the current working directory in the caller's separator convention
    fn current_dir(&self) -> Result<String>;
}

impl<T: WorkingDirectory + ?Sized> WorkingDirectory for &T {
    fn current_dir(&self) -> Result<String> {
        (**self).current_dir()
    }
}

impl<T: WorkingDirectory + ?Sized> WorkingDirectory for Box<T> {
    fn current_dir(&self) -> Result<String> {
        (**self).current_dir()
    }
}

/// The working directory of the running process
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessDirectory;

impl WorkingDirectory for ProcessDirectory {
    fn current_dir(&self) -> Result<String> {
        let dir = std::env::current_dir()?;
        log::debug!("process working directory: {}", dir.display());
        dir.into_os_string()
            .into_string()
            .map_err(|raw| PathError::WorkingDirectory {
                message: format!(
                    "current directory is not valid UTF-8: {}",
                    raw.to_string_lossy()
                ),
            })
    }
}

/// A working directory pinned to a fixed string
///
/// # Examples
/// ```
/// use path_norm::{FixedDirectory, WorkingDirectory};
///
/// let cwd = FixedDirectory::new("/home/puffy");
/// assert_eq!(cwd.current_dir().unwrap(), "/home/puffy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedDirectory {
    dir: String,
}

impl FixedDirectory {
    pub fn new(dir: impl Into<String>) -> Self {
        Self { dir: dir.into() }
    }
}

impl WorkingDirectory for FixedDirectory {
    fn current_dir(&self) -> Result<String> {
        Ok(self.dir.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_directory_matches_std() {
        let expected = std::env::current_dir().unwrap();
        let reported = ProcessDirectory.current_dir().unwrap();
        assert_eq!(reported, expected.to_string_lossy());
    }

    #[test]
    fn test_fixed_directory_through_indirection() {
        let fixed = FixedDirectory::new("/srv/data");
        let by_ref: &dyn WorkingDirectory = &fixed;
        let boxed: Box<dyn WorkingDirectory> = Box::new(fixed.clone());

        assert_eq!(by_ref.current_dir().unwrap(), "/srv/data");
        assert_eq!(boxed.current_dir().unwrap(), "/srv/data");
    }
}
