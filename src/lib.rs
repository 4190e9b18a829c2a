//! # path-norm
//!
//! Lexical path normalization: join, absolutize and relativize path strings
//! without touching the filesystem.
//!
//! Every input is parsed into a [`NormPath`]: an absolute flag, a list of
//! named segments, and a count of `..` steps that climb above the first
//! segment. `.` and `..` are resolved during parsing, so the operations only
//! ever pop and append segments. The only environment access is reading the
//! current working directory, and that goes through the
//! [`WorkingDirectory`] trait so it can be pinned.
//!
//! ## Features
//!
//! - **Join**: append a relative path, resolving `..` against the base
//! - **Absolutize**: resolve a relative path against the working directory
//! - **Relativize**: shortest relative path between two absolute paths
//! - **Root clamping**: climbing above the root of an absolute path stays at the root
//!
//! ## Examples
//!
//! ```rust
//! use path_norm::{FixedDirectory, Normalizer, PathStyle};
//!
//! let fs = Normalizer::new(PathStyle::POSIX, FixedDirectory::new("/home/puffy"));
//!
//! assert_eq!(fs.join("filesystem/path", "..").unwrap(), "filesystem/");
//! assert_eq!(fs.join("/sys/kernel/", "../../..").unwrap(), "/");
//! assert_eq!(fs.absolute("/home/puffy").unwrap(), "/home/puffy/");
//! assert_eq!(fs.relativize("/home/guest/", "/home/guest/oop/1").unwrap(), "oop/1/");
//!
//! // Invalid input is reported, never panics
//! assert!(fs.join("path/to/dir", "/absolute/path/").is_err());
//! assert!(fs.relativize("./relative", "/").is_err());
//! assert!(fs.absolute("").is_err());
//! ```

mod cwd;
mod error;
mod logging;
mod normalize;
mod path;
mod shell;
mod style;

// Generators module for property testing (available in tests)
#[cfg(test)]
pub mod generators;

// Re-export main public API
pub use cwd::{FixedDirectory, ProcessDirectory, WorkingDirectory};
pub use error::{PathError, Result};
pub use logging::{init_logger, LogLevel, Logger, LOG_ENV_VAR};
pub use normalize::{absolute, join, relative, relativize, Normalizer};
pub use path::NormPath;
pub use shell::{Shell, ShellError};
pub use style::PathStyle;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
