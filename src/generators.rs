//! Property test generators for path normalization
//!
//! Raw inputs mix named segments with `.` and `..` tokens so the parser's
//! pop-or-defer logic gets exercised on both absolute and relative paths.
//! Everything generated here uses the POSIX convention and is well formed.

use proptest::prelude::*;

/// Generators for raw path strings
pub struct PathGenerators;

impl PathGenerators {
    /// A named segment, never `.` or `..`
    pub fn segment_name() -> impl Strategy<Value = String> {
        "[a-zA-Z0-9_][a-zA-Z0-9_.-]{0,8}"
    }

    /// A raw token: mostly names, with some `.` and `..`
    pub fn token() -> impl Strategy<Value = String> {
        prop_oneof![
            6 => Self::segment_name(),
            1 => Just(".".to_string()),
            2 => Just("..".to_string()),
        ]
    }

    /// A relative path, possibly with a trailing separator
    pub fn relative_path() -> impl Strategy<Value = String> {
        (prop::collection::vec(Self::token(), 1..=6), any::<bool>()).prop_map(
            |(tokens, trailing)| {
                let mut raw = tokens.join("/");
                if trailing {
                    raw.push('/');
                }
                raw
            },
        )
    }

    /// An absolute path; the bare root is included
    pub fn absolute_path() -> impl Strategy<Value = String> {
        prop_oneof![
            1 => Just("/".to_string()),
            5 => Self::relative_path().prop_map(|path| format!("/{}", path)),
        ]
    }

    /// Either kind of path
    pub fn any_path() -> impl Strategy<Value = String> {
        prop_oneof![
            1 => Self::relative_path(),
            1 => Self::absolute_path(),
        ]
    }

    /// A raw path guaranteed to hold an empty segment
    pub fn path_with_empty_segment() -> impl Strategy<Value = String> {
        (
            prop::collection::vec(Self::segment_name(), 1..=3),
            prop::collection::vec(Self::segment_name(), 1..=3),
        )
            .prop_map(|(head, tail)| format!("{}//{}", head.join("/"), tail.join("/")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    proptest! {
        #[test]
        fn segment_names_are_never_dot_tokens(name in PathGenerators::segment_name()) {
            prop_assert!(!name.is_empty());
            prop_assert_ne!(name.as_str(), ".");
            prop_assert_ne!(name.as_str(), "..");
            prop_assert!(!name.contains('/'));
        }

        #[test]
        fn absolute_paths_start_at_root(path in PathGenerators::absolute_path()) {
            prop_assert!(path.starts_with('/'));
            prop_assert!(!path.contains("//"));
        }

        #[test]
        fn empty_segment_paths_hold_double_separator(
            path in PathGenerators::path_with_empty_segment()
        ) {
            prop_assert!(path.contains("//"));
        }
    }
}
