//! Error types for pattern compilation and path lookups.

use thiserror::Error;

/// Why a CODEOWNERS pattern could not be compiled into a matcher.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    /// The pattern names no path segment (e.g. `/` or `//`).
    #[error("pattern must name at least one path segment")]
    Empty,

    /// The pattern contains an empty segment (e.g. `a//b`).
    #[error("pattern contains an empty path segment")]
    EmptySegment,

    /// Negation is a gitignore feature that CODEOWNERS does not support.
    #[error("negation patterns (!) are not supported in CODEOWNERS")]
    Negation,

    /// The pattern contains a NUL byte.
    #[error("patterns cannot contain null bytes")]
    NulByte,

    /// The glob itself is malformed (a dangling escape, for instance).
    #[error("{0}")]
    Glob(#[from] globset::Error),
}

/// An error raised by a single lookup because the queried path is malformed.
///
/// A lookup error never affects the ruleset or other lookups.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The path is empty, or consists only of slashes.
    #[error("path is empty")]
    EmptyPath {
        /// The path as supplied by the caller.
        path: String,
    },

    /// The path contains an empty segment (`a//b`).
    #[error("path `{path}` contains an empty segment")]
    EmptySegment {
        /// The path as supplied by the caller.
        path: String,
    },

    /// The path contains a NUL byte.
    #[error("path `{}` contains a null byte", path.escape_debug())]
    NulByte {
        /// The path as supplied by the caller.
        path: String,
    },
}

impl MatchError {
    /// Returns the path the caller supplied.
    pub fn path(&self) -> &str {
        match self {
            MatchError::EmptyPath { path } => path,
            MatchError::EmptySegment { path } => path,
            MatchError::NulByte { path } => path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn match_error_keeps_path() {
        let error = MatchError::EmptySegment {
            path: "a//b".to_string(),
        };
        assert_eq!(error.path(), "a//b");
        assert!(error.to_string().contains("empty segment"));
    }

    #[test]
    fn nul_byte_message_is_printable() {
        let error = MatchError::NulByte {
            path: "a\0b".to_string(),
        };
        assert!(error.to_string().contains("a\\0b"));
    }

    #[test]
    fn glob_error_converts() {
        let glob_error = globset::Glob::new("[unclosed").unwrap_err();
        let error = PatternError::from(glob_error);
        assert!(matches!(error, PatternError::Glob(_)));
    }
}
