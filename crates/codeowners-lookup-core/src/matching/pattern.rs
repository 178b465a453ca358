//! Compilation of CODEOWNERS patterns into path matchers.
//!
//! Patterns follow the gitignore-flavoured rules GitHub applies to CODEOWNERS:
//!
//! - `*` matches any sequence of non-slash characters, `?` a single one
//! - `**` matches zero or more whole path segments
//! - `[`, `]`, `{` and `}` are literal characters, not classes or alternations
//! - `/` at the start anchors to the repository root
//! - `/` at the end matches only the contents of a directory
//! - A pattern with no `/` (ignoring a trailing one) matches at any depth
//! - A pattern with a `/` in the middle is relative to the root
//! - Unless the last segment is exactly `*`, a pattern also matches everything
//!   below the paths it names

use super::error::PatternError;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};

/// A compiled CODEOWNERS pattern that can match repository paths.
#[derive(Debug, Clone)]
pub struct Pattern {
    /// The original pattern string.
    original: String,
    /// The compiled globs; a path matches if any of them does.
    globs: GlobSet,
    /// Whether this pattern is anchored to the root.
    anchored: bool,
    /// Whether this pattern matches only directory contents.
    directory_only: bool,
}

impl Pattern {
    /// Compiles a CODEOWNERS pattern for matching.
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let translated = translate(pattern)?;

        let mut builder = GlobSetBuilder::new();
        for source in &translated.globs {
            // literal_separator keeps `*` from crossing `/`
            let glob = GlobBuilder::new(source)
                .literal_separator(true)
                .backslash_escape(true)
                .build()?;
            builder.add(glob);
        }

        Ok(Self {
            original: pattern.to_string(),
            globs: builder.build()?,
            anchored: translated.anchored,
            directory_only: translated.directory_only,
        })
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Returns true if this pattern is anchored to the repository root.
    pub fn is_anchored(&self) -> bool {
        self.anchored
    }

    /// Returns true if this pattern matches only the contents of a directory.
    pub fn is_directory_only(&self) -> bool {
        self.directory_only
    }

    /// Checks if this pattern matches the given path.
    ///
    /// The path should be relative to the repository root and use forward
    /// slashes. A leading slash is ignored.
    pub fn matches(&self, path: &str) -> bool {
        let path = path.trim_start_matches('/');
        self.globs.is_match(path)
    }
}

/// The glob sources a pattern expands to, plus the flags read off its shape.
#[derive(Debug, PartialEq, Eq)]
struct Translated {
    globs: Vec<String>,
    anchored: bool,
    directory_only: bool,
}

/// Translates a CODEOWNERS pattern into one or two globset globs.
fn translate(pattern: &str) -> Result<Translated, PatternError> {
    if pattern.contains('\0') {
        return Err(PatternError::NulByte);
    }
    if pattern.starts_with('!') {
        return Err(PatternError::Negation);
    }

    let (body, anchored) = match pattern.strip_prefix('/') {
        Some(body) => (body, true),
        None => (pattern, false),
    };
    let (body, directory_only) = match body.strip_suffix('/') {
        Some(body) => (body, true),
        None => (body, false),
    };

    if body.is_empty() {
        return Err(PatternError::Empty);
    }

    let segments: Vec<&str> = body.split('/').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return Err(PatternError::EmptySegment);
    }

    let escaped = escape_literals(body);

    // A single unanchored segment floats: it may match at any depth.
    let floating = !anchored && segments.len() == 1 && segments[0] != "**";
    let base = if floating {
        format!("**/{}", escaped)
    } else {
        escaped
    };

    let globs = if directory_only {
        vec![format!("{}/**", base)]
    } else {
        match segments.last() {
            // A trailing `*` only matches one level; `**` already covers descendants.
            Some(&"*") | Some(&"**") => vec![base],
            _ => {
                let descendants = format!("{}/**", base);
                vec![base, descendants]
            }
        }
    };

    Ok(Translated {
        globs,
        anchored,
        directory_only,
    })
}

/// Escapes the glob metacharacters CODEOWNERS treats as plain text.
///
/// Existing backslash escapes are copied through untouched.
fn escape_literals(body: &str) -> String {
    let mut escaped = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                escaped.push(c);
                if let Some(next) = chars.next() {
                    escaped.push(next);
                }
            }
            '[' | ']' | '{' | '}' => {
                escaped.push('\\');
                escaped.push(c);
            }
            _ => escaped.push(c),
        }
    }
    escaped
}
