//! AST data structures for CODEOWNERS files.
//!
//! This module defines the abstract syntax tree nodes that represent
//! parsed CODEOWNERS file content. The AST keeps every line, including
//! blanks and comments, so tooling can point at exact source locations.

use super::span::Span;
use std::fmt::{self, Display};

/// Represents a pattern in a CODEOWNERS rule, as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    /// The raw pattern text (e.g., "*.rs", "/src/**", "docs/"), escapes included.
    pub text: String,
    /// Location of the pattern in the source file.
    pub span: Span,
}

impl Pattern {
    /// Creates a new pattern with the given text and span.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Represents an owner in a CODEOWNERS rule.
///
/// Owners are opaque handles; no attempt is made to tell users, teams and
/// email addresses apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Owner {
    /// The owner token as written (e.g. "@octocat", "@org/team").
    pub text: String,
    /// Location in the source file.
    pub span: Span,
}

impl Owner {
    /// Creates a new owner with the given text and span.
    pub fn new(text: impl Into<String>, span: Span) -> Self {
        Self {
            text: text.into(),
            span,
        }
    }

    /// Returns the owner token.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Display for Owner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// Represents the kind of line in a CODEOWNERS file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// A blank line (may contain only whitespace).
    Blank,
    /// A comment line (starts with '#').
    Comment {
        /// The comment content (without the leading '#').
        content: String,
    },
    /// A rule line with a pattern and zero or more owners.
    Rule {
        /// The file path pattern.
        pattern: Pattern,
        /// The owners for files matching the pattern. Empty means "unowned".
        owners: Vec<Owner>,
        /// Trailing comment, without the leading '#'.
        comment: Option<String>,
    },
    /// An invalid line that couldn't be parsed.
    Invalid {
        /// The raw line content.
        raw: String,
        /// Description of what went wrong.
        error: String,
    },
}

/// Represents a single line in a CODEOWNERS file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// The kind/content of this line.
    pub kind: LineKind,
    /// Location of the entire line in the source file.
    pub span: Span,
}

impl Line {
    /// Creates a new line with the given kind and span.
    pub fn new(kind: LineKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Creates a blank line.
    pub fn blank(span: Span) -> Self {
        Self::new(LineKind::Blank, span)
    }

    /// Creates a comment line.
    pub fn comment(content: impl Into<String>, span: Span) -> Self {
        Self::new(
            LineKind::Comment {
                content: content.into(),
            },
            span,
        )
    }

    /// Creates a rule line.
    pub fn rule(pattern: Pattern, owners: Vec<Owner>, comment: Option<String>, span: Span) -> Self {
        Self::new(
            LineKind::Rule {
                pattern,
                owners,
                comment,
            },
            span,
        )
    }

    /// Creates an invalid line.
    pub fn invalid(raw: impl Into<String>, error: impl Into<String>, span: Span) -> Self {
        Self::new(
            LineKind::Invalid {
                raw: raw.into(),
                error: error.into(),
            },
            span,
        )
    }

    /// Returns true if this is a rule line.
    pub fn is_rule(&self) -> bool {
        matches!(self.kind, LineKind::Rule { .. })
    }

    /// Returns true if this is a comment line.
    pub fn is_comment(&self) -> bool {
        matches!(self.kind, LineKind::Comment { .. })
    }

    /// Returns true if this is a blank line.
    pub fn is_blank(&self) -> bool {
        matches!(self.kind, LineKind::Blank)
    }

    /// Returns true if this is an invalid line.
    pub fn is_invalid(&self) -> bool {
        matches!(self.kind, LineKind::Invalid { .. })
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            LineKind::Blank => Ok(()),
            LineKind::Comment { content } => write!(f, "#{}", content),
            LineKind::Rule {
                pattern,
                owners,
                comment,
            } => {
                write!(f, "{}", pattern)?;
                for owner in owners {
                    write!(f, " {}", owner)?;
                }
                if let Some(comment) = comment {
                    write!(f, " # {}", comment)?;
                }
                Ok(())
            }
            LineKind::Invalid { raw, .. } => f.write_str(raw),
        }
    }
}

/// The complete AST for a CODEOWNERS file.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CodeownersFile {
    /// All lines in the file, in order.
    pub lines: Vec<Line>,
}

impl CodeownersFile {
    /// Creates a new CODEOWNERS file AST from the given lines.
    pub fn new(lines: Vec<Line>) -> Self {
        Self { lines }
    }

    /// Returns an iterator over all rule lines.
    pub fn rules(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| line.is_rule())
    }

    /// Returns an iterator over all invalid lines.
    pub fn invalid_lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter().filter(|line| line.is_invalid())
    }

    /// Returns true if there are any invalid lines.
    pub fn has_errors(&self) -> bool {
        self.lines.iter().any(|line| line.is_invalid())
    }
}

impl Display for CodeownersFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", line)?;
        }
        // Trailing newline for POSIX compatibility
        if !self.lines.is_empty() {
            writeln!(f)?;
        }
        Ok(())
    }
}
