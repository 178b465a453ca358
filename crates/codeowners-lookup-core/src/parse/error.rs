//! Error types for CODEOWNERS file parsing.
//!
//! This module defines error types that capture parse failures
//! along with their source locations.

use super::ast::CodeownersFile;
use super::span::Span;
use crate::matching::{PatternError, Rule, Ruleset};
use thiserror::Error;

/// An error that occurred during parsing.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A rule's pattern could not be compiled.
    #[error("line {line}: invalid pattern `{pattern}`: {reason}")]
    InvalidPattern {
        /// The line number where the error occurred (1-based).
        line: usize,
        /// The offending line, as written in the source.
        raw: String,
        /// The pattern token.
        pattern: String,
        /// Why the pattern was rejected.
        #[source]
        reason: PatternError,
        /// Location of the pattern in the source.
        span: Span,
    },

    /// A line could not be tokenized.
    #[error("line {line}: {message}")]
    InvalidLine {
        /// The line number where the error occurred (1-based).
        line: usize,
        /// The offending line, as written in the source.
        raw: String,
        /// Description of the error.
        message: String,
        /// Location in the source.
        span: Span,
    },
}

impl ParseError {
    /// Creates an invalid pattern error.
    pub fn invalid_pattern(
        raw: impl Into<String>,
        pattern: impl Into<String>,
        reason: PatternError,
        span: Span,
    ) -> Self {
        Self::InvalidPattern {
            line: span.line,
            raw: raw.into(),
            pattern: pattern.into(),
            reason,
            span,
        }
    }

    /// Creates an invalid line error.
    pub fn invalid_line(raw: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self::InvalidLine {
            line: span.line,
            raw: raw.into(),
            message: message.into(),
            span,
        }
    }

    /// Returns the span associated with this error.
    pub fn span(&self) -> &Span {
        match self {
            ParseError::InvalidPattern { span, .. } => span,
            ParseError::InvalidLine { span, .. } => span,
        }
    }

    /// Returns the line number where this error occurred.
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidPattern { line, .. } => *line,
            ParseError::InvalidLine { line, .. } => *line,
        }
    }

    /// Returns the raw text of the offending line.
    pub fn raw(&self) -> &str {
        match self {
            ParseError::InvalidPattern { raw, .. } => raw,
            ParseError::InvalidLine { raw, .. } => raw,
        }
    }
}

/// The result of parsing a CODEOWNERS file.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// The parsed AST (partial if parsing stopped early in strict mode).
    pub ast: CodeownersFile,
    /// Compiled rules for every rule line that parsed, in file order.
    pub rules: Vec<Rule>,
    /// Any errors encountered during parsing.
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// Creates a successful parse result with no errors.
    pub fn ok(ast: CodeownersFile, rules: Vec<Rule>) -> Self {
        Self {
            ast,
            rules,
            errors: Vec::new(),
        }
    }

    /// Creates a parse result with errors.
    pub fn with_errors(ast: CodeownersFile, rules: Vec<Rule>, errors: Vec<ParseError>) -> Self {
        Self { ast, rules, errors }
    }

    /// Returns true if parsing succeeded without errors.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns true if there were parse errors.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Converts the result into a [`Ruleset`].
    ///
    /// A single error invalidates the whole file: the first error is returned
    /// and no partial ruleset is produced.
    pub fn into_ruleset(self) -> Result<Ruleset, ParseError> {
        match self.errors.into_iter().next() {
            Some(error) => Err(error),
            None => Ok(Ruleset::new(self.rules)),
        }
    }
}
