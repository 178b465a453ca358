//! Ordered rulesets and last-match-wins lookups.

use super::error::MatchError;
use super::pattern::Pattern;
use crate::parse::{ParseError, parse_ruleset};
use log::trace;
use std::str::FromStr;

/// One compiled CODEOWNERS rule.
///
/// Rules are immutable once constructed.
#[derive(Debug, Clone)]
pub struct Rule {
    line_number: usize,
    pattern: Pattern,
    owners: Vec<String>,
    comment: Option<String>,
}

impl Rule {
    /// Creates a rule from its 1-based source line, compiled pattern, owners
    /// and optional trailing comment.
    pub fn new(
        line_number: usize,
        pattern: Pattern,
        owners: Vec<String>,
        comment: Option<String>,
    ) -> Self {
        Self {
            line_number,
            pattern,
            owners,
            comment,
        }
    }

    /// The 1-based line number of the rule in its source file.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// The compiled pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// The owners, in the order they were written. May be empty.
    pub fn owners(&self) -> &[String] {
        &self.owners
    }

    /// The trailing comment, if any.
    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    /// Returns true if the rule's pattern matches a normalized path.
    pub fn matches(&self, path: &str) -> bool {
        self.pattern.matches(path)
    }
}

/// An ordered, immutable collection of rules.
///
/// Order is significant: when several rules match a path, the one that
/// appears last in the file wins. Lookups take `&self` and touch no shared
/// mutable state, so a ruleset can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Ruleset {
    rules: Vec<Rule>,
}

impl Ruleset {
    /// Creates a ruleset from rules in file order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parses and compiles CODEOWNERS text into a ruleset.
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        parse_ruleset(input)
    }

    /// Returns the rule that decides ownership of `path`.
    ///
    /// Rules are scanned from last to first and the first match wins.
    /// `Ok(None)` means no rule matched, which is not an error.
    pub fn match_path(&self, path: &str) -> Result<Option<&Rule>, MatchError> {
        let normalized = normalize_path(path)?;
        let matched = self.rules.iter().rev().find(|rule| rule.matches(normalized));

        match matched {
            Some(rule) => trace!(
                "Matched rule for {}: line={}, comment={:?}, owners={:?}",
                normalized,
                rule.line_number,
                rule.comment,
                rule.owners
            ),
            None => trace!("No rule matched {}", normalized),
        }

        Ok(matched)
    }

    /// Returns the owners of `path` according to the winning rule.
    ///
    /// `Ok(Some(&[]))` means the path is explicitly unowned; `Ok(None)`
    /// means no rule matched.
    pub fn owners(&self, path: &str) -> Result<Option<&[String]>, MatchError> {
        Ok(self.match_path(path)?.map(Rule::owners))
    }

    /// Returns every rule matching `path`, in file order.
    ///
    /// The last element, if any, is the rule [`Ruleset::match_path`] returns.
    pub fn matching_rules(&self, path: &str) -> Result<Vec<&Rule>, MatchError> {
        let normalized = normalize_path(path)?;
        Ok(self
            .rules
            .iter()
            .filter(|rule| rule.matches(normalized))
            .collect())
    }

    /// Returns the rules in file order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Returns an iterator over the rules in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.rules.iter()
    }

    /// Returns the number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the ruleset has no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromStr for Ruleset {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a Ruleset {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// Normalizes a repository-relative path for matching.
///
/// Leading and trailing slashes are stripped. `.` and `..` are not resolved,
/// and `/` is the only separator.
pub fn normalize_path(path: &str) -> Result<&str, MatchError> {
    if path.contains('\0') {
        return Err(MatchError::NulByte {
            path: path.to_string(),
        });
    }

    let trimmed = path.trim_start_matches('/').trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(MatchError::EmptyPath {
            path: path.to_string(),
        });
    }
    if trimmed.contains("//") {
        return Err(MatchError::EmptySegment {
            path: path.to_string(),
        });
    }

    Ok(trimmed)
}
