//! The parse/match contract consumers program against.
//!
//! Callers that only need "parse some CODEOWNERS text, then ask who owns a
//! path" can be written generically over [`OwnershipEngine`] and receive an
//! engine by injection, rather than reaching for a concrete type.

use crate::matching::{MatchError, Rule, Ruleset};
use crate::parse::ParseError;

/// A parsed, immutable set of ownership rules that can answer lookups.
///
/// Implementations must be safe to share between threads: lookups take
/// `&self` and never mutate the engine.
pub trait OwnershipEngine: Send + Sync + Sized {
    /// Parses CODEOWNERS text into an engine, failing on the first bad line.
    fn parse(input: &str) -> Result<Self, ParseError>;

    /// Returns the rule deciding ownership of `path`, or `None` when no rule
    /// matches.
    fn match_path(&self, path: &str) -> Result<Option<&Rule>, MatchError>;

    /// Returns every rule that matches `path`, in file order.
    fn matching_rules(&self, path: &str) -> Result<Vec<&Rule>, MatchError>;

    /// Returns the number of rules in the engine.
    fn rule_count(&self) -> usize;
}

impl OwnershipEngine for Ruleset {
    fn parse(input: &str) -> Result<Self, ParseError> {
        Ruleset::parse(input)
    }

    fn match_path(&self, path: &str) -> Result<Option<&Rule>, MatchError> {
        Ruleset::match_path(self, path)
    }

    fn matching_rules(&self, path: &str) -> Result<Vec<&Rule>, MatchError> {
        Ruleset::matching_rules(self, path)
    }

    fn rule_count(&self) -> usize {
        self.len()
    }
}
