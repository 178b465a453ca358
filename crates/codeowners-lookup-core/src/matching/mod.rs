//! Pattern matching for CODEOWNERS files.
//!
//! A [`Ruleset`] holds compiled rules in file order and answers the question
//! "who owns this path?" with last-match-wins precedence. See [`Pattern`] for
//! the glob rules.

mod error;
mod pattern;
mod ruleset;

pub use error::{MatchError, PatternError};
pub use pattern::Pattern;
pub use ruleset::{Rule, Ruleset, normalize_path};
