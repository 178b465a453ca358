//! CODEOWNERS Lookup Core
//!
//! A library for parsing GitHub-style CODEOWNERS files and answering "who
//! owns this path?" with last-match-wins precedence.
//!
//! # Features
//!
//! - **Parser**: Fail-fast parsing into compiled rules, or lenient parsing
//!   into an AST with span metadata for every line
//! - **Matcher**: gitignore-flavoured globs, reverse scan so the last
//!   matching rule wins
//! - **Engine trait**: [`OwnershipEngine`] for code that wants the
//!   parse/match contract injected rather than a concrete type
//! - **Loading**: Discover and load a repository's CODEOWNERS file
//!
//! # Quick Start
//!
//! ```rust
//! use codeowners_lookup_core::Ruleset;
//!
//! let input = r#"
//! * @default-owner
//! /docs/ @doc-team
//! *.go @go-team @go-team2
//! "#;
//!
//! let ruleset = Ruleset::parse(input).expect("valid CODEOWNERS");
//!
//! match ruleset.match_path("src/main.go") {
//!     Ok(Some(rule)) => println!("line {}: {:?}", rule.line_number(), rule.owners()),
//!     Ok(None) => println!("no owner"),
//!     Err(error) => eprintln!("bad path: {}", error),
//! }
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Parser for CODEOWNERS files
//! - [`matching`]: Patterns, rules and rulesets
//! - [`engine`]: The parse/match trait
//! - [`source`]: Locating and loading CODEOWNERS files
//! - [`walk`]: Listing repository files

pub mod engine;
#[cfg(feature = "generate")]
pub mod generate;
pub mod matching;
pub mod parse;
pub mod source;
pub mod walk;

pub use engine::OwnershipEngine;
pub use matching::{MatchError, Rule, Ruleset};
pub use parse::{ParseError, ParseResult, parse_codeowners, parse_ruleset};
pub use source::{LoadError, find_codeowners_file, load_ruleset};
