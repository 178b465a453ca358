//! Parser module for CODEOWNERS files.
//!
//! This module turns CODEOWNERS text into an AST with span metadata and,
//! alongside it, the compiled rules used for lookups.
//!
//! # Example
//!
//! ```rust
//! use codeowners_lookup_core::parse::{parse_codeowners, parse_ruleset};
//!
//! let input = r#"
//! ## CODEOWNERS file
//! *.rs @rustacean
//! /docs/ @docs-team
//! "#;
//!
//! let result = parse_codeowners(input);
//! assert!(result.is_ok());
//! assert_eq!(result.rules.len(), 2);
//!
//! let ruleset = parse_ruleset(input).unwrap();
//! let rule = ruleset.match_path("docs/guide.md").unwrap().unwrap();
//! assert_eq!(rule.owners(), ["@docs-team".to_string()]);
//! ```

mod ast;
mod error;
mod lexer;
mod parser;
pub mod span;

pub use ast::{CodeownersFile, Line, LineKind, Owner, Pattern};
pub use error::{ParseError, ParseResult};
pub use parser::{
    ParserConfig, parse_codeowners, parse_codeowners_strict, parse_codeowners_with_config,
    parse_ruleset,
};
pub use span::Span;
