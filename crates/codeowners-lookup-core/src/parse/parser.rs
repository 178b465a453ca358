//! Line and file-level parsers for CODEOWNERS files.
//!
//! This module combines the lexer components to parse complete lines
//! and entire CODEOWNERS files, compiling each rule's pattern as it goes.

use super::ast::{CodeownersFile, Line, LineKind, Owner};
use super::error::{ParseError, ParseResult};
use super::lexer::{is_blank_line, parse_comment_line, parse_rule_components};
use super::span::Span;
use crate::matching::{Pattern, Rule, Ruleset};
use log::{debug, trace};

/// Configuration options for the parser.
#[derive(Debug, Clone, Default)]
pub struct ParserConfig {
    /// If true, parsing stops at the first error (strict mode).
    /// If false, errors are collected and parsing continues (lenient mode).
    pub strict: bool,
}

impl ParserConfig {
    /// Creates a new parser config with default settings (lenient mode).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a strict mode parser config.
    pub fn strict() -> Self {
        Self { strict: true }
    }

    /// Creates a lenient mode parser config.
    pub fn lenient() -> Self {
        Self { strict: false }
    }
}

/// Parses a single line of a CODEOWNERS file into an AST node.
fn parse_line(line_text: &str, line_num: usize, line_offset: usize) -> Result<Line, ParseError> {
    let line_span = Span::new(line_offset, line_num, 1, line_text.len());

    if is_blank_line(line_text) {
        return Ok(Line::blank(line_span));
    }

    if let Ok((_, comment_content)) = parse_comment_line(line_text) {
        return Ok(Line::comment(comment_content, line_span));
    }

    // Blank and comment lines return above; this only fails if the lexer rejects a rule line.
    let (_remaining, components) = parse_rule_components(line_text)
        .map_err(|e| ParseError::invalid_line(line_text, format!("could not parse line: {e}"), line_span))?;

    let pattern = super::ast::Pattern::new(
        components.pattern,
        Span::within_line(
            line_offset,
            line_num,
            components.pattern_offset,
            components.pattern.len(),
        ),
    );

    let owners: Vec<Owner> = components
        .owners
        .iter()
        .zip(components.owner_offsets.iter())
        .map(|(owner_text, &offset)| {
            Owner::new(
                *owner_text,
                Span::within_line(line_offset, line_num, offset, owner_text.len()),
            )
        })
        .collect();

    Ok(Line::rule(
        pattern,
        owners,
        components.comment.map(str::to_string),
        line_span,
    ))
}

/// Compiles a rule line's pattern into a [`Rule`].
fn compile_rule(line_text: &str, line: &Line) -> Option<Result<Rule, ParseError>> {
    let LineKind::Rule {
        pattern,
        owners,
        comment,
    } = &line.kind
    else {
        return None;
    };

    let compiled = match Pattern::new(&pattern.text) {
        Ok(compiled) => compiled,
        Err(reason) => {
            return Some(Err(ParseError::invalid_pattern(
                line_text,
                &pattern.text,
                reason,
                pattern.span,
            )));
        }
    };

    Some(Ok(Rule::new(
        line.span.line,
        compiled,
        owners.iter().map(|owner| owner.text.clone()).collect(),
        comment.clone(),
    )))
}

/// Parses a CODEOWNERS file with the given configuration.
pub fn parse_codeowners_with_config(input: &str, config: &ParserConfig) -> ParseResult {
    debug!(
        "Parsing CODEOWNERS file ({} bytes, strict={})",
        input.len(),
        config.strict
    );
    let mut lines = Vec::new();
    let mut rules = Vec::new();
    let mut errors = Vec::new();
    let mut offset = 0;
    let mut remaining = input;

    for (line_idx, line_text) in input.lines().enumerate() {
        let line_num = line_idx + 1; // 1-based line numbers

        let parsed = parse_line(line_text, line_num, offset).and_then(|line| {
            match compile_rule(line_text, &line) {
                Some(Ok(rule)) => {
                    rules.push(rule);
                    Ok(line)
                }
                Some(Err(error)) => Err(error),
                None => Ok(line),
            }
        });

        match parsed {
            Ok(line) => {
                trace!("Line {}: parsed successfully", line_num);
                lines.push(line);
            }
            Err(error) => {
                debug!("Line {}: parse error - {}", line_num, error);
                if config.strict {
                    debug!("Strict mode: stopping at first error");
                    return ParseResult::with_errors(CodeownersFile::new(lines), rules, vec![error]);
                }
                let line_span = Span::new(offset, line_num, 1, line_text.len());
                lines.push(Line::invalid(line_text, error.to_string(), line_span));
                errors.push(error);
            }
        }

        // Calculate actual byte offset for next line by examining the original input.
        // This correctly handles both Unix (\n) and Windows (\r\n) line endings.
        let after_content = &remaining[line_text.len()..];
        let line_with_ending_len = if after_content.starts_with("\r\n") {
            line_text.len() + 2
        } else if after_content.starts_with('\n') {
            line_text.len() + 1
        } else {
            line_text.len()
        };

        offset += line_with_ending_len;
        remaining = &remaining[line_with_ending_len..];
    }

    let ast = CodeownersFile::new(lines);

    debug!(
        "Parsing complete: {} lines, {} rules, {} errors",
        ast.lines.len(),
        rules.len(),
        errors.len()
    );
    if errors.is_empty() {
        ParseResult::ok(ast, rules)
    } else {
        ParseResult::with_errors(ast, rules, errors)
    }
}

/// Parses a CODEOWNERS file using default (lenient) configuration.
///
/// Every line is reported; invalid lines are kept in the AST as
/// [`LineKind::Invalid`] and their errors collected.
pub fn parse_codeowners(input: &str) -> ParseResult {
    parse_codeowners_with_config(input, &ParserConfig::default())
}

/// Parses a CODEOWNERS file in strict mode, stopping at first error.
pub fn parse_codeowners_strict(input: &str) -> ParseResult {
    parse_codeowners_with_config(input, &ParserConfig::strict())
}

/// Parses CODEOWNERS text into a [`Ruleset`].
///
/// Fails fast: the first invalid line aborts parsing and no partial ruleset
/// is returned.
pub fn parse_ruleset(input: &str) -> Result<Ruleset, ParseError> {
    parse_codeowners_strict(input).into_ruleset()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::PatternError;

    #[test]
    fn parse_empty_file() {
        let result = parse_codeowners("");
        assert!(result.is_ok());
        assert_eq!(result.ast.lines.len(), 0);
        assert!(result.rules.is_empty());
    }

    #[test]
    fn parse_blank_and_comment_lines() {
        let input = "\n   \n\t\n# comment\n   # indented\n";
        let result = parse_codeowners(input);
        assert!(result.is_ok());
        assert_eq!(result.ast.lines.len(), 5);
        assert!(result.ast.lines[..3].iter().all(Line::is_blank));
        assert!(result.ast.lines[3..].iter().all(Line::is_comment));
        assert!(result.rules.is_empty());
    }

    #[test]
    fn parse_simple_rule() {
        let result = parse_codeowners("*.rs @rustacean\n");
        assert!(result.is_ok());
        assert_eq!(result.rules.len(), 1);

        let rule = &result.rules[0];
        assert_eq!(rule.line_number(), 1);
        assert_eq!(rule.pattern().as_str(), "*.rs");
        assert_eq!(rule.owners(), ["@rustacean".to_string()]);
        assert_eq!(rule.comment(), None);
    }

    #[test]
    fn parse_rule_with_trailing_comment() {
        let result = parse_codeowners("/docs/ @docs @writers # documentation\n");
        let rule = &result.rules[0];
        assert_eq!(rule.owners().len(), 2);
        assert_eq!(rule.comment(), Some("documentation"));

        if let LineKind::Rule { comment, .. } = &result.ast.lines[0].kind {
            assert_eq!(comment.as_deref(), Some("documentation"));
        } else {
            panic!("Expected rule");
        }
    }

    #[test]
    fn parse_rule_without_owners() {
        let result = parse_codeowners("*.rs\n*.js @frontend\n");
        assert!(result.is_ok());
        assert_eq!(result.rules.len(), 2);
        assert!(result.rules[0].owners().is_empty());
        assert_eq!(result.rules[1].owners().len(), 1);
    }

    #[test]
    fn parse_mixed_content_keeps_line_numbers() {
        let input = r#"# CODEOWNERS file

*.rs @rustacean
/docs/ @docs-team

# Frontend
*.js @frontend @github/web-team"#;
        let result = parse_codeowners(input);
        assert!(result.is_ok());
        assert_eq!(result.ast.lines.len(), 7);

        let lines: Vec<usize> = result.rules.iter().map(Rule::line_number).collect();
        assert_eq!(lines, vec![3, 4, 7]);
    }

    #[test]
    fn invalid_pattern_lenient_collects_all() {
        let input = "*.rs @rust\nsrc//oops @x\n*.js @js\n!vendor/ @y\n";
        let result = parse_codeowners(input);

        assert!(result.has_errors());
        assert_eq!(result.errors.len(), 2);
        assert_eq!(result.errors[0].line(), 2);
        assert_eq!(result.errors[1].line(), 4);
        assert!(result.ast.lines[1].is_invalid());
        assert!(result.ast.lines[3].is_invalid());
        assert!(result.ast.has_errors());
        assert_eq!(result.ast.invalid_lines().count(), 2);
        assert_eq!(result.rules.len(), 2);
    }

    #[test]
    fn invalid_pattern_strict_stops() {
        let input = "*.rs @rust\nsrc//oops @x\n!vendor/ @y\n";
        let result = parse_codeowners_strict(input);

        assert_eq!(result.errors.len(), 1);
        assert_eq!(result.ast.lines.len(), 1);
    }

    #[test]
    fn parse_ruleset_fails_fast_on_line_three() {
        let input = "* @default\n/docs/ @docs\nsrc//bad @team\n*.go @go\n";
        let error = parse_ruleset(input).unwrap_err();

        assert_eq!(error.line(), 3);
        assert_eq!(error.raw(), "src//bad @team");
        match error {
            ParseError::InvalidPattern {
                pattern, reason, ..
            } => {
                assert_eq!(pattern, "src//bad");
                assert_eq!(reason, PatternError::EmptySegment);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_ruleset_rejects_dangling_escape() {
        let error = parse_ruleset("* @a\nsrc/name\\\n").unwrap_err();
        assert_eq!(error.line(), 2);
        match error {
            ParseError::InvalidPattern { reason, .. } => {
                assert!(matches!(reason, PatternError::Glob(_)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn parse_ruleset_keeps_brackets_literal() {
        let ruleset = parse_ruleset("* @default\n/app/[slug]/ @web\n").unwrap();
        let rule = ruleset.match_path("app/[slug]/page.tsx").unwrap().unwrap();
        assert_eq!(rule.line_number(), 2);
        let rule = ruleset.match_path("app/s/page.tsx").unwrap().unwrap();
        assert_eq!(rule.line_number(), 1);
    }

    #[test]
    fn parse_ruleset_preserves_order_and_duplicates() {
        let input = "*.rs @a\n*.rs @a\n* @b\n";
        let ruleset = parse_ruleset(input).unwrap();
        let patterns: Vec<&str> = ruleset.iter().map(|r| r.pattern().as_str()).collect();
        assert_eq!(patterns, vec!["*.rs", "*.rs", "*"]);
    }

    #[test]
    fn crlf_line_endings() {
        let input = "*.rs @owner\r\n/docs/ @team\r\n";
        let result = parse_codeowners(input);
        assert!(result.is_ok());
        assert_eq!(result.ast.lines[1].span.offset, 13);
        assert_eq!(result.rules[1].owners(), ["@team".to_string()]);
    }

    #[test]
    fn span_positions_are_correct() {
        let input = "*.rs @owner\n/docs/ @team\n";
        let result = parse_codeowners(input);

        assert_eq!(result.ast.lines[0].span.line, 1);
        assert_eq!(result.ast.lines[0].span.offset, 0);
        assert_eq!(result.ast.lines[1].span.line, 2);
        assert_eq!(result.ast.lines[1].span.offset, 12);
    }

    #[test]
    fn pattern_and_owner_spans_are_correct() {
        let input = "  *.rs @alice @bob\n";
        let result = parse_codeowners(input);

        if let LineKind::Rule {
            pattern, owners, ..
        } = &result.ast.lines[0].kind
        {
            assert_eq!(pattern.span.column, 3);
            assert_eq!(pattern.span.length, 4);
            assert_eq!(owners[0].span.column, 8);
            assert_eq!(owners[0].span.length, 6);
            assert_eq!(owners[1].span.column, 15);
        } else {
            panic!("Expected rule");
        }
    }

    #[test]
    fn invalid_pattern_error_points_at_pattern() {
        let input = "* @a\n  /docs//x @b\n";
        let result = parse_codeowners(input);
        let span = result.errors[0].span();
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 3);
        assert_eq!(span.offset, 7);
    }

    #[test]
    fn config_modes() {
        assert!(!ParserConfig::default().strict);
        assert!(!ParserConfig::new().strict);
        assert!(ParserConfig::strict().strict);
        assert!(!ParserConfig::lenient().strict);
    }
}
