//! Lexer and token parsers for CODEOWNERS files.
//!
//! This module contains nom-based parsers for individual tokens
//! like patterns, owners, and comments.

use nom::{
    IResult, Parser,
    bytes::complete::{take_while, take_while1},
    character::complete::char,
    combinator::rest,
    error::{Error, ErrorKind},
};

/// Characters that can appear in an owner token.
fn is_owner_char(c: char) -> bool {
    !c.is_whitespace() && c != '#'
}

/// Consumes any run of whitespace, including non-ASCII whitespace.
fn whitespace0(input: &str) -> IResult<&str, &str> {
    take_while(char::is_whitespace)(input)
}

/// Parses a complete comment line (optional whitespace + # + content).
pub fn parse_comment_line(input: &str) -> IResult<&str, &str> {
    (whitespace0, char('#'), rest)
        .map(|(_, _, content)| content)
        .parse(input)
}

/// Checks if a line is blank (empty or only whitespace).
pub fn is_blank_line(input: &str) -> bool {
    input.trim().is_empty()
}

/// Parses a pattern token.
///
/// The token ends at the first unescaped whitespace or `#`. Backslash escapes
/// are kept in the returned text so the glob compiler sees them.
pub fn parse_pattern(input: &str) -> IResult<&str, &str> {
    let mut escaped = false;
    let mut end = input.len();
    for (idx, c) in input.char_indices() {
        if escaped {
            escaped = false;
            continue;
        }
        match c {
            '\\' => escaped = true,
            c if c.is_whitespace() || c == '#' => {
                end = idx;
                break;
            }
            _ => {}
        }
    }

    if end == 0 {
        return Err(nom::Err::Error(Error::new(input, ErrorKind::TakeWhile1)));
    }
    Ok((&input[end..], &input[..end]))
}

/// Result of parsing a rule line's components.
#[derive(Debug, Clone)]
pub struct RuleComponents<'a> {
    /// The pattern text.
    pub pattern: &'a str,
    /// Byte offset of pattern start within the line.
    pub pattern_offset: usize,
    /// List of owner texts (possibly empty).
    pub owners: Vec<&'a str>,
    /// Byte offsets of each owner start within the line.
    pub owner_offsets: Vec<usize>,
    /// Trailing comment text after `#`, trimmed. `None` when absent or empty.
    pub comment: Option<&'a str>,
}

/// Parses the components of a rule line (pattern, owners, trailing comment).
///
/// This parser extracts the raw text and offsets without constructing
/// AST nodes, allowing the caller to add span information.
pub fn parse_rule_components(input: &str) -> IResult<&str, RuleComponents<'_>> {
    let (after_ws, leading_ws) = whitespace0(input)?;
    let pattern_offset = leading_ws.len();

    let (after_pattern, pattern) = parse_pattern(after_ws)?;

    let mut owners = Vec::new();
    let mut owner_offsets = Vec::new();
    let mut current = after_pattern;
    let mut current_offset = pattern_offset + pattern.len();

    loop {
        let (after_ws, ws) = whitespace0(current)?;
        current_offset += ws.len();
        current = after_ws;

        if after_ws.is_empty() || after_ws.starts_with('#') {
            break;
        }

        let (after_owner, owner) = take_while1(is_owner_char)(after_ws)?;
        owner_offsets.push(current_offset);
        owners.push(owner);
        current_offset += owner.len();
        current = after_owner;
    }

    let (remaining, comment) = match parse_trailing_comment(current) {
        Ok((remaining, comment)) => (remaining, Some(comment)),
        Err(_) => (current, None),
    };

    Ok((
        remaining,
        RuleComponents {
            pattern,
            pattern_offset,
            owners,
            owner_offsets,
            comment: comment.filter(|c| !c.is_empty()),
        },
    ))
}

/// Parses a `#`-prefixed trailing comment, returning its trimmed content.
fn parse_trailing_comment(input: &str) -> IResult<&str, &str> {
    (char('#'), rest)
        .map(|(_, content): (char, &str)| content.trim())
        .parse(input)
}
