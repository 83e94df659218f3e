//! Leaf matchers: regular-expression tokens and literal text.
//!
//! These are the only patterns that examine the input directly; everything
//! else in the crate composes them. Both match at the exact offset they
//! are given — there is no leading skip and no searching ahead.

use regex::Regex;

use crate::error::PatternError;
use crate::pattern::Pattern;

/// Build a pattern from a regular expression.
///
/// The expression is compiled once, up front; the returned pattern matches
/// iff the regex matches starting exactly at the current offset. On
/// success the value is the matched substring and the position advances
/// past it. An occurrence further along the input is a no-match:
/// `rgx("b")` at offset 0 of `"ab"` fails even though `b` occurs at 1.
///
/// An offset that is out of bounds or not a char boundary is a plain
/// no-match.
pub fn rgx(expression: &str) -> Result<Pattern<String>, PatternError> {
    let regex = Regex::new(expression)
        .map_err(|e| PatternError::InvalidExpression(e.to_string()))?;

    Ok(Pattern::new(move |input, pos| {
        let tail = input.get(pos..)?;
        let found = regex.find(tail)?;
        if found.start() != 0 {
            return None;
        }
        Some((found.as_str().to_string(), pos + found.end()))
    }))
}

/// Build a pattern from a literal string.
///
/// Matches iff the input at the current offset starts with `literal`;
/// the value is the literal and the position advances by its length.
///
/// The empty literal matches trivially at every in-bounds position
/// without consuming anything, which makes it a zero-width hazard under
/// [`rep`](Pattern::rep).
pub fn txt(literal: &str) -> Pattern<String> {
    let literal = literal.to_string();
    Pattern::new(move |input, pos| {
        let end = pos + literal.len();
        match input.get(pos..end) {
            Some(window) if window == literal => Some((literal.clone(), end)),
            _ => None,
        }
    })
}
