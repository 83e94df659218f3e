//! Error type for pattern construction.
//!
//! Matching itself never errors: a failed match is an ordinary `None`
//! returned from [`Pattern::exec_at`](crate::pattern::Pattern::exec_at).
//! The only fallible step in the whole crate is compiling a regular
//! expression in [`rgx`](crate::primitives::rgx).

use std::fmt;

/// Error raised while building a pattern from user-supplied syntax.
#[derive(Debug, Clone, PartialEq)]
pub enum PatternError {
    /// Invalid regular expression
    InvalidExpression(String),
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::InvalidExpression(msg) => {
                write!(f, "Invalid regular expression: {}", msg)
            }
        }
    }
}

impl std::error::Error for PatternError {}
