//! # llrdp
//!
//! A minimal combinator library for building LL(*) recursive descent
//! parsers over strings.
//!
//! Grammars are trees of [`Pattern`] values built bottom-up: leaves first
//! ([`rgx`], [`txt`]), then composites ([`seq`], [`Pattern::rep`]), then
//! shape adjustments ([`Pattern::map`], [`Pattern::take`],
//! [`Pattern::slice`], [`Pattern::fold`]). Construction never runs
//! matching; at use time, [`Pattern::exec`] on the root drives recursive
//! evaluation down the tree.
//!
//! ```ignore
//! use llrdp::{rgx, seq, txt};
//!
//! // letter '=' number ';', repeated, folded into a map
//! let entry = seq(vec![
//!     rgx("[a-z]+")?,
//!     txt("="),
//!     rgx("[0-9]+")?,
//!     txt(";"),
//! ]);
//! let config = entry.rep(1).fold(0, 2);
//!
//! let settings = config.exec("width=80;height=24;").unwrap();
//! assert_eq!(settings["width"], "80");
//! ```
//!
//! Matching failure is a bare `None`; there are no diagnostics, no
//! backtracking across committed sequence elements, and no alternation
//! combinator — choice between branches must be built on top of this
//! layer. Patterns are immutable and `Send + Sync`, so a grammar built
//! once can serve any number of threads.

pub mod error;
pub mod pattern;
pub mod primitives;
pub mod sequence;

pub use error::PatternError;
pub use pattern::Pattern;
pub use primitives::{rgx, txt};
pub use sequence::{seq, seq2, seq3, seq4};
