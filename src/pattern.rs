//! Matcher core for LL(*) recursive descent parsing.
//!
//! A [`Pattern<T>`] wraps a matching function
//! `(input, position) -> (value, new position) | no match` and exposes
//! combinators that transform or sequence such functions without executing
//! them. Construction is lazy: nothing touches the input until
//! [`Pattern::exec`] or [`Pattern::exec_at`] is called on the root of a
//! grammar.
//!
//! ## Design
//!
//! - Matching failure is `None`, an ordinary control-flow outcome. No
//!   diagnostics (position reached, expected-vs-found) exist at this layer.
//! - Patterns are immutable after construction and hold no mutable state.
//!   The only state is the `(input, position)` pair threaded explicitly
//!   through each call, so every `exec` is independent and reentrant, and
//!   patterns can be shared across threads without coordination.
//! - The sequence-shaped helpers ([`take`](Pattern::take),
//!   [`slice`](Pattern::slice), [`fold`](Pattern::fold)) exist only on
//!   patterns whose value type is already a `Vec`; a scalar pattern does
//!   not have them.
//! - There is no alternation combinator and no backtracking across
//!   committed sequence elements. Grammars needing choice must build it
//!   on top of these primitives.

use std::collections::HashMap;
use std::hash::Hash;
use std::ops::{Bound, RangeBounds};
use std::sync::Arc;

/// The matching function wrapped by every pattern.
///
/// On success returns the produced value and the offset of the first
/// unconsumed character, which never precedes the start offset passed in.
type MatchFn<T> = dyn Fn(&str, usize) -> Option<(T, usize)> + Send + Sync;

/// An immutable matching rule producing a value of type `T`.
///
/// Composite patterns hold cheap handles to their sub-patterns, so cloning
/// a pattern never copies the underlying grammar.
pub struct Pattern<T> {
    matcher: Arc<MatchFn<T>>,
}

impl<T> Clone for Pattern<T> {
    fn clone(&self) -> Self {
        Pattern {
            matcher: Arc::clone(&self.matcher),
        }
    }
}

impl<T: 'static> Pattern<T> {
    /// Wrap a raw matching function.
    ///
    /// The function must be pure: invoking it twice with the same
    /// `(input, position)` must yield the same result, and a successful
    /// match must report an end position `>=` the start position.
    pub fn new(
        matcher: impl Fn(&str, usize) -> Option<(T, usize)> + Send + Sync + 'static,
    ) -> Self {
        Pattern {
            matcher: Arc::new(matcher),
        }
    }

    /// Match at the given offset, returning the value and the offset of
    /// the first unconsumed character.
    ///
    /// This is the raw, position-aware entry point: a success here says
    /// nothing about whether the rest of the input was consumed. Use
    /// [`exec`](Pattern::exec) to require full consumption.
    pub fn exec_at(&self, input: &str, pos: usize) -> Option<(T, usize)> {
        (self.matcher)(input, pos)
    }

    /// Match the entire input, or fail.
    ///
    /// Runs [`exec_at`](Pattern::exec_at) at offset 0 and succeeds only
    /// when the match consumes the whole string. A prefix match that stops
    /// short of `input.len()` is a failure here.
    pub fn exec(&self, input: &str) -> Option<T> {
        match self.exec_at(input, 0) {
            Some((value, end)) if end == input.len() => Some(value),
            _ => None,
        }
    }

    /// Transform the matched value, keeping the match and its position.
    ///
    /// Purely structural: the returned pattern matches exactly where
    /// `self` matches and never re-examines the input.
    pub fn map<U, F>(&self, transform: F) -> Pattern<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let inner = self.clone();
        Pattern::new(move |input, pos| {
            inner
                .exec_at(input, pos)
                .map(|(value, end)| (transform(value), end))
        })
    }

    /// Greedy, non-backtracking repetition.
    ///
    /// Applies `self` repeatedly, each attempt starting where the previous
    /// match ended, until it fails; succeeds iff at least `min` repetitions
    /// matched. The commitment is final: once the loop stops there is no
    /// backtracking to satisfy an outer context.
    ///
    /// A sub-pattern that can succeed without consuming input (an empty
    /// `txt`, a regex matching the empty string) never fails, so the loop
    /// never terminates. Guard such grammars at construction time; the
    /// engine deliberately adds no progress check.
    pub fn rep(&self, min: usize) -> Pattern<Vec<T>> {
        let item = self.clone();
        Pattern::new(move |input, start| {
            let mut values = Vec::new();
            let mut pos = start;

            while let Some((value, next)) = item.exec_at(input, pos) {
                values.push(value);
                pos = next;
            }

            if values.len() >= min {
                Some((values, pos))
            } else {
                None
            }
        })
    }
}

impl<T: 'static> Pattern<Vec<T>> {
    /// Extract the element at `index` from a sequence-valued match.
    ///
    /// Sugar for [`map`](Pattern::map) over patterns built with
    /// [`seq`](crate::sequence::seq) or [`rep`](Pattern::rep).
    ///
    /// # Panics
    ///
    /// Panics during matching if the matched sequence is shorter than
    /// `index + 1`. Staying in range is the grammar author's contract.
    pub fn take(&self, index: usize) -> Pattern<T> {
        self.map(move |mut items| items.swap_remove(index))
    }

    /// Keep a contiguous subrange of a sequence-valued match.
    ///
    /// An omitted upper bound means end-of-sequence; bounds beyond the
    /// sequence length are clamped.
    pub fn slice<R>(&self, range: R) -> Pattern<Vec<T>>
    where
        R: RangeBounds<usize> + Send + Sync + 'static,
    {
        self.map(move |mut items| {
            let end = match range.end_bound() {
                Bound::Included(&n) => n + 1,
                Bound::Excluded(&n) => n,
                Bound::Unbounded => items.len(),
            };
            let end = end.min(items.len());
            let start = match range.start_bound() {
                Bound::Included(&n) => n,
                Bound::Excluded(&n) => n + 1,
                Bound::Unbounded => 0,
            };
            let start = start.min(end);

            items.truncate(end);
            items.split_off(start)
        })
    }
}

impl<T> Pattern<Vec<Vec<T>>>
where
    T: Clone + Eq + Hash + 'static,
{
    /// Build a mapping from a matched sequence of rows, keeping the last
    /// value on key collisions.
    ///
    /// Each row contributes one entry: the element at `key` maps to the
    /// element at `value`. `[["A", "1"], ["B", "2"], ["A", "3"]]` with
    /// `fold(0, 1)` becomes `{A: 3, B: 2}`.
    ///
    /// # Panics
    ///
    /// Panics during matching if a row is shorter than `key + 1` or
    /// `value + 1`, as with [`take`](Pattern::take).
    pub fn fold(&self, key: usize, value: usize) -> Pattern<HashMap<T, T>> {
        self.fold_with(key, value, |_existing, new| new)
    }

    /// Like [`fold`](Pattern::fold), but a repeated key resolves through
    /// `merge(existing, new)` instead of being overwritten.
    ///
    /// The first occurrence of a key is inserted as-is; `merge` runs only
    /// on collisions.
    pub fn fold_with<F>(&self, key: usize, value: usize, merge: F) -> Pattern<HashMap<T, T>>
    where
        F: Fn(T, T) -> T + Send + Sync + 'static,
    {
        self.map(move |rows| {
            let mut mapping = HashMap::new();

            for row in rows {
                let k = row[key].clone();
                let v = row[value].clone();
                let v = match mapping.remove(&k) {
                    Some(existing) => merge(existing, v),
                    None => v,
                };
                mapping.insert(k, v);
            }

            mapping
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{rgx, txt};
    use crate::sequence::seq;

    #[test]
    fn test_exec_requires_full_consumption() {
        let ab = txt("ab");
        assert_eq!(ab.exec("ab"), Some("ab".to_string()));
        assert_eq!(ab.exec("abc"), None);
        assert_eq!(ab.exec_at("abc", 0), Some(("ab".to_string(), 2)));
    }

    #[test]
    fn test_exec_at_reports_end_position() {
        let digits = rgx("[0-9]+").unwrap();
        assert_eq!(digits.exec_at("42x", 0), Some(("42".to_string(), 2)));
        assert_eq!(digits.exec_at("x42", 1), Some(("42".to_string(), 3)));
    }

    #[test]
    fn test_map_transforms_value_only() {
        let number = rgx("[0-9]+").unwrap().map(|s| s.parse::<i64>().unwrap());
        assert_eq!(number.exec("42"), Some(42));
        assert_eq!(number.exec_at("42x", 0), Some((42, 2)));
    }

    #[test]
    fn test_map_propagates_no_match() {
        let number = rgx("[0-9]+").unwrap().map(|s| s.parse::<i64>().unwrap());
        assert_eq!(number.exec("x"), None);
    }

    #[test]
    fn test_rep_is_greedy_and_maximal() {
        let a = txt("a");
        assert_eq!(
            a.rep(0).exec_at("aaab", 0),
            Some((vec!["a".to_string(); 3], 3))
        );
    }

    #[test]
    fn test_rep_respects_min() {
        let a = txt("a");
        assert_eq!(a.rep(2).exec("a"), None);
        assert_eq!(a.rep(2).exec("aa"), Some(vec!["a".to_string(); 2]));
    }

    #[test]
    fn test_rep_zero_matches_succeeds_without_consuming() {
        let a = txt("a");
        assert_eq!(a.rep(0).exec(""), Some(vec![]));
        assert_eq!(a.rep(0).exec_at("bbb", 1), Some((vec![], 1)));
    }

    #[test]
    fn test_take_indexes_tuple_result() {
        let pair = seq(vec![txt("a"), txt("b")]);
        assert_eq!(pair.take(1).exec("ab"), Some("b".to_string()));
        assert_eq!(pair.take(1).exec_at("abc", 0), Some(("b".to_string(), 2)));
    }

    #[test]
    fn test_slice_keeps_subrange() {
        let letters = seq(vec![txt("a"), txt("b"), txt("c")]);
        assert_eq!(
            letters.slice(1..3).exec("abc"),
            Some(vec!["b".to_string(), "c".to_string()])
        );
        assert_eq!(
            letters.slice(1..).exec("abc"),
            Some(vec!["b".to_string(), "c".to_string()])
        );
        assert_eq!(letters.slice(..1).exec("abc"), Some(vec!["a".to_string()]));
    }

    #[test]
    fn test_slice_clamps_out_of_range_bounds() {
        let letters = seq(vec![txt("a"), txt("b")]);
        assert_eq!(
            letters.slice(0..10).exec("ab"),
            Some(vec!["a".to_string(), "b".to_string()])
        );
        assert_eq!(letters.slice(5..).exec("ab"), Some(vec![]));
    }

    fn pairs() -> Pattern<Vec<Vec<String>>> {
        // row: letter '=' digit ';'
        let row = seq(vec![
            rgx("[A-Z]").unwrap(),
            txt("="),
            rgx("[0-9]+").unwrap(),
            txt(";"),
        ]);
        row.rep(1)
    }

    #[test]
    fn test_fold_defaults_to_last_write_wins() {
        let mapping = pairs().fold(0, 2).exec("A=1;B=2;A=3;").unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping["A"], "3");
        assert_eq!(mapping["B"], "2");
    }

    #[test]
    fn test_fold_with_merges_collisions() {
        let mapping = pairs()
            .fold_with(0, 2, |a, b| format!("{}{}", a, b))
            .exec("A=1;B=2;A=3;")
            .unwrap();
        assert_eq!(mapping["A"], "13");
        assert_eq!(mapping["B"], "2");
    }

    #[test]
    fn test_fold_propagates_no_match() {
        let mapping = pairs().fold(0, 2);
        assert_eq!(mapping.exec("not pairs"), None);
    }

    #[test]
    fn test_patterns_are_reusable_and_pure() {
        let word = rgx("[a-z]+").unwrap();
        let first = word.exec_at("hello world", 0);
        let second = word.exec_at("hello world", 0);
        assert_eq!(first, second);
        assert_eq!(first, Some(("hello".to_string(), 5)));
    }
}
