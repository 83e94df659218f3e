//! Composite constructors: ordered sequences of sub-patterns.
//!
//! All forms share the same semantics: every sub-pattern must match in
//! order, each starting where the previous one ended, and the first
//! failure fails the whole sequence with no partial result and no
//! backtracking into already-committed elements.
//!
//! [`seq2`]..[`seq4`] keep each sub-pattern's value type in a tuple;
//! [`seq`] is the arbitrary-arity fallback for homogeneous sequences of
//! any length.

use crate::pattern::Pattern;

/// Match `patterns` in order, collecting their values.
///
/// The arbitrary-arity form: all sub-patterns share one value type and
/// the result is a `Vec` in argument order. An empty `patterns` list
/// matches trivially without consuming input.
pub fn seq<T: 'static>(patterns: Vec<Pattern<T>>) -> Pattern<Vec<T>> {
    Pattern::new(move |input, start| {
        let mut values = Vec::with_capacity(patterns.len());
        let mut pos = start;

        for pattern in &patterns {
            let (value, next) = pattern.exec_at(input, pos)?;
            values.push(value);
            pos = next;
        }

        Some((values, pos))
    })
}

/// Match two patterns in order, pairing their values.
pub fn seq2<A, B>(a: Pattern<A>, b: Pattern<B>) -> Pattern<(A, B)>
where
    A: 'static,
    B: 'static,
{
    Pattern::new(move |input, pos| {
        let (va, pos) = a.exec_at(input, pos)?;
        let (vb, pos) = b.exec_at(input, pos)?;
        Some(((va, vb), pos))
    })
}

/// Match three patterns in order.
pub fn seq3<A, B, C>(a: Pattern<A>, b: Pattern<B>, c: Pattern<C>) -> Pattern<(A, B, C)>
where
    A: 'static,
    B: 'static,
    C: 'static,
{
    Pattern::new(move |input, pos| {
        let (va, pos) = a.exec_at(input, pos)?;
        let (vb, pos) = b.exec_at(input, pos)?;
        let (vc, pos) = c.exec_at(input, pos)?;
        Some(((va, vb, vc), pos))
    })
}

/// Match four patterns in order.
pub fn seq4<A, B, C, D>(
    a: Pattern<A>,
    b: Pattern<B>,
    c: Pattern<C>,
    d: Pattern<D>,
) -> Pattern<(A, B, C, D)>
where
    A: 'static,
    B: 'static,
    C: 'static,
    D: 'static,
{
    Pattern::new(move |input, pos| {
        let (va, pos) = a.exec_at(input, pos)?;
        let (vb, pos) = b.exec_at(input, pos)?;
        let (vc, pos) = c.exec_at(input, pos)?;
        let (vd, pos) = d.exec_at(input, pos)?;
        Some(((va, vb, vc, vd), pos))
    })
}
