//! First-seeded left fold
//!
//! Reduces a sequence left to right using its first element as the initial
//! accumulator. An empty sequence has no result.

/// Fold `seq` with `f`, seeded with its first element
///
/// `f` is called exactly `len - 1` times; an empty sequence returns `None`
/// without calling it.
pub fn fold_left_first<S, F>(seq: S, f: F) -> Option<S::Item>
where
    S: IntoIterator,
    F: FnMut(S::Item, S::Item) -> S::Item,
{
    let mut iter = seq.into_iter();
    let first = iter.next()?;
    Some(iter.fold(first, f))
}
