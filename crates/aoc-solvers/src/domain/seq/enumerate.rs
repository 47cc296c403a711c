//! Enumerate adaptor
//!
//! Pairs each element of a base sequence with its zero-based position.
//! Works over single-pass bases; the view is multi-pass when the base is
//! `Clone`.

use super::sequence::{Cursor, End, Iter, Position, View};

/// View pairing each element with its index
#[derive(Clone, Debug)]
pub struct IndexedView<I> {
    base: I,
}

impl<I> IndexedView<I> {
    /// Create an indexed view over `base`
    pub fn new(base: I) -> Self {
        Self { base }
    }
}

/// Cursor over an [`IndexedView`]
///
/// The index is the number of base elements stepped over.
pub struct IndexedCursor<I: Iterator> {
    position: Position<I>,
}

impl<I: Iterator> IndexedCursor<I> {
    fn new(base: I) -> Self {
        Self {
            position: Position::new(base),
        }
    }
}

impl<I> Cursor for IndexedCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (usize, I::Item);

    fn read(&self) -> Option<(usize, I::Item)> {
        let item = self.position.read()?;
        Some((self.position.offset(), item))
    }

    fn advance(&mut self) {
        self.position.advance();
    }
}

impl<I: Iterator> PartialEq for IndexedCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<I: Iterator> PartialEq<End> for IndexedCursor<I> {
    fn eq(&self, _: &End) -> bool {
        self.position.is_end()
    }
}

impl<I> Clone for IndexedCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            position: self.position.clone(),
        }
    }
}

impl<I: Iterator> std::fmt::Debug for IndexedCursor<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IndexedCursor")
            .field("position", &self.position)
            .finish()
    }
}

impl<I> View for IndexedView<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor = IndexedCursor<I>;

    fn begin(&self) -> IndexedCursor<I> {
        IndexedCursor::new(self.base.clone())
    }
}

impl<I> IntoIterator for IndexedView<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = (usize, I::Item);
    type IntoIter = Iter<IndexedCursor<I>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(IndexedCursor::new(self.base))
    }
}

impl<'a, I> IntoIterator for &'a IndexedView<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = (usize, I::Item);
    type IntoIter = Iter<IndexedCursor<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
