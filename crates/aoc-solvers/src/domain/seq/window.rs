//! Lazy sub-range of a base sequence
//!
//! Produced by the chunk and slide adaptors. A window is a start position
//! plus a length; its elements are read from the base sequence only when the
//! window itself is iterated.

use std::fmt;
use std::iter::FusedIterator;

use super::sequence::{Cursor, Position};

/// Contiguous sub-range of a base sequence
///
/// The length never reaches past the end of the base sequence, so it is
/// exact.
pub struct Window<I: Iterator> {
    start: Position<I>,
    len: usize,
}

impl<I: Iterator> Window<I> {
    pub(crate) fn new(start: Position<I>, len: usize) -> Self {
        Self { start, len }
    }

    /// Offset of the first element within the base sequence
    pub fn offset(&self) -> usize {
        self.start.offset()
    }
}

impl<I> Iterator for Window<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<I::Item> {
        if self.len == 0 {
            return None;
        }
        let item = self.start.read()?;
        self.start.advance();
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<I> ExactSizeIterator for Window<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I> FusedIterator for Window<I>
where
    I: Iterator,
    I::Item: Clone,
{
}

impl<I> Clone for Window<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            len: self.len,
        }
    }
}

impl<I: Iterator> fmt::Debug for Window<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("offset", &self.start.offset())
            .field("len", &self.len)
            .finish()
    }
}
