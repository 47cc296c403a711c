//! Chunk adaptor
//!
//! Splits a base sequence into consecutive, non-overlapping windows of a
//! fixed size. The final window is shorter when the base length is not a
//! multiple of the size. A size of 0 yields no windows.

use super::sequence::{Cursor, End, Iter, Position, View};
use super::window::Window;

/// View of a base sequence split into groups of `size` elements
#[derive(Clone, Debug)]
pub struct ChunkView<I> {
    base: I,
    size: usize,
}

impl<I> ChunkView<I> {
    /// Create a chunk view over `base`
    pub fn new(base: I, size: usize) -> Self {
        Self { base, size }
    }
}

/// Cursor over a [`ChunkView`]
///
/// `start..end` is the current window; `end` sits `size` elements after
/// `start`, clamped to the end of the base sequence.
pub struct ChunkCursor<I: Iterator> {
    start: Position<I>,
    end: Position<I>,
    size: usize,
}

impl<I> ChunkCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn new(base: I, size: usize) -> Self {
        let mut start = Position::new(base);
        if size == 0 {
            start.finish();
        }
        let mut end = start.clone();
        end.advance_by(size);
        Self { start, end, size }
    }
}

impl<I> Cursor for ChunkCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = Window<I>;

    fn read(&self) -> Option<Window<I>> {
        if self.start.is_end() {
            return None;
        }
        let len = self.end.offset() - self.start.offset();
        Some(Window::new(self.start.clone(), len))
    }

    fn advance(&mut self) {
        // start + size is exactly where the current window ends
        self.start = self.end.clone();
        self.end.advance_by(self.size);
    }
}

impl<I: Iterator> PartialEq for ChunkCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
    }
}

impl<I: Iterator> PartialEq<End> for ChunkCursor<I> {
    fn eq(&self, _: &End) -> bool {
        self.start.is_end()
    }
}

impl<I> Clone for ChunkCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            start: self.start.clone(),
            end: self.end.clone(),
            size: self.size,
        }
    }
}

impl<I: Iterator> std::fmt::Debug for ChunkCursor<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChunkCursor")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("size", &self.size)
            .finish()
    }
}

impl<I> View for ChunkView<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor = ChunkCursor<I>;

    fn begin(&self) -> ChunkCursor<I> {
        ChunkCursor::new(self.base.clone(), self.size)
    }
}

impl<I> IntoIterator for ChunkView<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = Window<I>;
    type IntoIter = Iter<ChunkCursor<I>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(ChunkCursor::new(self.base, self.size))
    }
}

impl<'a, I> IntoIterator for &'a ChunkView<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = Window<I>;
    type IntoIter = Iter<ChunkCursor<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn chunks(data: &str, size: usize) -> Vec<String> {
        ChunkView::new(data.chars(), size)
            .into_iter()
            .map(|window| window.collect())
            .collect()
    }

    #[test]
    fn test_chunk_even_split() {
        assert_eq!(chunks("123456", 2), vec!["12", "34", "56"]);
    }

    #[test]
    fn test_chunk_equal_size() {
        assert_eq!(chunks("123", 3), vec!["123"]);
    }

    #[test]
    fn test_chunk_larger_than_input() {
        assert_eq!(chunks("12345", 4), vec!["1234", "5"]);
        assert_eq!(chunks("12", 5), vec!["12"]);
    }

    #[test]
    fn test_chunk_empty_data() {
        assert!(chunks("", 2).is_empty());
    }

    #[test]
    fn test_chunk_zero_size_yields_nothing() {
        assert!(chunks("12345", 0).is_empty());
    }

    #[test]
    fn test_chunk_view_is_multi_pass() {
        let view = ChunkView::new([1, 2, 3, 4, 5].iter(), 2);
        let first: Vec<usize> = view.iter().map(|w| w.len()).collect();
        let second: Vec<usize> = (&view).into_iter().map(|w| w.len()).collect();
        assert_eq!(first, vec![2, 2, 1]);
        assert_eq!(first, second);
    }

    #[test]
    fn test_chunk_window_offsets() {
        let offsets: Vec<usize> = ChunkView::new("abcdefg".chars(), 3)
            .into_iter()
            .map(|w| w.offset())
            .collect();
        assert_eq!(offsets, vec![0, 3, 6]);
    }

    #[test]
    fn test_chunk_cursor_comparisons() {
        let view = ChunkView::new("abcd".chars(), 2);
        let mut a = view.begin();
        let b = view.begin();
        assert_eq!(a, b);
        a.advance();
        assert_ne!(a, b);
        assert!(a != view.end());
        a.advance();
        assert!(a == view.end());

        // Advancing past the end stays at the end
        a.advance();
        assert!(a == End);
        assert!(a.read().is_none());
    }
    #[test]
    fn test_chunk_pulls_base_only_when_read() {
        let pulled = Cell::new(0);
        let base = (0..100).inspect(|_| pulled.set(pulled.get() + 1));
        let mut groups = ChunkView::new(base, 3).into_iter();
        assert_eq!(pulled.get(), 0);

        let first: Vec<i32> = groups.next().unwrap().collect();
        assert_eq!(first, vec![0, 1, 2]);
        assert!(pulled.get() < 10);
    }
}
