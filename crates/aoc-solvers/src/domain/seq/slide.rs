//! Slide adaptor
//!
//! Produces every contiguous window of exactly `size` elements, advancing by
//! one element between windows. A base sequence shorter than `size`, or a
//! size of 0, yields no windows.

use super::sequence::{Cursor, End, Iter, Position, View};
use super::window::Window;

/// View of every `size`-element window of a base sequence
#[derive(Clone, Debug)]
pub struct SlideView<I> {
    base: I,
    size: usize,
}

impl<I> SlideView<I> {
    /// Create a slide view over `base`
    pub fn new(base: I, size: usize) -> Self {
        Self { base, size }
    }
}

/// Cursor over a [`SlideView`]
///
/// `start..end` always spans exactly `size` elements. The last window ends at
/// the end of the base sequence, so the cursor is exhausted only once `end`
/// has been asked to step beyond it.
pub struct SlideCursor<I: Iterator> {
    start: Position<I>,
    end: Position<I>,
    size: usize,
}

impl<I> SlideCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn new(base: I, size: usize) -> Self {
        let start = Position::new(base);
        let mut end = start.clone();
        end.advance_by(size);
        Self { start, end, size }
    }
}

impl<I: Iterator> SlideCursor<I> {
    fn is_exhausted(&self) -> bool {
        self.size == 0 || self.end.steps_past_end() > 0
    }
}

impl<I> Cursor for SlideCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = Window<I>;

    fn read(&self) -> Option<Window<I>> {
        if self.is_exhausted() {
            return None;
        }
        Some(Window::new(self.start.clone(), self.size))
    }

    fn advance(&mut self) {
        self.start.advance();
        self.end.advance();
    }
}

impl<I: Iterator> PartialEq for SlideCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start
    }
}

impl<I: Iterator> PartialEq<End> for SlideCursor<I> {
    fn eq(&self, _: &End) -> bool {
        self.is_exhausted()
    }
}

impl<I> Clone for SlideCursor<I>
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

impl<I: Iterator> std::fmt::Debug for SlideCursor<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlideCursor")
            .field("start", &self.start)
            .field("end", &self.end)
            .field("size", &self.size)
            .finish()
    }
}

impl<I> View for SlideView<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor = SlideCursor<I>;

    fn begin(&self) -> SlideCursor<I> {
        SlideCursor::new(self.base.clone(), self.size)
    }
}

impl<I> IntoIterator for SlideView<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = Window<I>;
    type IntoIter = Iter<SlideCursor<I>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(SlideCursor::new(self.base, self.size))
    }
}

impl<'a, I> IntoIterator for &'a SlideView<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = Window<I>;
    type IntoIter = Iter<SlideCursor<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    fn slides(data: &str, size: usize) -> Vec<String> {
        SlideView::new(data.chars(), size)
            .into_iter()
            .map(|window| window.collect())
            .collect()
    }

    #[test]
    fn test_slide_last_included() {
        assert_eq!(slides("12345", 2), vec!["12", "23", "34", "45"]);
    }

    #[test]
    fn test_slide_equal_size() {
        assert_eq!(slides("1", 1), vec!["1"]);
        assert_eq!(slides("abc", 3), vec!["abc"]);
    }

    #[test]
    fn test_slide_shorter_than_window() {
        assert!(slides("12", 3).is_empty());
    }

    #[test]
    fn test_slide_empty_data() {
        assert!(slides("", 2).is_empty());
    }

    #[test]
    fn test_slide_zero_size_yields_nothing() {
        assert!(slides("123", 0).is_empty());
    }

    #[test]
    fn test_slide_windows_have_exact_size() {
        let view = SlideView::new([1, 2, 3, 4, 5, 6].iter(), 4);
        let lens: Vec<usize> = view.iter().map(|w| w.len()).collect();
        assert_eq!(lens, vec![4, 4, 4]);
    }

    #[test]
    fn test_slide_cursor_comparisons() {
        let view = SlideView::new("abc".chars(), 2);
        let mut a = view.begin();
        let b = view.begin();
        assert_eq!(a, b);
        assert!(a != End);
        a.advance();
        assert_ne!(a, b);
        assert!(a != End);
        a.advance();
        assert!(a == End);
        a.advance();
        assert!(a == End);
    }
    #[test]
    fn test_slide_pulls_base_only_when_read() {
        let pulled = Cell::new(0);
        let base = (0..100).inspect(|_| pulled.set(pulled.get() + 1));
        let mut windows = SlideView::new(base, 4).into_iter();
        assert_eq!(pulled.get(), 0);

        let first: Vec<i32> = windows.next().unwrap().collect();
        assert_eq!(first, vec![0, 1, 2, 3]);
        assert!(pulled.get() < 20);
    }
}
