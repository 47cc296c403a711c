//! Stride adaptor
//!
//! Yields the first element and then every element `step` positions after
//! the previous one. A step of 1 yields every element; a step of 0 yields
//! nothing.

use super::sequence::{Cursor, End, Iter, Position, View};

/// View of every `step`-th element of a base sequence
#[derive(Clone, Debug)]
pub struct StrideView<I> {
    base: I,
    step: usize,
}

impl<I> StrideView<I> {
    /// Create a stride view over `base`
    pub fn new(base: I, step: usize) -> Self {
        Self { base, step }
    }
}

/// Cursor over a [`StrideView`]
pub struct StrideCursor<I: Iterator> {
    position: Position<I>,
    step: usize,
}

impl<I: Iterator> StrideCursor<I> {
    fn new(base: I, step: usize) -> Self {
        let mut position = Position::new(base);
        if step == 0 {
            position.finish();
        }
        Self { position, step }
    }
}

impl<I> Cursor for StrideCursor<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn read(&self) -> Option<I::Item> {
        self.position.read()
    }

    fn advance(&mut self) {
        self.position.advance_by(self.step);
    }
}

impl<I: Iterator> PartialEq for StrideCursor<I> {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl<I: Iterator> PartialEq<End> for StrideCursor<I> {
    fn eq(&self, _: &End) -> bool {
        self.position.is_end()
    }
}

impl<I> Clone for StrideCursor<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        Self {
            position: self.position.clone(),
            step: self.step,
        }
    }
}

impl<I: Iterator> std::fmt::Debug for StrideCursor<I> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrideCursor")
            .field("position", &self.position)
            .field("step", &self.step)
            .finish()
    }
}

impl<I> View for StrideView<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Cursor = StrideCursor<I>;

    fn begin(&self) -> StrideCursor<I> {
        StrideCursor::new(self.base.clone(), self.step)
    }
}

impl<I> IntoIterator for StrideView<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;
    type IntoIter = Iter<StrideCursor<I>>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(StrideCursor::new(self.base, self.step))
    }
}

impl<'a, I> IntoIterator for &'a StrideView<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    type Item = I::Item;
    type IntoIter = Iter<StrideCursor<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn test_stride_empty() {
        let strided: Vec<i32> = StrideView::new(Vec::<i32>::new().into_iter(), 2)
            .into_iter()
            .collect();
        assert!(strided.is_empty());
    }

    #[test]
    fn test_stride_one_element() {
        let strided: Vec<i32> = StrideView::new([1].into_iter(), 2).into_iter().collect();
        assert_eq!(strided, vec![1]);
    }

    #[test]
    fn test_stride_zero_step() {
        let strided: Vec<i32> = StrideView::new([1, 2, 3, 4, 5].into_iter(), 0)
            .into_iter()
            .collect();
        assert!(strided.is_empty());
    }

    #[test]
    fn test_stride_unit_step_is_identity() {
        let strided: String = StrideView::new("abcdef".chars(), 1).into_iter().collect();
        assert_eq!(strided, "abcdef");
    }

    #[test]
    fn test_stride_last_element_reached_exactly() {
        let strided: String = StrideView::new("1234567".chars(), 3).into_iter().collect();
        assert_eq!(strided, "147");
    }

    #[test]
    fn test_stride_pulls_only_up_to_last_yielded() {
        let pulled = Cell::new(0);
        let base = (0..100).inspect(|_| pulled.set(pulled.get() + 1));
        let strided: Vec<i32> = StrideView::new(base, 10).into_iter().take(2).collect();
        assert_eq!(strided, vec![0, 10]);
        assert_eq!(pulled.get(), 11);
    }

    #[test]
    fn test_stride_over_infinite_base() {
        let strided: Vec<u32> = StrideView::new(0u32.., 5).into_iter().take(4).collect();
        assert_eq!(strided, vec![0, 5, 10, 15]);
    }
}
