//! Lazy sequence adaptors
//!
//! Every adaptor is a view over a base sequence: building it does no work,
//! and elements are pulled one at a time as the view is consumed. Views are
//! `IntoIterator`, so they compose with the std iterator methods and with
//! each other.
//!
//! ```
//! use aoc_solvers::Sequence;
//!
//! let windows: Vec<String> = "123456789"
//!     .chars()
//!     .skip(1)
//!     .slide(3)
//!     .into_iter()
//!     .take(2)
//!     .map(|w| w.collect())
//!     .collect();
//! assert_eq!(windows, ["234", "345"]);
//! ```

pub mod chunk;
pub mod enumerate;
pub mod fold;
pub mod sequence;
pub mod slide;
pub mod stride;
pub mod window;

pub use chunk::ChunkView;
pub use enumerate::IndexedView;
pub use fold::fold_left_first;
pub use sequence::{Cursor, End, Iter, Position, View};
pub use slide::SlideView;
pub use stride::StrideView;
pub use window::Window;

/// Adaptor methods for every `IntoIterator`
///
/// The base sequence is converted with `into_iter()`; pass `&collection` or
/// `collection.iter()` to keep ownership.
pub trait Sequence: IntoIterator + Sized {
    /// Consecutive non-overlapping groups of `size` elements
    fn chunk(self, size: usize) -> ChunkView<Self::IntoIter> {
        ChunkView::new(self.into_iter(), size)
    }

    /// Every contiguous window of exactly `size` elements
    fn slide(self, size: usize) -> SlideView<Self::IntoIter> {
        SlideView::new(self.into_iter(), size)
    }

    /// Each element paired with its zero-based index
    fn indexed(self) -> IndexedView<Self::IntoIter> {
        IndexedView::new(self.into_iter())
    }

    /// The first element and every `step`-th element after it
    fn stride(self, step: usize) -> StrideView<Self::IntoIter> {
        StrideView::new(self.into_iter(), step)
    }

    /// Left fold seeded with the first element, `None` when empty
    fn fold_left_first<F>(self, f: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        fold::fold_left_first(self, f)
    }
}

impl<S: IntoIterator> Sequence for S {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adaptors_compose() {
        // Every other group of two
        let groups: Vec<String> = "abcdefgh"
            .chars()
            .chunk(2)
            .stride(2)
            .into_iter()
            .map(|w| w.collect())
            .collect();
        assert_eq!(groups, vec!["ab", "ef"]);
    }

    #[test]
    fn test_indexed_windows() {
        let found = "aabcd"
            .chars()
            .slide(3)
            .indexed()
            .into_iter()
            .find(|(_, w)| w.clone().collect::<String>() == "bcd")
            .map(|(i, _)| i);
        assert_eq!(found, Some(2));
    }

    #[test]
    fn test_borrowed_collection_as_base() {
        let numbers = vec![3, 1, 4, 1, 5];
        let sums: Vec<i32> = (&numbers)
            .chunk(2)
            .into_iter()
            .filter_map(|w| w.copied().fold_left_first(|a, b| a + b))
            .collect();
        assert_eq!(sums, vec![4, 5, 5]);
        assert_eq!(numbers.len(), 5);
    }

    #[test]
    fn test_fold_left_first_method() {
        assert_eq!([7, 2, 9].fold_left_first(i32::max), Some(9));
        assert_eq!(Vec::<u8>::new().fold_left_first(u8::min), None);
    }
}
