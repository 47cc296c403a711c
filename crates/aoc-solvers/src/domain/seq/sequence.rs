//! Sequence abstraction shared by the adaptors
//!
//! A view pairs a base sequence (any iterator) with adaptor parameters and
//! hands out cursors. A cursor is exhausted exactly when it compares equal to
//! [`End`]; comparing two cursors is a separate operation on their positions
//! and only makes sense for cursors derived from the same view.
//!
//! Multi-pass traversal is available when the base iterator is `Clone`:
//! every [`View::begin`] call starts again from a copy of the base. A base
//! that is not `Clone` is single-pass and can only be consumed once.

use std::cell::{RefCell, RefMut};
use std::fmt;
use std::iter::FusedIterator;

/// End-of-sequence marker
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct End;

/// Traversal state over a view
///
/// `cursor == End` is the only exhaustion test.
pub trait Cursor: PartialEq<End> {
    /// Element type produced at each position
    type Item;

    /// Element under the cursor, `None` once the cursor equals [`End`]
    fn read(&self) -> Option<Self::Item>;

    /// Step past the current element. No-op at the end.
    fn advance(&mut self);
}

/// A lazy, parameterized transformation over a base sequence
pub trait View {
    /// Cursor type handed out by [`View::begin`]
    type Cursor: Cursor;

    /// Cursor at the first element
    fn begin(&self) -> Self::Cursor;

    /// End marker of this view
    fn end(&self) -> End {
        End
    }

    /// Iterate the view from the start without consuming it
    fn iter(&self) -> Iter<Self::Cursor> {
        Iter::new(self.begin())
    }
}

// =============================================================================
// Position over a base iterator
// =============================================================================

/// Element under a position, once it has been pulled from the base
enum Head<T> {
    Unread,
    Item(T),
    End,
}

/// Base iterator plus the steps not yet applied to it
struct State<I: Iterator> {
    rest: I,
    head: Head<I::Item>,
    /// Steps requested but not yet taken
    pending: usize,
    /// Steps taken
    offset: usize,
    /// Steps requested past the end of the base
    past_end: usize,
}

impl<I: Iterator> State<I> {
    /// Apply pending steps and pull the element under the position
    fn settle(&mut self) {
        while self.pending > 0 {
            match self.head {
                Head::End => {
                    self.past_end += self.pending;
                    self.pending = 0;
                }
                Head::Item(_) => {
                    self.head = Head::Unread;
                    self.offset += 1;
                    self.pending -= 1;
                }
                Head::Unread => match self.rest.next() {
                    Some(_) => {
                        self.offset += 1;
                        self.pending -= 1;
                    }
                    None => self.head = Head::End,
                },
            }
        }
        if let Head::Unread = self.head {
            self.head = match self.rest.next() {
                Some(item) => Head::Item(item),
                None => Head::End,
            };
        }
    }
}

/// Cursor over a base iterator
///
/// Advancing only records the step. The base is pulled when the position is
/// read, tested against [`End`] or asked for its offset, and then only as far
/// as the element under the position. `offset` counts the base elements
/// stepped over, clamped to the base length.
pub struct Position<I: Iterator> {
    state: RefCell<State<I>>,
}

impl<I: Iterator> Position<I> {
    /// Create a position at the start of `base` without pulling from it
    pub fn new(base: I) -> Self {
        Self {
            state: RefCell::new(State {
                rest: base,
                head: Head::Unread,
                pending: 0,
                offset: 0,
                past_end: 0,
            }),
        }
    }

    fn settled(&self) -> RefMut<'_, State<I>> {
        let mut state = self.state.borrow_mut();
        state.settle();
        state
    }

    /// Number of base elements stepped over so far
    pub fn offset(&self) -> usize {
        self.settled().offset
    }

    /// Whether the base sequence is exhausted at this position
    pub fn is_end(&self) -> bool {
        matches!(self.settled().head, Head::End)
    }

    /// Number of requested steps that fell beyond the end of the base
    pub fn steps_past_end(&self) -> usize {
        self.settled().past_end
    }

    /// Step `n` elements forward; the base is pulled on the next read
    pub fn advance_by(&mut self, n: usize) {
        self.state.get_mut().pending += n;
    }

    /// Jump to the end without pulling the remaining base elements
    pub fn finish(&mut self) {
        let state = self.state.get_mut();
        state.head = Head::End;
        state.pending = 0;
    }
}

impl<I> Clone for Position<I>
where
    I: Iterator + Clone,
    I::Item: Clone,
{
    fn clone(&self) -> Self {
        let state = self.state.borrow();
        let head = match &state.head {
            Head::Unread => Head::Unread,
            Head::Item(item) => Head::Item(item.clone()),
            Head::End => Head::End,
        };
        Self {
            state: RefCell::new(State {
                rest: state.rest.clone(),
                head,
                pending: state.pending,
                offset: state.offset,
                past_end: state.past_end,
            }),
        }
    }
}

impl<I: Iterator> fmt::Debug for Position<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("Position")
            .field("offset", &state.offset)
            .field("pending", &state.pending)
            .field("at_end", &matches!(state.head, Head::End))
            .finish()
    }
}

impl<I: Iterator> PartialEq for Position<I> {
    fn eq(&self, other: &Self) -> bool {
        self.offset() == other.offset()
    }
}

impl<I: Iterator> PartialEq<End> for Position<I> {
    fn eq(&self, _: &End) -> bool {
        self.is_end()
    }
}

impl<I> Cursor for Position<I>
where
    I: Iterator,
    I::Item: Clone,
{
    type Item = I::Item;

    fn read(&self) -> Option<I::Item> {
        match &self.settled().head {
            Head::Item(item) => Some(item.clone()),
            Head::Unread | Head::End => None,
        }
    }

    fn advance(&mut self) {
        self.advance_by(1);
    }
}

// =============================================================================
// Iterator over a cursor
// =============================================================================

/// Standard iterator driving a cursor until it reaches [`End`]
#[derive(Clone, Debug)]
pub struct Iter<C> {
    cursor: C,
}

impl<C: Cursor> Iter<C> {
    /// Create an iterator starting at `cursor`
    pub fn new(cursor: C) -> Self {
        Self { cursor }
    }
}

impl<C: Cursor> Iterator for Iter<C> {
    type Item = C::Item;

    fn next(&mut self) -> Option<C::Item> {
        if self.cursor == End {
            return None;
        }
        let item = self.cursor.read();
        self.cursor.advance();
        item
    }
}

impl<C: Cursor> FusedIterator for Iter<C> {}
