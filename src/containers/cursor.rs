//! Cursor-based traversal protocol
//!
//! Containers expose a uniform position space `[head, tail)` where `tail`
//! is a one-past-the-end sentinel that is never dereferenceable. Positions
//! are [`Cursor`] values: an index stamped with the generation of the
//! container at the time the cursor was produced. Structural mutation
//! (insert, remove, resize, clear, copy) bumps the container's generation,
//! so a cursor held across such a mutation is rejected with
//! [`BedrockError::StaleCursor`](crate::error::BedrockError) instead of
//! silently addressing shifted storage. Non-structural assignment keeps
//! cursors valid.
//!
//! Consumers that only need traversal depend on [`Iterable`] and never on a
//! concrete container type.

use std::cmp::Ordering;

use bitflags::bitflags;

use crate::error::Result;

bitflags! {
    /// Capability set a container's traversal interface supports
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct IterMode: u8 {
        /// Forward traversal via `next`
        const FORWARD = 1 << 0;
        /// Reverse traversal via `prev`
        const REVERSE = 1 << 1;
        /// O(1) positioning at arbitrary indices
        const RANDOM_ACCESS = 1 << 2;
        /// In-place assignment and removal
        const MUTABLE = 1 << 3;
    }
}

/// A validated position inside a container
///
/// Cursors are cheap `Copy` values. They are only meaningful for the
/// container that produced them and only until that container's next
/// structural mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    index: usize,
    generation: u64,
}

impl Cursor {
    #[inline]
    pub(crate) fn new(index: usize, generation: u64) -> Self {
        Self { index, generation }
    }

    /// The position's index in the container's traversal order
    #[inline]
    pub fn index(&self) -> usize {
        self.index
    }

    /// The container generation this cursor was stamped with
    #[inline]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Uniform traversal and mutation interface over an ordered container
///
/// Contract for implementors:
/// - `size()` reflects the live logical element count at call time, never
///   backing capacity.
/// - Repeated `next` from `head()` until `tail()` visits every live element
///   exactly once in the container's defined order.
/// - `next(tail())` and `prev(head())` are errors, as is dereferencing
///   `tail()` through `item`.
/// - `remove(pos)` shifts every later position down by one and invalidates
///   all outstanding cursors; the returned cursor addresses the element
///   that followed `pos` (or the new tail) under the new generation.
pub trait Iterable<T> {
    /// The capability set this container supports
    fn mode(&self) -> IterMode;

    /// Live element count
    fn size(&self) -> usize;

    /// Position of the first element (equals `tail()` when empty)
    fn head(&self) -> Cursor;

    /// Position of the final valid element, or `head()` when empty
    fn last(&self) -> Cursor;

    /// One-past-the-end sentinel position
    fn tail(&self) -> Cursor;

    /// Advance a position toward the tail
    fn next(&self, pos: Cursor) -> Result<Cursor>;

    /// Retreat a position toward the head
    fn prev(&self, pos: Cursor) -> Result<Cursor>;

    /// Borrow the element at a position in `[head, tail)`
    fn item(&self, pos: Cursor) -> Result<&T>;

    /// Compare the elements at two positions with the container's
    /// descriptor ordering
    fn item_compare(&self, a: Cursor, b: Cursor) -> Result<Ordering>;

    /// Overwrite the element at a position (release then duplicate);
    /// non-structural, outstanding cursors stay valid
    fn assign(&mut self, pos: Cursor, value: &T) -> Result<()>;

    /// Remove the element at a position, returning a cursor to its
    /// successor under the new generation
    fn remove(&mut self, pos: Cursor) -> Result<Cursor>;
}
