//! Growable contiguous vector bound to an element descriptor
//!
//! ```text
//! vector: |-----|--------------------------------------------|------|
//!       head                                               last    tail (never dereferenced)
//! ```
//!
//! `Vector<T>` owns a contiguous buffer of `maxn` typed slots and grows it
//! with realloc, which can often extend in place without copying. Capacity
//! always advances in multiples of the `grow` increment and is hard-capped
//! at [`VECTOR_MAXN_LIMIT`]; a refused growth leaves the vector untouched.
//!
//! Performance profile:
//! - insert/remove at the tail: fast (no shift)
//! - insert/remove at the head or middle: O(size - index) single move
//! - traversal and random access: fast
//!
//! The vector is not internally synchronized. Concurrent mutation of one
//! instance must be serialized by the caller, typically with a
//! [`Lock`](crate::sync::Lock) wrapped around the sequence of operations
//! that must appear atomic.

use std::alloc::{self, Layout};
use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::containers::cursor::{Cursor, IterMode, Iterable};
use crate::element::{Descriptor, Element};
use crate::error::{BedrockError, Result, check_bounds, check_range};

/// Default grow increment used when the caller passes zero
pub const VECTOR_DEFAULT_GROW: usize = 64;

/// Hard upper bound on vector capacity, preventing runaway growth
pub const VECTOR_MAXN_LIMIT: usize = 1 << 16;

/// Growable, contiguous, random-access sequence over descriptor-driven
/// elements
///
/// # Examples
///
/// ```rust
/// use bedrock::{Descriptor, Vector};
///
/// let mut vec = Vector::with_grow(4, Descriptor::str(true)).unwrap();
/// vec.insert_tail(&"a".to_string()).unwrap();
/// vec.insert_tail(&"b".to_string()).unwrap();
/// assert_eq!(vec.len(), 2);
/// assert_eq!(vec.head().unwrap(), "a");
/// ```
pub struct Vector<T: Element> {
    ptr: NonNull<T>,
    size: usize,
    maxn: usize,
    grow: usize,
    generation: u64,
    descriptor: Descriptor<T>,
}

impl<T: Element> Vector<T> {
    /// Create a vector with the default grow increment
    pub fn new(descriptor: Descriptor<T>) -> Result<Self> {
        Self::with_grow(VECTOR_DEFAULT_GROW, descriptor)
    }

    /// Create a vector whose capacity advances in `grow`-slot increments
    ///
    /// A zero `grow` falls back to [`VECTOR_DEFAULT_GROW`]. Fails if the
    /// element type is zero-sized or `grow` exceeds [`VECTOR_MAXN_LIMIT`].
    pub fn with_grow(grow: usize, descriptor: Descriptor<T>) -> Result<Self> {
        if mem::size_of::<T>() == 0 {
            return Err(BedrockError::configuration(
                "zero-sized element types are not supported",
            ));
        }
        let grow = if grow == 0 { VECTOR_DEFAULT_GROW } else { grow };
        if grow > VECTOR_MAXN_LIMIT {
            return Err(BedrockError::configuration(format!(
                "grow {} exceeds the capacity limit {}",
                grow, VECTOR_MAXN_LIMIT
            )));
        }

        let layout = Layout::array::<T>(grow)
            .map_err(|_| BedrockError::out_of_memory(grow * mem::size_of::<T>()))?;
        let raw = unsafe { alloc::alloc(layout) as *mut T };
        let ptr = NonNull::new(raw).ok_or_else(|| BedrockError::out_of_memory(layout.size()))?;

        Ok(Self {
            ptr,
            size: 0,
            maxn: grow,
            grow,
            generation: 0,
            descriptor,
        })
    }

    /// Live element count
    #[inline]
    pub fn len(&self) -> usize {
        self.size
    }

    /// Check if the vector is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Current slot capacity
    #[inline]
    pub fn maxn(&self) -> usize {
        self.maxn
    }

    /// The grow increment capacity advances in
    #[inline]
    pub fn grow(&self) -> usize {
        self.grow
    }

    /// The bound element descriptor
    #[inline]
    pub fn descriptor(&self) -> &Descriptor<T> {
        &self.descriptor
    }

    /// The vector as a slice
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        unsafe { slice::from_raw_parts(self.ptr.as_ptr(), self.size) }
    }

    /// The vector as a mutable slice
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        unsafe { slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size) }
    }

    /// Borrow the first element
    #[inline]
    pub fn head(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Borrow the final element
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Iterate over the elements in traversal order
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Grow capacity to the smallest multiple of `grow` covering `target`
    ///
    /// Existing element bytes are preserved verbatim across the
    /// reallocation. Fails with no observable mutation when the required
    /// capacity would exceed [`VECTOR_MAXN_LIMIT`].
    fn grow_to(&mut self, target: usize) -> Result<()> {
        if target <= self.maxn {
            return Ok(());
        }

        let needed = target
            .div_ceil(self.grow)
            .checked_mul(self.grow)
            .ok_or_else(|| BedrockError::capacity_exceeded(target, VECTOR_MAXN_LIMIT))?;
        if needed > VECTOR_MAXN_LIMIT {
            log::warn!(
                "vector growth refused: {} slots needed, limit {}",
                needed,
                VECTOR_MAXN_LIMIT
            );
            return Err(BedrockError::capacity_exceeded(needed, VECTOR_MAXN_LIMIT));
        }

        let old_layout = Layout::array::<T>(self.maxn)
            .map_err(|_| BedrockError::out_of_memory(self.maxn * mem::size_of::<T>()))?;
        let new_layout = Layout::array::<T>(needed)
            .map_err(|_| BedrockError::out_of_memory(needed * mem::size_of::<T>()))?;

        let raw = unsafe {
            alloc::realloc(self.ptr.as_ptr() as *mut u8, old_layout, new_layout.size()) as *mut T
        };
        let ptr = NonNull::new(raw).ok_or_else(|| BedrockError::out_of_memory(new_layout.size()))?;

        log::debug!("vector grow: maxn {} -> {}", self.maxn, needed);
        self.ptr = ptr;
        self.maxn = needed;
        Ok(())
    }

    /// Insert a duplicate of `value` before `index`, shifting `[index, size)`
    /// one slot toward the tail
    ///
    /// `index == len()` is the no-shift fast path. O(size - index).
    pub fn insert_before(&mut self, index: usize, value: &T) -> Result<()> {
        if index > self.size {
            return Err(BedrockError::out_of_bounds(index, self.size));
        }
        self.grow_to(self.size + 1)?;

        unsafe {
            let slot = self.ptr.as_ptr().add(index);
            // Single overlapping-safe move of the affected range.
            ptr::copy(slot, slot.add(1), self.size - index);
            ptr::write(slot, self.descriptor.construct(value));
        }
        self.size += 1;
        self.generation += 1;
        Ok(())
    }

    /// Insert a duplicate of `value` after the element at `index`
    pub fn insert_after(&mut self, index: usize, value: &T) -> Result<()> {
        check_bounds(index, self.size)?;
        self.insert_before(index + 1, value)
    }

    /// Insert a duplicate of `value` at the head
    pub fn insert_head(&mut self, value: &T) -> Result<()> {
        self.insert_before(0, value)
    }

    /// Insert a duplicate of `value` at the tail (fast path, no shift)
    pub fn insert_tail(&mut self, value: &T) -> Result<()> {
        self.insert_before(self.size, value)
    }

    /// Overwrite the element at `index` in place: release the current
    /// content, then duplicate `value` into the slot
    ///
    /// Non-structural: no shift, outstanding cursors stay valid.
    pub fn replace(&mut self, index: usize, value: &T) -> Result<()> {
        check_bounds(index, self.size)?;
        let descriptor = self.descriptor.clone();
        descriptor.assign(&mut self.as_mut_slice()[index], value);
        Ok(())
    }

    /// Overwrite the head element
    pub fn replace_head(&mut self, value: &T) -> Result<()> {
        self.replace(0, value)
    }

    /// Overwrite the final element
    pub fn replace_last(&mut self, value: &T) -> Result<()> {
        if self.size == 0 {
            return Err(BedrockError::out_of_bounds(0, 0));
        }
        self.replace(self.size - 1, value)
    }

    /// Remove and return the element at `index`, shifting later elements
    /// one slot toward the head
    ///
    /// Removing the final element is the no-shift fast path.
    pub fn remove(&mut self, index: usize) -> Result<T> {
        check_bounds(index, self.size)?;

        let value = unsafe {
            let slot = self.ptr.as_ptr().add(index);
            let value = ptr::read(slot);
            ptr::copy(slot.add(1), slot, self.size - index - 1);
            value
        };
        self.size -= 1;
        self.generation += 1;
        Ok(value)
    }

    /// Remove the elements in `[start, end)`, shifting later elements
    /// toward the head in one move
    ///
    /// An empty range is a no-op and leaves outstanding cursors valid.
    pub fn remove_range(&mut self, start: usize, end: usize) -> Result<()> {
        check_range(start, end, self.size)?;
        if start == end {
            return Ok(());
        }
        unsafe {
            for i in (start..end).rev() {
                ptr::drop_in_place(self.ptr.as_ptr().add(i));
            }
            ptr::copy(
                self.ptr.as_ptr().add(end),
                self.ptr.as_ptr().add(start),
                self.size - end,
            );
        }
        self.size -= end - start;
        self.generation += 1;
        Ok(())
    }

    /// Remove and return the head element
    pub fn remove_head(&mut self) -> Result<T> {
        self.remove(0)
    }

    /// Remove and return the final element (fast path, no shift)
    pub fn remove_last(&mut self) -> Result<T> {
        if self.size == 0 {
            return Err(BedrockError::out_of_bounds(0, 0));
        }
        self.remove(self.size - 1)
    }

    /// Resize to `new_size` elements, filling new slots with duplicates of
    /// `fill`
    ///
    /// Shrinking releases the trailing elements without shrinking capacity.
    /// Growing extends capacity per the grow policy and fails untouched if
    /// the hard limit would be exceeded.
    pub fn resize(&mut self, new_size: usize, fill: &T) -> Result<()> {
        match new_size.cmp(&self.size) {
            Ordering::Equal => return Ok(()),
            Ordering::Less => unsafe {
                // Release trailing elements, last to first.
                for i in (new_size..self.size).rev() {
                    ptr::drop_in_place(self.ptr.as_ptr().add(i));
                }
            },
            Ordering::Greater => {
                self.grow_to(new_size)?;
                unsafe {
                    for i in (self.size..new_size).rev() {
                        ptr::write(self.ptr.as_ptr().add(i), self.descriptor.construct(fill));
                    }
                }
            }
        }
        self.size = new_size;
        self.generation += 1;
        Ok(())
    }

    /// Release every element, keeping capacity
    pub fn clear(&mut self) {
        unsafe {
            for i in (0..self.size).rev() {
                ptr::drop_in_place(self.ptr.as_ptr().add(i));
            }
        }
        self.size = 0;
        self.generation += 1;
    }

    /// Replace this vector's contents with per-element duplicates of
    /// `source`
    ///
    /// This is a deep copy through the descriptor, never a raw byte copy,
    /// so owning elements stay uniquely owned. Fails with no observable
    /// mutation if the required capacity cannot be obtained.
    pub fn copy_from(&mut self, source: &Vector<T>) -> Result<()> {
        self.grow_to(source.size)?;
        self.clear();
        unsafe {
            for (i, value) in source.as_slice().iter().enumerate() {
                ptr::write(self.ptr.as_ptr().add(i), self.descriptor.construct(value));
                self.size = i + 1;
            }
        }
        Ok(())
    }

    #[inline]
    fn check_cursor(&self, pos: Cursor) -> Result<()> {
        if pos.generation() != self.generation {
            return Err(BedrockError::stale_cursor(pos.generation(), self.generation));
        }
        Ok(())
    }
}

impl<T: Element> Iterable<T> for Vector<T> {
    fn mode(&self) -> IterMode {
        IterMode::FORWARD | IterMode::REVERSE | IterMode::RANDOM_ACCESS | IterMode::MUTABLE
    }

    fn size(&self) -> usize {
        self.size
    }

    fn head(&self) -> Cursor {
        Cursor::new(0, self.generation)
    }

    fn last(&self) -> Cursor {
        Cursor::new(self.size.saturating_sub(1), self.generation)
    }

    fn tail(&self) -> Cursor {
        Cursor::new(self.size, self.generation)
    }

    fn next(&self, pos: Cursor) -> Result<Cursor> {
        self.check_cursor(pos)?;
        check_bounds(pos.index(), self.size)?;
        Ok(Cursor::new(pos.index() + 1, self.generation))
    }

    fn prev(&self, pos: Cursor) -> Result<Cursor> {
        self.check_cursor(pos)?;
        if pos.index() == 0 {
            return Err(BedrockError::out_of_bounds(0, self.size));
        }
        Ok(Cursor::new(pos.index() - 1, self.generation))
    }

    fn item(&self, pos: Cursor) -> Result<&T> {
        self.check_cursor(pos)?;
        check_bounds(pos.index(), self.size)?;
        Ok(&self.as_slice()[pos.index()])
    }

    fn item_compare(&self, a: Cursor, b: Cursor) -> Result<Ordering> {
        let lhs = self.item(a)?;
        let rhs = self.item(b)?;
        Ok(self.descriptor.compare(lhs, rhs))
    }

    fn assign(&mut self, pos: Cursor, value: &T) -> Result<()> {
        self.check_cursor(pos)?;
        self.replace(pos.index(), value)
    }

    fn remove(&mut self, pos: Cursor) -> Result<Cursor> {
        self.check_cursor(pos)?;
        Vector::remove(self, pos.index())?;
        Ok(Cursor::new(pos.index(), self.generation))
    }
}

impl<T: Element> Drop for Vector<T> {
    fn drop(&mut self) {
        self.clear();
        unsafe {
            let layout = Layout::array::<T>(self.maxn).unwrap();
            alloc::dealloc(self.ptr.as_ptr() as *mut u8, layout);
        }
    }
}

impl<T: Element> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T: Element> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}

impl<T: Element> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|v| self.descriptor.display(v)))
            .finish()
    }
}

impl<T: Element> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size
            && self.descriptor.flags() == other.descriptor.flags()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| self.descriptor.compare(a, b) == Ordering::Equal)
    }
}

impl<T: Element> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut cloned = Self::with_grow(self.grow, self.descriptor.clone())
            .expect("source vector proves the configuration is valid");
        cloned
            .copy_from(self)
            .expect("source vector proves the capacity is reachable");
        cloned
    }
}

// Safety: the buffer is uniquely owned and element access follows the
// borrow rules, so thread transfer and sharing reduce to T's own bounds.
unsafe impl<T: Element + Send> Send for Vector<T> {}
unsafe impl<T: Element + Sync> Sync for Vector<T> {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn str_vec(grow: usize) -> Vector<String> {
        Vector::with_grow(grow, Descriptor::str(true)).unwrap()
    }

    fn s(text: &str) -> String {
        text.to_string()
    }

    #[test]
    fn test_construction() {
        let vec = str_vec(8);
        assert_eq!(vec.len(), 0);
        assert_eq!(vec.maxn(), 8);
        assert_eq!(vec.grow(), 8);
        assert!(vec.is_empty());
    }

    #[test]
    fn test_zero_grow_defaults() {
        let vec: Vector<u32> = Vector::with_grow(0, Descriptor::new()).unwrap();
        assert_eq!(vec.grow(), VECTOR_DEFAULT_GROW);
        assert_eq!(vec.maxn(), VECTOR_DEFAULT_GROW);
    }

    #[test]
    fn test_oversized_grow_rejected() {
        let err = Vector::<u32>::with_grow(VECTOR_MAXN_LIMIT + 1, Descriptor::new()).unwrap_err();
        assert_eq!(err.category(), "config");
    }

    #[test]
    fn test_insert_tail_and_order() {
        let mut vec = str_vec(4);
        vec.insert_tail(&s("a")).unwrap();
        vec.insert_tail(&s("b")).unwrap();
        vec.insert_tail(&s("c")).unwrap();
        assert_eq!(vec.as_slice(), &[s("a"), s("b"), s("c")]);
    }

    #[test]
    fn test_insert_shift_correctness() {
        let mut vec = str_vec(4);
        for text in ["a", "b", "c"] {
            vec.insert_tail(&s(text)).unwrap();
        }
        vec.insert_before(1, &s("x")).unwrap();
        assert_eq!(vec.as_slice(), &[s("a"), s("x"), s("b"), s("c")]);

        vec.insert_head(&s("h")).unwrap();
        assert_eq!(vec.head().unwrap(), "h");

        vec.insert_after(0, &s("i")).unwrap();
        assert_eq!(vec.as_slice(), &[s("h"), s("i"), s("a"), s("x"), s("b"), s("c")]);
    }

    #[test]
    fn test_insert_out_of_bounds() {
        let mut vec = str_vec(4);
        vec.insert_tail(&s("a")).unwrap();
        assert!(vec.insert_before(5, &s("x")).is_err());
        assert!(vec.insert_after(1, &s("x")).is_err());
    }

    #[test]
    fn test_remove_shift_correctness() {
        let mut vec: Vector<u32> = Vector::with_grow(4, Descriptor::new()).unwrap();
        for v in [10, 20, 30, 40] {
            vec.insert_tail(&v).unwrap();
        }

        assert_eq!(vec.remove(1).unwrap(), 20);
        assert_eq!(vec.as_slice(), &[10, 30, 40]);

        assert_eq!(vec.remove_head().unwrap(), 10);
        assert_eq!(vec.remove_last().unwrap(), 40);
        assert_eq!(vec.as_slice(), &[30]);

        assert!(vec.remove(1).is_err());
    }

    #[test]
    fn test_remove_range() {
        let mut vec: Vector<u32> = Vector::with_grow(4, Descriptor::new()).unwrap();
        for v in [10, 20, 30, 40, 50] {
            vec.insert_tail(&v).unwrap();
        }

        vec.remove_range(1, 4).unwrap();
        assert_eq!(vec.as_slice(), &[10, 50]);

        // Empty range: no mutation, outstanding cursors stay valid.
        let pos = Iterable::head(&vec);
        vec.remove_range(1, 1).unwrap();
        assert_eq!(vec.as_slice(), &[10, 50]);
        assert_eq!(*vec.item(pos).unwrap(), 10);

        assert!(vec.remove_range(2, 1).is_err()); // inverted
        assert!(vec.remove_range(0, 3).is_err()); // past the end

        vec.remove_range(0, 2).unwrap();
        assert!(vec.is_empty());
    }

    #[test]
    fn test_remove_range_releases_elements() {
        let mut vec: Vector<Arc<u32>> = Vector::with_grow(4, Descriptor::new()).unwrap();
        let shared = Arc::new(7u32);
        for _ in 0..4 {
            vec.insert_tail(&shared).unwrap();
        }
        assert_eq!(Arc::strong_count(&shared), 5);

        vec.remove_range(1, 3).unwrap();
        assert_eq!(Arc::strong_count(&shared), 3);
        assert_eq!(vec.len(), 2);
    }

    #[test]
    fn test_replace_releases_old() {
        let mut vec: Vector<Arc<u32>> = Vector::with_grow(4, Descriptor::new()).unwrap();
        let first = Arc::new(1u32);
        let second = Arc::new(2u32);

        vec.insert_tail(&first).unwrap();
        assert_eq!(Arc::strong_count(&first), 2);

        vec.replace(0, &second).unwrap();
        assert_eq!(Arc::strong_count(&first), 1);
        assert_eq!(Arc::strong_count(&second), 2);

        vec.replace_head(&first).unwrap();
        vec.replace_last(&second).unwrap();
        assert_eq!(Arc::strong_count(&second), 2);
    }

    #[test]
    fn test_growth_in_grow_multiples() {
        let mut vec: Vector<u32> = Vector::with_grow(4, Descriptor::new()).unwrap();
        for v in 0..9u32 {
            vec.insert_tail(&v).unwrap();
            assert!(vec.len() <= vec.maxn());
            assert_eq!(vec.maxn() % vec.grow(), 0);
        }
        assert_eq!(vec.maxn(), 12);
    }

    #[test]
    fn test_capacity_limit_leaves_vector_unchanged() {
        let mut vec: Vector<u32> = Vector::with_grow(VECTOR_MAXN_LIMIT, Descriptor::new()).unwrap();
        vec.resize(VECTOR_MAXN_LIMIT, &0).unwrap();

        let err = vec.insert_tail(&1).unwrap_err();
        assert_eq!(err.category(), "capacity");
        assert_eq!(vec.len(), VECTOR_MAXN_LIMIT);
        assert_eq!(vec.maxn(), VECTOR_MAXN_LIMIT);
    }

    #[test]
    fn test_resize() {
        let mut vec = str_vec(4);
        vec.resize(6, &s("f")).unwrap();
        assert_eq!(vec.len(), 6);
        assert_eq!(vec.maxn(), 8);
        assert!(vec.iter().all(|v| v == "f"));

        // Shrink releases elements but keeps capacity.
        vec.resize(2, &s("unused")).unwrap();
        assert_eq!(vec.len(), 2);
        assert_eq!(vec.maxn(), 8);
    }

    #[test]
    fn test_resize_release_count() {
        let mut vec: Vector<Arc<u32>> = Vector::with_grow(4, Descriptor::new()).unwrap();
        let shared = Arc::new(7u32);
        vec.resize(5, &shared).unwrap();
        assert_eq!(Arc::strong_count(&shared), 6);

        vec.resize(1, &shared).unwrap();
        assert_eq!(Arc::strong_count(&shared), 2);

        vec.clear();
        assert_eq!(Arc::strong_count(&shared), 1);
    }

    #[test]
    fn test_copy_from_is_deep() {
        let mut source = str_vec(4);
        for text in ["a", "b", "c"] {
            source.insert_tail(&s(text)).unwrap();
        }

        let mut copy = str_vec(2);
        copy.insert_tail(&s("stale")).unwrap();
        copy.copy_from(&source).unwrap();
        assert_eq!(copy.as_slice(), source.as_slice());

        // Mutating the copy must not touch the source.
        copy.replace(0, &s("z")).unwrap();
        assert_eq!(source.head().unwrap(), "a");
    }

    #[test]
    fn test_drop_releases_everything() {
        let shared = Arc::new(0u32);
        {
            let mut vec: Vector<Arc<u32>> = Vector::with_grow(4, Descriptor::new()).unwrap();
            vec.resize(8, &shared).unwrap();
            assert_eq!(Arc::strong_count(&shared), 9);
        }
        assert_eq!(Arc::strong_count(&shared), 1);
    }

    #[test]
    fn test_head_last_accessors() {
        let mut vec = str_vec(4);
        assert!(vec.head().is_none());
        assert!(vec.last().is_none());

        vec.insert_tail(&s("a")).unwrap();
        vec.insert_tail(&s("b")).unwrap();
        assert_eq!(vec.head().unwrap(), "a");
        assert_eq!(vec.last().unwrap(), "b");
        assert_eq!(vec[1], "b");
    }

    #[test]
    fn test_clone_and_eq() {
        let mut vec = str_vec(4);
        for text in ["a", "b"] {
            vec.insert_tail(&s(text)).unwrap();
        }
        let cloned = vec.clone();
        assert_eq!(vec, cloned);

        let mut other = cloned.clone();
        other.replace(0, &s("z")).unwrap();
        assert_ne!(vec, other);
    }

    #[test]
    fn test_debug_uses_display_form() {
        let mut vec = str_vec(4);
        vec.insert_tail(&s("abc")).unwrap();
        assert!(format!("{:?}", vec).contains("abc"));
    }

    #[test]
    fn test_cursor_traversal_visits_all() {
        let mut vec: Vector<u32> = Vector::with_grow(4, Descriptor::new()).unwrap();
        for v in [1, 2, 3] {
            vec.insert_tail(&v).unwrap();
        }

        let mut seen = Vec::new();
        let mut pos = Iterable::head(&vec);
        while pos != vec.tail() {
            seen.push(*vec.item(pos).unwrap());
            pos = vec.next(pos).unwrap();
        }
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_cursor_boundaries() {
        let mut vec: Vector<u32> = Vector::with_grow(4, Descriptor::new()).unwrap();
        vec.insert_tail(&1).unwrap();

        assert!(vec.next(vec.tail()).is_err());
        assert!(vec.prev(Iterable::head(&vec)).is_err());
        assert!(vec.item(vec.tail()).is_err());
        assert_eq!(Iterable::last(&vec), Iterable::head(&vec));
    }

    #[test]
    fn test_stale_cursor_detected() {
        let mut vec: Vector<u32> = Vector::with_grow(4, Descriptor::new()).unwrap();
        vec.insert_tail(&1).unwrap();

        let pos = Iterable::head(&vec);
        vec.insert_tail(&2).unwrap();

        let err = vec.item(pos).unwrap_err();
        assert_eq!(err.category(), "cursor");
    }

    #[test]
    fn test_assign_keeps_cursors_valid() {
        let mut vec: Vector<u32> = Vector::with_grow(4, Descriptor::new()).unwrap();
        vec.insert_tail(&1).unwrap();
        vec.insert_tail(&2).unwrap();

        let pos = Iterable::head(&vec);
        vec.assign(pos, &9).unwrap();
        assert_eq!(*vec.item(pos).unwrap(), 9);
    }

    #[test]
    fn test_cursor_remove_returns_successor() {
        let mut vec: Vector<u32> = Vector::with_grow(4, Descriptor::new()).unwrap();
        for v in [1, 2, 3] {
            vec.insert_tail(&v).unwrap();
        }

        let pos = vec.next(Iterable::head(&vec)).unwrap();
        let pos = Iterable::remove(&mut vec, pos).unwrap();
        assert_eq!(*vec.item(pos).unwrap(), 3);
        assert_eq!(vec.as_slice(), &[1, 3]);

        // Removing the final element yields the new tail.
        let pos = Iterable::remove(&mut vec, pos).unwrap();
        assert_eq!(pos, vec.tail());
    }

    #[test]
    fn test_item_compare() {
        let mut vec = str_vec(4);
        vec.insert_tail(&s("apple")).unwrap();
        vec.insert_tail(&s("pear")).unwrap();

        let head = Iterable::head(&vec);
        let second = vec.next(head).unwrap();
        assert_eq!(vec.item_compare(head, second).unwrap(), Ordering::Less);
        assert_eq!(vec.item_compare(head, head).unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_mode_capabilities() {
        let vec: Vector<u32> = Vector::with_grow(4, Descriptor::new()).unwrap();
        let mode = vec.mode();
        assert!(mode.contains(IterMode::FORWARD | IterMode::REVERSE));
        assert!(mode.contains(IterMode::RANDOM_ACCESS | IterMode::MUTABLE));
    }

    #[test]
    fn test_send_sync() {
        fn assert_send<V: Send>() {}
        fn assert_sync<V: Sync>() {}

        assert_send::<Vector<String>>();
        assert_sync::<Vector<String>>();
    }
}
