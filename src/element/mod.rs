//! Generic element behavior for containers
//!
//! Containers in this crate are generic over an [`Element`] type that
//! supplies per-type behavior: hashing with algorithm selection, ordering,
//! duplication (`Clone`), release (`Drop`), and a display form. A small
//! runtime [`Descriptor`] record travels with each container instance and
//! carries the element kind plus behavior flags (for example string case
//! sensitivity), threading them into the operations that need them.
//!
//! Built-in elements cover the common kinds: unsigned scalars, raw byte
//! buffers (`Vec<u8>`), owned strings (`String`), and pointer-like shared
//! values (`Arc<T>`, whose duplicate is a reference-count bump). Custom
//! composite elements implement [`Element`] directly.

pub mod hash;

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use bitflags::bitflags;

/// Tag identifying an element's logical kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Fixed-width unsigned scalar
    Scalar,
    /// Raw byte buffer
    Bytes,
    /// Owned UTF-8 string
    Str,
    /// Shared pointer-like value; duplication is shallow
    Pointer,
    /// Caller-defined composite type
    Composite,
}

bitflags! {
    /// Behavior flags threaded through descriptor operations
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct ElementFlags: u32 {
        /// Compare strings ignoring ASCII case
        const CASE_INSENSITIVE = 1 << 0;
    }
}

/// Per-type behavior required by the generic containers
///
/// `Clone` is the duplicate operation (a deep copy for owning kinds) and
/// `Drop` is the release operation. Implementations must be free of side
/// effects on shared state: bulk operations iterate the singular operation
/// in a fixed direction and rely on the iterations being independent.
pub trait Element: Clone {
    /// The element's logical kind
    const KIND: ElementKind;

    /// Hash the value with the family algorithm selected by `index`,
    /// confined to `[0, mask]`
    fn hash(&self, mask: usize, index: usize) -> usize;

    /// Compare two values under the given behavior flags
    fn compare(&self, other: &Self, flags: ElementFlags) -> Ordering;

    /// Produce a display form of the value
    fn display(&self) -> String;
}

macro_rules! scalar_element {
    ($ty:ty, $hash_fn:path) => {
        impl Element for $ty {
            const KIND: ElementKind = ElementKind::Scalar;

            #[inline]
            fn hash(&self, mask: usize, index: usize) -> usize {
                $hash_fn(*self, mask, index)
            }

            #[inline]
            fn compare(&self, other: &Self, _flags: ElementFlags) -> Ordering {
                self.cmp(other)
            }

            fn display(&self) -> String {
                self.to_string()
            }
        }
    };
}

scalar_element!(u8, hash::hash_u8);
scalar_element!(u16, hash::hash_u16);
scalar_element!(u32, hash::hash_u32);
scalar_element!(u64, hash::hash_u64);

impl Element for usize {
    const KIND: ElementKind = ElementKind::Scalar;

    #[inline]
    fn hash(&self, mask: usize, index: usize) -> usize {
        hash::hash_u64(*self as u64, mask, index)
    }

    #[inline]
    fn compare(&self, other: &Self, _flags: ElementFlags) -> Ordering {
        self.cmp(other)
    }

    fn display(&self) -> String {
        self.to_string()
    }
}

impl Element for Vec<u8> {
    const KIND: ElementKind = ElementKind::Bytes;

    #[inline]
    fn hash(&self, mask: usize, index: usize) -> usize {
        hash::hash_bytes(self, mask, index)
    }

    #[inline]
    fn compare(&self, other: &Self, _flags: ElementFlags) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }

    fn display(&self) -> String {
        self.iter().map(|b| format!("{:02x}", b)).collect()
    }
}

impl Element for String {
    const KIND: ElementKind = ElementKind::Str;

    #[inline]
    fn hash(&self, mask: usize, index: usize) -> usize {
        hash::hash_str(self, mask, index)
    }

    fn compare(&self, other: &Self, flags: ElementFlags) -> Ordering {
        if flags.contains(ElementFlags::CASE_INSENSITIVE) {
            let lhs = self.bytes().map(|b| b.to_ascii_lowercase());
            let rhs = other.bytes().map(|b| b.to_ascii_lowercase());
            lhs.cmp(rhs)
        } else {
            self.as_str().cmp(other.as_str())
        }
    }

    fn display(&self) -> String {
        self.clone()
    }
}

impl<T: Element> Element for Arc<T> {
    const KIND: ElementKind = ElementKind::Pointer;

    #[inline]
    fn hash(&self, mask: usize, index: usize) -> usize {
        (**self).hash(mask, index)
    }

    #[inline]
    fn compare(&self, other: &Self, flags: ElementFlags) -> Ordering {
        (**self).compare(other, flags)
    }

    fn display(&self) -> String {
        (**self).display()
    }
}

/// Runtime descriptor binding an element type to per-instance behavior
///
/// The compile-time half of element behavior lives in the [`Element`] trait;
/// the descriptor carries the runtime half (kind tag and flags) and exposes
/// the full operation set containers go through. Every mutating container
/// operation duplicates through [`Descriptor::construct`] or
/// [`Descriptor::assign`], never by moving caller storage.
pub struct Descriptor<T: Element> {
    kind: ElementKind,
    flags: ElementFlags,
    _marker: PhantomData<fn() -> T>,
}

impl<T: Element> Descriptor<T> {
    /// Create a descriptor with empty flags
    pub fn new() -> Self {
        Self::with_flags(ElementFlags::empty())
    }

    /// Create a descriptor with the given behavior flags
    pub fn with_flags(flags: ElementFlags) -> Self {
        Self { kind: T::KIND, flags, _marker: PhantomData }
    }

    /// The element kind this descriptor was built for
    #[inline]
    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    /// The descriptor's behavior flags
    #[inline]
    pub fn flags(&self) -> ElementFlags {
        self.flags
    }

    /// Hash a value with the family algorithm selected by `index`
    #[inline]
    pub fn hash(&self, value: &T, mask: usize, index: usize) -> usize {
        value.hash(mask, index)
    }

    /// Compare two values under this descriptor's flags
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        a.compare(b, self.flags)
    }

    /// Produce a value's display form
    #[inline]
    pub fn display(&self, value: &T) -> String {
        value.display()
    }

    /// Duplicate a value into fresh storage
    #[inline]
    pub fn construct(&self, value: &T) -> T {
        value.clone()
    }

    /// Overwrite a slot, releasing its current content before the new
    /// duplicate occupies it
    ///
    /// The duplicate is constructed first; assignment then drops the old
    /// value and moves the duplicate into the slot, so the slot never holds
    /// two live owning values and nothing leaks.
    #[inline]
    pub fn assign(&self, slot: &mut T, value: &T) {
        *slot = value.clone();
    }

    /// Release a value, dropping any owned resources
    #[inline]
    pub fn release(&self, slot: T) {
        drop(slot);
    }

    /// Duplicate a value `n` times into fresh storage
    pub fn construct_n(&self, value: &T, n: usize) -> Vec<T> {
        std::iter::repeat_with(|| value.clone()).take(n).collect()
    }

    /// Overwrite every slot with a duplicate of `value`
    ///
    /// Iterates the singular assign backward from the last slot to the
    /// first; element operations must not have side effects on shared
    /// state, so the direction is unobservable.
    pub fn assign_n(&self, slots: &mut [T], value: &T) {
        for slot in slots.iter_mut().rev() {
            self.assign(slot, value);
        }
    }
}

impl Descriptor<String> {
    /// Descriptor for string elements with the given case sensitivity
    pub fn str(case_sensitive: bool) -> Self {
        let flags = if case_sensitive {
            ElementFlags::empty()
        } else {
            ElementFlags::CASE_INSENSITIVE
        };
        Self::with_flags(flags)
    }
}

impl Descriptor<Vec<u8>> {
    /// Descriptor for raw byte-buffer elements
    pub fn bytes() -> Self {
        Self::new()
    }
}

impl<T: Element> Default for Descriptor<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for Descriptor<T> {
    fn clone(&self) -> Self {
        Self { kind: self.kind, flags: self.flags, _marker: PhantomData }
    }
}

impl<T: Element> fmt::Debug for Descriptor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Descriptor")
            .field("kind", &self.kind)
            .field("flags", &self.flags)
            .finish()
    }
}
