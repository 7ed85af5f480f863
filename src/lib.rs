//! # Bedrock: Foundational Containers, Hashing, and Synchronization
//!
//! This crate is a base layer for higher-level software (networking,
//! embedded, tooling): generic containers driven by pluggable element
//! behavior, an indexed multi-algorithm hash dispatcher, and interchangeable
//! mutual-exclusion strategies.
//!
//! ## Key Features
//!
//! - **Element framework**: per-type behavior (hash, compare, duplicate,
//!   release, stringify) supplied through the [`Element`] trait and a
//!   runtime [`Descriptor`] carrying kind and flags
//! - **Vector container**: contiguous realloc-grown storage with a bounded
//!   grow-increment capacity policy
//! - **Cursor protocol**: generation-validated positions that turn
//!   iterator-invalidation bugs into detectable errors
//! - **Hash dispatch**: per-width algorithm families selected by index,
//!   widening recursively for unbounded probe sequences
//! - **Spin lock**: busy-wait and blocking strategies behind one interface,
//!   selected per build
//!
//! ## Quick Start
//!
//! ```rust
//! use bedrock::{Descriptor, Vector, Lock, hash_u32};
//!
//! // A vector of strings with case-sensitive comparison.
//! let mut vec = Vector::with_grow(4, Descriptor::str(true)).unwrap();
//! vec.insert_tail(&"a".to_string()).unwrap();
//! vec.insert_tail(&"b".to_string()).unwrap();
//! assert_eq!(vec.len(), 2);
//!
//! // Two decorrelated probe hashes from one input.
//! let h0 = hash_u32(0xdeadbeef, 0xff, 0);
//! let h1 = hash_u32(0xdeadbeef, 0xff, 1);
//! assert!(h0 <= 0xff && h1 <= 0xff);
//!
//! // Shared state protected by the build's lock strategy.
//! let counter = Lock::new(0u64);
//! *counter.lock() += 1;
//! ```
//!
//! Containers are deliberately not internally synchronized; wrap shared
//! instances in a [`Lock`] (or any external mutex) around each sequence of
//! operations that must appear atomic.

#![warn(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod containers;
pub mod element;
pub mod error;
pub mod hash;
pub mod sync;

// Re-export core types
pub use containers::{Cursor, IterMode, Iterable, VECTOR_DEFAULT_GROW, VECTOR_MAXN_LIMIT, Vector};
pub use element::{Descriptor, Element, ElementFlags, ElementKind};
pub use error::{BedrockError, Result};
pub use sync::{BlockingLock, DefaultRawLock, Lock, LockGuard, RawLock, SpinFlag};

// Re-export the hash dispatch entry points
pub use element::hash::{hash_bytes, hash_str, hash_u8, hash_u16, hash_u32, hash_u64};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library (currently no-op, for future use)
pub fn init() {
    log::debug!("Initializing bedrock v{}", VERSION);
}
