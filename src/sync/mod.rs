//! Synchronization primitives
//!
//! The containers in this crate are not internally synchronized; callers
//! serialize concurrent access around whole operation sequences with the
//! primitives here. None of them create threads, yield to a scheduler, or
//! accept deadlines.

mod spinlock;

pub use spinlock::{BlockingLock, DefaultRawLock, Lock, LockGuard, RawLock, SpinFlag};
