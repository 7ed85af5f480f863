//! Dual-strategy spin lock
//!
//! Two interchangeable mutual-exclusion backends share the [`RawLock`]
//! surface (`init`, `enter`, `enter_try`, `leave`; release of the lock
//! object itself is `Drop`):
//!
//! - [`SpinFlag`] busy-waits on a single atomic flag. No kernel blocking
//!   anywhere; on a machine with more than one execution unit this gives
//!   the lowest acquisition latency for short critical sections, while on
//!   a single core a spinning waiter can starve the holder indefinitely.
//! - [`BlockingLock`] forwards the same four operations verbatim to a
//!   kernel-backed mutex, trading busy-wait CPU cost for the ability to
//!   block safely when oversubscribed.
//!
//! [`DefaultRawLock`] names the strategy compiled into this build: the
//! busy-wait flag, or the blocking mutex when the `blocking-lock` feature
//! is enabled. Callers depending on [`RawLock`] or on
//! [`Lock`](crate::sync::Lock) are oblivious to which is active.
//!
//! Acquire/release pairs establish the same happens-before ordering as a
//! standard mutex. No operation accepts a deadline: `enter` returns only
//! once acquired; build polling loops from `enter_try` instead.

use std::cell::UnsafeCell;
use std::hint;
use std::ops::{Deref, DerefMut};
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::lock_api::RawMutex as _;

/// Raw mutual-exclusion surface shared by both lock strategies
///
/// `leave` is unsafe because it must only be called by the thread that
/// currently holds the lock; releasing a lock another thread holds (or
/// one that is not held at all) is undefined for the blocking backend.
/// The safe way to consume a raw lock is through [`Lock`].
pub trait RawLock: Send + Sync {
    /// Create the lock in the released state
    fn init() -> Self;

    /// Acquire the lock, returning only once it is held
    fn enter(&self);

    /// Make exactly one acquisition attempt
    fn enter_try(&self) -> bool;

    /// Release the lock
    ///
    /// # Safety
    ///
    /// The calling thread must currently hold the lock.
    unsafe fn leave(&self);
}

/// Busy-wait lock strategy over a single atomic flag
///
/// Each acquisition iteration performs a relaxed pre-check before the
/// acquiring swap, keeping contended waiters off the coherence bus while
/// the lock is clearly held. Only suitable as a true spin primitive when
/// more than one physical execution unit is available; the holder is
/// never blocked, so a single-core waiter can spin forever.
pub struct SpinFlag {
    flag: AtomicBool,
}

impl SpinFlag {
    /// Create a released flag; `const` so statics can embed one
    #[inline]
    pub const fn new() -> Self {
        Self { flag: AtomicBool::new(false) }
    }

    /// Check whether the lock is currently held (advisory only)
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}

impl Default for SpinFlag {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for SpinFlag {
    #[inline]
    fn init() -> Self {
        Self::new()
    }

    #[inline]
    fn enter(&self) {
        loop {
            if !self.flag.load(Ordering::Relaxed) && !self.flag.swap(true, Ordering::Acquire) {
                return;
            }
            hint::spin_loop();
        }
    }

    #[inline]
    fn enter_try(&self) -> bool {
        !self.flag.swap(true, Ordering::Acquire)
    }

    #[inline]
    unsafe fn leave(&self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// Blocking lock strategy forwarding to a kernel-backed mutex
pub struct BlockingLock {
    raw: parking_lot::RawMutex,
}

impl BlockingLock {
    /// Create a released lock
    #[inline]
    pub fn new() -> Self {
        Self { raw: parking_lot::RawMutex::INIT }
    }

    /// Check whether the lock is currently held (advisory only)
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.raw.is_locked()
    }
}

impl Default for BlockingLock {
    fn default() -> Self {
        Self::new()
    }
}

impl RawLock for BlockingLock {
    #[inline]
    fn init() -> Self {
        Self::new()
    }

    #[inline]
    fn enter(&self) {
        self.raw.lock();
    }

    #[inline]
    fn enter_try(&self) -> bool {
        self.raw.try_lock()
    }

    #[inline]
    unsafe fn leave(&self) {
        // Safety: forwarded precondition, the caller holds the lock.
        unsafe { self.raw.unlock() };
    }
}

/// The lock strategy compiled into this build
#[cfg(not(feature = "blocking-lock"))]
pub type DefaultRawLock = SpinFlag;

/// The lock strategy compiled into this build
#[cfg(feature = "blocking-lock")]
pub type DefaultRawLock = BlockingLock;

/// RAII mutual exclusion around a value, generic over the raw strategy
///
/// # Examples
///
/// ```rust
/// use bedrock::Lock;
///
/// let lock = Lock::new(0u64);
/// {
///     let mut guard = lock.lock();
///     *guard += 1;
/// }
/// assert_eq!(*lock.lock(), 1);
/// ```
pub struct Lock<T, R: RawLock = DefaultRawLock> {
    raw: R,
    data: UnsafeCell<T>,
}

// Safety: the raw lock serializes all access to the cell.
unsafe impl<T: Send, R: RawLock> Send for Lock<T, R> {}
unsafe impl<T: Send, R: RawLock> Sync for Lock<T, R> {}

impl<T> Lock<T> {
    /// Wrap a value with the build's default lock strategy
    pub fn new(value: T) -> Self {
        Self::with_backend(value)
    }
}

impl<T, R: RawLock> Lock<T, R> {
    /// Wrap a value with an explicitly chosen lock strategy
    pub fn with_backend(value: T) -> Self {
        Self { raw: R::init(), data: UnsafeCell::new(value) }
    }

    /// Acquire the lock, spinning or blocking per the strategy
    pub fn lock(&self) -> LockGuard<'_, T, R> {
        self.raw.enter();
        LockGuard { lock: self }
    }

    /// Make exactly one acquisition attempt
    pub fn try_lock(&self) -> Option<LockGuard<'_, T, R>> {
        if self.raw.enter_try() {
            Some(LockGuard { lock: self })
        } else {
            None
        }
    }

    /// Access the value without locking; the exclusive borrow proves no
    /// other thread can hold the lock
    pub fn get_mut(&mut self) -> &mut T {
        self.data.get_mut()
    }

    /// Consume the lock and return the value
    pub fn into_inner(self) -> T {
        self.data.into_inner()
    }
}

/// Guard holding a [`Lock`] acquired; releases on drop
pub struct LockGuard<'a, T, R: RawLock> {
    lock: &'a Lock<T, R>,
}

impl<T, R: RawLock> Deref for LockGuard<'_, T, R> {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { &*self.lock.data.get() }
    }
}

impl<T, R: RawLock> DerefMut for LockGuard<'_, T, R> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        unsafe { &mut *self.lock.data.get() }
    }
}

impl<T, R: RawLock> Drop for LockGuard<'_, T, R> {
    fn drop(&mut self) {
        // Safety: the guard's existence proves this thread holds the lock.
        unsafe { self.lock.raw.leave() };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise_raw<R: RawLock>() {
        let raw = R::init();

        raw.enter();
        assert!(!raw.enter_try());
        unsafe { raw.leave() };

        assert!(raw.enter_try());
        assert!(!raw.enter_try());
        unsafe { raw.leave() };
    }

    #[test]
    fn test_spin_flag_raw_surface() {
        exercise_raw::<SpinFlag>();
    }

    #[test]
    fn test_blocking_lock_raw_surface() {
        exercise_raw::<BlockingLock>();
    }

    #[test]
    fn test_spin_flag_is_locked() {
        let flag = SpinFlag::new();
        assert!(!flag.is_locked());
        flag.enter();
        assert!(flag.is_locked());
        unsafe { flag.leave() };
        assert!(!flag.is_locked());
    }

    #[test]
    fn test_static_spin_flag() {
        static LOCK: SpinFlag = SpinFlag::new();
        LOCK.enter();
        unsafe { LOCK.leave() };
    }

    #[test]
    fn test_lock_guard() {
        let lock = Lock::new(41u32);
        {
            let mut guard = lock.lock();
            *guard += 1;
        }
        assert_eq!(*lock.lock(), 42);
    }

    #[test]
    fn test_try_lock_exclusion() {
        let lock: Lock<u32, SpinFlag> = Lock::with_backend(0);

        let guard = lock.try_lock().unwrap();
        assert!(lock.try_lock().is_none());
        drop(guard);
        assert!(lock.try_lock().is_some());
    }

    #[test]
    fn test_explicit_backends() {
        let spin: Lock<u32, SpinFlag> = Lock::with_backend(1);
        let blocking: Lock<u32, BlockingLock> = Lock::with_backend(2);
        assert_eq!(*spin.lock(), 1);
        assert_eq!(*blocking.lock(), 2);
    }

    #[test]
    fn test_get_mut_and_into_inner() {
        let mut lock = Lock::new(vec![1, 2]);
        lock.get_mut().push(3);
        assert_eq!(lock.into_inner(), vec![1, 2, 3]);
    }
}
