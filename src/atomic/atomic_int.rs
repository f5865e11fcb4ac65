/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer Cell
//!
//! Provides the pointer-sized atomic integer cell shared with foreign
//! runtimes through the C ABI.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::mem;

use crate::atomic::sync::{
    AtomicIsize,
    Ordering,
};
use crate::error::{
    CellError,
    CellResult,
};

/// Atomic pointer-sized signed integer cell.
///
/// Holds one `isize` and exposes exactly three operations, each with a
/// fixed memory ordering.
///
/// # Memory Ordering Strategy
///
/// - **`store`**: `Relaxed`. The write is indivisible but is not ordered
///   with respect to any other memory operation of the storing thread.
/// - **`load`**: `Acquire`. Pairs with the `Release` of `exchange`.
/// - **`exchange`**: `Release`. Publishes every write that precedes it in
///   program order to any thread that later loads the exchanged value.
///
/// A `store` followed by a `load` on another thread transfers the value
/// only. It does not make any other memory written by the storing thread
/// visible. Use `exchange` to publish data.
///
/// # Layout
///
/// The cell is `#[repr(transparent)]` over the standard atomic and so has
/// the size and alignment of `isize`. It can be embedded by value in
/// memory owned by foreign code as a C `AtomicInt` record.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_shim::AtomicInt;
/// use std::sync::atomic::{AtomicU64, Ordering};
/// use std::sync::Arc;
/// use std::thread;
///
/// let payload = Arc::new(AtomicU64::new(0));
/// let ready = Arc::new(AtomicInt::new(0));
/// let producer = {
///     let payload = payload.clone();
///     let ready = ready.clone();
///     thread::spawn(move || {
///         payload.store(99, Ordering::Relaxed);
///         ready.exchange(1);
///     })
/// };
///
/// while ready.load() != 1 {
///     std::hint::spin_loop();
/// }
/// assert_eq!(payload.load(Ordering::Relaxed), 99);
/// producer.join().unwrap();
/// ```
///
/// # Author
///
/// Haixing Hu
#[repr(transparent)]
pub struct AtomicInt {
    inner: AtomicIsize,
}

impl AtomicInt {
    /// Creates a new cell holding `value`.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    #[cfg(not(loom))]
    #[inline]
    pub const fn new(value: isize) -> Self {
        Self {
            inner: AtomicIsize::new(value),
        }
    }

    /// Creates a new cell holding `value`.
    #[cfg(loom)]
    pub fn new(value: isize) -> Self {
        Self {
            inner: AtomicIsize::new(value),
        }
    }

    /// Stores a new value.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Relaxed` ordering. Other threads never observe a partial
    /// write, but may see this store reordered with the surrounding memory
    /// operations of the calling thread. A `load` that reads this value
    /// does not synchronize with the caller.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    #[inline]
    pub fn store(&self, value: isize) {
        self.inner.store(value, Ordering::Relaxed);
    }

    /// Loads the current value.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Acquire` ordering. No later memory operation of the calling
    /// thread is reordered before this load, and if the value read was
    /// written by `exchange`, everything that happened-before that exchange
    /// is visible to the caller.
    ///
    /// # Returns
    ///
    /// The current value.
    #[inline]
    pub fn load(&self) -> isize {
        self.inner.load(Ordering::Acquire)
    }

    /// Replaces the current value, returning the value it replaced.
    ///
    /// # Memory Ordering
    ///
    /// Uses `Release` ordering. All memory operations that precede this
    /// call in program order become visible to any thread that later
    /// `load`s the value written here. The read half of the exchange is
    /// not an acquire.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to install.
    ///
    /// # Returns
    ///
    /// The value held immediately before the replacement.
    #[inline]
    pub fn exchange(&self, value: isize) -> isize {
        self.inner.swap(value, Ordering::Release)
    }

    /// Consumes the cell and returns its value.
    #[cfg(not(loom))]
    #[inline]
    pub fn into_inner(self) -> isize {
        self.inner.into_inner()
    }

    /// Returns a mutable reference to the value.
    ///
    /// Exclusive access makes atomic operations unnecessary.
    #[cfg(not(loom))]
    #[inline]
    pub fn get_mut(&mut self) -> &mut isize {
        self.inner.get_mut()
    }

    /// Returns a raw pointer to this cell for handing to foreign code.
    ///
    /// The pointer is valid for as long as the cell is.
    #[inline]
    pub fn as_ptr(&self) -> *const AtomicInt {
        self as *const AtomicInt
    }

    /// Adopts a cell pointer received from foreign code.
    ///
    /// # Parameters
    ///
    /// * `ptr` - A pointer to an `AtomicInt` record.
    ///
    /// # Returns
    ///
    /// A reference to the cell, or [`CellError::NullPointer`] /
    /// [`CellError::Misaligned`] if the pointer cannot possibly refer to a
    /// cell.
    ///
    /// # Safety
    ///
    /// A non-null, aligned `ptr` must point to a live, initialized
    /// `AtomicInt` that outlives `'a`. Only null and alignment are
    /// checked.
    pub unsafe fn from_raw<'a>(ptr: *const AtomicInt) -> CellResult<&'a AtomicInt> {
        if ptr.is_null() {
            log::warn!("rejected null atomic cell pointer");
            return Err(CellError::NullPointer);
        }
        let address = ptr as usize;
        let align = mem::align_of::<AtomicInt>();
        if address % align != 0 {
            log::warn!(
                "rejected atomic cell pointer {:#x}: not aligned to {} bytes",
                address,
                align
            );
            return Err(CellError::Misaligned { address, align });
        }
        // SAFETY: non-null and aligned here, liveness is the caller's
        // obligation.
        Ok(unsafe { &*ptr })
    }
}

impl crate::atomic::traits::Atomic for AtomicInt {
    type Value = isize;

    #[inline]
    fn load(&self) -> isize {
        self.load()
    }

    #[inline]
    fn store(&self, value: isize) {
        self.store(value);
    }

    #[inline]
    fn exchange(&self, value: isize) -> isize {
        self.exchange(value)
    }
}

impl Default for AtomicInt {
    #[inline]
    fn default() -> Self {
        Self::new(0)
    }
}

impl From<isize> for AtomicInt {
    #[inline]
    fn from(value: isize) -> Self {
        Self::new(value)
    }
}

impl fmt::Debug for AtomicInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AtomicInt")
            .field("value", &self.load())
            .finish()
    }
}

impl fmt::Display for AtomicInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.load())
    }
}
