/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-shim
//!
//! A pointer-sized atomic integer cell for runtimes that cannot reach the
//! platform's atomic primitives themselves.
//!
//! The cell offers three operations with fixed memory orderings:
//!
//! | Operation  | Ordering  |
//! |------------|-----------|
//! | `store`    | `Relaxed` |
//! | `load`     | `Acquire` |
//! | `exchange` | `Release` |
//!
//! Only `exchange` followed by a `load` that observes its value establishes
//! happens-before. `store` carries the value alone.
//!
//! With the default `ffi` feature the operations are also exported as the
//! C symbols `store`, `load` and `exchange`, see [`ffi`] and
//! `include/atomic_shims.h`.
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_shim::AtomicInt;
//!
//! let cell = AtomicInt::new(3);
//! assert_eq!(cell.exchange(7), 3);
//! assert_eq!(cell.load(), 7);
//!
//! cell.store(42);
//! assert_eq!(cell.load(), 42);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod atomic;
pub mod error;
#[cfg(all(feature = "ffi", not(loom)))]
pub mod ffi;

pub use atomic::{
    Atomic,
    AtomicInt,
};
pub use error::{
    CellError,
    CellResult,
};
