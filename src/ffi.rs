/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # C ABI
//!
//! Exports the cell operations as unmangled C functions matching
//! `include/atomic_shims.h`:
//!
//! ```c
//! typedef struct AtomicInt { atomic_intptr_t value; } AtomicInt;
//!
//! void     store(AtomicInt *atomic_value, intptr_t value);
//! intptr_t load(AtomicInt *atomic_value);
//! intptr_t exchange(AtomicInt *atomic_value, intptr_t value);
//! ```
//!
//! The Rust side takes `*const AtomicInt` where the header says
//! `AtomicInt *`. Both are the same pointer at the ABI level, and every
//! mutation goes through the atomic's interior mutability, so a shared
//! pointer is enough.
//!
//! The record is owned by the caller. Passing a null, misaligned or freed
//! pointer is undefined behavior; debug builds assert against null.
//!
//! # Author
//!
//! Haixing Hu

use crate::atomic::AtomicInt;

/// Stores `value` into the cell with `Relaxed` ordering.
///
/// # Safety
///
/// `atomic_value` must point to a live, properly aligned `AtomicInt`.
#[no_mangle]
pub unsafe extern "C" fn store(atomic_value: *const AtomicInt, value: isize) {
    debug_assert!(!atomic_value.is_null(), "store: null cell");
    // SAFETY: validity of the pointer is the caller's contract.
    unsafe { (*atomic_value).store(value) }
}

/// Loads the cell's value with `Acquire` ordering.
///
/// # Safety
///
/// `atomic_value` must point to a live, properly aligned `AtomicInt`.
#[no_mangle]
pub unsafe extern "C" fn load(atomic_value: *const AtomicInt) -> isize {
    debug_assert!(!atomic_value.is_null(), "load: null cell");
    // SAFETY: validity of the pointer is the caller's contract.
    unsafe { (*atomic_value).load() }
}

/// Installs `value` with `Release` ordering and returns the previous value.
///
/// # Safety
///
/// `atomic_value` must point to a live, properly aligned `AtomicInt`.
#[no_mangle]
pub unsafe extern "C" fn exchange(atomic_value: *const AtomicInt, value: isize) -> isize {
    debug_assert!(!atomic_value.is_null(), "exchange: null cell");
    // SAFETY: validity of the pointer is the caller's contract.
    unsafe { (*atomic_value).exchange(value) }
}
