/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Types
//!
//! Provides the pointer-sized atomic integer cell and the trait describing
//! its operations.
//!
//! # Author
//!
//! Haixing Hu

mod atomic_int;
mod sync;
mod traits;

pub use atomic_int::AtomicInt;
pub use traits::Atomic;
