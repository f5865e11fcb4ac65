/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Backing Atomics
//!
//! Selects the primitive that backs [`AtomicInt`](super::AtomicInt). Under
//! `cfg(loom)` this is loom's model-checked atomic, otherwise the standard
//! library's.
//!
//! # Author
//!
//! Haixing Hu

#[cfg(loom)]
pub(crate) use loom::sync::atomic::{
    AtomicIsize,
    Ordering,
};

#[cfg(not(loom))]
pub(crate) use std::sync::atomic::{
    AtomicIsize,
    Ordering,
};
