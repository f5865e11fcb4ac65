/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Cell Errors
//!
//! Errors raised when adopting a cell pointer handed over by foreign code.
//! The atomic operations themselves never fail.
//!
//! # Author
//!
//! Haixing Hu

use thiserror::Error;

/// Reasons a raw pointer cannot be treated as an [`AtomicInt`].
///
/// [`AtomicInt`]: crate::AtomicInt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CellError {
    /// The pointer was null.
    #[error("atomic cell pointer is null")]
    NullPointer,

    /// The pointer does not satisfy the alignment of a pointer-sized
    /// integer.
    #[error("atomic cell pointer {address:#x} is not aligned to {align} bytes")]
    Misaligned {
        /// The offending address.
        address: usize,
        /// The required alignment in bytes.
        align: usize,
    },
}

/// Result type for cell pointer adoption.
pub type CellResult<T> = Result<T, CellError>;
