/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines the common trait for atomic cells, naming the three operations
//! together with their fixed memory orderings.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for atomic cells.
///
/// Provides store, load and exchange with fixed orderings: `Relaxed` for
/// store, `Acquire` for load, `Release` for exchange.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the atomic.
    type Value;

    /// Loads the current value.
    ///
    /// Uses `Acquire` ordering.
    ///
    /// # Returns
    ///
    /// The current value.
    fn load(&self) -> Self::Value;

    /// Stores a new value.
    ///
    /// Uses `Relaxed` ordering.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    fn store(&self, value: Self::Value);

    /// Replaces the current value, returning the old value.
    ///
    /// Uses `Release` ordering.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to install.
    ///
    /// # Returns
    ///
    /// The old value.
    fn exchange(&self, value: Self::Value) -> Self::Value;
}
