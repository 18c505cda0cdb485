//! # Growable Arrays
//!
//! Bounds checking and block-aligned growth shared by every array kind.
//!
//! ## Growth Policy
//!
//! Capacity starts at one block and grows one whole block at a time
//! (100, 200, 300, ...). Growth is decided by comparing the block of the
//! written index with the block count of the current capacity, so a write
//! into an already allocated block never reallocates, whatever the size.
//!
//! ```text
//! capacity 100, write @99  → no growth
//! capacity 100, write @100 → grow to 200
//! capacity 100, write @450 → grow to 500
//! ```

pub mod storage;

#[cfg(test)]
mod tests;

use crate::error::ArrayError;
use config::constants::{block_index, ARRAY_BLOCK_SIZE, DEFAULT_ARRAY_CAPACITY, MAX_ARRAY_SIZE};
use storage::{FloatStorage, GrowableStorage, IntStorage, RefStorage, StringStorage};

pub type IntArray = GrowableArray<IntStorage>;
pub type FloatArray = GrowableArray<FloatStorage>;
pub type StringArray = GrowableArray<StringStorage>;
pub type RefArray<T> = GrowableArray<RefStorage<T>>;

// =============================================================================
// RANGE CHECKS
// =============================================================================

/// Validates an index for writing and converts it to a slot number.
///
/// Fails with `IndexTooLarge` outside the signed 32-bit domain and with
/// `IndexOutOfRange` for negative indices.
pub fn range_check(index: i64, size: usize) -> Result<usize, ArrayError> {
    if index > i64::from(i32::MAX) || index < i64::from(i32::MIN) {
        return Err(ArrayError::IndexTooLarge { index });
    }
    usize::try_from(index).map_err(|_| ArrayError::IndexOutOfRange { index, size })
}

/// Like [`range_check`], and additionally rejects slots at or past `size`.
///
/// # Example
///
/// ```rust
/// use loom_values::{range_check_for_get, ArrayError};
///
/// assert_eq!(range_check_for_get(2, 3), Ok(2));
/// assert_eq!(
///     range_check_for_get(3, 3),
///     Err(ArrayError::IndexOutOfRange { index: 3, size: 3 })
/// );
/// ```
pub fn range_check_for_get(index: i64, size: usize) -> Result<usize, ArrayError> {
    let slot = range_check(index, size)?;
    if slot >= size {
        return Err(ArrayError::IndexOutOfRange { index, size });
    }
    Ok(slot)
}

/// Capacity needed before writing `slot`, or `None` if the current one suffices.
///
/// # Example
///
/// ```rust
/// use loom_values::required_capacity;
///
/// assert_eq!(required_capacity(99, 100), Ok(None));
/// assert_eq!(required_capacity(100, 100), Ok(Some(200)));
/// assert_eq!(required_capacity(450, 100), Ok(Some(500)));
/// ```
pub fn required_capacity(
    slot: usize,
    current_capacity: usize,
) -> Result<Option<usize>, ArrayError> {
    if slot >= MAX_ARRAY_SIZE {
        return Err(ArrayError::ArraySizeExceeded {
            index: slot,
            max: MAX_ARRAY_SIZE,
        });
    }
    let needed_block = block_index(slot);
    let current_block = block_index(current_capacity);
    if needed_block < current_block {
        return Ok(None);
    }
    let target = ((needed_block + 1) * ARRAY_BLOCK_SIZE).min(MAX_ARRAY_SIZE);
    // The final partial block is already at the clamp.
    Ok(Some(target).filter(|&t| t > current_capacity))
}

// =============================================================================
// GROWABLE ARRAY
// =============================================================================

/// An array value parameterized over its element kind's storage.
///
/// `size` is one past the highest index ever written and never decreases.
/// Failed operations leave both size and storage unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct GrowableArray<S: GrowableStorage> {
    size: usize,
    storage: S,
}

impl<S: GrowableStorage> GrowableArray<S> {
    /// Empty array with one block of capacity.
    pub fn new() -> Self {
        Self {
            size: 0,
            storage: S::with_capacity(DEFAULT_ARRAY_CAPACITY),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }

    /// Readies the array for a write at `index` and returns the slot.
    ///
    /// Validates the index, grows the storage when the index lands in a
    /// block not yet allocated, then extends the size to cover the index.
    pub fn prepare_for_add(&mut self, index: i64) -> Result<usize, ArrayError> {
        let slot = range_check(index, self.size)?;
        let current = self.storage.capacity();
        if let Some(new_capacity) = required_capacity(slot, current)? {
            self.storage.grow(new_capacity)?;
            tracing::debug!(from = current, to = new_capacity, index, "array grown");
        }
        if slot >= self.size {
            self.size = slot + 1;
        }
        Ok(slot)
    }

    /// Validates `index` for a read against the current size.
    pub fn range_check_for_get(&self, index: i64) -> Result<usize, ArrayError> {
        range_check_for_get(index, self.size)
    }

    /// Writes `value` at `index`, growing as needed.
    pub fn add(&mut self, index: i64, value: S::Element) -> Result<(), ArrayError> {
        let slot = self.prepare_for_add(index)?;
        let size = self.size;
        let cell = self
            .storage
            .slots_mut()
            .get_mut(slot)
            .ok_or(ArrayError::IndexOutOfRange { index, size })?;
        *cell = value;
        Ok(())
    }

    /// Reads the element at `index`; unwritten slots below the size hold
    /// the kind's default.
    pub fn get(&self, index: i64) -> Result<&S::Element, ArrayError> {
        let slot = self.range_check_for_get(index)?;
        self.storage
            .slots()
            .get(slot)
            .ok_or(ArrayError::IndexOutOfRange {
                index,
                size: self.size,
            })
    }

    /// Elements below the logical size, in index order.
    pub fn iter(&self) -> impl Iterator<Item = &S::Element> + '_ {
        self.storage.slots().iter().take(self.size)
    }
}

impl<S: GrowableStorage> Default for GrowableArray<S> {
    fn default() -> Self {
        Self::new()
    }
}
