//! Backing storage per element kind.
//!
//! Storage is always fully initialized: its length is the array's capacity,
//! and every slot past the logical size holds the kind's default.

use crate::error::ArrayError;

/// Reallocation strategy supplied by each array element kind.
pub trait GrowableStorage {
    type Element: Clone;

    /// Storage of `capacity` default-initialized slots.
    fn with_capacity(capacity: usize) -> Self
    where
        Self: Sized;

    fn slots(&self) -> &[Self::Element];

    fn slots_mut(&mut self) -> &mut [Self::Element];

    fn capacity(&self) -> usize {
        self.slots().len()
    }

    /// Reallocates to exactly `new_capacity` slots, keeping existing
    /// elements at their indices and defaulting the new ones.
    ///
    /// On failure the storage is left untouched.
    fn grow(&mut self, new_capacity: usize) -> Result<(), ArrayError>;
}

fn grow_slots<T: Clone>(
    slots: &mut Vec<T>,
    new_capacity: usize,
    fill: T,
) -> Result<(), ArrayError> {
    if new_capacity <= slots.len() {
        return Ok(());
    }
    slots
        .try_reserve_exact(new_capacity - slots.len())
        .map_err(|_| ArrayError::AllocationFailure {
            requested: new_capacity,
        })?;
    slots.resize(new_capacity, fill);
    Ok(())
}

/// Storage for `int[]` values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntStorage {
    slots: Vec<i64>,
}

impl GrowableStorage for IntStorage {
    type Element = i64;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity],
        }
    }

    fn slots(&self) -> &[i64] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [i64] {
        &mut self.slots
    }

    fn grow(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        grow_slots(&mut self.slots, new_capacity, 0)
    }
}

/// Storage for `float[]` values.
#[derive(Debug, Clone, PartialEq)]
pub struct FloatStorage {
    slots: Vec<f64>,
}

impl GrowableStorage for FloatStorage {
    type Element = f64;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0.0; capacity],
        }
    }

    fn slots(&self) -> &[f64] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [f64] {
        &mut self.slots
    }

    fn grow(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        grow_slots(&mut self.slots, new_capacity, 0.0)
    }
}

/// Storage for `string[]` values; unwritten slots hold the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringStorage {
    slots: Vec<String>,
}

impl GrowableStorage for StringStorage {
    type Element = String;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![String::new(); capacity],
        }
    }

    fn slots(&self) -> &[String] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [String] {
        &mut self.slots
    }

    fn grow(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        grow_slots(&mut self.slots, new_capacity, String::new())
    }
}

/// Storage for arrays of reference values; unwritten slots are `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct RefStorage<T> {
    slots: Vec<Option<T>>,
}

impl<T: Clone> GrowableStorage for RefStorage<T> {
    type Element = Option<T>;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
        }
    }

    fn slots(&self) -> &[Option<T>] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [Option<T>] {
        &mut self.slots
    }

    fn grow(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        grow_slots(&mut self.slots, new_capacity, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grow_keeps_elements_in_place() {
        let mut storage = IntStorage::with_capacity(3);
        storage.slots_mut()[1] = 5;
        storage.grow(6).unwrap();
        assert_eq!(storage.slots(), &[0, 5, 0, 0, 0, 0]);
    }

    #[test]
    fn test_grow_never_shrinks() {
        let mut storage = StringStorage::with_capacity(4);
        storage.grow(2).unwrap();
        assert_eq!(storage.capacity(), 4);
    }

    #[test]
    fn test_ref_storage_defaults_to_none() {
        let mut storage: RefStorage<String> = RefStorage::with_capacity(1);
        storage.grow(2).unwrap();
        assert!(storage.slots().iter().all(Option::is_none));
    }

    #[test]
    fn test_float_defaults_to_zero() {
        let storage = FloatStorage::with_capacity(2);
        assert_eq!(storage.slots(), &[0.0, 0.0]);
    }

    #[test]
    fn test_impossible_reservation_fails_without_mutation() {
        let mut storage = IntStorage::with_capacity(2);
        storage.slots_mut()[0] = 9;
        let err = storage.grow(usize::MAX).unwrap_err();
        assert_eq!(err, ArrayError::AllocationFailure { requested: usize::MAX });
        assert_eq!(storage.slots(), &[9, 0]);
    }
}
