//! Tests for bounds checking and block-aligned growth.

use super::*;
use proptest::prelude::*;

// =============================================================================
// HELPERS
// =============================================================================

/// Storage that refuses to grow past a fixed number of slots.
#[derive(Debug, Clone, PartialEq)]
struct LimitedStorage {
    slots: Vec<i64>,
    limit: usize,
}

impl GrowableStorage for LimitedStorage {
    type Element = i64;

    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![0; capacity],
            limit: 200,
        }
    }

    fn slots(&self) -> &[i64] {
        &self.slots
    }

    fn slots_mut(&mut self) -> &mut [i64] {
        &mut self.slots
    }

    fn grow(&mut self, new_capacity: usize) -> Result<(), ArrayError> {
        if new_capacity > self.limit {
            return Err(ArrayError::AllocationFailure {
                requested: new_capacity,
            });
        }
        self.slots.resize(new_capacity, 0);
        Ok(())
    }
}

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_sequential_writes_grow_at_block_boundary() {
    let mut array = IntArray::new();

    array.add(0, 1).unwrap();
    assert_eq!((array.size(), array.capacity()), (1, 100));

    array.add(99, 2).unwrap();
    assert_eq!((array.size(), array.capacity()), (100, 100));

    array.add(100, 3).unwrap();
    assert_eq!((array.size(), array.capacity()), (101, 200));
    assert_eq!(*array.get(99).unwrap(), 2);
    assert_eq!(*array.get(100).unwrap(), 3);
}

#[test]
fn test_read_before_write_is_out_of_range() {
    let array = IntArray::new();
    assert_eq!(
        array.get(0),
        Err(ArrayError::IndexOutOfRange { index: 0, size: 0 })
    );
}

#[test]
fn test_negative_write_leaves_array_unchanged() {
    let mut array = StringArray::new();
    let before = array.clone();

    let err = array.add(-1, "x".to_string()).unwrap_err();

    assert_eq!(err, ArrayError::IndexOutOfRange { index: -1, size: 0 });
    assert_eq!(array, before);
}

#[test]
fn test_index_past_max_size_is_rejected_before_growth() {
    let mut array = GrowableArray::<LimitedStorage>::new();
    let index = MAX_ARRAY_SIZE as i64;

    let err = array.prepare_for_add(index).unwrap_err();

    assert_eq!(
        err,
        ArrayError::ArraySizeExceeded {
            index: MAX_ARRAY_SIZE,
            max: MAX_ARRAY_SIZE,
        }
    );
    assert_eq!((array.size(), array.capacity()), (0, 100));
}

// =============================================================================
// PROPERTIES
// =============================================================================

#[test]
fn test_write_inside_capacity_never_grows() {
    let mut array = FloatArray::new();
    array.add(250, 1.5).unwrap();
    assert_eq!(array.capacity(), 300);

    for index in [0, 42, 199, 299] {
        array.add(index, 0.5).unwrap();
        assert_eq!(array.capacity(), 300);
    }
}

#[test]
fn test_write_at_capacity_adds_exactly_one_block() {
    let mut array = IntArray::new();
    for _ in 0..5 {
        let capacity = array.capacity();
        array.add(capacity as i64, 1).unwrap();
        assert_eq!(array.capacity(), capacity + ARRAY_BLOCK_SIZE);
    }
}

#[test]
fn test_negative_read_is_out_of_range() {
    let mut array = IntArray::new();
    array.add(3, 1).unwrap();
    assert_eq!(
        array.get(-5),
        Err(ArrayError::IndexOutOfRange { index: -5, size: 4 })
    );
    assert_eq!(array.size(), 4);
}

#[test]
fn test_read_at_size_fails_even_within_capacity() {
    let mut array = IntArray::new();
    array.add(9, 1).unwrap();

    assert!(array.get(9).is_ok());
    assert_eq!(
        array.range_check_for_get(10),
        Err(ArrayError::IndexOutOfRange {
            index: 10,
            size: 10,
        })
    );
    assert!(10 < array.capacity());
}

#[test]
fn test_sparse_writes_size_tracks_highest_index() {
    let mut array = IntArray::new();
    array.add(450, 7).unwrap();
    assert_eq!((array.size(), array.capacity()), (451, 500));

    array.add(10, 1).unwrap();
    assert_eq!((array.size(), array.capacity()), (451, 500));

    // Unwritten slots below the size read as the default.
    assert_eq!(*array.get(200).unwrap(), 0);
}

#[test]
fn test_growth_is_driven_by_capacity_not_size() {
    let mut array = IntArray::new();
    array.add(150, 1).unwrap();
    assert_eq!(array.capacity(), 200);

    // Size is 151 and capacity 200: index 180 sits in an allocated block.
    array.add(180, 2).unwrap();
    assert_eq!((array.size(), array.capacity()), (181, 200));
}

#[test]
fn test_allocation_failure_leaves_array_unchanged() {
    let mut array = GrowableArray::<LimitedStorage>::new();
    array.add(150, 4).unwrap();
    let before = array.clone();

    let err = array.add(200, 5).unwrap_err();

    assert_eq!(err, ArrayError::AllocationFailure { requested: 300 });
    assert_eq!(array, before);
}

#[test]
fn test_index_beyond_i32_is_too_large() {
    let mut array = IntArray::new();
    let index = i64::from(i32::MAX) + 1;
    assert_eq!(
        array.prepare_for_add(index),
        Err(ArrayError::IndexTooLarge { index })
    );
    assert_eq!(
        range_check_for_get(i64::from(i32::MIN) - 1, 0),
        Err(ArrayError::IndexTooLarge {
            index: i64::from(i32::MIN) - 1,
        })
    );
}

#[test]
fn test_reference_and_string_defaults() {
    let mut names = StringArray::new();
    names.add(2, "c".to_string()).unwrap();
    assert_eq!(names.iter().cloned().collect::<Vec<_>>(), ["", "", "c"]);

    let mut refs: RefArray<u32> = RefArray::default();
    refs.add(1, Some(8)).unwrap();
    assert_eq!(refs.iter().copied().collect::<Vec<_>>(), [None, Some(8)]);
}

// =============================================================================
// REQUIRED CAPACITY
// =============================================================================

#[test]
fn test_required_capacity_in_allocated_block() {
    assert_eq!(required_capacity(0, 100), Ok(None));
    assert_eq!(required_capacity(299, 300), Ok(None));
}

#[test]
fn test_required_capacity_rounds_to_block() {
    assert_eq!(required_capacity(100, 100), Ok(Some(200)));
    assert_eq!(required_capacity(1_234, 100), Ok(Some(1_300)));
}

#[test]
fn test_required_capacity_clamps_final_block() {
    assert_eq!(
        required_capacity(MAX_ARRAY_SIZE - 1, 100),
        Ok(Some(MAX_ARRAY_SIZE))
    );
    assert_eq!(
        required_capacity(MAX_ARRAY_SIZE - 1, MAX_ARRAY_SIZE),
        Ok(None)
    );
}

#[test]
fn test_required_capacity_rejects_max() {
    assert_eq!(
        required_capacity(MAX_ARRAY_SIZE, 100),
        Err(ArrayError::ArraySizeExceeded {
            index: MAX_ARRAY_SIZE,
            max: MAX_ARRAY_SIZE,
        })
    );
}

// =============================================================================
// PROPERTY TESTS
// =============================================================================

proptest! {
    #[test]
    fn prop_size_is_highest_index_plus_one(indices in prop::collection::vec(0i64..5_000, 1..40)) {
        let mut array = IntArray::new();
        let mut previous = 0;
        for &index in &indices {
            array.add(index, index).unwrap();
            prop_assert!(array.size() >= previous);
            previous = array.size();
        }
        let highest = indices.iter().copied().max().unwrap_or(0) as usize;
        prop_assert_eq!(array.size(), highest + 1);
    }

    #[test]
    fn prop_capacity_stays_block_aligned(indices in prop::collection::vec(0i64..5_000, 1..40)) {
        let mut array = IntArray::new();
        for index in indices {
            array.add(index, 1).unwrap();
            prop_assert!(config::constants::is_block_aligned(array.capacity()));
            prop_assert!(array.capacity() >= array.size());
        }
    }

    #[test]
    fn prop_write_below_capacity_keeps_capacity(seed in 0i64..5_000, offset in 0usize..5_000) {
        let mut array = IntArray::new();
        array.add(seed, 1).unwrap();
        let capacity = array.capacity();
        let index = (offset % capacity) as i64;
        array.add(index, 2).unwrap();
        prop_assert_eq!(array.capacity(), capacity);
    }
}
