//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;

// =============================================================================
// ARRAY TESTS
// =============================================================================

#[test]
fn test_block_size_matches_runtime_policy() {
    assert_eq!(ARRAY_BLOCK_SIZE, 100);
}

#[test]
fn test_default_capacity_is_one_block() {
    assert_eq!(DEFAULT_ARRAY_CAPACITY, ARRAY_BLOCK_SIZE);
    assert!(is_block_aligned(DEFAULT_ARRAY_CAPACITY));
}

#[test]
fn test_max_array_size_reserves_headroom() {
    assert_eq!(MAX_ARRAY_SIZE, 2_147_483_647 - 8);
    assert!(MAX_ARRAY_SIZE < i32::MAX as usize);
}

#[test]
fn test_block_index_boundaries() {
    assert_eq!(block_index(0), 0);
    assert_eq!(block_index(99), 0);
    assert_eq!(block_index(100), 1);
    assert_eq!(block_index(199), 1);
    assert_eq!(block_index(200), 2);
}

#[test]
fn test_is_block_aligned() {
    assert!(is_block_aligned(0));
    assert!(is_block_aligned(100));
    assert!(!is_block_aligned(101));
    // The hard limit itself is not a whole number of blocks
    assert!(!is_block_aligned(MAX_ARRAY_SIZE));
}

// =============================================================================
// LIMIT TESTS
// =============================================================================

#[test]
fn test_stacker_red_zone_smaller_than_growth() {
    assert!(STACKER_RED_ZONE_BYTES > 0);
    assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
}
