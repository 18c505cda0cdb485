//! # Configuration Constants
//!
//! Centralized constants for the loom pipeline.
//!
//! ## Categories
//!
//! - **Arrays**: Block-aligned growth policy of runtime array values
//! - **Limits**: Recursion budgets for the syntax-tree transformer

// =============================================================================
// ARRAY CONSTANTS
// =============================================================================

/// Number of slots added to an array's backing storage per growth step.
///
/// Capacities always advance in whole blocks (100, 200, 300, ...), so a
/// write that lands inside an already allocated block never reallocates.
///
/// # Example
///
/// ```rust
/// use config::constants::ARRAY_BLOCK_SIZE;
///
/// let capacity = 200;
/// assert_eq!(capacity % ARRAY_BLOCK_SIZE, 0);
/// ```
pub const ARRAY_BLOCK_SIZE: usize = 100;

/// Capacity of a freshly created array.
///
/// # Example
///
/// ```rust
/// use config::constants::{ARRAY_BLOCK_SIZE, DEFAULT_ARRAY_CAPACITY};
///
/// assert_eq!(DEFAULT_ARRAY_CAPACITY, ARRAY_BLOCK_SIZE);
/// ```
pub const DEFAULT_ARRAY_CAPACITY: usize = ARRAY_BLOCK_SIZE;

/// Largest capacity any array may reach.
///
/// The index domain is the signed 32-bit range; eight slots below
/// `i32::MAX` are kept as headroom.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_ARRAY_SIZE;
///
/// assert_eq!(MAX_ARRAY_SIZE, 2_147_483_639);
/// ```
pub const MAX_ARRAY_SIZE: usize = i32::MAX as usize - 8;

/// Returns the zero-based block that contains `index`.
///
/// # Example
///
/// ```rust
/// use config::constants::block_index;
///
/// assert_eq!(block_index(0), 0);
/// assert_eq!(block_index(99), 0);
/// assert_eq!(block_index(100), 1);
/// ```
#[inline]
pub const fn block_index(index: usize) -> usize {
    index / ARRAY_BLOCK_SIZE
}

/// Checks whether `capacity` is a whole number of blocks.
///
/// # Example
///
/// ```rust
/// use config::constants::is_block_aligned;
///
/// assert!(is_block_aligned(300));
/// assert!(!is_block_aligned(250));
/// ```
#[inline]
pub const fn is_block_aligned(capacity: usize) -> bool {
    capacity % ARRAY_BLOCK_SIZE == 0
}

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Remaining stack below which recursive transformation grows the stack.
///
/// Passed as the red zone to `stacker::maybe_grow`.
///
/// # Example
///
/// ```rust
/// use config::constants::{STACKER_RED_ZONE_BYTES, STACKER_STACK_SIZE_BYTES};
///
/// assert!(STACKER_RED_ZONE_BYTES < STACKER_STACK_SIZE_BYTES);
/// ```
pub const STACKER_RED_ZONE_BYTES: usize = 64 * 1024;

/// Bytes of stack allocated each time `stacker` grows the stack.
///
/// # Example
///
/// ```rust
/// use config::constants::STACKER_STACK_SIZE_BYTES;
///
/// assert!(STACKER_STACK_SIZE_BYTES >= 1024 * 1024);
/// ```
pub const STACKER_STACK_SIZE_BYTES: usize = 1024 * 1024;
