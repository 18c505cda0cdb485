//! # Loom Values
//!
//! Runtime representation of composite values. Every array kind shares one
//! bounds-checking and growth policy ([`GrowableArray`]) and supplies only
//! its own storage through [`GrowableStorage`].
//!
//! ## Example
//!
//! ```rust
//! use loom_values::IntArray;
//!
//! let mut ids = IntArray::new();
//! ids.add(0, 7).unwrap();
//! ids.add(100, 9).unwrap();
//! assert_eq!(ids.size(), 101);
//! assert_eq!(ids.capacity(), 200);
//! assert_eq!(*ids.get(50).unwrap(), 0);
//! ```

pub mod array;
pub mod error;

// Re-export public API
pub use array::storage::{FloatStorage, GrowableStorage, IntStorage, RefStorage, StringStorage};
pub use array::{
    range_check, range_check_for_get, required_capacity, FloatArray, GrowableArray, IntArray,
    RefArray, StringArray,
};
pub use error::ArrayError;
