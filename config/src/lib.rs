//! # Config Crate
//!
//! Centralized configuration constants for the loom front-end and runtime
//! value layer. Every sizing limit and recursion budget is defined here so
//! that the syntax-tree transformer and the array store agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{ARRAY_BLOCK_SIZE, MAX_ARRAY_SIZE};
//!
//! // Capacities grow in whole blocks, never past the hard limit
//! let next = (3 * ARRAY_BLOCK_SIZE).min(MAX_ARRAY_SIZE);
//! assert_eq!(next, 300);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Platform-Independent**: Limits are expressed against the signed 32-bit
//!   index domain, not the host pointer width

pub mod constants;

#[cfg(test)]
mod tests;
