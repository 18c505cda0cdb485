//! Byte ranges into the service source.
//!
//! Every CST node carries one, and the transformer copies it onto the AST
//! node it produces so later passes can point back at the source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Half-open byte range `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn from_bytes(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Span of a node synthesized without source text.
    #[inline]
    pub const fn zero() -> Self {
        Self::from_bytes(0, 0)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    ///
    /// ```rust
    /// use loom_cst::Span;
    ///
    /// let name = Span::from_bytes(9, 13);
    /// let body = Span::from_bytes(16, 40);
    /// assert_eq!(name.to(body), Span::from_bytes(9, 40));
    /// ```
    pub fn to(self, other: Span) -> Span {
        Span::from_bytes(self.start.min(other.start), self.end.max(other.end))
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
