//! Fan-out configuration and implicit-tree index arithmetic
//!
//! An X-ary heap stores a complete tree in a flat vector. With 0-based
//! positions, the node at index `i` has its parent at `(i - 1) / X` and its
//! children at `X*i + 1 ..= X*i + X`. For `X = 2` these reduce to the usual
//! binary-heap formulas.
//!
//! ```rust
//! use xary_heap::fan_out::FanOut;
//!
//! let x = FanOut::new(4).unwrap();
//! assert_eq!(x.parent(0), None);
//! assert_eq!(x.parent(5), Some(1));
//! assert_eq!(x.children(1, 100), 5..9);
//! assert_eq!(x.children(1, 7), 5..7);
//! ```

use std::fmt;
use std::num::NonZeroUsize;
use std::ops::Range;

use crate::traits::HeapError;

/// Maximum number of children per node, fixed for the lifetime of a heap
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FanOut(NonZeroUsize);

impl FanOut {
    /// Two children per node: a conventional binary heap
    pub const BINARY: FanOut = match NonZeroUsize::new(2) {
        Some(x) => FanOut(x),
        None => unreachable!(),
    };

    /// Validates a fan-out, rejecting zero
    pub fn new(x: usize) -> Result<Self, HeapError> {
        match NonZeroUsize::new(x) {
            Some(x) => Ok(FanOut(x)),
            None => {
                log::debug!("rejecting heap fan-out {x}");
                Err(HeapError::InvalidFanOut(x))
            }
        }
    }

    /// Returns the fan-out as a plain integer
    #[inline]
    pub fn get(self) -> usize {
        self.0.get()
    }

    /// Index of the parent of `index`, or `None` for the root
    #[inline]
    pub fn parent(self, index: usize) -> Option<usize> {
        if index == 0 {
            None
        } else {
            Some((index - 1) / self.get())
        }
    }

    /// Indices of the children of `index` in a tree of `len` nodes
    ///
    /// The range is empty when the node is a leaf.
    #[inline]
    pub fn children(self, index: usize, len: usize) -> Range<usize> {
        let first = self.get().saturating_mul(index).saturating_add(1);
        let end = first.saturating_add(self.get());
        first.min(len)..end.min(len)
    }
}

impl Default for FanOut {
    fn default() -> Self {
        FanOut::BINARY
    }
}

impl From<NonZeroUsize> for FanOut {
    fn from(x: NonZeroUsize) -> Self {
        FanOut(x)
    }
}

impl TryFrom<usize> for FanOut {
    type Error = HeapError;

    fn try_from(x: usize) -> Result<Self, Self::Error> {
        FanOut::new(x)
    }
}

impl fmt::Display for FanOut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
