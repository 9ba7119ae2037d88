//! Standard library compatibility layer
//!
//! Implements [`MaxHeap`] for [`std::collections::BinaryHeap`], so the
//! standard binary heap can stand in as a reference implementation wherever
//! an [`XaryMaxHeap`](crate::xary::XaryMaxHeap) is used generically.
//!
//! # Example
//!
//! ```rust
//! use std::collections::BinaryHeap;
//! use xary_heap::MaxHeap;
//!
//! fn drain<H: MaxHeap<i32>>(heap: &mut H) -> Vec<i32> {
//!     std::iter::from_fn(|| heap.pop()).collect()
//! }
//!
//! let mut reference = BinaryHeap::new();
//! let mut heap = xary_heap::XaryMaxHeap::new(3).unwrap();
//! for value in [4, 1, 7] {
//!     MaxHeap::push(&mut reference, value);
//!     heap.push(value);
//! }
//! assert_eq!(drain(&mut reference), drain(&mut heap));
//! ```

use std::collections::BinaryHeap;

use crate::traits::MaxHeap;

impl<T: Ord> MaxHeap<T> for BinaryHeap<T> {
    fn is_empty(&self) -> bool {
        BinaryHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinaryHeap::len(self)
    }

    fn push(&mut self, item: T) {
        BinaryHeap::push(self, item)
    }

    fn peek(&self) -> Option<&T> {
        BinaryHeap::peek(self)
    }

    fn pop(&mut self) -> Option<T> {
        BinaryHeap::pop(self)
    }
}
