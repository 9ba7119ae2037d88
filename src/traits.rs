//! Common traits for max-heap data structures
//!
//! - [`MaxHeap`]: the API surface shared by every max-heap in this crate
//! - [`HeapError`]: errors raised while configuring a heap
//!
//! The [`MaxHeap`] trait mirrors the method names of
//! [`std::collections::BinaryHeap`], so generic code and tests can run the
//! same workload against an [`XaryMaxHeap`](crate::xary::XaryMaxHeap) of any
//! fan-out and against the standard library heap.

use thiserror::Error;

/// Error type for heap construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeapError {
    /// A node must be allowed at least one child
    #[error("fan-out must be at least 1, got {0}")]
    InvalidFanOut(usize),
}

/// Base trait for max-heap/priority queue data structures
///
/// This trait provides a simple API similar to Rust's `BinaryHeap`:
/// - `push` inserts an element
/// - `pop` removes and returns the maximum
/// - `peek` returns the maximum without removing it
///
/// Elements are their own priority and are ordered by [`Ord`].
///
/// # Example
///
/// ```rust
/// use xary_heap::MaxHeap;
/// use xary_heap::xary::XaryMaxHeap;
///
/// let mut heap = XaryMaxHeap::new(3).unwrap();
/// heap.push(1);
/// heap.push(3);
/// heap.push(2);
///
/// assert_eq!(heap.peek(), Some(&3));
/// assert_eq!(heap.pop(), Some(3));
/// ```
pub trait MaxHeap<T: Ord> {
    /// Returns true if the heap is empty
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Inserts an element
    ///
    /// # Time Complexity
    /// O(log n) for array-backed heaps.
    fn push(&mut self, item: T);

    /// Returns the maximum element without removing it
    ///
    /// # Time Complexity
    /// O(1) for all implementations
    fn peek(&self) -> Option<&T>;

    /// Removes and returns the maximum element, or `None` if the heap is empty
    ///
    /// # Time Complexity
    /// O(log n) for binary heaps, O(X log_X n) for an X-ary heap.
    fn pop(&mut self) -> Option<T>;
}
