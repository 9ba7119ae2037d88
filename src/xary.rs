//! X-ary max-heap implementation
//!
//! A max-heap where every node may have up to `X` children, stored as a
//! complete tree in a single vector. `X = 2` is the conventional binary heap;
//! larger fan-outs give shallower trees (fewer swaps on insert) at the cost
//! of scanning more children on each step of `pop_max`.
//!
//! # Time Complexity
//!
//! | Operation  | Complexity       |
//! |------------|------------------|
//! | `insert`   | O(log_X n)       |
//! | `pop_max`  | O(X · log_X n)   |
//! | `peek_max` | O(1)             |
//!
//! # Example
//!
//! ```rust
//! use xary_heap::xary::XaryMaxHeap;
//!
//! let mut heap = XaryMaxHeap::new(4).unwrap();
//! for value in [5, 1, 9, 3, 7, 2, 8] {
//!     heap.insert(value);
//! }
//!
//! assert_eq!(heap.peek_max(), Some(&9));
//! assert_eq!(heap.pop_max(), Some(9));
//! assert_eq!(heap.pop_max(), Some(8));
//! assert_eq!(heap.len(), 5);
//! ```

use std::slice;

use crate::fan_out::FanOut;
use crate::traits::{HeapError, MaxHeap};

/// A max-heap with a configurable number of children per node
///
/// The element at index 0 of the backing vector is always a maximum.
///
/// Rebalancing only moves an element past a strictly smaller one, and when
/// several children of a node are equal and maximal, sift-down descends into
/// the leftmost of them. Equal elements are therefore popped in a
/// deterministic order, though not necessarily in insertion order.
#[derive(Debug, Clone)]
pub struct XaryMaxHeap<T: Ord> {
    /// The complete X-ary tree in level order
    data: Vec<T>,
    fan_out: FanOut,
}

impl<T: Ord> XaryMaxHeap<T> {
    /// Creates an empty heap whose nodes have at most `fan_out` children
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidFanOut`] if `fan_out` is zero.
    pub fn new(fan_out: usize) -> Result<Self, HeapError> {
        FanOut::new(fan_out).map(Self::with_fan_out)
    }

    /// Creates an empty heap from an already validated fan-out
    pub fn with_fan_out(fan_out: FanOut) -> Self {
        Self::with_capacity(fan_out, 0)
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(fan_out: FanOut, capacity: usize) -> Self {
        log::trace!("new x-ary heap: fan-out {fan_out}, capacity {capacity}");
        Self {
            data: Vec::with_capacity(capacity),
            fan_out,
        }
    }

    /// The maximum number of children per node
    pub fn fan_out(&self) -> FanOut {
        self.fan_out
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Inserts a value, restoring the heap property by sifting it up
    pub fn insert(&mut self, value: T) {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the maximum element without removing it
    pub fn peek_max(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes and returns the maximum element
    ///
    /// The last element takes the root's place and is sifted down. Returns
    /// `None` if the heap is empty.
    pub fn pop_max(&mut self) -> Option<T> {
        if self.data.is_empty() {
            log::trace!("pop_max on an empty heap");
            return None;
        }

        let max = self.data.swap_remove(0);
        if !self.data.is_empty() {
            self.sift_down(0);
        }

        Some(max)
    }

    /// The backing vector in tree order
    ///
    /// Index `i` is the parent of the indices in
    /// [`FanOut::children`]`(i, len)`.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in tree order, not sorted order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes every element, keeping the allocation
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap, returning the backing vector in tree order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Move element at index up while it is strictly greater than its parent
    fn sift_up(&mut self, mut index: usize) {
        while let Some(parent) = self.fan_out.parent(index) {
            if self.data[index] > self.data[parent] {
                self.data.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Move element at index down while some child is strictly greater
    fn sift_down(&mut self, mut index: usize) {
        while let Some(child) = self.max_child(index) {
            if self.data[child] > self.data[index] {
                self.data.swap(index, child);
                index = child;
            } else {
                break;
            }
        }
    }

    /// Index of the largest child of `index`, the leftmost one among equals
    fn max_child(&self, index: usize) -> Option<usize> {
        let mut best: Option<usize> = None;
        for child in self.fan_out.children(index, self.data.len()) {
            match best {
                Some(b) if self.data[child] <= self.data[b] => {}
                _ => best = Some(child),
            }
        }
        best
    }
}

impl<T: Ord> MaxHeap<T> for XaryMaxHeap<T> {
    fn is_empty(&self) -> bool {
        XaryMaxHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        XaryMaxHeap::len(self)
    }

    fn push(&mut self, item: T) {
        self.insert(item)
    }

    fn peek(&self) -> Option<&T> {
        self.peek_max()
    }

    fn pop(&mut self) -> Option<T> {
        self.pop_max()
    }
}

impl<T: Ord> Default for XaryMaxHeap<T> {
    fn default() -> Self {
        Self::with_fan_out(FanOut::default())
    }
}

impl<T: Ord> Extend<T> for XaryMaxHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.insert(value);
        }
    }
}

impl<'a, T: Ord> IntoIterator for &'a XaryMaxHeap<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
