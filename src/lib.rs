//! X-ary Max-Heap for Rust
//!
//! This crate provides [`XaryMaxHeap`], an array-backed max-heap in which
//! every node may have up to `X` children. The fan-out `X` is chosen when the
//! heap is created and generalizes the binary heap (`X = 2`).
//!
//! # Modules
//!
//! - [`xary`]: the heap itself (insert, pop_max, sift-up, sift-down)
//! - [`fan_out`]: validated fan-out and parent/child index arithmetic
//! - [`traits`]: the [`MaxHeap`] trait and [`HeapError`]
//! - [`stdlib_compat`]: [`MaxHeap`] for `std::collections::BinaryHeap`
//!
//! # Example
//!
//! ```rust
//! use xary_heap::XaryMaxHeap;
//!
//! let mut heap = XaryMaxHeap::new(4).unwrap();
//! heap.insert(5);
//! heap.insert(9);
//! heap.insert(1);
//! assert_eq!(heap.pop_max(), Some(9));
//! assert_eq!(heap.pop_max(), Some(5));
//! assert_eq!(heap.pop_max(), Some(1));
//! assert_eq!(heap.pop_max(), None);
//!
//! assert!(XaryMaxHeap::<i32>::new(0).is_err());
//! ```

pub mod fan_out;
pub mod stdlib_compat;
pub mod traits;
pub mod xary;

// Re-export the main types for convenience
pub use fan_out::FanOut;
pub use traits::{HeapError, MaxHeap};
pub use xary::XaryMaxHeap;
