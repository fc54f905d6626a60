//! Common traits for meldable heaps
//!
//! [`MeldableHeap`] is the operation contract shared by persistent
//! priority queues in this crate: every operation takes the heap by
//! reference and returns a new heap, leaving its inputs untouched.
//!
//! Asking an empty heap for its minimum is a caller error and is reported
//! as [`HeapError::EmptyHeap`] rather than a sentinel value.

use std::fmt;

/// Error type for heap operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `find_min` or `delete_min` was called on an empty heap
    EmptyHeap,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "operation requires a non-empty heap"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Persistent meldable priority queue
///
/// Implementations are min-heaps: `find_min` returns the smallest element.
/// Duplicates are kept, so `meld` is a multiset union.
///
/// # Example
///
/// ```rust
/// use persistent_binomial_heap::{BinomialHeap, MeldableHeap};
///
/// fn smallest_of_both<H: MeldableHeap<i32>>(a: &H, b: &H) -> Option<i32> {
///     a.meld(b).find_min().ok().copied()
/// }
///
/// let a = BinomialHeap::empty().insert(4).insert(9);
/// let b = BinomialHeap::empty().insert(6);
/// assert_eq!(smallest_of_both(&a, &b), Some(4));
/// ```
pub trait MeldableHeap<T: Ord>: Sized {
    /// Creates a new empty heap
    fn empty() -> Self;

    /// Returns true if the heap holds no elements
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the heap
    fn len(&self) -> usize;

    /// Returns a heap holding every element of `self` plus `item`
    fn insert(&self, item: T) -> Self;

    /// Returns the smallest element
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    fn find_min(&self) -> Result<&T, HeapError>;

    /// Returns a heap holding every element of `self` except one
    /// occurrence of the minimum
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    fn delete_min(&self) -> Result<Self, HeapError>;

    /// Returns the multiset union of `self` and `other`
    fn meld(&self, other: &Self) -> Self;
}
