//! Persistent Meldable Binomial Heap for Rust
//!
//! This crate provides a purely functional priority queue built as a forest
//! of binomial trees. Every operation returns a new heap; older versions stay
//! valid and unchanged, sharing their trees with newer ones.
//!
//! # Features
//!
//! - **Insert**: O(log n) worst-case
//! - **Find-min**: O(log n) worst-case (one scan over at most `log₂(n) + 1` roots)
//! - **Delete-min**: O(log n) worst-case
//! - **Meld**: O(log n) worst-case, carry-propagating union of two heaps
//! - **Persistence**: O(1) clones, structural sharing through `Arc`, `Send + Sync`
//!
//! Calling `find_min` or `delete_min` on an empty heap returns
//! [`HeapError::EmptyHeap`].
//!
//! # Example
//!
//! ```rust
//! use persistent_binomial_heap::BinomialHeap;
//!
//! let small = BinomialHeap::empty().insert(4).insert(1);
//! let large = BinomialHeap::empty().insert(3).insert(2);
//!
//! let both = small.meld(&large);
//! assert_eq!(both.find_min(), Ok(&1));
//! assert_eq!(both.len(), 4);
//! assert_eq!(both.into_sorted_vec(), vec![1, 2, 3, 4]);
//!
//! // The inputs are still there
//! assert_eq!(small.len(), 2);
//! ```

pub mod binomial;
pub mod rank;
pub mod traits;
pub mod tree;

// Re-export the main types for convenience
pub use binomial::BinomialHeap;
pub use traits::{HeapError, MeldableHeap};
pub use tree::{InvariantViolation, Node};
