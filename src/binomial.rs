//! Persistent Binomial Heap
//!
//! A purely functional binomial heap:
//! - O(log n) insert, delete_min and meld
//! - O(log n) find_min (one scan over the roots)
//!
//! Every operation returns a new heap and leaves its inputs unchanged.
//! Heaps built from one another share their trees, so keeping old versions
//! around costs only the roots that differ.
//!
//! # Algorithm Overview
//!
//! The heap is a forest of binomial trees in strictly ascending rank order,
//! mirroring the binary representation of the element count:
//! - a tree of rank `r` holds `2^r` elements, minimum at the root
//! - at most one tree of each rank, so at most `log₂(n) + 1` roots
//!
//! **Key Operations**:
//! - **Meld**: walk both forests by ascending rank. Unequal ranks pass
//!   through; equal ranks are linked into a carry of rank + 1 that is merged
//!   onward, exactly like a carry in binary addition.
//! - **Insert**: meld with a one-element forest.
//! - **Find-min**: the global minimum is one of the roots.
//! - **Delete-min**: remove the minimum root; its children (ranks
//!   `r-1, …, 0`) form a valid forest once reversed into ascending order,
//!   which is melded back with the remaining roots.
//!
//! # Example
//!
//! ```rust
//! use persistent_binomial_heap::BinomialHeap;
//!
//! let heap = BinomialHeap::empty().insert(8).insert(3).insert(5);
//! let rest = heap.delete_min().unwrap();
//!
//! assert_eq!(heap.find_min(), Ok(&3));
//! assert_eq!(rest.find_min(), Ok(&5));
//! assert_eq!(heap.len(), 3); // unchanged
//! ```

use crate::traits::{HeapError, MeldableHeap};
use crate::tree::{InvariantViolation, Iter, Node};
use std::fmt;
use std::iter::FusedIterator;
use std::sync::Arc;
use tracing::trace;

/// Persistent binomial heap
///
/// Cloning is O(1) and shares the whole forest.
pub struct BinomialHeap<T> {
    /// Roots in strictly ascending rank order
    trees: Arc<Vec<Node<T>>>,
    len: usize,
}

impl<T> Clone for BinomialHeap<T> {
    fn clone(&self) -> Self {
        BinomialHeap {
            trees: Arc::clone(&self.trees),
            len: self.len,
        }
    }
}

impl<T> BinomialHeap<T> {
    /// Create an empty heap
    pub fn empty() -> Self {
        BinomialHeap {
            trees: Arc::new(Vec::new()),
            len: 0,
        }
    }

    /// Create an empty heap (alias of [`BinomialHeap::empty`])
    pub fn new() -> Self {
        Self::empty()
    }

    /// Create a heap holding a single element
    pub fn singleton(item: T) -> Self {
        BinomialHeap {
            trees: Arc::new(vec![Node::singleton(item)]),
            len: 1,
        }
    }

    /// Check if the heap is empty
    pub fn is_empty(&self) -> bool {
        self.trees.is_empty()
    }

    /// Return the number of elements
    pub fn len(&self) -> usize {
        self.len
    }

    /// The roots of the forest, in ascending rank order
    pub fn roots(&self) -> &[Node<T>] {
        &self.trees
    }

    /// Iterate over every element in no particular order
    ///
    /// Visits each tree depth-first, so the whole forest is flattened
    /// (roots and every descendant).
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::forest(&self.trees)
    }
}

impl<T: Ord> BinomialHeap<T> {
    /// Find the minimum element
    ///
    /// Scans the roots once. On ties the first minimal root wins.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn find_min(&self) -> Result<&T, HeapError> {
        self.trees
            .iter()
            .map(Node::value)
            .min()
            .ok_or(HeapError::EmptyHeap)
    }

    /// Peek at the minimum element
    pub fn peek(&self) -> Option<&T> {
        self.find_min().ok()
    }

    /// Index of the first root holding the minimum value
    fn min_index(&self) -> Option<usize> {
        self.trees
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.value().cmp(b.value()))
            .map(|(i, _)| i)
    }

    /// Verify every structural invariant of the heap
    ///
    /// Checks heap order and canonical rank structure of every tree, the
    /// ascending rank order of the roots, and the cached element count.
    /// This walks the whole forest and is meant for tests and debugging.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        for pair in self.trees.windows(2) {
            if pair[0].rank() >= pair[1].rank() {
                return Err(InvariantViolation::RootRankOrder {
                    previous: pair[0].rank(),
                    found: pair[1].rank(),
                });
            }
        }

        let mut counted = 0;
        for tree in self.trees.iter() {
            tree.check()?;
            counted += tree.subtree_size();
        }

        if counted != self.len {
            return Err(InvariantViolation::LengthMismatch {
                cached: self.len,
                counted,
            });
        }

        Ok(())
    }

    /// Cheap structural check run after every update in debug builds
    ///
    /// Only looks at the roots; [`check_invariants`](Self::check_invariants)
    /// does the full walk.
    #[cfg(debug_assertions)]
    fn debug_check_roots(&self) {
        debug_assert!(
            self.trees.windows(2).all(|pair| pair[0].rank() < pair[1].rank()),
            "roots are not in strictly ascending rank order"
        );
        let counted: usize = self
            .trees
            .iter()
            .filter_map(|tree| crate::rank::tree_size(tree.rank()))
            .sum();
        debug_assert_eq!(
            counted, self.len,
            "root ranks account for {} elements but len is {}",
            counted, self.len
        );
    }
}

impl<T: Ord + Clone> BinomialHeap<T> {
    /// Insert an element, returning the new heap - O(log n)
    ///
    /// Insertion is a meld with a one-element heap.
    pub fn insert(&self, item: T) -> Self {
        Self::singleton(item).meld(self)
    }

    /// Meld two heaps into a new one - O(log n)
    ///
    /// Both inputs are left unchanged and every element of both is kept,
    /// duplicates included.
    pub fn meld(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }

        let trees = merge_forests(self.trees.iter().cloned(), other.trees.iter().cloned());
        let heap = BinomialHeap {
            trees: Arc::new(trees),
            len: self.len + other.len,
        };

        #[cfg(debug_assertions)]
        heap.debug_check_roots();

        heap
    }

    /// Remove one occurrence of the minimum, returning the new heap - O(log n)
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap is empty.
    pub fn delete_min(&self) -> Result<Self, HeapError> {
        let mut rest = self.clone();
        rest.take_min().ok_or(HeapError::EmptyHeap)?;
        Ok(rest)
    }

    /// Remove the minimum, returning it along with the remaining heap
    pub fn pop_min(&self) -> Option<(T, Self)> {
        let mut rest = self.clone();
        let min = rest.take_min()?;
        Some((min, rest))
    }

    /// Push an element (mutable version for convenience)
    ///
    /// Rebinds `self` to the heap `insert` would return. Other clones of the
    /// heap are not affected.
    pub fn push(&mut self, item: T) {
        *self = self.insert(item);
    }

    /// Pop the minimum element (mutable version for convenience)
    ///
    /// Other clones of the heap are not affected.
    pub fn pop(&mut self) -> Option<T> {
        self.take_min()
    }

    /// Consume the heap, returning its elements in ascending order
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter().collect()
    }

    /// Remove the minimum from this heap value
    ///
    /// Trees and values only referenced by this heap are moved rather than
    /// cloned; anything shared with another version is copied on write.
    fn take_min(&mut self) -> Option<T> {
        let index = self.min_index()?;

        let trees = Arc::make_mut(&mut self.trees);
        let min_tree = trees.remove(index);
        let rank = min_tree.rank();
        let (min, children) = min_tree.into_parts();

        // Children are in descending rank order; meld wants ascending
        let rest = std::mem::take(trees);
        *trees = merge_forests(children.into_iter().rev(), rest);
        self.len -= 1;

        trace!(rank, len = self.len, "removed minimum tree");

        #[cfg(debug_assertions)]
        self.debug_check_roots();

        Some(min)
    }
}

/// Merge two forests given in strictly ascending rank order
///
/// Carry propagation: at each step the lowest rank present among the two
/// heads and the carry is handled. One tree of that rank is emitted as is;
/// two are linked into the new carry; with three, the carry is emitted and
/// the two heads are linked into the next carry.
fn merge_forests<T, L, R>(left: L, right: R) -> Vec<Node<T>>
where
    T: Ord + Clone,
    L: IntoIterator<Item = Node<T>>,
    R: IntoIterator<Item = Node<T>>,
{
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    let mut carry: Option<Node<T>> = None;
    let mut merged = Vec::with_capacity(left.size_hint().0 + right.size_hint().0 + 1);
    let mut links = 0usize;

    loop {
        let lowest = [
            carry.as_ref().map(Node::rank),
            left.peek().map(Node::rank),
            right.peek().map(Node::rank),
        ]
        .into_iter()
        .flatten()
        .min();

        let Some(rank) = lowest else {
            break;
        };

        let from_carry = if carry.as_ref().is_some_and(|tree| tree.rank() == rank) {
            carry.take()
        } else {
            None
        };
        let from_left = left.next_if(|tree| tree.rank() == rank);
        let from_right = right.next_if(|tree| tree.rank() == rank);

        match (from_carry, from_left, from_right) {
            (Some(c), Some(l), Some(r)) => {
                merged.push(c);
                carry = Some(l.link(r));
                links += 1;
            }
            (Some(a), Some(b), None) | (Some(a), None, Some(b)) | (None, Some(a), Some(b)) => {
                carry = Some(a.link(b));
                links += 1;
            }
            (Some(t), None, None) | (None, Some(t), None) | (None, None, Some(t)) => {
                merged.push(t);
            }
            (None, None, None) => unreachable!("lowest rank {rank} taken from no tree"),
        }
    }

    trace!(roots = merged.len(), links, "merged forests");
    merged
}

impl<T> Default for BinomialHeap<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: fmt::Debug> fmt::Debug for BinomialHeap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord + Clone> MeldableHeap<T> for BinomialHeap<T> {
    fn empty() -> Self {
        BinomialHeap::empty()
    }

    fn is_empty(&self) -> bool {
        BinomialHeap::is_empty(self)
    }

    fn len(&self) -> usize {
        BinomialHeap::len(self)
    }

    fn insert(&self, item: T) -> Self {
        BinomialHeap::insert(self, item)
    }

    fn find_min(&self) -> Result<&T, HeapError> {
        BinomialHeap::find_min(self)
    }

    fn delete_min(&self) -> Result<Self, HeapError> {
        BinomialHeap::delete_min(self)
    }

    fn meld(&self, other: &Self) -> Self {
        BinomialHeap::meld(self, other)
    }
}

impl<T: Ord + Clone> FromIterator<T> for BinomialHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = BinomialHeap::empty();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord + Clone> Extend<T> for BinomialHeap<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord + Clone> From<Vec<T>> for BinomialHeap<T> {
    fn from(items: Vec<T>) -> Self {
        items.into_iter().collect()
    }
}

impl<'a, T> IntoIterator for &'a BinomialHeap<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord + Clone> IntoIterator for BinomialHeap<T> {
    type Item = T;
    type IntoIter = IntoSortedIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoSortedIter { heap: self }
    }
}

/// Owning iterator yielding elements in ascending order
///
/// Created by [`BinomialHeap::into_iter`]. Each step is one `delete_min`.
pub struct IntoSortedIter<T> {
    heap: BinomialHeap<T>,
}

impl<T: Ord + Clone> Iterator for IntoSortedIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.heap.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.heap.len(), Some(self.heap.len()))
    }
}

impl<T: Ord + Clone> ExactSizeIterator for IntoSortedIter<T> {}

impl<T: Ord + Clone> FusedIterator for IntoSortedIter<T> {}
