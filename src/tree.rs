//! Immutable binomial trees
//!
//! A [`Node`] is one tree of a [`BinomialHeap`](crate::binomial::BinomialHeap)
//! forest: a value and the subtrees hanging below it. Nodes are never
//! modified once built. Linking two trees produces a new root that shares
//! both inputs' subtrees through `Arc`, so every older heap version that
//! still refers to those subtrees keeps seeing exactly what it saw before.
//!
//! # Canonical shape
//!
//! A tree of rank `r`:
//! - has exactly `r` children, stored highest rank first (`r-1, r-2, …, 0`)
//! - holds exactly `2^r` elements
//! - keeps its minimum at the root (heap order)
//!
//! [`Node::check`] verifies all three properties for a whole subtree.

use crate::rank::{checked_increment, Rank};
use std::fmt;
use std::sync::Arc;

/// A structural invariant broken by a tree or forest.
///
/// Produced only by [`Node::check`] and
/// [`BinomialHeap::check_invariants`](crate::binomial::BinomialHeap::check_invariants).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvariantViolation {
    /// A child holds a smaller value than its parent
    HeapOrder,
    /// A node's stored rank differs from its number of children
    RankMismatch { rank: Rank, children: usize },
    /// A child does not have the rank its position requires
    ChildRankOrder { expected: Rank, found: Rank },
    /// Forest roots are not in strictly ascending rank order
    RootRankOrder { previous: Rank, found: Rank },
    /// The cached element count disagrees with the number of nodes
    LengthMismatch { cached: usize, counted: usize },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::HeapOrder => {
                write!(f, "child value is smaller than its parent's value")
            }
            InvariantViolation::RankMismatch { rank, children } => {
                write!(f, "node has rank {rank} but {children} children")
            }
            InvariantViolation::ChildRankOrder { expected, found } => {
                write!(f, "expected child of rank {expected}, found rank {found}")
            }
            InvariantViolation::RootRankOrder { previous, found } => {
                write!(f, "root of rank {found} follows root of rank {previous}")
            }
            InvariantViolation::LengthMismatch { cached, counted } => {
                write!(f, "heap reports {cached} elements but holds {counted}")
            }
        }
    }
}

impl std::error::Error for InvariantViolation {}

#[derive(Clone)]
struct NodeInner<T> {
    value: T,
    rank: Rank,
    /// Highest rank first
    children: Vec<Node<T>>,
}

/// One immutable tree of a binomial forest.
///
/// Cloning a `Node` is O(1): it bumps a reference count and shares the
/// whole subtree.
pub struct Node<T> {
    inner: Arc<NodeInner<T>>,
}

impl<T> Clone for Node<T> {
    fn clone(&self) -> Self {
        Node {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> Node<T> {
    /// Create a rank-0 tree holding a single value
    pub fn singleton(value: T) -> Self {
        Node {
            inner: Arc::new(NodeInner {
                value,
                rank: 0,
                children: Vec::new(),
            }),
        }
    }

    /// The value at the root of this tree (the minimum of the subtree)
    pub fn value(&self) -> &T {
        &self.inner.value
    }

    /// Number of children of the root
    pub fn rank(&self) -> Rank {
        self.inner.rank
    }

    /// Child subtrees, highest rank first
    pub fn children(&self) -> &[Node<T>] {
        &self.inner.children
    }

    /// Returns true if the root has no children
    pub fn is_leaf(&self) -> bool {
        self.inner.children.is_empty()
    }

    /// Number of elements in this subtree, counted by traversal
    pub fn subtree_size(&self) -> usize {
        self.iter().count()
    }

    /// Iterate over every value in this subtree, root first
    ///
    /// The order is depth-first and carries no ordering guarantee beyond
    /// the root being yielded first.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { stack: vec![self] }
    }

    /// Returns true if both nodes are the same shared allocation
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: Ord> Node<T> {
    /// Verify heap order and canonical rank structure for this subtree
    pub fn check(&self) -> Result<(), InvariantViolation> {
        let rank = self.rank();
        let children = self.children();
        if usize::from(rank) != children.len() {
            return Err(InvariantViolation::RankMismatch {
                rank,
                children: children.len(),
            });
        }

        for (expected, child) in (0..rank).rev().zip(children) {
            if child.rank() != expected {
                return Err(InvariantViolation::ChildRankOrder {
                    expected,
                    found: child.rank(),
                });
            }
            if child.value() < self.value() {
                return Err(InvariantViolation::HeapOrder);
            }
            // Depth is bounded by the rank, so recursion stays shallow
            child.check()?;
        }

        Ok(())
    }
}

impl<T: Ord + Clone> Node<T> {
    /// Link two trees of equal rank into one tree of rank + 1
    ///
    /// The tree with the larger root becomes the new first (highest rank)
    /// child of the other. On equal roots `self` stays on top.
    pub(crate) fn link(self, other: Self) -> Self {
        debug_assert_eq!(self.rank(), other.rank(), "linked trees of unequal rank");

        let (winner, loser) = if self.value() <= other.value() {
            (self, other)
        } else {
            (other, self)
        };

        let NodeInner {
            value,
            rank,
            children,
        } = Arc::unwrap_or_clone(winner.inner);

        let mut linked = Vec::with_capacity(children.len() + 1);
        linked.push(loser);
        linked.extend(children);

        Node {
            inner: Arc::new(NodeInner {
                value,
                rank: checked_increment(rank),
                children: linked,
            }),
        }
    }

    /// Split the root off this tree, returning its value and its children
    ///
    /// Children come back highest rank first. The value and child list are
    /// moved out when this is the only reference to the node, and cloned
    /// otherwise.
    pub(crate) fn into_parts(self) -> (T, Vec<Node<T>>) {
        let NodeInner {
            value, children, ..
        } = Arc::unwrap_or_clone(self.inner);
        (value, children)
    }
}

impl<T: fmt::Debug> fmt::Debug for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", self.value())
            .field("rank", &self.rank())
            .field("children", &self.children())
            .finish()
    }
}

/// Depth-first iterator over the values of one or more trees
///
/// Created by [`Node::iter`] and
/// [`BinomialHeap::iter`](crate::binomial::BinomialHeap::iter).
pub struct Iter<'a, T> {
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    /// Iterate over every value of a forest, first root first
    pub(crate) fn forest(roots: &'a [Node<T>]) -> Self {
        Iter {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node.value())
    }
}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}
