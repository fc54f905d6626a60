//! Rank type and utilities for binomial tree ranks.
//!
//! The rank of a binomial tree is the number of children of its root. A tree
//! of rank `r` holds exactly `2^r` elements, so the largest rank in a forest
//! of `n` elements is `floor(log₂(n))`.
//!
//! # Why u8?
//!
//! A `u8` rank covers trees of up to 2²⁵⁵ elements, far beyond anything
//! addressable. Storing it in a byte keeps [`Node`](crate::tree::Node)
//! small: the rank sits next to the child pointer without extra padding on
//! most element types.

/// Type alias for the rank of a tree (the number of children of its root).
pub type Rank = u8;

/// Maximum valid rank value.
pub const MAX_RANK: Rank = u8::MAX;

/// Increment a rank after linking two trees, panicking on overflow.
///
/// # Panics
///
/// Panics if `rank == MAX_RANK`. Reaching it would need a forest with more
/// than 2²⁵⁵ elements, so a panic here means a tree was linked with a
/// tree of a different rank.
///
/// # Example
///
/// ```rust
/// use persistent_binomial_heap::rank::{checked_increment, Rank};
///
/// let rank: Rank = 5;
/// assert_eq!(checked_increment(rank), 6);
/// ```
#[inline]
pub fn checked_increment(rank: Rank) -> Rank {
    rank.checked_add(1).expect(
        "rank overflow: a rank-255 tree would hold 2²⁵⁵ elements, \
         so two trees of unequal rank must have been linked",
    )
}

/// Number of elements held by a canonical binomial tree of the given rank.
///
/// Returns `None` when `2^rank` does not fit in a `usize`.
///
/// ```rust
/// use persistent_binomial_heap::rank::tree_size;
///
/// assert_eq!(tree_size(0), Some(1));
/// assert_eq!(tree_size(4), Some(16));
/// assert_eq!(tree_size(200), None);
/// ```
#[inline]
pub fn tree_size(rank: Rank) -> Option<usize> {
    1usize.checked_shl(u32::from(rank))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_increment() {
        assert_eq!(checked_increment(0), 1);
        assert_eq!(checked_increment(127), 128);
        assert_eq!(checked_increment(254), 255);
    }

    #[test]
    #[should_panic(expected = "rank overflow")]
    fn test_checked_increment_overflow() {
        checked_increment(MAX_RANK);
    }

    #[test]
    fn test_tree_size() {
        assert_eq!(tree_size(0), Some(1));
        assert_eq!(tree_size(1), Some(2));
        assert_eq!(tree_size(10), Some(1024));
        assert_eq!(tree_size((usize::BITS - 1) as Rank), Some(1 << (usize::BITS - 1)));
        assert_eq!(tree_size(usize::BITS as Rank), None);
    }

    #[test]
    fn test_rank_is_one_byte() {
        assert_eq!(std::mem::size_of::<Rank>(), 1);
        assert_eq!(MAX_RANK, 255);
    }
}
