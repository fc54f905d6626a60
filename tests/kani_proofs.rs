//! Kani verification proofs for the heap operations
//!
//! Kani is AWS's model checker for Rust. It checks every execution of a
//! proof harness up to the unwinding bound, so these cover all values of
//! the symbolic inputs rather than a random sample.
//!
//! To run these proofs:
//!   cargo kani --tests

#[cfg(kani)]
use persistent_binomial_heap::BinomialHeap;

/// Proof: insert increments the length and never leaves the heap empty
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_insert_increments_len() {
    let heap: BinomialHeap<u32> = BinomialHeap::empty().insert(kani::any());
    let initial_len = heap.len();

    let grown = heap.insert(kani::any());

    assert!(grown.len() == initial_len + 1);
    assert!(!grown.is_empty());
    // The source heap is unchanged
    assert!(heap.len() == initial_len);
}

/// Proof: the minimum of two inserts is found, then the maximum
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_two_element_ordering() {
    let x1: i32 = kani::any();
    let x2: i32 = kani::any();
    let heap = BinomialHeap::empty().insert(x1).insert(x2);

    assert!(heap.find_min() == Ok(&x1.min(x2)));
    let rest = heap.delete_min().unwrap();
    assert!(rest.find_min() == Ok(&x1.max(x2)));
}

/// Proof: deleting the only element leaves an empty heap
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(6)]
fn verify_single_element_deletion() {
    let heap = BinomialHeap::singleton(kani::any::<i32>());
    assert!(heap.delete_min().unwrap().is_empty());
}

/// Proof: meld keeps every element and the smaller minimum
#[cfg(kani)]
#[kani::proof]
#[kani::unwind(8)]
fn verify_meld_two_by_two() {
    let (a, b, c, d): (i8, i8, i8, i8) = (kani::any(), kani::any(), kani::any(), kani::any());
    let h1 = BinomialHeap::empty().insert(a).insert(b);
    let h2 = BinomialHeap::empty().insert(c).insert(d);

    let merged = h1.meld(&h2);
    assert!(merged.len() == 4);
    assert!(merged.roots().len() == 1);
    assert!(*merged.find_min().unwrap() == a.min(b).min(c.min(d)));
}
