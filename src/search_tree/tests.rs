use super::*;
use crate::strategy::{NaturalOrder, NaturalEquality};
use arrayvec::ArrayVec;
use core::cell::Cell;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::rc::Rc;

fn sample_tree() -> SearchTree<u32> {
    let mut tree = SearchTree::new();
    for x in &[5, 3, 8, 1, 4] {
        tree.insert(*x).expect("sample values are distinct");
    }
    tree
}

#[test]
fn basic_structure() {
    let tree = sample_tree();
    let root = tree.root().expect("tree is not empty");
    assert_eq!(*root.value(), 5);

    let left = root.left_child().expect("5 has a left subtree");
    let right = root.right_child().expect("5 has a right subtree");
    assert_eq!(*left.value(), 3);
    assert_eq!(*right.value(), 8);
    assert!(right.is_leaf());

    assert_eq!(*left.left_child().expect("3 has a left child").value(), 1);
    assert_eq!(*left.right_child().expect("3 has a right child").value(), 4);
}

#[test]
fn empty_tree() {
    let tree = SearchTree::<u32>::new();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert!(!tree.contains(&7));
    assert!(tree.root().is_none());
    assert!(tree.values().next().is_none());
    assert_eq!(tree.render(" "), "");
}

#[test]
fn in_order_integers() {
    let tree = sample_tree();
    let in_order: Vec<u32> = tree.values().copied().collect();
    assert_eq!(in_order, [1, 3, 4, 5, 8]);
    assert_eq!(tree.render(" "), "1 3 4 5 8");
    assert_eq!(tree.to_string(), "1 3 4 5 8");
}

#[test]
fn in_order_strings() {
    let words = vec!["banana", "apple", "cherry", "date", "elderberry"];
    let tree = SearchTree::<&str>::from_values(words, NaturalOrder, NaturalEquality)
        .expect("words are distinct");
    let in_order: Vec<&str> = tree.values().copied().collect();
    assert_eq!(in_order, ["apple", "banana", "cherry", "date", "elderberry"]);
}

#[test]
fn iteration_is_restartable() {
    let tree = sample_tree();
    let first: Vec<u32> = tree.values().copied().collect();
    let second: Vec<u32> = tree.values().copied().collect();
    assert_eq!(first, second);
}

#[test]
fn duplicate_insert_is_atomic() {
    let mut tree = sample_tree();
    let err = tree.insert(8).expect_err("8 is already present");
    assert_eq!(err.into_value(), 8);
    assert_eq!(tree.len(), 5);
    for x in &[5, 3, 8, 1, 4] {
        assert!(tree.contains(x));
    }
    let in_order: Vec<u32> = tree.values().copied().collect();
    assert_eq!(in_order, [1, 3, 4, 5, 8]);
}

#[test]
fn membership_is_monotonic() {
    let mut tree = SearchTree::<u32>::new();
    for x in 0..32 {
        tree.insert(x * 7 % 32).expect("multiples of 7 mod 32 are distinct");
        assert!(tree.contains(&(x * 7 % 32)));
    }
    for x in 0..32 {
        assert!(tree.contains(&x));
    }
    assert_eq!(tree.len(), 32);
}

#[test]
fn from_values_is_all_or_nothing() {
    let err = SearchTree::<u32>::from_values(
        vec![4, 2, 6, 2, 9],
        NaturalOrder,
        NaturalEquality,
    )
    .expect_err("the sequence contains a duplicate pair");
    assert_eq!(err.into_value(), 2);
}

#[test]
fn subtree_of_present_value() {
    let tree = sample_tree();
    let sub = tree.subtree(&3);
    assert_eq!(sub.len(), 3);
    let in_order: Vec<u32> = sub.values().copied().collect();
    assert_eq!(in_order, [1, 3, 4]);
    assert_eq!(*sub.root().expect("subtree is not empty").value(), 3);
}

#[test]
fn subtree_of_absent_value() {
    let tree = sample_tree();
    let sub = tree.subtree(&42);
    assert_eq!(sub.len(), 0);
    assert!(sub.is_empty());
    assert!(sub.values().next().is_none());
}

#[test]
fn subtree_is_independent() {
    let tree = sample_tree();
    let mut sub = tree.subtree(&3);
    sub.insert(2).expect("2 is not in the subtree");
    assert_eq!(sub.len(), 4);
    assert_eq!(tree.len(), 5);
    assert!(!tree.contains(&2));
}

#[test]
fn clone_is_independent() {
    let original = sample_tree();
    let mut copy = original.clone();
    assert_eq!(copy.len(), original.len());

    copy.insert(6).expect("6 is not in the copy");
    assert_eq!(copy.len(), 6);
    assert_eq!(original.len(), 5);
    assert!(!original.contains(&6));

    let original_order: Vec<u32> = original.values().copied().collect();
    assert_eq!(original_order, [1, 3, 4, 5, 8]);
}

#[test]
fn clone_from_replaces_old_contents() {
    let source = sample_tree();
    let mut target = SearchTree::<u32>::new();
    target.insert(100).expect("the target starts empty");
    target.clone_from(&source);
    assert_eq!(target.len(), 5);
    assert!(!target.contains(&100));
    let in_order: Vec<u32> = target.values().copied().collect();
    assert_eq!(in_order, [1, 3, 4, 5, 8]);
}

#[test]
fn closure_strategies() {
    // Descending order with matching equivalence.
    let mut tree = SearchTree::<u32, _, _>::with_strategies(
        |a: &u32, b: &u32| b < a,
        |a: &u32, b: &u32| a == b,
    );
    for x in &[5, 3, 8, 1, 4] {
        tree.insert(*x).expect("sample values are distinct");
    }
    let in_order: Vec<u32> = tree.values().copied().collect();
    assert_eq!(in_order, [8, 5, 4, 3, 1]);
    assert!(tree.insert(4).is_err());
}

#[test]
fn case_insensitive_strategies() {
    let mut tree = SearchTree::<&str, _, _>::with_strategies(
        |a: &&str, b: &&str| a.to_lowercase() < b.to_lowercase(),
        |a: &&str, b: &&str| a.eq_ignore_ascii_case(b),
    );
    tree.insert("Pear").expect("the tree starts empty");
    tree.insert("apple").expect("apple is not equivalent to Pear");
    let err = tree.insert("PEAR").expect_err("PEAR duplicates Pear");
    assert_eq!(err.into_value(), "PEAR");
    assert!(tree.contains(&"pEaR"));
    assert_eq!(tree.len(), 2);
}

#[test]
fn filtered_values() {
    let tree = sample_tree();
    let even: Vec<u32> = tree.values_where(|x| x % 2 == 0).copied().collect();
    assert_eq!(even, [4, 8]);
    // Restartable: a second filtered walk sees the same sequence.
    let even_again: Vec<u32> = tree.values_where(|x| x % 2 == 0).copied().collect();
    assert_eq!(even_again, even);
    let none: Vec<u32> = tree.values_where(|x| *x > 100).copied().collect();
    assert!(none.is_empty());
}

#[test]
fn debug_rendering() {
    let tree = sample_tree();
    assert_eq!(format!("{:?}", tree), "{1, 3, 4, 5, 8}");
    assert_eq!(tree.render(", "), "1, 3, 4, 5, 8");
}

#[test]
fn arrayvec_backed_tree() {
    let mut tree: SearchTree<u32, NaturalOrder, NaturalEquality, ArrayVec<[Node<u32>; 8]>> =
        SearchTree::with_strategies(NaturalOrder, NaturalEquality);
    for x in &[5, 3, 8, 1, 4] {
        tree.insert(*x).expect("sample values are distinct");
    }
    assert_eq!(tree.len(), 5);
    assert_eq!(tree.capacity(), 8);
    let in_order: Vec<u32> = tree.values().copied().collect();
    assert_eq!(in_order, [1, 3, 4, 5, 8]);
}

#[test]
fn single_node_tree() {
    let mut tree = SearchTree::<u32>::new();
    tree.insert(7).expect("the tree starts empty");
    assert_eq!(tree.len(), 1);
    assert!(tree.root().expect("the root exists").is_leaf());
    let in_order: Vec<u32> = tree.values().copied().collect();
    assert_eq!(in_order, [7]);
    let sub = tree.subtree(&7);
    assert_eq!(sub.len(), 1);
}

#[test]
fn node_refs_are_index_addressable() {
    let tree = sample_tree();
    let root = tree.root().expect("tree is not empty");
    let same = NodeRef::new_raw(&tree, root.raw_index()).expect("the root index is in bounds");
    assert_eq!(same, root);
    assert_eq!(*same.value(), 5);
    assert!(NodeRef::new_raw(&tree, tree.len()).is_none());
}

#[test]
fn capacity_plumbing() {
    let mut tree: VecSearchTree<u32> =
        SearchTree::with_capacity(16, NaturalOrder, NaturalEquality);
    assert!(tree.capacity() >= 16);
    tree.insert(1).expect("the tree starts empty");
    tree.reserve(100);
    assert!(tree.capacity() >= 101);
    tree.shrink_to_fit();
    assert_eq!(tree.len(), 1);
}

/// A value whose `Clone` panics once the shared budget runs out, for
/// exercising unwinds in the middle of a deep copy.
#[derive(Debug)]
struct Fused {
    value: u32,
    budget: Rc<Cell<u32>>,
}
impl Fused {
    fn new(value: u32, budget: &Rc<Cell<u32>>) -> Self {
        Self {
            value,
            budget: Rc::clone(budget),
        }
    }
}
impl Clone for Fused {
    fn clone(&self) -> Self {
        let left = self.budget.get();
        if left == 0 {
            panic!("clone budget exhausted");
        }
        self.budget.set(left - 1);
        Self::new(self.value, &self.budget)
    }
}

fn fused_sorts_before(a: &Fused, b: &Fused) -> bool {
    a.value < b.value
}
fn fused_equivalent(a: &Fused, b: &Fused) -> bool {
    a.value == b.value
}
type FusedStrategy = fn(&Fused, &Fused) -> bool;

fn fused_tree(values: &[u32], budget: &Rc<Cell<u32>>) -> SearchTree<Fused, FusedStrategy, FusedStrategy> {
    let mut tree: SearchTree<Fused, FusedStrategy, FusedStrategy> =
        SearchTree::with_strategies(fused_sorts_before, fused_equivalent);
    for x in values {
        tree.insert(Fused::new(*x, budget)).expect("values are distinct");
    }
    tree
}

#[test]
fn clone_from_panic_leaves_an_empty_target() {
    let budget = Rc::new(Cell::new(u32::MAX));
    let source = fused_tree(&[5, 3, 8, 1, 4], &budget);
    let mut target = fused_tree(&[100, 50], &budget);

    // Enough budget to copy two nodes, then the third clone panics.
    budget.set(2);
    let outcome = catch_unwind(AssertUnwindSafe(|| target.clone_from(&source)));
    assert!(outcome.is_err());

    // The target is a coherent empty tree: no root, no values, and an arena
    // holding no leftover nodes.
    assert!(target.is_empty());
    assert_eq!(target.len(), 0);
    assert!(target.root().is_none());
    assert!(target.values().next().is_none());
    assert!(!target.contains(&Fused::new(100, &budget)));

    // The source is untouched.
    assert_eq!(source.len(), 5);
    let in_order: Vec<u32> = source.values().map(|f| f.value).collect();
    assert_eq!(in_order, [1, 3, 4, 5, 8]);

    // And the target remains usable afterwards.
    budget.set(u32::MAX);
    target.insert(Fused::new(9, &budget)).expect("the target is empty again");
    assert_eq!(target.len(), 1);
    assert!(target.contains(&Fused::new(9, &budget)));
}

#[test]
fn cloning_panic_leaves_the_source_intact() {
    let budget = Rc::new(Cell::new(u32::MAX));
    let source = fused_tree(&[5, 3, 8, 1, 4], &budget);

    budget.set(3);
    assert!(catch_unwind(AssertUnwindSafe(|| source.clone())).is_err());

    budget.set(1);
    assert!(catch_unwind(AssertUnwindSafe(|| source.subtree(&Fused::new(3, &budget)))).is_err());

    budget.set(u32::MAX);
    assert_eq!(source.len(), 5);
    let in_order: Vec<u32> = source.values().map(|f| f.value).collect();
    assert_eq!(in_order, [1, 3, 4, 5, 8]);
    let copy = source.clone();
    assert_eq!(copy.len(), 5);
}

#[test]
fn degenerate_chain_iterates_in_order() {
    // Ascending insertion yields a right-leaning chain, the worst case
    // for the root-relative successor search.
    let mut tree = SearchTree::<u32>::new();
    for x in 0..64 {
        tree.insert(x).expect("values are distinct");
    }
    let in_order: Vec<u32> = tree.values().copied().collect();
    let expected: Vec<u32> = (0..64).collect();
    assert_eq!(in_order, expected);
}
