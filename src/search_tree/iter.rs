use core::iter::FusedIterator;
use crate::{
    storage::{ListStorage, DefaultStorage},
    strategy::{SortOrder, Equivalence},
};
use super::{SearchTree, Node, NodeRef};

/// A forward in-order iterator over the values of a search tree, ascending per the tree's ordering strategy.
///
/// Nodes carry no parent links, so stepping to the successor of a node without a right child re-descends from the root, tracking the nearest ancestor for which the current node lies in the left subtree. Each step is therefore O(depth) and a full traversal is O(n·h) in the worst case (h being the tree height) — a deliberate memory/complexity trade-off over keeping an explicit traversal stack.
///
/// The iterator borrows the tree, so the borrow checker statically rules out insertion while a cursor is live. Cursors are single-pass but cheap to recreate: another call to [`values`] yields a fresh, independent one.
///
/// [`values`]: struct.SearchTree.html#method.values " "
pub struct Values<'a, T, O, E, S = DefaultStorage<Node<T>>>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    tree: &'a SearchTree<T, O, E, S>,
    cursor: Option<NodeRef<'a, T, O, E, S>>,
}
impl<'a, T, O, E, S> Values<'a, T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    /// Creates a cursor positioned at the leftmost (first in-order) node of the tree, or already exhausted if the tree is empty.
    #[inline]
    pub(super) fn new(tree: &'a SearchTree<T, O, E, S>) -> Self {
        Self {
            tree,
            cursor: tree.root().map(leftmost),
        }
    }

    /// Finds the in-order successor of `current`, or `None` if it holds the overall maximum.
    fn successor(&self, current: NodeRef<'a, T, O, E, S>) -> Option<NodeRef<'a, T, O, E, S>> {
        if let Some(right) = current.right_child() {
            return Some(leftmost(right));
        }
        // No right subtree: re-descend from the root towards the current node,
        // remembering the lowest ancestor whose value sorts after it.
        let value = current.value();
        let mut successor = None;
        let mut ancestor = self.tree.root();
        while let Some(node) = ancestor {
            if node == current {
                break;
            }
            if self.tree.order.sorts_before(value, node.value()) {
                successor = Some(node);
                ancestor = node.left_child();
            } else {
                ancestor = node.right_child();
            }
        }
        successor
    }
}
impl<'a, T, O, E, S> Iterator for Values<'a, T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.cursor?;
        self.cursor = self.successor(current);
        Some(current.value())
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.cursor {
            Some(..) => (1, Some(self.tree.len())),
            None => (0, Some(0)),
        }
    }
}
impl<T, O, E, S> FusedIterator for Values<'_, T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{}
impl<T, O, E, S> Clone for Values<'_, T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            tree: self.tree,
            cursor: self.cursor,
        }
    }
}
impl<T, O, E, S> core::fmt::Debug for Values<'_, T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Values")
            .field("cursor", &self.cursor.map(|node| node.raw_index()))
            .finish()
    }
}

/// Descends left from `from` until no left child remains, yielding the first in-order node of that subtree.
fn leftmost<'a, T, O, E, S>(from: NodeRef<'a, T, O, E, S>) -> NodeRef<'a, T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    let mut node = from;
    while let Some(left) = node.left_child() {
        node = left;
    }
    node
}

/// A lazy in-order iterator over the values of a search tree matching a caller-supplied predicate.
///
/// A pure producer: it yields the matching values and performs no output of its own, leaving presentation to whatever consumes it. Finite and restartable — every [`values_where`] call walks the tree afresh.
///
/// [`values_where`]: struct.SearchTree.html#method.values_where " "
pub struct FilteredValues<'a, T, O, E, S, P>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
    P: FnMut(&T) -> bool,
{
    inner: Values<'a, T, O, E, S>,
    predicate: P,
}
impl<'a, T, O, E, S, P> FilteredValues<'a, T, O, E, S, P>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
    P: FnMut(&T) -> bool,
{
    #[inline(always)]
    pub(super) fn new(inner: Values<'a, T, O, E, S>, predicate: P) -> Self {
        Self { inner, predicate }
    }
}
impl<'a, T, O, E, S, P> Iterator for FilteredValues<'a, T, O, E, S, P>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
    P: FnMut(&T) -> bool,
{
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        for value in &mut self.inner {
            if (self.predicate)(value) {
                return Some(value);
            }
        }
        None
    }
    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        // The predicate may reject anything, so only the upper bound survives
        (0, self.inner.size_hint().1)
    }
}
impl<T, O, E, S, P> FusedIterator for FilteredValues<'_, T, O, E, S, P>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
    P: FnMut(&T) -> bool,
{}
impl<T, O, E, S, P> core::fmt::Debug for FilteredValues<'_, T, O, E, S, P>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
    P: FnMut(&T) -> bool,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FilteredValues")
            .field("inner", &self.inner)
            .finish()
    }
}
