use crate::{
    storage::{ListStorage, DefaultStorage},
    strategy::{SortOrder, Equivalence},
};
use super::{SearchTree, Node};

/// A reference to a node in a search tree.
///
/// Since this type does not point to the node directly, but rather the tree the node is in and the index of the node in the arena, it can be used to walk the structure of the tree.
#[derive(Debug)]
pub struct NodeRef<'a, T, O, E, S = DefaultStorage<Node<T>>>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    tree: &'a SearchTree<T, O, E, S>,
    index: usize,
}
impl<'a, T, O, E, S> NodeRef<'a, T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    /// Creates a new `NodeRef` pointing to the specified index in the arena, or `None` if it's out of bounds.
    #[inline]
    pub fn new_raw(tree: &'a SearchTree<T, O, E, S>, index: usize) -> Option<Self> {
        if tree.storage.len() > index {
            Some(unsafe {
                // SAFETY: we just did a bounds check
                Self::new_raw_unchecked(tree, index)
            })
        } else {
            None
        }
    }
    /// Creates a new `NodeRef` pointing to the specified index in the arena without doing bounds checking.
    ///
    /// # Safety
    /// Causes *immediate* undefined behavior if the specified index is out of bounds for the tree's arena.
    #[inline(always)]
    pub unsafe fn new_raw_unchecked(tree: &'a SearchTree<T, O, E, S>, index: usize) -> Self {
        Self { tree, index }
    }
    /// Returns the raw arena index for the node.
    #[inline(always)]
    pub fn raw_index(&self) -> usize {
        self.index
    }
    /// Returns a reference to the value stored in the node.
    #[inline(always)]
    pub fn value(&self) -> &'a T {
        &self.node().value
    }
    /// Returns `true` if the node is a *leaf*, i.e. does not have child nodes; `false` otherwise.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        let node = self.node();
        node.left.is_none() && node.right.is_none()
    }
    /// Returns a reference to the left child, or `None` if there is no left subtree.
    ///
    /// Every value in the left subtree sorts strictly before this node's value.
    pub fn left_child(&self) -> Option<Self> {
        self.node().left.map(|index| unsafe {
            // SAFETY: child links are guaranteed to point at live arena slots; a
            // check to make sure that properly holds is below.
            debug_assert!(
                self.tree.storage.len() > index,
                "\
debug index check failed: tried to reference index {} which is not present in the arena",
                index,
            );
            Self::new_raw_unchecked(self.tree, index)
        })
    }
    /// Returns a reference to the right child, or `None` if there is no right subtree.
    ///
    /// Every value in the right subtree sorts strictly after this node's value.
    pub fn right_child(&self) -> Option<Self> {
        self.node().right.map(|index| unsafe {
            // SAFETY: as above
            debug_assert!(
                self.tree.storage.len() > index,
                "\
debug index check failed: tried to reference index {} which is not present in the arena",
                index,
            );
            Self::new_raw_unchecked(self.tree, index)
        })
    }

    #[inline(always)]
    pub(super) fn node(&self) -> &'a Node<T> {
        unsafe {
            // SAFETY: all existing NodeRefs are guaranteed to not be dangling
            self.tree.storage.get_unchecked(self.index)
        }
    }
}
impl<T, O, E, S> Copy for NodeRef<'_, T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{}
impl<T, O, E, S> Clone for NodeRef<'_, T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    #[inline(always)]
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, O, E, S> PartialEq for NodeRef<'_, T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    /// Two node references are equal iff they point at the same node of the same tree.
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self.tree, other.tree) && self.index == other.index
    }
}
impl<T, O, E, S> Eq for NodeRef<'_, T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{}
