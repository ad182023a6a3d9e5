use core::fmt::{self, Formatter, Debug, Display};
use crate::{
    storage::{ListStorage, DefaultStorage},
    strategy::{SortOrder, Equivalence, NaturalOrder, NaturalEquality},
};
use super::{Node, NodeRef, Values, FilteredValues, DuplicateError};

/// A binary search tree over values of type `T`, ordered by an `O` strategy and deduplicated by an `E` strategy, with nodes stored in an arena of type `S`.
///
/// Maintains the search tree invariant on every completed mutation: for every node, all values in its left subtree sort strictly before its own value and all values in its right subtree sort strictly after it, per the ordering strategy; no two values in the tree are equivalent per the equivalence strategy. The two strategies are fixed for the tree's whole lifetime and are expected to agree with each other — see the [`strategy`] module for the exact contract.
///
/// [`strategy`]: ../strategy/index.html " "
pub struct SearchTree<T, O = NaturalOrder, E = NaturalEquality, S = DefaultStorage<Node<T>>>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    pub(super) storage: S,
    pub(super) root: Option<usize>,
    pub(super) order: O,
    pub(super) equiv: E,
}

impl<T, S> SearchTree<T, NaturalOrder, NaturalEquality, S>
where
    T: Ord,
    S: ListStorage<Element = Node<T>>,
{
    /// Creates an empty tree ordered by the type's own comparison operators.
    #[inline(always)]
    pub fn new() -> Self {
        Self::with_strategies(NaturalOrder, NaturalEquality)
    }
}

impl<T, O, E, S> SearchTree<T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T>,
    E: Equivalence<T>,
{
    /// Creates an empty tree with the specified ordering and equivalence strategies.
    #[inline]
    pub fn with_strategies(order: O, equiv: E) -> Self {
        Self {
            storage: S::new(),
            root: None,
            order,
            equiv,
        }
    }
    /// Creates an empty tree with the specified strategies, preallocating space for `capacity` nodes.
    #[inline]
    pub fn with_capacity(capacity: usize, order: O, equiv: E) -> Self {
        Self {
            storage: S::with_capacity(capacity),
            root: None,
            order,
            equiv,
        }
    }
    /// Builds a tree by inserting every value of the sequence in order.
    ///
    /// All-or-nothing: if any value is equivalent to one inserted before it, the error is returned and the partially built tree is discarded — a failed bulk build never produces a usable container.
    ///
    /// # Errors
    /// Returns a [`DuplicateError`] carrying the first offending value.
    ///
    /// [`DuplicateError`]: struct.DuplicateError.html " "
    pub fn from_values<I>(values: I, order: O, equiv: E) -> Result<Self, DuplicateError<T>>
    where I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let mut tree = Self::with_capacity(values.size_hint().0, order, equiv);
        for value in values {
            tree.insert(value)?;
        }
        Ok(tree)
    }

    /// Inserts a value, creating exactly one new leaf node.
    ///
    /// The descent compares `value` against each visited node with the equivalence strategy first and branches by the ordering strategy. Failure is atomic: no node is created and the tree is left untouched.
    ///
    /// # Errors
    /// Returns a [`DuplicateError`] giving the value back if an equivalent value is already present.
    ///
    /// [`DuplicateError`]: struct.DuplicateError.html " "
    pub fn insert(&mut self, value: T) -> Result<(), DuplicateError<T>> {
        let mut at = match self.root {
            Some(root) => root,
            None => {
                let root = self.storage.add(Node::leaf(value));
                self.root = Some(root);
                return Ok(());
            }
        };
        loop {
            let (goes_left, next) = {
                let node = unsafe {
                    // SAFETY: the root index and all child links point at live arena slots
                    self.storage.get_unchecked(at)
                };
                if self.equiv.equivalent(&value, &node.value) {
                    return Err(DuplicateError { value });
                }
                let goes_left = self.order.sorts_before(&value, &node.value);
                (goes_left, if goes_left { node.left } else { node.right })
            };
            match next {
                Some(child) => at = child,
                None => {
                    let new = self.storage.add(Node::leaf(value));
                    let node = unsafe {
                        // SAFETY: as above; `add` never moves existing elements
                        self.storage.get_unchecked_mut(at)
                    };
                    if goes_left {
                        node.left = Some(new);
                    } else {
                        node.right = Some(new);
                    }
                    return Ok(());
                }
            }
        }
    }

    /// Returns `true` if a value equivalent to the specified one is present in the tree.
    ///
    /// Read-only and total: never mutates, never fails.
    #[inline]
    pub fn contains(&self, value: &T) -> bool {
        self.locate(value).is_some()
    }

    /// Returns the number of values in the tree.
    ///
    /// O(1): nodes are only ever appended to the arena and only destroyed wholesale, so the arena length *is* the live node count.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.storage.len()
    }
    /// Returns `true` if the tree holds no values, `false` otherwise.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns a reference to the root node, or `None` if the tree is empty.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, T, O, E, S>> {
        self.root.map(|root| unsafe {
            // SAFETY: the root index always points at a live arena slot
            NodeRef::new_raw_unchecked(self, root)
        })
    }

    /// Extracts the structural subtree rooted at the node holding a value equivalent to the specified one.
    ///
    /// The result is a brand-new, fully independent tree: the located node and its entire descendant subgraph are deep-cloned into a fresh arena and the count is that of the clone. If no equivalent value is present, an **empty** tree is returned — unlike duplicate insertion, absence is not an error here.
    pub fn subtree(&self, value: &T) -> Self
    where
        T: Clone,
        O: Clone,
        E: Clone,
    {
        let mut sub = Self::with_strategies(self.order.clone(), self.equiv.clone());
        if let Some(found) = self.locate(value) {
            let root = clone_subgraph(&self.storage, found, &mut sub.storage);
            sub.root = Some(root);
        }
        sub
    }

    /// Returns a forward in-order iterator over the values, ascending per the ordering strategy.
    ///
    /// Every call produces a fresh, independent cursor starting at the leftmost value; see [`Values`] for the traversal cost trade-off.
    ///
    /// [`Values`]: struct.Values.html " "
    #[inline(always)]
    pub fn values(&self) -> Values<'_, T, O, E, S> {
        Values::new(self)
    }
    /// Returns a lazy in-order iterator over the values matching the specified predicate.
    ///
    /// Like [`values`], every call produces a fresh cursor, so filtered traversals are restartable; presentation of the matches is left entirely to the consumer.
    ///
    /// [`values`]: #method.values " "
    #[inline]
    pub fn values_where<P>(&self, predicate: P) -> FilteredValues<'_, T, O, E, S, P>
    where P: FnMut(&T) -> bool,
    {
        FilteredValues::new(self.values(), predicate)
    }

    /// Renders the in-order value sequence into a string, adjacent values separated by `separator`.
    ///
    /// Purely diagnostic: carries no structural (depth or shape) information.
    #[cfg(feature = "alloc")]
    #[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
    pub fn render(&self, separator: &str) -> alloc::string::String
    where T: Display,
    {
        use core::fmt::Write;
        let mut out = alloc::string::String::new();
        for (i, value) in self.values().enumerate() {
            if i != 0 {
                out.push_str(separator);
            }
            write!(out, "{}", value).expect("formatting into a string cannot fail");
        }
        out
    }

    /// Returns the amount of nodes the tree can hold without requiring a memory allocation.
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.storage.capacity()
    }
    /// Reserves capacity for at least `additional` more nodes to be inserted.
    #[inline(always)]
    pub fn reserve(&mut self, additional: usize) {
        self.storage.reserve(additional)
    }
    /// Shrinks the capacity of the arena as much as possible.
    #[inline(always)]
    pub fn shrink_to_fit(&mut self) {
        self.storage.shrink_to_fit()
    }

    /// Descends from the root looking for a value equivalent to the specified one, returning its arena index.
    pub(super) fn locate(&self, value: &T) -> Option<usize> {
        let mut at = self.root?;
        loop {
            let node = unsafe {
                // SAFETY: the root index and all child links point at live arena slots
                self.storage.get_unchecked(at)
            };
            if self.equiv.equivalent(&node.value, value) {
                return Some(at);
            }
            let next = if self.order.sorts_before(value, &node.value) {
                node.left
            } else {
                node.right
            };
            at = next?;
        }
    }
}

/// Recursively deep-clones the subgraph rooted at `from` in `src` into `dst`, returning the clone's root index.
///
/// This is the single deep-copy algorithm behind copy-construction, assignment and subtree extraction. The clone shares no structure with the source; if cloning a value panics, the partially built destination arena is torn down by unwinding and the source is unaffected.
fn clone_subgraph<T, S>(src: &S, from: usize, dst: &mut S) -> usize
where
    T: Clone,
    S: ListStorage<Element = Node<T>>,
{
    let (value, left, right) = {
        let node = unsafe {
            // SAFETY: child links always point at live arena slots
            src.get_unchecked(from)
        };
        (node.value.clone(), node.left, node.right)
    };
    let index = dst.add(Node::leaf(value));
    if let Some(left) = left {
        let cloned = clone_subgraph(src, left, dst);
        unsafe {
            // SAFETY: `index` was just added
            dst.get_unchecked_mut(index)
        }
        .left = Some(cloned);
    }
    if let Some(right) = right {
        let cloned = clone_subgraph(src, right, dst);
        unsafe {
            // SAFETY: as above
            dst.get_unchecked_mut(index)
        }
        .right = Some(cloned);
    }
    index
}

impl<T, O, E, S> Clone for SearchTree<T, O, E, S>
where
    T: Clone,
    O: SortOrder<T> + Clone,
    E: Equivalence<T> + Clone,
    S: ListStorage<Element = Node<T>>,
{
    /// Deep-clones the whole node graph into a fresh arena; the clone inherits the source's strategies and count and shares no structure with it.
    fn clone(&self) -> Self {
        let mut storage = S::with_capacity(self.storage.len());
        let root = self
            .root
            .map(|root| clone_subgraph(&self.storage, root, &mut storage));
        Self {
            storage,
            root,
            order: self.order.clone(),
            equiv: self.equiv.clone(),
        }
    }
    /// Assignment semantics: the destination's old node graph is dropped first, then the source is deep-cloned in its place. Should cloning a value panic midway, the destination is left a valid empty tree rather than holding stale nodes.
    fn clone_from(&mut self, source: &Self) {
        // The old graph is torn down up front, and the clone is built in a
        // local arena installed only once it is complete: an unwind mid-clone
        // drops the local arena and leaves the cleared, empty tree, never
        // rootless nodes still counted by the arena length.
        self.root = None;
        self.storage.clear();
        self.order.clone_from(&source.order);
        self.equiv.clone_from(&source.equiv);
        let mut storage = S::with_capacity(source.storage.len());
        let root = source
            .root
            .map(|root| clone_subgraph(&source.storage, root, &mut storage));
        self.storage = storage;
        self.root = root;
    }
}

impl<T, O, E, S> Default for SearchTree<T, O, E, S>
where
    S: ListStorage<Element = Node<T>>,
    O: SortOrder<T> + Default,
    E: Equivalence<T> + Default,
{
    #[inline(always)]
    fn default() -> Self {
        Self::with_strategies(O::default(), E::default())
    }
}

impl<T, O, E, S> Debug for SearchTree<T, O, E, S>
where
    T: Debug,
    O: SortOrder<T>,
    E: Equivalence<T>,
    S: ListStorage<Element = Node<T>>,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values()).finish()
    }
}

impl<T, O, E, S> Display for SearchTree<T, O, E, S>
where
    T: Display,
    O: SortOrder<T>,
    E: Equivalence<T>,
    S: ListStorage<Element = Node<T>>,
{
    /// Writes the in-order value sequence, space-separated.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values().enumerate() {
            if i != 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}
