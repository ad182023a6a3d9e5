//! An ordered container over a binary search tree, with duplicate rejection decided by a caller-supplied strategy.
//!
//! The [Wikipedia article] on binary search trees covers their use cases and specifics in more detail.
//!
//! The tree is deliberately *not* self-balancing: the shape of the node graph is exactly the standard BST shape determined by the insertion sequence, and no rotations ever happen. Search, insertion and membership tests are all O(height). Individual nodes cannot be removed — a node lives for as long as its tree does.
//!
//! # Example
//! ```rust
//! use bramble::search_tree::SearchTree;
//!
//! // Collect a sequence into a tree; building fails if the sequence
//! // contains two equivalent values.
//! let tree = SearchTree::<&str>::from_values(
//!     vec!["banana", "apple", "cherry", "date", "elderberry"],
//!     Default::default(),
//!     Default::default(),
//! ).unwrap();
//!
//! assert_eq!(tree.len(), 5);
//! assert!(tree.contains(&"date"));
//!
//! // In-order iteration yields the values in ascending order.
//! let in_order: Vec<&str> = tree.values().copied().collect();
//! assert_eq!(in_order, ["apple", "banana", "cherry", "date", "elderberry"]);
//!
//! // Extract the structural subtree rooted at "cherry" — a deep,
//! // fully independent copy.
//! let sub = tree.subtree(&"cherry");
//! assert_eq!(sub.len(), 3);
//! assert_eq!(sub.render(" "), "cherry date elderberry");
//! ```
//!
//! [Wikipedia article]: https://en.wikipedia.org/wiki/Binary_search_tree " "

use core::fmt::{self, Formatter, Debug, Display};

mod base;
mod iter;
mod node;
mod node_ref;

#[cfg(test)]
mod tests;

pub use base::SearchTree;
pub use iter::{Values, FilteredValues};
pub use node::Node;
pub use node_ref::NodeRef;

/// The error type returned by [`SearchTree::insert`] and every construction path that inserts.
///
/// Duplicate rejection is atomic: when this error is produced, the tree is exactly as it was before the failed call — no node was created and the count did not change.
///
/// [`SearchTree::insert`]: struct.SearchTree.html#method.insert " "
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct DuplicateError<T> {
    /// The rejected value, which was deemed a duplicate when the operation failed and is returned to the caller to avoid dropping it.
    pub value: T,
}
impl<T> DuplicateError<T> {
    /// Extracts the rejected value, which was deemed a duplicate when the operation failed.
    #[allow(clippy::missing_const_for_fn)] // Clippy has no idea what a destructor is
    pub fn into_value(self) -> T {
        self.value
    }
}
impl<T> Display for DuplicateError<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.pad("an equivalent value is already present in the tree")
    }
}
#[cfg(feature = "std")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "std")))]
impl<T: Debug> std::error::Error for DuplicateError<T> {}

/// A search tree which uses a `Vec` as backing storage.
///
/// The default `SearchTree` type already uses this, so this is only provided for explicitness and consistency.
#[cfg(feature = "alloc")]
#[cfg_attr(feature = "doc_cfg", doc(cfg(feature = "alloc")))]
#[allow(unused_qualifications)]
pub type VecSearchTree<T, O = crate::strategy::NaturalOrder, E = crate::strategy::NaturalEquality> =
    SearchTree<T, O, E, alloc::vec::Vec<Node<T>>>;
