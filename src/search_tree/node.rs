/// A node of a search tree.
///
/// Created by the search tree internally and only publicly exposed so that tree storages' generic arguments could be specified.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Node<T> {
    pub(super) value: T,
    pub(super) left: Option<usize>,
    pub(super) right: Option<usize>,
}
impl<T> Node<T> {
    /// Creates a childless node holding the specified value.
    ///
    /// Insertion only ever attaches fresh leaves; the node grows children later by having its link slots filled in by the owning tree.
    #[inline(always)]
    pub(crate) fn leaf(value: T) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }
}
