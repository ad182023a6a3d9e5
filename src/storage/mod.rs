//! Utilities for treating the backing storage for trees generically.
//!
//! This module is home for the following items:
//! - [`ListStorage`], the trait for list-like collections serving as node arenas
//! - [`DefaultStorage`], a type definition for the default backing storage used by trees unless a different one is specified; takes different values depending on feature flags
//!
//! Search trees only ever *append* nodes — a node is never removed on its own, only together with the whole tree — so the arena contract is deliberately small: grow at the back, read by index, clear wholesale. Indices handed out by [`add`] stay valid for as long as the storage is not cleared.
//!
//! [`ListStorage`]: trait.ListStorage.html " "
//! [`DefaultStorage`]: type.DefaultStorage.html " "
//! [`add`]: trait.ListStorage.html#method.add " "

#[cfg(feature = "alloc")]
mod alloc_impl;
mod arrayvec_impl;
#[cfg(feature = "smallvec")]
mod smallvec_impl;

/// Trait for list-like containers which can be the backing storage for trees.
///
/// # Safety
/// There's a number of invariants which have to be followed by the container:
/// - The length of the storage cannot be modified in the container when it's borrowed immutably or not borrowed at all;
/// - `new` and `with_capacity` ***must*** return empty storages, i.e. those which have `len() == 0` and `is_empty() == true`;
/// - it should be impossible for the length of the storage to overflow `usize`;
/// - Calling [`get_unchecked`] or [`get_unchecked_mut`] with `self.len() > index` should *not* cause undefined behavior (otherwise, it may or may not — that is implementation specific);
/// - `push` must place the element at index `len()` and increase `len()` by exactly one;
/// - If an element is added at a position, it must be retrieveable in the exact same state as it was inserted until it is cleared or modified using a method which explicitly does so.
///
/// Tree structures may rely on those invariants for safety.
///
/// [`get_unchecked`]: #tymethod.get_unchecked " "
/// [`get_unchecked_mut`]: #tymethod.get_unchecked_mut " "
pub unsafe trait ListStorage: Sized {
    /// The type of values in the container.
    type Element;

    /// Creates an empty collection with the specified capacity.
    ///
    /// # Panics
    /// Collections with a fixed capacity should panic if the specified capacity exceeds their actual one, and are recommended to override the `new` method to use the correct capacity.
    fn with_capacity(capacity: usize) -> Self;
    /// Appends an element to the back of the collection.
    fn push(&mut self, element: Self::Element);
    /// Returns the number of elements in the collection, also referred to as its 'length'.
    fn len(&self) -> usize;
    /// Returns a reference to the specified element in the collection, without doing bounds checking.
    ///
    /// # Safety
    /// If the specified index is out of bounds, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Element;
    /// Returns a *mutable* reference to the specified element in the collection, without doing bounds checking.
    ///
    /// # Safety
    /// If the specified index is out of bounds, a dangling reference will be created, causing *immediate undefined behavior*.
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Element;
    /// Removes every element from the collection, invalidating all previously handed out indices.
    fn clear(&mut self);

    /// Returns a reference to the specified element in the collection, or `None` if the index is out of bounds.
    #[inline]
    fn get(&self, index: usize) -> Option<&Self::Element> {
        if self.len() > index {
            Some(unsafe {
                // SAFETY: we just did a bounds check
                self.get_unchecked(index)
            })
        } else {
            None
        }
    }
    /// Returns a *mutable* reference to the specified element in the collection, or `None` if the index is out of bounds.
    #[inline]
    fn get_mut(&mut self, index: usize) -> Option<&mut Self::Element> {
        if self.len() > index {
            Some(unsafe {
                // SAFETY: we just did a bounds check
                self.get_unchecked_mut(index)
            })
        } else {
            None
        }
    }
    /// Creates a new empty collection. Dynamically-allocated collections created this way do not allocate memory.
    ///
    /// Collections with fixed capacity should override this method to use the correct capacity, as the default implementation calls `Self::with_capacity(0)`.
    #[inline(always)]
    fn new() -> Self {
        Self::with_capacity(0)
    }
    /// Returns `true` if the collection contains no elements, `false` otherwise.
    #[inline(always)]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Adds an element to the collection at the next free index, returning that index. Will never move existing elements around.
    #[inline(always)]
    fn add(&mut self, element: Self::Element) -> usize {
        self.push(element);
        self.len() - 1
    }
    /// Returns the amount of elements the collection can hold without requiring a memory allocation.
    ///
    /// For collections which have a fixed capacity, this should be equal to the length; the default implementation uses exactly that.
    #[inline(always)]
    fn capacity(&self) -> usize {
        self.len()
    }
    /// Reserves capacity for at least additional more elements to be inserted in the given collection. The collection may reserve more space to avoid frequent reallocations. After calling `reserve`, `capacity` will be greater than or equal to `self.len()` + `additional`. Does nothing if capacity is already sufficient.
    ///
    /// For collections which have a fixed capacity, this should first check for the specified amount of elements to reserve for and if it's not zero, either reallocate the collection anew or, if that is not supported, panic. The default implementation does exactly that.
    #[inline(always)]
    fn reserve(&mut self, additional: usize) {
        if self.len() + additional > self.capacity() {
            unimplemented!("this storage type does not support reallocation")
        }
    }
    /// Shrinks the capacity of the collection as much as possible.
    ///
    /// It will drop down as close as possible to the current length, though dynamically allocated collections may not always reallocate exactly as much as it is needed to store all elements and none more.
    ///
    /// The default implementation does nothing.
    #[inline(always)]
    fn shrink_to_fit(&mut self) {}
}

/// The default storage type used by the tree types when a storage type is not provided.
///
/// This is chosen according to the following strategy:
/// - If the `alloc` feature flag is enabled, [`Vec`] is used
/// - If `alloc` is disabled but `smallvec` is enabled, a [`SmallVec`] *with zero-sized backing storage* is used
/// - If both `smallvec` and `alloc` are disabled, an [`ArrayVec`] *with zero-sized backing storage* is used
/// No other storage types are ever used as defaults.
///
/// [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
/// [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
/// [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
pub type DefaultStorage<T> = _DefaultStorage<T>;

#[cfg(feature = "alloc")]
type _DefaultStorage<T> = alloc::vec::Vec<T>;

#[cfg(all(
    feature = "smallvec",
    not(feature = "alloc"),
))]
type _DefaultStorage<T> = smallvec::SmallVec<[T; 0]>;

#[cfg(all(
    not(feature = "alloc"),
    not(feature = "smallvec"),
))]
type _DefaultStorage<T> = arrayvec::ArrayVec<[T; 0]>;
