//! Caller-supplied comparison strategies which decide how a tree orders its values and what counts as a duplicate.
//!
//! The module is home to the following items:
//! - [`SortOrder`] — the *ordering strategy*, a strict-weak-order relation used to pick branches during search and insertion
//! - [`Equivalence`] — the *equivalence strategy*, used to detect duplicates
//! - [`NaturalOrder`] and [`NaturalEquality`] — zero-sized strategies delegating to [`Ord`] and [`PartialEq`], used by trees unless told otherwise
//!
//! Both strategy traits are also implemented for any `Fn(&T, &T) -> bool` closure, so one-off strategies do not require a newtype:
//!
//! ```rust
//! use bramble::SearchTree;
//!
//! // A tree of strings ordered and deduplicated case-insensitively.
//! let mut tree = SearchTree::<String, _, _>::with_strategies(
//!     |a: &String, b: &String| a.to_lowercase() < b.to_lowercase(),
//!     |a: &String, b: &String| a.eq_ignore_ascii_case(b),
//! );
//! tree.insert("Pear".to_string()).unwrap();
//! assert!(tree.insert("PEAR".to_string()).is_err());
//! ```
//!
//! # Consistency contract
//! A tree built from a `SortOrder`/`Equivalence` pair relies on the two agreeing with each other: two values must be equivalent *if and only if* neither sorts before the other. The contract is never validated at runtime — supplying an inconsistent pair yields unspecified (but memory-safe) membership and ordering results.
//!
//! [`SortOrder`]: trait.SortOrder.html " "
//! [`Equivalence`]: trait.Equivalence.html " "
//! [`NaturalOrder`]: struct.NaturalOrder.html " "
//! [`NaturalEquality`]: struct.NaturalEquality.html " "
//! [`Ord`]: https://doc.rust-lang.org/core/cmp/trait.Ord.html " "
//! [`PartialEq`]: https://doc.rust-lang.org/core/cmp/trait.PartialEq.html " "

/// An ordering strategy over values of type `T`.
///
/// Implementations must behave as a [strict weak ordering]: irreflexive, asymmetric and transitive. The tree consults this relation to choose between the left and the right branch on every step of a descent.
///
/// [strict weak ordering]: https://en.wikipedia.org/wiki/Weak_ordering " "
pub trait SortOrder<T> {
    /// Returns `true` if `lhs` is ordered strictly before `rhs`.
    fn sorts_before(&self, lhs: &T, rhs: &T) -> bool;
}

/// An equivalence strategy over values of type `T`, used to detect duplicates.
///
/// Must agree with the [`SortOrder`] strategy it is paired with: `equivalent(a, b)` must hold exactly when neither `sorts_before(a, b)` nor `sorts_before(b, a)` does. See the [module-level documentation][module] for the full contract.
///
/// [`SortOrder`]: trait.SortOrder.html " "
/// [module]: index.html " "
pub trait Equivalence<T> {
    /// Returns `true` if the two values are equivalent, i.e. one is a duplicate of the other.
    fn equivalent(&self, lhs: &T, rhs: &T) -> bool;
}

impl<T, F> SortOrder<T> for F
where F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn sorts_before(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}
impl<T, F> Equivalence<T> for F
where F: Fn(&T, &T) -> bool,
{
    #[inline(always)]
    fn equivalent(&self, lhs: &T, rhs: &T) -> bool {
        self(lhs, rhs)
    }
}

/// The ordering strategy given by the type's own [`Ord`] implementation.
///
/// [`Ord`]: https://doc.rust-lang.org/core/cmp/trait.Ord.html " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;
impl<T: Ord> SortOrder<T> for NaturalOrder {
    #[inline(always)]
    fn sorts_before(&self, lhs: &T, rhs: &T) -> bool {
        lhs < rhs
    }
}

/// The equivalence strategy given by the type's own [`PartialEq`] implementation.
///
/// Always consistent with [`NaturalOrder`] for types whose `PartialEq` and `Ord` implementations agree, which the standard library requires of well-behaved `Ord` types.
///
/// [`PartialEq`]: https://doc.rust-lang.org/core/cmp/trait.PartialEq.html " "
/// [`NaturalOrder`]: struct.NaturalOrder.html " "
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalEquality;
impl<T: PartialEq> Equivalence<T> for NaturalEquality {
    #[inline(always)]
    fn equivalent(&self, lhs: &T, rhs: &T) -> bool {
        lhs == rhs
    }
}
