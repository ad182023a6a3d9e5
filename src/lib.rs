//! An arena-allocated binary search tree parameterized by caller-supplied ordering and equivalence strategies.
//!
//! # Overview
//! Bramble implements a binary search tree using a technique called ["arena-allocated trees"][arena tree blog post], described by Ben Lovy. The gist of it is that the tree uses some sort of backing storage to store the nodes, typically a [`Vec`] (or its variants, like [`SmallVec`] or [`ArrayVec`]), and instead of using pointers to link to children, indices into the storage are used instead. This removes all manual lifetime bookkeeping from the recursive tree shape and gives room for supporting configurations without a global memory allocator.
//!
//! The tree itself is the [`SearchTree`] type: an ordered container which rejects duplicate elements. What "ordered" and "duplicate" mean is decided by the caller — a tree carries two strategy objects for its whole lifetime, one implementing [`SortOrder`] and one implementing [`Equivalence`]. For element types with a natural ordering, the zero-sized [`NaturalOrder`] and [`NaturalEquality`] strategies are used by default.
//!
//! ```rust
//! use bramble::SearchTree;
//!
//! let mut tree = SearchTree::<u32>::new();
//! for x in &[5, 3, 8, 1, 4] {
//!     tree.insert(*x).unwrap();
//! }
//! assert!(tree.contains(&4));
//! assert!(tree.insert(8).is_err()); // duplicates are rejected
//! let ascending: Vec<u32> = tree.values().copied().collect();
//! assert_eq!(ascending, [1, 3, 4, 5, 8]);
//! ```
//!
//! # Storage
//! The trait used for defining the "arena" type used is [`ListStorage`], which allows any list-like collection to serve as the backing storage for a tree. Since search trees never remove individual nodes — a node only dies together with its whole tree — a plain growable list suffices and no slot reuse machinery is needed.
//!
//! Several types from both the standard library and external crates already implement `ListStorage` out of the box:
//! - [`Vec`] and [`VecDeque`] — the latter does not use `VecDeque` semantics and is simply provided for convenience
//! - [`ArrayVec`] — fixed capacity, usable without an allocator
//! - [`SmallVec`] — behind the `smallvec` feature flag
//!
//! # Feature flags
//! - `std` (**enabled by default**) - enables the full standard library, disabling `no_std` for the crate. Currently, this only adds an [`Error`] trait implementation for the duplicate-value error type.
//! - `alloc` (**enabled by default**) — adds `ListStorage` trait implementations for standard library containers and enables [`String`] rendering of trees. *This does not require standard library support and will only panic at runtime in `no_std` environments without an allocator.*
//! - `smallvec` — adds a `ListStorage` trait implementation for [`SmallVec`].
//! - `doc_cfg` — documentation-only flag for nightly rustdoc annotations.
//!
//! # Public dependencies
//! - `arrayvec` (**required**) — `^0.5`
//! - `smallvec` (*optional*) — `^1.4`
//!
//! [`SearchTree`]: search_tree/struct.SearchTree.html " "
//! [`SortOrder`]: strategy/trait.SortOrder.html " "
//! [`Equivalence`]: strategy/trait.Equivalence.html " "
//! [`NaturalOrder`]: strategy/struct.NaturalOrder.html " "
//! [`NaturalEquality`]: strategy/struct.NaturalEquality.html " "
//! [`ListStorage`]: storage/trait.ListStorage.html " "
//! [`Error`]: https://doc.rust-lang.org/std/error/trait.Error.html " "
//! [`Vec`]: https://doc.rust-lang.org/std/vec/struct.Vec.html " "
//! [`VecDeque`]: https://doc.rust-lang.org/std/collections/struct.VecDeque.html " "
//! [`String`]: https://doc.rust-lang.org/std/string/struct.String.html " "
//! [`SmallVec`]: https://docs.rs/smallvec/*/smallvec/struct.SmallVec.html " "
//! [`ArrayVec`]: https://docs.rs/arrayvec/*/arrayvec/struct.ArrayVec.html " "
//! [arena tree blog post]: https://dev.to/deciduously/no-more-tears-no-more-knots-arena-allocated-trees-in-rust-44k6 " "

#![warn(
    rust_2018_idioms,
    clippy::cargo,
    clippy::nursery,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    variant_size_differences,
    clippy::cast_lossless,
    clippy::checked_conversions,
    clippy::copy_iterator,
    clippy::expl_impl_clone_on_copy,
    clippy::explicit_iter_loop,
    clippy::explicit_into_iter_loop,
    clippy::map_unwrap_or,
    clippy::implicit_saturating_sub,
    clippy::inefficient_to_string,
    clippy::invalid_upcast_comparisons,
    clippy::items_after_statements,
    clippy::large_stack_arrays,
    clippy::let_unit_value,
    clippy::macro_use_imports,
    clippy::match_same_arms,
    clippy::match_wild_err_arm,
    clippy::match_wildcard_for_single_variants,
    clippy::mut_mut,
    clippy::needless_continue,
    clippy::needless_pass_by_value,
    clippy::option_if_let_else,
    clippy::option_option,
    clippy::range_plus_one,
    clippy::range_minus_one,
    clippy::redundant_closure_for_method_calls,
    clippy::similar_names,
    clippy::single_match_else,
    clippy::string_add_assign,
    clippy::type_repetition_in_bounds,
    clippy::trivially_copy_pass_by_ref,
    clippy::unnested_or_patterns,
    clippy::unused_self,
    clippy::used_underscore_binding,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::decimal_literal_representation,
    clippy::get_unwrap,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unneeded_field_pattern,
    clippy::unwrap_used, // Only .expect() allowed
    clippy::use_debug,
    clippy::verbose_file_reads,
)]
#![deny(
    anonymous_parameters,
    bare_trait_objects,
    clippy::exit,
)]
#![allow(clippy::use_self)] // FIXME reenable when it gets fixed
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(feature = "doc_cfg", feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod storage;
#[doc(no_inline)]
pub use storage::{ListStorage, DefaultStorage};

pub mod strategy;
#[doc(no_inline)]
pub use strategy::{SortOrder, Equivalence, NaturalOrder, NaturalEquality};

pub mod search_tree;
pub use search_tree::{SearchTree, DuplicateError};

/// A prelude for using Bramble, containing the most used types in a renamed form for safe glob-importing.
pub mod prelude {
    #[doc(no_inline)]
    pub use crate::storage::{
        ListStorage as TreeStorage,
        DefaultStorage as DefaultTreeStorage,
    };
    #[doc(no_inline)]
    pub use crate::strategy::{SortOrder, Equivalence, NaturalOrder, NaturalEquality};
    #[doc(no_inline)]
    pub use crate::search_tree::{
        SearchTree,
        DuplicateError,
        NodeRef as SearchTreeNodeRef,
        Values as SearchTreeValues,
    };
}
