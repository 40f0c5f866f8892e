//! A small library providing an unordered, hash-backed [`Set`] and the classical set algebra over
//! it.
//!
//! # Purpose
//! [`Set`] is a thin value type over a map from element to `()`. It covers construction,
//! membership queries, in-place mutation and the usual algebra: union, intersection, difference,
//! subset and equality.
//!
//! The algebra comes in three flavours:
//! - Free functions ([`union`], [`intersection`], [`difference`] and [`copy`]) which take any
//!   number of sets (or exactly two, for [`difference`]) and return a new, independently owned
//!   [`Set`].
//! - Lazy iterators returned by methods such as [`Set::union`], which borrow both operands and
//!   produce references.
//! - Operators (`|`, `&`, `-` and `^`) on references, plus their assigning counterparts.
//!
//! ```
//! use sets::{set, union, intersection, difference};
//!
//! assert_eq!(union([&set![1, 2], &set![2, 3]]), set![1, 2, 3]);
//! assert_eq!(intersection([&set![1, 2, 3], &set![2, 3, 4], &set![3, 4, 5]]), set![3]);
//! assert_eq!(difference(&set![1, 2, 3], &set![2, 3]), set![1]);
//! ```
//!
//! # Error Handling
//! Every operation here is total. The only requirement, that elements implement [`Hash`] and
//! [`Eq`], is a trait bound, so there is nothing left to fail at runtime and no error types exist.
//!
//! # Concurrency
//! A [`Set`] has no internal synchronisation. Mutation takes `&mut self`, so sharing one between
//! threads requires whatever lock the caller chooses to wrap it in.
//!
//! # Features
//! - `fxhash`: adds [`FxSet`](collections::hash::FxSet), a [`Set`] hashed with `rustc-hash`.
//! - `ahash`: adds [`ASet`](collections::hash::ASet), a [`Set`] hashed with `ahash`.
//!
//! [`Hash`]: std::hash::Hash
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod collections;

pub(crate) mod util;

#[doc(inline)]
pub use collections::hash::set::{Set, copy, difference, intersection, union};
