//! A module containing [`Set`] and associated types.
//!
//! Some of these types provide owned and borrowed iteration over a set's elements while others are
//! lazy iterators over the result of set operations on two sets. The free functions in this module
//! build new sets out of any number of existing ones.
//!
//! As a note, there is no mutable iterator over the elements of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`Set`] is also re-exported under the parent module and the crate root.

mod algebra;
mod iter;
mod ops;
mod set;

pub use algebra::*;
pub use iter::*;
pub use set::*;
