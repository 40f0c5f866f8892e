//! Collection types.
//!
//! At the moment this is only [`hash`], home of the hash-backed [`Set`](hash::Set).

pub mod hash;
