//! Hash-based collections.

pub mod set;

#[doc(inline)]
pub use set::Set;

/// A [`Set`] using the `rustc-hash` hasher: fast and deterministic, but not resistant to HashDoS.
#[cfg(feature = "fxhash")]
pub type FxSet<T> = Set<T, rustc_hash::FxBuildHasher>;

/// A [`Set`] using `ahash`'s randomly seeded hasher.
#[cfg(feature = "ahash")]
pub type ASet<T> = Set<T, ahash::RandomState>;
