use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::{Difference, Drain, Intersection, Iter, SymmetricDifference, Union};
use crate::util::fmt::DebugRaw;

/// An unordered collection of unique elements, relying on the elements implementing [`Hash`] and
/// [`Eq`].
///
/// Internally, a Set is a map from each element to `()`, so membership is decided entirely by the
/// map's keys. Iteration order is unspecified and may differ between two sets with equal contents.
///
/// It is a logic error for an element to be manipulated in a way that changes its hash while it is
/// in a Set. Because of this, Set's API prevents mutable access to its elements.
///
/// A Set has no internal synchronisation. All mutation goes through `&mut self`, and the borrow
/// checker prevents a set from being mutated while it's being iterated over.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Set.
/// - `m`: The number of items in the other Set.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)` |
/// | `remove` | `O(1)` |
/// | `contains` | `O(1)` |
/// | `is_subset` | `O(n)` |
/// | `is_disjoint` | `O(min(n, m))` |
/// | `eq` | `O(n)` |
///
/// \* If the Set doesn't have enough capacity for the new element, `insert` will take `O(n)`.
#[derive(Clone)]
pub struct Set<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Unit values are zero sized, so only the keys take up room.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a new, empty Set. No memory is allocated until the first insertion.
    ///
    /// # Examples
    /// ```
    /// # use sets::Set;
    /// let set: Set<u8> = Set::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn new() -> Set<T> {
        Set {
            inner: HashMap::new(),
        }
    }

    /// Creates a new, empty Set with room for at least `cap` elements before it needs to
    /// reallocate. The capacity is only a hint.
    ///
    /// # Examples
    /// ```
    /// # use sets::Set;
    /// let set: Set<u8> = Set::with_cap(10);
    /// assert!(set.is_empty());
    /// assert!(set.cap() >= 10);
    /// ```
    pub fn with_cap(cap: usize) -> Set<T> {
        Set {
            inner: HashMap::with_capacity(cap),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
    /// Creates a new, empty Set which will use the provided `hasher` to hash its elements.
    pub fn with_hasher(hasher: B) -> Set<T, B> {
        Set {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new, empty Set with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Set<T, B> {
        Set {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of elements in the Set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Set contains no elements.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of elements the Set can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the Set's [`BuildHasher`].
    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Adds `item` to the Set, returning true if it wasn't already present. If an equal element is
    /// already in the Set, it is left untouched and `item` is dropped.
    ///
    /// # Examples
    /// ```
    /// # use sets::Set;
    /// let mut set = Set::new();
    /// assert!(set.insert(1));
    /// assert!(!set.insert(1));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn insert(&mut self, item: T) -> bool {
        // The entry is either vacant or already holds an equal item.
        match self.inner.entry(item) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(());
                true
            },
        }
    }

    /// Removes the element equal to `item` from the Set, returning it if it was present. Removing
    /// an absent element does nothing.
    pub fn remove<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove_entry(item).map(|(item, ())| item)
    }

    /// Returns true if the Set contains an element equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Returns a reference to the element in the Set that is equal to `item`, if any.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get_key_value(item).map(|(item, ())| item)
    }

    /// Reserves capacity for at least `extra` more elements.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Shrinks the capacity of the Set as much as possible.
    pub fn shrink_to_fit(&mut self) {
        self.inner.shrink_to_fit()
    }

    /// Removes all elements from the Set, keeping the allocated memory.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Keeps only the elements for which `pred` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut pred: F) {
        self.inner.retain(|item, ()| pred(item))
    }

    /// Removes every element from the Set, returning them through an owned iterator. The Set keeps
    /// its capacity.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain(self.inner.drain())
    }

    /// Returns a borrowed iterator over all elements of the Set, in no particular order. Each call
    /// creates a new iterator, starting from the beginning.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`.
    /// (`self \ other`)
    pub fn difference<'a>(&'a self, other: &'a Set<T, B>) -> Difference<'a, T, B> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    pub fn symmetric_difference<'a>(
        &'a self,
        other: &'a Set<T, B>,
    ) -> SymmetricDifference<'a, T, B> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`.
    /// (`self ∩ other`)
    pub fn intersection<'a>(&'a self, other: &'a Set<T, B>) -> Intersection<'a, T, B> {
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        Intersection {
            inner: small.iter(),
            other: large,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`.
    /// (`self ∪ other`)
    pub fn union<'a>(&'a self, other: &'a Set<T, B>) -> Union<'a, T, B> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    ///
    /// The empty set is a subset of every set, itself included.
    pub fn is_subset(&self, other: &Set<T, B>) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &Set<T, B>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` have no elements in common.
    pub fn is_disjoint(&self, other: &Set<T, B>) -> bool {
        self.intersection(other).next().is_none()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for Set<T, B> {
    fn default() -> Self {
        Set::with_hasher(B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for Set<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for Set<T, B> {}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    /// Creates a Set holding the distinct values of `value`.
    ///
    /// # Examples
    /// ```
    /// # use sets::Set;
    /// let set = Set::from([1, 2, 2, 3]);
    /// assert_eq!(set.len(), 3);
    /// ```
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for Set<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut set = Set::with_cap_and_hasher(iter.size_hint().0, B::default());

        for item in iter {
            set.insert(item);
        }

        set
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set")
            .field(
                "values",
                &DebugRaw(format!(
                    "{{{}}}",
                    self.iter()
                        .map(|i| format!("{i:?}"))
                        .collect::<Vec<String>>()
                        .join(", ")
                )),
            )
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for Set<T, B> {
    /// Writes the Set as `set{a, b, c}`, with elements in iteration order. An empty Set is written
    /// as `set{}`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "set{{")?;
        for (index, item) in self.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "}}")
    }
}

/// Creates a [`Set`] containing the provided elements, with duplicates collapsed.
///
/// # Examples
/// ```
/// # use sets::{set, Set};
/// let set = set![1, 2, 2, 3];
/// assert_eq!(set.len(), 3);
///
/// let empty: Set<u8> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Set::from([$($item),+])
    };
}
