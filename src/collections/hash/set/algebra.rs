//! Free functions building new sets out of existing ones. None of these alias the storage of their
//! inputs: every returned Set is independently owned.

use std::hash::{BuildHasher, Hash};

use super::Set;

/// Creates a shallow copy of `set`. Elements are cloned, and the copy shares nothing with the
/// original, so mutating either never affects the other.
pub fn copy<T, B>(set: &Set<T, B>) -> Set<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Clone,
{
    set.clone()
}

/// Returns a new Set holding every element present in at least one of `sets`.
///
/// The union of no sets is empty, and the union of a single set is a copy of it.
///
/// # Examples
/// ```
/// # use sets::{set, union, Set};
/// assert_eq!(union([&set![1, 2], &set![2, 3]]), set![1, 2, 3]);
/// assert_eq!(union(Vec::<&Set<u8>>::new()), set![]);
/// ```
pub fn union<'a, T, B, I>(sets: I) -> Set<T, B>
where
    T: Hash + Eq + Clone + 'a,
    B: BuildHasher + Default + Clone + 'a,
    I: IntoIterator<Item = &'a Set<T, B>>,
{
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return Set::default();
    };

    let mut res = first.clone();
    for set in sets {
        res.extend(set.difference(first).cloned());
    }
    res
}

/// Returns a new Set holding every element present in all of `sets`.
///
/// The intersection of a single set is a copy of it. The intersection of no sets is the empty set
/// rather than a universal one, which can't be represented.
///
/// # Examples
/// ```
/// # use sets::{intersection, set, Set};
/// assert_eq!(intersection([&set![1, 2, 3], &set![2, 3, 4], &set![3, 4, 5]]), set![3]);
/// assert_eq!(intersection(Vec::<&Set<u8>>::new()), set![]);
/// ```
pub fn intersection<'a, T, B, I>(sets: I) -> Set<T, B>
where
    T: Hash + Eq + Clone + 'a,
    B: BuildHasher + Default + Clone + 'a,
    I: IntoIterator<Item = &'a Set<T, B>>,
{
    let mut sets = sets.into_iter();
    let Some(first) = sets.next() else {
        return Set::default();
    };

    let mut res = first.clone();
    for set in sets {
        if res.is_empty() {
            break;
        }
        res.retain(|item| set.contains(item));
    }
    res
}

/// Returns a new Set holding the elements of `a` which are absent from `b`. (`a \ b`)
///
/// # Examples
/// ```
/// # use sets::{difference, set};
/// assert_eq!(difference(&set![1, 2, 3], &set![2, 3]), set![1]);
/// ```
pub fn difference<T, B>(a: &Set<T, B>, b: &Set<T, B>) -> Set<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Clone,
{
    let mut res = Set::with_cap_and_hasher(a.len(), a.hasher().clone());
    res.extend(a.difference(b).cloned());
    res
}
