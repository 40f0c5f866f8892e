use std::collections::hash_map::{self, IntoKeys, Keys};
use std::hash::{BuildHasher, Hash};
use std::iter::{Chain, FusedIterator};

use super::Set;

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for Set<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_keys())
    }
}

/// A type for owned iteration over a [`Set`]. Produces values of type `T`.
///
/// See [`Set::into_iter`].
pub struct IntoIter<T: Hash + Eq>(pub(crate) IntoKeys<T, ()>);

impl<T: Hash + Eq> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T: Hash + Eq> ExactSizeIterator for IntoIter<T> {}

impl<T: Hash + Eq> FusedIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a Set<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.keys())
    }
}

/// A type for borrowed iteration over a [`Set`]. Produces values of type `&T`.
///
/// See [`Set::iter`].
pub struct Iter<'a, T: Hash + Eq>(pub(crate) Keys<'a, T, ()>);

impl<'a, T: Hash + Eq> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T: Hash + Eq> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T: Hash + Eq> FusedIterator for Iter<'a, T> {}

impl<'a, T: Hash + Eq> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

/// A draining iterator over a [`Set`]. Produces values of type `T`, emptying the Set.
///
/// See [`Set::drain`].
pub struct Drain<'a, T: Hash + Eq>(pub(crate) hash_map::Drain<'a, T, ()>);

impl<'a, T: Hash + Eq> Iterator for Drain<'a, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(item, ())| item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T: Hash + Eq> ExactSizeIterator for Drain<'a, T> {}

impl<'a, T: Hash + Eq> FusedIterator for Drain<'a, T> {}

/// A lazy iterator over the items of one set which are absent from another.
///
/// See [`Set::difference`].
pub struct Difference<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a Set<T, B>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for Difference<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> FusedIterator for Difference<'a, T, B> {}

/// A lazy iterator over the items in exactly one of two sets.
///
/// See [`Set::symmetric_difference`].
pub struct SymmetricDifference<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Chain<Difference<'a, T, B>, Difference<'a, T, B>>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for SymmetricDifference<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> FusedIterator for SymmetricDifference<'a, T, B> {}

/// A lazy iterator over the items shared by two sets.
///
/// See [`Set::intersection`].
pub struct Intersection<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a Set<T, B>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for Intersection<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next
            && !self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> FusedIterator for Intersection<'a, T, B> {}

/// A lazy iterator over the items in either of two sets, each produced once.
///
/// See [`Set::union`].
pub struct Union<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Chain<Iter<'a, T>, Difference<'a, T, B>>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for Union<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> FusedIterator for Union<'a, T, B> {}
