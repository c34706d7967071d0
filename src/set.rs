//! Ordered set over the red-black tree engine.
//!
//! [`TreeSet`] holds one [`RedBlackTree`] with a `()` payload and presents
//! membership, ordered enumeration and a `{a, b, c}` rendering.

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

use crate::error::InvariantViolation;
use crate::tree::{self, Cursor, Position, RedBlackTree};

// =============================================================================
// TreeSet Definition
// =============================================================================

/// An ordered set of unique keys.
///
/// # Examples
///
/// ```rust
/// use rbcontainers::set::TreeSet;
///
/// let mut set: TreeSet<i32> = [3, 1, 2].into();
/// assert!(!set.insert(2).1);
/// assert_eq!(set.to_string(), "{1, 2, 3}");
///
/// assert!(set.remove(&1));
/// assert_eq!(set.first(), Some(&2));
/// ```
pub struct TreeSet<K> {
    tree: RedBlackTree<K, ()>,
}

impl<K> TreeSet<K> {
    /// Creates a new empty set.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: RedBlackTree::new(),
        }
    }

    /// Returns the number of keys.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the largest number of keys a set of this type could hold.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Removes every key.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchanges the contents of two sets in O(1).
    #[inline]
    pub const fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
    }

    /// Returns the smallest key.
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.tree.first_key_value().map(|(key, ())| key)
    }

    /// Returns the largest key.
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.tree.last_key_value().map(|(key, ())| key)
    }

    /// Returns the position of the smallest key.
    #[must_use]
    pub fn begin(&self) -> Position {
        self.tree.begin()
    }

    /// Returns the end-of-sequence position.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Position {
        Position::END
    }

    /// Returns the position following `position`.
    #[must_use]
    pub fn successor(&self, position: Position) -> Position {
        self.tree.successor(position)
    }

    /// Returns the position preceding `position`; stays at the end when given
    /// the end.
    #[must_use]
    pub fn predecessor(&self, position: Position) -> Position {
        self.tree.predecessor(position)
    }

    /// Returns the key at `position`.
    #[must_use]
    pub fn key_at(&self, position: Position) -> Option<&K> {
        self.tree.key_at(position)
    }

    /// Erases the key at `position`; a no-op at the end.
    pub fn erase_at(&mut self, position: Position) {
        self.tree.erase_at(position);
    }

    /// Returns an iterator over the keys in ascending order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            inner: self.tree.iter(),
        }
    }

    /// Returns a read-only cursor at `position`.
    #[must_use]
    pub const fn cursor(&self, position: Position) -> Cursor<'_, K, ()> {
        self.tree.cursor(position)
    }

    /// Checks the underlying tree's invariants, returning its black height.
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    pub fn validate(&self) -> Result<usize, InvariantViolation>
    where
        K: Ord,
    {
        self.tree.validate()
    }
}

impl<K: fmt::Display> TreeSet<K> {
    /// Returns a drawing of the tree shape labelled with the keys.
    pub fn diagram(&self) -> impl fmt::Display + '_ {
        self.tree.diagram_with(|key, ()| key.to_string())
    }
}

impl<K: Ord> TreeSet<K> {
    /// Adds `key` to the set.
    ///
    /// Returns the position of the key and `true` if it was not already
    /// present.
    pub fn insert(&mut self, key: K) -> (Position, bool) {
        self.tree.insert(key, ())
    }

    /// Returns `true` if the set contains `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(key)
    }

    /// Returns the position of `key`, or the end if absent.
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Position
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(key)
    }

    /// Returns the stored key equal to `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_key_value(key).map(|(stored, ())| stored)
    }

    /// Erases `key`, returning the number of keys removed (0 or 1).
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.erase(key)
    }

    /// Removes `key`, returning whether it was present.
    pub fn remove<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.erase(key) == 1
    }

    /// Removes and returns the stored key equal to `key`.
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove_entry(key).map(|(stored, ())| stored)
    }

    /// Moves every key of `other` that is not present here into this set;
    /// `other` ends up empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::set::TreeSet;
    ///
    /// let mut first: TreeSet<i32> = [1, 2, 3].into();
    /// let mut second: TreeSet<i32> = [3, 4].into();
    /// first.merge(&mut second);
    /// assert_eq!(first.len(), 4);
    /// assert!(second.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge(&mut other.tree);
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing iterator over the keys of a [`TreeSet`] in ascending order.
pub struct Iter<'a, K> {
    inner: tree::Iter<'a, K, ()>,
}

impl<K> Clone for Iter<'_, K> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, ())| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for Iter<'_, K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, ())| key)
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

/// An owning iterator over the keys of a [`TreeSet`] in ascending order.
pub struct IntoIter<K> {
    inner: tree::IntoIter<K, ()>,
}

impl<K> Iterator for IntoIter<K> {
    type Item = K;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, ())| key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K> DoubleEndedIterator for IntoIter<K> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, ())| key)
    }
}

impl<K> ExactSizeIterator for IntoIter<K> {}

impl<K> FusedIterator for IntoIter<K> {}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K> Default for TreeSet<K> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone> Clone for TreeSet<K> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<K: PartialEq> PartialEq for TreeSet<K> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<K: Eq> Eq for TreeSet<K> {}

impl<K: Hash> Hash for TreeSet<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for key in self {
            key.hash(state);
        }
    }
}

impl<K: fmt::Debug> fmt::Debug for TreeSet<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display> fmt::Display for TreeSet<K> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for key in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}")?;
        }
        write!(formatter, "}}")
    }
}

impl<K: Ord> Extend<K> for TreeSet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        self.tree.extend(iter.into_iter().map(|key| (key, ())));
    }
}

impl<K: Ord> FromIterator<K> for TreeSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: Ord, const N: usize> From<[K; N]> for TreeSet<K> {
    fn from(keys: [K; N]) -> Self {
        keys.into_iter().collect()
    }
}

impl<K> IntoIterator for TreeSet<K> {
    type Item = K;
    type IntoIter = IntoIter<K>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.tree.into_iter(),
        }
    }
}

impl<'a, K> IntoIterator for &'a TreeSet<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Tests
// =============================================================================
