//! Ordered map over the red-black tree engine.
//!
//! [`TreeMap`] holds one [`RedBlackTree`] and exposes key/value semantics on
//! top of it: checked access through [`TreeMap::at`], auto-vivifying access
//! through [`TreeMap::get_or_insert_default`], and overwriting insertion
//! through [`TreeMap::insert_or_assign`].
//!
//! # Examples
//!
//! ```rust
//! use rbcontainers::map::TreeMap;
//!
//! let mut map = TreeMap::new();
//! map.insert(2, "two");
//! map.insert(1, "one");
//!
//! assert_eq!(map.at(&1), Ok(&"one"));
//! assert_eq!(map.to_string(), "{1: one, 2: two}");
//! ```

use std::borrow::Borrow;
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::{InvariantViolation, KeyNotFound};
use crate::tree::{Cursor, CursorMut, IntoIter, Iter, IterMut, Position, RedBlackTree};

// =============================================================================
// TreeMap Definition
// =============================================================================

/// An ordered map with unique keys.
///
/// # Time Complexity
///
/// | Operation                  | Complexity |
/// |----------------------------|------------|
/// | `insert` / `insert_or_assign` | O(log N) |
/// | `get` / `at` / `contains_key` | O(log N) |
/// | `erase` / `remove`         | O(log N)   |
/// | `merge`                    | O(M log(N + M)) |
/// | `swap`                     | O(1)       |
///
/// # Examples
///
/// ```rust
/// use rbcontainers::map::TreeMap;
///
/// let mut inventory: TreeMap<&str, u32> = [("apples", 3), ("pears", 1)].into();
/// *inventory.get_or_insert_default("plums") += 4;
///
/// let keys: Vec<&&str> = inventory.keys().collect();
/// assert_eq!(keys, vec![&"apples", &"pears", &"plums"]);
/// ```
pub struct TreeMap<K, V> {
    tree: RedBlackTree<K, V>,
}

impl<K, V> TreeMap<K, V> {
    /// Creates a new empty map.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            tree: RedBlackTree::new(),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the map is empty.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the largest number of entries a map of this type could hold.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        self.tree.max_size()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Exchanges the contents of two maps in O(1).
    #[inline]
    pub const fn swap(&mut self, other: &mut Self) {
        self.tree.swap(&mut other.tree);
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

    /// Returns the entry at `position`.
    #[must_use]
    pub fn entry_at(&self, position: Position) -> Option<(&K, &V)> {
        self.tree.entry_at(position)
    }

    /// Returns the value at `position` mutably.
    pub fn value_at_mut(&mut self, position: Position) -> Option<&mut V> {
        self.tree.value_at_mut(position)
    }

    /// Erases the entry at `position`; a no-op at the end.
    pub fn erase_at(&mut self, position: Position) {
        self.tree.erase_at(position);
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.tree.first_key_value()
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.tree.last_key_value()
    }

    /// Returns an iterator over entries in ascending key order.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        self.tree.iter()
    }

    /// Returns an iterator over entries in ascending key order with mutable
    /// values.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::map::TreeMap;
    ///
    /// let mut map: TreeMap<i32, i32> = [(1, 10), (2, 20)].into();
    /// for (_, value) in map.iter_mut() {
    ///     *value += 1;
    /// }
    /// assert_eq!(map.get(&2), Some(&21));
    /// ```
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.tree.iter_mut()
    }

    /// Returns an iterator over the keys in ascending order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &K> + ExactSizeIterator {
        self.tree.iter().map(|(key, _)| key)
    }

    /// Returns an iterator over the values in ascending key order.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &V> + ExactSizeIterator {
        self.tree.iter().map(|(_, value)| value)
    }

    /// Returns an iterator over mutable values in ascending key order.
    pub fn values_mut(&mut self) -> impl DoubleEndedIterator<Item = &mut V> + ExactSizeIterator {
        self.tree.iter_mut().map(|(_, value)| value)
    }

    /// Returns a read-only cursor at `position`.
    #[must_use]
    pub const fn cursor(&self, position: Position) -> Cursor<'_, K, V> {
        self.tree.cursor(position)
    }

    /// Returns a cursor at `position` that can modify or remove entries.
    pub const fn cursor_mut(&mut self, position: Position) -> CursorMut<'_, K, V> {
        self.tree.cursor_mut(position)
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

impl<K: fmt::Display, V: fmt::Display> TreeMap<K, V> {
    /// Returns a drawing of the tree shape with `{key, value}` labels.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::map::TreeMap;
    ///
    /// let map: TreeMap<i32, &str> = [(1, "one")].into();
    /// assert_eq!(
    ///     map.diagram().to_string(),
    ///     "tree size: 1\nR----{1, one} (black)\n"
    /// );
    /// ```
    pub fn diagram(&self) -> impl fmt::Display + '_ {
        self.tree
            .diagram_with(|key, value| format!("{{{key}, {value}}}"))
    }
}

impl<K: Ord, V> TreeMap<K, V> {
    /// Inserts `value` under `key` if the key is absent.
    ///
    /// Returns the position of the entry with this key and whether an
    /// insertion happened. An existing entry is left untouched.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert!(map.insert(1, "one").1);
    /// assert!(!map.insert(1, "uno").1);
    /// assert_eq!(map.get(&1), Some(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Position, bool) {
        self.tree.insert(key, value)
    }

    /// Inserts `value` under `key`, overwriting the value of an existing
    /// entry in place.
    ///
    /// Returns the position of the entry and `true` if a new entry was
    /// created, `false` if an existing one was overwritten.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::map::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// assert!(map.insert_or_assign(1, "one").1);
    /// assert!(!map.insert_or_assign(1, "uno").1);
    /// assert_eq!(map.get(&1), Some(&"uno"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn insert_or_assign(&mut self, key: K, value: V) -> (Position, bool) {
        let position = self.tree.find(&key);
        match self.tree.value_at_mut(position) {
            Some(slot) => {
                *slot = value;
                (position, false)
            }
            None => self.tree.insert(key, value),
        }
    }

    /// Returns the value under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::map::TreeMap;
    ///
    /// let map: TreeMap<i32, &str> = [(1, "one")].into();
    /// assert_eq!(map.at(&1), Ok(&"one"));
    /// assert_eq!(map.at(&2).unwrap_err().to_string(), "at: key not found");
    /// ```
    pub fn at<Q>(&self, key: &Q) -> Result<&V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(key).ok_or(KeyNotFound::new("at"))
    }

    /// Returns the value under `key` mutably.
    ///
    /// # Errors
    ///
    /// Returns [`KeyNotFound`] if the key is absent.
    pub fn at_mut<Q>(&mut self, key: &Q) -> Result<&mut V, KeyNotFound>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_mut(key).ok_or(KeyNotFound::new("at_mut"))
    }

    /// Indexed access with auto-vivification.
    ///
    /// Returns the value under `key`. If the key is absent, an entry holding
    /// `V::default()` is inserted first and a reference to it is returned, so
    /// the length grows by one. Reading through this method is therefore a
    /// mutation; use [`get`](Self::get) or [`at`](Self::at) to look up
    /// without inserting.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::map::TreeMap;
    ///
    /// let mut map: TreeMap<i32, String> = TreeMap::new();
    /// assert_eq!(map.get_or_insert_default(1), "");
    /// assert_eq!(map.len(), 1);
    /// assert_eq!(map.at(&1), Ok(&String::new()));
    /// ```
    pub fn get_or_insert_default(&mut self, key: K) -> &mut V
    where
        V: Default,
    {
        self.tree.get_or_insert_with(key, V::default)
    }

    /// Returns the value under `key`, inserting `default()` if absent.
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        self.tree.get_or_insert_with(key, default)
    }

    /// Returns the value under `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get(key)
    }

    /// Returns the value under `key` mutably.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_mut(key)
    }

    /// Returns the stored key and value for `key`.
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.get_key_value(key)
    }

    /// Returns `true` if the map contains `key`.
    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
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

    /// Erases `key`, returning the number of entries removed (0 or 1).
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.erase(key)
    }

    /// Removes `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(key)
    }

    /// Removes `key`, returning the stored key and value.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove_entry(key)
    }

    /// Moves every entry of `other` whose key is not present here into this
    /// map. Entries with a key already present are dropped; `other` ends up
    /// empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::map::TreeMap;
    ///
    /// let mut first: TreeMap<i32, char> = [(1, 'a')].into();
    /// let mut second: TreeMap<i32, char> = [(1, 'z'), (2, 'b')].into();
    /// first.merge(&mut second);
    /// assert_eq!(first.to_string(), "{1: a, 2: b}");
    /// assert!(second.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        self.tree.merge(&mut other.tree);
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for TreeMap<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone> Clone for TreeMap<K, V> {
    fn clone(&self) -> Self {
        Self {
            tree: self.tree.clone(),
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for TreeMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.tree == other.tree
    }
}

impl<K: Eq, V: Eq> Eq for TreeMap<K, V> {}

impl<K: Hash, V: Hash> Hash for TreeMap<K, V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for TreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.tree, formatter)
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for TreeMap<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

impl<K: Ord, V> Extend<(K, V)> for TreeMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for TreeMap<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> IntoIterator for TreeMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a TreeMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut TreeMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_indexed_access_vivifies_default() {
        let mut map: TreeMap<i32, i32> = TreeMap::new();
        assert_eq!(*map.get_or_insert_default(1), 0);
        assert_eq!(map.len(), 1);
        assert_eq!(map.at(&1), Ok(&0));
        assert_eq!(map.at(&2), Err(KeyNotFound::new("at")));
    }

    #[rstest]
    fn test_indexed_access_returns_existing() {
        let mut map: TreeMap<i32, i32> = [(1, 7)].into();
        *map.get_or_insert_default(1) += 1;
        assert_eq!(map.get(&1), Some(&8));
        assert_eq!(map.len(), 1);
    }

    #[rstest]
    #[case(1, false, 1)]
    #[case(2, true, 2)]
    fn test_insert_or_assign(#[case] key: i32, #[case] inserted: bool, #[case] length: usize) {
        let mut map: TreeMap<i32, &str> = [(1, "old")].into();
        let (position, was_inserted) = map.insert_or_assign(key, "new");
        assert_eq!(was_inserted, inserted);
        assert_eq!(map.len(), length);
        assert_eq!(map.entry_at(position), Some((&key, &"new")));
    }

    #[rstest]
    fn test_at_mut_reports_operation() {
        let mut map: TreeMap<i32, i32> = TreeMap::new();
        let error = map.at_mut(&3).unwrap_err();
        assert_eq!(error.to_string(), "at_mut: key not found");
    }

    #[rstest]
    fn test_display_and_empty_display() {
        let map: TreeMap<i32, &str> = [(2, "two"), (1, "one")].into();
        assert_eq!(map.to_string(), "{1: one, 2: two}");
        assert_eq!(TreeMap::<i32, i32>::new().to_string(), "{}");
    }

    #[rstest]
    fn test_values_mut() {
        let mut map: TreeMap<i32, i32> = [(1, 1), (2, 2)].into();
        for value in map.values_mut() {
            *value *= 10;
        }
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![10, 20]);
    }

    #[rstest]
    fn test_borrowed_lookup() {
        let mut map: TreeMap<String, i32> = TreeMap::new();
        map.insert("key".to_string(), 1);
        assert!(map.contains_key("key"));
        assert_eq!(map.at("key"), Ok(&1));
        assert_eq!(map.remove("key"), Some(1));
    }
}
