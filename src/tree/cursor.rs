//! Cursors: a position paired with the tree it belongs to.

use super::engine::RedBlackTree;
use super::position::Position;

/// A read-only cursor over a [`RedBlackTree`].
///
/// The cursor may rest on an element or on [`Position::END`]. Moving forward
/// past the last element lands on the end; moving backward from the end stays
/// there (see [`RedBlackTree::predecessor`]).
///
/// # Examples
///
/// ```rust
/// use rbcontainers::tree::RedBlackTree;
///
/// let tree: RedBlackTree<i32, &str> = [(1, "a"), (2, "b")].into();
/// let mut cursor = tree.cursor(tree.begin());
/// assert_eq!(cursor.key(), Some(&1));
/// cursor.move_next();
/// assert_eq!(cursor.value(), Some(&"b"));
/// cursor.move_next();
/// assert!(cursor.is_end());
/// ```
pub struct Cursor<'a, K, V> {
    tree: &'a RedBlackTree<K, V>,
    position: Position,
}

impl<'a, K, V> Cursor<'a, K, V> {
    pub(super) const fn new(tree: &'a RedBlackTree<K, V>, position: Position) -> Self {
        Self { tree, position }
    }

    /// Returns the position the cursor rests on.
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` if the cursor rests on the end.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Returns the key under the cursor.
    pub fn key(&self) -> Option<&'a K> {
        self.tree.key_at(self.position)
    }

    /// Returns the payload under the cursor.
    pub fn value(&self) -> Option<&'a V> {
        self.tree.value_at(self.position)
    }

    /// Returns the entry under the cursor.
    pub fn entry(&self) -> Option<(&'a K, &'a V)> {
        self.tree.entry_at(self.position)
    }

    /// Moves to the next element in key order.
    pub fn move_next(&mut self) {
        self.position = self.tree.successor(self.position);
    }

    /// Moves to the previous element in key order.
    pub fn move_prev(&mut self) {
        self.position = self.tree.predecessor(self.position);
    }
}

impl<K, V> Clone for Cursor<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Cursor<'_, K, V> {}

/// A cursor that can modify the tree it walks.
///
/// # Examples
///
/// ```rust
/// use rbcontainers::tree::RedBlackTree;
///
/// let mut tree: RedBlackTree<i32, i32> = (1..=6).map(|key| (key, key)).collect();
/// let start = tree.begin();
/// let mut cursor = tree.cursor_mut(start);
/// while !cursor.is_end() {
///     if cursor.key().is_some_and(|key| key % 2 == 0) {
///         cursor.remove_current();
///     } else {
///         cursor.move_next();
///     }
/// }
///
/// let keys: Vec<i32> = tree.iter().map(|(key, _)| *key).collect();
/// assert_eq!(keys, vec![1, 3, 5]);
/// ```
pub struct CursorMut<'a, K, V> {
    tree: &'a mut RedBlackTree<K, V>,
    position: Position,
}

impl<'a, K, V> CursorMut<'a, K, V> {
    pub(super) const fn new(tree: &'a mut RedBlackTree<K, V>, position: Position) -> Self {
        Self { tree, position }
    }

    /// Returns the position the cursor rests on.
    #[inline]
    pub const fn position(&self) -> Position {
        self.position
    }

    /// Returns `true` if the cursor rests on the end.
    #[inline]
    pub const fn is_end(&self) -> bool {
        self.position.is_end()
    }

    /// Returns the key under the cursor.
    pub fn key(&self) -> Option<&K> {
        self.tree.key_at(self.position)
    }

    /// Returns the payload under the cursor.
    pub fn value(&self) -> Option<&V> {
        self.tree.value_at(self.position)
    }

    /// Returns the entry under the cursor.
    pub fn entry(&self) -> Option<(&K, &V)> {
        self.tree.entry_at(self.position)
    }

    /// Returns the payload under the cursor mutably.
    pub fn value_mut(&mut self) -> Option<&mut V> {
        self.tree.value_at_mut(self.position)
    }

    /// Returns the key under the cursor mutably.
    ///
    /// The tree does not reorder itself afterwards. Changing the key so that
    /// it no longer sorts between its neighbours breaks lookups; the breakage
    /// shows up as [`InvariantViolation::OrderViolation`] from
    /// [`RedBlackTree::validate`].
    ///
    /// [`InvariantViolation::OrderViolation`]: crate::error::InvariantViolation::OrderViolation
    pub fn key_mut(&mut self) -> Option<&mut K> {
        self.tree.key_at_mut(self.position)
    }

    /// Moves to the next element in key order.
    pub fn move_next(&mut self) {
        self.position = self.tree.successor(self.position);
    }

    /// Moves to the previous element in key order.
    pub fn move_prev(&mut self) {
        self.position = self.tree.predecessor(self.position);
    }

    /// Removes the element under the cursor and moves to the element that
    /// followed it.
    ///
    /// Returns `None` and stays put if the cursor rests on the end.
    pub fn remove_current(&mut self) -> Option<(K, V)> {
        let (key, value, next) = self.tree.remove_at(self.position)?;
        self.position = next;
        Some((key, value))
    }

    /// Borrows this cursor as a read-only [`Cursor`].
    pub fn as_cursor(&self) -> Cursor<'_, K, V> {
        Cursor::new(&*self.tree, self.position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> RedBlackTree<i32, char> {
        [(2, 'b'), (1, 'a'), (4, 'd'), (3, 'c')].into()
    }

    #[rstest]
    fn test_cursor_walks_both_directions() {
        let tree = sample();
        let mut cursor = tree.cursor(tree.last());
        assert_eq!(cursor.entry(), Some((&4, &'d')));
        cursor.move_prev();
        cursor.move_prev();
        assert_eq!(cursor.key(), Some(&2));
        cursor.move_next();
        assert_eq!(cursor.value(), Some(&'c'));
    }

    #[rstest]
    fn test_cursor_at_end_stays_at_end() {
        let tree = sample();
        let mut cursor = tree.cursor(tree.end());
        assert!(cursor.is_end());
        cursor.move_prev();
        assert!(cursor.is_end());
        assert_eq!(cursor.key(), None);
    }

    #[rstest]
    fn test_cursor_is_copy() {
        let tree = sample();
        let first = tree.cursor(tree.begin());
        let mut second = first;
        second.move_next();
        assert_eq!(first.key(), Some(&1));
        assert_eq!(second.key(), Some(&2));
    }

    #[rstest]
    fn test_cursor_mut_edits_value() {
        let mut tree = sample();
        let position = tree.find(&3);
        let mut cursor = tree.cursor_mut(position);
        if let Some(value) = cursor.value_mut() {
            *value = 'C';
        }
        assert_eq!(cursor.as_cursor().value(), Some(&'C'));
        assert_eq!(tree.get(&3), Some(&'C'));
    }

    #[rstest]
    fn test_remove_current_advances() {
        let mut tree = sample();
        let position = tree.find(&2);
        let mut cursor = tree.cursor_mut(position);
        assert_eq!(cursor.remove_current(), Some((2, 'b')));
        assert_eq!(cursor.key(), Some(&3));
        assert_eq!(tree.len(), 3);
        assert!(tree.validate().is_ok());
    }

    #[rstest]
    fn test_remove_current_at_end_is_none() {
        let mut tree = sample();
        let mut cursor = tree.cursor_mut(Position::END);
        assert_eq!(cursor.remove_current(), None);
        assert!(cursor.is_end());
        assert_eq!(tree.len(), 4);
    }

    #[rstest]
    fn test_remove_every_element_through_cursor() {
        let mut tree: RedBlackTree<i32, ()> = (0..64).map(|key| (key, ())).collect();
        let start = tree.begin();
        let mut cursor = tree.cursor_mut(start);
        let mut removed = 0;
        while cursor.remove_current().is_some() {
            removed += 1;
        }
        assert_eq!(removed, 64);
        assert!(tree.is_empty());
    }

    #[rstest]
    fn test_key_mut_out_of_order_is_detected() {
        let mut tree = sample();
        let position = tree.begin();
        let mut cursor = tree.cursor_mut(position);
        if let Some(key) = cursor.key_mut() {
            *key = 10;
        }
        assert_eq!(
            tree.validate(),
            Err(crate::error::InvariantViolation::OrderViolation)
        );
    }
}
