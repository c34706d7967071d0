//! The red-black tree engine.
//!
//! [`RedBlackTree`] owns every node in a slab arena and links them through
//! indices (`left`, `right` and a non-owning `parent`). All structural work of
//! the crate happens here: insertion with color fixup, deletion with
//! double-black resolution, rotations, node-by-node merge and deep copy.
//!
//! # Invariants
//!
//! After every public operation:
//!
//! 1. Every path from the root to an empty child position has the same number
//!    of black nodes.
//! 2. A red node never has a red parent.
//! 3. The root, if present, is black.
//! 4. In-order traversal yields strictly ascending keys.
//! 5. `len()` equals the number of reachable nodes.
//!
//! [`RedBlackTree::validate`] checks all five.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::mem;

use super::cursor::{Cursor, CursorMut};
use super::iter::{IntoIter, Iter, IterMut};
use super::node::{self, Arena, Color, Node, NodeId, Side};
use super::position::Position;
use crate::error::InvariantViolation;

// =============================================================================
// RedBlackTree Definition
// =============================================================================

/// An ordered associative container backed by a red-black tree.
///
/// Keys are unique and kept in ascending order. Each node carries a payload
/// of type `V`; [`TreeSet`](crate::set::TreeSet) uses `()` and
/// [`TreeMap`](crate::map::TreeMap) uses the mapped type.
///
/// # Time Complexity
///
/// | Operation              | Complexity        |
/// |------------------------|-------------------|
/// | `insert`               | O(log N)          |
/// | `find` / `contains`    | O(log N)          |
/// | `erase` / `remove`     | O(log N)          |
/// | `successor`            | O(log N), amortized O(1) |
/// | `swap`                 | O(1)              |
/// | `merge`                | O(M log(N + M))   |
/// | `clone` / `clear`      | O(N)              |
///
/// # Examples
///
/// ```rust
/// use rbcontainers::tree::RedBlackTree;
///
/// let mut tree = RedBlackTree::new();
/// for key in [10, 5, 15, 3, 8, 12, 18] {
///     tree.insert(key, ());
/// }
/// assert_eq!(tree.erase(&5), 1);
///
/// let keys: Vec<i32> = tree.iter().map(|(key, _)| *key).collect();
/// assert_eq!(keys, vec![3, 8, 10, 12, 15, 18]);
/// assert!(tree.validate().is_ok());
/// ```
pub struct RedBlackTree<K, V> {
    /// Arena owning every node of this tree
    pub(super) nodes: Arena<K, V>,
    /// Root node, if any
    pub(super) root: Option<NodeId>,
    /// Number of entries
    pub(super) length: usize,
}

impl<K, V> RedBlackTree<K, V> {
    /// Creates a new empty tree.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, ()> = RedBlackTree::new();
    /// assert!(tree.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            length: 0,
        }
    }

    /// Returns the number of entries in the tree.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.length
    }

    /// Returns `true` if the tree contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// Returns the largest number of entries a tree of this type could hold.
    ///
    /// This is the number of nodes that fit in the largest allocation the
    /// platform allows.
    #[must_use]
    pub const fn max_size(&self) -> usize {
        let node_size = mem::size_of::<Node<K, V>>();
        let node_size = if node_size == 0 { 1 } else { node_size };
        isize::MAX.unsigned_abs() / node_size
    }

    /// Removes every entry.
    ///
    /// All positions into this tree are invalidated.
    pub fn clear(&mut self) {
        let released = self.length;
        self.nodes.clear();
        self.root = None;
        self.length = 0;
        tracing::debug!(released, "cleared tree");
    }

    /// Exchanges the contents of two trees in O(1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::tree::RedBlackTree;
    ///
    /// let mut first: RedBlackTree<i32, ()> = [(1, ())].into();
    /// let mut second: RedBlackTree<i32, ()> = [(2, ()), (3, ())].into();
    /// first.swap(&mut second);
    /// assert_eq!(first.len(), 2);
    /// assert_eq!(second.len(), 1);
    /// ```
    #[inline]
    pub const fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    // =========================================================================
    // Positions
    // =========================================================================

    /// Returns the position of the smallest key, or [`Position::END`] if the
    /// tree is empty.
    #[must_use]
    pub fn begin(&self) -> Position {
        Position::from_node(
            self.root
                .map(|root| node::descend(&self.nodes, root, Side::Left)),
        )
    }

    /// Returns the end-of-sequence position.
    #[inline]
    #[must_use]
    pub const fn end(&self) -> Position {
        Position::END
    }

    /// Returns the position of the largest key, or [`Position::END`] if the
    /// tree is empty.
    #[must_use]
    pub fn last(&self) -> Position {
        Position::from_node(
            self.root
                .map(|root| node::descend(&self.nodes, root, Side::Right)),
        )
    }

    /// Returns the position of the root node.
    #[inline]
    #[must_use]
    pub const fn root_position(&self) -> Position {
        Position::from_node(self.root)
    }

    /// Resolves a position to a live node of this tree.
    fn resolve(&self, position: Position) -> Option<NodeId> {
        position.node().filter(|&id| self.nodes.contains(id))
    }

    /// Returns the position following `position` in key order.
    ///
    /// The successor of the last element, and of [`Position::END`], is
    /// [`Position::END`].
    #[must_use]
    pub fn successor(&self, position: Position) -> Position {
        Position::from_node(
            self.resolve(position)
                .and_then(|id| node::step(&self.nodes, id, Side::Right)),
        )
    }

    /// Returns the position preceding `position` in key order.
    ///
    /// The predecessor of the first element is [`Position::END`]. Stepping
    /// back from [`Position::END`] is not supported: a position has no root
    /// reference to find the maximum from, so the result stays at
    /// [`Position::END`]. Start from [`last`](Self::last) instead.
    #[must_use]
    pub fn predecessor(&self, position: Position) -> Position {
        Position::from_node(
            self.resolve(position)
                .and_then(|id| node::step(&self.nodes, id, Side::Left)),
        )
    }

    /// Returns the key stored at `position`.
    #[must_use]
    pub fn key_at(&self, position: Position) -> Option<&K> {
        self.resolve(position).map(|id| &self.nodes[id].key)
    }

    /// Returns the payload stored at `position`.
    #[must_use]
    pub fn value_at(&self, position: Position) -> Option<&V> {
        self.resolve(position).map(|id| &self.nodes[id].value)
    }

    /// Returns a mutable reference to the payload stored at `position`.
    pub fn value_at_mut(&mut self, position: Position) -> Option<&mut V> {
        self.resolve(position).map(|id| &mut self.nodes[id].value)
    }

    /// Returns the key mutably. Callers must keep the key's ordering intact.
    pub(super) fn key_at_mut(&mut self, position: Position) -> Option<&mut K> {
        self.resolve(position).map(|id| &mut self.nodes[id].key)
    }

    /// Returns the entry stored at `position`.
    #[must_use]
    pub fn entry_at(&self, position: Position) -> Option<(&K, &V)> {
        self.resolve(position).map(|id| {
            let node = &self.nodes[id];
            (&node.key, &node.value)
        })
    }

    /// Returns the entry with the smallest key.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.entry_at(self.begin())
    }

    /// Returns the entry with the largest key.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.entry_at(self.last())
    }

    // =========================================================================
    // Iteration
    // =========================================================================

    /// Returns an iterator over entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, &str> = [(2, "two"), (1, "one")].into();
    /// let entries: Vec<(&i32, &&str)> = tree.iter().collect();
    /// assert_eq!(entries, vec![(&1, &"one"), (&2, &"two")]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter::new(self)
    }

    /// Returns an iterator over entries in ascending key order with mutable
    /// access to the payloads.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut::new(self)
    }

    /// Returns a read-only cursor at `position`.
    #[must_use]
    pub const fn cursor(&self, position: Position) -> Cursor<'_, K, V> {
        Cursor::new(self, position)
    }

    /// Returns a cursor at `position` that can modify or remove entries.
    pub const fn cursor_mut(&mut self, position: Position) -> CursorMut<'_, K, V> {
        CursorMut::new(self, position)
    }

    // =========================================================================
    // Erasure by Position
    // =========================================================================

    /// Erases the element at `position`.
    ///
    /// Does nothing if `position` is [`Position::END`] or does not designate a
    /// live element.
    pub fn erase_at(&mut self, position: Position) {
        if let Some(id) = self.resolve(position) {
            self.remove_node(id);
        }
    }

    /// Removes the element at `position`, returning it together with the
    /// position of the element that followed it.
    pub(super) fn remove_at(&mut self, position: Position) -> Option<(K, V, Position)> {
        self.resolve(position).map(|id| self.remove_node(id))
    }

    // =========================================================================
    // Structural Helpers
    // =========================================================================

    /// Treats an empty child position as black.
    #[inline]
    fn is_red(&self, id: Option<NodeId>) -> bool {
        id.is_some_and(|id| self.nodes[id].is_red())
    }

    /// Returns which side of `parent` the link to `child` occupies.
    ///
    /// An empty `child` matches an empty left slot first.
    #[inline]
    fn side_of(&self, child: Option<NodeId>, parent: NodeId) -> Side {
        if self.nodes[parent].left == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Puts `replacement` where `old` hangs under its parent (or at the root).
    fn transplant(&mut self, old: NodeId, replacement: Option<NodeId>) {
        let parent = self.nodes[old].parent;
        if let Some(replacement) = replacement {
            self.nodes[replacement].parent = parent;
        }
        match parent {
            None => self.root = replacement,
            Some(parent) => {
                let side = self.side_of(Some(old), parent);
                *self.nodes[parent].child_mut(side) = replacement;
            }
        }
    }

    /// Rotates around `pivot` so that `pivot` moves down toward `side`.
    ///
    /// `rotate(x, Side::Left)` is the classic left rotation: the right child
    /// of `x` takes its place and `x` becomes that child's left child.
    /// In-order key sequence is preserved.
    fn rotate(&mut self, pivot: NodeId, side: Side) {
        let rising_side = side.opposite();
        let Some(rising) = self.nodes[pivot].child(rising_side) else {
            return;
        };

        let inner = self.nodes[rising].child(side);
        *self.nodes[pivot].child_mut(rising_side) = inner;
        if let Some(inner) = inner {
            self.nodes[inner].parent = Some(pivot);
        }

        self.transplant(pivot, Some(rising));
        *self.nodes[rising].child_mut(side) = Some(pivot);
        self.nodes[pivot].parent = Some(rising);
    }

    /// Restores the red-black properties after `node` was linked in red.
    fn fix_after_insert(&mut self, mut node: NodeId) {
        while let Some(parent) = self.nodes[node].parent {
            if !self.nodes[parent].is_red() {
                break;
            }
            // A red parent is never the root.
            let Some(grandparent) = self.nodes[parent].parent else {
                break;
            };
            let parent_side = self.side_of(Some(parent), grandparent);
            let uncle = self.nodes[grandparent].child(parent_side.opposite());

            if let Some(uncle) = uncle.filter(|&uncle| self.nodes[uncle].is_red()) {
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                node = grandparent;
            } else {
                let mut parent = parent;
                if self.side_of(Some(node), parent) != parent_side {
                    // Zig-zag: straighten the line before the outer rotation.
                    self.rotate(parent, parent_side);
                    mem::swap(&mut node, &mut parent);
                }
                self.nodes[parent].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                self.rotate(grandparent, parent_side.opposite());
            }
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }

    /// Unlinks and frees one node, returning its entry and the position of the
    /// element that followed it.
    ///
    /// A node with two children keeps its slot: it receives the entry of its
    /// in-order successor, and the successor's slot is the one released.
    fn remove_node(&mut self, target: NodeId) -> (K, V, Position) {
        let (spliced, next) = match (self.nodes[target].left, self.nodes[target].right) {
            (Some(_), Some(right)) => (
                node::descend(&self.nodes, right, Side::Left),
                Position::at(target),
            ),
            _ => (
                target,
                Position::from_node(node::step(&self.nodes, target, Side::Right)),
            ),
        };

        let child = self.nodes[spliced].left.or(self.nodes[spliced].right);
        let parent = self.nodes[spliced].parent;
        self.transplant(spliced, child);

        let removed = self.nodes.remove(spliced);
        self.length -= 1;

        let (key, value) = if spliced == target {
            (removed.key, removed.value)
        } else {
            tracing::trace!(target_node = target, successor = spliced, "moved successor entry");
            let slot = &mut self.nodes[target];
            (
                mem::replace(&mut slot.key, removed.key),
                mem::replace(&mut slot.value, removed.value),
            )
        };

        if removed.color == Color::Black {
            self.fix_after_remove(child, parent);
        }

        (key, value, next)
    }

    /// Resolves the double-black left at `current` (possibly an empty
    /// position under `parent`) after a black node was spliced out.
    fn fix_after_remove(&mut self, mut current: Option<NodeId>, mut parent: Option<NodeId>) {
        while current != self.root && !self.is_red(current) {
            let Some(above) = parent else {
                break;
            };
            let side = self.side_of(current, above);
            let far = side.opposite();
            // The double-black side is one black short, so the sibling exists.
            let Some(mut sibling) = self.nodes[above].child(far) else {
                break;
            };

            if self.nodes[sibling].is_red() {
                self.nodes[sibling].color = Color::Black;
                self.nodes[above].color = Color::Red;
                self.rotate(above, side);
                sibling = match self.nodes[above].child(far) {
                    Some(sibling) => sibling,
                    None => break,
                };
            }

            let near_child = self.nodes[sibling].child(side);
            let far_child = self.nodes[sibling].child(far);

            if self.is_red(near_child) || self.is_red(far_child) {
                if !self.is_red(far_child) {
                    if let Some(near_child) = near_child {
                        self.nodes[near_child].color = Color::Black;
                    }
                    self.nodes[sibling].color = Color::Red;
                    self.rotate(sibling, far);
                    sibling = match self.nodes[above].child(far) {
                        Some(sibling) => sibling,
                        None => break,
                    };
                }

                self.nodes[sibling].color = self.nodes[above].color;
                self.nodes[above].color = Color::Black;
                if let Some(far_child) = self.nodes[sibling].child(far) {
                    self.nodes[far_child].color = Color::Black;
                }
                self.rotate(above, side);
                current = self.root;
                parent = None;
            } else {
                self.nodes[sibling].color = Color::Red;
                current = Some(above);
                parent = self.nodes[above].parent;
            }
        }

        if let Some(current) = current {
            self.nodes[current].color = Color::Black;
        }
    }
}

impl<K: Ord, V> RedBlackTree<K, V> {
    /// Inserts a key with its payload.
    ///
    /// Returns the position of the element with this key and whether an
    /// insertion took place. If the key is already present nothing is
    /// modified: the returned position designates the existing element, the
    /// flag is `false`, and `key` and `value` are dropped.
    ///
    /// # Complexity
    ///
    /// O(log N)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::tree::RedBlackTree;
    ///
    /// let mut tree = RedBlackTree::new();
    /// let (_, inserted) = tree.insert(1, "one");
    /// assert!(inserted);
    ///
    /// let (position, inserted) = tree.insert(1, "uno");
    /// assert!(!inserted);
    /// assert_eq!(tree.value_at(position), Some(&"one"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> (Position, bool) {
        let (id, inserted) = self.insert_node(key, value);
        (Position::at(id), inserted)
    }

    /// Returns the payload stored under `key`, first inserting `default()`
    /// if the key is absent.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::tree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<&str, Vec<i32>> = RedBlackTree::new();
    /// tree.get_or_insert_with("even", Vec::new).push(2);
    /// tree.get_or_insert_with("even", Vec::new).push(4);
    /// assert_eq!(tree.get("even"), Some(&vec![2, 4]));
    /// ```
    pub fn get_or_insert_with<F>(&mut self, key: K, default: F) -> &mut V
    where
        F: FnOnce() -> V,
    {
        let id = match self.search(&key) {
            Some(id) => id,
            None => self.insert_node(key, default()).0,
        };
        &mut self.nodes[id].value
    }

    /// Links a new red node for `key`, or reports the existing one.
    fn insert_node(&mut self, key: K, value: V) -> (NodeId, bool) {
        let mut parent = None;
        let mut side = Side::Left;
        let mut current = self.root;

        while let Some(id) = current {
            let node = &self.nodes[id];
            side = match key.cmp(&node.key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => return (id, false),
            };
            parent = Some(id);
            current = node.child(side);
        }

        let id = self.nodes.insert(Node::new_red(key, value, parent));
        match parent {
            None => self.root = Some(id),
            Some(parent) => *self.nodes[parent].child_mut(side) = Some(id),
        }
        self.length += 1;
        self.fix_after_insert(id);

        (id, true)
    }

    /// Descends from the root by comparison.
    fn search<Q>(&self, key: &Q) -> Option<NodeId>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut current = self.root;
        while let Some(id) = current {
            let node = &self.nodes[id];
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Returns the position of `key`, or [`Position::END`] if it is absent.
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Position
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        Position::from_node(self.search(key))
    }

    /// Returns `true` if the tree contains `key`.
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).is_some()
    }

    /// Returns a reference to the payload stored under `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(|id| &self.nodes[id].value)
    }

    /// Returns a mutable reference to the payload stored under `key`.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(|id| &mut self.nodes[id].value)
    }

    /// Returns the stored key and payload for `key`.
    #[must_use]
    pub fn get_key_value<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(|id| {
            let node = &self.nodes[id];
            (&node.key, &node.value)
        })
    }

    /// Erases `key`, returning the number of elements removed (0 or 1).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::tree::RedBlackTree;
    ///
    /// let mut tree: RedBlackTree<i32, ()> = [(1, ()), (2, ())].into();
    /// assert_eq!(tree.erase(&1), 1);
    /// assert_eq!(tree.erase(&1), 0);
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        usize::from(self.remove_entry(key).is_some())
    }

    /// Removes `key`, returning its payload.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_entry(key).map(|(_, value)| value)
    }

    /// Removes `key`, returning the stored key and payload.
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.search(key).map(|id| {
            let (key, value, _) = self.remove_node(id);
            (key, value)
        })
    }

    /// Moves every entry of `other` into this tree.
    ///
    /// If this tree is empty it takes over `other`'s nodes wholesale.
    /// Otherwise each entry of `other` is reinserted one at a time through
    /// [`insert`](Self::insert); an entry whose key already exists here is
    /// dropped. `other` is always left empty.
    ///
    /// # Complexity
    ///
    /// O(1) when this tree is empty, O(M log(N + M)) otherwise.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::tree::RedBlackTree;
    ///
    /// let mut first: RedBlackTree<i32, &str> = [(1, "a"), (2, "b")].into();
    /// let mut second: RedBlackTree<i32, &str> = [(2, "B"), (3, "c")].into();
    /// first.merge(&mut second);
    ///
    /// assert_eq!(first.len(), 3);
    /// assert_eq!(first.get(&2), Some(&"b"));
    /// assert!(second.is_empty());
    /// ```
    pub fn merge(&mut self, other: &mut Self) {
        if self.is_empty() {
            self.swap(other);
            tracing::debug!(moved = self.length, "merged into empty tree");
            return;
        }

        let incoming = other.length;
        let mut source = mem::take(&mut other.nodes);
        let mut pending: Vec<NodeId> = other.root.take().into_iter().collect();
        other.length = 0;

        let mut discarded = 0_usize;
        while let Some(id) = pending.pop() {
            let node = source.remove(id);
            pending.extend(node.right);
            pending.extend(node.left);
            let (_, inserted) = self.insert(node.key, node.value);
            if !inserted {
                discarded += 1;
            }
        }

        tracing::debug!(incoming, discarded, "merged tree");
    }

    /// Checks every red-black invariant and the parent links.
    ///
    /// Returns the black height of the tree (the number of black nodes on any
    /// root-to-leaf path, root included; 0 for an empty tree).
    ///
    /// # Errors
    ///
    /// Returns the first [`InvariantViolation`] found.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, ()> = (0..100).map(|key| (key, ())).collect();
    /// assert!(tree.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            return if self.length == 0 && self.nodes.is_empty() {
                Ok(0)
            } else {
                Err(InvariantViolation::SizeMismatch {
                    recorded: self.length,
                    reachable: 0,
                })
            };
        };

        let root_node = self
            .nodes
            .get(root)
            .ok_or(InvariantViolation::DanglingLink)?;
        if root_node.parent.is_some() {
            return Err(InvariantViolation::BrokenParentLink);
        }
        if root_node.is_red() {
            return Err(InvariantViolation::RedRoot);
        }

        let mut black_height = None;
        let mut reachable = 0_usize;
        let mut pending = vec![(root, 1_usize)];

        while let Some((id, blacks)) = pending.pop() {
            reachable += 1;
            if reachable > self.nodes.len() {
                return Err(InvariantViolation::SizeMismatch {
                    recorded: self.length,
                    reachable,
                });
            }
            let node = &self.nodes[id];

            for side in [Side::Left, Side::Right] {
                let Some(child_id) = node.child(side) else {
                    match black_height {
                        None => black_height = Some(blacks),
                        Some(expected) if expected != blacks => {
                            return Err(InvariantViolation::BlackHeightMismatch {
                                expected,
                                found: blacks,
                            });
                        }
                        Some(_) => {}
                    }
                    continue;
                };

                let child = self
                    .nodes
                    .get(child_id)
                    .ok_or(InvariantViolation::DanglingLink)?;
                if child.parent != Some(id) {
                    return Err(InvariantViolation::BrokenParentLink);
                }
                if node.is_red() && child.is_red() {
                    return Err(InvariantViolation::RedRedEdge);
                }
                pending.push((child_id, blacks + usize::from(!child.is_red())));
            }
        }

        if reachable != self.length || reachable != self.nodes.len() {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.length,
                reachable,
            });
        }

        let mut keys = self.iter().map(|(key, _)| key);
        if let Some(mut previous) = keys.next() {
            for key in keys {
                if previous >= key {
                    return Err(InvariantViolation::OrderViolation);
                }
                previous = key;
            }
        }

        Ok(black_height.unwrap_or(0))
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for RedBlackTree<K, V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

/// Deep copy: every node is cloned with its color, in pre-order, into a
/// fresh arena. The copy shares nothing with the original.
impl<K: Clone, V: Clone> Clone for RedBlackTree<K, V> {
    fn clone(&self) -> Self {
        let mut nodes = Arena::with_capacity(self.length);
        let root = self.root.map(|source_root| {
            let copy_root = nodes.insert(self.nodes[source_root].detached_copy(None));
            let mut pending = vec![(source_root, copy_root)];

            while let Some((source, copy)) = pending.pop() {
                for side in [Side::Left, Side::Right] {
                    if let Some(source_child) = self.nodes[source].child(side) {
                        let copy_child =
                            nodes.insert(self.nodes[source_child].detached_copy(Some(copy)));
                        *nodes[copy].child_mut(side) = Some(copy_child);
                        pending.push((source_child, copy_child));
                    }
                }
            }
            copy_root
        });

        tracing::trace!(copied = self.length, "deep-copied tree");

        Self {
            nodes,
            root,
            length: self.length,
        }
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for RedBlackTree<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.length == other.length && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for RedBlackTree<K, V> {}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for RedBlackTree<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

/// Entries whose key is already present are dropped; the first one wins.
impl<K: Ord, V> Extend<(K, V)> for RedBlackTree<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for RedBlackTree<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<K: Ord, V, const N: usize> From<[(K, V); N]> for RedBlackTree<K, V> {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K, V> IntoIterator for RedBlackTree<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<'a, K, V> IntoIterator for &'a RedBlackTree<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut RedBlackTree<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

static_assertions::assert_impl_all!(RedBlackTree<i32, String>: Send, Sync);
static_assertions::assert_impl_all!(Cursor<'static, i32, String>: Copy, Send, Sync);

// =============================================================================
// Tests
// =============================================================================
