//! Tree vertices and local stepping between them.
//!
//! Nodes are stored in a [`Slab`] owned by the tree. Child and parent links
//! are slab indices, so a node is owned by the arena alone; the `parent` link
//! is only ever followed for traversal and rebalancing.

use slab::Slab;

/// Index of a node inside the tree's arena.
pub(crate) type NodeId = usize;

/// The arena that owns every node of one tree.
pub(crate) type Arena<K, V> = Slab<Node<K, V>>;

// =============================================================================
// Color and Side
// =============================================================================

/// The color of a red-black tree node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Color {
    Red,
    Black,
}

/// Which child slot of a node a link occupies.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the mirrored side.
    #[inline]
    pub(crate) const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

// =============================================================================
// Node Definition
// =============================================================================

/// A tree vertex: key, payload, color and structural links.
#[derive(Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) color: Color,
    pub(crate) parent: Option<NodeId>,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    /// Creates a new red leaf hanging under `parent`.
    pub(crate) const fn new_red(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            color: Color::Red,
            parent,
            left: None,
            right: None,
        }
    }

    /// Copies key, value and color, with fresh links.
    pub(crate) fn detached_copy(&self, parent: Option<NodeId>) -> Self
    where
        K: Clone,
        V: Clone,
    {
        Self {
            key: self.key.clone(),
            value: self.value.clone(),
            color: self.color,
            parent,
            left: None,
            right: None,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    pub(crate) const fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    #[inline]
    pub(crate) fn is_red(&self) -> bool {
        self.color == Color::Red
    }
}

// =============================================================================
// Local Stepping
// =============================================================================

/// Follows `side` links from `id` until there is none.
///
/// `descend(nodes, id, Side::Left)` is the minimum of the subtree at `id`.
pub(crate) fn descend<K, V>(nodes: &Arena<K, V>, mut id: NodeId, side: Side) -> NodeId {
    while let Some(child) = nodes[id].child(side) {
        id = child;
    }
    id
}

/// Returns the in-order neighbour of `id` in direction `toward`.
///
/// With `Side::Right` this is the successor: the leftmost node of the right
/// subtree if there is one, otherwise the first ancestor reached from its left
/// side. With `Side::Left` it is the predecessor. `None` means the walk ran
/// off the end of the sequence.
pub(crate) fn step<K, V>(nodes: &Arena<K, V>, id: NodeId, toward: Side) -> Option<NodeId> {
    if let Some(child) = nodes[id].child(toward) {
        return Some(descend(nodes, child, toward.opposite()));
    }

    let mut current = id;
    let mut parent = nodes[id].parent;
    while let Some(ancestor) = parent {
        if nodes[ancestor].child(toward) != Some(current) {
            return Some(ancestor);
        }
        current = ancestor;
        parent = nodes[ancestor].parent;
    }
    None
}

// =============================================================================
// Tests
// =============================================================================
