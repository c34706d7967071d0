//! Iterators over [`RedBlackTree`] entries.

use std::iter::FusedIterator;

use super::engine::RedBlackTree;
use super::node::{self, Arena, Node, NodeId, Side};

// =============================================================================
// Iter
// =============================================================================

/// A borrowing iterator over the entries of a [`RedBlackTree`] in ascending
/// key order.
///
/// Both ends walk the tree's links with the same successor and predecessor
/// steps that positions use.
pub struct Iter<'a, K, V> {
    nodes: &'a Arena<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    pub(super) fn new(tree: &'a RedBlackTree<K, V>) -> Self {
        Self {
            nodes: &tree.nodes,
            front: tree.begin().node(),
            back: tree.last().node(),
            remaining: tree.len(),
        }
    }

    fn entry(&self, id: NodeId) -> (&'a K, &'a V) {
        let nodes: &'a Arena<K, V> = self.nodes;
        let node = &nodes[id];
        (&node.key, &node.value)
    }
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            nodes: self.nodes,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = node::step(self.nodes, id, Side::Right);
        Some(self.entry(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = node::step(self.nodes, id, Side::Left);
        Some(self.entry(id))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

// =============================================================================
// IterMut
// =============================================================================

/// An iterator over the entries of a [`RedBlackTree`] in ascending key order,
/// with mutable access to the payloads.
pub struct IterMut<'a, K, V> {
    entries: std::vec::IntoIter<(&'a K, &'a mut V)>,
}

impl<'a, K, V> IterMut<'a, K, V> {
    pub(super) fn new(tree: &'a mut RedBlackTree<K, V>) -> Self {
        // Rank every live slot by its in-order index, then hand out the
        // arena's disjoint mutable borrows in that order.
        let mut rank = vec![usize::MAX; tree.nodes.capacity()];
        let mut current = tree.begin().node();
        let mut index = 0;
        while let Some(id) = current {
            rank[id] = index;
            index += 1;
            current = node::step(&tree.nodes, id, Side::Right);
        }

        let mut slots: Vec<Option<(&'a K, &'a mut V)>> = (0..index).map(|_| None).collect();
        let nodes: &'a mut Arena<K, V> = &mut tree.nodes;
        for (id, node) in nodes.iter_mut() {
            let Node { key, value, .. } = node;
            if let Some(slot) = rank.get(id).and_then(|&order| slots.get_mut(order)) {
                *slot = Some((&*key, value));
            }
        }

        Self {
            entries: slots.into_iter().flatten().collect::<Vec<_>>().into_iter(),
        }
    }
}

impl<'a, K, V> Iterator for IterMut<'a, K, V> {
    type Item = (&'a K, &'a mut V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IterMut<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IterMut<'_, K, V> {}

impl<K, V> FusedIterator for IterMut<'_, K, V> {}

// =============================================================================
// IntoIter
// =============================================================================

/// An owning iterator over the entries of a [`RedBlackTree`] in ascending key
/// order.
pub struct IntoIter<K, V> {
    entries: std::vec::IntoIter<(K, V)>,
}

impl<K, V> IntoIter<K, V> {
    pub(super) fn new(mut tree: RedBlackTree<K, V>) -> Self {
        let mut order = Vec::with_capacity(tree.len());
        let mut current = tree.begin().node();
        while let Some(id) = current {
            order.push(id);
            current = node::step(&tree.nodes, id, Side::Right);
        }

        let entries: Vec<(K, V)> = order
            .into_iter()
            .map(|id| {
                let node = tree.nodes.remove(id);
                (node.key, node.value)
            })
            .collect();

        Self {
            entries: entries.into_iter(),
        }
    }
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.entries.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entries.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.entries.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}
