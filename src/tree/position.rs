//! Element handles.

use super::node::NodeId;

/// A handle designating one element of a [`RedBlackTree`](super::RedBlackTree),
/// or the end of the sequence.
///
/// A `Position` is a plain index: it borrows nothing and is resolved against
/// the tree it came from through methods such as
/// [`RedBlackTree::key_at`](super::RedBlackTree::key_at) and
/// [`RedBlackTree::successor`](super::RedBlackTree::successor).
///
/// # Invalidation
///
/// Any structural mutation (insert, erase, clear, merge, swap) invalidates
/// positions obtained before it. A stale position never causes undefined
/// behaviour, but it may resolve to nothing or to a different element.
///
/// # Stepping back from the end
///
/// A position carries no reference to the tree's root, so
/// `predecessor(Position::END)` cannot locate the maximum and stays at
/// [`Position::END`]. Use [`RedBlackTree::last`](super::RedBlackTree::last)
/// to start a backward walk.
///
/// # Examples
///
/// ```rust
/// use rbcontainers::tree::{Position, RedBlackTree};
///
/// let mut tree = RedBlackTree::new();
/// let (position, inserted) = tree.insert(7, "seven");
/// assert!(inserted);
/// assert_eq!(tree.key_at(position), Some(&7));
/// assert_eq!(tree.successor(position), Position::END);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Position(Option<NodeId>);

impl Position {
    /// The end-of-sequence position.
    pub const END: Self = Self(None);

    #[inline]
    pub(crate) const fn at(id: NodeId) -> Self {
        Self(Some(id))
    }

    #[inline]
    pub(crate) const fn from_node(node: Option<NodeId>) -> Self {
        Self(node)
    }

    #[inline]
    pub(crate) const fn node(self) -> Option<NodeId> {
        self.0
    }

    /// Returns `true` if this is the end-of-sequence position.
    #[inline]
    #[must_use]
    pub const fn is_end(self) -> bool {
        self.0.is_none()
    }
}

static_assertions::assert_impl_all!(Position: Copy, Send, Sync, std::hash::Hash);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_end_is_end() {
        assert!(Position::END.is_end());
        assert_eq!(Position::default(), Position::END);
    }

    #[rstest]
    fn test_at_is_not_end() {
        let position = Position::at(3);
        assert!(!position.is_end());
        assert_eq!(position.node(), Some(3));
        assert_eq!(Position::from_node(None), Position::END);
    }
}
