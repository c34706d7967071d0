//! Text rendering of a tree's shape and colors.

use std::fmt;

use super::engine::RedBlackTree;
use super::node::NodeId;

/// A printable drawing of a [`RedBlackTree`], returned by
/// [`RedBlackTree::diagram_with`].
///
/// The first line is `tree size: N` (or `tree is empty`). Each node follows in
/// pre-order on its own line: a right child (and the root) is introduced by
/// `R----`, a left child by `L----`, and every line ends with `(red)` or
/// `(black)`.
pub struct Diagram<'a, K, V, F> {
    tree: &'a RedBlackTree<K, V>,
    label: F,
}

impl<K, V> RedBlackTree<K, V> {
    /// Returns a drawing of the tree, labelling each node with `label`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use rbcontainers::tree::RedBlackTree;
    ///
    /// let tree: RedBlackTree<i32, ()> = [(2, ()), (1, ()), (3, ())].into();
    /// let drawing = tree.diagram_with(|key, _| key.to_string()).to_string();
    /// assert_eq!(
    ///     drawing,
    ///     "tree size: 3\n\
    ///      R----2 (black)\n     \
    ///           L----1 (red)\n     \
    ///           R----3 (red)\n"
    /// );
    /// ```
    pub fn diagram_with<F, L>(&self, label: F) -> Diagram<'_, K, V, F>
    where
        F: Fn(&K, &V) -> L,
        L: fmt::Display,
    {
        Diagram { tree: self, label }
    }
}

impl<K, V, F, L> fmt::Display for Diagram<'_, K, V, F>
where
    F: Fn(&K, &V) -> L,
    L: fmt::Display,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.tree.root else {
            return writeln!(formatter, "tree is empty");
        };
        writeln!(formatter, "tree size: {}", self.tree.len())?;

        let mut pending: Vec<(NodeId, String, bool)> = vec![(root, String::new(), true)];
        while let Some((id, indent, last)) = pending.pop() {
            let node = &self.tree.nodes[id];
            let (branch, extension) = if last {
                ("R----", "     ")
            } else {
                ("L----", "|    ")
            };
            let color = if node.is_red() { "red" } else { "black" };
            writeln!(
                formatter,
                "{indent}{branch}{} ({color})",
                (self.label)(&node.key, &node.value)
            )?;

            let child_indent = format!("{indent}{extension}");
            if let Some(right) = node.right {
                pending.push((right, child_indent.clone(), true));
            }
            if let Some(left) = node.left {
                pending.push((left, child_indent, false));
            }
        }
        Ok(())
    }
}
