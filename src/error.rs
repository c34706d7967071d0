//! Error types for the containers.
//!
//! Most conditions in this crate are reported through return values:
//! a rejected duplicate insertion yields `false`, a missing key yields
//! [`Position::END`](crate::tree::Position::END) or `None`, and erasing
//! an absent key returns `0`. The types here cover the two places where a
//! caller needs a real error value:
//!
//! - [`KeyNotFound`]: checked access on [`TreeMap`](crate::map::TreeMap)
//!   for a key that is not present.
//! - [`InvariantViolation`]: the diagnostic result of
//!   [`RedBlackTree::validate`](crate::tree::RedBlackTree::validate).

use thiserror::Error;

/// Represents a checked lookup of a key that is not in the container.
///
/// # Examples
///
/// ```rust
/// use rbcontainers::error::KeyNotFound;
///
/// let error = KeyNotFound::new("at");
/// assert_eq!(error.to_string(), "at: key not found");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{operation}: key not found")]
pub struct KeyNotFound {
    /// The name of the operation that failed.
    pub operation: &'static str,
}

impl KeyNotFound {
    /// Creates a new `KeyNotFound` for the given operation name.
    #[must_use]
    pub const fn new(operation: &'static str) -> Self {
        Self { operation }
    }
}

/// A broken red-black tree property found by
/// [`RedBlackTree::validate`](crate::tree::RedBlackTree::validate).
///
/// A tree built only through the public API never produces one of these,
/// except after a key was modified in place through
/// [`CursorMut::key_mut`](crate::tree::CursorMut::key_mut), which is reported
/// as [`InvariantViolation::OrderViolation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvariantViolation {
    /// The root node is red.
    #[error("root node is red")]
    RedRoot,
    /// A red node has a red child.
    #[error("red node has a red child")]
    RedRedEdge,
    /// Two root-to-leaf paths carry a different number of black nodes.
    #[error("black height mismatch: expected {expected}, found {found}")]
    BlackHeightMismatch {
        /// Black height of the first path seen.
        expected: usize,
        /// Black height of the offending path.
        found: usize,
    },
    /// A child's parent link does not point back at its parent.
    #[error("parent link does not match the child link")]
    BrokenParentLink,
    /// A link refers to a node that is no longer allocated.
    #[error("link refers to a released node")]
    DanglingLink,
    /// In-order traversal is not strictly ascending.
    #[error("in-order traversal is not strictly ascending")]
    OrderViolation,
    /// The recorded length differs from the number of reachable nodes.
    #[error("recorded length {recorded} differs from {reachable} reachable nodes")]
    SizeMismatch {
        /// The length the tree reports.
        recorded: usize,
        /// The number of nodes reachable from the root.
        reachable: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_key_not_found_display() {
        let error = KeyNotFound::new("at_mut");
        assert_eq!(error.to_string(), "at_mut: key not found");
    }

    #[rstest]
    fn test_key_not_found_error_trait() {
        let error = KeyNotFound::new("at");
        let _: &dyn std::error::Error = &error;
    }

    #[rstest]
    #[case(InvariantViolation::RedRoot, "root node is red")]
    #[case(InvariantViolation::RedRedEdge, "red node has a red child")]
    #[case(
        InvariantViolation::BlackHeightMismatch { expected: 3, found: 2 },
        "black height mismatch: expected 3, found 2"
    )]
    #[case(
        InvariantViolation::SizeMismatch { recorded: 4, reachable: 5 },
        "recorded length 4 differs from 5 reachable nodes"
    )]
    fn test_invariant_violation_display(
        #[case] violation: InvariantViolation,
        #[case] expected: &str,
    ) {
        assert_eq!(violation.to_string(), expected);
    }
}
