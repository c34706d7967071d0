//! The red-black tree engine shared by the map and set containers.
//!
//! This module provides:
//!
//! - [`RedBlackTree`]: the balanced, parent-linked search tree itself
//! - [`Position`]: a copyable handle to one element or to the end
//! - [`Cursor`] and [`CursorMut`]: a position bound to its tree
//! - [`Iter`], [`IterMut`], [`IntoIter`]: in-order iterators
//! - [`Diagram`]: a text drawing of the tree's shape and colors
//!
//! # Structure
//!
//! Nodes live in an arena owned by the tree and refer to each other by
//! index. Every node knows its parent, so walking from one element to the
//! next needs no auxiliary stack and a [`Position`] can move without holding
//! a borrow of the tree.
//!
//! # Examples
//!
//! ```rust
//! use rbcontainers::tree::RedBlackTree;
//!
//! let mut tree = RedBlackTree::new();
//! tree.insert(2, "two");
//! tree.insert(1, "one");
//!
//! let mut position = tree.begin();
//! let mut keys = Vec::new();
//! while let Some(key) = tree.key_at(position) {
//!     keys.push(*key);
//!     position = tree.successor(position);
//! }
//! assert_eq!(keys, vec![1, 2]);
//! ```

mod cursor;
mod diagram;
mod engine;
mod iter;
pub(crate) mod node;
mod position;

pub use cursor::{Cursor, CursorMut};
pub use diagram::Diagram;
pub use engine::RedBlackTree;
pub use iter::{IntoIter, Iter, IterMut};
pub use position::Position;
