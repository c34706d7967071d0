//! # rbcontainers
//!
//! Ordered associative containers backed by a mutable red-black tree with
//! parent links, plus thin LIFO and FIFO adapters over standard sequences.
//!
//! ## Overview
//!
//! - **Tree**: [`RedBlackTree`](tree::RedBlackTree), a balanced binary search
//!   tree that owns its nodes in an arena and keeps a parent link per node
//! - **Positions**: [`Position`](tree::Position) handles and cursors that walk
//!   the tree in key order in both directions
//! - **Map**: [`TreeMap`](map::TreeMap), unique keys with mapped values,
//!   checked access and auto-vivifying access
//! - **Set**: [`TreeSet`](set::TreeSet), unique keys only
//! - **Sequence adapters**: [`Stack`](sequence::Stack) and
//!   [`Queue`](sequence::Queue) over any container with the right operations
//!
//! ## Feature Flags
//!
//! - `map`: [`TreeMap`](map::TreeMap)
//! - `set`: [`TreeSet`](set::TreeSet)
//! - `sequence`: [`Stack`](sequence::Stack) and [`Queue`](sequence::Queue)
//! - `full`: Enable all features
//!
//! The tree engine and the error types are always available.
//!
//! ## Logging
//!
//! The containers emit [`tracing`] events at `debug` level for bulk
//! operations (merge, clear) and at `trace` level for deep copies and
//! two-child deletions. Nothing is printed unless the application installs
//! a subscriber.
//!
//! ## Example
//!
//! ```rust
//! use rbcontainers::prelude::*;
//!
//! let mut scores = TreeMap::new();
//! scores.insert("bob", 3);
//! scores.insert("alice", 5);
//! *scores.get_or_insert_default("carol") += 1;
//!
//! assert_eq!(scores.to_string(), "{alice: 5, bob: 3, carol: 1}");
//! assert!(scores.at(&"dave").is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use rbcontainers::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{InvariantViolation, KeyNotFound};
    pub use crate::tree::{Position, RedBlackTree};

    #[cfg(feature = "map")]
    pub use crate::map::TreeMap;

    #[cfg(feature = "set")]
    pub use crate::set::TreeSet;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::{FrontSequence, Queue, Sequence, Stack};
}

pub mod error;
pub mod tree;

#[cfg(feature = "map")]
pub mod map;

#[cfg(feature = "set")]
pub mod set;

#[cfg(feature = "sequence")]
pub mod sequence;
