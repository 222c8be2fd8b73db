//! Binary tree nodes with parent links, and the free functions that build,
//! copy, reshape and tear down trees of them.
//!
//! The node layer knows nothing about ordering or balance; it is meant to sit
//! under a search tree or similar container that enforces those.
//!
//! Nodes live in a [`Forest`] arena and link to each other by `u32` index.
//! A tree is designated by a handle, `Option<u32>`, naming its root (`None`
//! for the empty tree). `l`/`r` links own their subtrees; `p` is a plain
//! back-reference used only for upward navigation.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`node`] | [`BNode`] |
//! [`forest`] | [`Forest`] arena, [`ForestStats`] |
//! [`util`] | `size`, attach family, `clear`, `copy`, `assign`, `swap` |
//! [`print`] | [`print_subtree`] |
//!
//! All traversals use an explicit stack, so tree height is bounded by memory,
//! not by the call stack. The exception is [`print_subtree`].
//!
//! ```
//! use bnode::{size, Forest};
//! use bnode::util::{attach_left_value, attach_right_value, clear, copy};
//!
//! let mut forest = Forest::new();
//! let mut root = Some(forest.alloc(5));
//! attach_left_value(&mut forest, root.unwrap(), 3).unwrap();
//! attach_right_value(&mut forest, root.unwrap(), 8).unwrap();
//! assert_eq!(size(&forest, root), 3);
//!
//! let dup = copy(&mut forest, root);
//! clear(&mut forest, &mut root);
//! assert_eq!(root, None);
//! assert_eq!(size(&forest, dup), 3);
//! ```

pub mod error;
pub mod forest;
pub mod node;
pub mod print;
pub mod types;
pub mod util;

pub use error::NodeError;
pub use forest::{Forest, ForestStats};
pub use node::BNode;
pub use print::print_subtree;
pub use types::{AssignStats, Side};
pub use util::{
    assign, assign_from, attach, attach_left, attach_left_value, attach_right, attach_right_value,
    attach_value, clear, copy, copy_from, detach, replace, replace_left, replace_right, size, swap,
};
