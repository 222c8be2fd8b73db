//! Free functions over the trees stored in a [`Forest`].
//!
//! Handles to (possibly empty) subtrees are `Option<u32>`. Functions that
//! take `&mut Option<u32>` may change what the handle designates.
//!
//! - `clear.rs` -> `clear`
//! - `copy.rs` -> `copy`, `copy_from`
//! - `assign.rs` -> `assign`, `assign_from`
//! - `swap.rs` -> `swap`
//! - this module -> `size`, the attach family, `detach`

pub mod assign;
pub mod clear;
pub mod copy;
pub mod swap;

use log::debug;

use crate::error::NodeError;
use crate::forest::Forest;
use crate::types::Side;

pub use assign::{assign, assign_from};
pub use clear::clear;
pub use copy::{copy, copy_from};
pub use swap::swap;

/// Number of nodes under `root`, inclusive. `None` has size 0.
pub fn size<T>(forest: &Forest<T>, root: Option<u32>) -> usize {
    let mut count = 0;
    let mut stack: Vec<u32> = root.into_iter().collect();
    while let Some(idx) = stack.pop() {
        count += 1;
        let node = forest.get(idx);
        stack.extend(node.l);
        stack.extend(node.r);
    }
    count
}

fn check_slot<T>(forest: &Forest<T>, parent: u32, side: Side) -> Result<(), NodeError> {
    match forest.child(parent, side) {
        Some(occupant) => {
            debug!("rejected attach: {side} slot of {parent} holds {occupant}");
            Err(NodeError::SlotOccupied {
                parent,
                side,
                occupant,
            })
        }
        None => Ok(()),
    }
}

fn check_detached<T>(forest: &Forest<T>, parent: u32, child: u32) -> Result<(), NodeError> {
    if !forest.is_root(child) {
        debug!("rejected attach: {child} is owned by another node");
        return Err(NodeError::NotARoot(child));
    }
    if forest.is_ancestor(child, parent) {
        debug!("rejected attach: {child} is an ancestor of {parent}");
        return Err(NodeError::Cycle { parent, child });
    }
    Ok(())
}

/// Hangs the standalone subtree `child` in the empty `side` slot of `parent`
/// and points its parent link back at `parent`.
///
/// # Errors
///
/// - [`NodeError::SlotOccupied`] if the slot already holds a node.
/// - [`NodeError::NotARoot`] if `child` already has a parent.
/// - [`NodeError::Cycle`] if `child` is `parent` or one of its ancestors.
///
/// The forest is unchanged on error.
pub fn attach<T>(
    forest: &mut Forest<T>,
    parent: u32,
    side: Side,
    child: Option<u32>,
) -> Result<(), NodeError> {
    check_slot(forest, parent, side)?;
    if let Some(c) = child {
        check_detached(forest, parent, c)?;
    }
    forest.link(parent, side, child);
    Ok(())
}

pub fn attach_left<T>(
    forest: &mut Forest<T>,
    parent: u32,
    child: Option<u32>,
) -> Result<(), NodeError> {
    attach(forest, parent, Side::Left, child)
}

pub fn attach_right<T>(
    forest: &mut Forest<T>,
    parent: u32,
    child: Option<u32>,
) -> Result<(), NodeError> {
    attach(forest, parent, Side::Right, child)
}

/// Allocates a node holding `value` and attaches it under `parent`.
///
/// Returns the new node. Nothing is allocated when the slot is occupied.
pub fn attach_value<T>(
    forest: &mut Forest<T>,
    parent: u32,
    side: Side,
    value: T,
) -> Result<u32, NodeError> {
    check_slot(forest, parent, side)?;
    let idx = forest.alloc(value);
    forest.link(parent, side, Some(idx));
    Ok(idx)
}

pub fn attach_left_value<T>(
    forest: &mut Forest<T>,
    parent: u32,
    value: T,
) -> Result<u32, NodeError> {
    attach_value(forest, parent, Side::Left, value)
}

pub fn attach_right_value<T>(
    forest: &mut Forest<T>,
    parent: u32,
    value: T,
) -> Result<u32, NodeError> {
    attach_value(forest, parent, Side::Right, value)
}

/// Like [`attach`], but a subtree already hanging in the slot is cleared
/// first instead of being rejected.
pub fn replace<T>(
    forest: &mut Forest<T>,
    parent: u32,
    side: Side,
    child: Option<u32>,
) -> Result<(), NodeError> {
    if let Some(c) = child {
        check_detached(forest, parent, c)?;
    }
    let mut displaced = forest.child(parent, side);
    clear(forest, &mut displaced);
    forest.link(parent, side, child);
    Ok(())
}

pub fn replace_left<T>(
    forest: &mut Forest<T>,
    parent: u32,
    child: Option<u32>,
) -> Result<(), NodeError> {
    replace(forest, parent, Side::Left, child)
}

pub fn replace_right<T>(
    forest: &mut Forest<T>,
    parent: u32,
    child: Option<u32>,
) -> Result<(), NodeError> {
    replace(forest, parent, Side::Right, child)
}

/// Unlinks `node` from its parent in both directions. The caller becomes the
/// owner of the now standalone subtree. No-op on a root.
pub fn detach<T>(forest: &mut Forest<T>, node: u32) {
    if let Some(p) = forest.parent(node) {
        if let Some(side) = forest.side_of(node) {
            forest.set_child(p, side, None);
        }
        forest.set_p(node, None);
    }
}
