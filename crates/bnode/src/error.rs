use thiserror::Error;

use crate::Side;

/// Structural violations rejected by the attach family.
///
/// Every other node operation is total.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NodeError {
    #[error("{side} slot of node {parent} is already occupied by node {occupant}")]
    SlotOccupied {
        parent: u32,
        side: Side,
        occupant: u32,
    },
    #[error("node {0} already has a parent")]
    NotARoot(u32),
    #[error("attaching node {child} under node {parent} would create a cycle")]
    Cycle { parent: u32, child: u32 },
}
