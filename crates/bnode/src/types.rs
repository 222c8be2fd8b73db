//! Small shared types.

use std::fmt;

/// Which child slot of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Node counts reported by [`assign`](fn@crate::util::assign).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AssignStats {
    /// Destination nodes whose value was overwritten in place.
    pub reused: usize,
    /// Nodes allocated where the destination had no node.
    pub allocated: usize,
    /// Destination nodes released because the source had no node there.
    pub released: usize,
}
