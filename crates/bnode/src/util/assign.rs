//! Value-wise assignment of one tree onto another, reusing destination nodes.

use log::debug;

use crate::forest::Forest;
use crate::types::{AssignStats, Side};

use super::copy::read_node;
use super::{clear, copy, size};

/// Where the node currently being assigned hangs.
#[derive(Clone, Copy)]
enum Slot {
    Handle,
    Child(u32, Side),
}

/// Makes the tree under `dest` mirror the shape and values of the tree under
/// `src`, both in `forest`.
///
/// A destination node whose position also exists in the source keeps its
/// identity and only has its value overwritten. Missing positions are
/// allocated, surplus subtrees are cleared. An empty source empties `dest`.
///
/// When one tree contains the other the source is snapshotted first, so the
/// result still mirrors the source as it was before the call.
pub fn assign<T: Clone>(
    forest: &mut Forest<T>,
    dest: &mut Option<u32>,
    src: Option<u32>,
) -> AssignStats {
    if *dest == src {
        return AssignStats::default();
    }
    if let (Some(d), Some(s)) = (*dest, src) {
        if forest.is_ancestor(d, s) || forest.is_ancestor(s, d) {
            let mut snapshot = copy(forest, src);
            let stats = assign_with(forest, dest, snapshot, read_node);
            clear(forest, &mut snapshot);
            return stats;
        }
    }
    assign_with(forest, dest, src, read_node)
}

/// [`assign`] with the source tree living in another forest.
pub fn assign_from<T: Clone>(
    dst: &mut Forest<T>,
    dest: &mut Option<u32>,
    from: &Forest<T>,
    src: Option<u32>,
) -> AssignStats {
    assign_with(dst, dest, src, |_, idx| read_node(from, idx))
}

fn assign_with<T, F>(
    forest: &mut Forest<T>,
    dest: &mut Option<u32>,
    src: Option<u32>,
    mut read: F,
) -> AssignStats
where
    F: FnMut(&Forest<T>, u32) -> (T, Option<u32>, Option<u32>),
{
    let mut stats = AssignStats::default();
    let mut stack = vec![(Slot::Handle, src)];
    while let Some((slot, from)) = stack.pop() {
        let mut current = match slot {
            Slot::Handle => *dest,
            Slot::Child(p, side) => forest.child(p, side),
        };

        let Some(from) = from else {
            if current.is_some() {
                stats.released += size(forest, current);
                clear(forest, &mut current);
                if let Slot::Handle = slot {
                    *dest = None;
                }
            }
            continue;
        };

        let (value, l, r) = read(&*forest, from);
        let idx = match current {
            Some(d) => {
                *forest.value_mut(d) = value;
                stats.reused += 1;
                d
            }
            None => {
                let d = forest.alloc(value);
                stats.allocated += 1;
                match slot {
                    Slot::Handle => *dest = Some(d),
                    Slot::Child(p, side) => forest.link(p, side, Some(d)),
                }
                d
            }
        };
        // Right subtree first.
        stack.push((Slot::Child(idx, Side::Left), l));
        stack.push((Slot::Child(idx, Side::Right), r));
    }
    debug!(
        "assign: reused {}, allocated {}, released {}",
        stats.reused, stats.allocated, stats.released
    );
    stats
}
