use log::trace;

use crate::forest::Forest;

use super::detach;

/// Releases every node under `root`, children before their parent, and sets
/// the handle to `None`.
///
/// A root that hangs under another node is unlinked from it first, so the
/// parent never keeps a link to a released slot. Clearing an empty handle is
/// a no-op.
pub fn clear<T>(forest: &mut Forest<T>, root: &mut Option<u32>) {
    let Some(top) = root.take() else {
        return;
    };
    detach(forest, top);

    let mut released = 0usize;
    // (node, children already scheduled)
    let mut stack = vec![(top, false)];
    while let Some((idx, expanded)) = stack.pop() {
        if expanded {
            forest.release(idx);
            released += 1;
            continue;
        }
        let node = forest.get(idx);
        let (l, r) = (node.l, node.r);
        stack.push((idx, true));
        if let Some(r) = r {
            stack.push((r, false));
        }
        if let Some(l) = l {
            stack.push((l, false));
        }
    }
    trace!("cleared {released} nodes under {top}");
}
