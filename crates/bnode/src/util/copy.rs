use log::trace;

use crate::forest::Forest;
use crate::types::Side;

/// Clones the value and reads the child links of `idx`.
#[inline]
pub(crate) fn read_node<T: Clone>(
    forest: &Forest<T>,
    idx: u32,
) -> (T, Option<u32>, Option<u32>) {
    let node = forest.get(idx);
    (node.value.clone(), node.l, node.r)
}

/// Deep copy of the subtree under `src` into fresh nodes of the same forest.
///
/// The copy is a standalone root; the source is left untouched.
pub fn copy<T: Clone>(forest: &mut Forest<T>, src: Option<u32>) -> Option<u32> {
    copy_with(forest, src, read_node)
}

/// Deep copy of the subtree under `src` in `from` into fresh nodes of `dst`.
pub fn copy_from<T: Clone>(
    dst: &mut Forest<T>,
    from: &Forest<T>,
    src: Option<u32>,
) -> Option<u32> {
    copy_with(dst, src, |_, idx| read_node(from, idx))
}

fn copy_with<T, F>(dst: &mut Forest<T>, src: Option<u32>, mut read: F) -> Option<u32>
where
    F: FnMut(&Forest<T>, u32) -> (T, Option<u32>, Option<u32>),
{
    let src = src?;
    let (value, l, r) = read(&*dst, src);
    let root = dst.alloc(value);
    let mut copied = 1usize;

    // Preorder, left before right.
    let mut stack = vec![(root, Side::Right, r), (root, Side::Left, l)];
    while let Some((parent, side, from)) = stack.pop() {
        let Some(from) = from else {
            continue;
        };
        let (value, l, r) = read(&*dst, from);
        let idx = dst.alloc(value);
        dst.link(parent, side, Some(idx));
        copied += 1;
        stack.push((idx, Side::Right, r));
        stack.push((idx, Side::Left, l));
    }
    trace!("copied {copied} nodes from {src} to {root}");
    Some(root)
}
