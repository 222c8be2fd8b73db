/// Exchanges the subtrees two handles designate. O(1); no node is touched.
#[inline]
pub fn swap(a: &mut Option<u32>, b: &mut Option<u32>) {
    std::mem::swap(a, b);
}
