/// One vertex of a binary tree.
///
/// Links are indices into the owning [`Forest`](crate::Forest). `l` and `r`
/// own their subtrees; `p` is a back-reference used only for upward
/// navigation.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BNode<T> {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub value: T,
}

impl<T> BNode<T> {
    pub fn new(value: T) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            value,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.l.is_none() && self.r.is_none()
    }
}
