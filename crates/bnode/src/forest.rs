//! Slot arena that owns every node of one or more trees.
//!
//! Nodes are addressed by `u32` indices. Released slots go on a free list and
//! are handed out again by later allocations, so an index is only meaningful
//! while the node it names is live.

use crate::node::BNode;
use crate::types::Side;

/// Running allocation counters of a [`Forest`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ForestStats {
    pub allocated: usize,
    pub released: usize,
}

impl ForestStats {
    #[inline]
    pub fn live(&self) -> usize {
        self.allocated - self.released
    }
}

#[derive(Clone, Debug)]
pub struct Forest<T> {
    slots: Vec<Option<BNode<T>>>,
    free: Vec<u32>,
    stats: ForestStats,
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Forest<T> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            stats: ForestStats::default(),
        }
    }

    /// Allocates a standalone node (no parent, no children).
    pub fn alloc(&mut self, value: T) -> u32 {
        self.stats.allocated += 1;
        let node = BNode::new(value);
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx as usize] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                (self.slots.len() - 1) as u32
            }
        }
    }

    pub fn alloc_default(&mut self) -> u32
    where
        T: Default,
    {
        self.alloc(T::default())
    }

    /// Frees the slot of `idx` and hands back its value. Links of other nodes
    /// that still point at `idx` are the caller's to fix.
    pub(crate) fn release(&mut self, idx: u32) -> T {
        let node = self.slots[idx as usize]
            .take()
            .unwrap_or_else(|| panic!("node {idx} released twice"));
        self.free.push(idx);
        self.stats.released += 1;
        node.value
    }

    /// Number of live nodes.
    #[inline]
    pub fn len(&self) -> usize {
        self.stats.live()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn stats(&self) -> ForestStats {
        self.stats
    }

    #[inline]
    pub fn is_live(&self, idx: u32) -> bool {
        matches!(self.slots.get(idx as usize), Some(Some(_)))
    }

    /// # Panics
    ///
    /// If `idx` does not name a live node.
    #[inline]
    pub fn get(&self, idx: u32) -> &BNode<T> {
        match self.slots.get(idx as usize) {
            Some(Some(node)) => node,
            _ => panic!("node {idx} is not live"),
        }
    }

    #[inline]
    fn get_mut(&mut self, idx: u32) -> &mut BNode<T> {
        match self.slots.get_mut(idx as usize) {
            Some(Some(node)) => node,
            _ => panic!("node {idx} is not live"),
        }
    }

    #[inline]
    pub fn value(&self, idx: u32) -> &T {
        &self.get(idx).value
    }

    #[inline]
    pub fn value_mut(&mut self, idx: u32) -> &mut T {
        &mut self.get_mut(idx).value
    }

    #[inline]
    pub fn parent(&self, idx: u32) -> Option<u32> {
        self.get(idx).p
    }

    #[inline]
    pub fn left(&self, idx: u32) -> Option<u32> {
        self.get(idx).l
    }

    #[inline]
    pub fn right(&self, idx: u32) -> Option<u32> {
        self.get(idx).r
    }

    #[inline]
    pub fn child(&self, idx: u32, side: Side) -> Option<u32> {
        match side {
            Side::Left => self.left(idx),
            Side::Right => self.right(idx),
        }
    }

    #[inline]
    pub fn is_root(&self, idx: u32) -> bool {
        self.parent(idx).is_none()
    }

    /// Which slot of its parent `idx` occupies.
    pub fn side_of(&self, idx: u32) -> Option<Side> {
        let p = self.parent(idx)?;
        if self.left(p) == Some(idx) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Topmost node reached by following parent links from `idx`.
    pub fn root_of(&self, mut idx: u32) -> u32 {
        while let Some(p) = self.parent(idx) {
            idx = p;
        }
        idx
    }

    /// Whether `ancestor` is `node` or lies on its path to the root.
    pub fn is_ancestor(&self, ancestor: u32, node: u32) -> bool {
        let mut curr = Some(node);
        while let Some(idx) = curr {
            if idx == ancestor {
                return true;
            }
            curr = self.parent(idx);
        }
        false
    }

    #[inline]
    pub(crate) fn set_p(&mut self, idx: u32, v: Option<u32>) {
        self.get_mut(idx).p = v;
    }

    #[inline]
    pub(crate) fn set_child(&mut self, idx: u32, side: Side, v: Option<u32>) {
        let node = self.get_mut(idx);
        match side {
            Side::Left => node.l = v,
            Side::Right => node.r = v,
        }
    }

    /// Writes `child` into `parent`'s slot and points `child` back at
    /// `parent`. Whatever the slot held before is simply overwritten.
    #[inline]
    pub(crate) fn link(&mut self, parent: u32, side: Side, child: Option<u32>) {
        self.set_child(parent, side, child);
        if let Some(c) = child {
            self.set_p(c, Some(parent));
        }
    }
}
