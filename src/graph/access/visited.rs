//! Visited flags for graph traversals.
//!
//! Vertices are dense indices into the graph's arena, so a flat `Vec<bool>`
//! is enough. Keeping it behind a tiny type puts the mark-on-discovery logic
//! in one place for all three traversals.

/// One flag per vertex slot.
pub(crate) struct VisitedFlags {
    flags: Vec<bool>,
}

impl VisitedFlags {
    pub(crate) fn new(len: usize) -> Self {
        Self {
            flags: vec![false; len],
        }
    }

    /// Returns `true` iff `node` was unvisited, marking it visited.
    #[inline(always)]
    pub(crate) fn try_visit(&mut self, node: usize) -> bool {
        match self.flags.get_mut(node) {
            Some(flag) if !*flag => {
                *flag = true;
                true
            }
            _ => false,
        }
    }

    #[inline(always)]
    pub(crate) fn is_visited(&self, node: usize) -> bool {
        self.flags.get(node).copied().unwrap_or(false)
    }
}
