//! Visited-set and parent tracking for a single BFS pass.

use super::NodeId;

const WORD_SHIFT: u32 = 5;
const WORD_MASK: NodeId = (1 << WORD_SHIFT) - 1;

/// A packed visited bitset paired with a dense parent array.
///
/// `contains(n)` is true iff `set_parent(n, _)` has been called since the
/// last [`clear`](ParentMap::clear). Parent slots are only read where the
/// matching bit is set, so `clear` zeroes the bitset and leaves the parent
/// array dirty.
#[derive(Debug)]
pub(super) struct ParentMap {
    words: Vec<u32>,
    parents: Vec<NodeId>,
}

impl ParentMap {
    pub(super) fn new(node_count: usize) -> Self {
        Self {
            words: vec![0; node_count.div_ceil(32)],
            parents: vec![0; node_count],
        }
    }

    pub(super) fn contains(&self, node: NodeId) -> bool {
        let word = (node >> WORD_SHIFT) as usize;
        let bit = 1u32 << (node & WORD_MASK);
        self.words[word] & bit != 0
    }

    pub(super) fn set_parent(&mut self, node: NodeId, parent: NodeId) {
        let word = (node >> WORD_SHIFT) as usize;
        let bit = 1u32 << (node & WORD_MASK);
        self.words[word] |= bit;
        self.parents[node as usize] = parent;
    }

    pub(super) fn parent(&self, node: NodeId) -> NodeId {
        self.parents[node as usize]
    }

    pub(super) fn clear(&mut self) {
        self.words.fill(0);
    }
}
