//! Free-list pool of per-query scratch objects.
//!
//! Each graph owns one pool sized to it: node buffers preallocated with the
//! graph's edge count (a safe upper bound for any frontier) and
//! [`ParentMap`]s sized to the node count. Borrowed objects come back through
//! RAII guards, so every exit path returns them; returning truncates buffers
//! and clears bitsets while keeping allocations alive for the next query.

use std::ops::{Deref, DerefMut};

use parking_lot::Mutex;

use super::visited::ParentMap;
use super::NodeId;

#[derive(Debug)]
pub(super) struct ScratchPool {
    node_count: usize,
    buffer_capacity: usize,
    buffers: Mutex<Vec<Vec<NodeId>>>,
    parent_maps: Mutex<Vec<ParentMap>>,
}

impl ScratchPool {
    pub(super) fn new(node_count: usize, buffer_capacity: usize) -> Self {
        Self {
            node_count,
            buffer_capacity,
            buffers: Mutex::new(Vec::new()),
            parent_maps: Mutex::new(Vec::new()),
        }
    }

    /// Borrows an empty node buffer, allocating one lazily on a cold pool.
    pub(super) fn buffer(&self) -> PooledBuffer<'_> {
        let buf = self
            .buffers
            .lock()
            .pop()
            .unwrap_or_else(|| Vec::with_capacity(self.buffer_capacity));
        PooledBuffer { pool: self, buf }
    }

    /// Borrows a cleared parent map sized to the graph.
    pub(super) fn parents(&self) -> PooledParents<'_> {
        let map = self
            .parent_maps
            .lock()
            .pop()
            .unwrap_or_else(|| ParentMap::new(self.node_count));
        PooledParents { pool: self, map }
    }
}

/// A node buffer on loan from the pool; returned (length-reset) on drop.
pub(super) struct PooledBuffer<'a> {
    pool: &'a ScratchPool,
    buf: Vec<NodeId>,
}

impl Deref for PooledBuffer<'_> {
    type Target = Vec<NodeId>;

    fn deref(&self) -> &Vec<NodeId> {
        &self.buf
    }
}

impl DerefMut for PooledBuffer<'_> {
    fn deref_mut(&mut self) -> &mut Vec<NodeId> {
        &mut self.buf
    }
}

impl Drop for PooledBuffer<'_> {
    fn drop(&mut self) {
        let mut buf = std::mem::take(&mut self.buf);
        buf.clear();
        self.pool.buffers.lock().push(buf);
    }
}

/// A parent map on loan from the pool; returned (bitset-cleared) on drop.
pub(super) struct PooledParents<'a> {
    pool: &'a ScratchPool,
    map: ParentMap,
}

impl Deref for PooledParents<'_> {
    type Target = ParentMap;

    fn deref(&self) -> &ParentMap {
        &self.map
    }
}

impl DerefMut for PooledParents<'_> {
    fn deref_mut(&mut self) -> &mut ParentMap {
        &mut self.map
    }
}

impl Drop for PooledParents<'_> {
    fn drop(&mut self) {
        let mut map = std::mem::replace(&mut self.map, ParentMap::new(0));
        map.clear();
        self.pool.parent_maps.lock().push(map);
    }
}

// Queries may run concurrently over a shared graph; the pool must cross
// threads with it.
const _: fn() = || {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ScratchPool>();
};
