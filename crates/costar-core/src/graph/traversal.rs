//! BFS traversal: full-graph levels and bounded bidirectional shortest path.

use std::cmp::Reverse;
use std::mem;

use super::sort::sort_nodes;
use super::visited::ParentMap;
use super::{Graph, NodeId};

/// Path bound applied when `find_path` is called with `max_path_len == 0`.
pub const DEFAULT_MAX_PATH_LEN: usize = 9;

impl Graph {
    /// Runs a full single-source BFS and returns each node's level:
    /// `1 + hop distance` from `source`, with `0` marking unreachable nodes
    /// (so `levels[source] == 1`).
    ///
    /// Two frontier buffers alternate; each next frontier is radix-sorted
    /// (using the drained frontier as scratch) so the following level's CSR
    /// reads walk memory mostly forward.
    ///
    /// # Panics
    ///
    /// Panics if `source >= node_count()`.
    #[must_use]
    pub fn find_levels(&self, source: NodeId) -> Vec<u32> {
        let size = self.node_count();
        let mut levels = vec![0u32; size];
        let mut current = self.pool.buffer();
        let mut next = self.pool.buffer();
        let mut visited = self.pool.parents();

        levels[source as usize] = 1;
        current.push(source);
        visited.set_parent(source, 0);

        let mut level_number = 2u32;
        while !current.is_empty() {
            for i in 0..current.len() {
                let node = current[i];
                for &neighbor in self.neighbors(node) {
                    if !visited.contains(neighbor) {
                        visited.set_parent(neighbor, 0);
                        next.push(neighbor);
                    }
                }
            }
            current.clear();
            current.resize(next.len(), 0);
            sort_nodes(&mut next, &mut current);
            for &neighbor in next.iter() {
                levels[neighbor as usize] = level_number;
            }
            level_number += 1;
            current.clear();
            mem::swap(&mut *current, &mut *next);
        }
        levels
    }

    /// Finds a shortest path from `source` to `dest` and writes it into
    /// `path` (`path[0] == source`, `path[last] == dest`). When several
    /// shortest paths exist any one of them may be returned; `priority`
    /// biases the choice by reordering each neighbor list (higher first)
    /// before expansion without ever changing the path length.
    ///
    /// `max_path_len` bounds the number of nodes on the returned path; `0`
    /// selects [`DEFAULT_MAX_PATH_LEN`]. `path` is truncated to zero length
    /// when either endpoint is out of range or no path exists within the
    /// bound.
    pub fn find_path(
        &self,
        path: &mut Vec<NodeId>,
        max_path_len: usize,
        source: NodeId,
        dest: NodeId,
        priority: Option<&dyn Fn(NodeId) -> i64>,
    ) {
        let max_path_len = if max_path_len == 0 {
            DEFAULT_MAX_PATH_LEN
        } else {
            max_path_len
        };
        let size = self.node_count();
        if source as usize >= size || dest as usize >= size {
            path.clear();
            return;
        }
        if source == dest {
            path.clear();
            path.push(source);
            return;
        }

        let mut src_level = self.pool.buffer();
        let mut dest_level = self.pool.buffer();
        let mut scratch = self.pool.buffer();
        let mut ordered = self.pool.buffer();
        let mut src_parents = self.pool.parents();
        let mut dest_parents = self.pool.parents();

        src_level.push(source);
        dest_level.push(dest);

        // Node counts accounted for on each half of the eventual path. Both
        // sides start at 1 for their endpoint.
        let mut src_path_len = 1;
        let mut dest_path_len = 1;
        let mut mid: Option<NodeId> = None;
        let mut mid_found_by_source = false;
        while !src_level.is_empty() && !dest_level.is_empty() {
            mid = self.next_level(
                &mut src_level,
                &mut scratch,
                &mut src_parents,
                &dest_parents,
                priority,
                &mut ordered,
            );
            if mid.is_some() || src_path_len + dest_path_len >= max_path_len {
                mid_found_by_source = true;
                break;
            }
            src_path_len += 1;
            mid = self.next_level(
                &mut dest_level,
                &mut scratch,
                &mut dest_parents,
                &src_parents,
                priority,
                &mut ordered,
            );
            if mid.is_some() || src_path_len + dest_path_len >= max_path_len {
                break;
            }
            dest_path_len += 1;
        }

        let Some(mid_point) = mid else {
            path.clear();
            return;
        };
        if mid_point == source {
            // The source side rediscovered itself through the destination's
            // expansion: the endpoints are adjacent.
            path.clear();
            path.push(source);
            path.push(dest);
            return;
        }

        path.clear();
        path.resize(src_path_len + dest_path_len, 0);
        path[0] = source;
        let last = path.len() - 1;
        path[last] = dest;

        let mut path_idx = 0;
        let mut node = src_parents.parent(mid_point);
        while node != source {
            path_idx += 1;
            let mut idx = src_path_len - path_idx;
            // A meeting discovered by the destination side sits one slot
            // closer to the source than its own side's count suggests.
            if !mid_found_by_source {
                idx -= 1;
            }
            path[idx] = node;
            node = src_parents.parent(node);
        }
        path_idx += 1;
        path[path_idx] = mid_point;
        let mut node = dest_parents.parent(mid_point);
        while node != dest {
            path_idx += 1;
            path[path_idx] = node;
            node = dest_parents.parent(node);
        }
    }

    /// Expands one side's frontier by a single BFS level.
    ///
    /// Newly discovered nodes are recorded in `parents` and collected into
    /// `scratch`, which is swapped into `current` before returning. The
    /// expansion stops at the first neighbor already known to the opposite
    /// side and reports it as the meeting point.
    fn next_level(
        &self,
        current: &mut Vec<NodeId>,
        scratch: &mut Vec<NodeId>,
        parents: &mut ParentMap,
        other_parents: &ParentMap,
        priority: Option<&dyn Fn(NodeId) -> i64>,
        ordered: &mut Vec<NodeId>,
    ) -> Option<NodeId> {
        scratch.clear();
        let mut mid = None;
        'expand: for i in 0..current.len() {
            let node = current[i];
            // The graph's own adjacency is shared and immutable, so a
            // priority reorder works on a pooled copy of the slice.
            let neighbors: &[NodeId] = match priority {
                Some(priority) => {
                    ordered.clear();
                    ordered.extend_from_slice(self.neighbors(node));
                    ordered.sort_by_key(|&n| Reverse(priority(n)));
                    ordered.as_slice()
                }
                None => self.neighbors(node),
            };
            for &neighbor in neighbors {
                if !parents.contains(neighbor) {
                    parents.set_parent(neighbor, node);
                    scratch.push(neighbor);
                }
                if other_parents.contains(neighbor) {
                    mid = Some(neighbor);
                    break 'expand;
                }
            }
        }
        mem::swap(current, scratch);
        mid
    }
}
