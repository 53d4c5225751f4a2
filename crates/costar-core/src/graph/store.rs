//! CSR storage for the immutable graph.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{Error, Result};

use super::pool::ScratchPool;

/// A node identifier, doubling as a dense index into the offset table.
///
/// Ids are assigned contiguously in `[0, N)` by the catalog builder.
pub type NodeId = u32;

/// An immutable undirected graph in CSR form.
///
/// Construction concatenates the per-node adjacency lists into `targets` and
/// records the running total into `offsets`; neighbor order is preserved
/// exactly as supplied. The store performs no deduplication or symmetry
/// enforcement — the builder emits each undirected edge once per endpoint,
/// with every adjacency sorted ascending by node id.
#[derive(Debug)]
pub struct Graph {
    /// Length `N + 1`, non-decreasing, `offsets[0] == 0`.
    offsets: Vec<usize>,
    /// Flat neighbor array of length `E` (each undirected edge counted twice).
    targets: Vec<NodeId>,
    pub(super) pool: ScratchPool,
}

impl Graph {
    /// Builds a graph from per-node adjacency lists, where index `v` of
    /// `adjacency` holds node `v`'s neighbors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAdjacency`] if `adjacency` is empty.
    pub fn new(adjacency: &[Vec<NodeId>]) -> Result<Self> {
        if adjacency.is_empty() {
            return Err(Error::EmptyAdjacency);
        }
        let edge_count = adjacency.iter().map(Vec::len).sum();
        let mut targets = Vec::with_capacity(edge_count);
        let mut offsets = Vec::with_capacity(adjacency.len() + 1);
        offsets.push(0);
        for neighbors in adjacency {
            targets.extend_from_slice(neighbors);
            offsets.push(targets.len());
        }
        let pool = ScratchPool::new(adjacency.len(), targets.len());
        Ok(Self {
            offsets,
            targets,
            pool,
        })
    }

    /// Rebuilds a graph from decoded CSR parts, re-creating the scratch pool.
    fn from_parts(targets: Vec<NodeId>, offsets: Vec<usize>) -> std::result::Result<Self, String> {
        if offsets.len() < 2 {
            return Err("neighborIndex must have at least two entries".to_string());
        }
        if offsets[0] != 0 {
            return Err("neighborIndex must start at zero".to_string());
        }
        if offsets.windows(2).any(|w| w[0] > w[1]) {
            return Err("neighborIndex must be non-decreasing".to_string());
        }
        if *offsets.last().unwrap_or(&0) != targets.len() {
            return Err("neighborIndex must end at the neighbor count".to_string());
        }
        let node_count = offsets.len() - 1;
        if targets.iter().any(|&t| (t as usize) >= node_count) {
            return Err("neighbor id out of range".to_string());
        }
        let pool = ScratchPool::new(node_count, targets.len());
        Ok(Self {
            offsets,
            targets,
            pool,
        })
    }

    /// Number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Number of directed edge slots (twice the undirected edge count).
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.targets.len()
    }

    /// Writes the binary wire form to `path`.
    ///
    /// # Errors
    ///
    /// Fails on filesystem or encoding errors.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let file = File::create(path)?;
        bincode::serialize_into(BufWriter::new(file), self)?;
        Ok(())
    }

    /// Reads a graph back from its binary wire form.
    ///
    /// # Errors
    ///
    /// Fails on filesystem or decoding errors; never yields a partial graph.
    pub fn load_from(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        Ok(bincode::deserialize_from(BufReader::new(file))?)
    }

    /// Returns `node`'s neighbor slice.
    ///
    /// # Panics
    ///
    /// Panics if `node >= node_count()`; bounds are the caller's contract.
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> &[NodeId] {
        let node = node as usize;
        &self.targets[self.offsets[node]..self.offsets[node + 1]]
    }
}

/// Wire form of the graph: the `(targets, offsets)` pair under the original
/// field names. Both the bincode and the JSON encodings go through this.
#[derive(Serialize)]
struct GraphWireRef<'a> {
    neighbors: &'a [NodeId],
    #[serde(rename = "neighborIndex")]
    neighbor_index: &'a [usize],
}

#[derive(Deserialize)]
struct GraphWire {
    neighbors: Vec<NodeId>,
    #[serde(rename = "neighborIndex")]
    neighbor_index: Vec<usize>,
}

impl Serialize for Graph {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        GraphWireRef {
            neighbors: &self.targets,
            neighbor_index: &self.offsets,
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Graph {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let wire = GraphWire::deserialize(deserializer)?;
        Self::from_parts(wire.neighbors, wire.neighbor_index).map_err(D::Error::custom)
    }
}
