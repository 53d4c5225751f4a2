//! Compact immutable graph engine.
//!
//! The graph is stored in CSR (compressed sparse row) form: a flat `targets`
//! array of neighbor ids and an `offsets` array of length `N + 1` such that
//! `targets[offsets[v]..offsets[v + 1]]` is node `v`'s neighbor slice. The
//! representation is frozen at construction and freely shareable across
//! threads; per-query scratch (frontier buffers, visited/parent stores) comes
//! from an internal free-list pool so repeated queries allocate nothing on
//! the hot path.
//!
//! # Example
//!
//! ```rust
//! use costar_core::graph::Graph;
//!
//! // 0 - 1 - 2
//! let g = Graph::new(&[vec![1], vec![0, 2], vec![1]]).unwrap();
//!
//! let mut path = Vec::new();
//! g.find_path(&mut path, 0, 0, 2, None);
//! assert_eq!(path, vec![0, 1, 2]);
//! ```

mod pool;
pub mod sort;
mod store;
mod traversal;
mod visited;

#[cfg(test)]
mod pool_tests;

pub use store::{Graph, NodeId};
pub use traversal::DEFAULT_MAX_PATH_LEN;
