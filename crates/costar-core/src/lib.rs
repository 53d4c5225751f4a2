//! # costar-core
//!
//! Graph engine and catalog for a six-degrees link finder over the
//! bipartite actor/film graph.
//!
//! The crate splits into a generic core and a domain layer on top of it:
//!
//! - [`graph`]: immutable CSR graph with pooled per-query scratch, a
//!   full-graph BFS (`find_levels`) and a hop-bounded bidirectional BFS
//!   (`find_path`) with a neighbor-priority hook.
//! - [`dataset`]: line-delimited film-record loading and cast-name
//!   normalization.
//! - [`catalog`]: node-id assignment, bipartite graph construction, and the
//!   `links` / `center` queries.
//!
//! ## Quick start
//!
//! ```rust
//! use costar_core::{dataset, Catalog};
//! use std::io::Cursor;
//!
//! let data = concat!(
//!     r#"{"year": 1999, "title": "First Film", "cast": ["[[Ann A]]", "[[Bob B]]"]}"#,
//!     "\n",
//!     r#"{"year": 2004, "title": "Second Film", "cast": ["[[Bob B]]", "[[Cy C]]"]}"#,
//! );
//! let movies = dataset::read_movies(Cursor::new(data)).unwrap();
//! let catalog = Catalog::from_movies(movies).unwrap();
//!
//! let chain = catalog.links("Ann A", "Cy C").unwrap();
//! assert_eq!(chain.len(), 5); // Ann, First Film, Bob, Second Film, Cy
//! ```

#![warn(missing_docs)]
#![cfg_attr(
    test,
    allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::float_cmp
    )
)]

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod graph;

#[cfg(test)]
mod dataset_tests;

pub use catalog::{Catalog, CenterStats, LinkStep, NodeKind};
pub use dataset::Movie;
pub use error::{Error, Result};
pub use graph::{Graph, NodeId};
