//! Bipartite catalog: node registry, graph construction, and the link and
//! center queries.
//!
//! The catalog assigns every film and cast member a dense node id, builds the
//! undirected film↔cast graph in CSR form, and answers the two queries the
//! HTTP layer exposes. Node ids are assigned in one deterministic sweep:
//! films in ascending title order, each followed by its not-yet-seen cast
//! members in ascending name order.

use std::collections::{BTreeMap, BTreeSet};

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::info;

use crate::dataset::{normalize_cast_name, Movie};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};

/// Path bound for link queries; generous, since six degrees needs 13 nodes.
const LINK_MAX_PATH_LEN: usize = 99;

/// Year used to deprioritize films whose record carries no release year.
const UNKNOWN_YEAR: i64 = 10_000;

/// Which side of the bipartite graph a node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    /// A cast member.
    Cast,
    /// A film.
    Movie,
}

#[derive(Debug)]
struct NodeEntry {
    kind: NodeKind,
    name: String,
}

/// One step of a link path: a cast member or a film connecting two of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkStep {
    /// Display name of the cast member or film.
    pub name: String,
    /// Which partition the step belongs to.
    #[serde(rename = "type")]
    pub kind: NodeKind,
}

/// Aggregated hop-distance distribution for a center query.
#[derive(Debug, Clone, Serialize)]
pub struct CenterStats {
    /// Reachable cast members per degree of separation.
    pub count_by_distance: BTreeMap<u32, usize>,
    /// Every cast member in the catalog, reachable or not.
    pub total_linkable: usize,
    /// Mean degree of separation over `total_linkable`.
    pub average_distance: f64,
}

/// The loaded dataset, indexed and ready to answer queries.
#[derive(Debug)]
pub struct Catalog {
    cast_nodes: FxHashMap<String, NodeId>,
    movie_nodes: FxHashMap<String, NodeId>,
    nodes: Vec<NodeEntry>,
    movies: FxHashMap<String, Movie>,
    graph: Graph,
}

impl Catalog {
    /// Builds the catalog from parsed film records.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyAdjacency`] when no film has a cast.
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_movies(movies: FxHashMap<String, Movie>) -> Result<Self> {
        // Title→cast and cast→titles with deterministic iteration order.
        let mut movie_cast: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        let mut cast_movies: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for movie in movies.values() {
            if movie.cast.is_empty() {
                continue;
            }
            let members = movie_cast.entry(movie.title.clone()).or_default();
            for raw in &movie.cast {
                let name = normalize_cast_name(raw);
                members.insert(name.to_string());
                cast_movies
                    .entry(name.to_string())
                    .or_default()
                    .insert(movie.title.clone());
            }
        }

        let mut cast_nodes = FxHashMap::default();
        let mut movie_nodes = FxHashMap::default();
        let mut nodes = Vec::with_capacity(movie_cast.len() + cast_movies.len());
        for (title, members) in &movie_cast {
            movie_nodes.insert(title.clone(), nodes.len() as NodeId);
            nodes.push(NodeEntry {
                kind: NodeKind::Movie,
                name: title.clone(),
            });
            for member in members {
                if cast_nodes.contains_key(member) {
                    continue;
                }
                cast_nodes.insert(member.clone(), nodes.len() as NodeId);
                nodes.push(NodeEntry {
                    kind: NodeKind::Cast,
                    name: member.clone(),
                });
            }
        }

        // Each undirected edge appears in both endpoint lists, every list
        // sorted ascending by id (the traversal engine's builder contract).
        let mut adjacency: Vec<Vec<NodeId>> = Vec::with_capacity(nodes.len());
        for entry in &nodes {
            let mut ids: Vec<NodeId> = match entry.kind {
                NodeKind::Movie => movie_cast[&entry.name]
                    .iter()
                    .map(|member| cast_nodes[member])
                    .collect(),
                NodeKind::Cast => cast_movies[&entry.name]
                    .iter()
                    .map(|title| movie_nodes[title])
                    .collect(),
            };
            ids.sort_unstable();
            adjacency.push(ids);
        }
        let graph = Graph::new(&adjacency)?;
        info!(
            movies = movie_nodes.len(),
            cast = cast_nodes.len(),
            edges = graph.edge_count() / 2,
            "built bipartite graph"
        );

        Ok(Self {
            cast_nodes,
            movie_nodes,
            nodes,
            movies,
            graph,
        })
    }

    /// The underlying CSR graph.
    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Number of distinct cast members.
    #[must_use]
    pub fn cast_count(&self) -> usize {
        self.cast_nodes.len()
    }

    /// Number of films that have at least one cast member.
    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movie_nodes.len()
    }

    /// Resolves a cast member's node id.
    #[must_use]
    pub fn cast_node(&self, name: &str) -> Option<NodeId> {
        self.cast_nodes.get(name).copied()
    }

    /// Finds a shortest cast-film-cast chain between two cast members.
    ///
    /// Among equally short chains, earlier films are preferred, and films
    /// without a release year lose every tie.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownCastMember`] when either name is not in the
    /// catalog. An empty result means no chain exists within the bound.
    pub fn links(&self, src: &str, dest: &str) -> Result<Vec<LinkStep>> {
        let src_node = self
            .cast_node(src)
            .ok_or_else(|| Error::UnknownCastMember(src.to_string()))?;
        let dest_node = self
            .cast_node(dest)
            .ok_or_else(|| Error::UnknownCastMember(dest.to_string()))?;

        let priority = |node: NodeId| -> i64 {
            let entry = &self.nodes[node as usize];
            if entry.kind != NodeKind::Movie {
                return 0;
            }
            let year = match self.movies.get(&entry.name) {
                Some(movie) if movie.year > 0 => i64::from(movie.year),
                _ => UNKNOWN_YEAR,
            };
            -year
        };

        let mut path = Vec::new();
        self.graph.find_path(
            &mut path,
            LINK_MAX_PATH_LEN,
            src_node,
            dest_node,
            Some(&priority),
        );

        Ok(path
            .iter()
            .map(|&node| {
                let entry = &self.nodes[node as usize];
                LinkStep {
                    name: entry.name.clone(),
                    kind: entry.kind,
                }
            })
            .collect())
    }

    /// Computes the degrees-of-separation distribution around a cast member.
    ///
    /// Returns `None` when `name` is not a known cast member. Levels from
    /// the full-graph BFS are halved because every cast-to-cast hop passes
    /// through a film node.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn center(&self, name: &str) -> Option<CenterStats> {
        let center_node = self.cast_node(name)?;
        let levels = self.graph.find_levels(center_node);

        let mut count_by_distance: BTreeMap<u32, usize> = BTreeMap::new();
        let mut total_linkable = 0usize;
        for (idx, &level) in levels.iter().enumerate() {
            if self.nodes[idx].kind != NodeKind::Cast {
                continue;
            }
            total_linkable += 1;
            if level == 0 {
                continue;
            }
            *count_by_distance.entry(level / 2).or_insert(0) += 1;
        }

        let distance_sum: u64 = count_by_distance
            .iter()
            .map(|(&distance, &count)| u64::from(distance) * count as u64)
            .sum();
        let average_distance = distance_sum as f64 / total_linkable as f64;

        Some(CenterStats {
            count_by_distance,
            total_linkable,
            average_distance,
        })
    }
}
