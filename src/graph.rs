//! Core graph structure with adjacency lists.
//!
//! A [`Graph`] is built once from a flat list of vertex pairs and is read-only
//! afterwards. Vertices are interned to dense indices in the order they are
//! first mentioned, so every algorithm can keep its traversal state in plain
//! vectors and iterate roots deterministically.

use crate::error::GraphError;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

/// Whether an edge may be walked against its stated direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Only `from -> to` is traversable.
    Directed,
    /// Each edge is registered as a neighbor link in both directions.
    Undirected,
}

/// How the builder treats edges that textbook graphs do not contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Keep self-loops and duplicate edges exactly as listed.
    #[default]
    Permissive,
    /// Reject self-loops and duplicate edges with a [`GraphError`].
    Strict,
}

/// Construction options for [`Graph::from_edges_with`].
#[derive(Debug, Clone, Copy, Default)]
pub struct GraphConfig {
    pub edge_policy: EdgePolicy,
}

impl GraphConfig {
    /// Config that rejects self-loops and duplicate edges.
    pub fn strict() -> Self {
        GraphConfig {
            edge_policy: EdgePolicy::Strict,
        }
    }
}

/// Graph over opaque vertex values, stored as adjacency lists of indices.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// Vertex values, indexed by insertion order
    nodes: Vec<V>,

    /// Reverse lookup: vertex -> index
    node_index: HashMap<V, usize>,

    /// adj[u] = neighbors of u in edge input order
    adj: Vec<Vec<usize>>,

    /// Logical edges in input order (one entry per input pair)
    edges: Vec<(usize, usize)>,

    direction: Direction,
}

impl<V: Eq + Hash + Clone> Graph<V> {
    /// Create an empty graph.
    pub fn new(direction: Direction) -> Self {
        Graph {
            nodes: Vec::new(),
            node_index: HashMap::new(),
            adj: Vec::new(),
            edges: Vec::new(),
            direction,
        }
    }

    /// Create a graph with pre-allocated capacity.
    pub fn with_capacity(direction: Direction, node_capacity: usize, edge_capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(node_capacity),
            node_index: HashMap::with_capacity(node_capacity),
            adj: Vec::with_capacity(node_capacity),
            edges: Vec::with_capacity(edge_capacity),
            direction,
        }
    }

    /// Build a graph from `(from, to)` pairs.
    ///
    /// Every vertex mentioned by a pair gets an entry, possibly with no
    /// neighbors. Duplicates and self-loops are kept as listed.
    pub fn from_edges(edges: &[(V, V)], direction: Direction) -> Self {
        let mut graph = Graph::with_capacity(direction, edges.len(), edges.len());
        for (from, to) in edges {
            let u = graph.add_node(from.clone());
            let v = graph.add_node(to.clone());
            graph.add_edge(u, v);
        }
        log::trace!(
            "built {:?} graph: {} vertices, {} edges",
            direction,
            graph.node_count(),
            graph.edge_count()
        );
        graph
    }

    /// Add a node, returns its index. Idempotent - returns existing index if already present.
    pub fn add_node(&mut self, id: V) -> usize {
        if let Some(&idx) = self.node_index.get(&id) {
            return idx;
        }
        let idx = self.nodes.len();
        self.node_index.insert(id.clone(), idx);
        self.nodes.push(id);
        self.adj.push(Vec::new());
        idx
    }

    /// Add an edge between two existing node indices.
    ///
    /// Not idempotent: a repeated edge appears twice in the neighbor lists.
    pub fn add_edge(&mut self, from: usize, to: usize) {
        if from >= self.nodes.len() || to >= self.nodes.len() {
            return; // Silently ignore invalid edges
        }

        self.adj[from].push(to);
        if self.direction == Direction::Undirected {
            self.adj[to].push(from);
        }
        self.edges.push((from, to));
    }

    /// Get node index by value.
    pub fn index_of(&self, id: &V) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    /// Undirected view of this graph with the same vertex indices and edges.
    pub fn to_undirected(&self) -> Graph<V> {
        if self.direction == Direction::Undirected {
            return self.clone();
        }
        let mut graph = Graph::with_capacity(Direction::Undirected, self.len(), self.edges.len());
        for id in &self.nodes {
            graph.add_node(id.clone());
        }
        for &(from, to) in &self.edges {
            graph.add_edge(from, to);
        }
        graph
    }
}

impl<V: Eq + Hash + Clone + Debug> Graph<V> {
    /// Build a graph from `(from, to)` pairs, validating them against `config`.
    pub fn from_edges_with(
        edges: &[(V, V)],
        direction: Direction,
        config: &GraphConfig,
    ) -> Result<Self, GraphError> {
        if config.edge_policy == EdgePolicy::Strict {
            validate_edges(edges, direction)?;
        }
        Ok(Graph::from_edges(edges, direction))
    }
}

impl<V> Graph<V> {
    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of logical edges (an undirected edge counts once).
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_directed(&self) -> bool {
        self.direction == Direction::Directed
    }

    /// Check if graph is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get node value by index.
    pub fn vertex(&self, idx: usize) -> Option<&V> {
        self.nodes.get(idx)
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> &[V] {
        &self.nodes
    }

    /// Neighbors of a node in edge input order.
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adj.get(node).map_or(&[], |v| v.as_slice())
    }

    /// Iterate over logical edges as index pairs, in input order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.edges.iter().copied()
    }

    /// Get node count (internal).
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl<V: Clone> Graph<V> {
    /// Map a list of indices back to vertex values.
    pub(crate) fn resolve(&self, indices: &[usize]) -> Vec<V> {
        indices.iter().map(|&i| self.nodes[i].clone()).collect()
    }
}

fn validate_edges<V: Eq + Hash + Debug>(
    edges: &[(V, V)],
    direction: Direction,
) -> Result<(), GraphError> {
    let mut seen: HashSet<(&V, &V)> = HashSet::with_capacity(edges.len());
    for (from, to) in edges {
        if from == to {
            return Err(GraphError::SelfLoop {
                vertex: format!("{:?}", from),
            });
        }
        let reversed_seen = direction == Direction::Undirected && seen.contains(&(to, from));
        if !seen.insert((from, to)) || reversed_seen {
            return Err(GraphError::DuplicateEdge {
                from: format!("{:?}", from),
                to: format!("{:?}", to),
            });
        }
    }
    Ok(())
}
