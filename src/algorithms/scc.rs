//! Strongly connected components (Tarjan).
//!
//! A vertex moves through three states: unvisited, on the stack while its
//! component is still open, and assigned once its component root finishes.
//! Unlike the undirected low-link traversal, an already-visited neighbor
//! only lowers the low-link when it is still on the stack, and then by its
//! low-link rather than its discovery id. Neighbors in closed components are
//! ignored so distinct components never merge.

use crate::graph::{Direction, Graph};
use serde::Serialize;
use std::hash::Hash;

/// Components plus cycle information.
#[derive(Debug, Clone, Serialize)]
pub struct SccResult<V> {
    /// Components in the order their roots finished
    pub components: Vec<Vec<V>>,
    /// True if any component contains a cycle
    pub has_cycles: bool,
    /// Number of components that contain a cycle
    pub cycle_count: usize,
}

struct Tarjan<'a, V> {
    graph: &'a Graph<V>,
    disc: Vec<usize>,
    low: Vec<usize>,
    on_stack: Vec<bool>,
    stack: Vec<usize>,
    time: usize,
    components: Vec<Vec<usize>>,
}

impl<'a, V> Tarjan<'a, V> {
    fn new(graph: &'a Graph<V>) -> Self {
        let n = graph.len();
        Tarjan {
            graph,
            disc: vec![0; n],
            low: vec![0; n],
            on_stack: vec![false; n],
            stack: Vec::new(),
            time: 0,
            components: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Vec<usize>> {
        for v in 0..self.graph.len() {
            if self.disc[v] == 0 {
                self.strong_connect(v);
            }
        }
        self.components
    }

    fn enter(&mut self, v: usize) {
        self.time += 1;
        self.disc[v] = self.time;
        self.low[v] = self.time;
        self.stack.push(v);
        self.on_stack[v] = true;
    }

    /// Depth-first search from `root` with an explicit path of
    /// `(vertex, neighbor cursor)` frames.
    fn strong_connect(&mut self, root: usize) {
        let graph = self.graph;
        self.enter(root);
        let mut path: Vec<(usize, usize)> = vec![(root, 0)];

        while let Some((at, cursor)) = path.last_mut() {
            let at = *at;
            if let Some(&to) = graph.neighbors(at).get(*cursor) {
                *cursor += 1;
                if self.disc[to] == 0 {
                    self.enter(to);
                    path.push((to, 0));
                } else if self.on_stack[to] {
                    self.low[at] = self.low[at].min(self.low[to]);
                }
                continue;
            }

            // All neighbors done: close the component if `at` is its root,
            // then hand the low-link up to the tree parent.
            path.pop();
            if self.disc[at] == self.low[at] {
                self.close_component(at);
            }
            if let Some(&(parent, _)) = path.last() {
                self.low[parent] = self.low[parent].min(self.low[at]);
            }
        }
    }

    fn close_component(&mut self, root: usize) {
        let mut component = Vec::new();
        while let Some(v) = self.stack.pop() {
            self.on_stack[v] = false;
            component.push(v);
            if v == root {
                break;
            }
        }
        self.components.push(component);
    }
}

/// Find strongly connected components as groups of vertex indices.
///
/// Groups come out in the order their roots finish, which is a reverse
/// topological order of the condensation.
pub fn scc_indices<V>(graph: &Graph<V>) -> Vec<Vec<usize>> {
    Tarjan::new(graph).run()
}

/// Partition the vertices into strongly connected components.
pub fn strongly_connected_components<V: Clone>(graph: &Graph<V>) -> Vec<Vec<V>> {
    let components: Vec<Vec<V>> = scc_indices(graph)
        .iter()
        .map(|group| graph.resolve(group))
        .collect();
    log::debug!(
        "scc: {} vertices, {} components",
        graph.node_count(),
        components.len()
    );
    components
}

/// Strongly connected components with cycle statistics.
///
/// A component counts as cyclic if it has more than one vertex, or a single
/// vertex with an edge to itself.
pub fn tarjan_scc<V: Clone>(graph: &Graph<V>) -> SccResult<V> {
    let groups = scc_indices(graph);
    let cycle_count = groups
        .iter()
        .filter(|group| match group.as_slice() {
            [v] => graph.neighbors(*v).contains(v),
            _ => true,
        })
        .count();

    log::debug!(
        "tarjan scc: {} vertices, {} components, {} cyclic",
        graph.node_count(),
        groups.len(),
        cycle_count
    );

    SccResult {
        components: groups.iter().map(|group| graph.resolve(group)).collect(),
        has_cycles: cycle_count > 0,
        cycle_count,
    }
}

/// Find strongly connected components of the directed graph described by an edge list.
pub fn find_sccs<V: Eq + Hash + Clone>(edges: &[(V, V)]) -> Vec<Vec<V>> {
    strongly_connected_components(&Graph::from_edges(edges, Direction::Directed))
}
