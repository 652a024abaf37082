//! Topological ordering of directed graphs.
//!
//! Two independent implementations: a depth-first post-order with
//! three-colour cycle detection, and Kahn's in-degree queue. Both return an
//! empty vector when the graph has a cycle, so an empty result is ambiguous
//! between "cyclic" and "no vertices"; use [`is_dag`] to tell them apart.

use crate::graph::{Direction, Graph};
use std::collections::VecDeque;
use std::hash::Hash;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Mark {
    Unvisited,
    Visiting,
    Visited,
}

/// DFS topological order as vertex indices, or empty on a cycle.
pub fn dfs_order<V>(graph: &Graph<V>) -> Vec<usize> {
    let n = graph.len();
    let mut marks = vec![Mark::Unvisited; n];
    let mut post_order = Vec::with_capacity(n);

    for v in 0..n {
        if !visit(v, graph, &mut marks, &mut post_order) {
            return Vec::new();
        }
    }

    post_order.reverse();
    post_order
}

/// Post-order DFS from `root` over an explicit path of `(vertex, cursor)`
/// frames. Returns false if a cycle is reachable from `root`.
fn visit<V>(
    root: usize,
    graph: &Graph<V>,
    marks: &mut [Mark],
    post_order: &mut Vec<usize>,
) -> bool {
    match marks[root] {
        Mark::Visited => return true,
        Mark::Visiting => return false,
        Mark::Unvisited => {}
    }

    marks[root] = Mark::Visiting;
    let mut path: Vec<(usize, usize)> = vec![(root, 0)];

    while let Some((v, cursor)) = path.last_mut() {
        let v = *v;
        if let Some(&w) = graph.neighbors(v).get(*cursor) {
            *cursor += 1;
            match marks[w] {
                Mark::Visiting => return false,
                Mark::Visited => {}
                Mark::Unvisited => {
                    marks[w] = Mark::Visiting;
                    path.push((w, 0));
                }
            }
            continue;
        }

        path.pop();
        marks[v] = Mark::Visited;
        post_order.push(v);
    }

    true
}

/// Kahn topological order as vertex indices, or empty on a cycle.
pub fn kahn_order<V>(graph: &Graph<V>) -> Vec<usize> {
    let n = graph.len();
    let mut in_degree = vec![0usize; n];
    for v in 0..n {
        for &w in graph.neighbors(v) {
            in_degree[w] += 1;
        }
    }

    let mut queue: VecDeque<usize> = (0..n).filter(|&v| in_degree[v] == 0).collect();
    let mut order = Vec::with_capacity(n);

    while let Some(v) = queue.pop_front() {
        order.push(v);
        for &w in graph.neighbors(v) {
            in_degree[w] -= 1;
            if in_degree[w] == 0 {
                queue.push_back(w);
            }
        }
    }

    if order.len() != n {
        return Vec::new(); // Cycle detected
    }
    order
}

/// Topological sort by depth-first search.
///
/// Returns an empty vector if the graph contains a cycle.
pub fn topological_sort<V: Clone>(graph: &Graph<V>) -> Vec<V> {
    let order = graph.resolve(&dfs_order(graph));
    log::debug!(
        "topological sort (dfs): {} vertices, {} ordered",
        graph.node_count(),
        order.len()
    );
    order
}

/// Topological sort using Kahn's algorithm.
///
/// Returns an empty vector if the graph contains a cycle.
pub fn topological_sort_kahn<V: Clone>(graph: &Graph<V>) -> Vec<V> {
    let order = graph.resolve(&kahn_order(graph));
    log::debug!(
        "topological sort (kahn): {} vertices, {} ordered",
        graph.node_count(),
        order.len()
    );
    order
}

/// Check if graph is a DAG (directed acyclic graph).
pub fn is_dag<V>(graph: &Graph<V>) -> bool {
    graph.is_empty() || !kahn_order(graph).is_empty()
}

/// DFS topological sort of the directed graph described by an edge list.
pub fn topological_sort_dfs_edges<V: Eq + Hash + Clone>(edges: &[(V, V)]) -> Vec<V> {
    topological_sort(&Graph::from_edges(edges, Direction::Directed))
}

/// Kahn topological sort of the directed graph described by an edge list.
pub fn topological_sort_kahn_edges<V: Eq + Hash + Clone>(edges: &[(V, V)]) -> Vec<V> {
    topological_sort_kahn(&Graph::from_edges(edges, Direction::Directed))
}
