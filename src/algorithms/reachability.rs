//! Reachability queries.
//!
//! Breadth-first searches forward along edges or backward against them.
//! Two vertices share a strongly connected component iff each reaches the
//! other, which is how the SCC partition is checked.

use crate::graph::Graph;
use std::hash::Hash;

/// Breadth-first order from `source`, source first. The visit order doubles
/// as the work queue: `head` walks it while new vertices are appended.
fn breadth_first<'g, F>(n: usize, source: usize, next: F) -> Vec<usize>
where
    F: Fn(usize) -> &'g [usize],
{
    if source >= n {
        return Vec::new();
    }

    let mut seen = vec![false; n];
    seen[source] = true;
    let mut order = vec![source];
    let mut head = 0;

    while let Some(&v) = order.get(head) {
        head += 1;
        for &w in next(v) {
            if !seen[w] {
                seen[w] = true;
                order.push(w);
            }
        }
    }

    order
}

/// Predecessor lists: `preds[v]` holds every `u` with an edge `u -> v`.
fn predecessors<V>(graph: &Graph<V>) -> Vec<Vec<usize>> {
    let mut preds = vec![Vec::new(); graph.node_count()];
    for u in 0..graph.node_count() {
        for &v in graph.neighbors(u) {
            preds[v].push(u);
        }
    }
    preds
}

/// Indices reachable from `source` along edges, `source` included.
///
/// Empty for an out-of-range index.
pub fn reachable_from<V>(graph: &Graph<V>, source: usize) -> Vec<usize> {
    breadth_first(graph.node_count(), source, |v| graph.neighbors(v))
}

/// Indices that reach `target` along edges, `target` included.
///
/// Empty for an out-of-range index.
pub fn reachable_to<V>(graph: &Graph<V>, target: usize) -> Vec<usize> {
    let preds = predecessors(graph);
    breadth_first(graph.node_count(), target, |v| preds[v].as_slice())
}

/// Check whether `to` is reachable from `from`.
pub fn is_reachable<V>(graph: &Graph<V>, from: usize, to: usize) -> bool {
    reachable_from(graph, from).contains(&to)
}

/// Vertices reachable from `source`, in breadth-first order.
///
/// Empty if `source` is not a vertex of the graph.
pub fn vertices_reachable_from<V: Eq + Hash + Clone>(graph: &Graph<V>, source: &V) -> Vec<V> {
    let found = graph
        .index_of(source)
        .map_or_else(Vec::new, |idx| graph.resolve(&reachable_from(graph, idx)));
    log::debug!("reachable from: {} of {} vertices", found.len(), graph.node_count());
    found
}

/// Vertices that reach `target`, in breadth-first order against the edges.
///
/// Empty if `target` is not a vertex of the graph.
pub fn vertices_reaching<V: Eq + Hash + Clone>(graph: &Graph<V>, target: &V) -> Vec<V> {
    let found = graph
        .index_of(target)
        .map_or_else(Vec::new, |idx| graph.resolve(&reachable_to(graph, idx)));
    log::debug!("reaching: {} of {} vertices", found.len(), graph.node_count());
    found
}
