//! Connected components of an undirected graph.

use crate::graph::{Direction, Graph};
use std::hash::Hash;

/// Label every vertex with the component it belongs to.
///
/// Component ids are assigned in the order their first vertex is met while
/// scanning vertices in insertion order.
fn component_ids<V>(graph: &Graph<V>) -> (Vec<usize>, usize) {
    let n = graph.len();
    let mut comp = vec![usize::MAX; n];
    let mut count = 0;

    for start in 0..n {
        if comp[start] == usize::MAX {
            label(start, count, graph, &mut comp);
            count += 1;
        }
    }

    (comp, count)
}

/// Flood `id` over everything reachable from `start`, using an explicit
/// stack of pending vertices.
fn label<V>(start: usize, id: usize, graph: &Graph<V>, comp: &mut [usize]) {
    comp[start] = id;
    let mut pending = vec![start];
    while let Some(at) = pending.pop() {
        for &to in graph.neighbors(at) {
            if comp[to] == usize::MAX {
                comp[to] = id;
                pending.push(to);
            }
        }
    }
}

/// Group vertex indices by connected component.
///
/// Each group lists its vertices in index order.
pub fn component_indices<V: Eq + Hash + Clone>(graph: &Graph<V>) -> Vec<Vec<usize>> {
    let (comp, count) = if graph.is_directed() {
        component_ids(&graph.to_undirected())
    } else {
        component_ids(graph)
    };

    let mut groups = vec![Vec::new(); count];
    for (v, &c) in comp.iter().enumerate() {
        groups[c].push(v);
    }
    groups
}

/// Connected components of the graph (its undirected view if directed).
pub fn connected_components<V: Eq + Hash + Clone>(graph: &Graph<V>) -> Vec<Vec<V>> {
    let components: Vec<Vec<V>> = component_indices(graph)
        .iter()
        .map(|group| graph.resolve(group))
        .collect();
    log::debug!(
        "components: {} vertices, {} components",
        graph.node_count(),
        components.len()
    );
    components
}

/// Number of connected components.
pub fn component_count<V: Eq + Hash + Clone>(graph: &Graph<V>) -> usize {
    if graph.is_directed() {
        component_ids(&graph.to_undirected()).1
    } else {
        component_ids(graph).1
    }
}

/// Connected components of the undirected graph described by an edge list.
pub fn find_components<V: Eq + Hash + Clone>(edges: &[(V, V)]) -> Vec<Vec<V>> {
    connected_components(&Graph::from_edges(edges, Direction::Undirected))
}
