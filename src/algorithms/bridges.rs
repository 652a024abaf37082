//! Bridges (cut edges).
//!
//! A bridge is an edge whose removal increases the number of connected
//! components. Found with the low-link traversal: the tree edge `at -> to`
//! is a bridge when `disc[at] < low[to]`, i.e. nothing in `to`'s subtree
//! reaches back to `at` or above. Equality means it does, so it is not a
//! bridge.

use super::lowlink::{self, LowLink, LowLinkVisitor};
use crate::graph::{Direction, Graph};
use std::hash::Hash;

struct BridgeRule {
    bridges: Vec<(usize, usize)>,
}

impl LowLinkVisitor for BridgeRule {
    fn child_finished(&mut self, state: &LowLink, at: usize, to: usize) {
        if state.discovery(at) < state.low_link(to) {
            self.bridges.push((at, to));
        }
    }
}

/// Find bridges as index pairs `(at, to)`, in the order the DFS returns
/// across them (post-order of the DFS forest).
pub fn bridge_indices<V: Eq + Hash + Clone>(graph: &Graph<V>) -> Vec<(usize, usize)> {
    let mut rule = BridgeRule {
        bridges: Vec::new(),
    };
    if graph.is_directed() {
        lowlink::run(&graph.to_undirected(), &mut rule);
    } else {
        lowlink::run(graph, &mut rule);
    }
    rule.bridges
}

/// Find bridges of the graph (its undirected view if directed).
///
/// Each bridge is reported as `(parent, child)` in DFS tree terms, not in
/// input orientation.
pub fn bridges<V: Eq + Hash + Clone>(graph: &Graph<V>) -> Vec<(V, V)> {
    let found: Vec<(V, V)> = bridge_indices(graph)
        .into_iter()
        .map(|(at, to)| (graph.vertices()[at].clone(), graph.vertices()[to].clone()))
        .collect();
    log::debug!(
        "bridges: {} vertices, {} bridges",
        graph.node_count(),
        found.len()
    );
    found
}

/// Find bridges of the undirected graph described by an edge list.
pub fn find_bridges<V: Eq + Hash + Clone>(edges: &[(V, V)]) -> Vec<(V, V)> {
    bridges(&Graph::from_edges(edges, Direction::Undirected))
}
