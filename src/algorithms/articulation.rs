//! Articulation points (cut vertices) algorithm.
//!
//! Finds vertices whose removal disconnects the graph.
//! Uses Tarjan's algorithm on the undirected view.

use super::lowlink::{self, LowLink, LowLinkVisitor};
use crate::graph::{Direction, Graph};
use std::hash::Hash;

/// Tarjan's decision rule for cut vertices.
///
/// A vertex v is an articulation point if:
/// 1. v is root of DFS tree and has >1 children, OR
/// 2. v is not root and has child u with low[u] >= disc[v]
///
/// Rule 2 is applied to every vertex while the DFS unwinds; the root's mark
/// is overwritten by rule 1 once its tree is complete.
struct ArticulationRule {
    is_ap: Vec<bool>,
}

impl LowLinkVisitor for ArticulationRule {
    fn child_finished(&mut self, state: &LowLink, at: usize, to: usize) {
        // Non-strict: a cycle that closes exactly at `at` still leaves `at`
        // separating `to`'s subtree from the rest.
        if state.discovery(at) <= state.low_link(to) {
            self.is_ap[at] = true;
        }
    }

    fn root_finished(&mut self, _state: &LowLink, root: usize, children: usize) {
        self.is_ap[root] = children > 1;
    }
}

/// Find articulation points as vertex indices, in index order.
pub fn articulation_indices<V: Eq + Hash + Clone>(graph: &Graph<V>) -> Vec<usize> {
    let n = graph.len();
    if n == 0 {
        return Vec::new();
    }

    let mut rule = ArticulationRule {
        is_ap: vec![false; n],
    };
    if graph.is_directed() {
        lowlink::run(&graph.to_undirected(), &mut rule);
    } else {
        lowlink::run(graph, &mut rule);
    }

    rule.is_ap
        .iter()
        .enumerate()
        .filter_map(|(i, &ap)| if ap { Some(i) } else { None })
        .collect()
}

/// Find articulation points of the graph (its undirected view if directed).
///
/// Vertices are returned in insertion order.
pub fn articulation_points<V: Eq + Hash + Clone>(graph: &Graph<V>) -> Vec<V> {
    let ap = graph.resolve(&articulation_indices(graph));
    log::debug!(
        "articulation points: {} vertices, {} cut vertices",
        graph.node_count(),
        ap.len()
    );
    ap
}

/// Find articulation points of the undirected graph described by an edge list.
pub fn find_articulation_points<V: Eq + Hash + Clone>(edges: &[(V, V)]) -> Vec<V> {
    articulation_points(&Graph::from_edges(edges, Direction::Undirected))
}
