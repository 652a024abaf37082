//! JavaScript-facing graph handle.
//!
//! Holds a plain edge list with string vertex ids. Every query builds a fresh
//! [`Graph`] for that call, runs one algorithm and hands the result to JS via
//! `serde-wasm-bindgen`; nothing is cached between calls.

use crate::algorithms::{articulation, bridges, components, reachability, scc, topo};
use crate::error::GraphError;
use crate::graph::{Direction, EdgePolicy, Graph, GraphConfig};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Edge list exposed to JavaScript.
#[wasm_bindgen]
pub struct ConnectivityGraph {
    edges: Vec<(String, String)>,
    config: GraphConfig,
}

#[wasm_bindgen]
impl ConnectivityGraph {
    /// Create an empty, permissive edge list.
    #[wasm_bindgen(constructor)]
    pub fn new() -> ConnectivityGraph {
        ConnectivityGraph {
            edges: Vec::new(),
            config: GraphConfig::default(),
        }
    }

    /// Load edges from a JSON array of `[from, to]` string pairs.
    #[wasm_bindgen(js_name = fromEdgesJson)]
    pub fn from_edges_json(json: &str) -> Result<ConnectivityGraph, JsError> {
        let edges = parse_edges(json)?;
        Ok(ConnectivityGraph {
            edges,
            config: GraphConfig::default(),
        })
    }

    /// Append an edge. Duplicates and self-loops are kept.
    #[wasm_bindgen(js_name = addEdge)]
    pub fn add_edge(&mut self, from: &str, to: &str) {
        self.edges.push((from.to_string(), to.to_string()));
    }

    /// Reject self-loops and duplicate edges on every following query.
    #[wasm_bindgen(js_name = setStrict)]
    pub fn set_strict(&mut self, strict: bool) {
        self.config.edge_policy = if strict {
            EdgePolicy::Strict
        } else {
            EdgePolicy::Permissive
        };
    }

    /// Number of edges as listed.
    #[wasm_bindgen(js_name = edgeCount)]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct vertices mentioned by the edges.
    #[wasm_bindgen(js_name = nodeCount)]
    pub fn node_count(&self) -> usize {
        Graph::from_edges(&self.edges, Direction::Directed).node_count()
    }

    /// Bridges of the undirected graph as `[from, to]` pairs.
    pub fn bridges(&self) -> Result<JsValue, JsError> {
        let graph = self.build(Direction::Undirected)?;
        Ok(to_js(&bridges::bridges(&graph)))
    }

    /// Articulation points of the undirected graph.
    #[wasm_bindgen(js_name = articulationPoints)]
    pub fn articulation_points(&self) -> Result<JsValue, JsError> {
        let graph = self.build(Direction::Undirected)?;
        Ok(to_js(&articulation::articulation_points(&graph)))
    }

    /// Strongly connected components of the directed graph as `string[][]`.
    #[wasm_bindgen(js_name = stronglyConnectedComponents)]
    pub fn strongly_connected_components(&self) -> Result<JsValue, JsError> {
        let graph = self.build(Direction::Directed)?;
        Ok(to_js(&scc::strongly_connected_components(&graph)))
    }

    /// Tarjan SCC with cycle info.
    /// Returns JSON: { components: string[][], has_cycles: bool, cycle_count: number }
    #[wasm_bindgen(js_name = tarjanScc)]
    pub fn tarjan_scc(&self) -> Result<JsValue, JsError> {
        let graph = self.build(Direction::Directed)?;
        Ok(to_js(&scc::tarjan_scc(&graph)))
    }

    /// Connected components of the undirected graph as `string[][]`.
    #[wasm_bindgen(js_name = connectedComponents)]
    pub fn connected_components(&self) -> Result<JsValue, JsError> {
        let graph = self.build(Direction::Undirected)?;
        Ok(to_js(&components::connected_components(&graph)))
    }

    /// DFS topological order, or an empty array if the graph has cycles.
    #[wasm_bindgen(js_name = topologicalSort)]
    pub fn topological_sort(&self) -> Result<JsValue, JsError> {
        let graph = self.build(Direction::Directed)?;
        Ok(to_js(&topo::topological_sort(&graph)))
    }

    /// Kahn topological order, or an empty array if the graph has cycles.
    #[wasm_bindgen(js_name = topologicalSortKahn)]
    pub fn topological_sort_kahn(&self) -> Result<JsValue, JsError> {
        let graph = self.build(Direction::Directed)?;
        Ok(to_js(&topo::topological_sort_kahn(&graph)))
    }

    /// Vertex ids reachable from `id` along directed edges, `id` included.
    /// Unknown ids give an empty array.
    #[wasm_bindgen(js_name = reachableFrom)]
    pub fn reachable_from(&self, id: &str) -> Result<JsValue, JsError> {
        let graph = self.build(Direction::Directed)?;
        Ok(to_js(&reachability::vertices_reachable_from(&graph, &id.to_string())))
    }

    /// Vertex ids that reach `id` along directed edges, `id` included.
    /// Unknown ids give an empty array.
    #[wasm_bindgen(js_name = reachableTo)]
    pub fn reachable_to(&self, id: &str) -> Result<JsValue, JsError> {
        let graph = self.build(Direction::Directed)?;
        Ok(to_js(&reachability::vertices_reaching(&graph, &id.to_string())))
    }

    /// Check if the directed graph is acyclic.
    #[wasm_bindgen(js_name = isDag)]
    pub fn is_dag(&self) -> Result<bool, JsError> {
        let graph = self.build(Direction::Directed)?;
        Ok(topo::is_dag(&graph))
    }
}

// Internal methods (not exposed to WASM)
impl ConnectivityGraph {
    /// Build the graph for one query under the current edge policy.
    pub(crate) fn build(&self, direction: Direction) -> Result<Graph<String>, GraphError> {
        Graph::from_edges_with(&self.edges, direction, &self.config)
    }
}

impl Default for ConnectivityGraph {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode a JSON array of `[from, to]` pairs.
pub fn parse_edges(json: &str) -> Result<Vec<(String, String)>, GraphError> {
    Ok(serde_json::from_str(json)?)
}

fn to_js<T: Serialize + ?Sized>(value: &T) -> JsValue {
    serde_wasm_bindgen::to_value(value).unwrap_or(JsValue::NULL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_edges() {
        let edges = parse_edges(r#"[["a","b"],["b","c"]]"#).unwrap();
        assert_eq!(
            edges,
            vec![
                ("a".to_string(), "b".to_string()),
                ("b".to_string(), "c".to_string())
            ]
        );
    }

    #[test]
    fn test_parse_edges_rejects_garbage() {
        assert!(matches!(
            parse_edges(r#"[["a"]]"#),
            Err(GraphError::InvalidEdgeList(_))
        ));
        assert!(parse_edges("not json").is_err());
    }

    #[test]
    fn test_counts() {
        let mut g = ConnectivityGraph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        g.add_edge("a", "b");
        assert_eq!(g.edge_count(), 3);
        assert_eq!(g.node_count(), 3);
    }

    #[test]
    fn test_build_per_direction() {
        let mut g = ConnectivityGraph::default();
        g.add_edge("a", "b");
        let directed = g.build(Direction::Directed).unwrap();
        let undirected = g.build(Direction::Undirected).unwrap();
        assert!(directed.neighbors(1).is_empty());
        assert_eq!(undirected.neighbors(1), &[0]);
    }

    #[test]
    fn test_reachability_over_built_graph() {
        let mut g = ConnectivityGraph::new();
        g.add_edge("a", "b");
        g.add_edge("b", "c");
        let graph = g.build(Direction::Directed).unwrap();
        assert_eq!(
            reachability::vertices_reachable_from(&graph, &"b".to_string()),
            vec!["b".to_string(), "c".to_string()]
        );
        assert_eq!(
            reachability::vertices_reaching(&graph, &"b".to_string()),
            vec!["b".to_string(), "a".to_string()]
        );
    }

    #[test]
    fn test_strict_mode_toggles() {
        let mut g = ConnectivityGraph::new();
        g.add_edge("a", "a");
        assert!(g.build(Direction::Directed).is_ok());

        g.set_strict(true);
        assert!(matches!(
            g.build(Direction::Directed),
            Err(GraphError::SelfLoop { .. })
        ));

        g.set_strict(false);
        assert!(g.build(Direction::Directed).is_ok());
    }
}
