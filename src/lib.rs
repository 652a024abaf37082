//! Structural connectivity for graphs built from edge lists.
//!
//! Bridges, articulation points and strongly connected components via
//! single-pass low-link depth-first search, plus connected components,
//! topological ordering and reachability. Everything runs on a [`Graph`]
//! built once per call; the same algorithms are exposed to JavaScript
//! through [`ConnectivityGraph`].

pub mod algorithms;
pub mod bindings;
pub mod error;
pub mod graph;

pub use algorithms::articulation::{articulation_points, find_articulation_points};
pub use algorithms::bridges::{bridges, find_bridges};
pub use algorithms::components::{connected_components, find_components};
pub use algorithms::scc::{find_sccs, strongly_connected_components, tarjan_scc, SccResult};
pub use algorithms::topo::{
    is_dag, topological_sort, topological_sort_dfs_edges, topological_sort_kahn,
    topological_sort_kahn_edges,
};
pub use bindings::ConnectivityGraph;
pub use error::GraphError;
pub use graph::{Direction, EdgePolicy, Graph, GraphConfig};

use wasm_bindgen::prelude::*;

/// Module start hook: route Rust panics to the browser console.
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}
