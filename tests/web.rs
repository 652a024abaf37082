//! Browser tests for the JavaScript facade.
//!
//! Run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use connectivity_wasm::ConnectivityGraph;
use wasm_bindgen::JsError;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn ok<T>(result: Result<T, JsError>) -> T {
    result.unwrap_or_else(|_| panic!("query failed"))
}

fn reference_graph() -> ConnectivityGraph {
    ok(ConnectivityGraph::from_edges_json(
        r#"[["0","1"],["0","2"],["1","2"],["2","3"],["2","5"],
            ["3","4"],["5","6"],["5","8"],["6","7"],["7","8"]]"#,
    ))
}

#[wasm_bindgen_test]
fn bridges_round_trip() {
    let value = ok(reference_graph().bridges());
    let bridges: Vec<(String, String)> = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(
        bridges,
        vec![
            ("3".to_string(), "4".to_string()),
            ("2".to_string(), "3".to_string()),
            ("2".to_string(), "5".to_string()),
        ]
    );
}

#[wasm_bindgen_test]
fn articulation_points_round_trip() {
    let value = ok(reference_graph().articulation_points());
    let points: Vec<String> = serde_wasm_bindgen::from_value(value).unwrap();
    assert_eq!(points, vec!["2", "3", "5"]);
}

#[wasm_bindgen_test]
fn cyclic_graph_has_empty_order() {
    let mut g = ConnectivityGraph::new();
    g.add_edge("a", "b");
    g.add_edge("b", "a");
    let order: Vec<String> = serde_wasm_bindgen::from_value(ok(g.topological_sort())).unwrap();
    assert!(order.is_empty());
    assert!(!ok(g.is_dag()));
}

#[wasm_bindgen_test]
fn strict_mode_rejects_self_loop() {
    let mut g = ConnectivityGraph::new();
    g.add_edge("a", "a");
    g.set_strict(true);
    assert!(g.tarjan_scc().is_err());
}

#[wasm_bindgen_test]
fn reachability_by_vertex_id() {
    let mut g = ConnectivityGraph::new();
    g.add_edge("a", "b");
    g.add_edge("b", "c");
    let from_b: Vec<String> = serde_wasm_bindgen::from_value(ok(g.reachable_from("b"))).unwrap();
    assert_eq!(from_b, vec!["b", "c"]);
    let to_b: Vec<String> = serde_wasm_bindgen::from_value(ok(g.reachable_to("b"))).unwrap();
    assert_eq!(to_b, vec!["b", "a"]);
    let unknown: Vec<String> = serde_wasm_bindgen::from_value(ok(g.reachable_from("z"))).unwrap();
    assert!(unknown.is_empty());
}
