//! Reference graphs with known answers.

use connectivity_wasm::algorithms::lowlink::low_link;
use connectivity_wasm::{
    find_articulation_points, find_bridges, find_components, find_sccs,
    topological_sort_dfs_edges, topological_sort_kahn_edges, Direction, Graph,
};

const UNDIRECTED: [(u32, u32); 10] = [
    (0, 1),
    (0, 2),
    (1, 2),
    (2, 3),
    (2, 5),
    (3, 4),
    (5, 6),
    (5, 8),
    (6, 7),
    (7, 8),
];

const DIRECTED: [(u32, u32); 13] = [
    (1, 2),
    (2, 3),
    (3, 1),
    (4, 2),
    (4, 3),
    (4, 5),
    (5, 4),
    (5, 6),
    (6, 3),
    (6, 7),
    (7, 6),
    (8, 5),
    (8, 8),
];

const DAG: [(u32, u32); 6] = [(2, 3), (3, 1), (4, 1), (4, 0), (5, 0), (5, 2)];

#[test]
fn bridges_of_reference_graph() {
    assert_eq!(find_bridges(&UNDIRECTED), vec![(3, 4), (2, 3), (2, 5)]);
}

#[test]
fn bridges_with_both_orientations_listed() {
    // Listing every edge in both directions adds parallel arcs, which are
    // back edges, so no bridge survives.
    let mut doubled = UNDIRECTED.to_vec();
    doubled.extend(UNDIRECTED.iter().map(|&(a, b)| (b, a)));
    assert!(find_bridges(&doubled).is_empty());
}

#[test]
fn articulation_points_of_reference_graph() {
    assert_eq!(find_articulation_points(&UNDIRECTED), vec![2, 3, 5]);
}

#[test]
fn low_link_values_of_reference_graph() {
    let g = Graph::from_edges(&UNDIRECTED, Direction::Undirected);
    let ll = low_link(&g);
    // Vertex order: 0, 1, 2, 3, 5, 4, 6, 8, 7
    assert_eq!(ll.discovery_ids(), &[1, 2, 3, 4, 6, 5, 7, 9, 8]);
    assert_eq!(ll.low_links(), &[1, 1, 1, 4, 6, 5, 6, 6, 6]);
}

#[test]
fn sccs_of_reference_graph() {
    let sccs = find_sccs(&DIRECTED);
    assert_eq!(sccs, vec![vec![3, 2, 1], vec![7, 6], vec![5, 4], vec![8]]);
}

#[test]
fn sccs_as_sets() {
    let mut sccs = find_sccs(&DIRECTED);
    for group in sccs.iter_mut() {
        group.sort_unstable();
    }
    sccs.sort();
    assert_eq!(sccs, vec![vec![1, 2, 3], vec![4, 5], vec![6, 7], vec![8]]);
}

#[test]
fn components_of_reference_graph() {
    let edges = [(1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (4, 5), (5, 4)];
    assert_eq!(find_components(&edges), vec![vec![1, 2, 3], vec![4, 5]]);
}

#[test]
fn topological_orders_of_reference_dag() {
    for order in [topological_sort_dfs_edges(&DAG), topological_sort_kahn_edges(&DAG)] {
        let pos = |v: u32| order.iter().position(|&x| x == v).unwrap();
        for late in [0, 2] {
            assert!(pos(4) < pos(late));
            assert!(pos(5) < pos(late));
        }
        assert!(pos(2) < pos(3));
        assert!(pos(3) < pos(1));
    }
}

#[test]
fn string_vertices() {
    let edges = [("db", "api"), ("api", "web"), ("api", "worker"), ("web", "worker")];
    assert_eq!(find_bridges(&edges), vec![("db", "api")]);
    assert_eq!(find_articulation_points(&edges), vec!["api"]);
}

#[test]
fn long_path_does_not_exhaust_the_stack() {
    const N: u32 = 120_000;
    let path: Vec<(u32, u32)> = (0..N).map(|i| (i, i + 1)).collect();
    let all: Vec<u32> = (0..=N).collect();

    let bridges = find_bridges(&path);
    assert_eq!(bridges.len(), N as usize);
    assert_eq!(bridges.first(), Some(&(N - 1, N)));
    assert_eq!(bridges.last(), Some(&(0, 1)));

    assert_eq!(find_articulation_points(&path), (1..N).collect::<Vec<_>>());

    let sccs = find_sccs(&path);
    assert_eq!(sccs.len(), all.len());
    assert!(sccs.iter().all(|group| group.len() == 1));
    assert_eq!(sccs.first(), Some(&vec![N]));

    assert_eq!(find_components(&path), vec![all.clone()]);

    assert_eq!(topological_sort_dfs_edges(&path), all);
    assert_eq!(topological_sort_kahn_edges(&path), all);

    let g = Graph::from_edges(&path, Direction::Undirected);
    let ll = low_link(&g);
    assert_eq!(ll.low_links().last(), Some(&(N as usize + 1)));
}
