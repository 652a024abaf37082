//! Low-link depth-first search over an undirected graph.
//!
//! One DFS is started from every unvisited vertex, in insertion order, so
//! disconnected graphs are covered by several DFS trees. Each vertex gets a
//! discovery id (1, 2, 3, ... in visiting order) and a low-link value, the
//! smallest discovery id reachable from its subtree using at most one back
//! edge.
//!
//! Bridge and articulation point detection hook into the traversal through
//! [`LowLinkVisitor`]; the traversal itself owns the low-link updates.

use crate::graph::Graph;

/// Per-invocation traversal state.
///
/// Indexed by vertex index. A discovery id of 0 means the vertex was never
/// visited, which only happens for an empty graph.
#[derive(Debug, Clone)]
pub struct LowLink {
    disc: Vec<usize>,
    low: Vec<usize>,
    time: usize,
}

impl LowLink {
    fn new(n: usize) -> Self {
        LowLink {
            disc: vec![0; n],
            low: vec![0; n],
            time: 0,
        }
    }

    fn is_visited(&self, v: usize) -> bool {
        self.disc[v] != 0
    }

    fn visit(&mut self, v: usize) {
        self.time += 1;
        self.disc[v] = self.time;
        self.low[v] = self.time;
    }

    /// Discovery id of a vertex.
    pub fn discovery(&self, v: usize) -> usize {
        self.disc[v]
    }

    /// Low-link value of a vertex.
    pub fn low_link(&self, v: usize) -> usize {
        self.low[v]
    }

    /// Discovery ids for all vertices in index order.
    pub fn discovery_ids(&self) -> &[usize] {
        &self.disc
    }

    /// Low-link values for all vertices in index order.
    pub fn low_links(&self) -> &[usize] {
        &self.low
    }
}

/// Decision rules attached to the low-link traversal.
pub(crate) trait LowLinkVisitor {
    /// Called right after the DFS returns from tree child `to` of `at`,
    /// once `at`'s low-link has absorbed `to`'s.
    fn child_finished(&mut self, _state: &LowLink, _at: usize, _to: usize) {}

    /// Called once the DFS tree rooted at `root` is fully explored.
    /// `children` is the number of tree edges leaving the root.
    fn root_finished(&mut self, _state: &LowLink, _root: usize, _children: usize) {}
}

impl LowLinkVisitor for () {}

/// Compute discovery ids and low-link values for every vertex.
///
/// Directed graphs are traversed through their undirected view.
pub fn low_link<V: Eq + std::hash::Hash + Clone>(graph: &Graph<V>) -> LowLink {
    if graph.is_directed() {
        run(&graph.to_undirected(), &mut ())
    } else {
        run(graph, &mut ())
    }
}

/// Run the traversal over an undirected graph, reporting to `visitor`.
pub(crate) fn run<V, F: LowLinkVisitor>(graph: &Graph<V>, visitor: &mut F) -> LowLink {
    debug_assert!(!graph.is_directed());
    let n = graph.len();
    let mut state = LowLink::new(n);

    for root in 0..n {
        if !state.is_visited(root) {
            let children = explore(root, graph, &mut state, visitor);
            visitor.root_finished(&state, root, children);
        }
    }

    state
}

/// One vertex on the explicit DFS path.
struct Frame {
    at: usize,
    parent: Option<usize>,
    /// Next position in `at`'s neighbor list
    cursor: usize,
    parent_skipped: bool,
    children: usize,
}

impl Frame {
    fn enter(at: usize, parent: Option<usize>) -> Self {
        Frame {
            at,
            parent,
            cursor: 0,
            parent_skipped: false,
            children: 0,
        }
    }
}

/// Explore the DFS tree rooted at `root` with an explicit frame stack.
/// Returns the number of tree children of the root.
///
/// A frame is popped only after its whole neighbor list is consumed, so the
/// parent's low-link update and `child_finished` happen in post-order, the
/// same as in a recursive formulation.
fn explore<V, F: LowLinkVisitor>(
    root: usize,
    graph: &Graph<V>,
    state: &mut LowLink,
    visitor: &mut F,
) -> usize {
    let mut root_children = 0;
    state.visit(root);
    let mut path = vec![Frame::enter(root, None)];

    while let Some(frame) = path.last_mut() {
        let at = frame.at;

        if let Some(&to) = graph.neighbors(at).get(frame.cursor) {
            frame.cursor += 1;

            // Skip the tree edge we came in on, once. A parallel copy of it
            // is a genuine back edge.
            if Some(to) == frame.parent && !frame.parent_skipped {
                frame.parent_skipped = true;
                continue;
            }

            if !state.is_visited(to) {
                frame.children += 1;
                state.visit(to);
                path.push(Frame::enter(to, Some(at)));
            } else {
                // Back edge: use the discovery id, not the low-link.
                state.low[at] = state.low[at].min(state.disc[to]);
            }
            continue;
        }

        let done = path.pop().map_or(0, |f| f.children);
        match path.last() {
            Some(parent) => {
                let parent = parent.at;
                state.low[parent] = state.low[parent].min(state.low[at]);
                visitor.child_finished(state, parent, at);
            }
            None => root_children = done,
        }
    }

    root_children
}
