//! Graph algorithm implementations.
//!
//! The low-link traversal is shared by bridge and articulation point
//! detection; Tarjan's SCC keeps its own stack-gated variant.

pub mod articulation;
pub mod bridges;
pub mod components;
pub mod lowlink;
pub mod reachability;
pub mod scc;
pub mod topo;
