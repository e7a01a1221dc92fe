// lib/src/lib.rs
// The graph engine: vertex/edge store with a dual adjacency index, the
// shortest-path and rank engines built on top of it, and the text
// viewers. Single-threaded by design; embedders that share a graph
// across threads must synchronize externally.

pub mod engine;
pub mod rank;
pub mod scratch;
pub mod traversal;
pub mod view;

// Import shared types directly from the 'models' crate.
pub use models::{Edge, GraphError, GraphResult, ValidationError, ValidationResult, VertexKey};

// Explicit re-exports
pub use crate::engine::{Graph, Vertex, VertexId};
pub use crate::rank::{rank, RankConfig, RankScores};
pub use crate::scratch::Scratch;
pub use crate::traversal::{dijkstra, hops, PathRun};
