pub mod graph;
pub mod vertex;

// Public re-exports
pub use graph::{Graph, VertexId};
pub use vertex::Vertex;
