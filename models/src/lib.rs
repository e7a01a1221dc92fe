// models/src/lib.rs
// Shared data types for the graph engine: vertex keys, edge records and
// the error taxonomy. Kept separate from the engine crate so the CLI can
// consume them without pulling in the algorithms.

pub mod edges;
pub mod errors;
pub mod keys;

pub use edges::Edge;
pub use errors::{GraphError, GraphResult, ValidationError, ValidationResult};
pub use keys::VertexKey;
