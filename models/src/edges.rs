// models/src/edges.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::keys::VertexKey;

/// A directed, weighted edge between two vertices.
///
/// The edge's identity is the ordered `(from, to)` pair; a graph holds at
/// most one edge per pair. This is the record yielded by graph iteration
/// and written by the dump routine; the store itself keeps edges inside
/// its adjacency index.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Edge {
    /// Source vertex.
    pub from: VertexKey,

    /// Target vertex.
    pub to: VertexKey,

    /// Non-negative edge weight.
    pub weight: u64,
}

impl Edge {
    /// Create a new edge record.
    pub fn new(from: impl Into<VertexKey>, to: impl Into<VertexKey>, weight: u64) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.from, self.to, self.weight)
    }
}
