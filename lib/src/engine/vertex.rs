// lib/src/engine/vertex.rs

use models::VertexKey;

use super::graph::VertexId;

/// A vertex record owned by the store: the key plus both sides of the
/// adjacency index. Algorithm state (distances, ranks) lives in per-run
/// maps inside the engines, never here.
#[derive(Clone, Debug)]
pub struct Vertex {
    pub(crate) key: VertexKey,
    /// Outbound edges, at most one entry per target.
    pub(crate) outbound: Vec<(VertexId, u64)>,
    /// Back-index: vertices holding an outbound edge to this one.
    pub(crate) inbound: Vec<VertexId>,
}

impl Vertex {
    pub(crate) fn new(key: VertexKey) -> Self {
        Vertex {
            key,
            outbound: Vec::new(),
            inbound: Vec::new(),
        }
    }

    pub fn key(&self) -> VertexKey {
        self.key
    }

    /// Number of outbound edges. The rank engine uses this as the
    /// distribution divisor and to detect sink vertices.
    pub fn out_degree(&self) -> usize {
        self.outbound.len()
    }

    /// Number of inbound edges recorded in the back-index.
    pub fn in_degree(&self) -> usize {
        self.inbound.len()
    }
}
