// lib/src/traversal.rs

//! Single-source shortest paths over the forward adjacency index.
//!
//! Two relaxations are offered: [`dijkstra`] orders the frontier by
//! accumulated edge weight (the data model is weighted, so this is the
//! primary entry point), while [`hops`] counts hops over a FIFO queue
//! and ignores the stored weights. Both leave their per-run state in a
//! [`PathRun`]; nothing is written back onto the vertex records.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use log::trace;
use models::VertexKey;

use crate::engine::{Graph, VertexId};
use crate::scratch::Scratch;

/// Per-run traversal state: distance and predecessor per reached vertex,
/// keyed by handle. Meaningless once the graph is mutated.
#[derive(Clone, Debug)]
pub struct PathRun {
    source: VertexId,
    distance: HashMap<VertexId, u64>,
    predecessor: HashMap<VertexId, VertexId>,
}

impl PathRun {
    /// Distance from the source to `key`; `None` if the vertex is absent
    /// or unreachable.
    pub fn distance(&self, graph: &Graph, key: impl Into<VertexKey>) -> Option<u64> {
        let id = graph.vertex_id(key)?;
        self.distance.get(&id).copied()
    }

    /// Reconstruct the source-to-destination path by walking predecessor
    /// links. `None` if the destination is absent or unreachable. The
    /// walk is clamped to the vertex count so a corrupted predecessor
    /// chain cannot loop forever.
    pub fn path_to(&self, graph: &Graph, dest: impl Into<VertexKey>) -> Option<Vec<VertexKey>> {
        let dest = graph.vertex_id(dest)?;
        self.distance.get(&dest)?;

        let mut stack = Scratch::new();
        stack.push(dest);
        let mut current = dest;
        let mut steps = 0usize;
        while current != self.source {
            current = *self.predecessor.get(&current)?;
            stack.push(current);
            steps += 1;
            if steps > graph.vertex_count() {
                return None;
            }
        }

        let mut path = Vec::with_capacity(stack.len());
        while let Some(id) = stack.pop() {
            path.push(graph.key_of(id)?);
        }
        Some(path)
    }
}

#[derive(Clone, Copy, Eq, PartialEq)]
struct State {
    cost: u64,
    vertex: VertexId,
}

// Flipped ordering turns the max-heap into a min-heap on cost.
impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Weighted single-source shortest paths (non-negative weights).
/// Returns `None` if the source vertex is absent.
pub fn dijkstra(graph: &Graph, source: impl Into<VertexKey>) -> Option<PathRun> {
    let source_key = source.into();
    let source = graph.vertex_id(source_key)?;

    let mut distance = HashMap::new();
    let mut predecessor = HashMap::new();
    let mut heap = BinaryHeap::new();
    distance.insert(source, 0u64);
    heap.push(State {
        cost: 0,
        vertex: source,
    });

    while let Some(State { cost, vertex }) = heap.pop() {
        // Stale heap entry: a shorter route was already settled.
        if distance.get(&vertex).map_or(false, |d| cost > *d) {
            continue;
        }
        for (next, weight) in graph.out_neighbors(vertex) {
            let candidate = cost.saturating_add(weight);
            if distance.get(&next).map_or(true, |d| candidate < *d) {
                distance.insert(next, candidate);
                predecessor.insert(next, vertex);
                heap.push(State {
                    cost: candidate,
                    vertex: next,
                });
            }
        }
    }

    trace!("dijkstra reached {} vertices from '{source_key}'", distance.len());
    Some(PathRun {
        source,
        distance,
        predecessor,
    })
}

/// Hop-count single-source shortest paths: FIFO relaxation that stores
/// the number of edges traversed and ignores edge weights. Returns
/// `None` if the source vertex is absent.
pub fn hops(graph: &Graph, source: impl Into<VertexKey>) -> Option<PathRun> {
    let source_key = source.into();
    let source = graph.vertex_id(source_key)?;

    let mut distance = HashMap::new();
    let mut predecessor = HashMap::new();
    let mut queue = Scratch::new();
    let mut enqueued = Scratch::new();
    distance.insert(source, 0u64);
    queue.enqueue(source);
    enqueued.add(source);

    while let Some(vertex) = queue.dequeue() {
        let Some(depth) = distance.get(&vertex).copied() else {
            continue;
        };
        for (next, _weight) in graph.out_neighbors(vertex) {
            if next == source {
                continue;
            }
            if distance.get(&next).map_or(true, |d| depth + 1 < *d) {
                distance.insert(next, depth + 1);
                predecessor.insert(next, vertex);
            }
            if !enqueued.contains(&next) {
                enqueued.add(next);
                queue.enqueue(next);
            }
        }
    }

    trace!("hop traversal reached {} vertices from '{source_key}'", distance.len());
    Some(PathRun {
        source,
        distance,
        predecessor,
    })
}
