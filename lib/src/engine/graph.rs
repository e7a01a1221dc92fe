// lib/src/engine/graph.rs

use std::collections::HashMap;

use models::{Edge, GraphError, GraphResult, VertexKey};

use super::vertex::Vertex;

/// Stable handle to a vertex slot. Handles issued for a vertex stay
/// valid until that vertex is removed; slots are recycled through a free
/// list, so a handle must not be used after its vertex is gone.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexId(usize);

/// A directed, weighted graph.
///
/// Vertices live in a slot arena addressed by [`VertexId`]; `order`
/// holds the canonical vertex sequence (insertion order until the rank
/// engine reorders it), and `index` maps keys to handles. Each vertex
/// carries a forward adjacency list and an inbound back-index; every
/// mutation updates both sides together, and `edge_count` always equals
/// the total number of outbound entries.
#[derive(Clone, Debug, Default)]
pub struct Graph {
    slots: Vec<Option<Vertex>>,
    free: Vec<VertexId>,
    order: Vec<VertexId>,
    index: HashMap<VertexKey, VertexId>,
    edge_count: usize,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of vertices currently in the graph.
    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    /// Total number of edges currently in the graph.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Resolve a key to its handle, if present.
    pub fn vertex_id(&self, key: impl Into<VertexKey>) -> Option<VertexId> {
        self.index.get(&key.into()).copied()
    }

    /// Look up a vertex record by handle.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.slots.get(id.0).and_then(|slot| slot.as_ref())
    }

    /// Look up a vertex record by key.
    pub fn get_vertex(&self, key: impl Into<VertexKey>) -> Option<&Vertex> {
        self.vertex_id(key).and_then(|id| self.vertex(id))
    }

    /// The key behind a handle, if the vertex is still present.
    pub fn key_of(&self, id: VertexId) -> Option<VertexKey> {
        self.vertex(id).map(Vertex::key)
    }

    /// Add a vertex. A no-op if the key is already present; returns the
    /// handle either way.
    pub fn add_vertex(&mut self, key: impl Into<VertexKey>) -> VertexId {
        let key = key.into();
        if let Some(id) = self.index.get(&key) {
            return *id;
        }
        let vertex = Vertex::new(key);
        let id = match self.free.pop() {
            Some(id) => {
                self.slots[id.0] = Some(vertex);
                id
            }
            None => {
                let id = VertexId(self.slots.len());
                self.slots.push(Some(vertex));
                id
            }
        };
        self.index.insert(key, id);
        self.order.push(id);
        id
    }

    pub fn has_vertex(&self, key: impl Into<VertexKey>) -> bool {
        self.index.contains_key(&key.into())
    }

    /// Remove a vertex and every edge incident to it, both directions,
    /// in one pass. A no-op if the key is absent.
    pub fn remove_vertex(&mut self, key: impl Into<VertexKey>) -> GraphResult<()> {
        let key = key.into();
        let Some(id) = self.index.get(&key).copied() else {
            return Ok(());
        };
        let removed = match self.slots.get_mut(id.0).and_then(|slot| slot.take()) {
            Some(vertex) => vertex,
            None => return Err(GraphError::AdjacencyInconsistent { from: key, to: key }),
        };
        self.index.remove(&key);
        self.order.retain(|v| *v != id);

        // Edges leaving the removed vertex: scrub the inbound back-entry
        // at each target.
        for (target, _weight) in &removed.outbound {
            if *target == id {
                continue;
            }
            let to = self.key_of(*target).unwrap_or(key);
            let Some(vertex) = self.slots.get_mut(target.0).and_then(|slot| slot.as_mut()) else {
                return Err(GraphError::AdjacencyInconsistent { from: key, to });
            };
            let Some(pos) = vertex.inbound.iter().position(|v| *v == id) else {
                return Err(GraphError::AdjacencyInconsistent { from: key, to });
            };
            vertex.inbound.remove(pos);
        }
        self.edge_count -= removed.outbound.len();

        // Edges arriving at the removed vertex: scrub the outbound entry
        // at each origin.
        for origin in &removed.inbound {
            if *origin == id {
                continue;
            }
            let from = self.key_of(*origin).unwrap_or(key);
            let Some(vertex) = self.slots.get_mut(origin.0).and_then(|slot| slot.as_mut()) else {
                return Err(GraphError::AdjacencyInconsistent { from, to: key });
            };
            let Some(pos) = vertex.outbound.iter().position(|(v, _)| *v == id) else {
                return Err(GraphError::AdjacencyInconsistent { from, to: key });
            };
            vertex.outbound.remove(pos);
            self.edge_count -= 1;
        }

        self.free.push(id);
        Ok(())
    }

    /// Add an edge, auto-creating either endpoint. A no-op if the edge
    /// already exists; the weight is NOT updated (see [`Graph::set_edge`]).
    pub fn add_edge(&mut self, from: impl Into<VertexKey>, to: impl Into<VertexKey>, weight: u64) {
        let from_id = self.add_vertex(from);
        let to_id = self.add_vertex(to);
        let Some(origin) = self.slots.get_mut(from_id.0).and_then(|slot| slot.as_mut()) else {
            return;
        };
        if origin.outbound.iter().any(|(v, _)| *v == to_id) {
            return;
        }
        origin.outbound.push((to_id, weight));
        let Some(target) = self.slots.get_mut(to_id.0).and_then(|slot| slot.as_mut()) else {
            return;
        };
        target.inbound.push(from_id);
        self.edge_count += 1;
    }

    pub fn has_edge(&self, from: impl Into<VertexKey>, to: impl Into<VertexKey>) -> bool {
        self.get_edge(from, to).is_some()
    }

    /// Weight of the edge between two vertices, `None` if either vertex
    /// or the edge is absent. Zero is a legal weight, not a sentinel.
    pub fn get_edge(&self, from: impl Into<VertexKey>, to: impl Into<VertexKey>) -> Option<u64> {
        let from_id = self.vertex_id(from)?;
        let to_id = self.vertex_id(to)?;
        self.vertex(from_id)?
            .outbound
            .iter()
            .find(|(v, _)| *v == to_id)
            .map(|(_, weight)| *weight)
    }

    /// Update the weight of an existing edge in place. A no-op if the
    /// edge does not exist.
    pub fn set_edge(&mut self, from: impl Into<VertexKey>, to: impl Into<VertexKey>, weight: u64) {
        let Some(from_id) = self.vertex_id(from) else {
            return;
        };
        let Some(to_id) = self.vertex_id(to) else {
            return;
        };
        if let Some(vertex) = self.slots.get_mut(from_id.0).and_then(|slot| slot.as_mut()) {
            if let Some(entry) = vertex.outbound.iter_mut().find(|(v, _)| *v == to_id) {
                entry.1 = weight;
            }
        }
    }

    /// Remove an edge, returning its weight. `Ok(None)` if either vertex
    /// or the edge is absent. Removes the outbound entry and the inbound
    /// back-entry together.
    pub fn remove_edge(
        &mut self,
        from: impl Into<VertexKey>,
        to: impl Into<VertexKey>,
    ) -> GraphResult<Option<u64>> {
        let from = from.into();
        let to = to.into();
        let (Some(from_id), Some(to_id)) = (self.vertex_id(from), self.vertex_id(to)) else {
            return Ok(None);
        };
        let Some(origin) = self.slots.get_mut(from_id.0).and_then(|slot| slot.as_mut()) else {
            return Ok(None);
        };
        let Some(pos) = origin.outbound.iter().position(|(v, _)| *v == to_id) else {
            return Ok(None);
        };
        let (_, weight) = origin.outbound.remove(pos);
        let Some(target) = self.slots.get_mut(to_id.0).and_then(|slot| slot.as_mut()) else {
            return Err(GraphError::AdjacencyInconsistent { from, to });
        };
        let Some(pos) = target.inbound.iter().position(|v| *v == from_id) else {
            return Err(GraphError::AdjacencyInconsistent { from, to });
        };
        target.inbound.remove(pos);
        self.edge_count -= 1;
        Ok(Some(weight))
    }

    /// Number of outbound edges from a vertex; 0 if the vertex is absent.
    pub fn edges_count(&self, key: impl Into<VertexKey>) -> usize {
        self.get_vertex(key).map_or(0, Vertex::out_degree)
    }

    /// Vertex handles in canonical order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.order.iter().copied()
    }

    /// Vertex keys in canonical order.
    pub fn vertices(&self) -> impl Iterator<Item = VertexKey> + '_ {
        self.order.iter().filter_map(|id| self.key_of(*id))
    }

    /// Every edge, grouped by source vertex in canonical order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.order
            .iter()
            .filter_map(|id| self.vertex(*id))
            .flat_map(move |vertex| {
                vertex.outbound.iter().filter_map(move |(target, weight)| {
                    Some(Edge::new(vertex.key(), self.key_of(*target)?, *weight))
                })
            })
    }

    /// Outbound `(target, weight)` pairs of a vertex.
    pub fn out_neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, u64)> + '_ {
        self.vertex(id)
            .into_iter()
            .flat_map(|vertex| vertex.outbound.iter().copied())
    }

    /// Vertices holding an outbound edge to `id`.
    pub fn in_neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.vertex(id)
            .into_iter()
            .flat_map(|vertex| vertex.inbound.iter().copied())
    }

    pub fn out_degree_of(&self, id: VertexId) -> usize {
        self.vertex(id).map_or(0, Vertex::out_degree)
    }

    /// Replace the canonical vertex order. The rank engine uses this to
    /// apply its post-convergence sort; `order` must be a permutation of
    /// the current handles.
    pub(crate) fn set_order(&mut self, order: Vec<VertexId>) {
        debug_assert_eq!(order.len(), self.order.len());
        self.order = order;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_cycle() -> Graph {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 1);
        graph.add_edge("b", "c", 1);
        graph.add_edge("c", "a", 1);
        graph
    }

    #[test]
    fn vertex_count_tracks_distinct_keys() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        graph.add_vertex("b");
        graph.add_vertex("a");
        assert_eq!(graph.vertex_count(), 2);
        graph.remove_vertex("a").unwrap();
        graph.remove_vertex("missing").unwrap();
        assert_eq!(graph.vertex_count(), 1);
    }

    #[test]
    fn add_edge_auto_creates_endpoints() {
        let mut graph = Graph::new();
        graph.add_edge("u", "v", 3);
        assert!(graph.has_vertex("u"));
        assert!(graph.has_vertex("v"));
        assert!(graph.has_edge("u", "v"));
        assert!(!graph.has_edge("v", "u"));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn readding_edge_keeps_original_weight() {
        let mut graph = Graph::new();
        graph.add_edge("u", "v", 5);
        graph.add_edge("u", "v", 9);
        assert_eq!(graph.get_edge("u", "v"), Some(5));
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn set_edge_updates_in_place() {
        let mut graph = Graph::new();
        graph.add_edge("u", "v", 1);
        graph.set_edge("u", "v", 5);
        assert_eq!(graph.get_edge("u", "v"), Some(5));
        // no-op on a missing edge
        graph.set_edge("v", "u", 7);
        assert_eq!(graph.get_edge("v", "u"), None);
    }

    #[test]
    fn remove_edge_returns_weight_and_scrubs_both_sides() {
        let mut graph = Graph::new();
        graph.add_edge("u", "v", 4);
        assert_eq!(graph.remove_edge("u", "v").unwrap(), Some(4));
        assert!(!graph.has_edge("u", "v"));
        assert_eq!(graph.edge_count(), 0);
        let target = graph.get_vertex("v").unwrap();
        assert_eq!(target.in_degree(), 0);
        assert_eq!(graph.remove_edge("u", "v").unwrap(), None);
    }

    #[test]
    fn zero_weight_edge_is_not_a_sentinel() {
        let mut graph = Graph::new();
        graph.add_edge("u", "v", 0);
        assert!(graph.has_edge("u", "v"));
        assert_eq!(graph.get_edge("u", "v"), Some(0));
        assert_eq!(graph.get_edge("u", "w"), None);
    }

    #[test]
    fn inbound_entries_match_edge_count() {
        let graph = three_cycle();
        let inbound_total: usize = graph
            .vertex_ids()
            .filter_map(|id| graph.vertex(id))
            .map(Vertex::in_degree)
            .sum();
        assert_eq!(inbound_total, graph.edge_count());
        let outbound_total: usize = graph
            .vertex_ids()
            .filter_map(|id| graph.vertex(id))
            .map(Vertex::out_degree)
            .sum();
        assert_eq!(outbound_total, graph.edge_count());
    }

    #[test]
    fn remove_vertex_scrubs_incident_edges() {
        let mut graph = three_cycle();
        graph.add_edge("d", "b", 2);
        assert_eq!(graph.edge_count(), 4);

        graph.remove_vertex("b").unwrap();
        assert_eq!(graph.vertex_count(), 3);
        // a->b, b->c and d->b are all gone
        assert_eq!(graph.edge_count(), 1);
        assert!(graph.has_edge("c", "a"));
        assert_eq!(graph.edges_count("a"), 0);
        assert_eq!(graph.edges_count("d"), 0);
        for id in graph.vertex_ids() {
            let vertex = graph.vertex(id).unwrap();
            assert!(vertex.outbound.iter().all(|(v, _)| graph.vertex(*v).is_some()));
            assert!(vertex.inbound.iter().all(|v| graph.vertex(*v).is_some()));
        }
    }

    #[test]
    fn removing_last_vertex_resets_graph() {
        let mut graph = Graph::new();
        graph.add_edge("a", "a", 1);
        graph.remove_vertex("a").unwrap();
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert_eq!(graph.vertices().count(), 0);
    }

    #[test]
    fn handles_survive_unrelated_removals() {
        let mut graph = three_cycle();
        let c = graph.vertex_id("c").unwrap();
        graph.remove_vertex("a").unwrap();
        assert_eq!(graph.key_of(c), Some(VertexKey::new("c")));
        // a recycled slot serves a fresh key
        let d = graph.add_vertex("d");
        assert_eq!(graph.key_of(d), Some(VertexKey::new("d")));
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn iteration_follows_insertion_order() {
        let graph = three_cycle();
        let keys: Vec<String> = graph.vertices().map(String::from).collect();
        assert_eq!(keys, ["a", "b", "c"]);
        let edges: Vec<String> = graph.edges().map(|e| e.to_string()).collect();
        assert_eq!(edges, ["a b 1", "b c 1", "c a 1"]);
    }

    #[test]
    fn three_cycle_edge_removal_scenario() {
        let mut graph = three_cycle();
        assert_eq!(graph.edges_count("b"), 1);
        assert_eq!(graph.remove_edge("b", "c").unwrap(), Some(1));
        assert_eq!(graph.edges_count("b"), 0);
    }
}
