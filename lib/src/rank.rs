// lib/src/rank.rs

//! Rank scores computed by iterative relaxation over the inbound index.
//!
//! Each pass redistributes the previous scores: sink vertices donate
//! their damped mass uniformly, every vertex receives the teleport share
//! `(1 - damping) / N`, and the rest arrives from inbound neighbors in
//! proportion to `previous / out_degree`. Iteration stops once the
//! largest per-vertex change drops to `delta`, or at `max_iterations`.
//! After convergence the graph's canonical vertex order is re-sorted in
//! place: rank descending, ties (within `epsilon`) by ascending key.

use std::cmp::Reverse;
use std::collections::HashMap;

use log::{debug, warn};
use models::{GraphError, GraphResult, VertexKey};
use ordered_float::OrderedFloat;

use crate::engine::{Graph, VertexId};

/// Rank engine tuning.
#[derive(Clone, Copy, Debug)]
pub struct RankConfig {
    /// Probability mass spent following links rather than teleporting.
    /// Must lie strictly between 0 and 1; typically 0.85.
    pub damping: f64,
    /// Convergence threshold: the run stops once every vertex's score
    /// moved by at most this much in one pass. Must be positive.
    pub delta: f64,
    /// Two scores within `epsilon` of each other count as tied when the
    /// vertices are re-ordered after convergence.
    pub epsilon: f64,
    /// Hard cap on relaxation passes.
    pub max_iterations: usize,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            delta: 1e-6,
            epsilon: 1e-6,
            max_iterations: 100,
        }
    }
}

/// Converged scores of one rank run, keyed by vertex handle. Stale once
/// the graph is mutated.
#[derive(Clone, Debug, Default)]
pub struct RankScores {
    scores: HashMap<VertexId, f64>,
}

impl RankScores {
    /// Score of a vertex; `None` if the key was absent during the run.
    pub fn get(&self, graph: &Graph, key: impl Into<VertexKey>) -> Option<f64> {
        let id = graph.vertex_id(key)?;
        self.scores.get(&id).copied()
    }

    /// `(key, score)` pairs in the graph's canonical order, i.e. rank
    /// descending after a completed run.
    pub fn iter<'a>(&'a self, graph: &'a Graph) -> impl Iterator<Item = (VertexKey, f64)> + 'a {
        graph.vertex_ids().filter_map(move |id| {
            Some((graph.key_of(id)?, self.scores.get(&id).copied()?))
        })
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }
}

/// Run the rank computation and re-sort the graph's vertex order by the
/// result. Scores over all vertices sum to 1.
pub fn rank(graph: &mut Graph, config: RankConfig) -> GraphResult<RankScores> {
    if !(config.damping > 0.0 && config.damping < 1.0) {
        return Err(GraphError::InvalidParameter(format!(
            "damping must lie in (0, 1), got {}",
            config.damping
        )));
    }
    if !(config.delta > 0.0) {
        return Err(GraphError::InvalidParameter(format!(
            "delta must be positive, got {}",
            config.delta
        )));
    }

    let n = graph.vertex_count();
    if n == 0 {
        return Ok(RankScores::default());
    }
    let n_inv = 1.0 / n as f64;
    let ids: Vec<VertexId> = graph.vertex_ids().collect();

    let mut rank: HashMap<VertexId, f64> = ids.iter().map(|id| (*id, n_inv)).collect();
    let mut prev: HashMap<VertexId, f64> = ids.iter().map(|id| (*id, 0.0)).collect();

    let mut converged = false;
    for iteration in 1..=config.max_iterations {
        for id in &ids {
            prev.insert(*id, rank.get(id).copied().unwrap_or(0.0));
        }

        // Mass stranded on sinks, redistributed uniformly.
        let sink_mass: f64 = ids
            .iter()
            .filter(|id| graph.out_degree_of(**id) == 0)
            .map(|id| config.damping * prev.get(id).copied().unwrap_or(0.0) * n_inv)
            .sum();
        let teleport = (1.0 - config.damping) * n_inv;

        let mut max_shift = 0.0f64;
        for id in &ids {
            let inbound: f64 = graph
                .in_neighbors(*id)
                .map(|u| prev.get(&u).copied().unwrap_or(0.0) / graph.out_degree_of(u) as f64)
                .sum();
            let next = sink_mass + teleport + config.damping * inbound;
            let shift = (next - prev.get(id).copied().unwrap_or(0.0)).abs();
            if shift > max_shift {
                max_shift = shift;
            }
            rank.insert(*id, next);
        }

        debug!("rank iteration {iteration}: max shift {max_shift:.3e}");
        if max_shift <= config.delta {
            converged = true;
            break;
        }
    }
    if !converged {
        warn!(
            "rank did not converge within {} iterations, returning current scores",
            config.max_iterations
        );
    }

    sort_by_rank(graph, &rank, config.epsilon);
    Ok(RankScores { scores: rank })
}

/// Stable sort of the canonical vertex order: rank descending, scores
/// quantized to the epsilon grid, ties by ascending key.
fn sort_by_rank(graph: &mut Graph, scores: &HashMap<VertexId, f64>, epsilon: f64) {
    let epsilon = if epsilon > 0.0 { epsilon } else { f64::EPSILON };
    let mut ordered: Vec<VertexId> = graph.vertex_ids().collect();
    let sort_keys: HashMap<VertexId, (Reverse<OrderedFloat<f64>>, VertexKey)> = ordered
        .iter()
        .filter_map(|id| {
            let score = scores.get(id).copied().unwrap_or(0.0);
            let bucket = OrderedFloat((score / epsilon).round());
            Some((*id, (Reverse(bucket), graph.key_of(*id)?)))
        })
        .collect();
    ordered.sort_by_key(|id| sort_keys.get(id).copied());
    graph.set_order(ordered);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores_of(graph: &mut Graph) -> RankScores {
        rank(graph, RankConfig::default()).unwrap()
    }

    #[test]
    fn isolated_vertex_converges_to_one() {
        let mut graph = Graph::new();
        graph.add_vertex("only");
        let scores = scores_of(&mut graph);
        let score = scores.get(&graph, "only").unwrap();
        assert!((score - 1.0).abs() < 1e-12);
    }

    #[test]
    fn symmetric_cycle_splits_evenly() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 1);
        graph.add_edge("b", "c", 1);
        graph.add_edge("c", "a", 1);
        let scores = scores_of(&mut graph);
        for key in ["a", "b", "c"] {
            let score = scores.get(&graph, key).unwrap();
            assert!((score - 1.0 / 3.0).abs() < 1e-6, "{key}={score}");
        }
    }

    #[test]
    fn scores_sum_to_one() {
        let mut graph = Graph::new();
        graph.add_edge("a", "b", 1);
        graph.add_edge("b", "c", 1);
        graph.add_edge("c", "a", 1);
        graph.add_edge("a", "d", 1);
        let scores = scores_of(&mut graph);
        let total: f64 = scores.iter(&graph).map(|(_, s)| s).sum();
        assert!((total - 1.0).abs() < 1e-6, "total={total}");
    }

    #[test]
    fn star_leaves_outrank_the_hub() {
        // hub has outlinks only; leaves are sinks fed by the hub
        let mut graph = Graph::new();
        graph.add_edge("hub", "a", 1);
        graph.add_edge("hub", "b", 1);
        graph.add_edge("hub", "c", 1);
        let scores = scores_of(&mut graph);
        let hub = scores.get(&graph, "hub").unwrap();
        let leaf = scores.get(&graph, "a").unwrap();
        assert!(leaf > hub, "leaf={leaf} hub={hub}");
    }

    #[test]
    fn vertices_reordered_by_descending_rank() {
        let mut graph = Graph::new();
        graph.add_edge("a", "popular", 1);
        graph.add_edge("b", "popular", 1);
        graph.add_edge("c", "popular", 1);
        scores_of(&mut graph);
        let first = graph.vertices().next().unwrap();
        assert_eq!(first.as_str(), "popular");
    }

    #[test]
    fn tied_scores_fall_back_to_key_order() {
        let mut graph = Graph::new();
        graph.add_vertex("zeta");
        graph.add_vertex("alpha");
        graph.add_vertex("mid");
        scores_of(&mut graph);
        let keys: Vec<String> = graph.vertices().map(String::from).collect();
        assert_eq!(keys, ["alpha", "mid", "zeta"]);
    }

    #[test]
    fn empty_graph_yields_empty_scores() {
        let mut graph = Graph::new();
        let scores = scores_of(&mut graph);
        assert!(scores.is_empty());
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        let mut graph = Graph::new();
        graph.add_vertex("a");
        let bad_damping = RankConfig {
            damping: 1.0,
            ..RankConfig::default()
        };
        assert!(rank(&mut graph, bad_damping).is_err());
        let bad_delta = RankConfig {
            delta: 0.0,
            ..RankConfig::default()
        };
        assert!(rank(&mut graph, bad_delta).is_err());
    }
}
