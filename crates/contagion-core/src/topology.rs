//! Network topology.
//!
//! An undirected simple graph over the population, generated once per run
//! by an Erdős–Rényi process and fixed afterwards: no rewiring, no vertex
//! removal. Banned nodes stay in the adjacency and simply become inert.

use petgraph::graph::{NodeIndex, UnGraph};
use rand::rngs::SmallRng;
use rand::Rng;

use crate::state::NodeId;

/// Immutable adjacency structure over `num_nodes` vertices.
///
/// Vertex `i` of the underlying graph corresponds to node id `i`; the
/// mapping is dense and never changes.
#[derive(Debug, Clone)]
pub struct Topology {
    graph: UnGraph<(), ()>,
}

impl Topology {
    /// Builds a random graph where each of the C(n,2) possible edges is
    /// included independently with probability `avg_degree / num_nodes`.
    ///
    /// If `avg_degree >= num_nodes` the raw probability exceeds 1; it is
    /// clamped to 1.0 (yielding a complete graph) and a warning is logged.
    /// Isolated vertices are valid: they never give or receive influence.
    pub fn erdos_renyi(num_nodes: usize, avg_degree: f64, rng: &mut SmallRng) -> Self {
        let raw_p = avg_degree / num_nodes as f64;
        let p = raw_p.clamp(0.0, 1.0);
        if raw_p > 1.0 {
            tracing::warn!(
                avg_degree,
                num_nodes,
                "edge probability {raw_p:.3} exceeds 1, clamping to 1 (complete graph)"
            );
        }

        let mut graph = UnGraph::with_capacity(num_nodes, 0);
        for _ in 0..num_nodes {
            graph.add_node(());
        }
        // Edge draws happen in a fixed (i, j) order so the same seed always
        // produces the same graph.
        for i in 0..num_nodes {
            for j in (i + 1)..num_nodes {
                if rng.gen::<f64>() < p {
                    graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
                }
            }
        }
        Self { graph }
    }

    /// Number of vertices.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Neighbor ids of `id` in ascending order.
    ///
    /// The ordering matters: neighbor influence consumes one RNG draw per
    /// susceptible neighbor, so iteration order is part of the replayable
    /// draw sequence.
    pub fn neighbors(&self, id: NodeId) -> Vec<NodeId> {
        let mut neighbors: Vec<NodeId> = self
            .graph
            .neighbors(NodeIndex::new(id))
            .map(|n| n.index())
            .collect();
        neighbors.sort_unstable();
        neighbors
    }

    /// Whether an edge exists between `a` and `b`.
    pub fn has_edge(&self, a: NodeId, b: NodeId) -> bool {
        self.graph
            .contains_edge(NodeIndex::new(a), NodeIndex::new(b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_zero_degree_yields_no_edges() {
        let mut rng = SmallRng::seed_from_u64(1);
        let topology = Topology::erdos_renyi(20, 0.0, &mut rng);
        assert_eq!(topology.node_count(), 20);
        assert_eq!(topology.edge_count(), 0);
        assert!(topology.neighbors(7).is_empty());
    }

    #[test]
    fn test_degree_at_least_population_clamps_to_complete_graph() {
        let mut rng = SmallRng::seed_from_u64(1);
        let n = 6;
        let topology = Topology::erdos_renyi(n, 100.0, &mut rng);
        assert_eq!(topology.edge_count(), n * (n - 1) / 2);
        assert_eq!(topology.neighbors(0), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_same_seed_same_graph() {
        let mut rng1 = SmallRng::seed_from_u64(99);
        let mut rng2 = SmallRng::seed_from_u64(99);
        let a = Topology::erdos_renyi(30, 3.0, &mut rng1);
        let b = Topology::erdos_renyi(30, 3.0, &mut rng2);
        assert_eq!(a.edge_count(), b.edge_count());
        for id in 0..30 {
            assert_eq!(a.neighbors(id), b.neighbors(id));
        }
    }

    #[test]
    fn test_neighbors_sorted_ascending() {
        let mut rng = SmallRng::seed_from_u64(7);
        let topology = Topology::erdos_renyi(25, 6.0, &mut rng);
        for id in 0..25 {
            let neighbors = topology.neighbors(id);
            assert!(neighbors.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
