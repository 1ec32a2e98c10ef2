// Test-only helpers for `campusnav-lib` tests
use crate::graph::{Graph, GraphBuildOptions};

/// Builder to create hand-wired `Graph` instances in tests.
pub struct GraphBuilder {
    size: usize,
    weights: Vec<Option<f64>>,
    options: GraphBuildOptions,
}

impl GraphBuilder {
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            weights: vec![None; size * size],
            options: GraphBuildOptions::default(),
        }
    }

    /// Add an undirected edge.
    pub fn link(mut self, a: usize, b: usize, weight: f64) -> Self {
        self.weights[a * self.size + b] = Some(weight);
        self.weights[b * self.size + a] = Some(weight);
        self
    }

    pub fn build(self) -> Graph {
        Graph::from_weights(self.size, self.weights, self.options)
    }
}
