use std::sync::Arc;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::config::WeightPrecision;
use crate::dataset::{Campus, LocationId};
use crate::geodesic::{distance_with, GeodesicFormula};
use crate::error::{Error, Result};
use crate::path::AllPairsSolution;

/// Options controlling how the adjacency matrix is derived from a campus.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphBuildOptions {
    /// Edges exist only when the geodesic distance is strictly below this.
    pub threshold_meters: f64,
    pub precision: WeightPrecision,
    pub formula: GeodesicFormula,
}

impl Default for GraphBuildOptions {
    fn default() -> Self {
        Self {
            threshold_meters: crate::config::DEFAULT_THRESHOLD_METERS,
            precision: WeightPrecision::default(),
            formula: GeodesicFormula::default(),
        }
    }
}

impl From<&crate::config::NavConfig> for GraphBuildOptions {
    fn from(config: &crate::config::NavConfig) -> Self {
        Self {
            threshold_meters: config.threshold_meters,
            precision: config.precision,
            formula: config.formula,
        }
    }
}

/// Dense, symmetric adjacency matrix. `None` marks an unreachable pair.
///
/// The matrix is read-only after construction and shared via `Arc`, so
/// clones are cheap and safe to hand to concurrent queries.
#[derive(Debug, Clone)]
pub struct Graph {
    size: usize,
    options: GraphBuildOptions,
    weights: Arc<[Option<f64>]>,
}

impl Graph {
    /// Assemble a graph from a row-major weight matrix.
    ///
    /// The diagonal is forced to zero.
    ///
    /// # Panics
    ///
    /// Panics if `weights` does not hold exactly `size * size` entries.
    pub fn from_weights(size: usize, mut weights: Vec<Option<f64>>, options: GraphBuildOptions) -> Self {
        assert_eq!(weights.len(), size * size, "weight matrix must be size x size");
        for i in 0..size {
            weights[i * size + i] = Some(0.0);
        }
        Self {
            size,
            options,
            weights: weights.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn threshold(&self) -> f64 {
        self.options.threshold_meters
    }

    pub fn precision(&self) -> WeightPrecision {
        self.options.precision
    }

    pub fn formula(&self) -> GeodesicFormula {
        self.options.formula
    }

    /// Weight of the direct edge between `from` and `to`, if any.
    pub fn weight(&self, from: LocationId, to: LocationId) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.weights[from * self.size + to]
    }

    /// Direct neighbours of `node` with their edge weights (self excluded).
    pub fn neighbours(&self, node: LocationId) -> impl Iterator<Item = (LocationId, f64)> + '_ {
        (0..self.size)
            .filter(move |&other| other != node)
            .filter_map(move |other| self.weight(node, other).map(|weight| (other, weight)))
    }

    /// Number of undirected edges (pairs i < j with a finite weight).
    pub fn edge_count(&self) -> usize {
        (0..self.size)
            .map(|i| ((i + 1)..self.size).filter(|&j| self.weight(i, j).is_some()).count())
            .sum()
    }

    pub(crate) fn weights(&self) -> &[Option<f64>] {
        &self.weights
    }
}

/// Next node to visit on the way from a source to a destination.
///
/// `None` means no route is known for the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextHopMatrix {
    size: usize,
    hops: Vec<Option<LocationId>>,
}

impl NextHopMatrix {
    /// Seed the matrix from direct edges: the next hop towards `j` is `j`
    /// whenever an edge exists.
    pub fn seeded(graph: &Graph) -> Self {
        let size = graph.len();
        let hops = (0..size * size)
            .map(|cell| {
                let (i, j) = (cell / size, cell % size);
                graph.weight(i, j).map(|_| j)
            })
            .collect();
        Self { size, hops }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn next(&self, from: LocationId, to: LocationId) -> Option<LocationId> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.hops[from * self.size + to]
    }

    pub(crate) fn set(&mut self, from: LocationId, to: LocationId, hop: Option<LocationId>) {
        self.hops[from * self.size + to] = hop;
    }
}

/// Build the threshold-limited adjacency matrix for a campus.
pub fn build_graph(campus: &Campus, options: &GraphBuildOptions) -> Result<Graph> {
    if !(options.threshold_meters.is_finite() && options.threshold_meters > 0.0) {
        return Err(Error::InvalidConfig {
            message: format!(
                "threshold must be a positive finite number, got {}",
                options.threshold_meters
            ),
        });
    }

    let locations = campus.locations();
    let size = locations.len();
    let mut weights = vec![None; size * size];

    for i in 0..size {
        for j in (i + 1)..size {
            let meters = distance_with(
                locations[i].coordinates(),
                locations[j].coordinates(),
                options.formula,
            );
            if meters < options.threshold_meters {
                let weight = Some(options.precision.apply(meters));
                weights[i * size + j] = weight;
                weights[j * size + i] = weight;
            }
        }
    }

    let graph = Graph::from_weights(size, weights, *options);
    debug!(
        nodes = graph.len(),
        edges = graph.edge_count(),
        threshold = options.threshold_meters,
        "built campus graph"
    );
    Ok(graph)
}

/// Build the adjacency matrix together with its seeded next-hop matrix.
pub fn build_matrices(campus: &Campus, options: &GraphBuildOptions) -> Result<(Graph, NextHopMatrix)> {
    let graph = build_graph(campus, options)?;
    let next = NextHopMatrix::seeded(&graph);
    Ok((graph, next))
}

/// A campus, its graph, and the lazily computed all-pairs table.
///
/// The all-pairs table is computed at most once; afterwards it is only read.
#[derive(Debug)]
pub struct RoutingContext {
    campus: Campus,
    graph: Graph,
    all_pairs: OnceCell<Arc<AllPairsSolution>>,
}

impl RoutingContext {
    pub fn new(campus: Campus, options: &GraphBuildOptions) -> Result<Self> {
        let graph = build_graph(&campus, options)?;
        Ok(Self::from_parts(campus, graph))
    }

    pub fn from_parts(campus: Campus, graph: Graph) -> Self {
        Self {
            campus,
            graph,
            all_pairs: OnceCell::new(),
        }
    }

    pub fn campus(&self) -> &Campus {
        &self.campus
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// All-pairs shortest paths, solved on first use.
    pub fn all_pairs(&self) -> Arc<AllPairsSolution> {
        self.all_pairs
            .get_or_init(|| Arc::new(AllPairsSolution::solve(&self.graph)))
            .clone()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct CacheKey {
    fingerprint: u64,
    threshold_bits: u64,
    precision: WeightPrecision,
    formula: GeodesicFormula,
}

impl CacheKey {
    fn new(campus: &Campus, options: &GraphBuildOptions) -> Self {
        Self {
            fingerprint: campus.fingerprint(),
            threshold_bits: options.threshold_meters.to_bits(),
            precision: options.precision,
            formula: options.formula,
        }
    }
}

/// Holds the most recently built [`RoutingContext`].
///
/// The cached context is reused while the campus contents and every build
/// option are unchanged; any change triggers a rebuild.
#[derive(Debug, Default)]
pub struct GraphCache {
    entry: Option<(CacheKey, Arc<RoutingContext>)>,
}

impl GraphCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_build(
        &mut self,
        campus: &Campus,
        options: &GraphBuildOptions,
    ) -> Result<Arc<RoutingContext>> {
        let key = CacheKey::new(campus, options);
        if let Some((cached_key, context)) = &self.entry {
            if *cached_key == key {
                return Ok(Arc::clone(context));
            }
        }

        let context = Arc::new(RoutingContext::new(campus.clone(), options)?);
        self.entry = Some((key, Arc::clone(&context)));
        Ok(context)
    }

    pub fn invalidate(&mut self) {
        self.entry = None;
    }
}
