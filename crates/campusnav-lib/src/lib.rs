//! Campus navigation library entry points.
//!
//! This crate exposes helpers to load a campus location table, build a
//! geodesic-weighted graph from it, and run shortest-path algorithms over that
//! graph. Higher-level consumers (the CLI) should only depend on the functions
//! exported here instead of reimplementing behavior.
//!

pub mod config;
pub mod dataset;
pub mod error;
pub mod geodesic;
pub mod graph;
pub mod output;
pub mod path;
pub mod queue;
pub mod routing;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use config::{
    NavConfig, WalkingProfile, WeightPrecision, DEFAULT_STEP_LENGTH_M, DEFAULT_THRESHOLD_METERS,
    DEFAULT_WALKING_SPEED_MPS,
};
pub use dataset::{load_campus, resolve_campus, Campus, Location, LocationId, LOCATIONS_ENV_VAR};
pub use error::{Error, Result};
pub use geodesic::{distance as geodesic_distance, distance_with, Coordinates, GeodesicFormula};
pub use graph::{
    build_graph, build_matrices, Graph, GraphBuildOptions, GraphCache, NextHopMatrix,
    RoutingContext,
};
pub use output::{RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary};
pub use path::{find_route_a_star, find_route_dijkstra, AStarOutcome, AllPairsSolution, PathResult};
pub use routing::{
    compare_algorithms, plan_route, AlgorithmComparison, RouteAlgorithm, RoutePlan, RouteRequest,
};
