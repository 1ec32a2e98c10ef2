//! Route planning module for campus walking routes.
//!
//! This module provides:
//! - [`RouteAlgorithm`] - Supported routing algorithms (Dijkstra, A*, Floyd-Warshall)
//! - [`RouteRequest`] - High-level route planning request
//! - [`RoutePlan`] - Planned route result
//! - [`plan_route`] - Main entry point for computing routes
//! - [`compare_algorithms`] - Run every algorithm on the same query
//!
//! # Example
//!
//! ```ignore
//! use campusnav_lib::{plan_route, Campus, GraphBuildOptions, RouteRequest, RoutingContext};
//!
//! let context = RoutingContext::new(Campus::reference(), &GraphBuildOptions::default())?;
//! let request = RouteRequest::dijkstra("main gate", "hostel");
//! let plan = plan_route(&context, &request)?;
//! println!("Route: {} hops, {} m", plan.hop_count(), plan.distance);
//! ```

mod planner;

pub use planner::{
    select_planner, AStarPlanner, DijkstraPlanner, FloydWarshallPlanner, RoutePlanner,
};

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use tracing::debug;

use crate::dataset::LocationId;
use crate::error::{Error, Result};
use crate::graph::RoutingContext;

/// Supported routing algorithms, numbered by their query selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum RouteAlgorithm {
    /// Label-correcting single-source search (selector 1).
    #[default]
    Dijkstra,
    /// Heuristic-guided best-first search (selector 2).
    AStar,
    /// All-pairs dynamic programming (selector 3).
    FloydWarshall,
}

impl RouteAlgorithm {
    /// Every algorithm, in selector order.
    pub const ALL: [RouteAlgorithm; 3] = [
        RouteAlgorithm::Dijkstra,
        RouteAlgorithm::AStar,
        RouteAlgorithm::FloydWarshall,
    ];

    /// Numeric selector used by queries.
    pub fn selector(self) -> u8 {
        match self {
            RouteAlgorithm::Dijkstra => 1,
            RouteAlgorithm::AStar => 2,
            RouteAlgorithm::FloydWarshall => 3,
        }
    }

    /// Human-readable label shown in route summaries.
    pub fn label(self) -> &'static str {
        match self {
            RouteAlgorithm::Dijkstra => "Dijkstra",
            RouteAlgorithm::AStar => "A*",
            RouteAlgorithm::FloydWarshall => "Floyd-Warshall",
        }
    }
}

impl fmt::Display for RouteAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            RouteAlgorithm::Dijkstra => "dijkstra",
            RouteAlgorithm::AStar => "a-star",
            RouteAlgorithm::FloydWarshall => "floyd-warshall",
        };
        f.write_str(value)
    }
}

impl TryFrom<u8> for RouteAlgorithm {
    type Error = Error;

    fn try_from(selector: u8) -> Result<Self> {
        match selector {
            1 => Ok(RouteAlgorithm::Dijkstra),
            2 => Ok(RouteAlgorithm::AStar),
            3 => Ok(RouteAlgorithm::FloydWarshall),
            other => Err(Error::InvalidAlgorithmSelector {
                selector: other.to_string(),
            }),
        }
    }
}

impl FromStr for RouteAlgorithm {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "1" | "dijkstra" => Ok(RouteAlgorithm::Dijkstra),
            "2" | "a-star" | "astar" | "a*" => Ok(RouteAlgorithm::AStar),
            "3" | "floyd-warshall" | "floyd" | "floydwarshall" => Ok(RouteAlgorithm::FloydWarshall),
            _ => Err(Error::InvalidAlgorithmSelector {
                selector: value.to_string(),
            }),
        }
    }
}

/// High-level route planning request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    pub start: String,
    pub goal: String,
    pub algorithm: RouteAlgorithm,
}

impl RouteRequest {
    pub fn new(start: impl Into<String>, goal: impl Into<String>, algorithm: RouteAlgorithm) -> Self {
        Self {
            start: start.into(),
            goal: goal.into(),
            algorithm,
        }
    }

    /// Convenience constructor for Dijkstra routes.
    pub fn dijkstra(start: impl Into<String>, goal: impl Into<String>) -> Self {
        Self::new(start, goal, RouteAlgorithm::Dijkstra)
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub algorithm: RouteAlgorithm,
    pub start: LocationId,
    pub goal: LocationId,
    pub steps: Vec<LocationId>,
    /// Total route length in meters.
    pub distance: f64,
}

impl RoutePlan {
    /// Number of hops in the route.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Outcome of one algorithm within [`compare_algorithms`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlgorithmComparison {
    pub algorithm: RouteAlgorithm,
    /// `None` when the algorithm found no route.
    pub plan: Option<RoutePlan>,
}

fn run_planner(
    context: &RoutingContext,
    algorithm: RouteAlgorithm,
    start: LocationId,
    goal: LocationId,
) -> Option<RoutePlan> {
    let planner = select_planner(algorithm);
    let path = planner.find_path(context, start, goal)?;
    debug!(
        algorithm = %algorithm,
        start,
        goal,
        hops = path.hop_count(),
        distance = path.distance,
        "planner produced route"
    );
    Some(RoutePlan {
        algorithm,
        start,
        goal,
        steps: path.steps,
        distance: path.distance,
    })
}

/// Compute a route using the requested algorithm.
///
/// This is the main entry point for route planning. It:
/// 1. Resolves location names to IDs
/// 2. Selects the planner for the requested algorithm
/// 3. Executes pathfinding against the shared graph
pub fn plan_route(context: &RoutingContext, request: &RouteRequest) -> Result<RoutePlan> {
    let campus = context.campus();
    let start_id = campus.resolve(&request.start)?;
    let goal_id = campus.resolve(&request.goal)?;

    run_planner(context, request.algorithm, start_id, goal_id).ok_or_else(|| {
        Error::RouteNotFound {
            start: request.start.clone(),
            goal: request.goal.clone(),
        }
    })
}

/// Run every algorithm on the same query, in selector order.
///
/// Name resolution failures abort the comparison; a missing route is
/// reported per algorithm.
pub fn compare_algorithms(
    context: &RoutingContext,
    start: &str,
    goal: &str,
) -> Result<Vec<AlgorithmComparison>> {
    let campus = context.campus();
    let start_id = campus.resolve(start)?;
    let goal_id = campus.resolve(goal)?;

    Ok(RouteAlgorithm::ALL
        .into_iter()
        .map(|algorithm| AlgorithmComparison {
            algorithm,
            plan: run_planner(context, algorithm, start_id, goal_id),
        })
        .collect())
}
