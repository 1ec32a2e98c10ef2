//! Route planning strategies implementing the Strategy pattern.
//!
//! This module provides the `RoutePlanner` trait and implementations for
//! the three shortest-path algorithms (Dijkstra, A*, Floyd-Warshall). The
//! strategy pattern keeps `plan_route` independent of the algorithm in use.

use crate::dataset::LocationId;
use crate::graph::RoutingContext;
use crate::path::{find_route_a_star, find_route_dijkstra, PathResult};

use super::RouteAlgorithm;

/// Trait for route planning strategies.
pub trait RoutePlanner: Send + Sync {
    /// The algorithm identifier for this planner.
    fn algorithm(&self) -> RouteAlgorithm;

    /// Execute the pathfinding algorithm against the routing context.
    ///
    /// Returns `Some(path)` if a route is found, `None` otherwise.
    fn find_path(
        &self,
        context: &RoutingContext,
        start: LocationId,
        goal: LocationId,
    ) -> Option<PathResult>;
}

/// Label-correcting single-source planner.
#[derive(Debug, Clone, Default)]
pub struct DijkstraPlanner;

impl RoutePlanner for DijkstraPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::Dijkstra
    }

    fn find_path(
        &self,
        context: &RoutingContext,
        start: LocationId,
        goal: LocationId,
    ) -> Option<PathResult> {
        find_route_dijkstra(context.graph(), start, goal)
    }
}

/// Heuristic-guided planner using geodesic distance to the goal.
#[derive(Debug, Clone, Default)]
pub struct AStarPlanner;

impl RoutePlanner for AStarPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::AStar
    }

    fn find_path(
        &self,
        context: &RoutingContext,
        start: LocationId,
        goal: LocationId,
    ) -> Option<PathResult> {
        find_route_a_star(context.graph(), context.campus(), start, goal).map(|outcome| outcome.path)
    }
}

/// All-pairs planner.
///
/// The first query solves every pair; later queries on the same context only
/// walk next-hop pointers.
#[derive(Debug, Clone, Default)]
pub struct FloydWarshallPlanner;

impl RoutePlanner for FloydWarshallPlanner {
    fn algorithm(&self) -> RouteAlgorithm {
        RouteAlgorithm::FloydWarshall
    }

    fn find_path(
        &self,
        context: &RoutingContext,
        start: LocationId,
        goal: LocationId,
    ) -> Option<PathResult> {
        context.all_pairs().route(start, goal)
    }
}

/// Select the planner implementing `algorithm`.
pub fn select_planner(algorithm: RouteAlgorithm) -> Box<dyn RoutePlanner> {
    match algorithm {
        RouteAlgorithm::Dijkstra => Box::new(DijkstraPlanner),
        RouteAlgorithm::AStar => Box::new(AStarPlanner),
        RouteAlgorithm::FloydWarshall => Box::new(FloydWarshallPlanner),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_planner_chooses_correct_type() {
        for algorithm in RouteAlgorithm::ALL {
            assert_eq!(select_planner(algorithm).algorithm(), algorithm);
        }
    }
}
