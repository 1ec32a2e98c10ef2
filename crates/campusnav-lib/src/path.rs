use serde::Serialize;
use tracing::trace;

use crate::dataset::{Campus, LocationId};
use crate::geodesic::distance_with;
use crate::graph::{Graph, NextHopMatrix};
use crate::queue::MinQueue;

/// Ordered route through the graph plus its total length in meters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub steps: Vec<LocationId>,
    pub distance: f64,
}

impl PathResult {
    /// Number of edges traversed.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Label-correcting search that settles the closest unvisited node with a
/// linear scan on each round.
pub fn find_route_dijkstra(graph: &Graph, start: LocationId, goal: LocationId) -> Option<PathResult> {
    let size = graph.len();
    if start >= size || goal >= size {
        return None;
    }

    let mut distances: Vec<Option<f64>> = vec![None; size];
    let mut parents: Vec<Option<LocationId>> = vec![None; size];
    let mut visited = vec![false; size];
    distances[start] = Some(0.0);

    while let Some((current, current_distance)) = closest_unvisited(&distances, &visited) {
        visited[current] = true;

        for (next, weight) in graph.neighbours(current) {
            if visited[next] {
                continue;
            }
            let candidate = current_distance + weight;
            if distances[next].map_or(true, |known| candidate < known) {
                distances[next] = Some(candidate);
                parents[next] = Some(current);
            }
        }
    }

    let distance = distances[goal]?;
    trace!(start, goal, distance, "dijkstra settled goal");
    Some(PathResult {
        steps: reconstruct_path(&parents, start, goal),
        distance,
    })
}

fn closest_unvisited(distances: &[Option<f64>], visited: &[bool]) -> Option<(LocationId, f64)> {
    distances
        .iter()
        .enumerate()
        .filter(|(node, _)| !visited[*node])
        .filter_map(|(node, distance)| distance.map(|d| (node, d)))
        .min_by(|a, b| a.1.total_cmp(&b.1).then_with(|| a.0.cmp(&b.0)))
}

/// Result of an A* search: the route and the predecessor map it was read from.
#[derive(Debug, Clone, PartialEq)]
pub struct AStarOutcome {
    pub path: PathResult,
    pub came_from: Vec<Option<LocationId>>,
}

/// Run A* search using the geodesic distance to the goal as the heuristic.
///
/// The heuristic is the raw surface distance computed with the graph's
/// [`GeodesicFormula`](crate::GeodesicFormula); it is never rounded, even when
/// edge weights are truncated to whole meters. A node is expanded at most
/// once and its settled neighbours are not relaxed again.
pub fn find_route_a_star(
    graph: &Graph,
    campus: &Campus,
    start: LocationId,
    goal: LocationId,
) -> Option<AStarOutcome> {
    let size = graph.len();
    if start >= size || goal >= size {
        return None;
    }

    let goal_position = campus.location(goal)?.coordinates();
    let formula = graph.formula();
    let heuristic = |node: LocationId| -> f64 {
        campus
            .location(node)
            .map(|location| distance_with(location.coordinates(), goal_position, formula))
            .unwrap_or(0.0)
    };

    let mut g_score: Vec<Option<f64>> = vec![None; size];
    let mut came_from: Vec<Option<LocationId>> = vec![None; size];
    let mut visited = vec![false; size];
    let mut queue = MinQueue::with_capacity(size);

    g_score[start] = Some(0.0);
    queue.insert(start, heuristic(start));

    while let Some(entry) = queue.extract_min() {
        let current = entry.node;
        if visited[current] {
            continue;
        }
        let Some(current_score) = g_score[current] else {
            continue;
        };

        if current == goal {
            trace!(start, goal, distance = current_score, "a* reached goal");
            let steps = reconstruct_path(&came_from, start, goal);
            return Some(AStarOutcome {
                path: PathResult {
                    steps,
                    distance: current_score,
                },
                came_from,
            });
        }
        visited[current] = true;

        for (next, weight) in graph.neighbours(current) {
            if visited[next] {
                continue;
            }
            let tentative = current_score + weight;
            if g_score[next].map_or(true, |known| tentative < known) {
                came_from[next] = Some(current);
                g_score[next] = Some(tentative);
                queue.insert(next, tentative + heuristic(next));
            }
        }
    }

    None
}

/// Shortest distances and next hops for every ordered pair of locations.
#[derive(Debug, Clone)]
pub struct AllPairsSolution {
    size: usize,
    distances: Vec<Option<f64>>,
    next: NextHopMatrix,
}

impl AllPairsSolution {
    /// Relax every pair through every intermediate node.
    ///
    /// The input graph is left untouched; the refined distances and next hops
    /// live in the returned value.
    pub fn solve(graph: &Graph) -> Self {
        let size = graph.len();
        let mut distances = graph.weights().to_vec();
        let mut next = NextHopMatrix::seeded(graph);

        for k in 0..size {
            for i in 0..size {
                let Some(through_k) = distances[i * size + k] else {
                    continue;
                };
                for j in 0..size {
                    let Some(k_to_j) = distances[k * size + j] else {
                        continue;
                    };
                    let candidate = through_k + k_to_j;
                    if distances[i * size + j].map_or(true, |known| candidate < known) {
                        distances[i * size + j] = Some(candidate);
                        next.set(i, j, next.next(i, k));
                    }
                }
            }
        }

        trace!(nodes = size, "all-pairs solution converged");
        Self {
            size,
            distances,
            next,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Shortest distance between two locations, `None` when unreachable.
    pub fn distance(&self, from: LocationId, to: LocationId) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.distances[from * self.size + to]
    }

    pub fn next_hops(&self) -> &NextHopMatrix {
        &self.next
    }

    /// Walk next-hop pointers from `start` until `goal` is reached.
    pub fn route(&self, start: LocationId, goal: LocationId) -> Option<PathResult> {
        let distance = self.distance(start, goal)?;
        let mut steps = vec![start];
        let mut current = start;
        while current != goal {
            current = self.next.next(current, goal)?;
            steps.push(current);
            if steps.len() > self.size {
                return None;
            }
        }
        Some(PathResult { steps, distance })
    }
}

fn reconstruct_path(
    parents: &[Option<LocationId>],
    start: LocationId,
    goal: LocationId,
) -> Vec<LocationId> {
    let mut path = Vec::new();
    let mut current = Some(goal);
    while let Some(node) = current {
        path.push(node);
        if node == start || path.len() > parents.len() {
            break;
        }
        current = parents[node];
    }
    path.reverse();
    path
}
