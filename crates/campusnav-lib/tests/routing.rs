mod common;

use campusnav_lib::{
    compare_algorithms, find_route_a_star, find_route_dijkstra, geodesic_distance, plan_route,
    Campus, Error, RouteAlgorithm, RouteRequest, RoutingContext,
};

use common::{campus_with_outpost, context_with_threshold, reference_context};

fn assert_algorithms_agree(context: &RoutingContext) {
    let graph = context.graph();
    let campus = context.campus();
    let all_pairs = context.all_pairs();

    for start in 0..graph.len() {
        for goal in 0..graph.len() {
            let dijkstra = find_route_dijkstra(graph, start, goal);
            let a_star = find_route_a_star(graph, campus, start, goal);
            let floyd = all_pairs.route(start, goal);

            assert_eq!(dijkstra.is_some(), a_star.is_some(), "{start}->{goal}");
            assert_eq!(dijkstra.is_some(), floyd.is_some(), "{start}->{goal}");

            if let (Some(dijkstra), Some(a_star), Some(floyd)) = (dijkstra, a_star, floyd) {
                assert_eq!(dijkstra.distance, floyd.distance, "{start}->{goal}");
                assert_eq!(dijkstra.distance, a_star.path.distance, "{start}->{goal}");
                for steps in [&dijkstra.steps, &a_star.path.steps, &floyd.steps] {
                    assert_eq!(steps.first(), Some(&start));
                    assert_eq!(steps.last(), Some(&goal));
                }
            }
        }
    }
}

#[test]
fn algorithms_agree_on_reference_campus() {
    assert_algorithms_agree(&reference_context());
}

#[test]
fn algorithms_agree_on_sparse_graphs() {
    for threshold in [45.0, 70.0, 120.0] {
        assert_algorithms_agree(&context_with_threshold(Campus::reference(), threshold));
    }
}

#[test]
fn main_gate_to_hostel_with_dijkstra() {
    let context = reference_context();
    let plan = plan_route(&context, &RouteRequest::dijkstra("main gate", "hostel")).expect("route exists");

    let campus = context.campus();
    assert_eq!(campus.name(plan.steps[0]), Some("main gate"));
    assert_eq!(campus.name(*plan.steps.last().unwrap()), Some("hostel"));
    assert!(plan.distance.is_finite());

    // main gate -> canteen -> basketball -> volleyball ground -> cricket ground -> hostel
    let traced = [0, 10, 2, 11, 3, 12];
    let graph = context.graph();
    let traced_total: f64 = traced
        .windows(2)
        .map(|pair| graph.weight(pair[0], pair[1]).expect("edge exists"))
        .sum();
    assert!(plan.distance <= traced_total);
}

#[test]
fn same_source_and_destination_is_single_step() {
    let context = reference_context();
    for algorithm in RouteAlgorithm::ALL {
        let request = RouteRequest::new("Library", "library", algorithm);
        let plan = plan_route(&context, &request).expect("trivial route");
        assert_eq!(plan.steps, vec![9]);
        assert_eq!(plan.distance, 0.0);
    }
}

#[test]
fn isolated_location_is_unreachable_for_every_algorithm() {
    let context = context_with_threshold(campus_with_outpost(), 1_000.0);
    for algorithm in RouteAlgorithm::ALL {
        let request = RouteRequest::new("main gate", "obs", algorithm);
        let err = plan_route(&context, &request).expect_err("outpost is isolated");
        assert!(matches!(err, Error::RouteNotFound { .. }), "{algorithm}: {err}");
    }

    let comparison = compare_algorithms(&context, "observatory", "hostel").expect("names resolve");
    assert_eq!(comparison.len(), 3);
    assert!(comparison.iter().all(|entry| entry.plan.is_none()));
}

#[test]
fn unknown_location_is_reported_with_suggestions() {
    let context = reference_context();
    let err = plan_route(&context, &RouteRequest::dijkstra("main gat", "hostel"))
        .expect_err("unknown start");
    let message = err.to_string();
    assert!(message.contains("unknown location: main gat"), "{message}");
    assert!(message.contains("Did you mean"), "{message}");
    assert!(message.contains("main gate"), "{message}");
}

#[test]
fn floyd_warshall_path_sums_to_recorded_distance() {
    let context = context_with_threshold(Campus::reference(), 70.0);
    let campus = context.campus();
    let graph = context.graph();
    let all_pairs = context.all_pairs();

    for start in 0..graph.len() {
        for goal in 0..graph.len() {
            let (Some(route), Some(recorded)) =
                (all_pairs.route(start, goal), all_pairs.distance(start, goal))
            else {
                continue;
            };

            let edge_sum: f64 = route
                .steps
                .windows(2)
                .map(|pair| graph.weight(pair[0], pair[1]).expect("consecutive steps share an edge"))
                .sum();
            assert_eq!(edge_sum, recorded);

            let geodesic_sum: f64 = route
                .steps
                .windows(2)
                .map(|pair| {
                    let a = campus.location(pair[0]).unwrap().coordinates();
                    let b = campus.location(pair[1]).unwrap().coordinates();
                    geodesic_distance(a, b)
                })
                .sum();
            assert!(geodesic_sum - recorded >= 0.0);
            assert!(geodesic_sum - recorded <= route.hop_count() as f64);
        }
    }
}

#[test]
fn comparison_runs_every_algorithm() {
    let context = reference_context();
    let comparison = compare_algorithms(&context, "bus", "saisandhya hall").expect("names resolve");
    let algorithms: Vec<_> = comparison.iter().map(|entry| entry.algorithm).collect();
    assert_eq!(algorithms, RouteAlgorithm::ALL.to_vec());
    let distances: Vec<f64> = comparison
        .iter()
        .map(|entry| entry.plan.as_ref().expect("route exists").distance)
        .collect();
    assert_eq!(distances, vec![163.0; 3]);
}

#[test]
fn oat_to_academic_block_c_is_106_meters_for_every_algorithm() {
    let context = reference_context();
    for algorithm in RouteAlgorithm::ALL {
        let request = RouteRequest::new("oat", "academic block c", algorithm);
        let plan = plan_route(&context, &request).expect("route exists");
        assert_eq!(plan.distance, 106.0, "{algorithm}");
    }
}

#[test]
fn a_star_matches_dijkstra_from_main_gate_to_cricket_ground() {
    let context = reference_context();
    let dijkstra = plan_route(&context, &RouteRequest::dijkstra("main gate", "cricket ground"))
        .expect("route exists");
    let a_star = plan_route(
        &context,
        &RouteRequest::new("main gate", "cricket ground", RouteAlgorithm::AStar),
    )
    .expect("route exists");
    assert_eq!(dijkstra.distance, 158.0);
    assert_eq!(a_star.distance, 158.0);
}
