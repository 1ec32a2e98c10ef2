mod common;

use campusnav_lib::{
    plan_route, Campus, RouteAlgorithm, RoutePlan, RouteRenderMode, RouteRequest, RouteSummary,
    WalkingProfile,
};

use common::reference_context;

#[test]
fn summary_rejects_empty_plans() {
    let plan = RoutePlan {
        algorithm: RouteAlgorithm::Dijkstra,
        start: 0,
        goal: 0,
        steps: Vec::new(),
        distance: 0.0,
    };

    let err = RouteSummary::from_plan(&Campus::reference(), &plan, &WalkingProfile::default())
        .expect_err("empty plans are rejected");
    assert_eq!(format!("{err}"), "route plan was empty");
}

#[test]
fn summary_from_plan_populates_names() {
    let context = reference_context();
    let plan = plan_route(&context, &RouteRequest::new("oat", "bus", RouteAlgorithm::AStar))
        .expect("route exists");
    let summary = RouteSummary::from_plan(context.campus(), &plan, &WalkingProfile::default())
        .expect("summary builds");

    assert_eq!(summary.start.name, "oat");
    assert_eq!(summary.goal.name, "bus");
    assert_eq!(summary.path.len(), plan.steps.len());
    assert_eq!(summary.hops, plan.hop_count());
    for (index, step) in summary.path.iter().enumerate() {
        assert_eq!(step.index, index);
        assert_eq!(Some(step.name.as_str()), context.campus().name(step.id));
    }
}

#[test]
fn walking_metrics_follow_profile() {
    let context = reference_context();
    let plan = plan_route(&context, &RouteRequest::dijkstra("main gate", "hostel")).unwrap();
    let slow = WalkingProfile {
        speed_mps: 0.7,
        step_length_m: 1.6,
    };
    let default = RouteSummary::from_plan(context.campus(), &plan, &WalkingProfile::default()).unwrap();
    let custom = RouteSummary::from_plan(context.campus(), &plan, &slow).unwrap();

    assert_eq!(default.distance, custom.distance);
    assert_eq!(custom.steps, (custom.distance as f64 / 1.6).floor() as u64);
    assert!(custom.time_minutes > default.time_minutes);
}

#[test]
fn map_url_lists_coordinates_in_path_order() {
    let context = reference_context();
    let plan = plan_route(&context, &RouteRequest::dijkstra("library", "bus")).unwrap();
    let summary = RouteSummary::from_plan(context.campus(), &plan, &WalkingProfile::default()).unwrap();

    let route = summary
        .path
        .iter()
        .map(|step| format!("{:.6},{:.6}", step.latitude, step.longitude))
        .collect::<Vec<_>>()
        .join(";");
    assert!(summary.map_url.contains(&route));
    assert!(summary.map_url.contains("#map=19/29.375556/79.530556"));
    assert!(summary
        .map_url
        .ends_with(&format!("&distance={}&time={:.2}", summary.distance, summary.time_minutes)));
}

#[test]
fn compact_rendering_is_single_line() {
    let context = reference_context();
    let plan = plan_route(&context, &RouteRequest::dijkstra("DS", "canteen")).unwrap();
    let summary = RouteSummary::from_plan(context.campus(), &plan, &WalkingProfile::default()).unwrap();

    let compact = summary.render(RouteRenderMode::Compact);
    assert_eq!(compact.lines().count(), 1);
    assert!(compact.starts_with("Dijkstra: "));
}
