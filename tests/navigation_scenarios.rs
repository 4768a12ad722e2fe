//! Integration tests for the end-to-end routing scenarios.

use campus_nav::{dijkstra, Coordinate, GraphConfig, NavResult, Navigator, SpatialGraph};

fn scenario_locations() -> Vec<(&'static str, Coordinate)> {
    vec![
        ("A", Coordinate::new(0.0, 0.0, 0.0)),
        ("B", Coordinate::new(10.0, 0.0, 0.0)),
        ("C", Coordinate::new(25.0, 0.0, 0.0)),
    ]
}

#[test]
fn test_graph_edges_follow_threshold() -> NavResult<()> {
    let graph = SpatialGraph::build(scenario_locations(), &GraphConfig::default())?;

    assert_eq!(graph.edge_weight("A", "B"), Some(10.0));
    assert_eq!(graph.edge_weight("B", "C"), Some(15.0));
    assert_eq!(graph.edge_weight("A", "C"), None);
    Ok(())
}

#[test]
fn test_shortest_path_through_intermediate() -> NavResult<()> {
    let graph = SpatialGraph::build(scenario_locations(), &GraphConfig::default())?;

    let route = dijkstra(&graph, "A", "C").expect("A and C should be connected");
    assert_eq!(route.path, vec!["A", "B", "C"]);
    assert_eq!(route.distance, 25.0);
    Ok(())
}

#[test]
fn test_self_route() -> NavResult<()> {
    let graph = SpatialGraph::build(scenario_locations(), &GraphConfig::default())?;

    let route = dijkstra(&graph, "A", "A").expect("self route should exist");
    assert_eq!(route.path, vec!["A"]);
    assert_eq!(route.distance, 0.0);
    Ok(())
}

#[test]
fn test_isolated_location_has_no_path() -> NavResult<()> {
    let mut locations = scenario_locations();
    locations.push(("D", Coordinate::new(1000.0, 1000.0, 1000.0)));
    let graph = SpatialGraph::build(locations, &GraphConfig::default())?;

    assert!(dijkstra(&graph, "A", "D").is_none());
    assert!(!graph.are_connected("A", "D"));
    Ok(())
}

#[test]
fn test_directions_scenario() -> NavResult<()> {
    let navigator = Navigator::new(scenario_locations(), GraphConfig::default());

    let directions = navigator
        .get_directions_with_pathfinding("A", "C")?
        .expect("directions should exist");
    assert_eq!(
        directions.steps_as_strings(),
        vec!["Start at A", "Go from A to B", "Arrive at C"]
    );
    assert_eq!(directions.distance, 25.0);
    Ok(())
}

#[test]
fn test_straight_line_distance_without_edge() {
    let navigator = Navigator::new(scenario_locations(), GraphConfig::default());
    assert_eq!(navigator.calculate_distance("A", "C"), Some(25.0));
}

#[test]
fn test_unknown_neighbors_are_empty() -> NavResult<()> {
    let graph = SpatialGraph::build(scenario_locations(), &GraphConfig::default())?;
    assert!(graph.neighbors("Unknown").is_empty());
    Ok(())
}

#[test]
fn test_reused_graph_matches_fresh_queries() -> NavResult<()> {
    let navigator = Navigator::new(scenario_locations(), GraphConfig::default());
    let graph = navigator.build_graph()?;

    for (start, end) in [("A", "C"), ("C", "A"), ("B", "B"), ("A", "B")] {
        let reused = dijkstra(&graph, start, end).map(|route| route.distance);
        let fresh = navigator
            .get_directions_with_pathfinding(start, end)?
            .map(|directions| directions.distance);
        assert_eq!(reused, fresh, "{} -> {}", start, end);
    }
    Ok(())
}
