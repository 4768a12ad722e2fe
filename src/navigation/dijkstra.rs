//! # Dijkstra Shortest Paths
//!
//! Minimum-distance routes between two vertices of a [`SpatialGraph`].

use crate::SpatialGraph;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet};

/// A path through the graph together with its total length.
///
/// `path` runs from start to end inclusive, and every consecutive pair in it is
/// an edge of the graph the route was computed on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Location names from start to end
    pub path: Vec<String>,
    /// Sum of the traversed edge weights
    pub distance: f64,
}

impl Route {
    /// First location of the route.
    pub fn start(&self) -> Option<&str> {
        self.path.first().map(String::as_str)
    }

    /// Last location of the route.
    pub fn end(&self) -> Option<&str> {
        self.path.last().map(String::as_str)
    }

    /// Number of locations on the route, endpoints included.
    pub fn len(&self) -> usize {
        self.path.len()
    }

    /// Returns true if the route has no locations.
    pub fn is_empty(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns true for the single-location route from a place to itself.
    pub fn is_trivial(&self) -> bool {
        self.path.len() == 1
    }

    /// Consecutive (from, to) pairs along the route.
    pub fn hops(&self) -> impl Iterator<Item = (&str, &str)> {
        self.path
            .windows(2)
            .map(|pair| (pair[0].as_str(), pair[1].as_str()))
    }
}

/// Priority queue entry for Dijkstra's algorithm.
#[derive(Debug, Clone, Copy)]
struct DijkstraNode<'a> {
    name: &'a str,
    cost: f64,
}

impl PartialEq for DijkstraNode<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for DijkstraNode<'_> {}

impl PartialOrd for DijkstraNode<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DijkstraNode<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior in BinaryHeap; equal costs
        // pop in name order
        other
            .cost
            .partial_cmp(&self.cost)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.name.cmp(self.name))
    }
}

/// Finds the shortest route between two named vertices.
///
/// Returns `None` when either name is not a vertex or when `end` cannot be
/// reached from `start`. A query from a vertex to itself yields the
/// single-location route with distance zero.
///
/// # Examples
///
/// ```
/// use campus_nav::{dijkstra, Coordinate, GraphConfig, SpatialGraph};
///
/// let graph = SpatialGraph::build(
///     [
///         ("A", Coordinate::new(0.0, 0.0, 0.0)),
///         ("B", Coordinate::new(10.0, 0.0, 0.0)),
///         ("C", Coordinate::new(25.0, 0.0, 0.0)),
///     ],
///     &GraphConfig::default(),
/// )
/// .unwrap();
///
/// let route = dijkstra(&graph, "A", "C").unwrap();
/// assert_eq!(route.path, vec!["A", "B", "C"]);
/// assert_eq!(route.distance, 25.0);
/// ```
pub fn dijkstra(graph: &SpatialGraph, start: &str, end: &str) -> Option<Route> {
    if !graph.contains(start) || !graph.contains(end) {
        debug!("No route from '{}' to '{}': unknown location", start, end);
        return None;
    }

    if start == end {
        return Some(Route {
            path: vec![start.to_string()],
            distance: 0.0,
        });
    }

    let mut distances: HashMap<&str, f64> = HashMap::new();
    let mut previous: HashMap<&str, &str> = HashMap::new();
    let mut settled: HashSet<&str> = HashSet::new();
    let mut frontier = BinaryHeap::new();

    distances.insert(start, 0.0);
    frontier.push(DijkstraNode {
        name: start,
        cost: 0.0,
    });

    while let Some(DijkstraNode { name, cost }) = frontier.pop() {
        // Stale entry for a vertex already settled at a lower cost
        if !settled.insert(name) {
            continue;
        }
        trace!("Settled '{}' at {}", name, cost);

        if name == end {
            break;
        }

        for (neighbor, weight) in graph.neighbors(name) {
            let neighbor = neighbor.as_str();
            if settled.contains(neighbor) {
                continue;
            }
            let candidate = cost + weight;
            if candidate < distances.get(neighbor).copied().unwrap_or(f64::INFINITY) {
                distances.insert(neighbor, candidate);
                previous.insert(neighbor, name);
                frontier.push(DijkstraNode {
                    name: neighbor,
                    cost: candidate,
                });
            }
        }
    }

    // Walk predecessors back from the destination
    let mut path = vec![end.to_string()];
    let mut current = end;
    while let Some(&prev) = previous.get(current) {
        path.push(prev.to_string());
        current = prev;
    }
    path.reverse();

    if path.first().map(String::as_str) != Some(start) {
        debug!("No route from '{}' to '{}': disconnected", start, end);
        return None;
    }

    let distance = distances.get(end).copied()?;
    debug!(
        "Route from '{}' to '{}': {} stops, distance {:.2}",
        start,
        end,
        path.len(),
        distance
    );
    Some(Route { path, distance })
}
