//! # Spatial Graph
//!
//! Weighted, undirected proximity graph over named campus locations.
//!
//! Every unordered pair of distinct locations is examined once. Two locations
//! are joined when their straight-line distance is at most the connectivity
//! threshold, and the edge weight is that distance. The graph has no mutation
//! API: it is built from a coordinate snapshot, queried, and discarded.

use crate::{config, Coordinate, NavError, NavResult};
use log::debug;
use pathfinding::directed::bfs::bfs_reach;
use pathfinding::undirected::connected_components::connected_components;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Configuration for proximity graph construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Maximum distance (inclusive) at which two locations are connected
    pub connectivity_threshold: f64,
}

impl GraphConfig {
    /// Creates a configuration with the given connectivity threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_nav::GraphConfig;
    ///
    /// let config = GraphConfig::new(35.0);
    /// assert_eq!(config.connectivity_threshold, 35.0);
    /// assert_eq!(GraphConfig::default().connectivity_threshold, 20.0);
    /// ```
    pub fn new(connectivity_threshold: f64) -> Self {
        Self {
            connectivity_threshold,
        }
    }

    fn validate(&self) -> NavResult<()> {
        if !self.connectivity_threshold.is_finite() || self.connectivity_threshold < 0.0 {
            return Err(NavError::InvalidThreshold(self.connectivity_threshold));
        }
        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self::new(config::DEFAULT_CONNECTIVITY_THRESHOLD)
    }
}

/// Proximity graph built from a location snapshot.
#[derive(Debug, Clone, Default)]
pub struct SpatialGraph {
    /// Location name to coordinate
    vertices: BTreeMap<String, Coordinate>,
    /// Location name to (neighbor name, distance) pairs
    edges: BTreeMap<String, Vec<(String, f64)>>,
    threshold: f64,
}

impl SpatialGraph {
    /// Builds the proximity graph for the given locations.
    ///
    /// A repeated name keeps the last coordinate given for it. Fails on empty
    /// names, non-finite coordinates, or an unusable threshold; these are data
    /// loader bugs rather than navigation outcomes.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_nav::{Coordinate, GraphConfig, SpatialGraph};
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
    /// assert_eq!(graph.vertex_count(), 3);
    /// assert_eq!(graph.neighbors("A"), &[("B".to_string(), 10.0)]);
    /// assert!(graph.neighbors("Unknown").is_empty());
    /// ```
    pub fn build<K>(
        locations: impl IntoIterator<Item = (K, Coordinate)>,
        config: &GraphConfig,
    ) -> NavResult<Self>
    where
        K: Into<String>,
    {
        config.validate()?;

        let mut vertices = BTreeMap::new();
        for (name, coordinate) in locations {
            let name = name.into();
            if name.is_empty() {
                return Err(NavError::InvalidName(name));
            }
            if !coordinate.is_finite() {
                return Err(NavError::InvalidCoordinate { name });
            }
            vertices.insert(name, coordinate);
        }

        let mut edges: BTreeMap<String, Vec<(String, f64)>> = vertices
            .keys()
            .map(|name| (name.clone(), Vec::new()))
            .collect();

        let entries: Vec<(&String, &Coordinate)> = vertices.iter().collect();
        let mut edge_count = 0;
        for (i, (first, first_coord)) in entries.iter().enumerate() {
            for (second, second_coord) in &entries[i + 1..] {
                let distance = first_coord.euclidean_distance(**second_coord);
                if distance <= config.connectivity_threshold {
                    if let Some(list) = edges.get_mut(*first) {
                        list.push(((*second).clone(), distance));
                    }
                    if let Some(list) = edges.get_mut(*second) {
                        list.push(((*first).clone(), distance));
                    }
                    edge_count += 1;
                }
            }
        }

        debug!(
            "Built spatial graph: {} vertices, {} edges, threshold {}",
            vertices.len(),
            edge_count,
            config.connectivity_threshold
        );

        Ok(Self {
            vertices,
            edges,
            threshold: config.connectivity_threshold,
        })
    }

    /// Neighbors of a vertex with their edge weights; empty for unknown vertices.
    pub fn neighbors(&self, name: &str) -> &[(String, f64)] {
        self.edges.get(name).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of distinct locations in the graph.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum::<usize>() / 2
    }

    /// Returns true if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Checks whether a location is a vertex of this graph.
    pub fn contains(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    /// Coordinate of a vertex.
    pub fn coordinate(&self, name: &str) -> Option<Coordinate> {
        self.vertices.get(name).copied()
    }

    /// Vertex names in sorted order.
    pub fn vertex_names(&self) -> impl Iterator<Item = &str> {
        self.vertices.keys().map(String::as_str)
    }

    /// Connectivity threshold the graph was built with.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Weight of the edge between two vertices, if they are adjacent.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbors(from)
            .iter()
            .find(|(neighbor, _)| neighbor == to)
            .map(|&(_, weight)| weight)
    }

    /// Groups vertices into connected components.
    ///
    /// Components are ordered by their smallest vertex name.
    pub fn connected_components(&self) -> Vec<BTreeSet<String>> {
        let starts: Vec<String> = self.vertices.keys().cloned().collect();
        let mut components: Vec<BTreeSet<String>> =
            connected_components(&starts, |name: &String| {
                self.neighbors(name)
                    .iter()
                    .map(|(neighbor, _)| neighbor.clone())
                    .collect::<Vec<_>>()
            })
            .into_iter()
            .map(|component| component.into_iter().collect())
            .collect();
        components.sort_by(|a, b| a.iter().next().cmp(&b.iter().next()));
        components
    }

    /// Checks whether some path joins two known vertices.
    ///
    /// Unknown names are never connected, not even to themselves.
    pub fn are_connected(&self, a: &str, b: &str) -> bool {
        if !self.contains(a) || !self.contains(b) {
            return false;
        }
        bfs_reach(a, |name: &&str| {
            self.neighbors(name)
                .iter()
                .map(|(neighbor, _)| neighbor.as_str())
                .collect::<Vec<_>>()
        })
        .any(|name| name == b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_graph() -> SpatialGraph {
        SpatialGraph::build(
            [
                ("A", Coordinate::new(0.0, 0.0, 0.0)),
                ("B", Coordinate::new(10.0, 0.0, 0.0)),
                ("C", Coordinate::new(25.0, 0.0, 0.0)),
                ("D", Coordinate::new(1000.0, 1000.0, 1000.0)),
            ],
            &GraphConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_graph_construction() {
        let graph = line_graph();
        assert_eq!(graph.vertex_count(), 4);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.edge_weight("A", "B"), Some(10.0));
        assert_eq!(graph.edge_weight("B", "C"), Some(15.0));
        assert_eq!(graph.edge_weight("A", "C"), None);
        assert!(graph.neighbors("D").is_empty());
    }

    #[test]
    fn test_edges_are_symmetric() {
        let graph = line_graph();
        for name in graph.vertex_names() {
            for (neighbor, weight) in graph.neighbors(name) {
                assert_eq!(graph.edge_weight(neighbor, name), Some(*weight));
            }
        }
    }

    #[test]
    fn test_no_self_edges() {
        let graph = line_graph();
        for name in graph.vertex_names() {
            assert!(graph.edge_weight(name, name).is_none());
        }
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let graph = SpatialGraph::build(
            [
                ("A", Coordinate::new(0.0, 0.0, 0.0)),
                ("B", Coordinate::new(20.0, 0.0, 0.0)),
                ("C", Coordinate::new(40.000001, 0.0, 0.0)),
            ],
            &GraphConfig::default(),
        )
        .unwrap();
        assert_eq!(graph.edge_weight("A", "B"), Some(20.0));
        assert_eq!(graph.edge_weight("B", "C"), None);
    }

    #[test]
    fn test_custom_threshold() {
        let points = [
            ("A", Coordinate::new(0.0, 0.0, 0.0)),
            ("C", Coordinate::new(25.0, 0.0, 0.0)),
        ];
        let tight = SpatialGraph::build(points, &GraphConfig::default()).unwrap();
        assert_eq!(tight.edge_count(), 0);

        let loose = SpatialGraph::build(points, &GraphConfig::new(30.0)).unwrap();
        assert_eq!(loose.edge_weight("A", "C"), Some(25.0));
        assert_eq!(loose.threshold(), 30.0);
    }

    #[test]
    fn test_zero_threshold_connects_coincident_points() {
        let graph = SpatialGraph::build(
            [
                ("Gate", Coordinate::new(5.0, 5.0, 0.0)),
                ("Guard House", Coordinate::new(5.0, 5.0, 0.0)),
                ("Library", Coordinate::new(6.0, 5.0, 0.0)),
            ],
            &GraphConfig::new(0.0),
        )
        .unwrap();
        assert_eq!(graph.edge_weight("Gate", "Guard House"), Some(0.0));
        assert!(graph.neighbors("Library").is_empty());
    }

    #[test]
    fn test_empty_graph() {
        let graph =
            SpatialGraph::build(Vec::<(String, Coordinate)>::new(), &GraphConfig::default())
                .unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.connected_components().is_empty());
    }

    #[test]
    fn test_unknown_vertex_lookups() {
        let graph = line_graph();
        assert!(graph.neighbors("Unknown").is_empty());
        assert!(!graph.contains("Unknown"));
        assert!(graph.coordinate("Unknown").is_none());
    }

    #[test]
    fn test_invalid_input_is_rejected() {
        let nan = SpatialGraph::build(
            [("A", Coordinate::new(f64::NAN, 0.0, 0.0))],
            &GraphConfig::default(),
        );
        assert!(matches!(nan, Err(NavError::InvalidCoordinate { .. })));

        let empty_name =
            SpatialGraph::build([("", Coordinate::origin())], &GraphConfig::default());
        assert!(matches!(empty_name, Err(NavError::InvalidName(_))));

        let negative = SpatialGraph::build([("A", Coordinate::origin())], &GraphConfig::new(-1.0));
        assert!(matches!(negative, Err(NavError::InvalidThreshold(_))));

        let infinite =
            SpatialGraph::build([("A", Coordinate::origin())], &GraphConfig::new(f64::INFINITY));
        assert!(matches!(infinite, Err(NavError::InvalidThreshold(_))));
    }

    #[test]
    fn test_connected_components() {
        let graph = line_graph();
        let components = graph.connected_components();
        assert_eq!(components.len(), 2);
        assert_eq!(
            components[0].iter().map(String::as_str).collect::<Vec<_>>(),
            vec!["A", "B", "C"]
        );
        assert!(components[1].contains("D"));
    }

    #[test]
    fn test_are_connected() {
        let graph = line_graph();
        assert!(graph.are_connected("A", "C"));
        assert!(graph.are_connected("C", "A"));
        assert!(graph.are_connected("D", "D"));
        assert!(!graph.are_connected("A", "D"));
        assert!(!graph.are_connected("A", "Unknown"));
        assert!(!graph.are_connected("Unknown", "Unknown"));
    }

    #[test]
    fn test_are_connected_across_long_chain() {
        // Five hops of 15 units each, with a loop back from the far end
        let mut locations: Vec<(String, Coordinate)> = (0..6)
            .map(|i| (format!("Stop {}", i), Coordinate::new(i as f64 * 15.0, 0.0, 0.0)))
            .collect();
        locations.push(("Loop".to_string(), Coordinate::new(75.0, 15.0, 0.0)));
        locations.push(("Island".to_string(), Coordinate::new(0.0, 500.0, 0.0)));
        let graph = SpatialGraph::build(locations, &GraphConfig::default()).unwrap();

        assert!(graph.are_connected("Stop 0", "Stop 5"));
        assert!(graph.are_connected("Stop 0", "Loop"));
        assert!(graph.are_connected("Loop", "Stop 0"));
        assert!(!graph.are_connected("Stop 0", "Island"));
        assert!(!graph.are_connected("Island", "Loop"));
    }
}
