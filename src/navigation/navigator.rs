//! # Navigator
//!
//! Application-facing entry point for routing questions.
//!
//! A navigator owns an immutable coordinate snapshot. Each directions query
//! builds a fresh [`SpatialGraph`] from it; callers answering many queries
//! can build the graph once with [`Navigator::build_graph`] and call
//! [`dijkstra`] themselves.

use crate::{
    dijkstra, CampusCatalog, Coordinate, Directions, GraphConfig, NavError, NavResult, Route,
    SpatialGraph,
};
use log::debug;
use std::collections::BTreeMap;

/// Answers route and distance queries over a location snapshot.
#[derive(Debug, Clone, Default)]
pub struct Navigator {
    coordinates: BTreeMap<String, Coordinate>,
    config: GraphConfig,
}

impl Navigator {
    /// Creates a navigator over the given locations.
    pub fn new<K>(locations: impl IntoIterator<Item = (K, Coordinate)>, config: GraphConfig) -> Self
    where
        K: Into<String>,
    {
        Self {
            coordinates: locations
                .into_iter()
                .map(|(name, coordinate)| (name.into(), coordinate))
                .collect(),
            config,
        }
    }

    /// Creates a navigator over every location of a campus catalog.
    pub fn from_catalog(catalog: &CampusCatalog, config: GraphConfig) -> Self {
        Self {
            coordinates: catalog.coordinates_map(),
            config,
        }
    }

    /// Graph configuration used for every query.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Number of locations in the snapshot.
    pub fn location_count(&self) -> usize {
        self.coordinates.len()
    }

    /// Location names in sorted order.
    pub fn location_names(&self) -> impl Iterator<Item = &str> {
        self.coordinates.keys().map(String::as_str)
    }

    /// Resolves a query to a canonical location name.
    ///
    /// An exact match wins; otherwise the first name equal ignoring case is used.
    pub fn resolve_name(&self, query: &str) -> Option<&str> {
        if let Some((name, _)) = self.coordinates.get_key_value(query) {
            return Some(name.as_str());
        }
        let lowered = query.to_lowercase();
        self.coordinates
            .keys()
            .find(|name| name.to_lowercase() == lowered)
            .map(String::as_str)
    }

    /// Builds the proximity graph for the current snapshot.
    pub fn build_graph(&self) -> NavResult<SpatialGraph> {
        SpatialGraph::build(
            self.coordinates
                .iter()
                .map(|(name, coordinate)| (name.clone(), *coordinate)),
            &self.config,
        )
    }

    /// Shortest-path directions between two locations.
    ///
    /// Returns `Ok(None)` when a location is unknown or no path joins them.
    /// Errors only if the snapshot itself holds invalid data.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_nav::{Coordinate, GraphConfig, Navigator};
    ///
    /// let navigator = Navigator::new(
    ///     [
    ///         ("A", Coordinate::new(0.0, 0.0, 0.0)),
    ///         ("B", Coordinate::new(10.0, 0.0, 0.0)),
    ///         ("C", Coordinate::new(25.0, 0.0, 0.0)),
    ///     ],
    ///     GraphConfig::default(),
    /// );
    ///
    /// let directions = navigator
    ///     .get_directions_with_pathfinding("A", "C")
    ///     .unwrap()
    ///     .unwrap();
    /// assert_eq!(
    ///     directions.steps_as_strings(),
    ///     vec!["Start at A", "Go from A to B", "Arrive at C"]
    /// );
    /// assert_eq!(directions.distance, 25.0);
    /// ```
    pub fn get_directions_with_pathfinding(
        &self,
        start: &str,
        end: &str,
    ) -> NavResult<Option<Directions>> {
        let graph = self.build_graph()?;
        Ok(dijkstra(&graph, start, end).map(|route| Directions::from_route(&route)))
    }

    /// Direction steps only, without the distance.
    pub fn get_directions(&self, start: &str, end: &str) -> NavResult<Option<Vec<String>>> {
        Ok(self
            .get_directions_with_pathfinding(start, end)?
            .map(|directions| directions.steps_as_strings()))
    }

    /// Straight-line distance between two locations, ignoring the graph.
    ///
    /// Names resolve through [`Navigator::resolve_name`]. Returns `None` if
    /// either location is unknown.
    pub fn calculate_distance(&self, start: &str, end: &str) -> Option<f64> {
        let from = self.coordinates.get(self.resolve_name(start)?)?;
        let to = self.coordinates.get(self.resolve_name(end)?)?;
        Some(from.euclidean_distance(*to))
    }

    /// Shortest route with the failure reason spelled out.
    ///
    /// Unlike [`Navigator::get_directions_with_pathfinding`] this reports an
    /// unknown name as [`NavError::UnknownLocation`] and a disconnected pair as
    /// [`NavError::NoPath`].
    pub fn route(&self, start: &str, end: &str) -> NavResult<Route> {
        let graph = self.build_graph()?;
        for name in [start, end] {
            if !graph.contains(name) {
                return Err(NavError::UnknownLocation(name.to_string()));
            }
        }
        dijkstra(&graph, start, end).ok_or_else(|| {
            debug!("'{}' and '{}' are in different components", start, end);
            NavError::NoPath {
                start: start.to_string(),
                end: end.to_string(),
            }
        })
    }
}
