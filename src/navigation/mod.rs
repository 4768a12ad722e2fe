//! # Navigation Module
//!
//! Proximity graph construction, shortest paths, and turn-by-turn directions.
//!
//! - [`SpatialGraph`]: connects every pair of locations within the
//!   connectivity threshold, weighted by straight-line distance
//! - [`dijkstra`]: minimum-distance [`Route`] between two vertices
//! - [`Directions`]: the route as "Start at", "Go from", "Arrive at" steps
//! - [`Navigator`]: the three combined over a location snapshot

pub mod dijkstra;
pub mod directions;
pub mod graph;
pub mod navigator;

pub use self::dijkstra::*;
pub use directions::*;
pub use graph::*;
pub use navigator::*;
