//! # Campus Nav
//!
//! Proximity-graph navigation over named 3D campus locations.
//!
//! ## Architecture Overview
//!
//! The crate turns a snapshot of location coordinates into turn-by-turn
//! directions. The pieces are layered so each one can be used on its own:
//!
//! - **Geometry**: 3D coordinates and straight-line distance
//! - **Campus**: the location catalog loaded from campus JSON data
//! - **Navigation**: the proximity graph, Dijkstra shortest paths, and
//!   direction steps, plus a [`Navigator`] facade for application layers
//!
//! Unknown locations and disconnected locations are ordinary outcomes here and
//! come back as `None`. Only malformed input data (non-finite coordinates,
//! empty names, unreadable files) surfaces as a [`NavError`].

pub mod campus;
pub mod geometry;
pub mod navigation;

pub use campus::*;
pub use geometry::*;
pub use navigation::*;

/// Core error type for campus navigation.
#[derive(thiserror::Error, Debug)]
pub enum NavError {
    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A location carries a NaN or infinite coordinate component
    #[error("Invalid coordinate for location '{name}'")]
    InvalidCoordinate { name: String },

    /// A location name is empty
    #[error("Invalid location name: {0:?}")]
    InvalidName(String),

    /// Connectivity threshold is negative or not finite
    #[error("Invalid connectivity threshold: {0}")]
    InvalidThreshold(f64),

    /// Location is not part of the current snapshot
    #[error("Unknown location: {0}")]
    UnknownLocation(String),

    /// Both locations exist but the proximity graph does not connect them
    #[error("No path from {start} to {end}")]
    NoPath { start: String, end: String },

    /// Two catalog entries share an id or a display name
    #[error("Duplicate location '{name}' (id '{id}')")]
    DuplicateLocation { id: String, name: String },
}

/// Result type used throughout the campus_nav codebase.
pub type NavResult<T> = Result<T, NavError>;

/// Version information for the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Navigation configuration constants.
pub mod config {
    /// Default distance under which two locations are connected
    pub const DEFAULT_CONNECTIVITY_THRESHOLD: f64 = 20.0;

    /// Default location of the campus data file
    pub const DEFAULT_DATA_PATH: &str = "data/campus_data.json";
}
