//! # Campus Module
//!
//! The campus location catalog.
//!
//! Campus data files hold every named location with its category and 3D
//! coordinates. The catalog is loaded once and is read-only afterwards; the
//! navigation layer only ever sees the [`CampusCatalog::coordinates_map`]
//! snapshot it produces.

pub mod catalog;

pub use catalog::*;

use crate::Coordinate;
use serde::{Deserialize, Serialize};

/// A named place on campus.
///
/// # Examples
///
/// ```
/// use campus_nav::{Coordinate, Location};
///
/// let library = Location::new("lib", "Library", "academic", Coordinate::new(10.0, 5.0, 0.0));
/// assert_eq!(library.name, "Library");
/// assert!(library.matches_name("LIBRARY"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Catalog key for this location, taken from the data file
    #[serde(skip)]
    pub id: String,
    /// Display name, unique across the catalog
    pub name: String,
    /// Free-form grouping such as "academic" or "sports"
    #[serde(default)]
    pub category: String,
    /// Position in campus space
    pub coordinates: Coordinate,
    /// Optional human-readable description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Location {
    /// Creates a new location without a description.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        coordinates: Coordinate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            coordinates,
            description: None,
        }
    }

    /// Attaches a description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Case-insensitive comparison against the display name.
    pub fn matches_name(&self, query: &str) -> bool {
        self.name.to_lowercase() == query.to_lowercase()
    }

    /// Case-insensitive comparison against the category.
    pub fn in_category(&self, category: &str) -> bool {
        self.category.to_lowercase() == category.to_lowercase()
    }
}
