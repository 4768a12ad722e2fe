//! # Campus Catalog
//!
//! Loading and lookup of campus locations from JSON data.

use crate::{Coordinate, Location, NavError, NavResult};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

/// On-disk shape of a campus data file.
///
/// Other top-level sections (timings, canned directions) may be present in the
/// file and are ignored.
#[derive(Debug, Default, Serialize, Deserialize)]
struct CampusData {
    #[serde(default)]
    locations: BTreeMap<String, Location>,
}

/// Read-only collection of campus locations keyed by id.
#[derive(Debug, Clone, Default)]
pub struct CampusCatalog {
    locations: BTreeMap<String, Location>,
}

impl CampusCatalog {
    /// Builds a catalog from already constructed locations.
    ///
    /// Fails if any location has an empty name, a non-finite coordinate, or an
    /// id or display name already used by another location.
    pub fn from_locations(locations: impl IntoIterator<Item = Location>) -> NavResult<Self> {
        let mut catalog = BTreeMap::new();
        for location in locations {
            let id = location.id.clone();
            let name = location.name.clone();
            if catalog.insert(id.clone(), location).is_some() {
                return Err(NavError::DuplicateLocation { id, name });
            }
        }
        let catalog = Self { locations: catalog };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parses a campus data document.
    ///
    /// # Examples
    ///
    /// ```
    /// use campus_nav::CampusCatalog;
    ///
    /// let json = r#"{
    ///     "locations": {
    ///         "lib": { "name": "Library", "category": "academic", "coordinates": [0, 0, 0] },
    ///         "gym": { "name": "Gymnasium", "category": "sports", "coordinates": [10, 0, 0] }
    ///     }
    /// }"#;
    /// let catalog = CampusCatalog::from_json_str(json).unwrap();
    /// assert_eq!(catalog.len(), 2);
    /// assert!(catalog.location_exists("library"));
    /// ```
    pub fn from_json_str(json: &str) -> NavResult<Self> {
        let data: CampusData = serde_json::from_str(json)?;
        let locations = data
            .locations
            .into_iter()
            .map(|(id, mut location)| {
                location.id = id.clone();
                (id, location)
            })
            .collect();
        let catalog = Self { locations };
        catalog.validate()?;
        debug!("Loaded campus catalog with {} locations", catalog.len());
        Ok(catalog)
    }

    /// Reads and parses a campus data file.
    pub fn from_path(path: impl AsRef<Path>) -> NavResult<Self> {
        let path = path.as_ref();
        debug!("Reading campus data from {}", path.display());
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the catalog back into the campus data document shape.
    pub fn to_json(&self) -> NavResult<String> {
        let data = CampusData {
            locations: self.locations.clone(),
        };
        serde_json::to_string_pretty(&data).map_err(NavError::from)
    }

    fn validate(&self) -> NavResult<()> {
        let mut seen: BTreeSet<&str> = BTreeSet::new();
        for (id, location) in &self.locations {
            if location.name.trim().is_empty() {
                return Err(NavError::InvalidName(location.name.clone()));
            }
            if !location.coordinates.is_finite() {
                return Err(NavError::InvalidCoordinate {
                    name: location.name.clone(),
                });
            }
            if seen.insert(location.name.as_str()) {
                continue;
            }
            return Err(NavError::DuplicateLocation {
                id: id.clone(),
                name: location.name.clone(),
            });
        }
        Ok(())
    }

    /// Number of locations in the catalog.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Returns true if the catalog holds no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Gets a location by its catalog id.
    pub fn location_by_id(&self, id: &str) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Gets a location by display name, ignoring case.
    pub fn location_by_name(&self, name: &str) -> Option<&Location> {
        self.locations
            .values()
            .find(|location| location.name == name)
            .or_else(|| {
                self.locations
                    .values()
                    .find(|location| location.matches_name(name))
            })
    }

    /// Checks whether a location with this display name exists, ignoring case.
    pub fn location_exists(&self, name: &str) -> bool {
        self.location_by_name(name).is_some()
    }

    /// All display names, ordered by catalog id.
    pub fn all_location_names(&self) -> Vec<&str> {
        self.locations
            .values()
            .map(|location| location.name.as_str())
            .collect()
    }

    /// All locations in a category, ignoring case.
    pub fn locations_by_category(&self, category: &str) -> Vec<&Location> {
        self.locations
            .values()
            .filter(|location| location.in_category(category))
            .collect()
    }

    /// Iterates over every location, ordered by catalog id.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Snapshot mapping display name to coordinate, the input of graph construction.
    pub fn coordinates_map(&self) -> BTreeMap<String, Coordinate> {
        self.locations
            .values()
            .map(|location| (location.name.clone(), location.coordinates))
            .collect()
    }
}
