//! # Direction Steps
//!
//! Turns a [`Route`] into plain-text, turn-by-turn instructions.

use crate::Route;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One human-readable instruction of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DirectionStep {
    /// First location of the route
    Start(String),
    /// Intermediate hop ending at `to`
    Go { from: String, to: String },
    /// Final location of the route
    Arrive(String),
}

impl fmt::Display for DirectionStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DirectionStep::Start(location) => write!(f, "Start at {}", location),
            DirectionStep::Go { from, to } => write!(f, "Go from {} to {}", from, to),
            DirectionStep::Arrive(location) => write!(f, "Arrive at {}", location),
        }
    }
}

/// Turn-by-turn directions for a route.
///
/// # Examples
///
/// ```
/// use campus_nav::{Directions, Route};
///
/// let route = Route {
///     path: vec!["A".into(), "B".into(), "C".into()],
///     distance: 25.0,
/// };
/// let directions = Directions::from_route(&route);
/// assert_eq!(
///     directions.steps_as_strings(),
///     vec!["Start at A", "Go from A to B", "Arrive at C"]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directions {
    /// Steps in travel order
    pub steps: Vec<DirectionStep>,
    /// Total route distance
    pub distance: f64,
}

impl Directions {
    /// Builds the steps for a route.
    ///
    /// The first location becomes a start step and the last an arrival step.
    /// Every location in between is reached by a "go from" step. The arrival
    /// step covers the final hop, so a two-location route has no "go from"
    /// step at all.
    pub fn from_route(route: &Route) -> Self {
        let last = route.path.len().saturating_sub(1);
        let steps = route
            .path
            .iter()
            .enumerate()
            .map(|(i, location)| {
                if i == 0 {
                    DirectionStep::Start(location.clone())
                } else if i == last {
                    DirectionStep::Arrive(location.clone())
                } else {
                    DirectionStep::Go {
                        from: route.path[i - 1].clone(),
                        to: location.clone(),
                    }
                }
            })
            .collect();

        Self {
            steps,
            distance: route.distance,
        }
    }

    /// Steps rendered as plain strings.
    pub fn steps_as_strings(&self) -> Vec<String> {
        self.steps.iter().map(ToString::to_string).collect()
    }

    /// Steps rendered as a numbered list, one per line.
    pub fn numbered(&self) -> String {
        self.steps
            .iter()
            .enumerate()
            .map(|(i, step)| format!("{}. {}", i + 1, step))
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Number of steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true if there are no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl From<&Route> for Directions {
    fn from(route: &Route) -> Self {
        Self::from_route(route)
    }
}
