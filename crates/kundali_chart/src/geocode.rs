//! Place-name to coordinate resolution.
//!
//! Lookup is exact after trimming and ASCII case folding. Unknown names
//! resolve to New Delhi so callers always get a usable coordinate.

use serde::{Deserialize, Serialize};

use kundali_vedic_base::GeoCoordinate;

/// Name of the fallback place.
pub const DEFAULT_PLACE_NAME: &str = "New Delhi";

/// Fallback coordinate for unknown places.
pub const DEFAULT_COORDINATE: GeoCoordinate = GeoCoordinate {
    latitude: 28.6139,
    longitude: 77.2090,
};

/// Resolves free-text place queries. Never fails.
pub trait PlaceResolver {
    fn resolve_coordinates(&self, query: &str) -> GeoCoordinate;
}

/// A named coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    pub name: String,
    #[serde(flatten)]
    pub coordinate: GeoCoordinate,
}

impl Place {
    pub fn new(name: impl Into<String>, coordinate: GeoCoordinate) -> Self {
        Self {
            name: name.into(),
            coordinate,
        }
    }
}

const BUILTIN: &[(&str, f64, f64)] = &[
    ("New Delhi", 28.6139, 77.2090),
    ("Delhi", 28.7041, 77.1025),
    ("Mumbai", 19.0760, 72.8777),
    ("Kolkata", 22.5726, 88.3639),
    ("Chennai", 13.0827, 80.2707),
    ("Bengaluru", 12.9716, 77.5946),
    ("Bangalore", 12.9716, 77.5946),
    ("Hyderabad", 17.3850, 78.4867),
    ("Ahmedabad", 23.0225, 72.5714),
    ("Pune", 18.5204, 73.8567),
    ("Jaipur", 26.9124, 75.7873),
    ("Lucknow", 26.8467, 80.9462),
    ("Varanasi", 25.3176, 82.9739),
    ("Ujjain", 23.1765, 75.7885),
];

/// In-memory place table.
#[derive(Debug, Clone, PartialEq)]
pub struct Gazetteer {
    places: Vec<Place>,
}

impl Default for Gazetteer {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Gazetteer {
    /// Built-in Indian metro entries.
    pub fn builtin() -> Self {
        let places = BUILTIN
            .iter()
            .map(|&(name, latitude, longitude)| {
                Place::new(name, GeoCoordinate { latitude, longitude })
            })
            .collect();
        Self { places }
    }

    /// Add entries; a later entry with the same name shadows an earlier one.
    pub fn with_places(mut self, places: impl IntoIterator<Item = Place>) -> Self {
        self.places.extend(places);
        self
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Exact, case-insensitive, trimmed lookup.
    pub fn lookup(&self, query: &str) -> Option<&Place> {
        let wanted = query.trim();
        if wanted.is_empty() {
            return None;
        }
        self.places
            .iter()
            .rev()
            .find(|p| p.name.trim().eq_ignore_ascii_case(wanted))
    }
}

impl PlaceResolver for Gazetteer {
    fn resolve_coordinates(&self, query: &str) -> GeoCoordinate {
        match self.lookup(query) {
            Some(place) => place.coordinate,
            None => {
                log::warn!(
                    "unknown place {query:?}, falling back to {DEFAULT_PLACE_NAME} ({DEFAULT_COORDINATE})"
                );
                DEFAULT_COORDINATE
            }
        }
    }
}
