use std::collections::HashMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::geodesic::Coordinates;

/// Position of a location within its [`Campus`].
pub type LocationId = usize;

/// Largest location table accepted by [`Campus::new`].
pub const MAX_LOCATIONS: usize = 256;

/// Environment variable naming a JSON location table to load instead of the
/// built-in reference campus.
pub const LOCATIONS_ENV_VAR: &str = "CAMPUSNAV_LOCATIONS";

/// Minimum Jaro-Winkler similarity for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// A named point of interest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,
    pub latitude: f64,
    pub longitude: f64,
}

impl Location {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            name: name.into(),
            alias: None,
            latitude,
            longitude,
        }
    }

    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Short alias, falling back to the display name.
    pub fn alias(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.name)
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.latitude, self.longitude)
    }
}

/// Reference campus table: name, latitude, longitude.
const REFERENCE_LOCATIONS: [(&str, f64, f64); 15] = [
    ("main gate", 29.375000, 79.531111),
    ("oat", 29.375278, 79.530000),
    ("basketball", 29.375000, 79.530278),
    ("cricket ground", 29.375000, 79.529444),
    ("bus", 29.374444, 79.531111),
    ("DS", 29.375278, 79.529722),
    ("academic block a", 29.375278, 79.530833),
    ("academic block c", 29.374444, 79.530556),
    ("academic block d", 29.374444, 79.530000),
    ("library", 29.375556, 79.530556),
    ("canteen", 29.375000, 79.530833),
    ("volleyball ground", 29.375000, 79.530000),
    ("hostel", 29.375833, 79.529444),
    ("saisandhya hall", 29.375556, 79.530000),
    ("academic block b", 29.374722, 79.529722),
];

/// Immutable, ordered location table with a case-insensitive name index.
///
/// Cloning is cheap; the underlying table is shared.
#[derive(Debug, Clone)]
pub struct Campus {
    locations: Arc<[Location]>,
    name_to_id: Arc<HashMap<String, LocationId>>,
}

impl Campus {
    /// Validate a location table and build its lookup index.
    pub fn new(locations: Vec<Location>) -> Result<Self> {
        if locations.is_empty() {
            return Err(Error::EmptyDataset);
        }
        if locations.len() > MAX_LOCATIONS {
            return Err(Error::TooManyLocations {
                count: locations.len(),
                max: MAX_LOCATIONS,
            });
        }

        let mut name_to_id = HashMap::new();
        for (id, location) in locations.iter().enumerate() {
            if !valid_coordinates(location) {
                return Err(Error::InvalidCoordinates {
                    name: location.name.clone(),
                    latitude: location.latitude,
                    longitude: location.longitude,
                });
            }

            for key in [location.name.as_str(), location.alias()] {
                let normalized = normalize(key);
                match name_to_id.get(&normalized) {
                    Some(&existing) if existing != id => {
                        return Err(Error::DuplicateLocationName {
                            name: key.to_string(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        name_to_id.insert(normalized, id);
                    }
                }
            }
        }

        debug!(locations = locations.len(), "built campus location index");

        Ok(Self {
            locations: locations.into(),
            name_to_id: Arc::new(name_to_id),
        })
    }

    /// The built-in fifteen-location reference campus.
    pub fn reference() -> Self {
        let locations = REFERENCE_LOCATIONS
            .iter()
            .map(|&(name, latitude, longitude)| Location::new(name, latitude, longitude))
            .collect();
        Self::new(locations).expect("reference campus table is valid")
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn iter(&self) -> impl Iterator<Item = (LocationId, &Location)> {
        self.locations.iter().enumerate()
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id)
    }

    /// Lookup a location name by identifier.
    pub fn name(&self, id: LocationId) -> Option<&str> {
        self.location(id).map(|location| location.name.as_str())
    }

    /// Lookup a location identifier by name or alias, ignoring case and
    /// surrounding whitespace.
    pub fn location_id_by_name(&self, name: &str) -> Option<LocationId> {
        self.name_to_id.get(&normalize(name)).copied()
    }

    /// Resolve a name to an identifier, suggesting close matches on failure.
    pub fn resolve(&self, name: &str) -> Result<LocationId> {
        self.location_id_by_name(name)
            .ok_or_else(|| Error::UnknownLocation {
                name: name.to_string(),
                suggestions: self.fuzzy_location_matches(name, 3),
            })
    }

    /// Names (or aliases) most similar to `query`, best first.
    pub fn fuzzy_location_matches(&self, query: &str, limit: usize) -> Vec<String> {
        let query = normalize(query);
        let mut scored: Vec<(f64, &str)> = Vec::new();
        for location in self.locations.iter() {
            let best = [location.name.as_str(), location.alias()]
                .into_iter()
                .map(|candidate| (strsim::jaro_winkler(&query, &normalize(candidate)), candidate))
                .max_by(|a, b| a.0.total_cmp(&b.0));
            if let Some((score, candidate)) = best {
                if score >= SUGGESTION_THRESHOLD {
                    scored.push((score, candidate));
                }
            }
        }

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));
        scored
            .into_iter()
            .take(limit)
            .map(|(_, name)| name.to_string())
            .collect()
    }

    /// Stable fingerprint of the table contents, used to key graph caches.
    pub fn fingerprint(&self) -> u64 {
        use std::hash::{Hash, Hasher};

        let mut hasher = std::collections::hash_map::DefaultHasher::new();
        for location in self.locations.iter() {
            location.name.hash(&mut hasher);
            location.alias().hash(&mut hasher);
            location.latitude.to_bits().hash(&mut hasher);
            location.longitude.to_bits().hash(&mut hasher);
        }
        hasher.finish()
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

fn valid_coordinates(location: &Location) -> bool {
    location.latitude.is_finite()
        && location.longitude.is_finite()
        && (-90.0..=90.0).contains(&location.latitude)
        && (-180.0..=180.0).contains(&location.longitude)
}

/// Load a location table from a JSON array on disk.
pub fn load_campus(path: &Path) -> Result<Campus> {
    let contents = fs::read_to_string(path)?;
    let locations: Vec<Location> =
        serde_json::from_str(&contents).map_err(|source| Error::LocationFile {
            path: path.to_path_buf(),
            source,
        })?;
    info!(path = %path.display(), locations = locations.len(), "loaded location table");
    Campus::new(locations)
}

/// Resolve the campus to use: an explicit path, then the
/// [`LOCATIONS_ENV_VAR`] override, then the built-in reference campus.
pub fn resolve_campus(path: Option<&Path>) -> Result<Campus> {
    if let Some(path) = path {
        return load_campus(path);
    }

    if let Some(path) = env::var_os(LOCATIONS_ENV_VAR).map(PathBuf::from) {
        debug!(path = %path.display(), "using location table from environment");
        return load_campus(&path);
    }

    Ok(Campus::reference())
}
