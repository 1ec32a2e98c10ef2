//! Common test utilities and fixture helpers.
//!
//! Shared campus fixtures for integration tests, including an isolated
//! location and a temporary JSON location table.

use std::fs;
use std::path::PathBuf;

use campusnav_lib::{
    Campus, GraphBuildOptions, Location, RoutingContext, WeightPrecision,
};
use tempfile::TempDir;

/// Reference campus routed with the default 10 km threshold.
#[allow(dead_code)]
pub fn reference_context() -> RoutingContext {
    context_with_threshold(Campus::reference(), 10_000.0)
}

/// Build a routing context with a custom threshold and whole-meter weights.
#[allow(dead_code)]
pub fn context_with_threshold(campus: Campus, threshold_meters: f64) -> RoutingContext {
    let options = GraphBuildOptions {
        threshold_meters,
        precision: WeightPrecision::WholeMeters,
        ..GraphBuildOptions::default()
    };
    RoutingContext::new(campus, &options).expect("graph builds")
}

/// Reference campus plus an observatory several kilometres away.
#[allow(dead_code)]
pub fn campus_with_outpost() -> Campus {
    let mut locations = Campus::reference().locations().to_vec();
    locations.push(Location::new("observatory", 29.36, 79.46).with_alias("obs"));
    Campus::new(locations).expect("valid campus")
}

/// Temporary directory holding a JSON location table.
#[allow(dead_code)]
pub struct LocationFile {
    _temp_dir: TempDir,
    pub path: PathBuf,
}

#[allow(dead_code)]
impl LocationFile {
    /// Write `contents` to a fresh `locations.json`.
    pub fn with_contents(contents: &str) -> Self {
        let temp_dir = TempDir::new().expect("create temp dir");
        let path = temp_dir.path().join("locations.json");
        fs::write(&path, contents).expect("write location table");
        Self {
            _temp_dir: temp_dir,
            path,
        }
    }
}
