use std::fmt::Write;

use serde::Serialize;

use crate::config::WalkingProfile;
use crate::dataset::{Campus, LocationId};
use crate::error::{Error, Result};
use crate::routing::RoutePlan;
use crate::RouteAlgorithm;

/// Separator placed between location names in a path label.
pub const PATH_SEPARATOR: &str = " → ";

/// Base of the OpenStreetMap foot-routing directions URL.
pub const OSM_DIRECTIONS_BASE: &str =
    "https://www.openstreetmap.org/directions?engine=fossgis_osrm_foot&route=";

/// Zoom level embedded in the map view fragment.
pub const OSM_ZOOM: u8 = 19;

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    Compact,
}

/// Endpoint within a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteEndpoint {
    pub id: LocationId,
    pub name: String,
}

/// Location visited while walking a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStep {
    pub index: usize,
    pub id: LocationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
}

/// Walking metrics and resolved names for a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub algorithm: RouteAlgorithm,
    /// Total distance in whole meters.
    pub distance: u64,
    /// Walking time in minutes, rounded to two decimals.
    pub time_minutes: f64,
    /// Number of steps needed to walk the route.
    pub steps: u64,
    pub hops: usize,
    pub start: RouteEndpoint,
    pub goal: RouteEndpoint,
    pub path: Vec<RouteStep>,
    pub map_url: String,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved names and walking metrics.
    pub fn from_plan(campus: &Campus, plan: &RoutePlan, walking: &WalkingProfile) -> Result<Self> {
        let path = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, &id)| {
                let location = campus.location(id).ok_or(Error::LocationOutOfRange {
                    index: id,
                    len: campus.len(),
                })?;
                Ok(RouteStep {
                    index,
                    id,
                    name: location.name.clone(),
                    latitude: location.latitude,
                    longitude: location.longitude,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let (Some(first), Some(last)) = (path.first(), path.last()) else {
            return Err(Error::EmptyRoutePlan);
        };
        let start = RouteEndpoint {
            id: first.id,
            name: first.name.clone(),
        };
        let goal = RouteEndpoint {
            id: last.id,
            name: last.name.clone(),
        };

        let distance = plan.distance.max(0.0).trunc() as u64;
        let meters = distance as f64;
        let time_minutes = round_to_hundredths(walking.walking_time_minutes(meters));
        let steps = walking.step_count(meters);
        let map_url = openstreetmap_url(&path, distance, time_minutes);

        Ok(Self {
            algorithm: plan.algorithm,
            distance,
            time_minutes,
            steps,
            hops: plan.hop_count(),
            start,
            goal,
            path,
            map_url,
        })
    }

    /// Location names joined with [`PATH_SEPARATOR`].
    pub fn path_label(&self) -> String {
        self.path
            .iter()
            .map(|step| step.name.as_str())
            .collect::<Vec<_>>()
            .join(PATH_SEPARATOR)
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Compact => self.render_compact(),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(buffer, "Algorithm: {}", self.algorithm.label());
        let _ = writeln!(buffer, "From: {}", self.start.name);
        let _ = writeln!(buffer, "To: {}", self.goal.name);
        let _ = writeln!(buffer, "Shortest Distance: {} meters", self.distance);
        let _ = writeln!(buffer, "Walking Time: {:.2} minutes", self.time_minutes);
        let _ = writeln!(buffer, "Total Steps: {}", self.steps);
        let _ = writeln!(buffer, "Path: {}", self.path_label());
        let _ = writeln!(buffer, "Map: {}", self.map_url);
        buffer
    }

    fn render_compact(&self) -> String {
        format!(
            "{}: {} m, {:.2} min, {} steps ({} hops)\n",
            self.algorithm.label(),
            self.distance,
            self.time_minutes,
            self.steps,
            self.hops
        )
    }
}

/// Build an OpenStreetMap foot-routing URL through every step, centred on
/// the first step at zoom [`OSM_ZOOM`].
pub fn openstreetmap_url(path: &[RouteStep], distance: u64, time_minutes: f64) -> String {
    let mut url = String::from(OSM_DIRECTIONS_BASE);
    let route = path
        .iter()
        .map(|step| format!("{:.6},{:.6}", step.latitude, step.longitude))
        .collect::<Vec<_>>()
        .join(";");
    url.push_str(&route);

    if let Some(origin) = path.first() {
        let _ = write!(
            url,
            "#map={}/{:.6}/{:.6}&distance={}&time={:.2}",
            OSM_ZOOM, origin.latitude, origin.longitude, distance, time_minutes
        );
    }
    url
}

fn round_to_hundredths(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
