//! Output formatting for route rendering.
//!
//! Text output is meant for people; JSON output is a single line per
//! invocation so that scripts can parse stdout directly.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Serialize;

use campusnav_lib::{Campus, RouteAlgorithm, RouteRenderMode, RouteSummary};

use crate::terminal::{format_with_separators, ColorPalette};

/// Output format selected with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary.
    #[default]
    Text,
    /// Machine-readable JSON payload.
    Json,
}

/// JSON payload emitted for a successful route.
#[derive(Debug, Serialize)]
pub struct RoutePayload<'a> {
    pub success: bool,
    pub algorithm: &'static str,
    pub distance: u64,
    pub time: f64,
    pub steps: u64,
    pub path: String,
    pub map_url: &'a str,
}

impl<'a> From<&'a RouteSummary> for RoutePayload<'a> {
    fn from(summary: &'a RouteSummary) -> Self {
        Self {
            success: true,
            algorithm: summary.algorithm.label(),
            distance: summary.distance,
            time: summary.time_minutes,
            steps: summary.steps,
            path: summary.path_label(),
            map_url: &summary.map_url,
        }
    }
}

/// JSON payload emitted when a command fails.
#[derive(Debug, Serialize)]
pub struct FailurePayload<'a> {
    pub success: bool,
    pub error: &'a str,
}

impl<'a> FailurePayload<'a> {
    pub fn new(error: &'a str) -> Self {
        Self {
            success: false,
            error,
        }
    }
}

/// One row of a comparison: the algorithm and its summary, if a route exists.
#[derive(Debug)]
pub struct ComparisonRow {
    pub algorithm: RouteAlgorithm,
    pub summary: Option<RouteSummary>,
}

#[derive(Serialize)]
struct ComparisonEntry<'a> {
    success: bool,
    algorithm: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    time: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    steps: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
}

const NO_PATH_MESSAGE: &str = "No valid path found";

/// Write a single route summary.
pub fn write_route<W: Write>(
    out: &mut W,
    summary: &RouteSummary,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => out.write_all(summary.render(RouteRenderMode::PlainText).as_bytes()),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *out, &RoutePayload::from(summary))?;
            writeln!(out)
        }
    }
}

/// Write the side-by-side comparison of every algorithm.
pub fn write_comparison<W: Write>(
    out: &mut W,
    start: &str,
    goal: &str,
    rows: &[ComparisonRow],
    format: OutputFormat,
    palette: ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "{}Comparing all algorithms: {} → {}{}",
                palette.cyan, start, goal, palette.reset
            )?;
            for row in rows {
                match &row.summary {
                    Some(summary) => out.write_all(summary.render(RouteRenderMode::Compact).as_bytes())?,
                    None => writeln!(
                        out,
                        "{}{}: {}{}",
                        palette.red,
                        row.algorithm.label(),
                        NO_PATH_MESSAGE,
                        palette.reset
                    )?,
                }
            }
            if let Some(summary) = rows.iter().find_map(|row| row.summary.as_ref()) {
                writeln!(out, "Path: {}", summary.path_label())?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let entries: Vec<ComparisonEntry<'_>> = rows
                .iter()
                .map(|row| match &row.summary {
                    Some(summary) => ComparisonEntry {
                        success: true,
                        algorithm: row.algorithm.label(),
                        distance: Some(summary.distance),
                        time: Some(summary.time_minutes),
                        steps: Some(summary.steps),
                        path: Some(summary.path_label()),
                        error: None,
                    },
                    None => ComparisonEntry {
                        success: false,
                        algorithm: row.algorithm.label(),
                        distance: None,
                        time: None,
                        steps: None,
                        path: None,
                        error: Some(NO_PATH_MESSAGE),
                    },
                })
                .collect();
            serde_json::to_writer(&mut *out, &entries)?;
            writeln!(out)
        }
    }
}

#[derive(Serialize)]
struct LocationEntry<'a> {
    id: usize,
    name: &'a str,
    alias: &'a str,
    latitude: f64,
    longitude: f64,
}

/// Write the table of available locations.
pub fn write_locations<W: Write>(
    out: &mut W,
    campus: &Campus,
    format: OutputFormat,
    palette: ColorPalette,
) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(
                out,
                "{}{} campus locations{}",
                palette.bold,
                format_with_separators(campus.len() as u64),
                palette.reset
            )?;
            writeln!(
                out,
                "{}{:<3} {:<25} {:<15}{}",
                palette.cyan, "ID", "Location Name", "Short Name", palette.reset
            )?;
            writeln!(out, "{}{}{}", palette.gray, "-".repeat(45), palette.reset)?;
            for (id, location) in campus.iter() {
                writeln!(out, "{:<3} {:<25} {:<15}", id, location.name, location.alias())?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let entries: Vec<LocationEntry<'_>> = campus
                .iter()
                .map(|(id, location)| LocationEntry {
                    id,
                    name: &location.name,
                    alias: location.alias(),
                    latitude: location.latitude,
                    longitude: location.longitude,
                })
                .collect();
            serde_json::to_writer(&mut *out, &entries)?;
            writeln!(out)
        }
    }
}

/// Report a failure on the channel appropriate for the format.
///
/// Text failures go to stderr; JSON failures are printed to stdout as a
/// `{"success":false,"error":...}` payload.
pub fn report_failure(message: &str, format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            let palette = ColorPalette::detect_stderr();
            eprintln!("{}Error:{} {}", palette.red, palette.reset, message);
        }
        OutputFormat::Json => match serde_json::to_string(&FailurePayload::new(message)) {
            Ok(payload) => println!("{payload}"),
            Err(err) => eprintln!("Error: {message} ({err})"),
        },
    }
}
