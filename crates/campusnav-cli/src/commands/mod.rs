// Module exports for CLI subcommands
//
// Each module handles one subcommand. main.rs parses arguments and
// dispatches to these handlers.

pub mod compare;
pub mod locations;
pub mod route;

use std::path::PathBuf;

use anyhow::{Context, Result};

use campusnav_lib::{
    resolve_campus, Error as NavError, GraphBuildOptions, NavConfig, RoutingContext,
};

/// Settings shared by every subcommand.
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// Explicit location table; falls back to `CAMPUSNAV_LOCATIONS`, then the built-in campus.
    pub locations: Option<PathBuf>,
    pub config: NavConfig,
}

impl SessionOptions {
    /// Validate the configuration and build the routing context.
    pub fn routing_context(&self) -> Result<RoutingContext> {
        self.config.validate()?;
        let campus = resolve_campus(self.locations.as_deref())
            .context("failed to load the campus location table")?;
        let options = GraphBuildOptions::from(&self.config);
        RoutingContext::new(campus, &options).context("failed to build the campus graph")
    }
}

/// Turn library errors into user-facing messages.
pub(crate) fn friendly_error(err: NavError, threshold_meters: f64) -> anyhow::Error {
    match err {
        NavError::UnknownLocation { name, suggestions } => {
            anyhow::anyhow!(format_unknown_location_message(&name, &suggestions))
        }
        NavError::RouteNotFound { start, goal } => anyhow::anyhow!(
            "No route found between {start} and {goal}. Try raising --threshold (currently {threshold_meters} m)."
        ),
        other => anyhow::Error::new(other),
    }
}

fn format_unknown_location_message(name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown location '{}'.", name);
    match suggestions {
        [] => message.push_str(" Run `campusnav locations` to list valid names."),
        [only] => message.push_str(&format!(" Did you mean '{only}'?")),
        many => {
            let joined = many
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ");
            message.push_str(&format!(" Did you mean one of: {}?", joined));
        }
    }
    message
}
