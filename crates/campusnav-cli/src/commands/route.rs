//! Route command handler for computing a walking route between two locations.

use std::io::{self, Write};

use anyhow::{Context, Result};

use campusnav_lib::{plan_route, RouteAlgorithm, RouteRequest, RouteSummary};

use super::{friendly_error, SessionOptions};
use crate::output::{write_route, OutputFormat};

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    pub algorithm: RouteAlgorithm,
    pub from: String,
    pub to: String,
}

impl RouteCommandArgs {
    /// Convert CLI args to a library [`RouteRequest`].
    pub fn to_request(&self) -> RouteRequest {
        RouteRequest::new(self.from.clone(), self.to.clone(), self.algorithm)
    }
}

/// Handle the route subcommand.
pub fn handle_route_command(
    session: &SessionOptions,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let summary = compute_route(session, args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_route(&mut out, &summary, format).context("failed to write route")?;
    out.flush().context("failed to flush stdout")
}

/// Plan a route and derive its walking summary.
pub fn compute_route(session: &SessionOptions, args: &RouteCommandArgs) -> Result<RouteSummary> {
    let context = session.routing_context()?;
    let request = args.to_request();
    let plan = plan_route(&context, &request)
        .map_err(|err| friendly_error(err, session.config.threshold_meters))?;
    tracing::debug!(
        algorithm = %plan.algorithm,
        hops = plan.hop_count(),
        distance = plan.distance,
        "route planned"
    );
    RouteSummary::from_plan(context.campus(), &plan, &session.config.walking)
        .context("failed to summarise route")
}
