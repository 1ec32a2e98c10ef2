//! Compare command handler: runs every algorithm on the same query.

use std::io::{self, Write};

use anyhow::{Context, Result};

use campusnav_lib::{compare_algorithms, RouteSummary};

use super::{friendly_error, SessionOptions};
use crate::output::{write_comparison, ComparisonRow, OutputFormat};
use crate::terminal::ColorPalette;

/// Handle the compare subcommand.
///
/// Fails only when a location name cannot be resolved; an unreachable
/// destination is reported per algorithm.
pub fn handle_compare_command(
    session: &SessionOptions,
    from: &str,
    to: &str,
    format: OutputFormat,
) -> Result<()> {
    let rows = compute_comparison(session, from, to)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_comparison(&mut out, from, to, &rows, format, ColorPalette::detect())
        .context("failed to write comparison")?;
    out.flush().context("failed to flush stdout")
}

/// Run all algorithms and summarise each outcome.
pub fn compute_comparison(
    session: &SessionOptions,
    from: &str,
    to: &str,
) -> Result<Vec<ComparisonRow>> {
    let context = session.routing_context()?;
    let outcomes = compare_algorithms(&context, from, to)
        .map_err(|err| friendly_error(err, session.config.threshold_meters))?;

    outcomes
        .into_iter()
        .map(|outcome| -> Result<ComparisonRow> {
            let summary = outcome
                .plan
                .as_ref()
                .map(|plan| RouteSummary::from_plan(context.campus(), plan, &session.config.walking))
                .transpose()
                .context("failed to summarise route")?;
            Ok(ComparisonRow {
                algorithm: outcome.algorithm,
                summary,
            })
        })
        .collect()
}
