//! Locations command handler for listing the loaded location table.

use std::io::{self, Write};

use anyhow::{Context, Result};

use campusnav_lib::resolve_campus;

use super::SessionOptions;
use crate::output::{write_locations, OutputFormat};
use crate::terminal::ColorPalette;

/// Handle the locations subcommand.
pub fn handle_locations_command(session: &SessionOptions, format: OutputFormat) -> Result<()> {
    let campus = resolve_campus(session.locations.as_deref())
        .context("failed to load the campus location table")?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_locations(&mut out, &campus, format, ColorPalette::detect())
        .context("failed to write location table")?;
    out.flush().context("failed to flush stdout")
}
