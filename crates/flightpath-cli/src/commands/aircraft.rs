//! Aircraft command handler for listing the catalog.

use anyhow::Result;

use super::DataOptions;
use flightpath_cli::output::OutputFormat;

/// Handle the aircraft subcommand.
pub fn handle_list_aircraft(options: &DataOptions, format: OutputFormat) -> Result<()> {
    let catalog = options.load_catalog()?;
    format.render_aircraft(&catalog.aircraft_sorted())?;
    Ok(())
}
