//! Airports command handler for listing selectable airports.

use anyhow::Result;

use flightpath_lib::build_graph;

use super::DataOptions;
use flightpath_cli::output::OutputFormat;

/// Handle the airports subcommand.
///
/// Without an aircraft every airport with coordinates that appears in the
/// leg table is listed. With one, only airports that keep at least one leg
/// within that aircraft's range are listed.
pub fn handle_list_airports(
    options: &DataOptions,
    aircraft: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let network = options.load_network()?;

    let Some(model) = aircraft else {
        format.render_airports(&network.selectable_airports(), None)?;
        return Ok(());
    };

    let catalog = options.load_catalog()?;
    let profile = catalog.require(model)?;
    let graph = build_graph(&network.legs, &network.coords, profile);
    let airports: Vec<String> = graph.airport_codes().map(str::to_string).collect();
    format.render_airports(&airports, Some(&profile.model))?;
    Ok(())
}
