//! Route command handler for computing minimum-fuel routes between airports.

use anyhow::{Context, Result};

use flightpath_lib::{
    build_graph, optimize_route, require_airport, AircraftProfile, Error as RouteError, Graph,
    RouteSummary,
};

use super::DataOptions;
use flightpath_cli::output::OutputFormat;

/// Arguments for the route command.
#[derive(Debug, Clone)]
pub struct RouteCommandArgs {
    /// Departure airport code.
    pub from: String,
    /// Destination airport code.
    pub to: String,
    /// Aircraft model from the catalog.
    pub aircraft: String,
}

/// Handle the route subcommand.
///
/// Loads the flight network, builds the route graph for the chosen aircraft
/// and prints the minimum-fuel route.
pub fn handle_route_command(
    options: &DataOptions,
    args: &RouteCommandArgs,
    format: OutputFormat,
) -> Result<()> {
    let catalog = options.load_catalog()?;
    let profile = catalog.require(&args.aircraft).map_err(friendly_error)?;

    let network = options.load_network()?;
    let known = network.selectable_airports();
    let from = require_airport(&known, &args.from).map_err(friendly_error)?;
    let to = require_airport(&known, &args.to).map_err(friendly_error)?;

    let graph = build_graph(&network.legs, &network.coords, profile);
    let plan = optimize_route(&graph, &from, &to)
        .map_err(|err| handle_route_failure(&graph, profile, err))?;

    let summary = RouteSummary::from_plan(&graph, &plan, profile)
        .context("failed to build route summary for display")?;
    format.render_route(&summary)?;
    Ok(())
}

fn friendly_error(err: RouteError) -> anyhow::Error {
    match err {
        RouteError::UnknownAirport { code, suggestions } => {
            anyhow::anyhow!(format_unknown_message("airport", &code, &suggestions))
        }
        RouteError::UnknownAircraft { model, suggestions } => {
            let mut message = format_unknown_message("aircraft", &model, &suggestions);
            message.push_str(" Run `flightpath aircraft` to list available models.");
            anyhow::anyhow!(message)
        }
        other => anyhow::Error::new(other),
    }
}

fn handle_route_failure(graph: &Graph, profile: &AircraftProfile, err: RouteError) -> anyhow::Error {
    match err {
        RouteError::RouteNotFound { start, goal } => anyhow::anyhow!(
            format_route_not_found_message(graph, profile, &start, &goal)
        ),
        other => friendly_error(other),
    }
}

fn format_unknown_message(kind: &str, name: &str, suggestions: &[String]) -> String {
    let mut message = format!("Unknown {} '{}'.", kind, name);
    match suggestions {
        [] => {}
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

fn format_route_not_found_message(
    graph: &Graph,
    profile: &AircraftProfile,
    start: &str,
    goal: &str,
) -> String {
    let mut message = format!("No route found between {} and {}.", start, goal);
    let stranded: Vec<&str> = [start, goal]
        .into_iter()
        .filter(|code| !graph.contains_airport(code))
        .collect();
    if !stranded.is_empty() {
        message.push_str(&format!(
            " {} has no leg within the {}'s range of {:.0} mi.",
            stranded.join(" and "),
            profile.model,
            profile.max_range_miles()
        ));
    }
    message.push_str(" Try a longer-range aircraft or different airports.");
    message
}
