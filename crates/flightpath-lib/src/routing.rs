//! Fuel-optimal route planning.
//!
//! [`optimize_route`] finds the path between two airports that minimises total
//! fuel and reports the flight time along that same path. Time is a derived
//! figure of the chosen path, not a second objective: a faster path that
//! burns more fuel is never preferred.
//!
//! # Example
//!
//! ```
//! use flightpath_lib::{optimize_route, EdgeWeights, Graph};
//!
//! let w = |fuel_cost: f64| EdgeWeights { distance: fuel_cost, fuel_cost, flight_time: 1.0 };
//! let graph = Graph::from_parts([("A", "B", w(10.0)), ("B", "C", w(10.0)), ("A", "C", w(25.0))]);
//!
//! let plan = optimize_route(&graph, "A", "C").unwrap();
//! assert_eq!(plan.steps, vec!["A", "B", "C"]);
//! assert_eq!(plan.total_fuel, 20.0);
//! assert_eq!(plan.total_time, 2.0);
//! ```

use serde::Serialize;

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::path::find_route_dijkstra;

/// One edge of a planned route with running totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteLeg {
    pub from: String,
    pub to: String,
    pub distance: f64,
    pub fuel_cost: f64,
    pub flight_time: f64,
    /// Fuel consumed up to and including this leg.
    pub cumulative_fuel: f64,
    /// Flight time up to and including this leg.
    pub cumulative_time: f64,
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoutePlan {
    pub start: String,
    pub goal: String,
    /// Airports visited in order, `start` first and `goal` last.
    pub steps: Vec<String>,
    pub legs: Vec<RouteLeg>,
    /// Sum of leg fuel costs (kg).
    pub total_fuel: f64,
    /// Sum of leg flight times (hours).
    pub total_time: f64,
    /// Sum of leg distances (statute miles).
    pub total_distance: f64,
}

impl RoutePlan {
    /// Number of legs flown.
    pub fn hop_count(&self) -> usize {
        self.steps.len().saturating_sub(1)
    }
}

/// Compute the minimum-fuel route between `start` and `goal`.
///
/// Codes are matched case-insensitively. When `start` and `goal` name the same
/// airport the plan holds that single airport and zero totals.
///
/// # Errors
///
/// [`Error::RouteNotFound`] when either airport is absent from the graph or no
/// sequence of admissible legs connects them.
pub fn optimize_route(graph: &Graph, start: &str, goal: &str) -> Result<RoutePlan> {
    let start = start.trim().to_ascii_uppercase();
    let goal = goal.trim().to_ascii_uppercase();

    let not_found = || Error::RouteNotFound {
        start: start.clone(),
        goal: goal.clone(),
    };

    let steps = find_route_dijkstra(graph, &start, &goal).ok_or_else(not_found)?;

    let mut legs = Vec::with_capacity(steps.len().saturating_sub(1));
    let mut total_fuel = 0.0;
    let mut total_time = 0.0;
    let mut total_distance = 0.0;

    for pair in steps.windows(2) {
        let edge = graph.edge(&pair[0], &pair[1]).ok_or_else(not_found)?;
        total_fuel += edge.weights.fuel_cost;
        total_time += edge.weights.flight_time;
        total_distance += edge.weights.distance;
        legs.push(RouteLeg {
            from: pair[0].clone(),
            to: pair[1].clone(),
            distance: edge.weights.distance,
            fuel_cost: edge.weights.fuel_cost,
            flight_time: edge.weights.flight_time,
            cumulative_fuel: total_fuel,
            cumulative_time: total_time,
        });
    }

    Ok(RoutePlan {
        start,
        goal,
        steps,
        legs,
        total_fuel,
        total_time,
        total_distance,
    })
}
