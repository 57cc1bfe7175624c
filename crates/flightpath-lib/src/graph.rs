//! Route graph construction.
//!
//! A [`Graph`] is an undirected network of airports in which an edge exists
//! only when the selected aircraft can fly the leg nonstop while keeping its
//! fuel reserve. Edges carry the estimated fuel cost and flight time of the leg.
//! Graphs are immutable once built; cloning shares the underlying maps.

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, trace};

use crate::aircraft::AircraftProfile;
use crate::airports::{AirportCoordinates, AirportPosition};
use crate::flights::FlightLeg;

/// Weights carried by a route edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeWeights {
    /// Leg length in statute miles.
    pub distance: f64,
    /// Estimated fuel for the leg (kg), including the takeoff penalty.
    pub fuel_cost: f64,
    /// Estimated flight time in hours.
    pub flight_time: f64,
}

impl EdgeWeights {
    /// Whether every weight is finite and non-negative.
    pub fn is_valid(&self) -> bool {
        [self.distance, self.fuel_cost, self.flight_time]
            .iter()
            .all(|w| w.is_finite() && *w >= 0.0)
    }
}

/// Edge within the route graph, seen from one of its endpoints.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    pub target: String,
    pub weights: EdgeWeights,
}

impl Edge {
    pub fn fuel_cost(&self) -> f64 {
        self.weights.fuel_cost
    }

    pub fn flight_time(&self) -> f64 {
        self.weights.flight_time
    }
}

/// Counters describing how the flight-leg table was filtered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GraphBuildStats {
    pub legs_read: usize,
    pub admitted: usize,
    /// Legs dropped because an endpoint has no known coordinates.
    pub unknown_airport: usize,
    /// Legs dropped because they exceed the aircraft's reserve-adjusted range.
    pub out_of_range: usize,
    /// Legs whose origin equals their destination.
    pub self_loops: usize,
    /// Legs with a negative or non-finite distance or weight.
    pub invalid_distance: usize,
    /// Admitted legs that replaced an earlier edge for the same airport pair.
    pub overwritten: usize,
}

/// Graph structure used by the route optimiser.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Arc<BTreeMap<String, Option<AirportPosition>>>,
    adjacency: Arc<BTreeMap<String, Vec<Edge>>>,
    edge_count: usize,
    stats: GraphBuildStats,
}

impl Graph {
    /// Build a graph from explicit edge weights.
    ///
    /// Nodes carry no position. Repeated airport pairs keep the last weights
    /// supplied. Self-loops and weights that are negative or not finite are
    /// ignored, matching [`build_graph`].
    pub fn from_parts<I, S>(edges: I) -> Self
    where
        I: IntoIterator<Item = (S, S, EdgeWeights)>,
        S: AsRef<str>,
    {
        let mut acc = GraphAccumulator::default();
        let mut stats = GraphBuildStats::default();
        for (a, b, weights) in edges {
            stats.legs_read += 1;
            let a = a.as_ref().trim().to_ascii_uppercase();
            let b = b.as_ref().trim().to_ascii_uppercase();
            if a == b {
                stats.self_loops += 1;
                continue;
            }
            if !weights.is_valid() {
                stats.invalid_distance += 1;
                continue;
            }
            stats.admitted += 1;
            if acc.insert(a, None, b, None, weights) {
                stats.overwritten += 1;
            }
        }
        acc.finish(stats)
    }

    /// Whether `code` is a node of this graph.
    pub fn contains_airport(&self, code: &str) -> bool {
        self.nodes.contains_key(code)
    }

    /// Position recorded for `code`, when known.
    pub fn position(&self, code: &str) -> Option<AirportPosition> {
        self.nodes.get(code).copied().flatten()
    }

    /// Neighbours of `code`, ordered by airport code.
    pub fn neighbours(&self, code: &str) -> &[Edge] {
        self.adjacency
            .get(code)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// The edge joining `from` and `to`, if any.
    pub fn edge(&self, from: &str, to: &str) -> Option<&Edge> {
        let edges = self.neighbours(from);
        edges
            .binary_search_by(|edge| edge.target.as_str().cmp(to))
            .ok()
            .map(|idx| &edges[idx])
    }

    /// All airport codes in the graph, sorted.
    pub fn airport_codes(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Filtering counters recorded while the graph was built.
    pub fn stats(&self) -> GraphBuildStats {
        self.stats
    }
}

/// Build the route graph for `profile` from a flight-leg table.
///
/// A leg becomes an edge only when both endpoints have coordinates, its
/// distance is finite and non-negative, and its estimated fuel cost does not
/// exceed the aircraft's feasibility ceiling.
/// Other legs are dropped silently. When several legs join the same pair of
/// airports, in either direction, the last admitted one defines the edge.
pub fn build_graph(
    legs: &[FlightLeg],
    coords: &AirportCoordinates,
    profile: &AircraftProfile,
) -> Graph {
    let ceiling = profile.feasibility_ceiling();
    let mut acc = GraphAccumulator::default();
    let mut stats = GraphBuildStats {
        legs_read: legs.len(),
        ..GraphBuildStats::default()
    };

    for leg in legs {
        let origin = leg.origin.trim().to_ascii_uppercase();
        let destination = leg.destination.trim().to_ascii_uppercase();

        let (Some(origin_pos), Some(dest_pos)) = (coords.get(&origin), coords.get(&destination))
        else {
            trace!(%origin, %destination, "dropping leg with unknown airport coordinates");
            stats.unknown_airport += 1;
            continue;
        };

        if origin == destination {
            stats.self_loops += 1;
            continue;
        }

        if !leg.distance.is_finite() || leg.distance < 0.0 {
            debug!(
                %origin,
                %destination,
                distance = leg.distance,
                "dropping leg with invalid distance"
            );
            stats.invalid_distance += 1;
            continue;
        }

        let fuel_cost = profile.leg_fuel_cost(leg.distance);
        if fuel_cost > ceiling {
            trace!(
                %origin,
                %destination,
                fuel_cost,
                ceiling,
                "dropping leg beyond aircraft range"
            );
            stats.out_of_range += 1;
            continue;
        }

        let weights = EdgeWeights {
            distance: leg.distance,
            fuel_cost,
            flight_time: profile.leg_flight_time(leg.distance),
        };

        stats.admitted += 1;
        if acc.insert(origin, Some(origin_pos), destination, Some(dest_pos), weights) {
            stats.overwritten += 1;
        }
    }

    if stats.overwritten > 0 {
        debug!(
            overwritten = stats.overwritten,
            "duplicate airport pairs replaced earlier edges"
        );
    }

    let graph = acc.finish(stats);
    info!(
        aircraft = %profile.model,
        airports = graph.node_count(),
        edges = graph.edge_count(),
        unknown_airport = stats.unknown_airport,
        out_of_range = stats.out_of_range,
        "built route graph"
    );
    graph
}

#[derive(Default)]
struct GraphAccumulator {
    nodes: BTreeMap<String, Option<AirportPosition>>,
    edges: BTreeMap<(String, String), EdgeWeights>,
}

impl GraphAccumulator {
    /// Insert or replace the undirected edge `a`-`b`. Returns `true` when an
    /// existing edge was replaced.
    fn insert(
        &mut self,
        a: String,
        a_pos: Option<AirportPosition>,
        b: String,
        b_pos: Option<AirportPosition>,
        weights: EdgeWeights,
    ) -> bool {
        let key = if a <= b {
            (a.clone(), b.clone())
        } else {
            (b.clone(), a.clone())
        };
        self.nodes.entry(a).or_insert(a_pos);
        self.nodes.entry(b).or_insert(b_pos);
        self.edges.insert(key, weights).is_some()
    }

    fn finish(self, stats: GraphBuildStats) -> Graph {
        let mut adjacency: BTreeMap<String, Vec<Edge>> = BTreeMap::new();
        for ((a, b), weights) in &self.edges {
            adjacency.entry(a.clone()).or_default().push(Edge {
                target: b.clone(),
                weights: *weights,
            });
            adjacency.entry(b.clone()).or_default().push(Edge {
                target: a.clone(),
                weights: *weights,
            });
        }
        for edges in adjacency.values_mut() {
            edges.sort_by(|x, y| x.target.cmp(&y.target));
        }

        Graph {
            nodes: Arc::new(self.nodes),
            adjacency: Arc::new(adjacency),
            edge_count: self.edges.len(),
            stats,
        }
    }
}
