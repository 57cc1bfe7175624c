use std::fmt::Write;

use serde::Serialize;
use serde_json::{json, Value};

use crate::aircraft::AircraftProfile;
use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::routing::{RouteLeg, RoutePlan};

/// Where an airport sits on a planned route.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum StopRole {
    Start,
    Transit,
    Destination,
}

impl StopRole {
    pub fn label(self) -> &'static str {
        match self {
            StopRole::Start => "start",
            StopRole::Transit => "transit",
            StopRole::Destination => "destination",
        }
    }
}

/// Presentation style for turning a [`RouteSummary`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteRenderMode {
    PlainText,
    Markdown,
}

/// Aircraft details echoed alongside a route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AircraftSummary {
    pub model: String,
    pub fuel_burn_rate: f64,
    pub cruise_speed: f64,
    pub max_fuel_capacity: f64,
    pub max_range_miles: f64,
}

impl From<&AircraftProfile> for AircraftSummary {
    fn from(profile: &AircraftProfile) -> Self {
        Self {
            model: profile.model.clone(),
            fuel_burn_rate: profile.fuel_burn_rate,
            cruise_speed: profile.cruise_speed,
            max_fuel_capacity: profile.max_fuel_capacity,
            max_range_miles: profile.max_range_miles(),
        }
    }
}

/// Airport visited along a planned route.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteStop {
    pub index: usize,
    pub code: String,
    pub role: StopRole,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
}

/// Structured representation of a planned route that higher-level consumers can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub aircraft: AircraftSummary,
    pub start: String,
    pub goal: String,
    pub hops: usize,
    pub stops: Vec<RouteStop>,
    pub legs: Vec<RouteLeg>,
    pub total_fuel: f64,
    pub total_time: f64,
    pub total_distance: f64,
}

impl RouteSummary {
    /// Convert a [`RoutePlan`] into a summary with resolved airport positions.
    pub fn from_plan(graph: &Graph, plan: &RoutePlan, aircraft: &AircraftProfile) -> Result<Self> {
        let last = plan.steps.len().checked_sub(1).ok_or(Error::EmptyRoutePlan)?;

        let stops = plan
            .steps
            .iter()
            .enumerate()
            .map(|(index, code)| {
                let role = if index == 0 {
                    StopRole::Start
                } else if index == last {
                    StopRole::Destination
                } else {
                    StopRole::Transit
                };
                let position = graph.position(code);
                RouteStop {
                    index,
                    code: code.clone(),
                    role,
                    latitude: position.map(|p| p.latitude),
                    longitude: position.map(|p| p.longitude),
                }
            })
            .collect();

        Ok(Self {
            aircraft: AircraftSummary::from(aircraft),
            start: plan.start.clone(),
            goal: plan.goal.clone(),
            hops: plan.hop_count(),
            stops,
            legs: plan.legs.clone(),
            total_fuel: plan.total_fuel,
            total_time: plan.total_time,
            total_distance: plan.total_distance,
        })
    }

    /// Airport codes joined by arrows, e.g. `JFK -> ORD -> LAX`.
    pub fn path_label(&self) -> String {
        self.stops
            .iter()
            .map(|stop| stop.code.as_str())
            .collect::<Vec<_>>()
            .join(" -> ")
    }

    /// Render the summary using the requested textual mode.
    pub fn render(&self, mode: RouteRenderMode) -> String {
        match mode {
            RouteRenderMode::PlainText => self.render_plain(),
            RouteRenderMode::Markdown => self.render_markdown(),
        }
    }

    fn hop_noun(&self) -> &'static str {
        if self.hops == 1 {
            "hop"
        } else {
            "hops"
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} {}, aircraft: {})",
            self.start,
            self.goal,
            self.hops,
            self.hop_noun(),
            self.aircraft.model
        );
        let _ = writeln!(buffer, "{}", self.path_label());
        for (index, leg) in self.legs.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "{:>3}: {} -> {}  {:.1} mi  {:.2} kg  {:.2} h",
                index + 1,
                leg.from,
                leg.to,
                leg.distance,
                leg.fuel_cost,
                leg.flight_time
            );
        }
        let _ = writeln!(buffer, "Total fuel: {:.2} kg", self.total_fuel);
        let _ = writeln!(buffer, "Total time: {:.2} hours", self.total_time);
        buffer
    }

    fn render_markdown(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "**Route** _{} -> {}_ ({} {}, aircraft: `{}`)",
            self.start,
            self.goal,
            self.hops,
            self.hop_noun(),
            self.aircraft.model
        );
        let _ = writeln!(buffer);
        let _ = writeln!(buffer, "| # | From | To | Miles | Fuel (kg) | Time (h) |");
        let _ = writeln!(buffer, "|--:|------|----|------:|----------:|---------:|");
        for (index, leg) in self.legs.iter().enumerate() {
            let _ = writeln!(
                buffer,
                "| {} | {} | {} | {:.1} | {:.2} | {:.2} |",
                index + 1,
                leg.from,
                leg.to,
                leg.distance,
                leg.fuel_cost,
                leg.flight_time
            );
        }
        let _ = writeln!(buffer);
        let _ = writeln!(
            buffer,
            "Total fuel **{:.2} kg**, total time **{:.2} h**",
            self.total_fuel, self.total_time
        );
        buffer
    }

    /// GeoJSON `FeatureCollection` with one point per stop and the route line.
    ///
    /// Stops without a known position are left out of the geometry. The line
    /// feature is only emitted when at least two positioned stops remain.
    pub fn to_geojson(&self) -> Value {
        let mut features: Vec<Value> = self
            .stops
            .iter()
            .filter_map(|stop| {
                let (lat, lon) = (stop.latitude?, stop.longitude?);
                Some(json!({
                    "type": "Feature",
                    "geometry": { "type": "Point", "coordinates": [lon, lat] },
                    "properties": {
                        "code": stop.code,
                        "index": stop.index,
                        "role": stop.role.label(),
                    },
                }))
            })
            .collect();

        let line: Vec<[f64; 2]> = self
            .stops
            .iter()
            .filter_map(|stop| Some([stop.longitude?, stop.latitude?]))
            .collect();
        if line.len() >= 2 {
            features.push(json!({
                "type": "Feature",
                "geometry": { "type": "LineString", "coordinates": line },
                "properties": {
                    "aircraft": self.aircraft.model,
                    "total_fuel": self.total_fuel,
                    "total_time": self.total_time,
                    "total_distance": self.total_distance,
                },
            }));
        }

        json!({
            "type": "FeatureCollection",
            "features": features,
        })
    }
}
