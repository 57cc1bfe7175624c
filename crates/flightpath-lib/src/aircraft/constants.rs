//! Constants shared by the fuel and flight-time estimates.

/// Statute miles per hour in one knot. Cruise speeds are catalogued in knots
/// while leg distances are expressed in statute miles.
pub const KNOTS_TO_MPH: f64 = 1.15078;

/// Fixed fuel overhead (kg) charged to every leg regardless of its length.
pub const TAKEOFF_PENALTY_KG: f64 = 300.0;

/// Share of the rated fuel capacity usable for a single leg. The remaining 5%
/// is held back as reserve and is not configurable per call.
pub const FUEL_RESERVE_FACTOR: f64 = 0.95;
