//! Aircraft performance profile.
//!
//! An [`AircraftProfile`] is an immutable value describing one aircraft model.
//! Graph construction takes a profile by reference, so the "select an aircraft
//! before building" ordering is enforced by the type system rather than by a
//! runtime check on shared state.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::constants::{FUEL_RESERVE_FACTOR, KNOTS_TO_MPH, TAKEOFF_PENALTY_KG};

/// Fuel and speed characteristics of an aircraft model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AircraftProfile {
    pub model: String,
    /// Fuel burned per hour of cruise (kg/h).
    pub fuel_burn_rate: f64,
    /// Cruise speed in knots.
    pub cruise_speed: f64,
    /// Rated maximum fuel per flight (kg).
    pub max_fuel_capacity: f64,
}

impl AircraftProfile {
    /// Create a validated profile.
    pub fn new(
        model: impl Into<String>,
        fuel_burn_rate: f64,
        cruise_speed: f64,
        max_fuel_capacity: f64,
    ) -> Result<Self> {
        let profile = Self {
            model: model.into().trim().to_ascii_uppercase(),
            fuel_burn_rate,
            cruise_speed,
            max_fuel_capacity,
        };
        profile.validate()?;
        Ok(profile)
    }

    /// Validate profile attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.model.trim().is_empty() {
            return Err(Error::AircraftDataValidation {
                message: "aircraft model must not be empty".to_string(),
            });
        }

        let fields = [
            (self.fuel_burn_rate, "fuel_burn_rate"),
            (self.cruise_speed, "cruise_speed"),
            (self.max_fuel_capacity, "max_fuel_capacity"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::AircraftDataValidation {
                    message: format!(
                        "{field} must be a finite positive number for aircraft '{}'",
                        self.model
                    ),
                });
            }
        }

        Ok(())
    }

    /// Cruise speed converted to statute miles per hour.
    pub fn cruise_speed_mph(&self) -> f64 {
        self.cruise_speed * KNOTS_TO_MPH
    }

    /// Fuel consumed per statute mile of cruise (kg/mile).
    pub fn fuel_per_mile(&self) -> f64 {
        self.fuel_burn_rate / self.cruise_speed_mph()
    }

    /// Largest fuel load a single leg may require, after holding back the reserve.
    pub fn feasibility_ceiling(&self) -> f64 {
        FUEL_RESERVE_FACTOR * self.max_fuel_capacity
    }

    /// Estimated fuel (kg) for a nonstop leg of `distance` miles, including the
    /// fixed takeoff penalty.
    pub fn leg_fuel_cost(&self, distance: f64) -> f64 {
        self.fuel_per_mile() * distance + TAKEOFF_PENALTY_KG
    }

    /// Estimated flight time (hours) for a leg of `distance` miles at cruise speed.
    pub fn leg_flight_time(&self, distance: f64) -> f64 {
        distance / self.cruise_speed_mph()
    }

    /// Whether a nonstop leg of `distance` miles fits under the feasibility ceiling.
    pub fn can_fly(&self, distance: f64) -> bool {
        self.leg_fuel_cost(distance) <= self.feasibility_ceiling()
    }

    /// Longest admissible nonstop leg in statute miles.
    ///
    /// Zero when the takeoff penalty alone exceeds the ceiling.
    pub fn max_range_miles(&self) -> f64 {
        ((self.feasibility_ceiling() - TAKEOFF_PENALTY_KG) / self.fuel_per_mile()).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a320() -> AircraftProfile {
        AircraftProfile::new("A320", 2406.0, 447.0, 24456.33).expect("valid profile")
    }

    #[test]
    fn per_mile_consumption_uses_knot_conversion() {
        let profile = a320();
        let expected = 2406.0 / (447.0 * 1.15078);
        assert_eq!(profile.fuel_per_mile(), expected);
        assert!((profile.fuel_per_mile() - 4.6773).abs() < 1e-4);
    }

    #[test]
    fn jfk_lax_leg_is_admissible() {
        let profile = a320();
        let fuel = profile.leg_fuel_cost(2475.0);
        assert!((fuel - 11876.33).abs() < 0.01);
        assert!((profile.feasibility_ceiling() - 23233.5135).abs() < 1e-6);
        assert!(profile.can_fly(2475.0));
        assert!((profile.leg_flight_time(2475.0) - 4.8114).abs() < 1e-4);
    }

    #[test]
    fn six_thousand_mile_leg_exceeds_ceiling() {
        let profile = a320();
        assert!(profile.leg_fuel_cost(6000.0) > profile.feasibility_ceiling());
        assert!(!profile.can_fly(6000.0));
    }

    #[test]
    fn max_range_sits_on_the_ceiling() {
        let profile = a320();
        let range = profile.max_range_miles();
        assert!((profile.leg_fuel_cost(range) - profile.feasibility_ceiling()).abs() < 1e-6);
        assert!(profile.can_fly(range - 1.0));
        assert!(!profile.can_fly(range + 1.0));
    }

    #[test]
    fn max_range_is_zero_when_penalty_exceeds_ceiling() {
        let profile = AircraftProfile::new("TINY", 100.0, 100.0, 200.0).expect("valid");
        assert_eq!(profile.max_range_miles(), 0.0);
        assert!(!profile.can_fly(0.0));
    }

    #[test]
    fn model_name_is_normalised() {
        let profile = AircraftProfile::new("  b737 ", 2406.0, 453.0, 21011.4).expect("valid");
        assert_eq!(profile.model, "B737");
    }

    #[test]
    fn rejects_non_positive_values() {
        let err = AircraftProfile::new("A320", 2406.0, 0.0, 24456.33).expect_err("zero speed");
        match err {
            Error::AircraftDataValidation { message } => assert!(message.contains("cruise_speed")),
            other => panic!("unexpected error: {:?}", other),
        }

        assert!(AircraftProfile::new("A320", f64::NAN, 447.0, 1.0).is_err());
        assert!(AircraftProfile::new("A320", 2406.0, 447.0, -5.0).is_err());
        assert!(AircraftProfile::new("   ", 2406.0, 447.0, 1.0).is_err());
    }
}
