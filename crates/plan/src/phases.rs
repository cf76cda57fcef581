//! Phase-duration estimation: split a route into takeoff, climb, cruise,
//! descent, and landing legs from static aircraft performance figures.
//!
//! This is a closed-form estimator, not a simulation; there is no iteration
//! or feedback. Fixed ground-roll allowances bracket the flight, climb and
//! descent durations come from cruise altitude over the respective rate, and
//! whatever distance remains is flown at cruise speed.

use std::fmt;

use route_config::Aircraft;
use route_core::constants::SECONDS_PER_HOUR;

/// Fixed takeoff allowance (s).
pub const TAKEOFF_DURATION_S: f64 = 120.0;
/// Fixed landing allowance (s).
pub const LANDING_DURATION_S: f64 = 180.0;
/// Average ground speed during climb, as a fraction of cruise speed.
pub const CLIMB_SPEED_FACTOR: f64 = 0.7;
/// Average ground speed during descent, as a fraction of cruise speed.
pub const DESCENT_SPEED_FACTOR: f64 = 0.85;

/// Per-phase durations in seconds. `total_s` always equals the sum of the
/// five legs; every leg is non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlightPhases {
    pub takeoff_s: f64,
    pub climb_s: f64,
    pub cruise_s: f64,
    pub descent_s: f64,
    pub landing_s: f64,
    pub total_s: f64,
}

/// The five flight phases, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseKind {
    Takeoff,
    Climb,
    Cruise,
    Descent,
    Landing,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PhaseKind::Takeoff => "Takeoff",
            PhaseKind::Climb => "Climb",
            PhaseKind::Cruise => "Cruise",
            PhaseKind::Descent => "Descent",
            PhaseKind::Landing => "Landing",
        };
        f.write_str(label)
    }
}

impl FlightPhases {
    /// Phase active at `elapsed_s` seconds into the flight. Times past the
    /// end report [`PhaseKind::Landing`].
    pub fn phase_at(&self, elapsed_s: f64) -> PhaseKind {
        let mut boundary = self.takeoff_s;
        if elapsed_s < boundary {
            return PhaseKind::Takeoff;
        }
        boundary += self.climb_s;
        if elapsed_s < boundary {
            return PhaseKind::Climb;
        }
        boundary += self.cruise_s;
        if elapsed_s < boundary {
            return PhaseKind::Cruise;
        }
        boundary += self.descent_s;
        if elapsed_s < boundary {
            return PhaseKind::Descent;
        }
        PhaseKind::Landing
    }

    /// Ordered (phase, duration) pairs, convenient for display loops.
    pub fn legs(&self) -> [(PhaseKind, f64); 5] {
        [
            (PhaseKind::Takeoff, self.takeoff_s),
            (PhaseKind::Climb, self.climb_s),
            (PhaseKind::Cruise, self.cruise_s),
            (PhaseKind::Descent, self.descent_s),
            (PhaseKind::Landing, self.landing_s),
        ]
    }
}

/// Errors from phase estimation. Performance figures that would divide by
/// zero or run time backwards are rejected up front instead of surfacing as
/// NaN or infinite durations.
#[derive(Debug, thiserror::Error)]
pub enum PlanError {
    #[error("route distance must be non-negative, got {0} km")]
    NegativeDistance(f64),
    #[error("aircraft '{aircraft}' has non-positive cruise speed {value_kmh} km/h")]
    NonPositiveCruiseSpeed { aircraft: String, value_kmh: f64 },
    #[error("aircraft '{aircraft}' has non-positive climb rate {value_m_s} m/s")]
    NonPositiveClimbRate { aircraft: String, value_m_s: f64 },
    #[error("aircraft '{aircraft}' has non-positive descent rate {value_m_s} m/s")]
    NonPositiveDescentRate { aircraft: String, value_m_s: f64 },
}

/// Estimate phase durations for `distance_km` flown by `aircraft`.
///
/// Climb time is cruise altitude over climb rate, descent likewise. Ground
/// distance consumed while climbing/descending is charged at 0.7×/0.85× of
/// cruise speed over those durations; the remainder, clamped to ≥ 0, is the
/// cruise leg. Short hops can therefore have a zero-length cruise.
pub fn estimate_phases(distance_km: f64, aircraft: &Aircraft) -> Result<FlightPhases, PlanError> {
    if distance_km < 0.0 {
        return Err(PlanError::NegativeDistance(distance_km));
    }
    if aircraft.cruise_speed_kmh <= 0.0 {
        return Err(PlanError::NonPositiveCruiseSpeed {
            aircraft: aircraft.id.clone(),
            value_kmh: aircraft.cruise_speed_kmh,
        });
    }
    if aircraft.climb_rate_m_s <= 0.0 {
        return Err(PlanError::NonPositiveClimbRate {
            aircraft: aircraft.id.clone(),
            value_m_s: aircraft.climb_rate_m_s,
        });
    }
    if aircraft.descent_rate_m_s <= 0.0 {
        return Err(PlanError::NonPositiveDescentRate {
            aircraft: aircraft.id.clone(),
            value_m_s: aircraft.descent_rate_m_s,
        });
    }

    let climb_s = aircraft.cruise_altitude_m / aircraft.climb_rate_m_s;
    let descent_s = aircraft.cruise_altitude_m / aircraft.descent_rate_m_s;

    let climb_speed_kmh = aircraft.cruise_speed_kmh * CLIMB_SPEED_FACTOR;
    let descent_speed_kmh = aircraft.cruise_speed_kmh * DESCENT_SPEED_FACTOR;
    let climb_distance_km = climb_speed_kmh / SECONDS_PER_HOUR * climb_s;
    let descent_distance_km = descent_speed_kmh / SECONDS_PER_HOUR * descent_s;

    let cruise_distance_km = (distance_km - climb_distance_km - descent_distance_km).max(0.0);
    let cruise_s = cruise_distance_km / aircraft.cruise_speed_kmh * SECONDS_PER_HOUR;

    let total_s = TAKEOFF_DURATION_S + climb_s + cruise_s + descent_s + LANDING_DURATION_S;

    Ok(FlightPhases {
        takeoff_s: TAKEOFF_DURATION_S,
        climb_s,
        cruise_s,
        descent_s,
        landing_s: LANDING_DURATION_S,
        total_s,
    })
}
