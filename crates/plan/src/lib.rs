//! Route planning orchestrator: combine great-circle distance with the
//! phase estimator to produce one flight plan per simulation request.

pub mod phases;

pub use phases::{
    CLIMB_SPEED_FACTOR, DESCENT_SPEED_FACTOR, FlightPhases, LANDING_DURATION_S, PhaseKind,
    PlanError, TAKEOFF_DURATION_S, estimate_phases,
};

use route_config::{Aircraft, City};
use route_geo::{LatLon, haversine_distance_km};

/// Aggregate of one simulated flight: route, distance, phase timings, and
/// the aircraft flying it. Built fresh per request and discarded on the next.
#[derive(Debug, Clone)]
pub struct FlightPlan {
    pub departure: City,
    pub arrival: City,
    pub aircraft: Aircraft,
    pub distance_km: f64,
    pub phases: FlightPhases,
}

impl FlightPlan {
    /// Departure coordinates.
    pub fn departure_point(&self) -> LatLon {
        LatLon::new(self.departure.lat_deg, self.departure.lon_deg)
    }

    /// Arrival coordinates.
    pub fn arrival_point(&self) -> LatLon {
        LatLon::new(self.arrival.lat_deg, self.arrival.lon_deg)
    }

    /// Interpolated great-circle track with `segments` steps.
    pub fn track(&self, segments: usize) -> Vec<LatLon> {
        route_geo::great_circle_path(self.departure_point(), self.arrival_point(), segments)
    }
}

/// Plan a flight between two cities with the given aircraft.
pub fn plan_flight(
    departure: &City,
    arrival: &City,
    aircraft: &Aircraft,
) -> Result<FlightPlan, PlanError> {
    let distance_km = haversine_distance_km(
        LatLon::new(departure.lat_deg, departure.lon_deg),
        LatLon::new(arrival.lat_deg, arrival.lon_deg),
    );
    let phases = estimate_phases(distance_km, aircraft)?;

    Ok(FlightPlan {
        departure: departure.clone(),
        arrival: arrival.clone(),
        aircraft: aircraft.clone(),
        distance_km,
        phases,
    })
}
