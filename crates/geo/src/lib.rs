//! Great-circle geometry: Haversine distance, spherical path interpolation,
//! initial bearing, and progress-fraction sampling along a track.
//!
//! Coordinates are decimal degrees on a sphere of radius
//! [`EARTH_RADIUS_KM`]. Out-of-range latitudes/longitudes are accepted
//! unvalidated; the results are mathematically defined either way.

use route_core::constants::EARTH_RADIUS_KM;

/// Angular separations below this (radians) are treated as coincident points.
const COINCIDENT_EPS: f64 = 1e-9;

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat_deg: f64,
    pub lon_deg: f64,
}

impl LatLon {
    pub fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self { lat_deg, lon_deg }
    }
}

/// Great-circle distance in kilometres via the Haversine formula.
///
/// Symmetric and non-negative; zero when the points coincide and close to
/// π·R for antipodal pairs.
pub fn haversine_distance_km(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.lat_deg.to_radians();
    let lat2 = b.lat_deg.to_radians();
    let delta_lat = (b.lat_deg - a.lat_deg).to_radians();
    let delta_lon = (b.lon_deg - a.lon_deg).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Central angle between two points in radians (spherical law of cosines).
fn angular_separation(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.lat_deg.to_radians();
    let lat2 = b.lat_deg.to_radians();
    let delta_lon = (b.lon_deg - a.lon_deg).to_radians();

    // Clamp: rounding can push the cosine a hair outside [-1, 1].
    (lat1.sin() * lat2.sin() + lat1.cos() * lat2.cos() * delta_lon.cos())
        .clamp(-1.0, 1.0)
        .acos()
}

/// Interpolate the great-circle track from `a` to `b` with `segments` steps,
/// returning `segments + 1` ordered points inclusive of both endpoints.
///
/// Coincident endpoints yield the repeated point rather than NaN. Exactly
/// antipodal endpoints have no unique great circle; those fall back to a
/// linear latitude/longitude blend so the output stays finite.
pub fn great_circle_path(a: LatLon, b: LatLon, segments: usize) -> Vec<LatLon> {
    let steps = segments.max(1);
    let d = angular_separation(a, b);

    if d < COINCIDENT_EPS {
        return vec![a; steps + 1];
    }
    if (std::f64::consts::PI - d) < COINCIDENT_EPS {
        return linear_path(a, b, steps);
    }

    let lat1 = a.lat_deg.to_radians();
    let lon1 = a.lon_deg.to_radians();
    let lat2 = b.lat_deg.to_radians();
    let lon2 = b.lon_deg.to_radians();
    let sin_d = d.sin();

    let mut points = Vec::with_capacity(steps + 1);
    for i in 0..=steps {
        let f = i as f64 / steps as f64;
        let coeff_a = ((1.0 - f) * d).sin() / sin_d;
        let coeff_b = (f * d).sin() / sin_d;

        let x = coeff_a * lat1.cos() * lon1.cos() + coeff_b * lat2.cos() * lon2.cos();
        let y = coeff_a * lat1.cos() * lon1.sin() + coeff_b * lat2.cos() * lon2.sin();
        let z = coeff_a * lat1.sin() + coeff_b * lat2.sin();

        let lat = z.atan2((x * x + y * y).sqrt()).to_degrees();
        let lon = y.atan2(x).to_degrees();
        points.push(LatLon::new(lat, lon));
    }
    points
}

fn linear_path(a: LatLon, b: LatLon, steps: usize) -> Vec<LatLon> {
    (0..=steps)
        .map(|i| {
            let f = i as f64 / steps as f64;
            LatLon::new(
                a.lat_deg + f * (b.lat_deg - a.lat_deg),
                a.lon_deg + f * (b.lon_deg - a.lon_deg),
            )
        })
        .collect()
}

/// Initial bearing (forward azimuth) from `a` toward `b`, degrees in [0, 360).
pub fn initial_bearing_deg(a: LatLon, b: LatLon) -> f64 {
    let lat1 = a.lat_deg.to_radians();
    let lat2 = b.lat_deg.to_radians();
    let delta_lon = (b.lon_deg - a.lon_deg).to_radians();

    let y = delta_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();
    let bearing = y.atan2(x).to_degrees();

    (bearing + 360.0) % 360.0
}

/// Waypoint under a progress fraction: index `floor(f × (len − 1))`, with the
/// fraction clamped to [0, 1]. Returns `None` for an empty path.
pub fn point_along_path(path: &[LatLon], fraction: f64) -> Option<LatLon> {
    if path.is_empty() {
        return None;
    }
    let f = fraction.clamp(0.0, 1.0);
    let index = (f * (path.len() - 1) as f64).floor() as usize;
    path.get(index).copied()
}
