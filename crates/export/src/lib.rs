//! Export helpers for CSV and JSON flight artifacts.

pub mod waypoints {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use route_geo::{LatLon, haversine_distance_km, initial_bearing_deg};
    use serde::{Deserialize, Serialize};

    /// One row of the waypoint CSV: a point on the interpolated track with
    /// its progress fraction, heading, and cumulative distance.
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct Waypoint {
        pub index: usize,
        pub fraction: f64,
        pub lat_deg: f64,
        pub lon_deg: f64,
        /// Heading toward the next waypoint; the last row repeats the
        /// previous heading.
        pub bearing_deg: f64,
        pub distance_from_departure_km: f64,
    }

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Convert an interpolated track into waypoint rows with headings and
    /// cumulative distances.
    pub fn from_track(track: &[LatLon]) -> Vec<Waypoint> {
        let mut rows = Vec::with_capacity(track.len());
        let mut cumulative_km = 0.0;
        let mut last_bearing = 0.0;
        let last_index = track.len().saturating_sub(1);

        for (index, point) in track.iter().enumerate() {
            if index > 0 {
                cumulative_km += haversine_distance_km(track[index - 1], *point);
            }
            let bearing_deg = if index < last_index {
                last_bearing = initial_bearing_deg(*point, track[index + 1]);
                last_bearing
            } else {
                last_bearing
            };
            let fraction = if last_index == 0 {
                0.0
            } else {
                index as f64 / last_index as f64
            };
            rows.push(Waypoint {
                index,
                fraction,
                lat_deg: point.lat_deg,
                lon_deg: point.lon_deg,
                bearing_deg,
                distance_from_departure_km: cumulative_km,
            });
        }
        rows
    }

    /// Serialize waypoint rows as CSV with a header record.
    pub fn write_csv(writer: Box<dyn Write>, rows: &[Waypoint]) -> csv::Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }
}

pub mod summary {
    use serde::Serialize;
    use serde_json::to_writer_pretty;
    use std::fs::{self, File};
    use std::io;
    use std::path::Path;

    /// Per-phase durations mirrored into the JSON sidecar.
    #[derive(Debug, Clone, Serialize)]
    pub struct PhaseBreakdown {
        pub takeoff_s: f64,
        pub climb_s: f64,
        pub cruise_s: f64,
        pub descent_s: f64,
        pub landing_s: f64,
        pub total_s: f64,
    }

    /// Flight summary written as a pretty-printed JSON sidecar.
    #[derive(Debug, Serialize)]
    pub struct FlightSummary<'a> {
        pub departure_iata: &'a str,
        pub departure_name: &'a str,
        pub arrival_iata: &'a str,
        pub arrival_name: &'a str,
        pub aircraft_id: &'a str,
        pub aircraft_name: &'a str,
        pub distance_km: f64,
        pub phases: PhaseBreakdown,
    }

    /// Write the summary JSON, creating parent directories on demand.
    pub fn write_json(path: &Path, summary: &FlightSummary<'_>) -> io::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        to_writer_pretty(File::create(path)?, summary)?;
        Ok(())
    }
}
