use std::fs;

use flight_route_simulator::catalog::{builtin_aircraft, builtin_cities, find_aircraft, find_city};
use flight_route_simulator::export::summary::{FlightSummary, PhaseBreakdown, write_json};
use flight_route_simulator::export::waypoints::{Waypoint, from_track, write_csv, writer_for_path};
use flight_route_simulator::geo::{LatLon, great_circle_path};
use tempfile::TempDir;

fn jfk_lhr_track() -> Vec<LatLon> {
    let cities = builtin_cities();
    let jfk = find_city(cities, "JFK").unwrap();
    let lhr = find_city(cities, "LHR").unwrap();
    great_circle_path(
        LatLon {
            lat_deg: jfk.lat_deg,
            lon_deg: jfk.lon_deg,
        },
        LatLon {
            lat_deg: lhr.lat_deg,
            lon_deg: lhr.lon_deg,
        },
        100,
    )
}

#[test]
fn from_track_produces_one_row_per_point() {
    let rows = from_track(&jfk_lhr_track());
    assert_eq!(rows.len(), 101);
    assert_eq!(rows[0].index, 0);
    assert_eq!(rows[0].fraction, 0.0);
    assert_eq!(rows[0].distance_from_departure_km, 0.0);
    assert_eq!(rows[100].index, 100);
    assert_eq!(rows[100].fraction, 1.0);
}

#[test]
fn cumulative_distance_matches_route_length() {
    let rows = from_track(&jfk_lhr_track());
    let total = rows.last().unwrap().distance_from_departure_km;
    assert!((total - 5570.22).abs() < 1.0, "got {total}");

    for pair in rows.windows(2) {
        assert!(
            pair[1].distance_from_departure_km >= pair[0].distance_from_departure_km,
            "cumulative distance must not decrease"
        );
    }
}

#[test]
fn last_row_repeats_previous_bearing() {
    let rows = from_track(&jfk_lhr_track());
    assert_eq!(rows[100].bearing_deg, rows[99].bearing_deg);
    for row in &rows {
        assert!((0.0..360.0).contains(&row.bearing_deg), "bearing {}", row.bearing_deg);
    }
}

#[test]
fn write_csv_emits_header_and_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("waypoints.csv");
    let rows = from_track(&jfk_lhr_track());

    let writer = writer_for_path(&path).unwrap();
    write_csv(writer, &rows).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines.len(), 102);
    assert_eq!(
        lines[0],
        "index,fraction,lat_deg,lon_deg,bearing_deg,distance_from_departure_km"
    );
}

#[test]
fn writer_for_path_creates_parent_directories() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("nested").join("deep").join("out.csv");
    let rows = vec![Waypoint {
        index: 0,
        fraction: 0.0,
        lat_deg: 0.0,
        lon_deg: 0.0,
        bearing_deg: 0.0,
        distance_from_departure_km: 0.0,
    }];
    write_csv(writer_for_path(&path).unwrap(), &rows).unwrap();
    assert!(path.is_file());
}

#[test]
fn write_json_creates_parents_and_pretty_prints() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("artifacts").join("summary.json");

    let cities = builtin_cities();
    let jfk = find_city(cities, "JFK").unwrap();
    let lhr = find_city(cities, "LHR").unwrap();
    let a320 = find_aircraft(builtin_aircraft(), "a320").unwrap();

    let summary = FlightSummary {
        departure_iata: &jfk.iata,
        departure_name: &jfk.name,
        arrival_iata: &lhr.iata,
        arrival_name: &lhr.name,
        aircraft_id: &a320.id,
        aircraft_name: &a320.name,
        distance_km: 5570.22,
        phases: PhaseBreakdown {
            takeoff_s: 120.0,
            climb_s: 975.41,
            cruise_s: 22197.93,
            descent_s: 1166.67,
            landing_s: 180.0,
            total_s: 24640.0,
        },
    };
    write_json(&path, &summary).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"departure_iata\": \"JFK\""));
    assert!(contents.contains("\"arrival_iata\": \"LHR\""));
    assert!(contents.contains("\"aircraft_id\": \"a320\""));
}
