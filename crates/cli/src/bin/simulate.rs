use std::path::PathBuf;
use std::thread;
use std::time::{Duration, Instant};

use chrono::Local;
use clap::Parser;
use flight_route_simulator::anim::Animator;
use flight_route_simulator::catalog::{
    self, Aircraft, City, builtin_aircraft, builtin_cities, load_aircraft, load_cities,
};
use flight_route_simulator::export::{summary, waypoints};
use flight_route_simulator::geo::point_along_path;
use flight_route_simulator::plan::plan_flight;
use flight_route_simulator::time::format_duration;
use flight_route_simulator::units::{DistanceUnit, convert_distance};

#[derive(Parser)]
#[command(author, version, about = "Simulate a flight between two cities")]
struct Cli {
    /// Departure city name or IATA code (case-insensitive)
    #[arg(long)]
    from: String,

    /// Arrival city name or IATA code (case-insensitive)
    #[arg(long)]
    to: String,

    /// Aircraft id or name from the catalog
    #[arg(long)]
    aircraft: String,

    /// Number of great-circle segments to interpolate
    #[arg(long, default_value_t = 100)]
    waypoints: usize,

    /// City catalog override (YAML file, TOML file, or directory of TOML)
    #[arg(long)]
    cities: Option<PathBuf>,

    /// Aircraft catalog override (YAML file, TOML file, or directory of TOML)
    #[arg(long)]
    fleet: Option<PathBuf>,

    /// Write the interpolated track as CSV (`-` for stdout)
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write a JSON flight summary sidecar
    #[arg(long)]
    json: Option<PathBuf>,

    /// Play the flight as a cooperative animation on stdout
    #[arg(long)]
    animate: bool,

    /// Simulated seconds per wall-clock second while animating
    #[arg(long, default_value_t = 100.0)]
    time_scale: f64,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cities: Vec<City> = match &cli.cities {
        Some(path) => load_cities(path)?,
        None => builtin_cities().to_vec(),
    };
    let fleet: Vec<Aircraft> = match &cli.fleet {
        Some(path) => load_aircraft(path)?,
        None => builtin_aircraft().to_vec(),
    };

    let departure = catalog::find_city(&cities, &cli.from)?;
    let arrival = catalog::find_city(&cities, &cli.to)?;
    let aircraft = catalog::find_aircraft(&fleet, &cli.aircraft)?;

    let plan = plan_flight(departure, arrival, aircraft)?;
    let track = plan.track(cli.waypoints.max(1));

    println!("=== Flight Plan ===");
    println!(
        "Route: {} ({}) -> {} ({})",
        plan.departure.name, plan.departure.iata, plan.arrival.name, plan.arrival.iata
    );
    println!("Aircraft: {} [{}]", plan.aircraft.name, plan.aircraft.category);
    println!(
        "Distance: {:.0} km ({:.0} NM)",
        plan.distance_km,
        convert_distance(
            plan.distance_km,
            DistanceUnit::Kilometres,
            DistanceUnit::NauticalMiles
        )
    );
    for (phase, seconds) in plan.phases.legs() {
        println!("  {:<8} {}", phase.to_string(), format_duration(seconds));
    }
    println!("Total: {}", format_duration(plan.phases.total_s));

    let depart_at = Local::now();
    let arrive_at = depart_at + chrono::Duration::seconds(plan.phases.total_s.round() as i64);
    println!(
        "Departing {} -> arriving {}",
        depart_at.format("%H:%M"),
        arrive_at.format("%H:%M")
    );

    let rows = waypoints::from_track(&track);
    if let Some(path) = &cli.csv {
        let writer = waypoints::writer_for_path(path)?;
        waypoints::write_csv(writer, &rows)?;
    }
    if let Some(path) = &cli.json {
        let phases = summary::PhaseBreakdown {
            takeoff_s: plan.phases.takeoff_s,
            climb_s: plan.phases.climb_s,
            cruise_s: plan.phases.cruise_s,
            descent_s: plan.phases.descent_s,
            landing_s: plan.phases.landing_s,
            total_s: plan.phases.total_s,
        };
        let flight_summary = summary::FlightSummary {
            departure_iata: &plan.departure.iata,
            departure_name: &plan.departure.name,
            arrival_iata: &plan.arrival.iata,
            arrival_name: &plan.arrival.name,
            aircraft_id: &plan.aircraft.id,
            aircraft_name: &plan.aircraft.name,
            distance_km: plan.distance_km,
            phases,
        };
        summary::write_json(path, &flight_summary)?;
    }

    if cli.animate {
        run_animation(&plan, &track, cli.time_scale)?;
    }

    Ok(())
}

/// Tick the animator once per frame until the flight completes, printing
/// progress, the active phase, and the current track position.
fn run_animation(
    plan: &flight_route_simulator::plan::FlightPlan,
    track: &[flight_route_simulator::geo::LatLon],
    time_scale: f64,
) -> anyhow::Result<()> {
    const FRAME: Duration = Duration::from_millis(100);

    let mut animator = Animator::with_time_scale(plan.phases.total_s, time_scale)?;
    animator.play();

    let mut last_frame = Instant::now();
    while !animator.is_finished() {
        thread::sleep(FRAME);
        let now = Instant::now();
        let progress = animator.tick(now - last_frame);
        last_frame = now;

        let phase = plan.phases.phase_at(animator.elapsed_s());
        let position = point_along_path(track, progress);
        match position {
            Some(p) => println!(
                "{:>5.1}% {:<8} elapsed {} at ({:.3}, {:.3})",
                progress * 100.0,
                phase.to_string(),
                format_duration(animator.elapsed_s()),
                p.lat_deg,
                p.lon_deg
            ),
            None => println!(
                "{:>5.1}% {:<8} elapsed {}",
                progress * 100.0,
                phase.to_string(),
                format_duration(animator.elapsed_s())
            ),
        }
    }
    println!("Arrived at {}.", plan.arrival.iata);
    Ok(())
}
