use flight_route_simulator::catalog::{builtin_aircraft, builtin_cities, find_aircraft, find_city};
use flight_route_simulator::plan::{
    LANDING_DURATION_S, PhaseKind, PlanError, TAKEOFF_DURATION_S, estimate_phases, plan_flight,
};

#[test]
fn phase_sum_invariant_holds_for_every_aircraft() {
    for aircraft in builtin_aircraft() {
        for distance_km in [0.0, 50.0, 800.0, 5570.0, 15000.0] {
            let phases = estimate_phases(distance_km, aircraft).expect("phases");
            let sum = phases.takeoff_s
                + phases.climb_s
                + phases.cruise_s
                + phases.descent_s
                + phases.landing_s;
            assert!(
                (phases.total_s - sum).abs() < 1e-9,
                "{}: total {} != sum {sum}",
                aircraft.id,
                phases.total_s
            );
            assert!(phases.cruise_s >= 0.0);
        }
    }
}

#[test]
fn short_hop_clamps_cruise_to_zero() {
    let a320 = find_aircraft(builtin_aircraft(), "a320").expect("a320");
    let phases = estimate_phases(10.0, a320).expect("phases");
    assert_eq!(phases.cruise_s, 0.0);
    assert_eq!(phases.takeoff_s, TAKEOFF_DURATION_S);
    assert_eq!(phases.landing_s, LANDING_DURATION_S);
}

#[test]
fn a320_transatlantic_fixture() {
    let a320 = find_aircraft(builtin_aircraft(), "a320").expect("a320");
    let phases = estimate_phases(5570.22, a320).expect("phases");
    // 120 s takeoff + 975 s climb + ~22198 s cruise + 1167 s descent + 180 s landing
    assert!((phases.climb_s - 975.4).abs() < 1.0);
    assert!((phases.descent_s - 1166.7).abs() < 1.0);
    assert!((phases.total_s - 24640.0).abs() < 5.0);
}

#[test]
fn non_positive_rates_are_rejected() {
    let mut broken = find_aircraft(builtin_aircraft(), "a320").expect("a320").clone();
    broken.climb_rate_m_s = 0.0;
    assert!(matches!(
        estimate_phases(1000.0, &broken),
        Err(PlanError::NonPositiveClimbRate { .. })
    ));

    let mut broken = find_aircraft(builtin_aircraft(), "a320").expect("a320").clone();
    broken.descent_rate_m_s = -3.0;
    assert!(matches!(
        estimate_phases(1000.0, &broken),
        Err(PlanError::NonPositiveDescentRate { .. })
    ));

    let mut broken = find_aircraft(builtin_aircraft(), "a320").expect("a320").clone();
    broken.cruise_speed_kmh = 0.0;
    assert!(matches!(
        estimate_phases(1000.0, &broken),
        Err(PlanError::NonPositiveCruiseSpeed { .. })
    ));
}

#[test]
fn negative_distance_is_rejected() {
    let a320 = find_aircraft(builtin_aircraft(), "a320").expect("a320");
    assert!(matches!(
        estimate_phases(-1.0, a320),
        Err(PlanError::NegativeDistance(_))
    ));
}

#[test]
fn phase_lookup_walks_the_cumulative_boundaries() {
    let a320 = find_aircraft(builtin_aircraft(), "a320").expect("a320");
    let phases = estimate_phases(5570.0, a320).expect("phases");

    assert_eq!(phases.phase_at(0.0), PhaseKind::Takeoff);
    assert_eq!(phases.phase_at(phases.takeoff_s + 1.0), PhaseKind::Climb);
    assert_eq!(phases.phase_at(phases.total_s / 2.0), PhaseKind::Cruise);
    assert_eq!(
        phases.phase_at(phases.total_s - phases.landing_s - 1.0),
        PhaseKind::Descent
    );
    assert_eq!(phases.phase_at(phases.total_s + 60.0), PhaseKind::Landing);
}

#[test]
fn planner_combines_distance_and_phases() {
    let cities = builtin_cities();
    let departure = find_city(cities, "JFK").expect("JFK");
    let arrival = find_city(cities, "LHR").expect("LHR");
    let aircraft = find_aircraft(builtin_aircraft(), "a320").expect("a320");

    let plan = plan_flight(departure, arrival, aircraft).expect("plan");
    assert!((plan.distance_km - 5570.0).abs() < 10.0);
    assert_eq!(plan.departure.iata, "JFK");
    assert_eq!(plan.arrival.iata, "LHR");

    let track = plan.track(100);
    assert_eq!(track.len(), 101);
    assert!((track[0].lat_deg - departure.lat_deg).abs() < 1e-9);
    assert!((track[100].lon_deg - arrival.lon_deg).abs() < 1e-9);
}
