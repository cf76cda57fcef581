use flight_route_simulator::units::{
    DistanceUnit, SpeedUnit, TimeUnit, convert_distance, convert_speed, convert_time,
};

#[test]
fn speed_fixture_kmh_to_knots() {
    let knots = convert_speed(1000.0, SpeedUnit::KilometresPerHour, SpeedUnit::Knots);
    assert!((knots - 539.96).abs() < 0.01, "got {knots}");
}

#[test]
fn time_fixture_seconds_to_hours() {
    assert_eq!(
        convert_time(7200.0, TimeUnit::Seconds, TimeUnit::Hours),
        2.0
    );
}

#[test]
fn mach_routes_through_sea_level_speed_of_sound() {
    let kmh = convert_speed(1.0, SpeedUnit::Mach, SpeedUnit::KilometresPerHour);
    assert!((kmh - 1225.044).abs() < 1e-9);
}

#[test]
fn speed_round_trips_within_tolerance() {
    for from in SpeedUnit::ALL {
        for to in SpeedUnit::ALL {
            let out = convert_speed(convert_speed(123.456, from, to), to, from);
            assert!(
                (out - 123.456).abs() < 1e-9,
                "{from} -> {to} round trip drifted to {out}"
            );
        }
    }
}

#[test]
fn distance_round_trips_within_tolerance() {
    for from in DistanceUnit::ALL {
        for to in DistanceUnit::ALL {
            let out = convert_distance(convert_distance(987.654, from, to), to, from);
            assert!(
                (out - 987.654).abs() < 1e-9,
                "{from} -> {to} round trip drifted to {out}"
            );
        }
    }
}

#[test]
fn time_round_trips_within_tolerance() {
    for from in TimeUnit::ALL {
        for to in TimeUnit::ALL {
            let out = convert_time(convert_time(3661.0, from, to), to, from);
            assert!(
                (out - 3661.0).abs() < 1e-9,
                "{from} -> {to} round trip drifted to {out}"
            );
        }
    }
}

#[test]
fn identity_conversion_is_exact() {
    let value = 0.1 + 0.2; // deliberately not exactly representable
    assert_eq!(convert_speed(value, SpeedUnit::Mach, SpeedUnit::Mach), value);
    assert_eq!(
        convert_distance(value, DistanceUnit::Miles, DistanceUnit::Miles),
        value
    );
    assert_eq!(convert_time(value, TimeUnit::Hours, TimeUnit::Hours), value);
}

#[test]
fn unit_strings_parse_case_insensitively() {
    assert_eq!("KM/H".parse::<SpeedUnit>().unwrap(), SpeedUnit::KilometresPerHour);
    assert_eq!("knots".parse::<SpeedUnit>().unwrap(), SpeedUnit::Knots);
    assert_eq!("Mach".parse::<SpeedUnit>().unwrap(), SpeedUnit::Mach);
    assert_eq!("NM".parse::<DistanceUnit>().unwrap(), DistanceUnit::NauticalMiles);
    assert_eq!("min".parse::<TimeUnit>().unwrap(), TimeUnit::Minutes);
    assert!("furlongs".parse::<DistanceUnit>().is_err());
}
