//! Core units, constants, and shared primitives for the Flight Route Simulator workspace.

/// Physical and conversion constants. Speeds are expressed in km/h, distances in km.
pub mod constants {
    /// Mean Earth radius used by the Haversine formula (km).
    pub const EARTH_RADIUS_KM: f64 = 6371.0;
    /// Kilometres per statute mile.
    pub const KM_PER_MILE: f64 = 1.60934;
    /// Kilometres per nautical mile.
    pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;
    /// km/h per m/s.
    pub const KMH_PER_M_S: f64 = 3.6;
    /// km/h per knot.
    pub const KMH_PER_KNOT: f64 = 1.852;
    /// km/h per statute mile per hour.
    pub const KMH_PER_MPH: f64 = 1.60934;
    /// km/h per Mach at sea level.
    pub const KMH_PER_MACH: f64 = 1225.044;
    /// Seconds per minute.
    pub const SECONDS_PER_MINUTE: f64 = 60.0;
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3600.0;
}

/// Unit conversion for speeds, distances, and times.
///
/// Each family converts through one canonical unit (km/h, km, seconds) with
/// multiplicative constants. Identical source and target units short-circuit,
/// and no rounding is applied; formatting is a presentation concern.
pub mod units {
    use super::constants::*;
    use std::fmt;
    use std::str::FromStr;

    /// Speed units accepted by [`convert_speed`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SpeedUnit {
        KilometresPerHour,
        MetresPerSecond,
        MilesPerHour,
        Knots,
        Mach,
    }

    /// Distance units accepted by [`convert_distance`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum DistanceUnit {
        Kilometres,
        Miles,
        NauticalMiles,
    }

    /// Time units accepted by [`convert_time`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum TimeUnit {
        Seconds,
        Minutes,
        Hours,
    }

    impl SpeedUnit {
        /// All speed units, in display order.
        pub const ALL: [SpeedUnit; 5] = [
            SpeedUnit::KilometresPerHour,
            SpeedUnit::MetresPerSecond,
            SpeedUnit::MilesPerHour,
            SpeedUnit::Knots,
            SpeedUnit::Mach,
        ];

        /// km/h represented by one unit of this speed.
        fn to_kmh_factor(self) -> f64 {
            match self {
                SpeedUnit::KilometresPerHour => 1.0,
                SpeedUnit::MetresPerSecond => KMH_PER_M_S,
                SpeedUnit::MilesPerHour => KMH_PER_MPH,
                SpeedUnit::Knots => KMH_PER_KNOT,
                SpeedUnit::Mach => KMH_PER_MACH,
            }
        }

        /// Short label following aviation convention ("kn", "Mach").
        pub fn label(self) -> &'static str {
            match self {
                SpeedUnit::KilometresPerHour => "km/h",
                SpeedUnit::MetresPerSecond => "m/s",
                SpeedUnit::MilesPerHour => "mph",
                SpeedUnit::Knots => "kn",
                SpeedUnit::Mach => "Mach",
            }
        }
    }

    impl DistanceUnit {
        /// All distance units, in display order.
        pub const ALL: [DistanceUnit; 3] = [
            DistanceUnit::Kilometres,
            DistanceUnit::Miles,
            DistanceUnit::NauticalMiles,
        ];

        fn to_km_factor(self) -> f64 {
            match self {
                DistanceUnit::Kilometres => 1.0,
                DistanceUnit::Miles => KM_PER_MILE,
                DistanceUnit::NauticalMiles => KM_PER_NAUTICAL_MILE,
            }
        }

        pub fn label(self) -> &'static str {
            match self {
                DistanceUnit::Kilometres => "km",
                DistanceUnit::Miles => "mi",
                DistanceUnit::NauticalMiles => "NM",
            }
        }
    }

    impl TimeUnit {
        /// All time units, in display order.
        pub const ALL: [TimeUnit; 3] = [TimeUnit::Seconds, TimeUnit::Minutes, TimeUnit::Hours];

        fn to_seconds_factor(self) -> f64 {
            match self {
                TimeUnit::Seconds => 1.0,
                TimeUnit::Minutes => SECONDS_PER_MINUTE,
                TimeUnit::Hours => SECONDS_PER_HOUR,
            }
        }

        pub fn label(self) -> &'static str {
            match self {
                TimeUnit::Seconds => "s",
                TimeUnit::Minutes => "min",
                TimeUnit::Hours => "h",
            }
        }
    }

    /// Convert a speed between units via km/h.
    pub fn convert_speed(value: f64, from: SpeedUnit, to: SpeedUnit) -> f64 {
        if from == to {
            return value;
        }
        value * from.to_kmh_factor() / to.to_kmh_factor()
    }

    /// Convert a distance between units via kilometres.
    pub fn convert_distance(value: f64, from: DistanceUnit, to: DistanceUnit) -> f64 {
        if from == to {
            return value;
        }
        value * from.to_km_factor() / to.to_km_factor()
    }

    /// Convert a time between units via seconds.
    pub fn convert_time(value: f64, from: TimeUnit, to: TimeUnit) -> f64 {
        if from == to {
            return value;
        }
        value * from.to_seconds_factor() / to.to_seconds_factor()
    }

    /// Error for unit strings that match no known unit.
    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct ParseUnitError {
        input: String,
        family: &'static str,
    }

    impl fmt::Display for ParseUnitError {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "unknown {} unit '{}'", self.family, self.input)
        }
    }

    impl std::error::Error for ParseUnitError {}

    impl FromStr for SpeedUnit {
        type Err = ParseUnitError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.to_ascii_lowercase().as_str() {
                "km/h" | "kmh" | "kph" => Ok(SpeedUnit::KilometresPerHour),
                "m/s" | "ms" => Ok(SpeedUnit::MetresPerSecond),
                "mph" => Ok(SpeedUnit::MilesPerHour),
                "kn" | "kt" | "kts" | "knot" | "knots" => Ok(SpeedUnit::Knots),
                "mach" => Ok(SpeedUnit::Mach),
                _ => Err(ParseUnitError {
                    input: s.to_string(),
                    family: "speed",
                }),
            }
        }
    }

    impl FromStr for DistanceUnit {
        type Err = ParseUnitError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.to_ascii_lowercase().as_str() {
                "km" => Ok(DistanceUnit::Kilometres),
                "mi" | "mile" | "miles" => Ok(DistanceUnit::Miles),
                "nm" => Ok(DistanceUnit::NauticalMiles),
                _ => Err(ParseUnitError {
                    input: s.to_string(),
                    family: "distance",
                }),
            }
        }
    }

    impl FromStr for TimeUnit {
        type Err = ParseUnitError;

        fn from_str(s: &str) -> Result<Self, Self::Err> {
            match s.to_ascii_lowercase().as_str() {
                "s" | "sec" | "seconds" => Ok(TimeUnit::Seconds),
                "min" | "minutes" => Ok(TimeUnit::Minutes),
                "h" | "hr" | "hours" => Ok(TimeUnit::Hours),
                _ => Err(ParseUnitError {
                    input: s.to_string(),
                    family: "time",
                }),
            }
        }
    }

    impl fmt::Display for SpeedUnit {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.label())
        }
    }

    impl fmt::Display for DistanceUnit {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.label())
        }
    }

    impl fmt::Display for TimeUnit {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str(self.label())
        }
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

    /// Convert hours to seconds.
    #[inline]
    pub fn hours_to_seconds(hours: f64) -> f64 {
        hours * SECONDS_PER_HOUR
    }

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / SECONDS_PER_HOUR
    }

    /// Render a second count as "2h 5m", "4m 30s", or "45s".
    pub fn format_duration(seconds: f64) -> String {
        let total = seconds.max(0.0);
        let hours = (total / SECONDS_PER_HOUR).floor() as u64;
        let minutes = ((total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE).floor() as u64;
        let secs = (total % SECONDS_PER_MINUTE).floor() as u64;

        if hours > 0 {
            format!("{hours}h {minutes}m")
        } else if minutes > 0 {
            format!("{minutes}m {secs}s")
        } else {
            format!("{secs}s")
        }
    }
}
