//! Catalog models and loaders for the Flight Route Simulator.
//!
//! Cities and aircraft are immutable reference data. A built-in catalog of
//! each is compiled into the binary (embedded YAML, parsed once on first
//! use); user-supplied YAML or TOML catalogs can replace it at runtime.

use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use thiserror::Error;

/// A city with its reference airport, in decimal degrees.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct City {
    pub name: String,
    pub country: String,
    pub lat_deg: f64,
    pub lon_deg: f64,
    /// Three-letter IATA airport code.
    pub iata: String,
}

/// Broad aircraft category used for catalog grouping.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum AircraftCategory {
    Commercial,
    Military,
    Cargo,
    PrivateBusiness,
}

impl fmt::Display for AircraftCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AircraftCategory::Commercial => "Commercial",
            AircraftCategory::Military => "Military",
            AircraftCategory::Cargo => "Cargo",
            AircraftCategory::PrivateBusiness => "Private/Business",
        };
        f.write_str(label)
    }
}

/// Static performance figures for one aircraft model.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct Aircraft {
    pub id: String,
    pub name: String,
    /// Free-form type description ("Narrow-body airliner", ...).
    pub kind: String,
    pub category: AircraftCategory,
    pub cruise_speed_kmh: f64,
    pub max_speed_kmh: f64,
    pub mach: f64,
    pub range_km: f64,
    pub cruise_altitude_m: f64,
    pub climb_rate_m_s: f64,
    pub descent_rate_m_s: f64,
    pub image_url: String,
}

/// Errors that can occur while loading or querying catalogs.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("city '{0}' not found in catalog")]
    CityNotFound(String),
    #[error("aircraft '{0}' not found in catalog")]
    AircraftNotFound(String),
    #[error("catalog is empty")]
    EmptyCatalog,
}

/// Built-in city catalog, parsed from embedded YAML on first access.
pub fn builtin_cities() -> &'static [City] {
    static CITIES: OnceLock<Vec<City>> = OnceLock::new();
    CITIES.get_or_init(|| {
        serde_yaml::from_str(include_str!("../data/cities.yaml"))
            .expect("embedded city catalog is well-formed")
    })
}

/// Built-in aircraft catalog, parsed from embedded YAML on first access.
pub fn builtin_aircraft() -> &'static [Aircraft] {
    static AIRCRAFT: OnceLock<Vec<Aircraft>> = OnceLock::new();
    AIRCRAFT.get_or_init(|| {
        serde_yaml::from_str(include_str!("../data/aircraft.yaml"))
            .expect("embedded aircraft catalog is well-formed")
    })
}

/// Load a city catalog from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_cities<P: AsRef<Path>>(path: P) -> Result<Vec<City>, CatalogError> {
    load_records(path)
}

/// Load an aircraft catalog from a YAML file, a TOML file, or a directory of TOML files.
pub fn load_aircraft<P: AsRef<Path>>(path: P) -> Result<Vec<Aircraft>, CatalogError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, CatalogError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, CatalogError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

/// Select a city by name or IATA code, case-insensitive.
pub fn find_city<'a>(cities: &'a [City], query: &str) -> Result<&'a City, CatalogError> {
    if cities.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    let upper = query.to_uppercase();
    cities
        .iter()
        .find(|c| c.iata.to_uppercase() == upper || c.name.to_uppercase() == upper)
        .ok_or_else(|| CatalogError::CityNotFound(query.to_string()))
}

/// Select an aircraft by id, exact name, or name substring, case-insensitive.
pub fn find_aircraft<'a>(fleet: &'a [Aircraft], query: &str) -> Result<&'a Aircraft, CatalogError> {
    if fleet.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }
    let upper = query.to_uppercase();
    fleet
        .iter()
        .find(|a| a.id.to_uppercase() == upper || a.name.to_uppercase() == upper)
        .or_else(|| fleet.iter().find(|a| a.name.to_uppercase().contains(&upper)))
        .ok_or_else(|| CatalogError::AircraftNotFound(query.to_string()))
}
