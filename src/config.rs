use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::station::{GroundStationPosition, StationError, StationParams};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),
    #[error("station error: {0}")]
    Station(#[from] StationError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub station: StationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StationConfig {
    pub name: Option<String>,
    /// "lat, lon" in degrees
    pub coordinates: String,
    #[serde(default)]
    pub altitude_m: f64,
    #[serde(default)]
    pub horizon: Option<Vec<i32>>,
}

impl Config {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("Loading station config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_yaml::from_str(yaml)?;
        Ok(config)
    }
}

impl StationConfig {
    pub fn to_position(&self) -> Result<GroundStationPosition, ConfigError> {
        let (latitude, longitude) = parse_coordinates(&self.coordinates)?;

        if !(-90.0..=90.0).contains(&latitude) {
            log::warn!("Station latitude {} is outside [-90, 90]", latitude);
        }
        if !(-180.0..360.0).contains(&longitude) {
            log::warn!("Station longitude {} is outside [-180, 360)", longitude);
        }

        let mut station = GroundStationPosition::new(StationParams {
            latitude,
            longitude,
            height_amsl: self.altitude_m,
            name: self.name.clone(),
        });

        if let Some(ref horizon) = self.horizon {
            station.set_horizon_elevations(horizon)?;
        }

        log::debug!(
            "Station '{}' at {:.4}, {:.4} ({} m)",
            station.name(),
            station.latitude(),
            station.longitude(),
            station.height_amsl()
        );

        Ok(station)
    }
}

/// Parse a "lat, lon" pair in degrees.
pub fn parse_coordinates(coordinates: &str) -> Result<(f64, f64), ConfigError> {
    let err = || ConfigError::InvalidCoordinates(coordinates.to_string());

    let parts: Vec<_> = coordinates.split(',').map(|s| s.trim()).collect();
    if parts.len() != 2 {
        return Err(err());
    }
    let lat = parts[0].parse().map_err(|_| err())?;
    let lon = parts[1].parse().map_err(|_| err())?;
    Ok((lat, lon))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"
station:
  name: Delft
  coordinates: "51.9861, 4.3876"
  altitude_m: 74.4
  horizon: [0, 0, 0, 5, 5, 5, 10, 10, 10, 0, 0, 0,
            0, 0, 0, 0, 0, 0, 3, 3, 3, 3, 0, 0,
            0, 0, 0, 0, 0, 0, 20, 20, 0, 0, 0, 0]
"#;

    #[test]
    fn loads_full_station() {
        let config = Config::from_yaml(FULL).unwrap();
        let station = config.station.to_position().unwrap();

        assert_eq!(station.name(), "Delft");
        assert_eq!(station.latitude(), 51.9861);
        assert_eq!(station.longitude(), 4.3876);
        assert_eq!(station.height_amsl(), 74.4);
        assert_eq!(station.horizon_elevations()[6], 10);
        assert_eq!(station.horizon_elevation_at(305.0), 20);
    }

    #[test]
    fn optional_fields_default() {
        let config = Config::from_yaml("station:\n  coordinates: \"-33.9,151.2\"\n").unwrap();
        let station = config.station.to_position().unwrap();

        assert_eq!(station.name(), "");
        assert_eq!(station.height_amsl(), 0.0);
        assert_eq!(station.horizon_elevations(), [0; 36]);
    }

    #[test]
    fn short_horizon_is_rejected() {
        let yaml = "station:\n  coordinates: \"10, 20\"\n  horizon: [1, 2, 3]\n";
        let config = Config::from_yaml(yaml).unwrap();
        let err = config.station.to_position().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Station(StationError::InvalidArgument {
                expected: 36,
                actual: 3
            })
        ));
    }

    #[test]
    fn parses_coordinates() {
        assert_eq!(parse_coordinates("1.5,-2.25").unwrap(), (1.5, -2.25));
        assert_eq!(parse_coordinates("  10 ,  20 ").unwrap(), (10.0, 20.0));
        assert!(matches!(
            parse_coordinates("10"),
            Err(ConfigError::InvalidCoordinates(_))
        ));
        assert!(matches!(
            parse_coordinates("10, 20, 30"),
            Err(ConfigError::InvalidCoordinates(_))
        ));
        assert!(matches!(
            parse_coordinates("north, 20"),
            Err(ConfigError::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn out_of_range_coordinates_load() {
        let config = Config::from_yaml("station:\n  coordinates: \"95, 400\"\n").unwrap();
        let station = config.station.to_position().unwrap();
        assert_eq!(station.latitude(), 95.0);
        assert_eq!(station.longitude(), 400.0);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = Config::from_file("/nonexistent/station.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
