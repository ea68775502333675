pub mod config;
pub mod station;

pub use config::{Config, ConfigError, StationConfig};
pub use station::{GroundStationPosition, HorizonMask, StationError, StationParams};
