mod error;
mod ground_station;
mod horizon;

pub use error::StationError;
pub use ground_station::{GroundStationPosition, StationParams};
pub use horizon::HorizonMask;
