use serde::Serialize;

use crate::station::error::StationError;
use crate::station::horizon::HorizonMask;

/// Construction parameters for a [`GroundStationPosition`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationParams {
    /// Degrees, North positive.
    pub latitude: f64,
    /// Degrees, East positive.
    pub longitude: f64,
    /// Metres above mean sea level.
    pub height_amsl: f64,
    pub name: Option<String>,
}

/// Location and horizon profile of a ground station.
///
/// `theta` is scratch storage owned by the prediction engine: it is written
/// during a computation pass and read back afterwards, and carries no
/// configuration meaning of its own.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GroundStationPosition {
    latitude: f64,
    longitude: f64,
    height_amsl: f64,
    #[serde(skip)]
    theta: f64,
    horizon: HorizonMask,
    name: String,
}

impl GroundStationPosition {
    pub fn new(params: StationParams) -> Self {
        Self {
            latitude: params.latitude,
            longitude: params.longitude,
            height_amsl: params.height_amsl,
            theta: 0.0,
            horizon: HorizonMask::default(),
            name: params.name.unwrap_or_default(),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn height_amsl(&self) -> f64 {
        self.height_amsl
    }

    pub fn theta(&self) -> f64 {
        self.theta
    }

    pub fn set_theta(&mut self, theta: f64) {
        self.theta = theta;
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a copy of the horizon mask, one entry per 10° sector.
    pub fn horizon_elevations(&self) -> [i32; HorizonMask::SECTORS] {
        self.horizon.elevations()
    }

    /// Replace the horizon mask. The slice must hold exactly 36 values;
    /// on error the current mask is left as it was.
    pub fn set_horizon_elevations(&mut self, elevations: &[i32]) -> Result<(), StationError> {
        self.horizon = HorizonMask::try_from_slice(elevations)?;
        Ok(())
    }

    pub fn horizon(&self) -> &HorizonMask {
        &self.horizon
    }

    pub fn horizon_elevation_at(&self, azimuth_deg: f64) -> i32 {
        self.horizon.elevation_at(azimuth_deg)
    }

    /// Whether a look angle clears the horizon mask at its bearing.
    pub fn is_above_horizon(&self, azimuth_deg: f64, elevation_deg: f64) -> bool {
        elevation_deg >= f64::from(self.horizon_elevation_at(azimuth_deg))
    }
}
