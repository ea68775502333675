use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::station::error::StationError;

/// Minimum usable elevation (degrees) per 10° azimuth sector.
///
/// Sector `i` covers azimuth `[10 * i, 10 * i + 10)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HorizonMask([i32; HorizonMask::SECTORS]);

impl HorizonMask {
    pub const SECTORS: usize = 36;
    pub const SECTOR_WIDTH_DEG: f64 = 10.0;

    pub fn new(elevations: [i32; Self::SECTORS]) -> Self {
        Self(elevations)
    }

    /// Copy a mask out of a slice, rejecting anything that isn't 36 long.
    pub fn try_from_slice(values: &[i32]) -> Result<Self, StationError> {
        let elevations: [i32; Self::SECTORS] =
            values.try_into().map_err(|_| StationError::InvalidArgument {
                expected: Self::SECTORS,
                actual: values.len(),
            })?;
        Ok(Self(elevations))
    }

    pub fn elevations(&self) -> [i32; Self::SECTORS] {
        self.0
    }

    /// Sector index for a bearing; any azimuth is folded into [0, 360).
    pub fn sector(azimuth_deg: f64) -> usize {
        let az = azimuth_deg.rem_euclid(360.0);
        let index = (az / Self::SECTOR_WIDTH_DEG).floor() as usize;
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs
        index.min(Self::SECTORS - 1)
    }

    pub fn elevation_at(&self, azimuth_deg: f64) -> i32 {
        self.0[Self::sector(azimuth_deg)]
    }
}

impl Default for HorizonMask {
    fn default() -> Self {
        Self([0; Self::SECTORS])
    }
}

impl Serialize for HorizonMask {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.as_slice().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HorizonMask {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let values = Vec::<i32>::deserialize(deserializer)?;
        HorizonMask::try_from_slice(&values).map_err(D::Error::custom)
    }
}
