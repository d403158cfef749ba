use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};
use crate::geo::EARTH_RADIUS_KM;

/// Average tow-truck speed for straight-line ETA estimates (km/h).
const DEFAULT_AVG_SPEED_KMH: f64 = 40.0;

/// Tunables for the nearest-driver ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingParams {
    /// Sphere radius used by the haversine distance.
    pub earth_radius_km: f64,
    /// Speed used by [`crate::ranking::NearestDriverRanking::eta_ms`].
    pub avg_speed_kmh: f64,
    /// When true, `Internal` providers win distance ties over `External`.
    pub prefer_internal: bool,
}

impl Default for RankingParams {
    fn default() -> Self {
        Self {
            earth_radius_km: EARTH_RADIUS_KM,
            avg_speed_kmh: DEFAULT_AVG_SPEED_KMH,
            prefer_internal: true,
        }
    }
}

impl RankingParams {
    pub fn with_earth_radius_km(mut self, radius_km: f64) -> Self {
        self.earth_radius_km = radius_km;
        self
    }

    pub fn with_avg_speed_kmh(mut self, speed_kmh: f64) -> Self {
        self.avg_speed_kmh = speed_kmh;
        self
    }

    pub fn with_prefer_internal(mut self, prefer_internal: bool) -> Self {
        self.prefer_internal = prefer_internal;
        self
    }

    pub fn validate(&self) -> DispatchResult<()> {
        if !(self.earth_radius_km.is_finite() && self.earth_radius_km > 0.0) {
            return Err(DispatchError::InvalidParams(format!(
                "earth_radius_km must be positive, got {}",
                self.earth_radius_km
            )));
        }
        if !(self.avg_speed_kmh.is_finite() && self.avg_speed_kmh > 0.0) {
            return Err(DispatchError::InvalidParams(format!(
                "avg_speed_kmh must be positive, got {}",
                self.avg_speed_kmh
            )));
        }
        Ok(())
    }

    /// Parse parameters from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> DispatchResult<Self> {
        let params: RankingParams = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }
}
