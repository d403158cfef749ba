//! Ranking inputs and outputs: candidates, incidents and ranked drivers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DispatchError, DispatchResult};
use crate::geo::GeoPoint;

/// Distance assigned to candidates whose location is missing or invalid.
/// Sorts after every finite distance.
pub const UNREACHABLE_DISTANCE_KM: f64 = f64::INFINITY;

/// Affiliation of the provider a driver works for.
///
/// Registry labels are `"Interno"` and `"Externo"`. Unknown labels are treated
/// as external so only the in-house fleet gets the tie-break preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ProviderType {
    Internal,
    #[default]
    External,
}

impl ProviderType {
    pub fn from_label(label: &str) -> Self {
        match label.trim() {
            "Interno" => ProviderType::Internal,
            _ => ProviderType::External,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ProviderType::Internal => "Interno",
            ProviderType::External => "Externo",
        }
    }

    /// Tie-break rank: lower sorts first.
    pub(crate) fn tie_break_rank(self) -> u8 {
        match self {
            ProviderType::Internal => 0,
            ProviderType::External => 1,
        }
    }
}

impl From<String> for ProviderType {
    fn from(label: String) -> Self {
        Self::from_label(&label)
    }
}

impl From<ProviderType> for String {
    fn from(provider_type: ProviderType) -> Self {
        provider_type.label().to_string()
    }
}

/// One dispatchable driver, built fresh for each ranking call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverCandidate {
    pub id: String,
    pub name: String,
    pub dni: String,
    pub location: Option<GeoPoint>,
    pub provider_type: ProviderType,
    pub is_available: bool,
}

impl DriverCandidate {
    pub fn new(id: impl Into<String>, name: impl Into<String>, dni: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            dni: dni.into(),
            location: None,
            provider_type: ProviderType::default(),
            is_available: true,
        }
    }

    pub fn with_location(mut self, location: GeoPoint) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_provider_type(mut self, provider_type: ProviderType) -> Self {
        self.provider_type = provider_type;
        self
    }

    pub fn with_availability(mut self, is_available: bool) -> Self {
        self.is_available = is_available;
        self
    }

    /// The candidate's location if present and within coordinate bounds.
    pub fn valid_location(&self) -> Option<GeoPoint> {
        self.location.filter(GeoPoint::is_valid)
    }
}

/// Where the towing incident happened. Always holds a valid point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncidentLocation(GeoPoint);

impl IncidentLocation {
    pub fn try_new(point: GeoPoint) -> DispatchResult<Self> {
        if point.is_valid() {
            Ok(Self(point))
        } else {
            Err(DispatchError::InvalidInput(format!(
                "incident location out of range: ({}, {})",
                point.latitude, point.longitude
            )))
        }
    }

    pub fn point(&self) -> GeoPoint {
        self.0
    }
}

impl TryFrom<GeoPoint> for IncidentLocation {
    type Error = DispatchError;

    fn try_from(point: GeoPoint) -> DispatchResult<Self> {
        Self::try_new(point)
    }
}

/// A candidate annotated with its distance to the incident.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedDriver {
    pub candidate: DriverCandidate,
    /// Great-circle distance in km, or [`UNREACHABLE_DISTANCE_KM`].
    pub distance_km: f64,
}

impl RankedDriver {
    pub fn is_reachable(&self) -> bool {
        self.distance_km.is_finite()
    }

    /// Straight-line pickup ETA at `avg_speed_kmh`, never below one second.
    pub fn estimated_eta_ms(&self, avg_speed_kmh: f64) -> Option<u64> {
        if !self.is_reachable() || !avg_speed_kmh.is_finite() || avg_speed_kmh <= 0.0 {
            return None;
        }
        if self.distance_km <= 0.0 {
            return Some(1_000);
        }
        Some(((self.distance_km / avg_speed_kmh) * 3_600_000.0).max(1_000.0) as u64)
    }
}

impl fmt::Display for RankedDriver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_reachable() {
            write!(
                f,
                "{} ({}) - {:.2} km",
                self.candidate.name, self.candidate.dni, self.distance_km
            )
        } else {
            write!(f, "{} ({}) - unreachable", self.candidate.name, self.candidate.dni)
        }
    }
}
