#![allow(dead_code)]

use dispatch_core::test_helpers::{caracas, caracas_nearby};
use dispatch_core::{DriverCandidate, GeoPoint, ProviderType};

/// Seeded incident so every test reuses the same geography.
pub fn incident() -> GeoPoint {
    caracas()
}

/// Builder for driver fixtures.
#[derive(Clone, Debug)]
pub struct DriverFixture {
    id: String,
    location: Option<GeoPoint>,
    provider_type: ProviderType,
    is_available: bool,
}

impl DriverFixture {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            location: Some(caracas_nearby()),
            provider_type: ProviderType::Internal,
            is_available: true,
        }
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.location = Some(GeoPoint::new(latitude, longitude));
        self
    }

    pub fn without_location(mut self) -> Self {
        self.location = None;
        self
    }

    pub fn external(mut self) -> Self {
        self.provider_type = ProviderType::External;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }

    pub fn build(self) -> DriverCandidate {
        let mut candidate = DriverCandidate::new(
            self.id.clone(),
            format!("Driver {}", self.id),
            format!("V-{}", self.id),
        )
        .with_provider_type(self.provider_type)
        .with_availability(self.is_available);
        candidate.location = self.location;
        candidate
    }
}

pub fn ids(ranked: &[dispatch_core::RankedDriver]) -> Vec<&str> {
    ranked.iter().map(|r| r.candidate.id.as_str()).collect()
}
