//! Dispatch fixtures: a fixed Caracas incident and seeded driver fleets
//! shared by unit tests, integration tests and benchmarks.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::drivers::{DriverCandidate, ProviderType};
use crate::geo::GeoPoint;

/// Plaza Venezuela, Caracas. Used as the default incident across tests.
pub const CARACAS: (f64, f64) = (10.4956, -66.9241);

pub fn caracas() -> GeoPoint {
    GeoPoint::new(CARACAS.0, CARACAS.1)
}

/// A point roughly 0.8 km north-west of [`caracas`].
pub fn caracas_nearby() -> GeoPoint {
    GeoPoint::new(10.5000, -66.9300)
}

/// Build `count` candidates scattered within about `spread_deg` degrees of
/// `center`. Every fifth driver has no location; providers alternate.
pub fn scattered_fleet(
    center: GeoPoint,
    count: usize,
    spread_deg: f64,
    seed: u64,
) -> Vec<DriverCandidate> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let provider_type = if i % 2 == 0 {
                ProviderType::Internal
            } else {
                ProviderType::External
            };
            let candidate = DriverCandidate::new(
                format!("driver-{i}"),
                format!("Driver {i}"),
                format!("V-{i:08}"),
            )
            .with_provider_type(provider_type);
            if i % 5 == 4 {
                return candidate;
            }
            let lat = center.latitude + rng.gen_range(-spread_deg..=spread_deg);
            let lng = center.longitude + rng.gen_range(-spread_deg..=spread_deg);
            candidate.with_location(GeoPoint::new(lat, lng))
        })
        .collect()
}
