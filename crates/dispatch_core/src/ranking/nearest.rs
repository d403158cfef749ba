use std::cmp::Ordering;

use crate::drivers::{
    DriverCandidate, IncidentLocation, RankedDriver, UNREACHABLE_DISTANCE_KM,
};
use crate::error::DispatchResult;
use crate::geo::haversine_km_with_radius;
use crate::params::RankingParams;

use super::algorithm::RankingPolicy;

/// Nearest-driver ranking.
///
/// Sort keys, best first:
/// 1. haversine distance to the incident, ascending (unreachable last)
/// 2. `Internal` before `External` when distances are equal
///    (skipped if `prefer_internal` is off)
/// 3. input order
#[derive(Debug, Clone, Default)]
pub struct NearestDriverRanking {
    params: RankingParams,
}

impl NearestDriverRanking {
    /// Fails with [`crate::DispatchError::InvalidParams`] for a non-positive
    /// or non-finite radius or speed.
    pub fn new(params: RankingParams) -> DispatchResult<Self> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &RankingParams {
        &self.params
    }

    /// Straight-line pickup ETA at the configured average speed.
    pub fn eta_ms(&self, ranked: &RankedDriver) -> Option<u64> {
        ranked.estimated_eta_ms(self.params.avg_speed_kmh)
    }

    fn distance_for(&self, incident: &IncidentLocation, candidate: &DriverCandidate) -> f64 {
        match candidate.valid_location() {
            Some(location) => {
                haversine_km_with_radius(incident.point(), location, self.params.earth_radius_km)
            }
            None => {
                log::warn!(
                    "driver {} has no usable location ({:?}), ranking as unreachable",
                    candidate.id,
                    candidate.location
                );
                UNREACHABLE_DISTANCE_KM
            }
        }
    }

    fn compare(&self, a: &RankedDriver, b: &RankedDriver) -> Ordering {
        let by_distance = a.distance_km.total_cmp(&b.distance_km);
        if !self.params.prefer_internal {
            return by_distance;
        }
        by_distance.then_with(|| {
            a.candidate
                .provider_type
                .tie_break_rank()
                .cmp(&b.candidate.provider_type.tie_break_rank())
        })
    }
}

impl RankingPolicy for NearestDriverRanking {
    fn rank(
        &self,
        incident: &IncidentLocation,
        candidates: &[DriverCandidate],
    ) -> Vec<RankedDriver> {
        log::debug!(
            "ranking {} candidates for incident at ({}, {})",
            candidates.len(),
            incident.point().latitude,
            incident.point().longitude
        );

        let mut ranked: Vec<RankedDriver> = candidates
            .iter()
            .map(|candidate| RankedDriver {
                distance_km: self.distance_for(incident, candidate),
                candidate: candidate.clone(),
            })
            .collect();

        // sort_by is stable, so full ties keep their input order.
        ranked.sort_by(|a, b| self.compare(a, b));

        log::debug!(
            "ranked {} candidates, {} reachable",
            ranked.len(),
            ranked.iter().filter(|r| r.is_reachable()).count()
        );
        ranked
    }
}
