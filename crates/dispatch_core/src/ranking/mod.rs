pub mod algorithm;
pub mod nearest;
pub mod types;

pub use algorithm::RankingPolicy;
pub use nearest::NearestDriverRanking;
pub use types::{select_nearest, DispatchOutcome};

use crate::drivers::{DriverCandidate, IncidentLocation, RankedDriver};
use crate::error::DispatchResult;
use crate::geo::GeoPoint;

/// Rank `candidates` by great-circle distance to `incident`, nearest first.
///
/// Fails with [`crate::DispatchError::InvalidInput`] only when `incident` is
/// out of range. Every candidate appears in the output; those without a
/// usable location carry the unreachable sentinel and sort last.
pub fn rank_drivers(
    incident: GeoPoint,
    candidates: &[DriverCandidate],
) -> DispatchResult<Vec<RankedDriver>> {
    let incident = IncidentLocation::try_new(incident)?;
    Ok(NearestDriverRanking::default().rank(&incident, candidates))
}

/// Candidates flagged as available, in input order.
pub fn available_only(candidates: &[DriverCandidate]) -> Vec<DriverCandidate> {
    candidates
        .iter()
        .filter(|candidate| candidate.is_available)
        .cloned()
        .collect()
}
