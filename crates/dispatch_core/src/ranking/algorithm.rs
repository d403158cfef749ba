use crate::drivers::{DriverCandidate, IncidentLocation, RankedDriver};

/// Orders driver candidates for a dispatch decision.
///
/// Implementations must be pure: the same inputs always produce the same
/// output, no candidate is dropped, and the input slice is left untouched.
pub trait RankingPolicy: Send + Sync {
    /// Annotate every candidate with its distance to `incident` and return
    /// them best-first.
    fn rank(&self, incident: &IncidentLocation, candidates: &[DriverCandidate])
        -> Vec<RankedDriver>;
}
