//! Nearest-driver ranking for tow dispatch.
//!
//! Given an incident location and a snapshot of candidate drivers, the
//! [`ranking`] module computes each driver's great-circle distance to the
//! incident and orders them for "assign nearest driver" decisions. The
//! [`registry`] module turns raw driver/user/provider/order records into the
//! inputs the ranking consumes.

pub mod drivers;
pub mod error;
pub mod geo;
pub mod params;
pub mod ranking;
pub mod registry;

#[cfg(any(test, feature = "test-helpers"))]
pub mod test_helpers;

pub use drivers::{DriverCandidate, IncidentLocation, ProviderType, RankedDriver};
pub use error::{DispatchError, DispatchResult};
pub use geo::GeoPoint;
pub use params::RankingParams;
pub use ranking::{rank_drivers, select_nearest, DispatchOutcome};
