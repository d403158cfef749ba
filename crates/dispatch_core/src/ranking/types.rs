use crate::drivers::RankedDriver;

/// Business outcome of an automatic assignment attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum DispatchOutcome {
    /// The nearest reachable driver.
    Assigned(RankedDriver),
    /// Nothing to assign: the list was empty or every driver was unreachable.
    NoDriversAvailable,
}

impl DispatchOutcome {
    pub fn assigned(&self) -> Option<&RankedDriver> {
        match self {
            DispatchOutcome::Assigned(driver) => Some(driver),
            DispatchOutcome::NoDriversAvailable => None,
        }
    }
}

/// Pick the top reachable driver from an already ranked list.
pub fn select_nearest(ranked: &[RankedDriver]) -> DispatchOutcome {
    match ranked.iter().find(|driver| driver.is_reachable()) {
        Some(driver) => {
            log::debug!(
                "assigning driver {} at {:.2} km",
                driver.candidate.id,
                driver.distance_km
            );
            DispatchOutcome::Assigned(driver.clone())
        }
        None => {
            log::debug!("no reachable drivers among {} ranked", ranked.len());
            DispatchOutcome::NoDriversAvailable
        }
    }
}
