//! Assembling ranking inputs from registry records.
//!
//! Driver, user and provider payloads come from separate registries and are
//! joined by id: the user registry supplies the display name, the provider
//! registry supplies the affiliation type. Orders carry the incident address.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::drivers::{DriverCandidate, IncidentLocation, ProviderType};
use crate::error::{DispatchError, DispatchResult};
use crate::geo::GeoPoint;

/// Placeholder for names and DNIs the registries do not provide.
pub const NOT_AVAILABLE: &str = "No disponible";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRecord {
    pub id: String,
    #[serde(default)]
    pub dni: Option<String>,
    #[serde(default)]
    pub provider_id: Option<String>,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub driver_location: Option<GeoPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub provider_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub incident_address: Option<GeoPoint>,
}

/// One consistent read of the three registries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrySnapshot {
    pub drivers: Vec<DriverRecord>,
    pub users: Vec<UserRecord>,
    pub providers: Vec<ProviderRecord>,
}

impl RegistrySnapshot {
    pub fn from_json(
        drivers_json: &str,
        users_json: &str,
        providers_json: &str,
    ) -> DispatchResult<Self> {
        Ok(Self {
            drivers: serde_json::from_str(drivers_json)?,
            users: serde_json::from_str(users_json)?,
            providers: serde_json::from_str(providers_json)?,
        })
    }

    pub fn candidates(&self) -> Vec<DriverCandidate> {
        build_candidates(&self.drivers, &self.users, &self.providers)
    }
}

/// Join driver records with users and providers, preserving driver order.
pub fn build_candidates(
    drivers: &[DriverRecord],
    users: &[UserRecord],
    providers: &[ProviderRecord],
) -> Vec<DriverCandidate> {
    let names: HashMap<&str, &str> = users
        .iter()
        .map(|user| (user.id.as_str(), user.name.as_str()))
        .collect();
    let provider_types: HashMap<&str, ProviderType> = providers
        .iter()
        .map(|provider| {
            let provider_type = provider
                .provider_type
                .as_deref()
                .map(ProviderType::from_label)
                .unwrap_or_default();
            (provider.id.as_str(), provider_type)
        })
        .collect();

    drivers
        .iter()
        .map(|driver| {
            let provider_type = driver
                .provider_id
                .as_deref()
                .and_then(|id| provider_types.get(id).copied())
                .unwrap_or_default();
            DriverCandidate {
                id: driver.id.clone(),
                name: names
                    .get(driver.id.as_str())
                    .copied()
                    .unwrap_or(NOT_AVAILABLE)
                    .to_string(),
                dni: driver
                    .dni
                    .clone()
                    .filter(|dni| !dni.is_empty())
                    .unwrap_or_else(|| NOT_AVAILABLE.to_string()),
                location: driver.driver_location,
                provider_type,
                is_available: driver.is_available,
            }
        })
        .collect()
}

/// The order's incident location, validated.
pub fn incident_from_order(order: &OrderRecord) -> DispatchResult<IncidentLocation> {
    let point = order.incident_address.ok_or_else(|| {
        DispatchError::InvalidInput(format!(
            "order {} has no incident address",
            order.id.as_deref().unwrap_or("<unknown>")
        ))
    })?;
    IncidentLocation::try_new(point)
}
