mod support;

use dispatch_core::ranking::available_only;
use dispatch_core::registry::{incident_from_order, OrderRecord, RegistrySnapshot, NOT_AVAILABLE};
use dispatch_core::{rank_drivers, select_nearest, DispatchError, ProviderType};
use support::fixtures::ids;

const DRIVERS: &str = r#"[
    {
        "id": "d-ext",
        "dni": "V-200",
        "providerId": "p-ext",
        "isAvailable": true,
        "driverLocation": { "latitude": 10.5, "longitude": -66.93 }
    },
    {
        "id": "d-int",
        "dni": "V-100",
        "providerId": "p-int",
        "isAvailable": true,
        "driverLocation": { "latitude": 10.5, "longitude": -66.93 }
    },
    {
        "id": "d-busy",
        "dni": "V-300",
        "providerId": "p-int",
        "isAvailable": false,
        "driverLocation": { "latitude": 10.4956, "longitude": -66.9241 }
    },
    {
        "id": "d-lost",
        "providerId": "p-unknown",
        "isAvailable": true
    }
]"#;

const USERS: &str = r#"[
    { "id": "d-ext", "name": "Carla" },
    { "id": "d-int", "name": "Pedro" },
    { "id": "d-busy", "name": "Rosa" }
]"#;

const PROVIDERS: &str = r#"[
    { "_id": "p-int", "providerType": "Interno" },
    { "_id": "p-ext", "providerType": "Externo" }
]"#;

const ORDER: &str = r#"{
    "id": "order-1",
    "incidentAddress": { "latitude": 10.4956, "longitude": -66.9241 }
}"#;

#[test]
fn snapshot_joins_names_dni_and_provider_types() {
    let snapshot = RegistrySnapshot::from_json(DRIVERS, USERS, PROVIDERS).expect("payloads");
    let candidates = snapshot.candidates();

    assert_eq!(candidates.len(), 4);
    assert_eq!(candidates[0].name, "Carla");
    assert_eq!(candidates[0].provider_type, ProviderType::External);
    assert_eq!(candidates[1].provider_type, ProviderType::Internal);
    assert_eq!(candidates[3].name, NOT_AVAILABLE);
    assert_eq!(candidates[3].dni, NOT_AVAILABLE);
    assert_eq!(candidates[3].provider_type, ProviderType::External);
    assert!(candidates[3].location.is_none());
}

#[test]
fn order_to_assignment_end_to_end() {
    let snapshot = RegistrySnapshot::from_json(DRIVERS, USERS, PROVIDERS).expect("payloads");
    let order: OrderRecord = serde_json::from_str(ORDER).expect("order");

    let incident = incident_from_order(&order).expect("incident");
    let available = available_only(&snapshot.candidates());
    let ranked = rank_drivers(incident.point(), &available).expect("ranking");

    assert_eq!(ids(&ranked), vec!["d-int", "d-ext", "d-lost"]);
    assert_eq!(ranked[0].to_string(), format!("Pedro (V-100) - {:.2} km", ranked[0].distance_km));

    let outcome = select_nearest(&ranked);
    assert_eq!(
        outcome.assigned().map(|d| d.candidate.id.as_str()),
        Some("d-int")
    );
}

#[test]
fn malformed_payload_is_a_json_error() {
    let result = RegistrySnapshot::from_json("[{", USERS, PROVIDERS);
    assert!(matches!(result, Err(DispatchError::Json(_))));
}

#[test]
fn order_with_out_of_range_incident_is_rejected() {
    let order: OrderRecord =
        serde_json::from_str(r#"{ "incidentAddress": { "latitude": 200.0, "longitude": 0.0 } }"#)
            .expect("order");
    assert!(matches!(
        incident_from_order(&order),
        Err(DispatchError::InvalidInput(_))
    ));
}

#[test]
fn empty_dni_falls_back_to_placeholder() {
    let drivers = r#"[{ "id": "d-1", "dni": "", "providerId": "p-int", "isAvailable": true }]"#;

    let snapshot = RegistrySnapshot::from_json(drivers, USERS, PROVIDERS).expect("payloads");
    let candidates = snapshot.candidates();

    assert_eq!(candidates[0].dni, NOT_AVAILABLE);
    assert_eq!(candidates[0].provider_type, ProviderType::Internal);
}
