//! Execution tests for get-by-id operations.
//!
//! Uses wiremock to mock the MBTA API and test the actual request and
//! decode flow.

use mbtapi::{
    ClientConfig, Get, GetStopParams, GetVehicleParams, MbtaClient, MbtaError, Relation, Stop,
    Vehicle, VehicleInclude, VehicleStatus,
};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MbtaClient {
    MbtaClient::new(ClientConfig {
        base_url: Some(server.uri()),
        ..Default::default()
    })
    .unwrap()
}

#[tokio::test]
async fn test_get_stop_with_sparse_fieldset() {
    let mock_server = MockServer::start().await;

    // Only the requested fields come back; everything else takes its
    // zero value.
    let body = serde_json::json!({
        "data": {
            "id": "55",
            "type": "stop",
            "attributes": {
                "name": "Washington St opp Ruggles St",
                "latitude": 42.336361
            },
            "relationships": {}
        }
    });

    Mock::given(method("GET"))
        .and(path("/stops/55"))
        .and(query_param("fields[stop]", "name,latitude"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = GetStopParams {
        fields: vec!["name".to_string(), "latitude".to_string()],
        ..Default::default()
    };
    let stop = Stop::get(&client, "55", &params).await.unwrap();

    assert_eq!(stop.id, "55");
    assert_eq!(stop.name, "Washington St opp Ruggles St");
    assert_eq!(stop.latitude, 42.336361);
    assert_eq!(stop.longitude, 0.0);
    assert!(stop.parent_station.is_absent());
}

#[tokio::test]
async fn test_get_vehicle_resolves_included_trip() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "data": {
            "id": "y1799",
            "type": "vehicle",
            "attributes": {
                "bearing": 174.0,
                "current_status": "IN_TRANSIT_TO",
                "current_stop_sequence": 18,
                "direction_id": 1,
                "label": "1799",
                "latitude": 42.32779884338379,
                "longitude": -71.09859466552734,
                "updated_at": "2019-06-25T15:28:37-04:00"
            },
            "relationships": {
                "trip": { "data": { "id": "40956686", "type": "trip" } },
                "stop": { "data": { "id": "1323", "type": "stop" } },
                "route": { "data": { "id": "39", "type": "route" } }
            }
        },
        "included": [
            {
                "id": "40956686",
                "type": "trip",
                "attributes": {
                    "bikes_allowed": 1,
                    "block_id": "S39-61",
                    "direction_id": 1,
                    "headsign": "Back Bay",
                    "name": "",
                    "wheelchair_accessible": 1
                },
                "relationships": {}
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/vehicles/y1799"))
        .and(query_param("include", "trip"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = GetVehicleParams {
        include: vec![VehicleInclude::Trip],
        ..Default::default()
    };
    let vehicle = Vehicle::get(&client, "y1799", &params).await.unwrap();

    assert_eq!(vehicle.current_status, Some(VehicleStatus::InTransitTo));
    // The included trip resolves in full; the non-included stop stays a
    // stub carrying only its ID.
    match &vehicle.trip {
        Relation::Full(trip) => assert_eq!(trip.headsign, "Back Bay"),
        other => panic!("expected full trip, got {other:?}"),
    }
    assert!(matches!(&vehicle.stop, Relation::Stub { id } if id == "1323"));
}

#[tokio::test]
async fn test_get_empty_id_fails_without_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = Stop::get(&client, "", &GetStopParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, MbtaError::MustSpecifyId));
}

#[tokio::test]
async fn test_get_data_null_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops/no-such-stop"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": null })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = Stop::get(&client, "no-such-stop", &GetStopParams::default())
        .await
        .unwrap_err();

    match err {
        MbtaError::NotFound { resource_type, id } => {
            assert_eq!(resource_type, "stop");
            assert_eq!(id, "no-such-stop");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_api_key_sent_as_header() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops/55"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "id": "55", "type": "stop", "attributes": {}, "relationships": {} }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = MbtaClient::new(ClientConfig {
        base_url: Some(mock_server.uri()),
        api_key: Some("test-key".to_string()),
        ..Default::default()
    })
    .unwrap();

    Stop::get(&client, "55", &GetStopParams::default())
        .await
        .unwrap();
}
