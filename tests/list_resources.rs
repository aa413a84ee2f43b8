//! Execution tests for list operations.

use mbtapi::{
    ClientConfig, List, ListPredictionsParams, ListRoutesParams, ListSchedulesParams,
    ListStopsParams, MbtaClient, MbtaError, Prediction, Route, RouteType, Schedule, Sort, Stop,
    StopSortKey,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> MbtaClient {
    MbtaClient::new(ClientConfig {
        base_url: Some(server.uri()),
        ..Default::default()
    })
    .unwrap()
}

fn stop_object(id: &str, name: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "type": "stop",
        "attributes": { "name": name },
        "relationships": {}
    })
}

#[tokio::test]
async fn test_list_stops_with_filters_and_sort() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "data": [stop_object("70061", "Alewife"), stop_object("70063", "Davis")]
    });

    Mock::given(method("GET"))
        .and(path("/stops"))
        .and(query_param("page[offset]", "40"))
        .and(query_param("page[limit]", "20"))
        .and(query_param("sort", "-name"))
        .and(query_param("filter[route]", "Red,Orange"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = ListStopsParams {
        page_offset: Some(40),
        page_limit: Some(20),
        sort: Some(Sort::desc(StopSortKey::Name)),
        filter_route: vec!["Red".to_string(), "Orange".to_string()],
        ..Default::default()
    };
    let stops = Stop::list(&client, &params).await.unwrap();

    assert_eq!(stops.len(), 2);
    assert_eq!(stops[0].name, "Alewife");
    assert_eq!(stops[1].name, "Davis");
}

#[tokio::test]
async fn test_list_empty_collection_is_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let routes = Route::list(&client, &ListRoutesParams::default())
        .await
        .unwrap();

    assert!(routes.is_empty());
}

#[tokio::test]
async fn test_list_route_type_filter_renders_numeric() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/routes"))
        .and(query_param("filter[type]", "0,1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({ "data": [] })),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = ListRoutesParams {
        filter_type: vec![RouteType::LightRail, RouteType::Subway],
        ..Default::default()
    };
    Route::list(&client, &params).await.unwrap();
}

#[tokio::test]
async fn test_unfiltered_predictions_fail_without_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = Prediction::list(&client, &ListPredictionsParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, MbtaError::InvalidConfig(_)));
}

#[tokio::test]
async fn test_unfiltered_schedules_fail_without_network_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = Schedule::list(&client, &ListSchedulesParams::default())
        .await
        .unwrap_err();

    assert!(matches!(err, MbtaError::InvalidConfig(_)));
}

#[tokio::test]
async fn test_filtered_schedules_decode() {
    let mock_server = MockServer::start().await;

    let body = serde_json::json!({
        "data": [{
            "id": "schedule-37476885-70061-1",
            "type": "schedule",
            "attributes": {
                "arrival_time": "2019-06-24T05:15:00-04:00",
                "departure_time": "2019-06-24T05:15:00-04:00",
                "direction_id": 1,
                "drop_off_type": 0,
                "pickup_type": 0,
                "stop_sequence": 1,
                "timepoint": true
            },
            "relationships": {
                "route": { "data": { "id": "Red", "type": "route" } },
                "stop": { "data": { "id": "70061", "type": "stop" } },
                "trip": { "data": { "id": "37476885", "type": "trip" } }
            }
        }]
    });

    Mock::given(method("GET"))
        .and(path("/schedules"))
        .and(query_param("filter[stop]", "70061"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let params = ListSchedulesParams {
        filter_stop: vec!["70061".to_string()],
        ..Default::default()
    };
    let schedules = Schedule::list(&client, &params).await.unwrap();

    assert_eq!(schedules.len(), 1);
    assert!(schedules[0].timepoint);
    assert_eq!(schedules[0].stop.id(), Some("70061"));
}
