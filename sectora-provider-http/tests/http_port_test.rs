//! Integration tests for the REST sector backend against a mock server.

use httpmock::prelude::*;
use reqwest::{Client, StatusCode};
use sectora_core::{Coordinates, PortError, Sector, SectorDraft, SectorId, SectorService};
use sectora_provider_http::{HttpSectorPort, port};
use serde_json::json;

fn sectors_body() -> serde_json::Value {
    json!({
        "sectors": [
            {
                "id": "s1",
                "name": "Centro",
                "address": "Calle 26 # 13",
                "scheduleFromMinutes": 480,
                "scheduleToMinutes": 1200,
                "coordinates": { "lat": 4.710989, "lng": -74.072092 }
            },
            {
                "id": "s2",
                "name": "Suba",
                "address": "Av Suba # 100",
                "scheduleFromMinutes": 600,
                "scheduleToMinutes": 900,
                "coordinates": { "lat": 4.8, "lng": -74.3 }
            }
        ]
    })
}

#[tokio::test]
async fn list_decodes_sector_envelope() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/sectors");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(sectors_body());
        })
        .await;

    let backend = HttpSectorPort::new(Client::new(), server.url("/api/"));
    let sectors = sectora_core::SectorPort::list(&backend).await.expect("list sectors");

    mock.assert_async().await;
    assert_eq!(sectors.len(), 2);
    assert_eq!(sectors[0].id, Some(SectorId("s1".to_owned())));
    assert_eq!(sectors[1].schedule_from_minutes, 600);
    assert_eq!(sectors[1].coordinates, Coordinates::new(4.8, -74.3));
}

#[tokio::test]
async fn register_posts_camel_case_sector() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/sectors").json_body(json!({
                "name": "Centro",
                "address": "Calle 26 # 13",
                "scheduleFromMinutes": 480,
                "scheduleToMinutes": 1200,
                "coordinates": { "lat": 4.710989, "lng": -74.072092 }
            }));
            then.status(201)
                .header("Content-Type", "application/json")
                .json_body(sectors_body());
        })
        .await;

    let service = SectorService::new(port(Client::new(), server.url("/api")));
    let draft = SectorDraft {
        name: "Centro".to_owned(),
        address: "Calle 26 # 13".to_owned(),
        schedule_from: "08:00".to_owned(),
        schedule_to: "20:00".to_owned(),
        coordinates: Some(Coordinates::new(4.710_989, -74.072_092)),
    };

    let sectors: Vec<Sector> = service.register(&draft).await.expect("register sector");

    mock.assert_async().await;
    assert_eq!(sectors.len(), 2, "server returns the full list");
}

#[tokio::test]
async fn invalid_draft_is_not_posted() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/api/sectors");
            then.status(201).json_body(sectors_body());
        })
        .await;

    let service = SectorService::new(port(Client::new(), server.url("/api")));
    let draft = SectorDraft {
        name: "Centro".to_owned(),
        address: "Calle 26 # 13".to_owned(),
        schedule_from: "20:00".to_owned(),
        schedule_to: "08:00".to_owned(),
        coordinates: Some(Coordinates::new(4.710_989, -74.072_092)),
    };

    let result = service.register(&draft).await;

    assert!(matches!(result, Err(PortError::Invalid(_))), "got {result:?}");
    assert_eq!(mock.hits_async().await, 0, "backend must not be called");
}

#[tokio::test]
async fn error_status_carries_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/sectors");
            then.status(503).body("maintenance");
        })
        .await;

    let service = SectorService::new(port(Client::new(), server.url("/api")));
    let result = service.load().await;

    match result {
        Err(PortError::Status { status, body }) => {
            assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_payload_is_a_network_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/api/sectors");
            then.status(200)
                .header("Content-Type", "application/json")
                .body(r#"{"items": []}"#);
        })
        .await;

    let service = SectorService::new(port(Client::new(), server.url("/api")));
    let result = service.load().await;

    assert!(matches!(result, Err(PortError::Network(_))), "got {result:?}");
}
