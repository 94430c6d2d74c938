//! Tests de contrato de la API en modo demo (sin base de datos).
//!
//! El modo demo responde con el dataset fijo, así que estos tests
//! cubren el contrato completo de los endpoints sin PostgreSQL.

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::{json, Value};

use route_manager::config::environment::EnvironmentConfig;
use route_manager::routes::create_app;
use route_manager::state::AppState;

/// App de test en modo demo: sin pool y sin host de imágenes
fn create_test_server() -> TestServer {
    let config = EnvironmentConfig {
        environment: "test".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: None,
        imgbb_api_key: None,
    };
    let state = AppState::new(config, None, None);
    TestServer::new(create_app(state)).expect("failed to start test server")
}

#[tokio::test]
async fn test_health_reports_demo_mode() {
    let server = create_test_server();
    let response = server.get("/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["service"], "route-manager");
    assert_eq!(body["status"], "ok");
    assert_eq!(body["storage"], "demo");
}

#[tokio::test]
async fn test_lists_demo_locations() {
    let server = create_test_server();
    let response = server.get("/api/locations").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let locations = body.as_array().expect("array body");
    assert_eq!(locations.len(), 11);
    assert_eq!(locations[0]["location"], "Wisma Cimb");
    assert_eq!(locations[0]["powerMode"], "Daily");

    // la cocina central conserva sus coordenadas
    let kitchen = locations
        .iter()
        .find(|l| l["location"] == "QL Kitchen")
        .expect("QL Kitchen present");
    assert_eq!(kitchen["routeId"], 1);
    assert!(kitchen["latitude"].as_f64().is_some());
}

#[tokio::test]
async fn test_filters_locations_by_route() {
    let server = create_test_server();
    let response = server
        .get("/api/locations")
        .add_query_param("routeId", 2)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let locations = body.as_array().unwrap();
    assert_eq!(locations.len(), 3);
    assert!(locations.iter().all(|l| l["routeId"] == 2));
}

#[tokio::test]
async fn test_invalid_route_filter_is_rejected() {
    let server = create_test_server();
    let response = server
        .get("/api/locations")
        .add_query_param("routeId", "not-a-number")
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_lists_routes_with_nested_locations() {
    let server = create_test_server();
    let response = server.get("/api/routes").await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let routes = body.as_array().unwrap();
    assert_eq!(routes.len(), 3);
    assert_eq!(routes[0]["route"], "KL 7");
    assert_eq!(routes[0]["shift"], "PM");
    assert_eq!(routes[0]["locations"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_bulk_save_partitions_by_placeholder_id() {
    let server = create_test_server();
    let response = server
        .put("/api/locations")
        .json(&json!({
            "locations": [
                { "id": 1, "no": 1, "code": "34", "location": "Wisma Cimb",
                  "delivery": "Daily", "powerMode": "Daily", "images": [] },
                { "id": 1_734_953_400_000_i64, "no": 12, "code": "77",
                  "location": "New Spot", "delivery": "Weekly",
                  "powerMode": "Alt 1", "images": [] },
                { "id": 1_734_953_400_001_i64, "no": 13, "code": "78",
                  "location": "Another Spot", "delivery": "Daily",
                  "powerMode": "Daily", "images": [] }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Locations saved successfully");
    assert_eq!(body["created"], 2);
    assert_eq!(body["updated"], 1);
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_bulk_save_rejects_malformed_body() {
    let server = create_test_server();

    // sin la clave `locations`
    let response = server
        .put("/api/locations")
        .json(&json!({ "items": [] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["error"], "Bad Request");
    assert_eq!(body["message"], "Invalid data format");

    // `locations` no es un array
    let response = server
        .put("/api/locations")
        .json(&json!({ "locations": 42 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bulk_save_routes_reports_counts() {
    let server = create_test_server();
    let response = server
        .put("/api/routes")
        .json(&json!({
            "routes": [
                { "id": 1, "route": "KL 7", "shift": "PM", "warehouse": "3AVK04" },
                { "id": 1_755_000_000_000_i64, "route": "KL 10", "shift": "AM",
                  "warehouse": "3AVK10" }
            ]
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "Routes saved successfully");
    assert_eq!(body["created"], 1);
    assert_eq!(body["updated"], 1);
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_demo_mode_accepts_writes_without_persisting() {
    let server = create_test_server();

    let response = server
        .post("/api/locations")
        .json(&json!({ "code": "ZZ", "location": "Ephemeral" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let created: Value = response.json();
    assert_eq!(created["location"], "Ephemeral");
    // defaults sustituidos por el controller
    assert_eq!(created["delivery"], "Daily");
    assert_eq!(created["no"], 0);
    // el eco lleva un id provisional, no uno de base de datos
    assert!(created["id"].as_i64().unwrap() > 1_000_000_000_000);

    // el dataset fijo no cambió
    let listing: Value = server.get("/api/locations").await.json();
    assert_eq!(listing.as_array().unwrap().len(), 11);
}

#[tokio::test]
async fn test_create_route_returns_created() {
    let server = create_test_server();
    let response = server
        .post("/api/routes")
        .json(&json!({ "route": "KL 9", "shift": "AM", "warehouse": "3AVK09" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["route"], "KL 9");
    assert_eq!(body["warehouse"], "3AVK09");
}

#[tokio::test]
async fn test_delete_requires_id() {
    let server = create_test_server();

    let response = server.delete("/api/locations").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Location ID is required");

    let response = server.delete("/api/routes").json(&json!({})).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["message"], "Route ID is required");
}

#[tokio::test]
async fn test_delete_in_demo_mode_acknowledges() {
    let server = create_test_server();
    let response = server.delete("/api/routes").json(&json!({ "id": 2 })).await;

    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Route deleted successfully");
}

#[tokio::test]
async fn test_unknown_path_is_404_json() {
    let server = create_test_server();
    let response = server.get("/api/unknown").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let body: Value = response.json();
    assert_eq!(body["error"], "Not found");
}

#[tokio::test]
async fn test_unsupported_method_is_405_json() {
    let server = create_test_server();
    let response = server.patch("/api/locations").json(&json!({})).await;

    assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

    let body: Value = response.json();
    assert_eq!(body["error"], "Method not allowed");
}

#[tokio::test]
async fn test_cors_headers_present() {
    let server = create_test_server();
    let response = server
        .get("/api/locations")
        .add_header(
            header::ORIGIN,
            HeaderValue::from_static("https://frontend.example.com"),
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key("access-control-allow-origin"));
}
