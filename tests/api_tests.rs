mod common;

use axum::http::StatusCode;
use serde_json::{json, Value};

use auction_facade::state::AppState;
use common::{operation, spawn_legacy, test_config, InMemoryLegacy, TestApp};

const VEHICLE_BODY: &str = r#"{
    "brand": "RENAULT",
    "model": "CLIO 16VS",
    "modelYear": 2007,
    "manufacturingYear": 2007,
    "lot": {"id": "0196", "vehicleLotId": "56248"}
}"#;

fn ids(body: &Value) -> Vec<i64> {
    body.as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());
    let response = app.get("/auctions/v1/health-check").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(
        response.json(),
        json!({"status": "ok", "dependencies": {"legacyApi": "ok"}})
    );
}

#[tokio::test]
async fn test_health_check_with_legacy_down() {
    let app = TestApp::new(InMemoryLegacy {
        unavailable: true,
        ..InMemoryLegacy::with_fleet()
    });
    let response = app.get("/auctions/v1/health-check").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json(),
        json!({"status": "error", "dependencies": {"legacyApi": "error"}})
    );
}

#[tokio::test]
async fn test_list_vehicles_untouched() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());
    let response = app.get("/auctions/v1/vehicles").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json();
    assert_eq!(ids(&body), vec![1, 2, 3, 4]);
    assert_eq!(body[0]["lot"]["vehicleLotId"], "56001");
    assert_eq!(body[0]["bid"]["date"], "2020-08-25T10:00:00Z");
}

#[tokio::test]
async fn test_list_vehicles_filtered_and_sorted() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());

    let response = app
        .get("/auctions/v1/vehicles?brand=renault&bidOrder=asc")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(ids(&response.json()), vec![3, 1]);

    let response = app.get("/auctions/v1/vehicles?bidOrder=desc").await;
    assert_eq!(ids(&response.json()), vec![1, 3, 4, 2]);

    let response = app.get("/auctions/v1/vehicles?model=cl").await;
    assert_eq!(ids(&response.json()), vec![3]);

    let response = app
        .get("/auctions/v1/vehicles?manufacturingYearMin=2011&manufacturingYearMax=2011&manufacturingYear=2011&modelYear=2012")
        .await;
    assert_eq!(ids(&response.json()), vec![1, 2, 3, 4]);

    let response = app
        .get("/auctions/v1/vehicles?manufacturingYearMin=2012")
        .await;
    assert_eq!(ids(&response.json()), Vec::<i64>::new());
}

#[tokio::test]
async fn test_list_vehicles_invalid_query() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());

    for (query, message) in [
        ("manufacturingYearMin=a", "manufacturing year min is invalid"),
        ("manufacturingYearMin=2011&manufacturingYearMax=b", "manufacturing year max is invalid"),
        ("manufacturingYear=a&modelYear=2011", "manufacturing year is invalid"),
        ("manufacturingYear=2011&modelYear=a", "model year is invalid"),
        ("manufacturingYearMin=2011&manufacturingYearMax=2000", "year of manufacture max cannot be less than min"),
        ("manufacturingYear=2013&modelYear=2012", "year of manufacture cannot be greater than the model"),
    ] {
        let response = app.get(&format!("/auctions/v1/vehicles?{}", query)).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "query: {}", query);
        assert_eq!(response.json()["error"], message, "query: {}", query);
        assert_eq!(response.json()["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_list_vehicles_legacy_failure() {
    let app = TestApp::new(InMemoryLegacy {
        unavailable: true,
        ..InMemoryLegacy::with_fleet()
    });
    let response = app.get("/auctions/v1/vehicles").await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json(),
        json!({
            "error": "error when searching for vehicles in legacy api",
            "code": "INTERNAL_ERROR"
        })
    );
}

#[tokio::test]
async fn test_get_vehicle_by_position() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());
    let response = app.get("/auctions/v1/vehicles/2").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json();
    assert_eq!(body["vehicle"]["brand"], "FIAT");
    assert_eq!(
        body["links"],
        json!([
            {"uri": "/auctions/v1/vehicles/2", "rel": "self", "type": "PUT"},
            {"uri": "/auctions/v1/vehicles/2", "rel": "self", "type": "DELETE"}
        ])
    );
}

#[tokio::test]
async fn test_get_vehicle_invalid_ids() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());

    let response = app.get("/auctions/v1/vehicles/abc").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "id is invalid");

    for id in ["0", "-1", "5"] {
        let response = app.get(&format!("/auctions/v1/vehicles/{}", id)).await;
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "id: {}", id);
        assert_eq!(response.json()["error"], "invalid id", "id: {}", id);
    }
}

#[tokio::test]
async fn test_create_vehicle() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());
    let response = app.post("/auctions/v1/vehicles", VEHICLE_BODY).await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    assert_eq!(response.header("location"), Some("/auctions/v1/vehicles/765"));

    let body = response.json();
    assert_eq!(body["vehicle"]["id"], 765);
    assert_eq!(body["vehicle"]["model"], "CLIO 16VS");
    let methods: Vec<&str> = body["links"]
        .as_array()
        .unwrap()
        .iter()
        .map(|l| l["type"].as_str().unwrap())
        .collect();
    assert_eq!(methods, vec!["GET", "PUT", "DELETE"]);
}

#[tokio::test]
async fn test_create_vehicle_invalid_body() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());

    let response = app.post("/auctions/v1/vehicles", "{not json").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "body is invalid");

    let response = app
        .post(
            "/auctions/v1/vehicles",
            r#"{"brand":"","model":"UNO","modelYear":2007,"manufacturingYear":2007,"lot":{"id":"0196","vehicleLotId":"1"}}"#,
        )
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json();
    assert_eq!(body["error"], "body is invalid");
    assert!(body["details"].get("brand").is_some());
}

#[tokio::test]
async fn test_create_vehicle_legacy_failure() {
    let app = TestApp::new(InMemoryLegacy {
        unavailable: true,
        ..InMemoryLegacy::with_fleet()
    });
    let response = app.post("/auctions/v1/vehicles", VEHICLE_BODY).await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json()["error"],
        "error when registering vehicle in legacy api"
    );
}

#[tokio::test]
async fn test_update_vehicle() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());
    let response = app.put("/auctions/v1/vehicles/3", VEHICLE_BODY).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json();
    assert_eq!(body["vehicle"]["id"], 3);
    assert_eq!(body["vehicle"]["brand"], "RENAULT");
    assert_eq!(body["links"][0]["type"], "GET");
    assert_eq!(body["links"][1]["type"], "DELETE");
}

#[tokio::test]
async fn test_update_vehicle_errors() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());

    let response = app.put("/auctions/v1/vehicles/99", VEHICLE_BODY).await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "id not found");

    let response = app.put("/auctions/v1/vehicles/x", VEHICLE_BODY).await;
    assert_eq!(response.json()["error"], "id is invalid");

    let response = app.put("/auctions/v1/vehicles/0", VEHICLE_BODY).await;
    assert_eq!(response.json()["error"], "invalid id");

    let response = app.put("/auctions/v1/vehicles/3", "[]").await;
    assert_eq!(response.json()["error"], "body is invalid");
}

#[tokio::test]
async fn test_delete_vehicle() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());

    let response = app.delete("/auctions/v1/vehicles/4").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.is_empty());

    let response = app.delete("/auctions/v1/vehicles/99").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "id not found");

    let response = app.delete("/auctions/v1/vehicles/-2").await;
    assert_eq!(response.json()["error"], "invalid id");
}

#[tokio::test]
async fn test_lot_vehicles() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());

    let response = app.get("/auctions/v1/lots/0196/vehicles?bidOrder=asc").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(ids(&response.json()), vec![2, 1]);

    let response = app.get("/auctions/v1/lots/0999/vehicles").await;
    assert_eq!(ids(&response.json()), Vec::<i64>::new());

    let response = app.get("/auctions/v1/lots/%20/vehicles").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "invalid lot id");
}

#[tokio::test]
async fn test_unknown_route() {
    let app = TestApp::new(InMemoryLegacy::with_fleet());
    let response = app.get("/auctions/v2/vehicles").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json(),
        json!({"error": "route not found", "code": "NOT_FOUND"})
    );
}

#[tokio::test]
async fn test_end_to_end_against_legacy_server() {
    let (url, seen) = spawn_legacy(|command| match operation(command) {
        "consultar" => (
            StatusCode::OK,
            json!([
                {"ID": 10, "DATALANCE": "22/08/2020 - 09:48", "LOTE": "0196", "CODIGOCONTROLE": "1",
                 "MARCA": "RENAULT", "MODELO": "CLIO", "ANOFABRICACAO": 2007, "ANOMODELO": 2007,
                 "VALORLANCE": 15000.0, "USUARIOLANCE": "ALLBARBOS"},
                {"ID": 11, "DATALANCE": "23/08/2020 - 09:48", "LOTE": "0196", "CODIGOCONTROLE": "2",
                 "MARCA": "FIAT", "MODELO": "UNO", "ANOFABRICACAO": 2010, "ANOMODELO": 2010,
                 "VALORLANCE": 9000.0, "USUARIOLANCE": "JOAO"}
            ])
            .to_string(),
        ),
        "apagar" => (StatusCode::OK, "ID não encontrado".to_string()),
        _ => (StatusCode::INTERNAL_SERVER_ERROR, String::new()),
    })
    .await;

    let app = TestApp::with_state(AppState::new(test_config(&url)));

    let response = app.get("/auctions/v1/vehicles?bidOrder=desc").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(ids(&response.json()), vec![11, 10]);

    let response = app.get("/auctions/v1/health-check").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = app.delete("/auctions/v1/vehicles/10").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "id not found");

    let response = app.put("/auctions/v1/vehicles/10", VEHICLE_BODY).await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json()["error"],
        "error when updating vehicle in legacy api"
    );

    let operations: Vec<String> = seen
        .lock()
        .unwrap()
        .iter()
        .map(|c| operation(c).to_string())
        .collect();
    assert_eq!(operations, vec!["consultar", "consultar", "apagar", "alterar"]);
}
