#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, HeaderMap, Method, Request, StatusCode},
    routing::post,
    Json, Router,
};
use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use std::time::Duration;
use tower::ServiceExt;

use auction_facade::clients::legacy_client::{LegacyApi, LegacyError};
use auction_facade::config::environment::EnvironmentConfig;
use auction_facade::models::vehicle::{Bid, Lot, Vehicle};
use auction_facade::routes::create_router;
use auction_facade::state::AppState;

pub const LEGACY_PATH: &str = "/veiculo";

/// Configuración mínima de pruebas apuntando a `legacy_url`
pub fn test_config(legacy_url: &str) -> EnvironmentConfig {
    let legacy_url = legacy_url.to_string();
    EnvironmentConfig::from_lookup(move |name: &str| match name {
        "PORT" => Some("3000".to_string()),
        "LEGACY_API_URL" => Some(legacy_url.clone()),
        _ => None,
    })
    .expect("test config is valid")
}

/// Servidor legado falso en 127.0.0.1:0.
///
/// Devuelve la URL del endpoint y los comandos recibidos, en orden.
pub async fn spawn_legacy<F>(reply: F) -> (String, Arc<Mutex<Vec<Value>>>)
where
    F: Fn(&Value) -> (StatusCode, String) + Clone + Send + Sync + 'static,
{
    let seen: Arc<Mutex<Vec<Value>>> = Arc::new(Mutex::new(Vec::new()));
    let recorded = seen.clone();

    let app = Router::new().route(
        LEGACY_PATH,
        post(move |Json(command): Json<Value>| {
            let reply = reply.clone();
            let recorded = recorded.clone();
            async move {
                let response = reply(&command);
                recorded.lock().unwrap().push(command);
                response
            }
        }),
    );

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}{}", addr, LEGACY_PATH), seen)
}

pub fn operation(command: &Value) -> &str {
    command["OPERACAO"].as_str().unwrap_or_default()
}

pub fn vehicle(id: i64, brand: &str, model: &str, lot: &str, day: u32) -> Vehicle {
    Vehicle {
        id,
        brand: brand.to_string(),
        model: model.to_string(),
        model_year: 2012,
        manufacturing_year: 2011,
        lot: Lot {
            id: lot.to_string(),
            vehicle_lot_id: format!("{}", 56000 + id),
        },
        bid: Bid {
            date: Utc.with_ymd_and_hms(2020, 8, day, 10, 0, 0).unwrap(),
            value: Decimal::from(10000 + id),
            user: "ALLBARBOS".to_string(),
        },
    }
}

pub fn fleet() -> Vec<Vehicle> {
    vec![
        vehicle(1, "RENAULT", "SANDERO", "0196", 25),
        vehicle(2, "FIAT", "UNO", "0196", 21),
        vehicle(3, "RENAULT", "CLIO 16VS", "0201", 23),
        vehicle(4, "VOLKSWAGEN", "GOL", "0201", 22),
    ]
}

/// Legado en memoria para las pruebas de la API
#[derive(Default)]
pub struct InMemoryLegacy {
    pub vehicles: Vec<Vehicle>,
    pub unavailable: bool,
    pub next_id: i64,
}

impl InMemoryLegacy {
    pub fn with_fleet() -> Self {
        Self {
            vehicles: fleet(),
            next_id: 765,
            ..Default::default()
        }
    }

    fn check(&self) -> Result<(), LegacyError> {
        if self.unavailable {
            return Err(LegacyError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        Ok(())
    }

    fn known(&self, id: i64) -> Result<(), LegacyError> {
        self.check()?;
        if self.vehicles.iter().any(|v| v.id == id) {
            Ok(())
        } else {
            Err(LegacyError::NotFound)
        }
    }
}

#[async_trait]
impl LegacyApi for InMemoryLegacy {
    async fn list(&self, _budget: Duration) -> Result<Vec<Vehicle>, LegacyError> {
        self.check()?;
        Ok(self.vehicles.clone())
    }

    async fn create(&self, vehicle: &mut Vehicle, _budget: Duration) -> Result<(), LegacyError> {
        self.check()?;
        vehicle.id = self.next_id;
        Ok(())
    }

    async fn update(&self, vehicle: &Vehicle, _budget: Duration) -> Result<(), LegacyError> {
        self.known(vehicle.id)
    }

    async fn delete(&self, id: i64, _budget: Duration) -> Result<(), LegacyError> {
        self.known(id)
    }
}

pub struct TestResponse {
    status: StatusCode,
    headers: HeaderMap,
    body: Vec<u8>,
}

impl TestResponse {
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> Value {
        serde_json::from_slice(&self.body).expect("response body is JSON")
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Router de la aplicación manejado en memoria
pub struct TestApp {
    router: Router,
}

impl TestApp {
    pub fn new(legacy: InMemoryLegacy) -> Self {
        let state = AppState::with_legacy(test_config("http://legacy.invalid"), Arc::new(legacy));
        Self {
            router: create_router(state),
        }
    }

    pub fn with_state(state: AppState) -> Self {
        Self {
            router: create_router(state),
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<String>) -> TestResponse {
        let mut request = Request::builder().method(method).uri(uri);
        let body = match body {
            Some(json) => {
                request = request.header(header::CONTENT_TYPE, "application/json");
                Body::from(json)
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(request.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let headers = response.headers().clone();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        TestResponse {
            status,
            headers,
            body: body.to_vec(),
        }
    }

    pub async fn get(&self, uri: &str) -> TestResponse {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, json: &str) -> TestResponse {
        self.send(Method::POST, uri, Some(json.to_string())).await
    }

    pub async fn put(&self, uri: &str, json: &str) -> TestResponse {
        self.send(Method::PUT, uri, Some(json.to_string())).await
    }

    pub async fn delete(&self, uri: &str) -> TestResponse {
        self.send(Method::DELETE, uri, None).await
    }
}
