//! Cliente HTTP para la API legada de vehículos
//!
//! Todas las operaciones van por un único endpoint POST; la operación viaja en
//! el campo `OPERACAO` del cuerpo. Este módulo traduce hacia y desde el formato
//! legado y clasifica las fallas del legado en un contrato estructurado.

use std::time::Duration;

use async_trait::async_trait;
use lazy_static::lazy_static;
use regex::Regex;
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::models::legacy_vehicle::{LegacyCommand, LegacyOperation, LegacyVehicle};
use crate::models::vehicle::Vehicle;

lazy_static! {
    /// Marcador de "no encontrado" que el legado devuelve con status 200
    static ref NOT_FOUND_MARKER: Regex =
        Regex::new(r"(?i)(n[ãa]o\s+encontrad[oa]|id\s+not\s+found)")
            .expect("not-found marker regex is valid");
}

/// Errores del gateway legado
#[derive(Error, Debug)]
pub enum LegacyError {
    #[error("legacy api request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("legacy api answered with status {0}")]
    Status(StatusCode),

    #[error("legacy api payload could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("id not found")]
    NotFound,
}

impl LegacyError {
    /// Todo lo que no sea "no encontrado" es una falla del upstream
    pub fn is_upstream_failure(&self) -> bool {
        !matches!(self, LegacyError::NotFound)
    }
}

/// Resultado clasificado de una respuesta del legado
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LegacyReply {
    Success,
    NotFound,
    UpstreamFailure(StatusCode),
}

impl LegacyReply {
    /// Único punto donde se interpreta el cuerpo de `alterar`/`apagar`
    pub fn classify(status: StatusCode, body: &str) -> Self {
        if !status.is_success() {
            return LegacyReply::UpstreamFailure(status);
        }
        if NOT_FOUND_MARKER.is_match(body) {
            return LegacyReply::NotFound;
        }
        LegacyReply::Success
    }

    fn into_result(self) -> Result<(), LegacyError> {
        match self {
            LegacyReply::Success => Ok(()),
            LegacyReply::NotFound => Err(LegacyError::NotFound),
            LegacyReply::UpstreamFailure(status) => Err(LegacyError::Status(status)),
        }
    }
}

/// Contrato del gateway legado
///
/// `budget` es el tiempo máximo que el llamador concede a la llamada.
#[async_trait]
pub trait LegacyApi: Send + Sync {
    async fn list(&self, budget: Duration) -> Result<Vec<Vehicle>, LegacyError>;

    async fn create(&self, vehicle: &mut Vehicle, budget: Duration) -> Result<(), LegacyError>;

    async fn update(&self, vehicle: &Vehicle, budget: Duration) -> Result<(), LegacyError>;

    async fn delete(&self, id: i64, budget: Duration) -> Result<(), LegacyError>;
}

/// Cliente HTTP del legado
#[derive(Clone)]
pub struct LegacyClient {
    client: Client,
    base_url: String,
}

impl LegacyClient {
    /// Crear cliente con un `reqwest::Client` compartido
    pub fn new(base_url: String, client: Client) -> Self {
        Self { client, base_url }
    }

    async fn send(
        &self,
        operation: LegacyOperation,
        vehicle: &LegacyVehicle,
        budget: Duration,
    ) -> Result<(StatusCode, String), LegacyError> {
        let command = LegacyCommand { operation, vehicle };

        let response = self
            .client
            .post(&self.base_url)
            .header("Content-Type", "application/json")
            .timeout(budget)
            .json(&command)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!(
            "📡 Legado {} respondió {} ({} bytes)",
            operation.as_str(),
            status,
            body.len()
        );

        Ok((status, body))
    }
}

#[async_trait]
impl LegacyApi for LegacyClient {
    async fn list(&self, budget: Duration) -> Result<Vec<Vehicle>, LegacyError> {
        let blank = LegacyVehicle::blank();
        let (status, body) = self.send(LegacyOperation::List, &blank, budget).await?;

        if !status.is_success() {
            warn!("❌ Legado consultar falló con status {}", status);
            return Err(LegacyError::Status(status));
        }

        let records: Vec<LegacyVehicle> = serde_json::from_str(&body)?;
        let total = records.len();

        let vehicles: Vec<Vehicle> = records
            .into_iter()
            .filter_map(|record| {
                let id = record.id;
                match record.into_vehicle() {
                    Ok(vehicle) => Some(vehicle),
                    Err(e) => {
                        debug!("⚠️ Registro legado {} descartado, fecha inválida: {}", id, e);
                        None
                    }
                }
            })
            .collect();

        info!(
            "✅ Legado consultar: {} registros, {} descartados",
            vehicles.len(),
            total - vehicles.len()
        );
        Ok(vehicles)
    }

    async fn create(&self, vehicle: &mut Vehicle, budget: Duration) -> Result<(), LegacyError> {
        let legacy = LegacyVehicle::for_create(vehicle);
        let (status, body) = self.send(LegacyOperation::Create, &legacy, budget).await?;

        if !status.is_success() {
            warn!("❌ Legado criar falló con status {}", status);
            return Err(LegacyError::Status(status));
        }

        let created: LegacyVehicle = serde_json::from_str(&body)?;
        created.apply_identity(vehicle);

        info!("✅ Legado criar asignó id {}", vehicle.id);
        Ok(())
    }

    async fn update(&self, vehicle: &Vehicle, budget: Duration) -> Result<(), LegacyError> {
        let legacy = LegacyVehicle::for_update(vehicle);
        let (status, body) = self.send(LegacyOperation::Update, &legacy, budget).await?;

        let result = LegacyReply::classify(status, &body).into_result();
        if let Err(e) = &result {
            warn!("❌ Legado alterar id {}: {}", vehicle.id, e);
        }
        result
    }

    async fn delete(&self, id: i64, budget: Duration) -> Result<(), LegacyError> {
        let legacy = LegacyVehicle::for_delete(id);
        let (status, body) = self.send(LegacyOperation::Delete, &legacy, budget).await?;

        let result = LegacyReply::classify(status, &body).into_result();
        if let Err(e) = &result {
            warn!("❌ Legado apagar id {}: {}", id, e);
        }
        result
    }
}
