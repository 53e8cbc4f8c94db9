use std::time::Duration;

use tracing::debug;
use validator::Validate;

use crate::dto::vehicle_dto::{VehicleQuery, VehicleRequest, VehicleResponse};
use crate::models::vehicle::Vehicle;
use crate::routes::API_PREFIX;
use crate::services::vehicle_service::VehicleService;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppResult};

pub struct VehicleController {
    service: VehicleService,
    read_timeout: Duration,
    write_timeout: Duration,
}

/// Interpretar el `id` de la ruta
pub fn parse_id(raw: &str) -> AppResult<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| bad_request_error("id is invalid"))
}

pub fn vehicle_uri(id: i64) -> String {
    format!("{}/vehicles/{}", API_PREFIX, id)
}

impl VehicleController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: state.vehicles.clone(),
            read_timeout: state.config.legacy_read_timeout,
            write_timeout: state.config.legacy_write_timeout,
        }
    }

    pub async fn list(&self, query: VehicleQuery) -> AppResult<Vec<Vehicle>> {
        let filters = query.filters()?;
        let direction = query.sort_direction();
        debug!("🔍 Listando vehículos: {} filtros, orden {:?}", filters.len(), direction);

        self.service
            .list(&filters, direction, self.read_timeout)
            .await
    }

    pub async fn get_by_id(&self, id: i64) -> AppResult<VehicleResponse> {
        let vehicle = self.service.get_by_id(id, self.read_timeout).await?;
        Ok(VehicleResponse::new(vehicle, &vehicle_uri(id), &["PUT", "DELETE"]))
    }

    pub async fn create(&self, request: VehicleRequest) -> AppResult<VehicleResponse> {
        request.validate()?;

        let vehicle = self
            .service
            .create(request.into_vehicle(0), self.write_timeout)
            .await?;
        let uri = vehicle_uri(vehicle.id);
        Ok(VehicleResponse::new(vehicle, &uri, &["GET", "PUT", "DELETE"]))
    }

    pub async fn update(&self, id: i64, request: VehicleRequest) -> AppResult<VehicleResponse> {
        request.validate()?;

        let mut vehicle = request.into_vehicle(id);
        self.service.update(&mut vehicle, self.write_timeout).await?;
        Ok(VehicleResponse::new(vehicle, &vehicle_uri(id), &["GET", "DELETE"]))
    }

    pub async fn delete(&self, id: i64) -> AppResult<()> {
        self.service.delete(id, self.read_timeout).await
    }
}
