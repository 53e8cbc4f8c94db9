use std::time::Duration;

use tracing::info;

use crate::dto::health_dto::HealthCheckResponse;
use crate::services::vehicle_service::VehicleService;
use crate::state::AppState;

pub struct HealthController {
    service: VehicleService,
    read_timeout: Duration,
}

impl HealthController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: state.vehicles.clone(),
            read_timeout: state.config.legacy_read_timeout,
        }
    }

    pub async fn check(&self) -> HealthCheckResponse {
        let legacy_ok = self.service.legacy_health(self.read_timeout).await;
        if legacy_ok {
            info!("💚 Health check OK");
        }
        HealthCheckResponse::from_legacy(legacy_ok)
    }
}
