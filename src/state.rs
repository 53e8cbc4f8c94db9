//! Estado compartido de la aplicación
//!
//! Este módulo define el estado que se pasa a través del router de Axum.

use std::sync::Arc;

use reqwest::Client;

use crate::clients::legacy_client::{LegacyApi, LegacyClient};
use crate::config::environment::EnvironmentConfig;
use crate::services::vehicle_service::VehicleService;

#[derive(Clone)]
pub struct AppState {
    pub config: EnvironmentConfig,
    pub vehicles: VehicleService,
}

impl AppState {
    /// Estado de producción: cliente HTTP real contra el legado configurado
    pub fn new(config: EnvironmentConfig) -> Self {
        let legacy = LegacyClient::new(config.legacy_api_url.clone(), Client::new());
        Self::with_legacy(config, Arc::new(legacy))
    }

    /// Estado con una implementación arbitraria del legado
    pub fn with_legacy(config: EnvironmentConfig, legacy: Arc<dyn LegacyApi>) -> Self {
        Self {
            config,
            vehicles: VehicleService::new(legacy),
        }
    }
}
