use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

impl From<bool> for HealthStatus {
    fn from(healthy: bool) -> Self {
        if healthy {
            HealthStatus::Ok
        } else {
            HealthStatus::Error
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dependencies {
    pub legacy_api: HealthStatus,
}

/// Estado del servicio y de sus dependencias
#[derive(Debug, Serialize)]
pub struct HealthCheckResponse {
    pub status: HealthStatus,
    pub dependencies: Dependencies,
}

impl HealthCheckResponse {
    pub fn from_legacy(legacy_ok: bool) -> Self {
        let legacy_api = HealthStatus::from(legacy_ok);
        Self {
            status: legacy_api,
            dependencies: Dependencies { legacy_api },
        }
    }

    pub fn is_healthy(&self) -> bool {
        self.status == HealthStatus::Ok
    }
}
