use std::time::Duration;

use crate::dto::vehicle_dto::LotQuery;
use crate::models::vehicle::Vehicle;
use crate::services::sorting::SortDirection;
use crate::services::vehicle_service::VehicleService;
use crate::state::AppState;
use crate::utils::errors::AppResult;

pub struct LotController {
    service: VehicleService,
    read_timeout: Duration,
}

impl LotController {
    pub fn new(state: &AppState) -> Self {
        Self {
            service: state.vehicles.clone(),
            read_timeout: state.config.legacy_read_timeout,
        }
    }

    /// Vehículos de un lote
    pub async fn vehicles(&self, lot_id: &str, query: LotQuery) -> AppResult<Vec<Vehicle>> {
        let direction = SortDirection::from_query(query.bid_order.as_deref());
        self.service
            .by_lot(lot_id, direction, self.read_timeout)
            .await
    }
}
