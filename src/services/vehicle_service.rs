//! Servicio de vehículos
//!
//! Orquesta el gateway legado con el orden y los filtros, y traduce cada
//! falla del legado a la taxonomía de errores de la API.

use std::sync::Arc;
use std::time::Duration;

use tracing::{error, info, warn};

use crate::clients::legacy_client::{LegacyApi, LegacyError};
use crate::models::vehicle::Vehicle;
use crate::services::filters::{apply_filters, VehicleFilter};
use crate::services::sorting::{sort_by_bid_date, SortDirection};
use crate::utils::errors::{internal_error, validation_error, AppError, AppResult};

const LIST_FAILURE: &str = "error when searching for vehicles in legacy api";
const CREATE_FAILURE: &str = "error when registering vehicle in legacy api";
const UPDATE_FAILURE: &str = "error when updating vehicle in legacy api";
const DELETE_FAILURE: &str = "error when deleting vehicle in legacy api";
const INVALID_ID: &str = "invalid id";
const INVALID_LOT_ID: &str = "invalid lot id";
const ID_NOT_FOUND: &str = "id not found";

#[derive(Clone)]
pub struct VehicleService {
    legacy: Arc<dyn LegacyApi>,
}

impl VehicleService {
    pub fn new(legacy: Arc<dyn LegacyApi>) -> Self {
        Self { legacy }
    }

    async fn fetch_all(&self, budget: Duration) -> AppResult<Vec<Vehicle>> {
        self.legacy.list(budget).await.map_err(|e| {
            error!("❌ Error consultando vehículos en el legado: {}", e);
            internal_error(LIST_FAILURE)
        })
    }

    /// Listar vehículos: primero se ordena, después se filtra
    pub async fn list(
        &self,
        filters: &[VehicleFilter],
        direction: SortDirection,
        budget: Duration,
    ) -> AppResult<Vec<Vehicle>> {
        let mut vehicles = self.fetch_all(budget).await?;
        sort_by_bid_date(&mut vehicles, direction);
        Ok(apply_filters(vehicles, filters))
    }

    /// Obtener un vehículo por su posición (1-based) en el listado del legado.
    ///
    /// La identidad es posicional, no el `ID` del legado: si el legado cambia
    /// el orden o el contenido del listado, el mismo `id` apunta a otro
    /// vehículo. Se conserva por compatibilidad con los clientes existentes.
    pub async fn get_by_id(&self, id: i64, budget: Duration) -> AppResult<Vehicle> {
        if id <= 0 {
            return Err(validation_error(INVALID_ID));
        }

        let vehicles = self.fetch_all(budget).await?;
        let position = usize::try_from(id - 1).map_err(|_| validation_error(INVALID_ID))?;

        vehicles
            .into_iter()
            .nth(position)
            .ok_or_else(|| validation_error(INVALID_ID))
    }

    /// Registrar un vehículo; el legado asigna el `id`
    pub async fn create(&self, mut vehicle: Vehicle, budget: Duration) -> AppResult<Vehicle> {
        match self.legacy.create(&mut vehicle, budget).await {
            Ok(()) if vehicle.is_registered() => {
                info!("✅ Vehículo registrado con id {}", vehicle.id);
                Ok(vehicle)
            }
            Ok(()) => {
                error!("❌ El legado no asignó id al vehículo creado");
                Err(internal_error(CREATE_FAILURE))
            }
            Err(e) => {
                error!("❌ Error registrando vehículo en el legado: {}", e);
                Err(internal_error(CREATE_FAILURE))
            }
        }
    }

    pub async fn update(&self, vehicle: &mut Vehicle, budget: Duration) -> AppResult<()> {
        if vehicle.id <= 0 {
            return Err(validation_error(INVALID_ID));
        }

        self.legacy
            .update(vehicle, budget)
            .await
            .map_err(|e| Self::map_write_error("alterar", UPDATE_FAILURE, vehicle.id, e))
    }

    pub async fn delete(&self, id: i64, budget: Duration) -> AppResult<()> {
        if id <= 0 {
            return Err(validation_error(INVALID_ID));
        }

        self.legacy
            .delete(id, budget)
            .await
            .map_err(|e| Self::map_write_error("apagar", DELETE_FAILURE, id, e))
    }

    /// Vehículos de un lote, con el orden pedido
    pub async fn by_lot(
        &self,
        lot_id: &str,
        direction: SortDirection,
        budget: Duration,
    ) -> AppResult<Vec<Vehicle>> {
        if lot_id.trim().is_empty() {
            return Err(validation_error(INVALID_LOT_ID));
        }
        self.list(&[VehicleFilter::lot(lot_id)], direction, budget)
            .await
    }

    /// Sondear el legado resolviendo el primer vehículo del listado
    pub async fn legacy_health(&self, budget: Duration) -> bool {
        match self.get_by_id(1, budget).await {
            Ok(_) => true,
            Err(e) => {
                warn!("⚠️ Health check del legado falló: {}", e);
                false
            }
        }
    }

    fn map_write_error(operation: &str, failure: &str, id: i64, e: LegacyError) -> AppError {
        if e.is_upstream_failure() {
            error!("❌ Legado {} falló para id {}: {}", operation, id, e);
            internal_error(failure)
        } else {
            validation_error(ID_NOT_FOUND)
        }
    }
}
