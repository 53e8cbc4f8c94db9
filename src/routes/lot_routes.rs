use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};

use crate::controllers::lot_controller::LotController;
use crate::dto::vehicle_dto::LotQuery;
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_lot_router() -> Router<AppState> {
    Router::new().route("/:id/vehicles", get(list_lot_vehicles))
}

async fn list_lot_vehicles(
    State(state): State<AppState>,
    Path(lot_id): Path<String>,
    Query(query): Query<LotQuery>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = LotController::new(&state);
    let vehicles = controller.vehicles(&lot_id, query).await?;
    Ok(Json(vehicles))
}
