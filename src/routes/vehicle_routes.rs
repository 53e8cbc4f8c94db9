use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use crate::controllers::vehicle_controller::{parse_id, vehicle_uri, VehicleController};
use crate::dto::vehicle_dto::{VehicleQuery, VehicleRequest, VehicleResponse};
use crate::models::vehicle::Vehicle;
use crate::state::AppState;
use crate::utils::errors::{bad_request_error, AppError};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles).post(create_vehicle))
        .route(
            "/:id",
            get(get_vehicle).put(update_vehicle).delete(delete_vehicle),
        )
}

/// Cuerpo JSON del request; cualquier fallo de decodificación es "body is invalid"
pub(crate) fn body<T>(payload: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    payload
        .map(|Json(request)| request)
        .map_err(|e| {
            tracing::debug!("Body rechazado: {}", e);
            bad_request_error("body is invalid")
        })
}

async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleQuery>,
) -> Result<Json<Vec<Vehicle>>, AppError> {
    let controller = VehicleController::new(&state);
    let vehicles = controller.list(query).await?;
    Ok(Json(vehicles))
}

async fn get_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<VehicleResponse>, AppError> {
    let id = parse_id(&id)?;
    let controller = VehicleController::new(&state);
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    payload: Result<Json<VehicleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let request = body(payload)?;
    let controller = VehicleController::new(&state);
    let response = controller.create(request).await?;

    let location = vehicle_uri(response.vehicle.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(response),
    ))
}

async fn update_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<VehicleRequest>, JsonRejection>,
) -> Result<Json<VehicleResponse>, AppError> {
    let id = parse_id(&id)?;
    let request = body(payload)?;
    let controller = VehicleController::new(&state);
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&id)?;
    let controller = VehicleController::new(&state);
    controller.delete(id).await?;
    Ok(StatusCode::OK)
}
