use axum::{extract::State, http::StatusCode, routing::get, Json, Router};

use crate::controllers::health_controller::HealthController;
use crate::dto::health_dto::HealthCheckResponse;
use crate::state::AppState;

pub fn create_health_router() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthCheckResponse>) {
    let controller = HealthController::new(&state);
    let response = controller.check().await;

    let status = if response.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(response))
}
