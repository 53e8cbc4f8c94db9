//! Rutas HTTP del servicio
//!
//! Cada submódulo expone un `create_*_router()` que se anida bajo el
//! prefijo de la API.

pub mod health_routes;
pub mod lot_routes;
pub mod vehicle_routes;

use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::cors::cors_layer;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub const API_PREFIX: &str = "/auctions/v1";

/// Router completo de la aplicación
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origins);

    let api = Router::new()
        .nest("/health-check", health_routes::create_health_router())
        .nest("/vehicles", vehicle_routes::create_vehicle_router())
        .nest("/lots", lot_routes::create_lot_router());

    Router::new()
        .nest(API_PREFIX, api)
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn route_not_found() -> AppError {
    AppError::NotFound("route not found".to_string())
}
