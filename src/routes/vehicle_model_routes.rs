use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::vehicle_model_controller::VehicleModelController;
use crate::middleware::auth::{AdminStaff, AuthenticatedStaff};
use crate::models::vehicle_model::{
    CreateVehicleModelRequest, VehicleModel, VehicleModelSellResponse, VehicleModelType,
};
use crate::services::availability_service::AvailabilityWindow;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_vehicle_model_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_vehicle_model))
        .route("/sell", get(sell_list))
}

#[derive(Debug, Deserialize)]
struct SellListQuery {
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    model_type: Option<VehicleModelType>,
    model: Option<Uuid>,
}

async fn create_vehicle_model(
    State(state): State<AppState>,
    _admin: AdminStaff,
    Json(request): Json<CreateVehicleModelRequest>,
) -> Result<Json<VehicleModel>, AppError> {
    let controller = VehicleModelController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

/// Catálogo de venta: cada modelo con sus vehículos libres en la ventana
async fn sell_list(
    State(state): State<AppState>,
    _auth: AuthenticatedStaff,
    Query(query): Query<SellListQuery>,
) -> Result<Json<Vec<VehicleModelSellResponse>>, AppError> {
    let controller = VehicleModelController::new(state.pool.clone());
    let window = AvailabilityWindow::from_bounds(query.start_time, query.end_time);
    let response = controller
        .sell_list(query.model_type, query.model, window)
        .await?;
    Ok(Json(response))
}
