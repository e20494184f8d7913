use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use uuid::Uuid;

use crate::controllers::vehicle_controller::VehicleController;
use crate::middleware::auth::{AdminStaff, AuthenticatedStaff};
use crate::models::vehicle::{
    CreateVehicleRequest, UpdateVehicleRequest, VehicleFilters, VehicleResponse,
};
use crate::models::SubjectStatus;
use crate::services::availability_service::AvailabilityWindow;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PageParams, Paginated};

pub fn create_vehicle_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_vehicles))
        .route("/", post(create_vehicle))
        .route("/:id", get(get_vehicle))
        .route("/:id", put(update_vehicle))
        .route("/:id", delete(delete_vehicle))
}

#[derive(Debug, Deserialize)]
struct VehicleListQuery {
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    status: Option<SubjectStatus>,
    model: Option<Uuid>,
    company: Option<Uuid>,
    page: Option<i64>,
    per_page: Option<i64>,
}

/// Listado público: no requiere identidad
async fn list_vehicles(
    State(state): State<AppState>,
    Query(query): Query<VehicleListQuery>,
) -> Result<Json<Paginated<VehicleResponse>>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let filters = VehicleFilters {
        status: query.status,
        model_id: query.model,
        company_id: query.company,
    };
    let window = AvailabilityWindow::from_bounds(query.start_time, query.end_time);
    let params = PageParams::new(query.page, query.per_page);

    let response = controller.list(filters, window, params).await?;
    Ok(Json(response))
}

async fn create_vehicle(
    State(state): State<AppState>,
    _admin: AdminStaff,
    Json(request): Json<CreateVehicleRequest>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_vehicle(
    State(state): State<AppState>,
    _auth: AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_vehicle(
    State(state): State<AppState>,
    _admin: AdminStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleRequest>,
) -> Result<Json<VehicleResponse>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_vehicle(
    State(state): State<AppState>,
    _admin: AdminStaff,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = VehicleController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(json!({
        "success": true,
        "message": "Vehículo eliminado exitosamente"
    })))
}
