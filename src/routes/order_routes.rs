use axum::{
    extract::{Path, Query, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::order_controller::OrderController;
use crate::middleware::auth::AuthenticatedStaff;
use crate::models::order::{
    CreateStaffOrderRequest, CreateVehicleOrderRequest, OrderFilters, OrderStatus, StaffOrder,
    UpdateStaffOrderRequest, UpdateVehicleOrderRequest, VehicleOrder,
};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PageParams, Paginated};

pub fn create_order_router() -> Router<AppState> {
    Router::new()
        .route("/staff", get(list_staff_orders))
        .route("/staff", post(create_staff_order))
        .route("/staff/:id", get(get_staff_order))
        .route("/staff/:id", put(update_staff_order))
        .route("/vehicle", get(list_vehicle_orders))
        .route("/vehicle", post(create_vehicle_order))
        .route("/vehicle/:id", get(get_vehicle_order))
        .route("/vehicle/:id", put(update_vehicle_order))
}

#[derive(Debug, Deserialize)]
struct OrderListQuery {
    /// Staff o vehículo según la variante listada
    subject: Option<Uuid>,
    status: Option<OrderStatus>,
    page: Option<i64>,
    per_page: Option<i64>,
}

impl OrderListQuery {
    fn filters(&self) -> OrderFilters {
        OrderFilters {
            subject_id: self.subject,
            status: self.status,
        }
    }

    fn page_params(&self) -> PageParams {
        PageParams::new(self.page, self.per_page)
    }
}

async fn list_staff_orders(
    State(state): State<AppState>,
    _auth: AuthenticatedStaff,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Paginated<StaffOrder>>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let response = controller
        .list_staff_orders(query.filters(), query.page_params())
        .await?;
    Ok(Json(response))
}

async fn create_staff_order(
    State(state): State<AppState>,
    _auth: AuthenticatedStaff,
    Json(request): Json<CreateStaffOrderRequest>,
) -> Result<Json<StaffOrder>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let response = controller.create_staff_order(request).await?;
    Ok(Json(response))
}

async fn get_staff_order(
    State(state): State<AppState>,
    _auth: AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> Result<Json<StaffOrder>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let response = controller.get_staff_order(id).await?;
    Ok(Json(response))
}

async fn update_staff_order(
    State(state): State<AppState>,
    _auth: AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStaffOrderRequest>,
) -> Result<Json<StaffOrder>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let response = controller.update_staff_order(id, request).await?;
    Ok(Json(response))
}

async fn list_vehicle_orders(
    State(state): State<AppState>,
    _auth: AuthenticatedStaff,
    Query(query): Query<OrderListQuery>,
) -> Result<Json<Paginated<VehicleOrder>>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let response = controller
        .list_vehicle_orders(query.filters(), query.page_params())
        .await?;
    Ok(Json(response))
}

async fn create_vehicle_order(
    State(state): State<AppState>,
    _auth: AuthenticatedStaff,
    Json(request): Json<CreateVehicleOrderRequest>,
) -> Result<Json<VehicleOrder>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let response = controller.create_vehicle_order(request).await?;
    Ok(Json(response))
}

async fn get_vehicle_order(
    State(state): State<AppState>,
    _auth: AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> Result<Json<VehicleOrder>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let response = controller.get_vehicle_order(id).await?;
    Ok(Json(response))
}

async fn update_vehicle_order(
    State(state): State<AppState>,
    _auth: AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateVehicleOrderRequest>,
) -> Result<Json<VehicleOrder>, AppError> {
    let controller = OrderController::new(state.pool.clone());
    let response = controller.update_vehicle_order(id, request).await?;
    Ok(Json(response))
}
