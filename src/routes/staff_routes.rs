use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::controllers::staff_controller::StaffController;
use crate::middleware::auth::{AdminStaff, AuthenticatedStaff};
use crate::models::staff::{
    SignupRequest, StaffFilters, StaffResponse, UpdateStaffRequest, UploadPhotoRequest,
};
use crate::services::availability_service::AvailabilityWindow;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PageParams, Paginated};

pub fn create_staff_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/", get(list_staff))
        .route("/specialized", get(list_specialized_staff))
        .route("/me", get(get_self))
        .route("/me/photo", post(upload_photo))
        .route("/:id", get(get_staff))
        .route("/:id", put(update_staff))
        .route("/:id", delete(disable_staff))
}

#[derive(Debug, Deserialize)]
struct StaffListQuery {
    start_time: Option<DateTime<Utc>>,
    end_time: Option<DateTime<Utc>>,
    driver: Option<bool>,
    tourguide: Option<bool>,
    /// Modelo de vehículo, solo relevante para el listado especializado
    model: Option<Uuid>,
    page: Option<i64>,
    per_page: Option<i64>,
}

impl StaffListQuery {
    fn filters(&self) -> StaffFilters {
        StaffFilters {
            driver: self.driver,
            tourguide: self.tourguide,
            model_id: self.model,
        }
    }

    fn window(&self) -> Option<AvailabilityWindow> {
        AvailabilityWindow::from_bounds(self.start_time, self.end_time)
    }

    fn page_params(&self) -> PageParams {
        PageParams::new(self.page, self.per_page)
    }
}

/// Auto-registro: abierto, requiere el código de verificación de la empresa
async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<StaffResponse>, AppError> {
    let controller = StaffController::new(state.pool.clone(), state.config.clone());
    let response = controller.signup(request).await?;
    Ok(Json(response))
}

/// Listado de disponibilidad del pool general (solo admin)
async fn list_staff(
    State(state): State<AppState>,
    _admin: AdminStaff,
    Query(query): Query<StaffListQuery>,
) -> Result<Json<Paginated<StaffResponse>>, AppError> {
    let controller = StaffController::new(state.pool.clone(), state.config.clone());
    let response = controller
        .list_available(query.filters(), false, query.window(), query.page_params())
        .await?;
    Ok(Json(response))
}

/// Listado de disponibilidad del staff especializado por modelo (solo admin)
async fn list_specialized_staff(
    State(state): State<AppState>,
    _admin: AdminStaff,
    Query(query): Query<StaffListQuery>,
) -> Result<Json<Paginated<StaffResponse>>, AppError> {
    let controller = StaffController::new(state.pool.clone(), state.config.clone());
    let response = controller
        .list_available(query.filters(), true, query.window(), query.page_params())
        .await?;
    Ok(Json(response))
}

/// Registro propio del staff autenticado; 401 sin identidad
async fn get_self(auth: AuthenticatedStaff) -> Json<StaffResponse> {
    Json(auth.staff.into())
}

async fn upload_photo(
    State(state): State<AppState>,
    auth: AuthenticatedStaff,
    Json(request): Json<UploadPhotoRequest>,
) -> Result<Json<StaffResponse>, AppError> {
    let controller = StaffController::new(state.pool.clone(), state.config.clone());
    let response = controller.upload_photo(&auth.staff, request).await?;
    Ok(Json(response))
}

async fn get_staff(
    State(state): State<AppState>,
    auth: AuthenticatedStaff,
    Path(id): Path<Uuid>,
) -> Result<Json<StaffResponse>, AppError> {
    let controller = StaffController::new(state.pool.clone(), state.config.clone());
    let response = controller.get_by_id(id, &auth.staff).await?;
    Ok(Json(response))
}

async fn update_staff(
    State(state): State<AppState>,
    auth: AuthenticatedStaff,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateStaffRequest>,
) -> Result<Json<StaffResponse>, AppError> {
    let controller = StaffController::new(state.pool.clone(), state.config.clone());
    let response = controller.update(id, &auth.staff, request).await?;
    Ok(Json(response))
}

/// DELETE deshabilita: el staff nunca se borra físicamente
async fn disable_staff(
    State(state): State<AppState>,
    _admin: AdminStaff,
    Path(id): Path<Uuid>,
) -> Result<Json<StaffResponse>, AppError> {
    let controller = StaffController::new(state.pool.clone(), state.config.clone());
    let response = controller.disable(id).await?;
    Ok(Json(response))
}
