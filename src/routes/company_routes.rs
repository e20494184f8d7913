use axum::{
    extract::{Query, State},
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;

use crate::controllers::company_controller::CompanyController;
use crate::middleware::auth::AdminStaff;
use crate::models::company::{CompanyResponse, CreateCompanyRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::pagination::{PageParams, Paginated};

pub fn create_company_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_company))
        .route("/", get(list_companies))
}

#[derive(Debug, Deserialize)]
struct CompanyListQuery {
    page: Option<i64>,
    per_page: Option<i64>,
}

async fn create_company(
    State(state): State<AppState>,
    _admin: AdminStaff,
    Json(request): Json<CreateCompanyRequest>,
) -> Result<Json<CompanyResponse>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_companies(
    State(state): State<AppState>,
    _admin: AdminStaff,
    Query(query): Query<CompanyListQuery>,
) -> Result<Json<Paginated<CompanyResponse>>, AppError> {
    let controller = CompanyController::new(state.pool.clone());
    let params = PageParams::new(query.page, query.per_page);
    let response = controller.list(params).await?;
    Ok(Json(response))
}
