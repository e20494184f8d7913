use axum::{extract::State, routing::post, Json, Router};

use crate::services::auth_service::{AuthService, LoginRequest, LoginResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_auth_router() -> Router<AppState> {
    Router::new().route("/login", post(login))
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let service = AuthService::new(state.pool.clone(), state.config.clone());
    let response = service.login(request).await?;
    Ok(Json(response))
}
