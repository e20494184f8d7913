use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["service"], "fleet-dispatch");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn test_login_requires_json_body() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::post("/api/auth/login")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Sin cuerpo JSON el extractor rechaza antes de llegar al handler
    assert_ne!(response.status(), StatusCode::OK);
    assert_ne!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_vehicle_list_is_public() {
    let app = create_test_app();
    // Listado de vehículos sin Authorization header
    let response = app
        .oneshot(Request::get("/api/vehicle").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(body["items"].is_array());
    assert_eq!(body["page"], 1);
}

#[tokio::test]
async fn test_vehicle_list_accepts_window_params() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::get(
                "/api/vehicle?start_time=2024-01-12T00:00:00Z&end_time=2024-01-20T00:00:00Z",
            )
            .body(Body::empty())
            .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_order_create_rejects_inverted_window() {
    let app = create_test_app();
    let response = app
        .oneshot(
            Request::post("/api/order/staff")
                .header("content-type", "application/json")
                .body(Body::from(
                    json!({
                        "staff_id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                        "amount": "100.00",
                        "start_time": "2024-01-15T00:00:00Z",
                        "end_time": "2024-01-10T00:00:00Z"
                    })
                    .to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["details"]["end_time"][0]["message"],
        "the end time must be after start time"
    );
}

// Router de test con handlers simulados, mismas formas de respuesta que la app real
fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "service": "fleet-dispatch",
                    "status": "healthy",
                    "timestamp": chrono::Utc::now().to_rfc3339(),
                }))
            }),
        )
        .route(
            "/api/auth/login",
            post(|Json(_body): Json<serde_json::Value>| async { "OK" }),
        )
        .route(
            "/api/vehicle",
            get(|| async {
                Json(json!({
                    "items": [],
                    "total": 0,
                    "page": 1,
                    "per_page": 20,
                    "total_pages": 0,
                }))
            }),
        )
        .route(
            "/api/order/staff",
            post(|Json(body): Json<serde_json::Value>| async move {
                let start = body["start_time"].as_str().unwrap_or_default();
                let end = body["end_time"].as_str().unwrap_or_default();
                if start > end {
                    // Misma forma que ErrorResponse para AppError::Validation
                    (
                        StatusCode::BAD_REQUEST,
                        Json(json!({
                            "error": "Validation Error",
                            "message": "The provided data is invalid",
                            "details": {
                                "end_time": [{
                                    "code": "invalid",
                                    "message": "the end time must be after start time",
                                }]
                            },
                            "code": "VALIDATION_ERROR",
                        })),
                    )
                } else {
                    (StatusCode::OK, Json(json!({ "order_no": "0000000000000000" })))
                }
            }),
        )
}
