mod config;
mod controllers;
mod database;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use config::EnvironmentConfig;
use middleware::cors::cors_middleware;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    let config = EnvironmentConfig::from_env();

    // Configurar logging
    let default_filter = if config.is_development() { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    info!("🚐 Fleet Dispatch - Backend de reservas de staff y vehículos");
    info!("=============================================================");

    // Inicializar base de datos
    let pool = match database::create_pool(None).await {
        Ok(pool) => pool,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let addr: SocketAddr = config.server_url().parse()?;
    let cors_origins = config.cors_origins.clone();
    let app_state = AppState::new(pool, config);

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/auth", routes::auth_routes::create_auth_router())
        .nest("/api/company", routes::company_routes::create_company_router())
        .nest("/api/staff", routes::staff_routes::create_staff_router())
        .nest("/api/vehicle", routes::vehicle_routes::create_vehicle_router())
        .nest(
            "/api/vehicle-model",
            routes::vehicle_model_routes::create_vehicle_model_router(),
        )
        .nest("/api/order", routes::order_routes::create_order_router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(cors_middleware(&cors_origins))
        .with_state(app_state);

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("🔑 Auth:");
    info!("   POST /api/auth/login - Login de staff (JWT)");
    info!("🏢 Company (admin):");
    info!("   POST /api/company - Crear empresa");
    info!("   GET  /api/company - Listar empresas");
    info!("👤 Staff:");
    info!("   POST /api/staff/signup - Auto-registro con código de empresa");
    info!("   GET  /api/staff - Disponibilidad del pool general (admin)");
    info!("   GET  /api/staff/specialized - Disponibilidad de especializados (admin)");
    info!("   GET  /api/staff/me - Registro propio");
    info!("   POST /api/staff/me/photo - Subir foto de perfil");
    info!("   GET  /api/staff/:id - Detalle (self o admin)");
    info!("   PUT  /api/staff/:id - Actualizar (self o admin)");
    info!("🚗 Vehicle:");
    info!("   GET  /api/vehicle - Listado público con filtro de disponibilidad");
    info!("   POST /api/vehicle - Registrar vehículo (admin)");
    info!("   GET  /api/vehicle/:id - Detalle");
    info!("   PUT  /api/vehicle/:id - Actualizar (admin)");
    info!("   DELETE /api/vehicle/:id - Eliminar (admin)");
    info!("🚙 Vehicle models:");
    info!("   POST /api/vehicle-model - Crear entrada de catálogo (admin)");
    info!("   GET  /api/vehicle-model/sell - Catálogo con conteo de disponibilidad");
    info!("📋 Orders:");
    info!("   GET/POST /api/order/staff - Órdenes de staff");
    info!("   GET/PUT  /api/order/staff/:id - Detalle y actualización");
    info!("   GET/POST /api/order/vehicle - Órdenes de vehículo");
    info!("   GET/PUT  /api/order/vehicle/:id - Detalle y actualización");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "service": "fleet-dispatch",
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal de terminación recibida, apagando servidor...");
        },
    }
}
