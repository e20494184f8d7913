//! Repositorio del catálogo de modelos de vehículo

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle_model::{CreateVehicleModelRequest, VehicleModel, VehicleModelType};
use crate::utils::errors::AppResult;

pub struct VehicleModelRepository {
    pool: PgPool,
}

impl VehicleModelRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateVehicleModelRequest) -> AppResult<VehicleModel> {
        let model = sqlx::query_as::<_, VehicleModel>(
            r#"
            INSERT INTO vehicle_models (id, model_type, name, seats, amount, created_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.model_type)
        .bind(request.name)
        .bind(request.seats)
        .bind(request.amount)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(model)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<VehicleModel>> {
        let model = sqlx::query_as::<_, VehicleModel>("SELECT * FROM vehicle_models WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(model)
    }

    /// Listado del catálogo, sin paginar (es corto)
    pub async fn list(
        &self,
        model_type: Option<VehicleModelType>,
        model_id: Option<Uuid>,
    ) -> AppResult<Vec<VehicleModel>> {
        let models = sqlx::query_as::<_, VehicleModel>(
            r#"
            SELECT * FROM vehicle_models
            WHERE ($1::vehicle_model_type IS NULL OR model_type = $1)
              AND ($2::UUID IS NULL OR id = $2)
            ORDER BY name
            "#,
        )
        .bind(model_type)
        .bind(model_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(models)
    }
}
