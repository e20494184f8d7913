//! Repositorio de vehículos
//!
//! El listado aplica el mismo predicado de disponibilidad que el staff,
//! esta vez contra vehicle_orders.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::vehicle::{CreateVehicleRequest, UpdateVehicleRequest, Vehicle, VehicleFilters};
use crate::services::availability_service::AvailabilityWindow;
use crate::utils::errors::AppResult;
use crate::utils::pagination::PageParams;

pub struct VehicleRepository {
    pool: PgPool,
}

impl VehicleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            INSERT INTO vehicles (
                id, company_id, model_id, eng_no, chassis_no, traffic_plate_no,
                exp_date, reg_date, ins_exp, policy_no, status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, 'enabled', $11)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(request.company_id)
        .bind(request.model_id)
        .bind(request.eng_no)
        .bind(request.chassis_no)
        .bind(request.traffic_plate_no)
        .bind(request.exp_date)
        .bind(request.reg_date)
        .bind(request.ins_exp)
        .bind(request.policy_no)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Vehicle>> {
        let vehicle = sqlx::query_as::<_, Vehicle>("SELECT * FROM vehicles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(vehicle)
    }

    /// Verificar unicidad de los números identificatorios antes del alta
    ///
    /// Devuelve el nombre del primer campo en conflicto.
    pub async fn find_conflicting_identifier(
        &self,
        eng_no: &str,
        chassis_no: &str,
        traffic_plate_no: &str,
        policy_no: &str,
    ) -> AppResult<Option<&'static str>> {
        let (eng_taken, chassis_taken, plate_taken, policy_taken): (bool, bool, bool, bool) =
            sqlx::query_as(
                r#"
                SELECT
                    EXISTS(SELECT 1 FROM vehicles WHERE eng_no = $1),
                    EXISTS(SELECT 1 FROM vehicles WHERE chassis_no = $2),
                    EXISTS(SELECT 1 FROM vehicles WHERE traffic_plate_no = $3),
                    EXISTS(SELECT 1 FROM vehicles WHERE policy_no = $4)
                "#,
            )
            .bind(eng_no)
            .bind(chassis_no)
            .bind(traffic_plate_no)
            .bind(policy_no)
            .fetch_one(&self.pool)
            .await?;

        if eng_taken {
            Ok(Some("eng_no"))
        } else if chassis_taken {
            Ok(Some("chassis_no"))
        } else if plate_taken {
            Ok(Some("traffic_plate_no"))
        } else if policy_taken {
            Ok(Some("policy_no"))
        } else {
            Ok(None)
        }
    }

    /// Listar vehículos, opcionalmente filtrados por disponibilidad
    pub async fn list(
        &self,
        filters: VehicleFilters,
        window: Option<AvailabilityWindow>,
        params: PageParams,
    ) -> AppResult<(Vec<Vehicle>, i64)> {
        let (window_start, window_end) = match window {
            Some(w) => (Some(w.start_time), Some(w.end_time)),
            None => (None, None),
        };

        const BASE_WHERE: &str = r#"
            ($1::subject_status IS NULL OR v.status = $1)
              AND ($2::UUID IS NULL OR v.model_id = $2)
              AND ($3::UUID IS NULL OR v.company_id = $3)
              AND ($4::TIMESTAMPTZ IS NULL OR NOT EXISTS (
                    SELECT 1 FROM vehicle_orders o
                    WHERE o.vehicle_id = v.id
                      AND o.status <> 'void'
                      AND (o.start_time BETWEEN $4 AND $5
                        OR o.end_time BETWEEN $4 AND $5)
                  ))
        "#;

        let list_sql = format!(
            "SELECT v.* FROM vehicles v WHERE {BASE_WHERE} ORDER BY v.created_at DESC LIMIT $6 OFFSET $7"
        );
        let count_sql = format!("SELECT COUNT(*) FROM vehicles v WHERE {BASE_WHERE}");

        let vehicles = sqlx::query_as::<_, Vehicle>(&list_sql)
            .bind(filters.status)
            .bind(filters.model_id)
            .bind(filters.company_id)
            .bind(window_start)
            .bind(window_end)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await?;

        let total = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(filters.status)
            .bind(filters.model_id)
            .bind(filters.company_id)
            .bind(window_start)
            .bind(window_end)
            .fetch_one(&self.pool)
            .await?;

        Ok((vehicles, total))
    }

    /// Ids de los vehículos habilitados de un modelo de catálogo
    pub async fn ids_by_model(&self, model_id: Uuid) -> AppResult<Vec<Uuid>> {
        let ids = sqlx::query_scalar::<_, Uuid>(
            "SELECT id FROM vehicles WHERE model_id = $1 AND status = 'enabled'",
        )
        .bind(model_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(ids)
    }

    pub async fn update(&self, current: &Vehicle, request: UpdateVehicleRequest) -> AppResult<Vehicle> {
        let vehicle = sqlx::query_as::<_, Vehicle>(
            r#"
            UPDATE vehicles
            SET status = $2, exp_date = $3, ins_exp = $4, policy_no = $5, model_id = $6
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(current.id)
        .bind(request.status.unwrap_or(current.status))
        .bind(request.exp_date.unwrap_or(current.exp_date))
        .bind(request.ins_exp.unwrap_or(current.ins_exp))
        .bind(request.policy_no.unwrap_or_else(|| current.policy_no.clone()))
        .bind(request.model_id.unwrap_or(current.model_id))
        .fetch_one(&self.pool)
        .await?;

        Ok(vehicle)
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        sqlx::query("DELETE FROM vehicles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
