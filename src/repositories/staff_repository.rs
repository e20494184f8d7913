//! Repositorio de staff
//!
//! Incluye los listados de disponibilidad: el pool son los staff
//! habilitados que aceptan órdenes, y la ventana excluye a quien tenga
//! una orden no anulada con un extremo dentro del rango consultado.

use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::staff::{Staff, StaffFilters, UpdateStaffRequest};
use crate::models::SubjectStatus;
use crate::services::availability_service::AvailabilityWindow;
use crate::utils::errors::AppResult;
use crate::utils::pagination::PageParams;

/// Datos de un staff nuevo listos para insertar
pub struct NewStaff {
    pub company_id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub nickname: String,
    pub introduction: String,
    pub hour_pay: Decimal,
    pub driver: bool,
    pub tourguide: bool,
}

pub struct StaffRepository {
    pool: PgPool,
}

impl StaffRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new_staff: NewStaff) -> AppResult<Staff> {
        let staff = sqlx::query_as::<_, Staff>(
            r#"
            INSERT INTO staff (
                id, company_id, username, password_hash, name, phone, nickname,
                introduction, status, accept, hour_pay, driver, tourguide, is_admin, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'enabled', TRUE, $9, $10, $11, FALSE, $12)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new_staff.company_id)
        .bind(new_staff.username)
        .bind(new_staff.password_hash)
        .bind(new_staff.name)
        .bind(new_staff.phone)
        .bind(new_staff.nickname)
        .bind(new_staff.introduction)
        .bind(new_staff.hour_pay)
        .bind(new_staff.driver)
        .bind(new_staff.tourguide)
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(staff)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Staff>> {
        let staff = sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(staff)
    }

    pub async fn find_by_username(&self, username: &str) -> AppResult<Option<Staff>> {
        let staff = sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await?;

        Ok(staff)
    }

    /// Verificar unicidad de username, name y phone antes del alta
    ///
    /// Devuelve el nombre del primer campo en conflicto.
    pub async fn find_conflicting_field(
        &self,
        username: &str,
        name: &str,
        phone: &str,
    ) -> AppResult<Option<&'static str>> {
        let (username_taken, name_taken, phone_taken): (bool, bool, bool) = sqlx::query_as(
            r#"
            SELECT
                EXISTS(SELECT 1 FROM staff WHERE username = $1),
                EXISTS(SELECT 1 FROM staff WHERE name = $2),
                EXISTS(SELECT 1 FROM staff WHERE phone = $3)
            "#,
        )
        .bind(username)
        .bind(name)
        .bind(phone)
        .fetch_one(&self.pool)
        .await?;

        if username_taken {
            Ok(Some("username"))
        } else if name_taken {
            Ok(Some("name"))
        } else if phone_taken {
            Ok(Some("phone"))
        } else {
            Ok(None)
        }
    }

    /// Listar staff disponible para una ventana
    ///
    /// El pool es: habilitado, aceptando órdenes y, según `specialized`,
    /// con o sin especialización en un modelo de vehículo. Sin ventana
    /// completa no se filtra por conflicto.
    pub async fn list_available(
        &self,
        filters: StaffFilters,
        specialized: bool,
        window: Option<AvailabilityWindow>,
        params: PageParams,
    ) -> AppResult<(Vec<Staff>, i64)> {
        // La ventana llega con ambos extremos o no llega
        let (window_start, window_end) = match window {
            Some(w) => (Some(w.start_time), Some(w.end_time)),
            None => (None, None),
        };

        let model_clause = if specialized {
            "s.model_id IS NOT NULL"
        } else {
            "s.model_id IS NULL"
        };

        let base_where = format!(
            r#"
            s.status = 'enabled'
              AND s.accept = TRUE
              AND {model_clause}
              AND ($1::BOOLEAN IS NULL OR s.driver = $1)
              AND ($2::BOOLEAN IS NULL OR s.tourguide = $2)
              AND ($3::UUID IS NULL OR s.model_id = $3)
              AND ($4::TIMESTAMPTZ IS NULL OR NOT EXISTS (
                    SELECT 1 FROM staff_orders o
                    WHERE o.staff_id = s.id
                      AND o.status <> 'void'
                      AND (o.start_time BETWEEN $4 AND $5
                        OR o.end_time BETWEEN $4 AND $5)
                  ))
            "#
        );

        let list_sql = format!(
            "SELECT s.* FROM staff s WHERE {base_where} ORDER BY s.created_at DESC LIMIT $6 OFFSET $7"
        );
        let count_sql = format!("SELECT COUNT(*) FROM staff s WHERE {base_where}");

        let staff = sqlx::query_as::<_, Staff>(&list_sql)
            .bind(filters.driver)
            .bind(filters.tourguide)
            .bind(filters.model_id)
            .bind(window_start)
            .bind(window_end)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await?;

        let total = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(filters.driver)
            .bind(filters.tourguide)
            .bind(filters.model_id)
            .bind(window_start)
            .bind(window_end)
            .fetch_one(&self.pool)
            .await?;

        Ok((staff, total))
    }

    pub async fn update(&self, current: &Staff, request: UpdateStaffRequest) -> AppResult<Staff> {
        let staff = sqlx::query_as::<_, Staff>(
            r#"
            UPDATE staff
            SET nickname = $2, introduction = $3, phone = $4, accept = $5,
                status = $6, hour_pay = $7, driver = $8, tourguide = $9, model_id = $10
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(current.id)
        .bind(request.nickname.unwrap_or_else(|| current.nickname.clone()))
        .bind(
            request
                .introduction
                .unwrap_or_else(|| current.introduction.clone()),
        )
        .bind(request.phone.unwrap_or_else(|| current.phone.clone()))
        .bind(request.accept.unwrap_or(current.accept))
        .bind(request.status.unwrap_or(current.status))
        .bind(request.hour_pay.unwrap_or(current.hour_pay))
        .bind(request.driver.unwrap_or(current.driver))
        .bind(request.tourguide.unwrap_or(current.tourguide))
        .bind(request.model_id.or(current.model_id))
        .fetch_one(&self.pool)
        .await?;

        Ok(staff)
    }

    pub async fn update_photo(&self, id: Uuid, photo: &str) -> AppResult<Staff> {
        let staff = sqlx::query_as::<_, Staff>(
            "UPDATE staff SET photo = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(photo)
        .fetch_one(&self.pool)
        .await?;

        Ok(staff)
    }

    /// Deshabilitar en lugar de borrar: los staff nunca se eliminan físicamente
    pub async fn disable(&self, id: Uuid) -> AppResult<Staff> {
        let staff = sqlx::query_as::<_, Staff>(
            "UPDATE staff SET status = $2, accept = FALSE WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(SubjectStatus::Disabled)
        .fetch_one(&self.pool)
        .await?;

        Ok(staff)
    }
}
