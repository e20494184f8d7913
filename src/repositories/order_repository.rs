//! Repositorio de órdenes
//!
//! Las dos variantes (staff y vehículo) viven en tablas separadas y no
//! comparten mutaciones. Los listados excluyen siempre las órdenes
//! anuladas.

use sqlx::PgPool;
use uuid::Uuid;

use crate::models::order::{
    CreateStaffOrderRequest, CreateVehicleOrderRequest, OrderFilters, StaffOrder,
    UpdateStaffOrderRequest, UpdateVehicleOrderRequest, VehicleOrder,
};
use crate::services::availability_service::OrderSpan;
use crate::utils::errors::AppResult;
use crate::utils::pagination::PageParams;

pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_staff_order(
        &self,
        order_no: String,
        request: CreateStaffOrderRequest,
    ) -> AppResult<StaffOrder> {
        let order = sqlx::query_as::<_, StaffOrder>(
            r#"
            INSERT INTO staff_orders (
                id, order_no, staff_id, amount, start_time, end_time,
                status, pay_status, client_type, settle_status, staff_confirm, remark, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, 'open', 'unpaid', $7, 'unsettled', 'wait', $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(order_no)
        .bind(request.staff_id)
        .bind(request.amount)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(request.client_type.unwrap_or(crate::models::order::ClientType::Company))
        .bind(request.remark.unwrap_or_default())
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    pub async fn create_vehicle_order(
        &self,
        order_no: String,
        request: CreateVehicleOrderRequest,
    ) -> AppResult<VehicleOrder> {
        let order = sqlx::query_as::<_, VehicleOrder>(
            r#"
            INSERT INTO vehicle_orders (
                id, order_no, vehicle_id, amount, start_time, end_time,
                status, pay_status, client_type, pickup_type, remark, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, 'open', 'unpaid', $7, $8, $9, $10)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(order_no)
        .bind(request.vehicle_id)
        .bind(request.amount)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(request.client_type.unwrap_or(crate::models::order::ClientType::Company))
        .bind(
            request
                .pickup_type
                .unwrap_or(crate::models::order::PickupType::SelfPickup),
        )
        .bind(request.remark.unwrap_or_default())
        .bind(chrono::Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    pub async fn find_staff_order(&self, id: Uuid) -> AppResult<Option<StaffOrder>> {
        let order = sqlx::query_as::<_, StaffOrder>("SELECT * FROM staff_orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    pub async fn find_vehicle_order(&self, id: Uuid) -> AppResult<Option<VehicleOrder>> {
        let order = sqlx::query_as::<_, VehicleOrder>("SELECT * FROM vehicle_orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(order)
    }

    /// Listar órdenes de staff; las anuladas nunca aparecen
    pub async fn list_staff_orders(
        &self,
        filters: OrderFilters,
        params: PageParams,
    ) -> AppResult<(Vec<StaffOrder>, i64)> {
        const BASE_WHERE: &str = r#"
            o.status <> 'void'
              AND ($1::UUID IS NULL OR o.staff_id = $1)
              AND ($2::order_status IS NULL OR o.status = $2)
        "#;

        let list_sql = format!(
            "SELECT o.* FROM staff_orders o WHERE {BASE_WHERE} ORDER BY o.created_at DESC LIMIT $3 OFFSET $4"
        );
        let count_sql = format!("SELECT COUNT(*) FROM staff_orders o WHERE {BASE_WHERE}");

        let orders = sqlx::query_as::<_, StaffOrder>(&list_sql)
            .bind(filters.subject_id)
            .bind(filters.status)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await?;

        let total = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(filters.subject_id)
            .bind(filters.status)
            .fetch_one(&self.pool)
            .await?;

        Ok((orders, total))
    }

    /// Listar órdenes de vehículo; las anuladas nunca aparecen
    pub async fn list_vehicle_orders(
        &self,
        filters: OrderFilters,
        params: PageParams,
    ) -> AppResult<(Vec<VehicleOrder>, i64)> {
        const BASE_WHERE: &str = r#"
            o.status <> 'void'
              AND ($1::UUID IS NULL OR o.vehicle_id = $1)
              AND ($2::order_status IS NULL OR o.status = $2)
        "#;

        let list_sql = format!(
            "SELECT o.* FROM vehicle_orders o WHERE {BASE_WHERE} ORDER BY o.created_at DESC LIMIT $3 OFFSET $4"
        );
        let count_sql = format!("SELECT COUNT(*) FROM vehicle_orders o WHERE {BASE_WHERE}");

        let orders = sqlx::query_as::<_, VehicleOrder>(&list_sql)
            .bind(filters.subject_id)
            .bind(filters.status)
            .bind(params.limit())
            .bind(params.offset())
            .fetch_all(&self.pool)
            .await?;

        let total = sqlx::query_scalar::<_, i64>(&count_sql)
            .bind(filters.subject_id)
            .bind(filters.status)
            .fetch_one(&self.pool)
            .await?;

        Ok((orders, total))
    }

    pub async fn update_staff_order(
        &self,
        current: &StaffOrder,
        request: UpdateStaffOrderRequest,
    ) -> AppResult<StaffOrder> {
        let order = sqlx::query_as::<_, StaffOrder>(
            r#"
            UPDATE staff_orders
            SET status = $2, pay_status = $3, settle_status = $4, staff_confirm = $5,
                start_time = $6, end_time = $7, remark = $8
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(current.id)
        .bind(request.status.unwrap_or(current.status))
        .bind(request.pay_status.unwrap_or(current.pay_status))
        .bind(request.settle_status.unwrap_or(current.settle_status))
        .bind(request.staff_confirm.unwrap_or(current.staff_confirm))
        .bind(request.start_time.unwrap_or(current.start_time))
        .bind(request.end_time.unwrap_or(current.end_time))
        .bind(request.remark.unwrap_or_else(|| current.remark.clone()))
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    pub async fn update_vehicle_order(
        &self,
        current: &VehicleOrder,
        request: UpdateVehicleOrderRequest,
    ) -> AppResult<VehicleOrder> {
        let order = sqlx::query_as::<_, VehicleOrder>(
            r#"
            UPDATE vehicle_orders
            SET status = $2, pay_status = $3, pickup_type = $4,
                start_time = $5, end_time = $6, remark = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(current.id)
        .bind(request.status.unwrap_or(current.status))
        .bind(request.pay_status.unwrap_or(current.pay_status))
        .bind(request.pickup_type.unwrap_or(current.pickup_type))
        .bind(request.start_time.unwrap_or(current.start_time))
        .bind(request.end_time.unwrap_or(current.end_time))
        .bind(request.remark.unwrap_or_else(|| current.remark.clone()))
        .fetch_one(&self.pool)
        .await?;

        Ok(order)
    }

    /// Rangos de las órdenes de un conjunto de vehículos
    ///
    /// Se traen todas (incluidas las anuladas): es el predicado de
    /// disponibilidad quien decide cuáles cuentan como conflicto.
    pub async fn vehicle_order_spans(&self, vehicle_ids: &[Uuid]) -> AppResult<Vec<OrderSpan>> {
        let spans = sqlx::query_as::<_, OrderSpan>(
            r#"
            SELECT vehicle_id AS subject_id, start_time, end_time, status
            FROM vehicle_orders
            WHERE vehicle_id = ANY($1)
            "#,
        )
        .bind(vehicle_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(spans)
    }
}
