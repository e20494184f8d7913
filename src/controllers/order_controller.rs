//! Controlador de órdenes
//!
//! Creación y actualización de las dos variantes. El invariante de
//! ventana se verifica antes de persistir; la actualización lo vuelve a
//! verificar sobre la ventana resultante.
//!
//! Nota: la creación no verifica conflictos de reserva ni toma locks;
//! dos creaciones concurrentes sobre el mismo sujeto con ventanas
//! solapadas pueden persistirse ambas. Un chequeo transaccional en el
//! store queda como pendiente explícito.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::models::order::{
    validate_time_range, CreateStaffOrderRequest, CreateVehicleOrderRequest, OrderFilters,
    StaffOrder, UpdateStaffOrderRequest, UpdateVehicleOrderRequest, VehicleOrder,
};
use crate::repositories::order_repository::OrderRepository;
use crate::repositories::staff_repository::StaffRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::utils::codes::generate_order_no;
use crate::utils::errors::{not_found_error, validation_error, AppResult};
use crate::utils::pagination::{PageParams, Paginated};

pub struct OrderController {
    repository: OrderRepository,
    staff: StaffRepository,
    vehicles: VehicleRepository,
}

impl OrderController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: OrderRepository::new(pool.clone()),
            staff: StaffRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool),
        }
    }

    pub async fn create_staff_order(
        &self,
        request: CreateStaffOrderRequest,
    ) -> AppResult<StaffOrder> {
        request.validate()?;
        validate_time_range(request.start_time, request.end_time)?;

        if self.staff.find_by_id(request.staff_id).await?.is_none() {
            return Err(validation_error("staff_id", "unknown staff"));
        }

        let order = self
            .repository
            .create_staff_order(generate_order_no(), request)
            .await?;

        tracing::info!("📋 Orden de staff creada: {}", order.order_no);

        Ok(order)
    }

    pub async fn create_vehicle_order(
        &self,
        request: CreateVehicleOrderRequest,
    ) -> AppResult<VehicleOrder> {
        request.validate()?;
        validate_time_range(request.start_time, request.end_time)?;

        if self.vehicles.find_by_id(request.vehicle_id).await?.is_none() {
            return Err(validation_error("vehicle_id", "unknown vehicle"));
        }

        let order = self
            .repository
            .create_vehicle_order(generate_order_no(), request)
            .await?;

        tracing::info!("📋 Orden de vehículo creada: {}", order.order_no);

        Ok(order)
    }

    pub async fn get_staff_order(&self, id: Uuid) -> AppResult<StaffOrder> {
        self.repository
            .find_staff_order(id)
            .await?
            .ok_or_else(|| not_found_error("StaffOrder", &id.to_string()))
    }

    pub async fn get_vehicle_order(&self, id: Uuid) -> AppResult<VehicleOrder> {
        self.repository
            .find_vehicle_order(id)
            .await?
            .ok_or_else(|| not_found_error("VehicleOrder", &id.to_string()))
    }

    pub async fn list_staff_orders(
        &self,
        filters: OrderFilters,
        params: PageParams,
    ) -> AppResult<Paginated<StaffOrder>> {
        let (orders, total) = self.repository.list_staff_orders(filters, params).await?;
        Ok(Paginated::new(orders, total, params))
    }

    pub async fn list_vehicle_orders(
        &self,
        filters: OrderFilters,
        params: PageParams,
    ) -> AppResult<Paginated<VehicleOrder>> {
        let (orders, total) = self.repository.list_vehicle_orders(filters, params).await?;
        Ok(Paginated::new(orders, total, params))
    }

    pub async fn update_staff_order(
        &self,
        id: Uuid,
        request: UpdateStaffOrderRequest,
    ) -> AppResult<StaffOrder> {
        request.validate()?;

        let current = self
            .repository
            .find_staff_order(id)
            .await?
            .ok_or_else(|| not_found_error("StaffOrder", &id.to_string()))?;

        // El invariante se verifica sobre la ventana resultante
        let start_time = request.start_time.unwrap_or(current.start_time);
        let end_time = request.end_time.unwrap_or(current.end_time);
        validate_time_range(start_time, end_time)?;

        self.repository.update_staff_order(&current, request).await
    }

    pub async fn update_vehicle_order(
        &self,
        id: Uuid,
        request: UpdateVehicleOrderRequest,
    ) -> AppResult<VehicleOrder> {
        request.validate()?;

        let current = self
            .repository
            .find_vehicle_order(id)
            .await?
            .ok_or_else(|| not_found_error("VehicleOrder", &id.to_string()))?;

        let start_time = request.start_time.unwrap_or(current.start_time);
        let end_time = request.end_time.unwrap_or(current.end_time);
        validate_time_range(start_time, end_time)?;

        self.repository.update_vehicle_order(&current, request).await
    }
}
