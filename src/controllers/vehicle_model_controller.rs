//! Controlador del catálogo de modelos
//!
//! El listado de venta devuelve cada entrada del catálogo con el número
//! de vehículos libres para la ventana consultada. El conteo usa el
//! predicado de disponibilidad en memoria sobre los rangos de órdenes.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::models::vehicle_model::{
    CreateVehicleModelRequest, VehicleModel, VehicleModelSellResponse, VehicleModelType,
};
use crate::repositories::order_repository::OrderRepository;
use crate::repositories::vehicle_model_repository::VehicleModelRepository;
use crate::repositories::vehicle_repository::VehicleRepository;
use crate::services::availability_service::{filter_available, AvailabilityWindow};
use crate::utils::errors::AppResult;

pub struct VehicleModelController {
    repository: VehicleModelRepository,
    vehicles: VehicleRepository,
    orders: OrderRepository,
}

impl VehicleModelController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: VehicleModelRepository::new(pool.clone()),
            vehicles: VehicleRepository::new(pool.clone()),
            orders: OrderRepository::new(pool),
        }
    }

    pub async fn create(&self, request: CreateVehicleModelRequest) -> AppResult<VehicleModel> {
        request.validate()?;

        let model = self.repository.create(request).await?;

        tracing::info!("🚙 Modelo de catálogo creado: {} ({})", model.name, model.id);

        Ok(model)
    }

    /// Listado de venta con conteo de disponibilidad por modelo
    pub async fn sell_list(
        &self,
        model_type: Option<VehicleModelType>,
        model_id: Option<Uuid>,
        window: Option<AvailabilityWindow>,
    ) -> AppResult<Vec<VehicleModelSellResponse>> {
        let models = self.repository.list(model_type, model_id).await?;

        let mut responses = Vec::with_capacity(models.len());
        for model in models {
            let vehicle_ids = self.vehicles.ids_by_model(model.id).await?;

            let available_count = if vehicle_ids.is_empty() {
                0
            } else {
                let spans = self.orders.vehicle_order_spans(&vehicle_ids).await?;
                filter_available(&vehicle_ids, &spans, window.as_ref()).len() as i64
            };

            responses.push(VehicleModelSellResponse::from_model(model, available_count));
        }

        Ok(responses)
    }
}
